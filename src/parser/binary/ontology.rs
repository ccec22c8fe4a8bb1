//! Parsing the snapshot header
use crate::parser::binary::{BinaryVersion, Bytes, MAGIC};
use crate::{GoError, GoResult};

/// Identifies the encoding version of the provided binary data
///
/// Returns the data following the header
///
/// # Errors
///
/// This method can fail for the following reasons:
/// - Missing or incorrect header: [`GoError::ParseBinaryError`]
/// - Invalid version: [`GoError::NotImplemented`]
///
pub(crate) fn version(bytes: &[u8]) -> GoResult<Bytes> {
    if bytes.len() < MAGIC.len() + 1 || bytes[0..3] != MAGIC {
        return Err(GoError::ParseBinaryError);
    }
    let version = BinaryVersion::try_from(bytes[3])?;
    Ok(Bytes::new(&bytes[4..], version))
}
