//! Create [`GoTermInternal`] from binary representation

use super::Bytes;
use crate::term::internal::GoTermInternal;
use crate::term::Namespace;
use crate::{u16_from_bytes, u32_from_bytes, GoError, GoResult, GoTermId};

/// Creates a `GoTermInternal` from bytes
///
/// The binary layout is defined as:
///
/// | Byte offset | Number of bytes | Description |
/// | --- | --- | --- |
/// | 0 | 4 | The total length of the binary data blob as big-endian `u32` |
/// | 4 | 4 | The Term ID as big-endian `u32` |
/// | 8 | 1 | The namespace (1 = MF, 2 = CC, 3 = BP) |
/// | 9 | 1 | Flags, currently only obsolete |
/// | 10 | 4 | Term ID of a replacement term as big-endian `u32` or 0 if None |
/// | 14 | 2 | The length `n` of the name as big-endian `u16` |
/// | 16 | n | The name as UTF-8 |
/// | 16 + n | 2 | The length `d` of the definition as big-endian `u16` |
/// | 18 + n | d | The definition as UTF-8 |
/// | 18 + n + d | 2 | The number `a` of alternative ids as big-endian `u16` |
/// | 20 + n + d | 4 * a | The alternative ids as big-endian `u32` |
pub(crate) fn from_bytes_v1(bytes: Bytes) -> GoResult<GoTermInternal> {
    let mut reader = Reader::new(bytes);

    let total_len = reader.u32()? as usize;
    if total_len != bytes.len() {
        return Err(GoError::ParseBinaryError);
    }
    let id = GoTermId::from(reader.u32()?);
    let namespace = Namespace::try_from(reader.take(1)?[0])?;
    let flags = reader.take(1)?[0];
    let replacement = reader.u32()?;

    let name = reader.text()?;
    let mut term = GoTermInternal::new(name, id, namespace);
    *term.definition_mut() = reader.text()?;
    *term.obsolete_mut() = flags & 1u8 == 1u8;
    if replacement != 0 {
        *term.replacement_mut() = Some(replacement.into());
    }

    let n_alt = reader.u16()?;
    for _ in 0..n_alt {
        term.add_alt_id(reader.u32()?.into());
    }

    if reader.offset != bytes.len() {
        return Err(GoError::ParseBinaryError);
    }
    Ok(term)
}

/// Sequential reads with bounds checks
struct Reader<'a> {
    bytes: Bytes<'a>,
    offset: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: Bytes<'a>) -> Self {
        Self { bytes, offset: 0 }
    }

    fn take(&mut self, n: usize) -> GoResult<&'a [u8]> {
        let slice = self
            .bytes
            .get(self.offset..self.offset + n)
            .ok_or(GoError::ParseBinaryError)?;
        self.offset += n;
        Ok(slice)
    }

    fn u32(&mut self) -> GoResult<u32> {
        self.take(4).map(u32_from_bytes)
    }

    fn u16(&mut self) -> GoResult<u16> {
        self.take(2).map(u16_from_bytes)
    }

    fn text(&mut self) -> GoResult<String> {
        let len = usize::from(self.u16()?);
        let raw = self.take(len)?;
        String::from_utf8(raw.to_vec()).map_err(|_| GoError::ParseBinaryError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parser::binary::BinaryVersion;

    fn term() -> GoTermInternal {
        let mut term = GoTermInternal::new(
            "thiamin-triphosphatase activity".to_string(),
            50333u32.into(),
            Namespace::MolecularFunction,
        );
        *term.definition_mut() = "Catalysis of the reaction: thiamine triphosphate + H2O.".to_string();
        term.add_alt_id(48253u32.into());
        term
    }

    #[test]
    fn from_term_bytes() {
        let data = term().as_bytes();
        let parsed = from_bytes_v1(Bytes::new(&data, BinaryVersion::V1)).unwrap();

        assert_eq!(parsed.id(), &GoTermId::from(50333u32));
        assert_eq!(parsed.name(), "thiamin-triphosphatase activity");
        assert_eq!(parsed.namespace(), Namespace::MolecularFunction);
        assert_eq!(
            parsed.definition(),
            "Catalysis of the reaction: thiamine triphosphate + H2O."
        );
        assert_eq!(parsed.alt_ids(), &[GoTermId::from(48253u32)]);
        assert!(!parsed.obsolete());
        assert!(parsed.replacement().is_none());
    }

    #[test]
    fn obsolete_term() {
        let mut term = GoTermInternal::new(
            "obsolete cell".to_string(),
            5623u32.into(),
            Namespace::CellularComponent,
        );
        *term.obsolete_mut() = true;
        *term.replacement_mut() = Some(5575u32.into());

        let data = term.as_bytes();
        let parsed = from_bytes_v1(Bytes::new(&data, BinaryVersion::V1)).unwrap();
        assert!(parsed.obsolete());
        assert_eq!(parsed.replacement(), Some(GoTermId::from(5575u32)));
        assert!(parsed.definition().is_empty());
    }

    #[test]
    fn long_name_is_truncated() {
        let name = "ä".repeat(40_000);
        let term = GoTermInternal::new(name, 1u32.into(), Namespace::BiologicalProcess);
        let data = term.as_bytes();
        let parsed = from_bytes_v1(Bytes::new(&data, BinaryVersion::V1)).unwrap();
        assert_eq!(parsed.name().chars().count(), 32_767);
    }

    #[test]
    fn invalid_bytes() {
        let data = term().as_bytes();
        assert!(from_bytes_v1(Bytes::new(&data[..data.len() - 1], BinaryVersion::V1)).is_err());
        assert!(from_bytes_v1(Bytes::new(&data[..3], BinaryVersion::V1)).is_err());

        let mut invalid_namespace = data.clone();
        invalid_namespace[8] = 7;
        assert!(from_bytes_v1(Bytes::new(&invalid_namespace, BinaryVersion::V1)).is_err());
    }
}
