//! The binary parser handles the parsing and generation of ontology
//! snapshots in binary format.
//!
//! Every snapshot starts with the `GOB` magic bytes, followed by a single
//! byte for the format version. Old formats stay readable, but only the
//! newest format is ever written.
pub(crate) mod ontology;
pub(crate) mod term;
use std::fmt::Display;

use crate::term::internal::GoTermInternal;
use crate::{u32_from_bytes, GoError, GoResult};

/// Header of every binary snapshot
pub(crate) const MAGIC: [u8; 3] = *b"GOB";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum BinaryVersion {
    V1,
}

impl BinaryVersion {
    pub fn as_u8(self) -> u8 {
        match self {
            BinaryVersion::V1 => 1,
        }
    }
}

impl TryFrom<u8> for BinaryVersion {
    type Error = GoError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1u8 => Ok(BinaryVersion::V1),
            _ => Err(GoError::NotImplemented),
        }
    }
}

impl Display for BinaryVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Raw snapshot data together with its format version
#[derive(Debug, Clone, Copy)]
pub(crate) struct Bytes<'a> {
    data: &'a [u8],
    version: BinaryVersion,
}

impl<'a> Bytes<'a> {
    pub fn new(data: &'a [u8], version: BinaryVersion) -> Self {
        Self { data, version }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn subset<T>(&self, idx: T) -> Bytes<'a>
    where
        T: std::slice::SliceIndex<[u8], Output = [u8]>,
    {
        Bytes::new(&self.data[idx], self.version)
    }

    pub fn get<T>(&self, idx: T) -> Option<&'a [u8]>
    where
        T: std::slice::SliceIndex<[u8], Output = [u8]>,
    {
        self.data.get(idx)
    }

    pub fn version(&self) -> BinaryVersion {
        self.version
    }

    /// Returns the big-endian `u32` of the first 4 bytes
    pub fn u32_prefix(&self) -> Option<u32> {
        self.data.get(0..4).map(u32_from_bytes)
    }
}

impl<Idx> std::ops::Index<Idx> for Bytes<'_>
where
    Idx: std::slice::SliceIndex<[u8]>,
{
    type Output = Idx::Output;

    fn index(&self, idx: Idx) -> &Self::Output {
        &self.data[idx]
    }
}

/// Builder to create multiple [`GoTermInternal`] from raw bytes
///
/// The iterator stops after the first invalid term.
pub(crate) struct BinaryTermBuilder<'a> {
    bytes: Bytes<'a>,
    offset: usize,
    failed: bool,
}

impl<'a> BinaryTermBuilder<'a> {
    /// Creates a new [`BinaryTermBuilder`]
    pub fn new(bytes: Bytes<'a>) -> Self {
        Self {
            bytes,
            offset: 0,
            failed: false,
        }
    }
}

impl Iterator for BinaryTermBuilder<'_> {
    type Item = GoResult<GoTermInternal>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let bytes = self.bytes.subset(self.offset..);
        if bytes.is_empty() {
            return None;
        }

        let term_len = match bytes.u32_prefix() {
            Some(len) if len as usize <= bytes.len() && len > 4 => len as usize,
            _ => {
                self.failed = true;
                return Some(Err(GoError::ParseBinaryError));
            }
        };

        self.offset += term_len;
        let term = match bytes.version() {
            BinaryVersion::V1 => term::from_bytes_v1(bytes.subset(..term_len)),
        };
        if term.is_err() {
            self.failed = true;
        }
        Some(term)
    }
}
