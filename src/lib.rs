#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
use core::fmt::Debug;
use std::num::{ParseIntError, TryFromIntError};
use thiserror::Error;

pub mod ontology;
pub mod parser;
pub mod subsume;
pub mod term;
pub mod xref;

pub use ontology::{Ontology, Partition, Relation};
pub use subsume::SubsumeTester;
pub use term::{GoGroup, GoTerm, GoTermId, Namespace};

const DEFAULT_NUM_PARENTS: usize = 10;
const DEFAULT_NUM_ALL_PARENTS: usize = 30;
const DEFAULT_NUM_ALT_IDS: usize = 2;
const MAX_NAME_LENGTH: usize = u16::MAX as usize;

/// Name of the ontology file inside the folder given to [`Ontology::from_standard`]
pub const OBO_FILENAME: &str = "go-basic.obo";

/// Main Error type for this crate
#[derive(Error, Debug)]
pub enum GoError {
    /// Indicates that a method or feature is not yet implemented
    #[error("not implemented")]
    NotImplemented,
    /// The typed [`GoTermId`] is not present in the ontology
    #[error("term does not exist")]
    DoesNotExist,
    /// An identifier could not be resolved by the ontology
    #[error("lookup failed: {0}")]
    LookupFailed(String),
    /// Parsing of an integer failed
    #[error("unable to parse Integer")]
    ParseIntError,
    /// Parsing of the binary data failed
    #[error("unable to parse binary data")]
    ParseBinaryError,
    /// Failed to open a file
    #[error("cannot open file {0}")]
    CannotOpenFile(String),
    /// An integer does not fit into the target type
    #[error("integer out of range")]
    TryFromIntError(#[from] TryFromIntError),
    /// Input data is invalid
    #[error("invalid input data: {0}")]
    InvalidInput(String),
    /// A remote record could not be retrieved
    #[error("unable to fetch remote record: {0}")]
    Fetch(String),
}

impl From<ParseIntError> for GoError {
    fn from(_: ParseIntError) -> Self {
        GoError::ParseIntError
    }
}

impl From<reqwest::Error> for GoError {
    fn from(err: reqwest::Error) -> Self {
        GoError::Fetch(err.to_string())
    }
}

/// Shortcut for `Result<T, GoError>`
pub type GoResult<T> = Result<T, GoError>;

/// Returns a `u32` from the first 4 bytes (big-endian)
///
/// # Panics
///
/// Panics if the slice holds less than 4 bytes
pub(crate) fn u32_from_bytes(bytes: &[u8]) -> u32 {
    u32::from_be_bytes(
        bytes[0..4]
            .try_into()
            .expect("try_into must work, because we use a fixed range"),
    )
}

/// Returns a `u16` from the first 2 bytes (big-endian)
///
/// # Panics
///
/// Panics if the slice holds less than 2 bytes
pub(crate) fn u16_from_bytes(bytes: &[u8]) -> u16 {
    u16::from_be_bytes([bytes[0], bytes[1]])
}
