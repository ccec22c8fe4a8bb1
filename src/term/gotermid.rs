use core::fmt::Debug;
use std::fmt::Display;

use crate::{GoError, GoResult};

/// Number of digits of a GO accession
const ID_DIGITS: usize = 7;

/// The GO accession of a term, e.g. `GO:0005634`
///
/// Internally only the numerical part is stored as `u32`. The
/// textual representation is always `GO:` followed by 7 zero-padded digits.
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct GoTermId {
    inner: u32,
}

impl GoTermId {
    /// Returns the integer representation of the id
    ///
    /// # Examples
    ///
    /// ```
    /// use godag::GoTermId;
    ///
    /// let id = GoTermId::try_from("GO:0005634").unwrap();
    /// assert_eq!(id.as_u32(), 5634u32);
    /// ```
    pub fn as_u32(&self) -> u32 {
        self.inner
    }

    /// Returns the memory representation of the inner integer as a byte array in big-endian (network) byte order.
    pub fn to_be_bytes(&self) -> [u8; 4] {
        self.inner.to_be_bytes()
    }
}

impl TryFrom<&str> for GoTermId {
    type Error = GoError;
    /// Parses a GO accession
    ///
    /// Only the canonical form is accepted: `GO:` followed by exactly
    /// 7 ASCII digits, without surrounding whitespace.
    ///
    /// # Errors
    ///
    /// [`GoError::InvalidInput`]: The value is not a canonical GO accession
    fn try_from(s: &str) -> GoResult<Self> {
        let digits = s
            .strip_prefix("GO:")
            .filter(|digits| {
                digits.len() == ID_DIGITS && digits.bytes().all(|b| b.is_ascii_digit())
            })
            .ok_or_else(|| GoError::InvalidInput(format!("{s} is not a GO identifier")))?;
        Ok(GoTermId {
            inner: digits.parse::<u32>()?,
        })
    }
}

impl From<u32> for GoTermId {
    fn from(inner: u32) -> Self {
        Self { inner }
    }
}

impl From<[u8; 4]> for GoTermId {
    fn from(bytes: [u8; 4]) -> Self {
        Self {
            inner: u32::from_be_bytes(bytes),
        }
    }
}

impl Debug for GoTermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GoTermId({self})")
    }
}

impl Display for GoTermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GO:{:07}", self.inner)
    }
}

impl PartialEq<str> for GoTermId {
    fn eq(&self, other: &str) -> bool {
        GoTermId::try_from(other).map_or(false, |other| self == &other)
    }
}

impl PartialEq<&str> for GoTermId {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_valid() {
        let id = GoTermId::try_from("GO:0031676").unwrap();
        assert_eq!(id.as_u32(), 31676);
        assert_eq!(id.to_string(), "GO:0031676");
    }

    #[test]
    fn parse_invalid() {
        assert!(GoTermId::try_from("GO:0042716not").is_err());
        assert!(GoTermId::try_from("GO:AWAY").is_err());
        assert!(GoTermId::try_from("HP:0000118").is_err());
        assert!(GoTermId::try_from("").is_err());
    }

    #[test]
    fn parse_non_canonical() {
        for id in [
            "GO:5783",
            "GO:+0005783",
            " GO:0005783 ",
            "GO:0005783\n",
            "GO:00005783",
            "go:0005783",
            "GO:０００５７８３",
        ] {
            assert!(
                matches!(GoTermId::try_from(id), Err(GoError::InvalidInput(_))),
                "{id:?}"
            );
        }
        assert_eq!(GoTermId::try_from("GO:0005783").unwrap().as_u32(), 5783);
        assert_eq!(GoTermId::try_from("GO:9999999").unwrap().as_u32(), 9_999_999);
    }

    #[test]
    fn compare_to_str() {
        let id = GoTermId::from(5783u32);
        assert_eq!(id, "GO:0005783");
        assert!(id != "GO:0005784");
        assert!(id != "nucleus");
    }

    #[test]
    fn display_pads() {
        assert_eq!(GoTermId::from(1u32).to_string(), "GO:0000001");
        assert_eq!(format!("{:?}", GoTermId::from(8150u32)), "GoTermId(GO:0008150)");
    }
}
