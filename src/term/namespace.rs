use std::fmt::Display;

use crate::{GoError, GoResult};

/// The three independent ontologies (branches) of GO
///
/// Every term belongs to exactly one of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Namespace {
    /// `molecular_function`, `MF`
    MolecularFunction,
    /// `cellular_component`, `CC`
    CellularComponent,
    /// `biological_process`, `BP`
    #[default]
    BiologicalProcess,
}

impl Namespace {
    /// All namespaces, in `MF`, `CC`, `BP` order
    pub const ALL: [Namespace; 3] = [
        Namespace::MolecularFunction,
        Namespace::CellularComponent,
        Namespace::BiologicalProcess,
    ];

    /// Returns the two-letter abbreviation: `MF`, `CC` or `BP`
    ///
    /// # Examples
    ///
    /// ```
    /// use godag::Namespace;
    /// assert_eq!(Namespace::CellularComponent.abbreviation(), "CC");
    /// ```
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Namespace::MolecularFunction => "MF",
            Namespace::CellularComponent => "CC",
            Namespace::BiologicalProcess => "BP",
        }
    }

    /// Returns the name as used in the `namespace` tag of OBO files
    pub fn obo_name(&self) -> &'static str {
        match self {
            Namespace::MolecularFunction => "molecular_function",
            Namespace::CellularComponent => "cellular_component",
            Namespace::BiologicalProcess => "biological_process",
        }
    }

    /// Returns the aspect letter used by GO annotation files (`F`, `C`, `P`)
    pub fn aspect(&self) -> char {
        match self {
            Namespace::MolecularFunction => 'F',
            Namespace::CellularComponent => 'C',
            Namespace::BiologicalProcess => 'P',
        }
    }

    pub(crate) fn as_u8(self) -> u8 {
        match self {
            Namespace::MolecularFunction => 1,
            Namespace::CellularComponent => 2,
            Namespace::BiologicalProcess => 3,
        }
    }
}

impl TryFrom<&str> for Namespace {
    type Error = GoError;
    /// Accepts both the OBO name and the abbreviation
    ///
    /// # Errors
    ///
    /// [`GoError::InvalidInput`] for any other value
    fn try_from(value: &str) -> GoResult<Self> {
        match value.trim() {
            "molecular_function" | "MF" => Ok(Namespace::MolecularFunction),
            "cellular_component" | "CC" => Ok(Namespace::CellularComponent),
            "biological_process" | "BP" => Ok(Namespace::BiologicalProcess),
            other => Err(GoError::InvalidInput(format!(
                "unknown ontology namespace: {other}"
            ))),
        }
    }
}

impl TryFrom<u8> for Namespace {
    type Error = GoError;
    fn try_from(value: u8) -> GoResult<Self> {
        match value {
            1 => Ok(Namespace::MolecularFunction),
            2 => Ok(Namespace::CellularComponent),
            3 => Ok(Namespace::BiologicalProcess),
            _ => Err(GoError::ParseBinaryError),
        }
    }
}

impl Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}
