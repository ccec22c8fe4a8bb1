use std::fmt::Display;
use std::str::FromStr;

use crate::{GoError, GoResult, Namespace};

/// The relationship that a [`Partition`] stores for every term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// All descendants (direct and indirect children)
    Offspring,
    /// All ancestors (direct and indirect parents)
    Ancestor,
    /// Direct children only
    Children,
    /// Direct parents only
    Parents,
}

impl Relation {
    fn table_suffix(self) -> &'static str {
        match self {
            Relation::Offspring => "OFFSPRING",
            Relation::Ancestor => "ANCESTOR",
            Relation::Children => "CHILDREN",
            Relation::Parents => "PARENTS",
        }
    }
}

/// A lookup table of the ontology: one [`Relation`] restricted to one [`Namespace`]
///
/// Partitions can be parsed from the classic table names, e.g.
/// `GOCCOFFSPRING` or `GOMFANCESTOR`.
///
/// # Examples
///
/// ```
/// use godag::{Namespace, Partition, Relation};
///
/// let partition: Partition = "GOCCOFFSPRING".parse().unwrap();
/// assert_eq!(partition.namespace(), Namespace::CellularComponent);
/// assert_eq!(partition.relation(), Relation::Offspring);
/// assert_eq!(partition.to_string(), "GOCCOFFSPRING");
///
/// assert!("GOXXOFFSPRING".parse::<Partition>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Partition {
    relation: Relation,
    namespace: Namespace,
}

impl Partition {
    /// Constructs a new [`Partition`]
    pub fn new(relation: Relation, namespace: Namespace) -> Self {
        Self {
            relation,
            namespace,
        }
    }

    /// The offspring table of the given namespace
    pub fn offspring(namespace: Namespace) -> Self {
        Self::new(Relation::Offspring, namespace)
    }

    /// The ancestor table of the given namespace
    pub fn ancestor(namespace: Namespace) -> Self {
        Self::new(Relation::Ancestor, namespace)
    }

    /// Returns the [`Relation`] of the partition
    pub fn relation(&self) -> Relation {
        self.relation
    }

    /// Returns the [`Namespace`] of the partition
    pub fn namespace(&self) -> Namespace {
        self.namespace
    }
}

impl FromStr for Partition {
    type Err = GoError;
    fn from_str(s: &str) -> GoResult<Self> {
        let invalid = || GoError::InvalidInput(format!("unknown partition: {s}"));

        let rest = s.strip_prefix("GO").ok_or_else(invalid)?;
        let namespace = rest
            .get(..2)
            .and_then(|abbr| Namespace::try_from(abbr).ok())
            .ok_or_else(invalid)?;
        let relation = match &rest[2..] {
            "OFFSPRING" => Relation::Offspring,
            "ANCESTOR" => Relation::Ancestor,
            "CHILDREN" => Relation::Children,
            "PARENTS" => Relation::Parents,
            _ => return Err(invalid()),
        };
        Ok(Partition::new(relation, namespace))
    }
}

impl TryFrom<&str> for Partition {
    type Error = GoError;
    fn try_from(value: &str) -> GoResult<Self> {
        value.parse()
    }
}

impl Display for Partition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GO{}{}",
            self.namespace.abbreviation(),
            self.relation.table_suffix()
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_all_tables() {
        for namespace in Namespace::ALL {
            for relation in [
                Relation::Offspring,
                Relation::Ancestor,
                Relation::Children,
                Relation::Parents,
            ] {
                let partition = Partition::new(relation, namespace);
                let parsed: Partition = partition.to_string().parse().unwrap();
                assert_eq!(parsed, partition);
            }
        }
    }

    #[test]
    fn parse_invalid() {
        assert!("GOCC".parse::<Partition>().is_err());
        assert!("GO".parse::<Partition>().is_err());
        assert!("CCOFFSPRING".parse::<Partition>().is_err());
        assert!("GOCCSIBLINGS".parse::<Partition>().is_err());
        assert!("GOTERM".parse::<Partition>().is_err());
    }
}
