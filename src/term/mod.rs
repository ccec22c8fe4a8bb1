//! [`GoTerm`]s are the main building block of the Gene Ontology
//!
//! Each term has a unique identifier ([`GoTermId`]), belongs to exactly one
//! [`Namespace`] and is connected to other terms via `is_a` and `part_of`
//! relationships. Groups of terms are represented as [`GoGroup`].
use crate::Ontology;

mod goterm;
mod gotermid;
mod group;
pub(crate) mod internal;
mod namespace;

pub use goterm::GoTerm;
pub use gotermid::GoTermId;
pub use group::{GoGroup, GoTermIds};
pub use namespace::Namespace;

/// An iterator of [`GoTerm`]s
///
/// Ids that are not present in the ontology are skipped
pub struct Iter<'a> {
    ids: std::slice::Iter<'a, GoTermId>,
    ontology: &'a Ontology,
}

impl<'a> Iter<'a> {
    /// Returns a new [`Iter`]
    pub(crate) fn new(ids: std::slice::Iter<'a, GoTermId>, ontology: &'a Ontology) -> Self {
        Iter { ids, ontology }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = GoTerm<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        for term_id in self.ids.by_ref() {
            if let Some(term) = self.ontology.get(*term_id) {
                return Some(GoTerm::new(self.ontology, term));
            }
        }
        None
    }
}

impl core::fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Iter<GoTerm>")
    }
}
