use std::collections::HashMap;

use crate::term::internal::GoTermInternal;
use crate::GoTermId;

/// Owns all terms of the `Ontology`
///
/// Terms are stored in insertion order, a separate index
/// maps the [`GoTermId`] to the position of the term.
#[derive(Debug)]
pub(crate) struct Arena {
    terms: Vec<GoTermInternal>,
    index: HashMap<GoTermId, usize>,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            terms: Vec::with_capacity(50_000),
            index: HashMap::with_capacity(50_000),
        }
    }
}

impl Arena {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Adds the term to the arena
    ///
    /// An already present term with the same id is replaced.
    pub fn insert(&mut self, term: GoTermInternal) {
        let id = *term.id();
        match self.index.get(&id) {
            Some(&idx) => self.terms[idx] = term,
            None => {
                self.index.insert(id, self.terms.len());
                self.terms.push(term);
            }
        }
    }

    pub fn get(&self, id: GoTermId) -> Option<&GoTermInternal> {
        self.index.get(&id).map(|&idx| &self.terms[idx])
    }

    pub fn get_mut(&mut self, id: GoTermId) -> Option<&mut GoTermInternal> {
        match self.index.get(&id) {
            Some(&idx) => Some(&mut self.terms[idx]),
            None => None,
        }
    }

    pub fn contains(&self, id: GoTermId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn values(&self) -> std::slice::Iter<'_, GoTermInternal> {
        self.terms.iter()
    }

    pub fn values_mut(&mut self) -> std::slice::IterMut<'_, GoTermInternal> {
        self.terms.iter_mut()
    }

    pub fn keys(&self) -> Vec<GoTermId> {
        self.terms.iter().map(|term| *term.id()).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Namespace;

    #[test]
    fn insert_and_replace() {
        let mut arena = Arena::default();
        arena.insert(GoTermInternal::new(
            "nucleus".to_string(),
            5634u32.into(),
            Namespace::CellularComponent,
        ));
        arena.insert(GoTermInternal::new(
            "membrane".to_string(),
            16020u32.into(),
            Namespace::CellularComponent,
        ));
        assert_eq!(arena.len(), 2);

        arena.insert(GoTermInternal::new(
            "cell nucleus".to_string(),
            5634u32.into(),
            Namespace::CellularComponent,
        ));
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(5634u32.into()).unwrap().name(), "cell nucleus");
        assert_eq!(
            arena.keys(),
            vec![GoTermId::from(5634u32), GoTermId::from(16020u32)]
        );
        assert!(!arena.contains(1u32.into()));
    }
}
