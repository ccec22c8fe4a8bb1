use std::ops::{BitAnd, BitOr};

use smallvec::SmallVec;

use crate::{GoTermId, Ontology};

const GROUP_CAPACITY: usize = 30;

/// A set of [`GoTermId`] representing a group of GO terms
///
/// Each term can occur only once in the group and the ids are always
/// kept in ascending order.
///
/// This group is used e.g. for the parents, children, ancestors or
/// offspring of a term and is the result type of all lookups of the
/// [`Ontology`] that return multiple terms.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GoGroup {
    ids: SmallVec<[GoTermId; GROUP_CAPACITY]>,
}

impl GoGroup {
    /// Constructs a new, empty [`GoGroup`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a new, empty [`GoGroup`] with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: SmallVec::with_capacity(capacity),
        }
    }

    /// Returns `true` if the group contains no [`GoTermId`]s
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the number of [`GoTermId`]s in the group
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Adds a new [`GoTermId`] to the group
    ///
    /// Returns whether the `GoTermId` was newly inserted. That is:
    ///
    /// - If the group did not previously contain this `GoTermId`, true is returned.
    /// - If the group already contained this `GoTermId`, false is returned.
    ///
    pub fn insert<I: Into<GoTermId>>(&mut self, id: I) -> bool {
        let id = id.into();
        match self.ids.binary_search(&id) {
            Ok(_) => false,
            Err(idx) => {
                self.ids.insert(idx, id);
                true
            }
        }
    }

    /// Returns `true` if the group contains the [`GoTermId`]
    pub fn contains(&self, id: &GoTermId) -> bool {
        self.ids.binary_search(id).is_ok()
    }

    /// Returns an Iterator of the [`GoTermId`]s inside the group
    pub fn iter(&self) -> GoTermIds {
        GoTermIds::new(self.ids.iter())
    }

    /// Returns an iterator of [`GoTerm`](crate::GoTerm)s of the group
    ///
    /// Ids that are not present in `ontology` are skipped.
    pub fn terms<'a>(&'a self, ontology: &'a Ontology) -> super::Iter<'a> {
        super::Iter::new(self.ids.iter(), ontology)
    }

    /// Returns the first [`GoTermId`] of the group
    pub fn first(&self) -> Option<GoTermId> {
        self.ids.first().copied()
    }

    /// Returns a new group without the ids that are contained in `other`
    pub fn difference(&self, other: &GoGroup) -> GoGroup {
        self.iter().filter(|id| !other.contains(id)).collect()
    }

    /// Returns the ids as `GO:xxxxxxx` strings
    ///
    /// # Examples
    ///
    /// ```
    /// use godag::GoGroup;
    ///
    /// let group: GoGroup = vec![5783u32.into(), 5634u32.into()].into_iter().collect();
    /// assert_eq!(group.to_strings(), vec!["GO:0005634", "GO:0005783"]);
    /// ```
    pub fn to_strings(&self) -> Vec<String> {
        self.iter().map(|id| id.to_string()).collect()
    }

    /// Returns a byte representation of the group
    ///
    /// Each id is encoded as big-endian `u32`
    pub fn as_bytes(&self) -> Vec<u8> {
        let mut res = Vec::with_capacity(self.len() * 4);
        for id in &self.ids {
            res.extend_from_slice(&id.to_be_bytes());
        }
        res
    }
}

impl FromIterator<GoTermId> for GoGroup {
    fn from_iter<T: IntoIterator<Item = GoTermId>>(iter: T) -> Self {
        let mut ids: SmallVec<[GoTermId; GROUP_CAPACITY]> = iter.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        Self { ids }
    }
}

impl Extend<GoTermId> for GoGroup {
    fn extend<T: IntoIterator<Item = GoTermId>>(&mut self, iter: T) {
        self.ids.extend(iter);
        self.ids.sort_unstable();
        self.ids.dedup();
    }
}

impl<'a> IntoIterator for &'a GoGroup {
    type Item = GoTermId;
    type IntoIter = GoTermIds<'a>;

    fn into_iter(self) -> GoTermIds<'a> {
        GoTermIds::new(self.ids.iter())
    }
}

/// An iterator over [`GoTermId`]s
pub struct GoTermIds<'a> {
    inner: std::slice::Iter<'a, GoTermId>,
}

impl<'a> GoTermIds<'a> {
    fn new(inner: std::slice::Iter<'a, GoTermId>) -> Self {
        Self { inner }
    }
}

impl Iterator for GoTermIds<'_> {
    type Item = GoTermId;
    fn next(&mut self) -> Option<GoTermId> {
        self.inner.next().copied()
    }
}

impl BitOr for &GoGroup {
    type Output = GoGroup;

    /// Merges two sorted groups
    fn bitor(self, rhs: &GoGroup) -> GoGroup {
        let mut group = GoGroup::with_capacity(self.len() + rhs.len());
        let mut left = self.ids.iter().copied().peekable();
        let mut right = rhs.ids.iter().copied().peekable();
        loop {
            let next = match (left.peek().copied(), right.peek().copied()) {
                (Some(l), Some(r)) if l < r => left.next(),
                (Some(l), Some(r)) if l > r => right.next(),
                (Some(_), Some(_)) => {
                    right.next();
                    left.next()
                }
                (Some(_), None) => left.next(),
                (None, Some(_)) => right.next(),
                (None, None) => break,
            };
            if let Some(id) = next {
                group.ids.push(id);
            }
        }
        group
    }
}

impl BitAnd for &GoGroup {
    type Output = GoGroup;

    fn bitand(self, rhs: &GoGroup) -> GoGroup {
        let (large, small) = if self.len() > rhs.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let mut group = GoGroup::with_capacity(small.len());
        for id in &small.ids {
            if large.contains(id) {
                group.ids.push(*id);
            }
        }
        group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(ids: &[u32]) -> GoGroup {
        ids.iter().map(|id| GoTermId::from(*id)).collect()
    }

    #[test]
    fn insert_keeps_order() {
        let mut g = GoGroup::new();
        assert!(g.insert(3u32));
        assert!(g.insert(1u32));
        assert!(g.insert(2u32));
        assert!(!g.insert(1u32));
        assert_eq!(g, group(&[1, 2, 3]));
        assert!(g.contains(&2u32.into()));
        assert!(!g.contains(&4u32.into()));
    }

    #[test]
    fn iterate_twice() {
        let g = group(&[1, 2, 3]);
        let mut ids = Vec::new();
        for id in &g {
            ids.push(id);
        }
        assert_eq!(ids.len(), 3);
        for id in &g {
            ids.push(id);
        }
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn collect_sorts_and_dedups() {
        let g = group(&[7, 3, 7, 1, 3]);
        assert_eq!(g.len(), 3);
        assert_eq!(g.first(), Some(1u32.into()));
    }

    #[test]
    fn bitor() {
        let result = &group(&[1, 2, 3]) | &group(&[2, 4, 5]);
        assert_eq!(result, group(&[1, 2, 3, 4, 5]));

        let result = &GoGroup::new() | &group(&[2]);
        assert_eq!(result, group(&[2]));
    }

    #[test]
    fn bitand() {
        let result = &group(&[1, 2, 3]) & &group(&[2, 4, 5, 1]);
        assert_eq!(result, group(&[1, 2]));

        let result = &group(&[1, 2, 3]) & &GoGroup::new();
        assert!(result.is_empty());
    }

    #[test]
    fn difference() {
        let result = group(&[1, 2, 3, 4]).difference(&group(&[2, 4, 9]));
        assert_eq!(result, group(&[1, 3]));
    }

    #[test]
    fn extend() {
        let mut g = group(&[5, 1]);
        g.extend(group(&[3, 5]).iter());
        assert_eq!(g, group(&[1, 3, 5]));
    }
}
