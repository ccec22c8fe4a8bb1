use crate::term::internal::GoTermInternal;
use crate::term::{GoGroup, Iter, Namespace};
use crate::{GoError, GoResult, GoTermId, Ontology};

/// The `GoTerm` represents a single term from the Gene Ontology
///
/// The term borrows all data from the [`Ontology`] and provides
/// functionality for traversing the graph.
#[derive(Debug, Clone, Copy)]
pub struct GoTerm<'a> {
    id: &'a GoTermId,
    name: &'a str,
    namespace: Namespace,
    definition: &'a str,
    parents: &'a GoGroup,
    all_parents: &'a GoGroup,
    children: &'a GoGroup,
    offspring: &'a GoGroup,
    alt_ids: &'a [GoTermId],
    obsolete: bool,
    replacement: Option<GoTermId>,
    ontology: &'a Ontology,
}

impl<'a> GoTerm<'a> {
    /// Constructs a new [`GoTerm`]
    ///
    /// # Errors
    ///
    /// If the given [`GoTermId`] does not match an existing term
    /// it returns [`GoError::DoesNotExist`]
    ///
    /// # Examples
    ///
    /// ```
    /// use godag::{GoTerm, Ontology};
    ///
    /// let ontology = Ontology::from_obo("tests/example.obo").unwrap();
    ///
    /// let term = GoTerm::try_new(&ontology, 5783u32);
    /// assert!(term.is_ok());
    ///
    /// let non_existing_term = GoTerm::try_new(&ontology, 66666666u32);
    /// assert!(non_existing_term.is_err());
    /// ```
    pub fn try_new<I: Into<GoTermId>>(ontology: &'a Ontology, term: I) -> GoResult<GoTerm<'a>> {
        let term = ontology.get(term).ok_or(GoError::DoesNotExist)?;
        Ok(GoTerm::new(ontology, term))
    }

    pub(crate) fn new(ontology: &'a Ontology, term: &'a GoTermInternal) -> GoTerm<'a> {
        GoTerm {
            id: term.id(),
            name: term.name(),
            namespace: term.namespace(),
            definition: term.definition(),
            parents: term.parents(),
            all_parents: term.all_parents(),
            children: term.children(),
            offspring: term.offspring(),
            alt_ids: term.alt_ids(),
            obsolete: term.obsolete(),
            replacement: term.replacement(),
            ontology,
        }
    }

    /// Returns the [`GoTermId`] of the term
    ///
    /// e.g.: `GO:0005634`
    pub fn id(&self) -> GoTermId {
        *self.id
    }

    /// Returns the name of the term
    ///
    /// e.g.: `nucleus`
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Returns the [`Namespace`] (sub-ontology) of the term
    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    /// Returns the textual definition of the term, if provided
    pub fn definition(&self) -> &'a str {
        self.definition
    }

    /// Returns the alternative ids (synonym ids) that were merged into this term
    pub fn alt_ids(&self) -> &'a [GoTermId] {
        self.alt_ids
    }

    /// Returns `true` if the term is flagged as obsolete
    pub fn is_obsolete(&self) -> bool {
        self.obsolete
    }

    /// Returns the replacement term of an obsolete term, if one is defined
    pub fn replacement(&self) -> Option<GoTerm<'a>> {
        self.ontology.go(self.replacement?)
    }

    /// Returns an iterator of the direct parents of the term
    pub fn parents(&self) -> Iter<'a> {
        self.parents.terms(self.ontology)
    }

    /// Returns the [`GoTermId`]s of the direct parents
    pub fn parent_ids(&self) -> &'a GoGroup {
        self.parents
    }

    /// Returns the [`GoTermId`]s of all direct and indirect parents
    pub fn all_parent_ids(&self) -> &'a GoGroup {
        self.all_parents
    }

    /// Returns an iterator of the direct and indirect parents of the term
    pub fn all_parents(&self) -> Iter<'a> {
        self.all_parents.terms(self.ontology)
    }

    /// Returns an iterator of the direct children of the term
    pub fn children(&self) -> Iter<'a> {
        self.children.terms(self.ontology)
    }

    /// Returns the [`GoTermId`]s of the direct children
    pub fn children_ids(&self) -> &'a GoGroup {
        self.children
    }

    /// Returns the [`GoTermId`]s of all descendants of the term
    ///
    /// Offspring can belong to other namespaces if a `part_of`
    /// relationship crosses the branches. Use the lookups of
    /// [`Ontology`] to restrict the offspring to a namespace.
    pub fn offspring_ids(&self) -> &'a GoGroup {
        self.offspring
    }

    /// Returns an iterator of all descendants of the term
    pub fn offspring(&self) -> Iter<'a> {
        self.offspring.terms(self.ontology)
    }

    /// Returns `true` if the term does not have any children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns `true` if `self` is a child (direct or indirect) of `other`
    pub fn child_of(&self, other: &GoTerm) -> bool {
        self.all_parents.contains(other.id)
    }

    /// Returns `true` if `self` is a parent (direct or indirect) of `other`
    pub fn parent_of(&self, other: &GoTerm) -> bool {
        other.child_of(self)
    }

    /// Returns `true` if `self` subsumes `other`
    ///
    /// A term subsumes another term if both are identical or if
    /// the other term is a descendant of the term.
    ///
    /// # Examples
    ///
    /// ```
    /// use godag::Ontology;
    ///
    /// let ontology = Ontology::from_obo("tests/example.obo").unwrap();
    /// let catalytic = ontology.go(3824u32).unwrap();
    /// let thtpase = ontology.go(50333u32).unwrap();
    ///
    /// assert!(catalytic.subsumes(&thtpase));
    /// assert!(catalytic.subsumes(&catalytic));
    /// assert!(!thtpase.subsumes(&catalytic));
    /// ```
    pub fn subsumes(&self, other: &GoTerm) -> bool {
        self.id == other.id || self.offspring.contains(other.id)
    }

    /// Returns the [`GoTermId`]s that are ancestors of both `self` **and** `other`
    ///
    /// If one term is an ancestor of the other, it is part of the result.
    pub fn common_ancestor_ids(&self, other: &GoTerm) -> GoGroup {
        let mut res = self.all_parents & other.all_parents;

        if other.all_parents.contains(self.id) {
            res.insert(*self.id);
        }

        if self.all_parents.contains(other.id) {
            res.insert(*other.id);
        }

        res
    }

    /// Returns the distance (steps) from `self` to `other`, if `other` is an ancestor of `self`
    pub fn distance_to_ancestor(&self, other: &GoTerm) -> Option<usize> {
        self.path_to_ancestor(other).map(|path| path.len())
    }

    /// Returns the shortest path to traverse from `self` to `other`, if `other` is an ancestor of `self`
    ///
    /// The path does not include `self` but does include `other`
    pub fn path_to_ancestor(&self, other: &GoTerm) -> Option<Vec<GoTermId>> {
        if self.id == other.id {
            return Some(vec![]);
        }
        if self.parents.contains(other.id) {
            return Some(vec![*other.id]);
        }
        if !self.all_parents.contains(other.id) {
            return None;
        }
        self.parents()
            .filter_map(|p| match p.path_to_ancestor(other) {
                Some(mut x) => {
                    x.insert(0, *p.id);
                    Some(x)
                }
                None => None,
            })
            .min_by_key(Vec::len)
    }
}

impl PartialEq for GoTerm<'_> {
    fn eq(&self, other: &GoTerm) -> bool {
        self.id == other.id
    }
}

impl Eq for GoTerm<'_> {}
