//! Repeated subsumption tests against a single GO term
//!
//! [`Ontology::subsume`] resolves both ids and looks up the offspring of the
//! subsumer on every call. When the same subsumer is tested against many
//! terms, a [`SubsumeTester`] does this work only once.
use tracing::debug;

use crate::{GoGroup, GoResult, GoTermId, Ontology};

/// Tests if a fixed GO term subsumes other terms
///
/// The offspring of the subsumer are looked up once, during construction,
/// and kept as a lookup set.
///
/// # Examples
///
/// ```
/// use godag::Ontology;
///
/// let ontology = Ontology::from_obo("tests/example.obo").unwrap();
/// let tester = ontology.subsume_tester("GO:0003824").unwrap();
///
/// assert!(tester.subsumes("GO:0050333").unwrap());
///
/// // GO:0048253 is a synonym of GO:0050333
/// assert!(tester.subsumes("GO:0048253").unwrap());
/// assert!(!tester.subsumes_exact("GO:0048253"));
/// ```
#[derive(Debug, Clone)]
pub struct SubsumeTester<'a> {
    ontology: &'a Ontology,
    master_go_id: GoTermId,
    subsumer_offspring: GoGroup,
}

impl<'a> SubsumeTester<'a> {
    /// Constructs a new [`SubsumeTester`] for the subsumer
    ///
    /// If `check_for_synonym` is `true`, `subsumer_go_id` is resolved via
    /// [`Ontology::primary_go_id`], otherwise it must be a primary id.
    ///
    /// # Errors
    ///
    /// [`crate::GoError::LookupFailed`] if the subsumer cannot be resolved
    pub fn new(
        ontology: &'a Ontology,
        subsumer_go_id: &str,
        check_for_synonym: bool,
    ) -> GoResult<Self> {
        let master_go_id = if check_for_synonym {
            ontology.primary_go_id(subsumer_go_id)?
        } else {
            GoTermId::try_from(subsumer_go_id)
                .map_err(|_| crate::GoError::LookupFailed(subsumer_go_id.to_string()))?
        };
        let subsumer_offspring = ontology.offspring(&master_go_id.to_string())?;
        debug!(
            "SubsumeTester for {master_go_id} with {} offspring",
            subsumer_offspring.len()
        );
        Ok(Self {
            ontology,
            master_go_id,
            subsumer_offspring,
        })
    }

    /// The primary id of the subsumer
    pub fn master_go_id(&self) -> GoTermId {
        self.master_go_id
    }

    /// All offspring of the subsumer
    pub fn subsumer_offspring(&self) -> &GoGroup {
        &self.subsumer_offspring
    }

    /// Returns `true` if the subsumer subsumes `go_id`
    ///
    /// `go_id` can be a primary id or a synonym.
    ///
    /// # Errors
    ///
    /// [`crate::GoError::LookupFailed`] if `go_id` cannot be resolved
    pub fn subsumes(&self, go_id: &str) -> GoResult<bool> {
        let primaree = self.ontology.primary_go_id(go_id)?;
        Ok(self.contains(primaree))
    }

    /// Returns `true` if the subsumer subsumes `go_id`, using `go_id` verbatim
    ///
    /// Synonyms are not resolved, so they are never subsumed.
    /// Invalid identifiers are not subsumed either.
    pub fn subsumes_exact(&self, go_id: &str) -> bool {
        GoTermId::try_from(go_id).is_ok_and(|id| self.contains(id))
    }

    fn contains(&self, id: GoTermId) -> bool {
        self.master_go_id == id || self.subsumer_offspring.contains(&id)
    }
}
