use core::fmt::Debug;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::ops::BitOr;
use std::path::Path;

use tracing::{debug, trace};

use crate::parser;
use crate::parser::binary::{BinaryTermBuilder, Bytes};
use crate::subsume::SubsumeTester;
use crate::term::internal::GoTermInternal;
use crate::term::{GoGroup, GoTerm, Namespace};
use crate::{u16_from_bytes, u32_from_bytes};
use crate::{GoError, GoResult, GoTermId};

mod partition;
mod termarena;
pub use partition::{Partition, Relation};
use termarena::Arena;

#[cfg_attr(doc, aquamarine::aquamarine)]
/// `Ontology` is the main interface of the `godag` crate and contains all data
///
/// The [`Ontology`] holds all [`GoTerm`]s of the three GO namespaces,
/// their relationships and an index of alternative (synonym) ids. It answers
/// ancestry, offspring and subsumption questions about GO identifiers.
///
/// All query methods accept identifiers as plain strings, e.g. `"GO:0005634"`.
/// Identifiers that cannot be resolved result in [`GoError::LookupFailed`].
///
/// # Examples
///
/// ```
/// use godag::Ontology;
///
/// let ontology = Ontology::from_obo("tests/example.obo").unwrap();
///
/// assert_eq!(ontology.term("GO:0005783").unwrap(), "endoplasmic reticulum");
/// assert_eq!(ontology.ontology_abbreviation("GO:0004930").unwrap(), "MF");
///
/// // a leaf term does not have offspring
/// assert!(ontology.cellular_component_offspring("GO:0031676").unwrap().is_empty());
///
/// // synonyms are resolved to the primary id
/// assert_eq!(ontology.primary_go_id("GO:0048253").unwrap(), "GO:0050333");
///
/// assert!(ontology.subsume("GO:0003824", "GO:0048253").unwrap());
/// ```
///
/// # Construction
///
/// 1. Download `go-basic.obo` from the [Gene Ontology](https://geneontology.org/docs/download-ontology/)
///     and use [`Ontology::from_obo`] or [`Ontology::from_standard`].
/// 2. Load a binary snapshot using [`Ontology::from_binary`]. Snapshots are
///     created with [`Ontology::as_bytes`], e.g. with the `obo_to_bin` demo:
///
///     `cargo run --example obo_to_bin --release <PATH TO go-basic.obo> <OUTPUT FILENAME>`
///
/// You can also build it all by yourself, in which case you will have to:
/// 1. construct an empty Ontology [`Ontology::default`]
/// 2. Add all terms [`Ontology::insert_term`]
/// 3. Connect terms to their parents [`Ontology::add_parent`]
/// 4. Register alternative ids [`Ontology::add_alt_id`]
/// 5. Cache all ancestor and offspring connections [`Ontology::create_cache`]
///
/// # Obsolete terms
///
/// Terms marked `is_obsolete` in the OBO file stay in the ontology and
/// resolve like any other term: [`Ontology::term`], [`Ontology::primary_go_id`]
/// and [`Ontology::go_get`] succeed for them. They have no parents and no
/// children, so partition lookups return an empty group and they are never
/// subsumed by another term. Use [`GoTerm::is_obsolete`] and
/// [`GoTerm::replacement`] to detect them and follow `replaced_by`:
///
/// ```
/// use godag::Ontology;
///
/// let ontology = Ontology::from_obo("tests/example.obo").unwrap();
/// let cell = ontology.go(5623u32).unwrap();
/// assert!(cell.is_obsolete());
/// assert_eq!(cell.replacement().unwrap().id(), "GO:0005575");
///
/// assert_eq!(ontology.primary_go_id("GO:0005623").unwrap(), "GO:0005623");
/// assert!(ontology.cellular_component_offspring("GO:0005623").unwrap().is_empty());
/// ```
///
/// # Layout
///
/// Every term belongs to one [`Namespace`]. Terms are connected to their
/// parents via `is_a` and `part_of` relationships. Lookups of a [`Partition`]
/// only ever return terms of the partition's namespace.
///
/// ```mermaid
/// erDiagram
///     ONTOLOGY ||--|{ GOTERM : contains
///     GOTERM ||--|{ GOTERM : is_a
///     GOTERM ||--o{ GOTERM : part_of
///     GOTERM ||--o{ ALTID : synonym
///     GOTERM {
///         str name
///         GoTermId id
///         Namespace namespace
///         GoGroup parents
///         GoGroup children
///     }
///     ALTID {
///         GoTermId id
///     }
/// ```
#[derive(Default)]
pub struct Ontology {
    go_terms: Arena,
    alt_ids: HashMap<GoTermId, GoTermId>,
    data_version: String,
}

impl Debug for Ontology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ontology with {} terms", self.go_terms.len())
    }
}

/// Construction and serialization
impl Ontology {
    /// Initialize the [`Ontology`] from `go-basic.obo` inside `folder`
    ///
    /// # Errors
    ///
    /// - obo file not present or available: [`GoError::CannotOpenFile`]
    /// - invalid data inside the file: [`GoError::InvalidInput`]
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use godag::Ontology;
    ///
    /// let ontology = Ontology::from_standard("/path/to/go_data/").unwrap();
    /// assert!(ontology.go(5634u32).is_some());
    /// ```
    pub fn from_standard<P: AsRef<Path>>(folder: P) -> GoResult<Self> {
        let obo = folder.as_ref().join(crate::OBO_FILENAME);
        Self::from_obo(obo)
    }

    /// Initialize the [`Ontology`] from an OBO file
    ///
    /// # Errors
    ///
    /// - obo file not present or available: [`GoError::CannotOpenFile`]
    /// - invalid data inside the file: [`GoError::InvalidInput`]
    ///
    /// # Examples
    ///
    /// ```
    /// use godag::Ontology;
    ///
    /// let ontology = Ontology::from_obo("tests/example.obo").unwrap();
    /// assert_eq!(ontology.len(), 36);
    /// assert_eq!(ontology.data_version(), "releases/2023-01-01");
    /// ```
    pub fn from_obo<P: AsRef<Path>>(filename: P) -> GoResult<Self> {
        let mut ont = Ontology::default();
        parser::go_obo::read_obo_file(filename, &mut ont)?;
        Ok(ont)
    }

    /// Build an Ontology from a binary snapshot file
    ///
    /// The data must be in the format defined in [`Ontology::as_bytes`].
    ///
    /// # Errors
    ///
    /// - Binary file not available: [`GoError::CannotOpenFile`]
    /// - Invalid data, see [`Ontology::from_bytes`]
    pub fn from_binary<P: AsRef<Path>>(filename: P) -> GoResult<Self> {
        let filename = filename.as_ref();
        let mut file = File::open(filename)
            .map_err(|_| GoError::CannotOpenFile(filename.display().to_string()))?;
        let len = file
            .metadata()
            .map_err(|_| {
                GoError::CannotOpenFile("unable to get filesize of binary file".to_string())
            })?
            .len();
        let mut bytes = Vec::with_capacity(len.try_into()?);
        file.read_to_end(&mut bytes).map_err(|_| {
            GoError::CannotOpenFile("unable to read from binary file".to_string())
        })?;
        Self::from_bytes(&bytes)
    }

    /// Build an Ontology from bytes
    ///
    /// The data must be in the format defined in [`Ontology::as_bytes`].
    /// This method adds all terms and alternative ids, creates the
    /// parent-child structure of the ontology and caches all
    /// ancestor and offspring relations.
    ///
    /// # Errors
    ///
    /// - Unknown format version: [`GoError::NotImplemented`]
    /// - Size of binary data does not match the content: [`GoError::ParseBinaryError`]
    ///
    /// # Examples
    ///
    /// ```
    /// use godag::Ontology;
    ///
    /// let ontology = Ontology::from_obo("tests/example.obo").unwrap();
    /// let bytes = ontology.as_bytes();
    ///
    /// let snapshot = Ontology::from_bytes(&bytes).unwrap();
    /// assert_eq!(snapshot.len(), ontology.len());
    /// assert_eq!(snapshot.primary_go_id("GO:0048253").unwrap(), "GO:0050333");
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> GoResult<Self> {
        let bytes = parser::binary::ontology::version(bytes)?;
        debug!("Parsing from bytes v{}", bytes.version());
        let mut ont = Ontology::default();

        let mut section_start = ont.data_version_from_bytes(&bytes)?;

        // Terms
        let section = section_range(&bytes, section_start)?;
        for term in BinaryTermBuilder::new(bytes.subset(section.clone())) {
            ont.add_term(term?);
        }
        section_start = section.end;

        // Term - Parents
        let section = section_range(&bytes, section_start)?;
        ont.add_parent_from_bytes(&bytes[section.clone()])?;
        section_start = section.end;

        if section_start != bytes.len() {
            return Err(GoError::ParseBinaryError);
        }

        ont.index_alt_ids()?;
        ont.create_cache();
        Ok(ont)
    }

    /// Returns a binary representation of the Ontology
    ///
    /// The binary data is separated into sections:
    ///
    /// - Metadata (Binary format version and data-version of the ontology)
    /// - Terms (IDs, namespace, names, definitions, alternative ids)
    /// - Term - Parent connection (Child ID - Parent IDs)
    ///
    /// The term and parent sections start with 4 bytes to indicate
    /// their size (big-endian encoded `u32`)
    ///
    /// # Panics
    ///
    /// Panics when the buffer length of any subsegment larger than `u32::MAX`
    pub fn as_bytes(&self) -> Vec<u8> {
        fn usize_to_u32(n: usize) -> u32 {
            n.try_into().expect("unable to convert {n} to u32")
        }
        let mut res = self.metadata_as_bytes();

        let mut buffer = Vec::new();
        for term in self.go_terms.values() {
            buffer.append(&mut term.as_bytes());
        }
        res.extend_from_slice(&usize_to_u32(buffer.len()).to_be_bytes());
        res.append(&mut buffer);

        for term in self.go_terms.values() {
            buffer.append(&mut term.parents_as_byte());
        }
        res.extend_from_slice(&usize_to_u32(buffer.len()).to_be_bytes());
        res.append(&mut buffer);

        res
    }
}

/// Public query API of the Ontology
///
/// All methods that accept `&str` identifiers resolve them against
/// the primary ids of the ontology, unless stated otherwise.
impl Ontology {
    /// Returns the number of GO terms in the Ontology
    pub fn len(&self) -> usize {
        self.go_terms.len()
    }

    /// Returns `true` if the Ontology does not contain any GO terms
    ///
    /// # Examples
    ///
    /// ```
    /// use godag::Ontology;
    /// let ontology = Ontology::default();
    /// assert!(ontology.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the `data-version` of the source data, e.g. `releases/2023-01-01`
    pub fn data_version(&self) -> &str {
        &self.data_version
    }

    /// Returns the [`GoTerm`] of the provided [`GoTermId`]
    ///
    /// If no such term is present in the Ontology, `None` is returned.
    /// Alternative ids are not resolved.
    ///
    /// # Examples
    ///
    /// ```
    /// use godag::Ontology;
    /// let ontology = Ontology::from_obo("tests/example.obo").unwrap();
    /// let term = ontology.go(5634u32).unwrap();
    /// assert_eq!(term.name(), "nucleus");
    /// assert!(ontology.go(66666u32).is_none());
    /// ```
    pub fn go<I: Into<GoTermId>>(&self, term_id: I) -> Option<GoTerm> {
        GoTerm::try_new(self, term_id).ok()
    }

    /// Returns an Iterator of all [`GoTerm`]s of the Ontology
    pub fn terms(&self) -> Iter<'_> {
        self.into_iter()
    }

    /// Returns the set of identifiers stored for `go_id` in `partition`
    ///
    /// This is the generic lookup that all other offspring and ancestor
    /// methods are based on. The result only contains terms of the
    /// partition's namespace and is empty if the term has no entries.
    ///
    /// # Errors
    ///
    /// [`GoError::LookupFailed`] if `go_id` is not the primary id of a term
    /// of the partition's namespace
    ///
    /// # Examples
    ///
    /// ```
    /// use godag::{Ontology, Partition};
    ///
    /// let ontology = Ontology::from_obo("tests/example.obo").unwrap();
    /// let partition: Partition = "GOCCCHILDREN".parse().unwrap();
    ///
    /// let children = ontology.go_get("GO:0042716", partition).unwrap();
    /// assert_eq!(children.to_strings(), vec!["GO:0030075", "GO:0042717"]);
    ///
    /// // GO:0004930 is a molecular function
    /// assert!(ontology.go_get("GO:0004930", partition).is_err());
    /// ```
    pub fn go_get(&self, go_id: &str, partition: Partition) -> GoResult<GoGroup> {
        let term = self.lookup(go_id)?;
        let namespace = partition.namespace();
        if term.namespace() != namespace {
            return Err(GoError::LookupFailed(format!(
                "value for '{go_id}' not found in {partition}"
            )));
        }
        let ids = match partition.relation() {
            Relation::Offspring => term.offspring(),
            Relation::Ancestor => term.all_parents(),
            Relation::Children => term.children(),
            Relation::Parents => term.parents(),
        };
        trace!("{partition} lookup of {go_id}: {} ids", ids.len());
        Ok(self.in_namespace(ids, namespace))
    }

    /// Returns all descendants of the term, from the term's own namespace
    ///
    /// # Errors
    ///
    /// [`GoError::LookupFailed`] if `go_id` is not a primary id
    pub fn offspring(&self, go_id: &str) -> GoResult<GoGroup> {
        let namespace = self.namespace(go_id)?;
        self.go_get(go_id, Partition::offspring(namespace))
    }

    /// Returns all descendants of a cellular component term
    ///
    /// # Errors
    ///
    /// [`GoError::LookupFailed`] if `go_id` is not a cellular component term
    ///
    /// # Examples
    ///
    /// ```
    /// use godag::Ontology;
    ///
    /// let ontology = Ontology::from_obo("tests/example.obo").unwrap();
    /// let offspring = ontology.cellular_component_offspring("GO:0042716").unwrap();
    /// assert_eq!(
    ///     offspring.to_strings(),
    ///     vec!["GO:0030075", "GO:0030077", "GO:0031676", "GO:0042717"]
    /// );
    ///
    /// assert!(ontology.cellular_component_offspring("GO:0042716not").is_err());
    /// ```
    pub fn cellular_component_offspring(&self, go_id: &str) -> GoResult<GoGroup> {
        self.go_get(go_id, Partition::offspring(Namespace::CellularComponent))
    }

    /// Returns all descendants of a molecular function term
    ///
    /// # Errors
    ///
    /// [`GoError::LookupFailed`] if `go_id` is not a molecular function term
    pub fn molecular_function_offspring(&self, go_id: &str) -> GoResult<GoGroup> {
        self.go_get(go_id, Partition::offspring(Namespace::MolecularFunction))
    }

    /// Returns all descendants of a biological process term
    ///
    /// # Errors
    ///
    /// [`GoError::LookupFailed`] if `go_id` is not a biological process term
    pub fn biological_process_offspring(&self, go_id: &str) -> GoResult<GoGroup> {
        self.go_get(go_id, Partition::offspring(Namespace::BiologicalProcess))
    }

    /// Returns all ancestors of a cellular component term
    ///
    /// # Errors
    ///
    /// [`GoError::LookupFailed`] if `go_id` is not a cellular component term
    pub fn ancestors_cc(&self, go_id: &str) -> GoResult<GoGroup> {
        self.go_get(go_id, Partition::ancestor(Namespace::CellularComponent))
    }

    /// Returns the primary id for a primary or alternative (synonym) id
    ///
    /// The identifier is first assumed to be a primary id. If no term
    /// has this id, it is looked up as an alternative id.
    ///
    /// # Errors
    ///
    /// [`GoError::LookupFailed`] if `go_id_or_synonym_id` is neither
    ///
    /// # Examples
    ///
    /// ```
    /// use godag::Ontology;
    ///
    /// let ontology = Ontology::from_obo("tests/example.obo").unwrap();
    /// assert_eq!(ontology.primary_go_id("GO:0048253").unwrap(), "GO:0050333");
    /// assert_eq!(ontology.primary_go_id("GO:0050333").unwrap(), "GO:0050333");
    /// assert!(ontology.primary_go_id("GO:AWAY").is_err());
    /// ```
    pub fn primary_go_id(&self, go_id_or_synonym_id: &str) -> GoResult<GoTermId> {
        if let Ok(term) = self.lookup(go_id_or_synonym_id) {
            return Ok(*term.id());
        }
        trace!("{go_id_or_synonym_id} is not a primary id, checking synonyms");
        self.lookup_synonym(go_id_or_synonym_id).map_err(|err| {
            GoError::LookupFailed(format!(
                "{}: GO identifier '{go_id_or_synonym_id}' does not appear to be a primary ID nor synonym. Is the ontology data up to date?",
                lookup_message(err)
            ))
        })
    }

    /// Returns the name of the term
    ///
    /// # Errors
    ///
    /// [`GoError::LookupFailed`] if `go_id` is not a primary id
    pub fn term(&self, go_id: &str) -> GoResult<&str> {
        Ok(self.lookup(go_id)?.name())
    }

    /// Returns the [`Namespace`] of the term
    ///
    /// # Errors
    ///
    /// [`GoError::LookupFailed`] if `go_id` is not a primary id
    pub fn namespace(&self, go_id: &str) -> GoResult<Namespace> {
        Ok(self.lookup(go_id)?.namespace())
    }

    /// Returns `MF`, `CC` or `BP`, depending on the namespace of the term
    ///
    /// # Errors
    ///
    /// [`GoError::LookupFailed`] if `go_id` is not a primary id
    pub fn ontology_abbreviation(&self, go_id: &str) -> GoResult<&'static str> {
        Ok(self.namespace(go_id)?.abbreviation())
    }

    /// Returns `true` if `subsumer_go_id` subsumes `subsumee_go_id`
    ///
    /// That is the case if both identify the same term or if the subsumee
    /// is an offspring of the subsumer. Both ids can also be synonyms.
    ///
    /// For repeatedly testing the same subsumer, [`Ontology::subsume_tester`]
    /// is faster.
    ///
    /// # Errors
    ///
    /// [`GoError::LookupFailed`] if one of the ids cannot be resolved
    ///
    /// # Examples
    ///
    /// ```
    /// use godag::Ontology;
    ///
    /// let ontology = Ontology::from_obo("tests/example.obo").unwrap();
    /// assert!(ontology.subsume("GO:0003824", "GO:0050333").unwrap());
    /// assert!(ontology.subsume("GO:0009536", "GO:0009536").unwrap());
    ///
    /// // plastid part does not subsume plastid
    /// assert!(!ontology.subsume("GO:0044435", "GO:0009536").unwrap());
    /// ```
    pub fn subsume(&self, subsumer_go_id: &str, subsumee_go_id: &str) -> GoResult<bool> {
        let primaree = self.primary_go_id(subsumee_go_id)?;
        let primarer = self.primary_go_id(subsumer_go_id)?;

        if primaree == primarer {
            return Ok(true);
        }

        Ok(self.offspring(&primarer.to_string())?.contains(&primaree))
    }

    /// Returns a [`SubsumeTester`] for the subsumer, resolving synonyms
    ///
    /// # Errors
    ///
    /// [`GoError::LookupFailed`] if `subsumer_go_id` cannot be resolved
    pub fn subsume_tester(&self, subsumer_go_id: &str) -> GoResult<SubsumeTester<'_>> {
        SubsumeTester::new(self, subsumer_go_id, true)
    }

    /// Returns a [`SubsumeTester`] for the subsumer, using the id verbatim
    ///
    /// # Errors
    ///
    /// [`GoError::LookupFailed`] if `subsumer_go_id` is not a primary id
    pub fn subsume_tester_exact(&self, subsumer_go_id: &str) -> GoResult<SubsumeTester<'_>> {
        SubsumeTester::new(self, subsumer_go_id, false)
    }

    /// Returns all cellular component terms that are cordial with the term
    ///
    /// Two terms are cordial if they share a common offspring (or one is the
    /// ancestor of the other). The term itself and its offspring are not part
    /// of the result, they are not merely cordial. E.g. `membrane` is cordial
    /// with `nucleus`, since both are ancestors of `nuclear membrane`.
    /// `mitochondrion` and `nucleus` are not cordial.
    ///
    /// # Errors
    ///
    /// [`GoError::LookupFailed`] if `go_id` is not a cellular component term
    ///
    /// # Examples
    ///
    /// ```
    /// use godag::Ontology;
    ///
    /// let ontology = Ontology::from_obo("tests/example.obo").unwrap();
    /// let cordial = ontology.cordial_cc("GO:0005634").unwrap();
    ///
    /// assert!(cordial.contains(&16020u32.into()));
    /// assert!(!cordial.contains(&5739u32.into()));
    /// ```
    pub fn cordial_cc(&self, go_id: &str) -> GoResult<GoGroup> {
        let mut cordial_ids = self.ancestors_cc(go_id)?;

        let offspring = self.cellular_component_offspring(go_id)?;
        for child in &offspring {
            cordial_ids = cordial_ids.bitor(&self.ancestors_cc(&child.to_string())?);
        }

        let primary = GoTermId::try_from(go_id)?;
        Ok(cordial_ids
            .iter()
            .filter(|id| id != &primary && !offspring.contains(id))
            .collect())
    }
}

/// Methods to build an Ontology manually
impl Ontology {
    /// Adds a new term to the ontology
    ///
    /// An existing term with the same id is replaced.
    pub fn insert_term<I: Into<GoTermId>>(&mut self, name: String, id: I, namespace: Namespace) {
        let term = GoTermInternal::new(name, id.into(), namespace);
        self.go_terms.insert(term);
    }

    /// Adds `parent_id` as parent of `child_id`
    ///
    /// # Errors
    ///
    /// [`GoError::DoesNotExist`] if one of the terms is not present
    pub fn add_parent<I: Into<GoTermId> + Copy, J: Into<GoTermId> + Copy>(
        &mut self,
        parent_id: I,
        child_id: J,
    ) -> GoResult<()> {
        if !self.go_terms.contains(parent_id.into()) {
            return Err(GoError::DoesNotExist);
        }
        let child = self.get_mut(child_id).ok_or(GoError::DoesNotExist)?;
        child.add_parent(parent_id);

        let parent = self.get_mut(parent_id).ok_or(GoError::DoesNotExist)?;
        parent.add_child(child_id);
        Ok(())
    }

    /// Registers `alt_id` as alternative (synonym) id of `primary_id`
    ///
    /// # Errors
    ///
    /// - [`GoError::DoesNotExist`] if `primary_id` is not present
    /// - [`GoError::InvalidInput`] if `alt_id` is itself a primary id
    pub fn add_alt_id<I: Into<GoTermId>, J: Into<GoTermId>>(
        &mut self,
        primary_id: I,
        alt_id: J,
    ) -> GoResult<()> {
        let primary_id = primary_id.into();
        let alt_id = alt_id.into();
        if self.go_terms.contains(alt_id) {
            return Err(GoError::InvalidInput(format!(
                "{alt_id} is a primary id and cannot be a synonym of {primary_id}"
            )));
        }
        self.get_mut(primary_id)
            .ok_or(GoError::DoesNotExist)?
            .add_alt_id(alt_id);
        self.alt_ids.insert(alt_id, primary_id);
        Ok(())
    }

    /// Sets the `data-version` of the ontology
    pub fn set_data_version(&mut self, version: &str) {
        version.clone_into(&mut self.data_version);
    }

    /// Crates and caches the ancestors and offspring of every term
    ///
    /// This method must be called after all terms are connected
    /// to their parents and before the Ontology is queried.
    pub fn create_cache(&mut self) {
        let term_ids: Vec<GoTermId> = self.go_terms.keys();

        for id in &term_ids {
            self.create_cache_of_grandparents(*id);
        }

        let mut offspring: HashMap<GoTermId, Vec<GoTermId>> = HashMap::new();
        for term in self.go_terms.values() {
            for ancestor in term.all_parents() {
                offspring.entry(ancestor).or_default().push(*term.id());
            }
        }
        for term in self.go_terms.values_mut() {
            let ids = offspring.remove(term.id()).unwrap_or_default();
            *term.offspring_mut() = ids.into_iter().collect();
        }
        debug!("Created ancestor and offspring cache of {} terms", term_ids.len());
    }
}

/// Crate-only functions
impl Ontology {
    pub(crate) fn add_term(&mut self, term: GoTermInternal) -> GoTermId {
        let id = *term.id();
        self.go_terms.insert(term);
        id
    }

    pub(crate) fn get<I: Into<GoTermId>>(&self, term_id: I) -> Option<&GoTermInternal> {
        self.go_terms.get(term_id.into())
    }

    fn get_mut<I: Into<GoTermId>>(&mut self, term_id: I) -> Option<&mut GoTermInternal> {
        self.go_terms.get_mut(term_id.into())
    }

    /// Resolves a primary id
    fn lookup(&self, go_id: &str) -> GoResult<&GoTermInternal> {
        GoTermId::try_from(go_id)
            .ok()
            .and_then(|id| self.get(id))
            .ok_or_else(|| not_found(go_id))
    }

    /// Resolves an alternative id
    fn lookup_synonym(&self, go_id: &str) -> GoResult<GoTermId> {
        GoTermId::try_from(go_id)
            .ok()
            .and_then(|id| self.alt_ids.get(&id).copied())
            .ok_or_else(|| not_found(go_id))
    }

    fn in_namespace(&self, ids: &GoGroup, namespace: Namespace) -> GoGroup {
        ids.iter()
            .filter(|id| {
                self.get(*id)
                    .is_some_and(|term| term.namespace() == namespace)
            })
            .collect()
    }

    fn index_alt_ids(&mut self) -> GoResult<()> {
        let pairs: Vec<(GoTermId, GoTermId)> = self
            .go_terms
            .values()
            .flat_map(|term| term.alt_ids().iter().map(|alt| (*term.id(), *alt)))
            .collect();
        for (primary, alt) in pairs {
            self.add_alt_id(primary, alt)?;
        }
        Ok(())
    }

    fn metadata_as_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        // GOB header
        bytes.extend_from_slice(&parser::binary::MAGIC);

        // Version
        bytes.push(parser::binary::BinaryVersion::V1.as_u8());

        let version = self.data_version.as_bytes();
        let len = u16::try_from(version.len()).unwrap_or(u16::MAX);
        bytes.extend_from_slice(&len.to_be_bytes());
        bytes.extend_from_slice(&version[..usize::from(len)]);
        bytes
    }

    fn data_version_from_bytes(&mut self, bytes: &Bytes) -> GoResult<usize> {
        if bytes.len() < 2 {
            return Err(GoError::ParseBinaryError);
        }
        let len = usize::from(u16_from_bytes(&bytes[0..2]));
        let version = bytes
            .get(2..2 + len)
            .ok_or(GoError::ParseBinaryError)?;
        self.data_version =
            String::from_utf8(version.to_vec()).map_err(|_| GoError::ParseBinaryError)?;
        Ok(2 + len)
    }

    fn add_parent_from_bytes(&mut self, bytes: &[u8]) -> GoResult<()> {
        let mut idx: usize = 0;
        while idx < bytes.len() {
            if bytes.len() < idx + 8 {
                return Err(GoError::ParseBinaryError);
            }
            let n_parents = u32_from_bytes(&bytes[idx..]) as usize;
            let term = GoTermId::from(u32_from_bytes(&bytes[idx + 4..]));
            idx += 8;
            if bytes.len() < idx + 4 * n_parents {
                return Err(GoError::ParseBinaryError);
            }
            for _ in 0..n_parents {
                let parent = GoTermId::from(u32_from_bytes(&bytes[idx..]));
                self.add_parent(parent, term)
                    .map_err(|_| GoError::ParseBinaryError)?;
                idx += 4;
            }
        }
        Ok(())
    }

    fn all_grandparents(&mut self, term_id: GoTermId) -> &GoGroup {
        let cached = self
            .get(term_id)
            .map_or(true, GoTermInternal::parents_cached);
        if !cached {
            self.create_cache_of_grandparents(term_id);
        }
        self.get(term_id)
            .expect("term ids are only taken from the arena")
            .all_parents()
    }

    fn create_cache_of_grandparents(&mut self, term_id: GoTermId) {
        let mut res = GoGroup::default();
        let parents = match self.get(term_id) {
            Some(term) => term.parents().clone(),
            None => return,
        };
        for parent in &parents {
            let grandparents = self.all_grandparents(parent);
            res.extend(grandparents.iter());
        }
        if let Some(term) = self.get_mut(term_id) {
            *term.all_parents_mut() = res.bitor(&parents);
        }
    }
}

fn not_found(go_id: &str) -> GoError {
    GoError::LookupFailed(format!("value for '{go_id}' not found"))
}

fn lookup_message(err: GoError) -> String {
    match err {
        GoError::LookupFailed(message) => message,
        other => other.to_string(),
    }
}

/// Returns the byte range of the length-prefixed section starting at `start`
fn section_range(bytes: &Bytes, start: usize) -> GoResult<std::ops::Range<usize>> {
    if bytes.len() < start + 4 {
        return Err(GoError::ParseBinaryError);
    }
    let len = u32_from_bytes(&bytes[start..]) as usize;
    let end = start + 4 + len;
    if bytes.len() < end {
        return Err(GoError::ParseBinaryError);
    }
    Ok(start + 4..end)
}

/// An iterator of all [`GoTerm`]s of the [`Ontology`]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, GoTermInternal>,
    ontology: &'a Ontology,
}

impl<'a> Iterator for Iter<'a> {
    type Item = GoTerm<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|term| GoTerm::new(self.ontology, term))
    }
}

impl<'a> IntoIterator for &'a Ontology {
    type Item = GoTerm<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.go_terms.values(),
            ontology: self,
        }
    }
}
