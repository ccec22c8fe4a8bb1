use crate::term::{GoGroup, GoTermId, Namespace};
use crate::{GoResult, DEFAULT_NUM_ALL_PARENTS, DEFAULT_NUM_ALT_IDS, DEFAULT_NUM_PARENTS};

/// Owned representation of a term, stored inside the `Ontology`
#[derive(Debug, Clone)]
pub(crate) struct GoTermInternal {
    id: GoTermId,
    name: String,
    namespace: Namespace,
    definition: String,
    parents: GoGroup,
    all_parents: GoGroup,
    children: GoGroup,
    offspring: GoGroup,
    alt_ids: Vec<GoTermId>,
    obsolete: bool,
    replacement: Option<GoTermId>,
}

impl Default for GoTermInternal {
    fn default() -> Self {
        GoTermInternal::new(String::from("GO:0000000"), 0u32.into(), Namespace::default())
    }
}

impl GoTermInternal {
    pub fn new(name: String, id: GoTermId, namespace: Namespace) -> GoTermInternal {
        GoTermInternal {
            id,
            name,
            namespace,
            definition: String::new(),
            parents: GoGroup::with_capacity(DEFAULT_NUM_PARENTS),
            all_parents: GoGroup::with_capacity(DEFAULT_NUM_ALL_PARENTS),
            children: GoGroup::with_capacity(DEFAULT_NUM_PARENTS),
            offspring: GoGroup::default(),
            alt_ids: Vec::with_capacity(DEFAULT_NUM_ALT_IDS),
            obsolete: false,
            replacement: None,
        }
    }

    pub fn try_new(id: &str, name: &str, namespace: &str) -> GoResult<GoTermInternal> {
        let id = GoTermId::try_from(id)?;
        let namespace = Namespace::try_from(namespace)?;
        Ok(GoTermInternal::new(name.to_string(), id, namespace))
    }

    pub fn id(&self) -> &GoTermId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn definition_mut(&mut self) -> &mut String {
        &mut self.definition
    }

    pub fn parents(&self) -> &GoGroup {
        &self.parents
    }

    pub fn children(&self) -> &GoGroup {
        &self.children
    }

    pub fn all_parents(&self) -> &GoGroup {
        &self.all_parents
    }

    pub fn all_parents_mut(&mut self) -> &mut GoGroup {
        &mut self.all_parents
    }

    pub fn offspring(&self) -> &GoGroup {
        &self.offspring
    }

    pub fn offspring_mut(&mut self) -> &mut GoGroup {
        &mut self.offspring
    }

    pub fn parents_cached(&self) -> bool {
        if self.parents.is_empty() {
            true
        } else {
            !self.all_parents.is_empty()
        }
    }

    pub fn add_parent<I: Into<GoTermId>>(&mut self, parent_id: I) {
        self.parents.insert(parent_id.into());
    }

    pub fn add_child<I: Into<GoTermId>>(&mut self, child_id: I) {
        self.children.insert(child_id.into());
    }

    pub fn alt_ids(&self) -> &[GoTermId] {
        &self.alt_ids
    }

    pub fn add_alt_id(&mut self, alt_id: GoTermId) {
        if !self.alt_ids.contains(&alt_id) {
            self.alt_ids.push(alt_id);
        }
    }

    pub fn obsolete(&self) -> bool {
        self.obsolete
    }

    pub fn obsolete_mut(&mut self) -> &mut bool {
        &mut self.obsolete
    }

    pub fn replacement(&self) -> Option<GoTermId> {
        self.replacement
    }

    pub fn replacement_mut(&mut self) -> &mut Option<GoTermId> {
        &mut self.replacement
    }

    /// Returns the binary representation of the term
    ///
    /// See [`crate::parser::binary::term`] for the layout
    ///
    /// # Panics
    ///
    /// Panics when the total length exceeds `u32::MAX`
    pub fn as_bytes(&self) -> Vec<u8> {
        fn truncated(value: &str) -> &[u8] {
            let mut end = value.len().min(crate::MAX_NAME_LENGTH);
            while !value.is_char_boundary(end) {
                end -= 1;
            }
            &value.as_bytes()[..end]
        }

        let name = truncated(&self.name);
        let definition = truncated(&self.definition);

        let size = 4 + 4 + 1 + 1 + 4 + 2 + name.len() + 2 + definition.len() + 2
            + self.alt_ids.len() * 4;

        let mut res = Vec::with_capacity(size);

        // 4 bytes for total length
        let total_len: u32 = size.try_into().expect("term is too large for binary format");
        res.extend_from_slice(&total_len.to_be_bytes());

        // 4 bytes for Term-ID
        res.extend_from_slice(&self.id.to_be_bytes());

        // 1 byte for namespace, 1 byte for flags
        res.push(self.namespace.as_u8());
        res.push(u8::from(self.obsolete));

        // 4 bytes for replacement, 0 if none
        res.extend_from_slice(&self.replacement.unwrap_or_default().to_be_bytes());

        for text in [name, definition] {
            let len = u16::try_from(text.len()).expect("text is truncated to u16::MAX");
            res.extend_from_slice(&len.to_be_bytes());
            res.extend_from_slice(text);
        }

        let n_alt = u16::try_from(self.alt_ids.len()).expect("too many alternative ids");
        res.extend_from_slice(&n_alt.to_be_bytes());
        for alt_id in &self.alt_ids {
            res.extend_from_slice(&alt_id.to_be_bytes());
        }

        res
    }

    /// Returns the binary representation of the direct parents
    ///
    /// | Byte offset | Number of bytes | Description |
    /// | --- | --- | --- |
    /// | 0 | 4 | Number of parents `n` as big-endian `u32` |
    /// | 4 | 4 | The Term ID as big-endian `u32` |
    /// | 8 | 4 * n | The parent IDs as big-endian `u32` |
    pub fn parents_as_byte(&self) -> Vec<u8> {
        let mut res = Vec::with_capacity(8 + 4 * self.parents.len());
        let n: u32 = self
            .parents
            .len()
            .try_into()
            .expect("number of parents fits into u32");
        res.extend_from_slice(&n.to_be_bytes());
        res.extend_from_slice(&self.id.to_be_bytes());
        res.append(&mut self.parents.as_bytes());
        res
    }
}

impl PartialEq for GoTermInternal {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for GoTermInternal {}
