use std::fs;
use std::path::Path;

use tracing::{debug, trace, warn};

use crate::term::internal::GoTermInternal;
use crate::{GoError, GoResult, GoTermId, Ontology};

/// Child - Parent connections
type Connections = Vec<(GoTermId, GoTermId)>;

/// Primary - Alternative id pairs
type AltIds = Vec<(GoTermId, GoTermId)>;

/// Relationship types that connect a term to its parent
const PARENT_RELATIONSHIPS: [&str; 1] = ["part_of"];

/// Reads an OBO file and adds all terms to the ontology
///
/// Afterwards, all terms are connected and the ancestor and
/// offspring cache is created.
///
/// # Errors
///
/// - [`GoError::CannotOpenFile`]: The file is not present or not readable
/// - [`GoError::InvalidInput`]: The content is not a valid OBO file
pub(crate) fn read_obo_file<P: AsRef<Path>>(filename: P, ontology: &mut Ontology) -> GoResult<()> {
    let filename = filename.as_ref();
    let file_content = fs::read_to_string(filename)
        .map_err(|_| GoError::CannotOpenFile(filename.display().to_string()))?;
    debug!("Parsing {}", filename.display());
    read_obo_str(&file_content, ontology)
}

/// Adds all terms of an OBO document to the ontology
pub(crate) fn read_obo_str(file_content: &str, ontology: &mut Ontology) -> GoResult<()> {
    let mut connections: Connections = Vec::new();
    let mut alt_ids: AltIds = Vec::new();

    // OBO files might use CRLF line endings
    let file_content = file_content.replace("\r\n", "\n");

    let mut stanzas = file_content.split("\n\n");
    if let Some(header) = stanzas.next() {
        if let Some(version) = data_version(header) {
            ontology.set_data_version(version);
        }
        // files without header start with the first stanza immediately
        if header.starts_with('[') {
            add_stanza(header, ontology, &mut connections, &mut alt_ids)?;
        }
    }
    for stanza in stanzas {
        add_stanza(stanza, ontology, &mut connections, &mut alt_ids)?;
    }

    for (child, parent) in connections {
        if ontology.add_parent(parent, child).is_err() {
            warn!("Unable to connect {child} to non-existing parent {parent}");
        }
    }

    for (primary, alt) in alt_ids {
        if let Err(err) = ontology.add_alt_id(primary, alt) {
            warn!("Unable to add alternative id {alt} to {primary}: {err}");
        }
    }

    ontology.create_cache();
    debug!("Loaded {} terms", ontology.len());
    Ok(())
}

fn add_stanza(
    stanza: &str,
    ontology: &mut Ontology,
    connections: &mut Connections,
    alt_ids: &mut AltIds,
) -> GoResult<()> {
    let stanza = stanza.trim_start_matches('\n');
    if let Some(term) = stanza.strip_prefix("[Term]\n") {
        if let Some(raw_term) = term_from_obo(term)? {
            let id = ontology.add_term(raw_term);
            add_connections(connections, alt_ids, term, id)?;
        } else {
            warn!("Unable to parse: {term}");
        }
    } else {
        trace!("Ignoring: {}", stanza.lines().next().unwrap_or_default());
    }
    Ok(())
}

/// Extracts the `data-version` from the header
fn data_version(header: &str) -> Option<&str> {
    header
        .lines()
        .find_map(|line| line.strip_prefix("data-version:"))
        .map(str::trim)
}

fn term_from_obo(term: &str) -> GoResult<Option<GoTermInternal>> {
    let mut id: Option<&str> = None;
    let mut name: Option<&str> = None;
    let mut namespace: Option<&str> = None;
    let mut definition: Option<&str> = None;
    let mut obsolete = false;
    let mut replacement: Option<&str> = None;

    for line in term.lines() {
        match parse_line(line) {
            Some(("id", value)) => id = Some(value),
            Some(("name", value)) => name = Some(value),
            Some(("namespace", value)) => namespace = Some(value),
            Some(("def", value)) => definition = quoted(value),
            Some(("is_obsolete", value)) => obsolete = value == "true",
            Some(("replaced_by", value)) => replacement = Some(value),
            _ => (),
        }
    }

    let (Some(id), Some(name), Some(namespace)) = (id, name, namespace) else {
        return Ok(None);
    };

    let mut term = GoTermInternal::try_new(id, name, namespace)
        .map_err(|err| GoError::InvalidInput(format!("{id}: {err}")))?;

    if let Some(definition) = definition {
        *term.definition_mut() = definition.to_string();
    }
    *term.obsolete_mut() = obsolete;
    if let Some(replacement) = replacement {
        *term.replacement_mut() = Some(GoTermId::try_from(replacement)?);
    }
    Ok(Some(term))
}

fn add_connections(
    connections: &mut Connections,
    alt_ids: &mut AltIds,
    term: &str,
    id: GoTermId,
) -> GoResult<()> {
    for line in term.lines() {
        match parse_line(line) {
            Some(("is_a", value)) => {
                connections.push((id, GoTermId::try_from(value)?));
            }
            Some(("relationship", value)) => {
                let Some((relation, target)) = value.split_once(' ') else {
                    return Err(GoError::InvalidInput(line.to_string()));
                };
                if PARENT_RELATIONSHIPS.contains(&relation) {
                    connections.push((id, GoTermId::try_from(target)?));
                }
            }
            Some(("alt_id", value)) => {
                alt_ids.push((id, GoTermId::try_from(value)?));
            }
            _ => (),
        }
    }
    Ok(())
}

/// Splits a tag-value line and strips trailing comments
///
/// ```text
/// is_a: GO:0043231 ! intracellular membrane-bounded organelle
/// ```
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let (tag, value) = line.split_once(": ")?;
    let value = match value.split_once(" ! ") {
        Some((value, _comment)) => value,
        None => value,
    };
    Some((tag.trim(), value.trim()))
}

/// Returns the quoted text of a `def` value
///
/// ```text
/// def: "The part of a cell ..." [GOC:go_curators]
/// ```
fn quoted(value: &str) -> Option<&str> {
    let value = value.strip_prefix('"')?;
    let mut escaped = false;
    for (idx, c) in value.char_indices() {
        match c {
            '\\' if !escaped => escaped = true,
            '"' if !escaped => return Some(&value[..idx]),
            _ => escaped = false,
        }
    }
    None
}
