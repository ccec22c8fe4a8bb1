//! Parsing the Gene Ontology master data
//!
//! The ontology is loaded either from the `go-basic.obo` file published
//! by the GO consortium or from a binary snapshot created by
//! [`crate::Ontology::as_bytes`].

pub(crate) mod binary;
/// Module to parse `go-basic.obo` files
pub(crate) mod go_obo;
