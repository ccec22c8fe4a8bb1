//! GO cross-references of UniProt flat-file entries
use tracing::warn;

use crate::{GoTermId, Namespace};

/// Returns the GO ids of the `DR   GO` lines of a UniProt entry
///
/// If `namespace` is given, only GO terms whose aspect matches the
/// namespace are returned. Every id is returned once, in order of appearance.
///
/// ```text
/// DR   GO; GO:0005743; C:mitochondrial inner membrane; IDA:UniProtKB.
/// ```
///
/// ```
/// use godag::xref::uniprot_go_xrefs;
/// use godag::Namespace;
///
/// let record = "DR   GO; GO:0005743; C:mitochondrial inner membrane; IDA:UniProtKB.\n\
///               DR   GO; GO:0046872; F:metal ion binding; IEA:UniProtKB-KW.\n";
///
/// let cc = uniprot_go_xrefs(record, Some(Namespace::CellularComponent));
/// assert_eq!(cc, ["GO:0005743"]);
/// assert_eq!(uniprot_go_xrefs(record, None).len(), 2);
/// ```
pub fn uniprot_go_xrefs(uniprot_record: &str, namespace: Option<Namespace>) -> Vec<GoTermId> {
    let mut go_ids: Vec<GoTermId> = Vec::new();
    for line in uniprot_record.lines() {
        let Some(xref) = line.strip_prefix("DR   GO; ") else {
            continue;
        };
        let mut fields = xref.split("; ");
        let (Some(accession), Some(term)) = (fields.next(), fields.next()) else {
            warn!("Invalid GO cross-reference: {line}");
            continue;
        };
        if let Some(namespace) = namespace {
            if !term.starts_with(namespace.aspect()) {
                continue;
            }
        }
        match GoTermId::try_from(accession) {
            Ok(id) if !go_ids.contains(&id) => go_ids.push(id),
            Ok(_) => (),
            Err(err) => warn!("Invalid GO identifier {accession}: {err}"),
        }
    }
    go_ids
}

#[cfg(test)]
mod test {
    use super::*;

    const RECORD: &str = "\
ID   QCR1_HUMAN              Reviewed;         480 AA.
AC   P31930; B4DUH8;
DR   EMBL; M36647; AAA36385.1; -; mRNA.
DR   GO; GO:0005743; C:mitochondrial inner membrane; IDA:UniProtKB.
DR   GO; GO:0005739; C:mitochondrion; HTP:HPA.
DR   GO; GO:0046872; F:metal ion binding; IEA:UniProtKB-KW.
DR   GO; GO:0004222; F:metalloendopeptidase activity; IBA:GO_Central.
DR   GO; GO:0006122; P:mitochondrial electron transport, ubiquinol to cytochrome c; IBA:GO_Central.
DR   GO; GO:0005743; C:mitochondrial inner membrane; TAS:Reactome.
DR   InterPro; IPR011249; Metalloenz_LuxS/M16.
//
";

    #[test]
    fn by_namespace() {
        assert_eq!(
            uniprot_go_xrefs(RECORD, Some(Namespace::CellularComponent)),
            ["GO:0005743", "GO:0005739"]
        );
        assert_eq!(
            uniprot_go_xrefs(RECORD, Some(Namespace::MolecularFunction)),
            ["GO:0046872", "GO:0004222"]
        );
        assert_eq!(
            uniprot_go_xrefs(RECORD, Some(Namespace::BiologicalProcess)),
            ["GO:0006122"]
        );
    }

    #[test]
    fn all_namespaces() {
        assert_eq!(uniprot_go_xrefs(RECORD, None).len(), 5);
    }

    #[test]
    fn invalid_lines() {
        let record = "\
DR   GO; GO:0005743
DR   GO; GO:XXX; C:mitochondrial inner membrane; IDA:UniProtKB.
DR   GO; GO:0005739; C:mitochondrion; HTP:HPA.
";
        assert_eq!(uniprot_go_xrefs(record, None), ["GO:0005739"]);
        assert!(uniprot_go_xrefs("", None).is_empty());
    }
}
