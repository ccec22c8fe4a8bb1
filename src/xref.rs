//! Cross-references from PDB structures to GO terms
//!
//! A PDB entry references the UniProt entries of its chains in `DBREF`
//! records, and every UniProt entry lists its GO annotations in `DR   GO`
//! lines. [`pdb_to_go`] follows both references:
//!
//! ```text
//! PDB 2A06 --DBREF UNP--> P31930 --DR GO--> GO:0005743 (C), GO:0008121 (F), ...
//! ```
//!
//! Records are retrieved through a [`RecordFetcher`]. [`DbFetch`] is the
//! blocking HTTP implementation for the EBI dbfetch service.
//!
//! # Examples
//!
//! ```
//! use godag::xref::{cc_pdb_to_go, Database, RecordFetcher};
//! use godag::GoResult;
//!
//! struct Offline;
//!
//! impl RecordFetcher for Offline {
//!     fn fetch(&self, db: Database, _accession: &str) -> GoResult<String> {
//!         Ok(match db {
//!             Database::Pdb => "DBREF  2A06 A    1   446  UNP    P31930   QCR1_HUMAN      35    480\n",
//!             Database::UniProtKb => "DR   GO; GO:0005743; C:mitochondrial inner membrane; IDA:UniProtKB.\n",
//!         }
//!         .to_string())
//!     }
//! }
//!
//! let go_ids = cc_pdb_to_go(&Offline, "2a06").unwrap();
//! assert_eq!(go_ids, ["GO:0005743"]);
//! ```
use std::fmt::Display;

use tracing::debug;

use crate::{GoResult, GoTermId, Namespace};

mod dbfetch;
mod pdb;
mod uniprot;

pub use dbfetch::{DbFetch, DbFetchConfig, DEFAULT_BASE_URL};
pub use pdb::pdb_uniprot_accessions;
pub use uniprot::uniprot_go_xrefs;

/// Remote databases that provide records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Database {
    /// Protein Data Bank
    Pdb,
    /// UniProt Knowledgebase
    UniProtKb,
}

impl Database {
    /// The database name used by dbfetch
    pub fn as_str(&self) -> &'static str {
        match self {
            Database::Pdb => "pdb",
            Database::UniProtKb => "uniprotkb",
        }
    }
}

impl Display for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Retrieves raw flat-file records by accession
pub trait RecordFetcher {
    /// Returns the raw record of `accession` in `db`
    ///
    /// # Errors
    ///
    /// [`crate::GoError::Fetch`] if the record cannot be retrieved
    fn fetch(&self, db: Database, accession: &str) -> GoResult<String>;
}

impl<T: RecordFetcher + ?Sized> RecordFetcher for &T {
    fn fetch(&self, db: Database, accession: &str) -> GoResult<String> {
        (**self).fetch(db, accession)
    }
}

/// Returns the GO annotations of all UniProt entries referenced by a PDB entry
///
/// Only GO terms of `namespace` are returned, or all of them if `namespace`
/// is `None`. Each id is returned once, in order of appearance.
///
/// # Errors
///
/// [`crate::GoError::Fetch`] if the PDB entry or one of the UniProt entries
/// cannot be retrieved
pub fn pdb_to_go<F: RecordFetcher>(
    fetcher: &F,
    pdb_id: &str,
    namespace: Option<Namespace>,
) -> GoResult<Vec<GoTermId>> {
    let pdb_record = fetcher.fetch(Database::Pdb, pdb_id)?;
    let accessions = pdb_uniprot_accessions(&pdb_record);
    debug!("{pdb_id} references {} UniProt entries", accessions.len());

    let mut go_ids: Vec<GoTermId> = Vec::new();
    for accession in &accessions {
        let uniprot_record = fetcher.fetch(Database::UniProtKb, accession)?;
        for go_id in uniprot_go_xrefs(&uniprot_record, namespace) {
            if !go_ids.contains(&go_id) {
                go_ids.push(go_id);
            }
        }
    }
    Ok(go_ids)
}

/// Returns the cellular component annotations of a PDB entry
///
/// Shortcut for [`pdb_to_go`] with [`Namespace::CellularComponent`]
///
/// # Errors
///
/// [`crate::GoError::Fetch`] if a record cannot be retrieved
pub fn cc_pdb_to_go<F: RecordFetcher>(fetcher: &F, pdb_id: &str) -> GoResult<Vec<GoTermId>> {
    pdb_to_go(fetcher, pdb_id, Some(Namespace::CellularComponent))
}

#[cfg(test)]
mod test {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;
    use crate::GoError;

    const PDB_2A06: &str = "\
HEADER    OXIDOREDUCTASE                          21-JUN-05   2A06
TITLE     BOVINE CYTOCHROME BC1 COMPLEX
DBREF  2A06 A    1   446  UNP    P31800   QCR1_BOVIN      35    480
DBREF  2A06 N    1   446  UNP    P31800   QCR1_BOVIN      35    480
DBREF  2A06 B    1   439  UNP    P23004   QCR2_BOVIN      15    453
END
";

    const P31800: &str = "\
ID   QCR1_BOVIN              Reviewed;         480 AA.
AC   P31800;
DR   GO; GO:0005743; C:mitochondrial inner membrane; IDA:UniProtKB.
DR   GO; GO:0045275; C:respiratory chain complex III; IDA:UniProtKB.
DR   GO; GO:0046872; F:metal ion binding; IEA:UniProtKB-KW.
DR   GO; GO:0006122; P:mitochondrial electron transport, ubiquinol to cytochrome c; IBA:GO_Central.
//
";

    const P23004: &str = "\
ID   QCR2_BOVIN              Reviewed;         453 AA.
AC   P23004;
DR   GO; GO:0005743; C:mitochondrial inner membrane; IDA:UniProtKB.
DR   GO; GO:0005739; C:mitochondrion; IDA:UniProtKB.
DR   GO; GO:0004222; F:metalloendopeptidase activity; IBA:GO_Central.
//
";

    /// Serves records from memory and counts the requests
    #[derive(Default)]
    struct MockFetcher {
        records: HashMap<(Database, String), &'static str>,
        requests: RefCell<Vec<String>>,
    }

    impl MockFetcher {
        fn bc1_complex() -> Self {
            let mut fetcher = MockFetcher::default();
            fetcher
                .records
                .insert((Database::Pdb, "2a06".to_string()), PDB_2A06);
            fetcher
                .records
                .insert((Database::UniProtKb, "P31800".to_string()), P31800);
            fetcher
                .records
                .insert((Database::UniProtKb, "P23004".to_string()), P23004);
            fetcher
        }
    }

    impl RecordFetcher for MockFetcher {
        fn fetch(&self, db: Database, accession: &str) -> GoResult<String> {
            self.requests.borrow_mut().push(format!("{db}:{accession}"));
            self.records
                .get(&(db, accession.to_string()))
                .map(|record| (*record).to_string())
                .ok_or_else(|| GoError::Fetch(format!("no entries found for {db}:{accession}")))
        }
    }

    #[test]
    fn cellular_components_of_pdb_entry() {
        let fetcher = MockFetcher::bc1_complex();
        let go_ids = cc_pdb_to_go(&fetcher, "2a06").unwrap();
        assert_eq!(go_ids, ["GO:0005743", "GO:0045275", "GO:0005739"]);
    }

    #[test]
    fn uniprot_entries_are_fetched_once() {
        let fetcher = MockFetcher::bc1_complex();
        cc_pdb_to_go(&fetcher, "2a06").unwrap();
        assert_eq!(
            *fetcher.requests.borrow(),
            ["pdb:2a06", "uniprotkb:P31800", "uniprotkb:P23004"]
        );
    }

    #[test]
    fn all_namespaces() {
        let fetcher = MockFetcher::bc1_complex();
        let go_ids = pdb_to_go(&fetcher, "2a06", None).unwrap();
        assert_eq!(go_ids.len(), 6);

        let go_ids = pdb_to_go(&fetcher, "2a06", Some(Namespace::MolecularFunction)).unwrap();
        assert_eq!(go_ids, ["GO:0046872", "GO:0004222"]);
    }

    #[test]
    fn missing_records() {
        let fetcher = MockFetcher::bc1_complex();
        assert!(matches!(
            cc_pdb_to_go(&fetcher, "1xyz"),
            Err(GoError::Fetch(_))
        ));

        let mut fetcher = MockFetcher::bc1_complex();
        fetcher
            .records
            .remove(&(Database::UniProtKb, "P23004".to_string()));
        assert!(cc_pdb_to_go(&fetcher, "2a06").is_err());
    }

    #[test]
    fn database_names() {
        assert_eq!(Database::Pdb.to_string(), "pdb");
        assert_eq!(Database::UniProtKb.as_str(), "uniprotkb");
    }
}
