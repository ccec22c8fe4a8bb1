//! `DBREF` records of PDB entries
//!
//! | Record | Columns | Content |
//! | --- | --- | --- |
//! | `DBREF` | 8 - 11 | PDB id |
//! | `DBREF` | 13 | Chain |
//! | `DBREF` | 27 - 32 | Database |
//! | `DBREF` | 34 - 41 | Accession |
//! | `DBREF1` | 27 - 32 | Database |
//! | `DBREF2` | 19 - 40 | Accession |
//!
//! Accessions that don't fit into the `DBREF` columns are split into a
//! `DBREF1` record with the database and a `DBREF2` record with the
//! accession.
use tracing::trace;

const UNIPROT: &str = "UNP";

/// Returns the UniProt accessions referenced by a PDB entry
///
/// Every accession is returned once, in order of appearance.
///
/// ```
/// use godag::xref::pdb_uniprot_accessions;
///
/// let record = "DBREF  2A06 A    1   446  UNP    P31800   QCR1_BOVIN      35    480\n\
///               DBREF  2A06 N    1   446  UNP    P31800   QCR1_BOVIN      35    480\n";
/// assert_eq!(pdb_uniprot_accessions(record), vec!["P31800"]);
/// ```
pub fn pdb_uniprot_accessions(pdb_record: &str) -> Vec<String> {
    let mut accessions: Vec<String> = Vec::new();
    // chain of a DBREF1 record that awaits its DBREF2 continuation
    let mut pending: Option<&str> = None;

    for line in pdb_record.lines() {
        let accession = match line.get(..6) {
            Some("DBREF ") => {
                pending = None;
                (column(line, 26, 32) == UNIPROT).then(|| column(line, 33, 41))
            }
            Some("DBREF1") => {
                pending = (column(line, 26, 32) == UNIPROT).then(|| chain(line));
                None
            }
            Some("DBREF2") => {
                if pending.is_some_and(|c| c == chain(line)) {
                    pending = None;
                    Some(column(line, 18, 40))
                } else {
                    None
                }
            }
            _ => None,
        };
        if let Some(accession) = accession.filter(|acc| !acc.is_empty()) {
            if !accessions.iter().any(|known| known == accession) {
                trace!("Found UniProt reference {accession}");
                accessions.push(accession.to_string());
            }
        }
    }
    accessions
}

/// PDB id and chain, columns 8 - 13
fn chain(line: &str) -> &str {
    column(line, 7, 13)
}

/// Returns the trimmed content of the 0-based column range
///
/// Lines are often not padded to 80 characters, so the range is
/// clamped to the line length.
fn column(line: &str, start: usize, end: usize) -> &str {
    let end = end.min(line.len());
    line.get(start..end).map_or("", str::trim)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dbref_records() {
        let record = "\
HEADER    OXIDOREDUCTASE                          21-JUN-05   2A06
DBREF  2A06 A    1   446  UNP    P31800   QCR1_BOVIN      35    480
DBREF  2A06 B    1   439  UNP    P23004   QCR2_BOVIN      15    453
DBREF  2A06 N    1   446  UNP    P31800   QCR1_BOVIN      35    480
DBREF  2A06 X    1    12  PDB    2A06     2A06             1     12
SEQRES   1 A  446  TYR SER GLN THR ALA ALA ALA ARG VAL ALA GLU ILE LEU
";
        assert_eq!(pdb_uniprot_accessions(record), vec!["P31800", "P23004"]);
    }

    #[test]
    fn split_dbref_records() {
        let record = "\
DBREF1 4V6X A    1   120  UNP                  A0A024R1R8_HUMAN
DBREF2 4V6X A     A0A024R1R8                          1         120
DBREF1 4V6X B    1    98  GB                   NC_000913
DBREF2 4V6X B     49175990                            1          98
DBREF  4V6X C    1   207  UNP    P62258   1433E_HUMAN      1    207
";
        assert_eq!(
            pdb_uniprot_accessions(record),
            vec!["A0A024R1R8", "P62258"]
        );
    }

    #[test]
    fn orphan_dbref2() {
        let record = "DBREF2 4V6X A     A0A024R1R8                          1         120\n";
        assert!(pdb_uniprot_accessions(record).is_empty());
    }

    #[test]
    fn unrelated_records() {
        assert!(pdb_uniprot_accessions("").is_empty());
        assert!(pdb_uniprot_accessions("END\n").is_empty());
        assert!(pdb_uniprot_accessions("DBREF  2A06 A    1   446  UNP").is_empty());
    }

    #[test]
    fn columns() {
        assert_eq!(column("DBREF  2A06 A", 7, 11), "2A06");
        assert_eq!(column("DBREF", 7, 11), "");
        assert_eq!(column("DBREF  2A", 7, 11), "2A");
    }
}
