use godag::xref::{cc_pdb_to_go, DbFetch};
use godag::Ontology;

/// Fetches the cellular component annotations of a PDB entry
///
/// The endpoint can be changed with `GO_DBFETCH_URL`.
///
/// ```bash
/// cargo run --example pdb_to_go -- go.bin 2a06
/// ```
fn main() {
    simple_logger::SimpleLogger::new().env().init().unwrap();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        println!("Usage: pdb_to_go <binary ontology> <PDB id>");
        return;
    }
    let ontology = Ontology::from_binary(&args[1]).unwrap();
    let dbfetch = DbFetch::from_env().unwrap();

    for go_id in cc_pdb_to_go(&dbfetch, &args[2]).unwrap() {
        match ontology.go(go_id) {
            Some(term) => println!("{go_id}\t{}", term.name()),
            None => println!("{go_id}\t(not in ontology {})", ontology.data_version()),
        }
    }
}
