use std::{fs::File, io::Write};

use godag::Ontology;

/// Converts a `go-basic.obo` file into a binary snapshot
///
/// ```bash
/// cargo run --release --example obo_to_bin -- go-basic.obo go.bin
/// ```
fn main() {
    simple_logger::SimpleLogger::new().env().init().unwrap();
    let mut args = std::env::args();
    if args.len() == 3 {
        let obo_file = args.nth(1).unwrap();
        let ontology = Ontology::from_obo(&obo_file).unwrap();
        println!(
            "Ontology {} with {} terms",
            ontology.data_version(),
            ontology.len()
        );
        let filename = args.next().unwrap();
        let mut fh = File::create(filename).unwrap();
        match fh.write_all(&ontology.as_bytes()) {
            Ok(()) => println!("Saved output"),
            Err(err) => println!("Error: {err}"),
        };
    } else {
        println!("Usage: obo_to_bin <go-basic.obo> <output file>");
    }
}
