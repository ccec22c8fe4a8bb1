use std::fs::File;
use std::io::{BufRead, BufReader};
use std::time::SystemTime;

use rayon::prelude::*;

use godag::Ontology;

/// Tests a list of GO ids against a single subsumer, in parallel
///
/// The input file contains one GO id per line.
///
/// ```bash
/// cargo run --release --example subsume_batch -- go.bin GO:0003824 ids.txt
/// ```
fn main() {
    simple_logger::SimpleLogger::new().env().init().unwrap();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        println!("Usage: subsume_batch <binary ontology> <subsumer> <file with GO ids>");
        return;
    }
    let ontology = Ontology::from_binary(&args[1]).unwrap();
    let tester = ontology.subsume_tester(&args[2]).unwrap();

    let reader = BufReader::new(File::open(&args[3]).unwrap());
    let go_ids: Vec<String> = reader.lines().map(Result::unwrap).collect();

    let start = SystemTime::now();
    let results: Vec<(&String, String)> = go_ids
        .par_iter()
        .map(|go_id| {
            let result = match tester.subsumes(go_id) {
                Ok(true) => "yes".to_string(),
                Ok(false) => "no".to_string(),
                Err(err) => err.to_string(),
            };
            (go_id, result)
        })
        .collect();
    let duration = start.elapsed().unwrap();

    for (go_id, result) in results {
        println!("{}\t{go_id}\t{result}", tester.master_go_id());
    }
    eprintln!("Tested {} ids in {} ms", go_ids.len(), duration.as_millis());
}
