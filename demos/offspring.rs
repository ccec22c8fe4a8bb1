use std::path::Path;

use godag::{Namespace, Ontology, Partition};

/// Constructs an Ontology from either an OBO file, a folder
/// containing `go-basic.obo` or a binary snapshot
fn read_ontology(path_arg: &str) -> Ontology {
    let path = Path::new(path_arg);
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("obo") => Ontology::from_obo(path).unwrap(),
        _ if path.is_file() => Ontology::from_binary(path).unwrap(),
        _ => Ontology::from_standard(path).unwrap(),
    }
}

/// Prints name, namespace, ancestors and offspring of a GO term
///
/// ```bash
/// cargo run --example offspring -- tests/example.obo GO:0005634
/// ```
fn main() {
    simple_logger::SimpleLogger::new().env().init().unwrap();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        println!("Usage: offspring <ontology> <GO id>");
        return;
    }
    let ontology = read_ontology(&args[1]);
    let go_id = ontology.primary_go_id(&args[2]).unwrap().to_string();
    let namespace = ontology.namespace(&go_id).unwrap();

    println!("{go_id}\t{}\t{namespace}", ontology.term(&go_id).unwrap());

    let ancestors = ontology
        .go_get(&go_id, Partition::ancestor(namespace))
        .unwrap();
    println!("Ancestors:");
    for term in ancestors.terms(&ontology) {
        println!("  {}\t{}", term.id(), term.name());
    }

    let offspring = match namespace {
        Namespace::CellularComponent => ontology.cellular_component_offspring(&go_id),
        Namespace::MolecularFunction => ontology.molecular_function_offspring(&go_id),
        Namespace::BiologicalProcess => ontology.biological_process_offspring(&go_id),
    }
    .unwrap();
    println!("Offspring:");
    for term in offspring.terms(&ontology) {
        println!("  {}\t{}", term.id(), term.name());
    }
}
