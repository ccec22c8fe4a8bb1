use godag::Ontology;

/// Prints the cordial cellular components of a GO term
///
/// ```bash
/// cargo run --example cordial -- tests/example.obo GO:0005634
/// ```
fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        println!("Usage: cordial <go-basic.obo> <GO id>");
        return;
    }
    let ontology = Ontology::from_obo(&args[1]).unwrap();
    match ontology.cordial_cc(&args[2]) {
        Ok(cordial) => {
            for term in cordial.terms(&ontology) {
                println!("{}\t{}", term.id(), term.name());
            }
        }
        Err(err) => println!("Error: {err}"),
    }
}
