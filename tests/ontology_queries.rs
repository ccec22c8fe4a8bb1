use godag::{GoError, Namespace, Ontology, Partition, Relation};

fn ontology() -> Ontology {
    Ontology::from_obo("tests/example.obo").expect("example ontology must load")
}

#[test]
fn offspring_of_leaf_is_empty() {
    let ont = ontology();
    for term in &ont {
        if term.is_leaf() {
            let offspring = ont
                .go_get(&term.id().to_string(), Partition::offspring(term.namespace()))
                .unwrap();
            assert!(offspring.is_empty(), "{}", term.id());
        }
    }
}

#[test]
fn offspring_and_ancestors_mirror_each_other() {
    let ont = ontology();
    for term in &ont {
        let id = term.id().to_string();
        let offspring = ont.go_get(&id, Partition::offspring(term.namespace())).unwrap();
        for child in offspring.terms(&ont) {
            let ancestors = ont
                .go_get(&child.id().to_string(), Partition::ancestor(child.namespace()))
                .unwrap();
            assert!(ancestors.contains(&term.id()), "{} -> {}", id, child.id());
        }
    }
}

#[test]
fn lookups_in_other_namespace_fail() {
    let ont = ontology();
    for namespace in Namespace::ALL {
        for relation in [
            Relation::Offspring,
            Relation::Ancestor,
            Relation::Children,
            Relation::Parents,
        ] {
            let partition = Partition::new(relation, namespace);
            let result = ont.go_get("GO:0005634", partition);
            if namespace == Namespace::CellularComponent {
                assert!(result.is_ok(), "{partition}");
            } else {
                assert!(matches!(result, Err(GoError::LookupFailed(_))), "{partition}");
            }
        }
    }
    assert!(ont.go_get("GO:9999999", Partition::offspring(Namespace::CellularComponent)).is_err());
}

#[test]
fn primary_ids() {
    let ont = ontology();
    assert_eq!(ont.primary_go_id("GO:0048253").unwrap(), "GO:0050333");
    assert_eq!(ont.primary_go_id("GO:0050333").unwrap(), "GO:0050333");
    assert_eq!(ont.primary_go_id("GO:0001621").unwrap(), "GO:0004930");

    let err = ont.primary_go_id("GO:9999999").unwrap_err();
    assert!(err.to_string().contains("Is the ontology data up to date?"));
}

#[test]
fn subsumption_is_reflexive_but_not_symmetric() {
    let ont = ontology();
    for term in &ont {
        let id = term.id().to_string();
        assert!(ont.subsume(&id, &id).unwrap());
        // part_of edges may cross namespaces, subsumption does not
        for parent in term
            .parents()
            .filter(|parent| parent.namespace() == term.namespace())
        {
            let parent_id = parent.id().to_string();
            assert!(ont.subsume(&parent_id, &id).unwrap());
            assert!(!ont.subsume(&id, &parent_id).unwrap());
        }
    }
}

#[test]
fn tester_agrees_with_subsume() {
    let ont = ontology();
    let ids: Vec<String> = ont.terms().map(|term| term.id().to_string()).collect();
    for subsumer in &ids {
        let tester = ont.subsume_tester(subsumer).unwrap();
        for subsumee in &ids {
            assert_eq!(
                tester.subsumes(subsumee).unwrap(),
                ont.subsume(subsumer, subsumee).unwrap(),
                "{subsumer} {subsumee}"
            );
            assert_eq!(
                tester.subsumes_exact(subsumee),
                tester.subsumes(subsumee).unwrap()
            );
        }
    }
}

#[test]
fn part_of_relations_are_parents() {
    let ont = ontology();
    // G-protein coupled receptor activity is part_of a biological process
    let parents = ont
        .go_get(
            "GO:0004930",
            Partition::new(Relation::Parents, Namespace::MolecularFunction),
        )
        .unwrap();
    assert_eq!(parents.to_strings(), vec!["GO:0038023"]);
    assert!(!ont.subsume("GO:0007186", "GO:0004930").unwrap());
    let term = ont.go(4930u32).unwrap();
    assert_eq!(term.parent_ids().len(), 2);
}

#[test]
fn binary_snapshot_file() {
    let ont = ontology();
    let path = std::env::temp_dir().join(format!("godag-{}.bin", std::process::id()));
    std::fs::write(&path, ont.as_bytes()).unwrap();

    let snapshot = Ontology::from_binary(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(snapshot.len(), ont.len());
    assert_eq!(snapshot.data_version(), ont.data_version());
    assert_eq!(
        snapshot.cordial_cc("GO:0005634").unwrap(),
        ont.cordial_cc("GO:0005634").unwrap()
    );
    assert_eq!(snapshot.term("GO:0031676").unwrap(), "plasma membrane-derived thylakoid membrane");
    assert!(snapshot.go(5623u32).unwrap().is_obsolete());
}

#[test]
fn missing_files() {
    assert!(matches!(
        Ontology::from_binary("tests/does_not_exist.bin"),
        Err(GoError::CannotOpenFile(_))
    ));
    assert!(matches!(
        Ontology::from_standard("tests/no_such_folder"),
        Err(GoError::CannotOpenFile(_))
    ));
}

#[test]
fn standard_folder() {
    let folder = std::env::temp_dir().join(format!("godag-standard-{}", std::process::id()));
    std::fs::create_dir_all(&folder).unwrap();
    std::fs::copy("tests/example.obo", folder.join(godag::OBO_FILENAME)).unwrap();

    let ont = Ontology::from_standard(&folder);
    std::fs::remove_dir_all(&folder).unwrap();
    let ont = ont.unwrap();

    assert_eq!(ont.len(), 36);
    assert_eq!(ont.data_version(), "releases/2023-01-01");
    assert_eq!(ont.term("GO:0005634").unwrap(), "nucleus");
    assert_eq!(ont.primary_go_id("GO:0048253").unwrap(), "GO:0050333");
}
