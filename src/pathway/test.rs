use super::*;

const PATHWAYS: &str = r#"{
    "file_info": { "source": "curated panel", "date": "2018-02-08" },
    "MAPK signaling": ["BRAF", "KRAS", "NRAS", "MAP2K1"],
    "PI3K/AKT signaling": ["PIK3CA", "PTEN", "AKT1", "KRAS"],
    "DNA repair": ["BRCA1", "BRCA2", "ATM"]
}"#;

fn load() -> PathwayMap {
    PathwayMap::from_reader(PATHWAYS.as_bytes()).unwrap()
}

fn csv(rows: &[PathwayRow]) -> String {
    let mut out = Vec::new();
    write_rows(&mut out, rows).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn file_info_is_not_a_pathway() {
    let map = load();
    let names: Vec<&str> = map.names().collect();
    assert_eq!(names, ["DNA repair", "MAPK signaling", "PI3K/AKT signaling"]);
    assert!(matches!(map.genes_in(FILE_INFO_KEY), Err(PathwayError::NoSuchPathway(_))));
}

#[test]
fn genes_to_pathways() {
    let map = load();
    assert_eq!(map.pathways_for("KRAS"), ["MAPK signaling", "PI3K/AKT signaling"]);
    assert_eq!(map.pathways_for("kras"), Vec::<&str>::new());

    let rows = map.pathways_for_genes("PTEN, KRAS,,PTEN");
    let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, ["PTEN", "KRAS"]);
    assert_eq!(
        csv(&rows),
        "PTEN,PI3K/AKT signaling\nKRAS,MAPK signaling,PI3K/AKT signaling\n"
    );
}

#[test]
fn gene_without_pathway_still_gets_a_row() {
    let rows = load().pathways_for_genes("TP53,ATM");
    assert!(rows[0].matches.is_empty());
    assert_eq!(csv(&rows), "TP53,NA\nATM,DNA repair\n");
}

#[test]
fn pathway_to_genes() {
    let map = load();
    let row = map.genes_in("DNA repair").unwrap();
    assert_eq!(row.matches, ["BRCA1", "BRCA2", "ATM"]);
    assert_eq!(csv(&[row]), "DNA repair,BRCA1,BRCA2,ATM\n");
}

#[test]
fn no_such_pathway() {
    let err = load().genes_in("Wnt signaling").unwrap_err();
    assert!(matches!(err, PathwayError::NoSuchPathway(ref p) if p == "Wnt signaling"));
    assert_eq!(err.to_string(), "No such pathway 'Wnt signaling'!");
    assert_eq!(err.get_code(), 1);
}

#[test]
fn malformed_files() {
    assert!(matches!(
        PathwayMap::from_reader("{\"MAPK\": [\"BRAF\"".as_bytes()),
        Err(PathwayError::Json(_))
    ));
    assert!(matches!(
        PathwayMap::from_reader("[\"BRAF\"]".as_bytes()),
        Err(PathwayError::NotAnObject)
    ));
    assert!(matches!(
        PathwayMap::from_reader("{\"MAPK\": [\"BRAF\", 7]}".as_bytes()),
        Err(PathwayError::InvalidGeneList { ref pathway }) if pathway == "MAPK"
    ));
}

#[test]
fn names_with_commas_are_quoted() {
    let map = PathwayMap::from_reader(r#"{"Ras, Raf, MEK": ["BRAF"]}"#.as_bytes()).unwrap();
    assert_eq!(csv(&map.pathways_for_genes("BRAF")), "BRAF,\"Ras, Raf, MEK\"\n");
}
