use super::*;

#[test]
fn test_builtin_catalog_has_extraction_regions() {
    let catalog = RegionCatalog::builtin();
    assert_eq!(catalog.regions().len(), 3);
    assert!(catalog.resolve("Rajasthan").is_some());
    assert!(catalog.resolve("Maharashtra").is_some());
    assert!(catalog.resolve("Bihar").is_some());
}

#[test]
fn test_resolve_ignores_case_and_spaces() {
    let catalog = RegionCatalog::builtin();
    let region = catalog.resolve("  raJasThan ").unwrap();
    assert_eq!(region.name, "Rajasthan");
    assert!(catalog.resolve("Atlantis").is_none());
}

#[test]
fn test_from_toml_merges_over_builtin() {
    let toml = r#"
        [[regions]]
        name = "Gujarat"
        bbox = { min_lon = 68.1, min_lat = 20.1, max_lon = 74.5, max_lat = 24.7 }

        [[regions]]
        name = "Bihar"
        bbox = { min_lon = 83.0, min_lat = 24.0, max_lon = 88.5, max_lat = 27.9 }
    "#;
    let catalog = RegionCatalog::from_toml_str(toml).unwrap();
    assert!(catalog.resolve("Gujarat").is_some());
    // Built-in Bihar replaced by the file entry.
    let bihar = catalog.resolve("bihar").unwrap();
    assert_eq!(bihar.bbox.max_lat, 27.9);
    assert_eq!(catalog.regions().len(), 4);
}

#[test]
fn test_from_toml_rejects_inverted_bbox() {
    let toml = r#"
        [[regions]]
        name = "Backwards"
        bbox = { min_lon = 80.0, min_lat = 20.0, max_lon = 70.0, max_lat = 25.0 }
    "#;
    assert!(RegionCatalog::from_toml_str(toml).is_err());
}
