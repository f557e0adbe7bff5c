use crate::catalog::SiteCatalog;
use crate::errors::{CatalogError, QuizError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::io::Cursor;
use std::path::{Path, PathBuf};

fn temp_catalog_path(extension: &str) -> PathBuf {
    std::env::temp_dir().join(format!("geoquiz-{}.{extension}", uuid::Uuid::new_v4()))
}

#[test]
fn test_bundled_catalog_is_valid() {
    let catalog = SiteCatalog::bundled().expect("Bundled catalog should parse.");

    assert!(!catalog.is_empty());
    let names: HashSet<_> = catalog.iter().map(|site| site.name.as_str()).collect();
    assert_eq!(names.len(), catalog.len(), "site names should be unique");
    assert!(catalog.iter().all(|site| !site.image_ref.is_empty()));
}

#[test]
fn test_records_are_mapped_to_sites() {
    let catalog = SiteCatalog::from_json_str(
        r#"[{"name": "Himeji-jo", "latitude": 34.8394, "longitude": 134.6939, "url": "himeji.jpg"}]"#,
    )
    .expect("Failed to parse a one-site catalog.");

    let site = catalog.get(0).expect("The site should be there.");
    assert_eq!(site.name, "Himeji-jo");
    assert_eq!(site.location.lat(), 34.8394);
    assert_eq!(site.location.lng(), 134.6939);
    assert_eq!(site.image_ref, "himeji.jpg");
    assert!(catalog.get(1).is_none());
}

#[test]
fn test_out_of_range_record_is_reported_with_its_index() {
    let result = SiteCatalog::from_json_str(
        r#"[
            {"name": "Fine", "latitude": 0.0, "longitude": 0.0, "url": "a.jpg"},
            {"name": "Broken", "latitude": 95.0, "longitude": 0.0, "url": "b.jpg"}
        ]"#,
    );

    match result {
        Err(CatalogError::InvalidRecord { index, source }) => {
            assert_eq!(index, 1);
            assert!(matches!(source, QuizError::InvalidCoordinate { .. }));
        }
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn test_malformed_json_is_rejected() {
    let result = SiteCatalog::from_json_str(r#"[{"name": "No coordinates"}]"#);
    assert!(matches!(result, Err(CatalogError::Json { line: 1, .. })));
}

#[test]
fn test_ndjson_reader_skips_blank_lines() {
    let raw = "{\"name\": \"Petra\", \"latitude\": 30.3285, \"longitude\": 35.4444, \"url\": \"petra.jpg\"}\n\
               \n\
               {\"name\": \"Angkor\", \"latitude\": 13.4125, \"longitude\": 103.867, \"url\": \"angkor.jpg\"}\n";

    let catalog = SiteCatalog::from_ndjson_reader(Cursor::new(raw), Path::new("inline.ndjson"))
        .expect("Failed to parse NDJSON.");

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get(1).map(|site| site.name.as_str()), Some("Angkor"));
}

#[test]
fn test_ndjson_errors_carry_the_line_number() {
    let raw = "{\"name\": \"Petra\", \"latitude\": 30.3285, \"longitude\": 35.4444, \"url\": \"petra.jpg\"}\n\
               not json\n";

    let result = SiteCatalog::from_ndjson_reader(Cursor::new(raw), Path::new("inline.ndjson"));

    assert!(matches!(result, Err(CatalogError::Json { line: 2, .. })));
}

#[test]
fn test_load_json_and_ndjson_files() {
    let json_path = temp_catalog_path("json");
    std::fs::write(
        &json_path,
        r#"[{"name": "Taj Mahal", "latitude": 27.1751, "longitude": 78.0421, "url": "taj.jpg"}]"#,
    )
    .expect("Failed to write a temporary catalog.");
    let ndjson_path = temp_catalog_path("ndjson");
    std::fs::write(
        &ndjson_path,
        "{\"name\": \"Taj Mahal\", \"latitude\": 27.1751, \"longitude\": 78.0421, \"url\": \"taj.jpg\"}\n",
    )
    .expect("Failed to write a temporary catalog.");

    let from_json = SiteCatalog::load(&json_path);
    let from_ndjson = SiteCatalog::load(&ndjson_path);
    let _ = std::fs::remove_file(&json_path);
    let _ = std::fs::remove_file(&ndjson_path);

    let from_json = from_json.expect("Failed to load the JSON catalog.");
    let from_ndjson = from_ndjson.expect("Failed to load the NDJSON catalog.");
    assert_eq!(from_json.get(0), from_ndjson.get(0));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let path = temp_catalog_path("json");

    let result = SiteCatalog::load(&path);

    match result {
        Err(CatalogError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn test_random_index_on_empty_catalog() {
    let mut rng = StdRng::seed_from_u64(7);
    assert_eq!(
        SiteCatalog::default().random_index(&mut rng),
        Err(QuizError::EmptyCatalog)
    );
}

#[test]
fn test_random_index_covers_the_catalog() {
    let catalog = SiteCatalog::bundled().expect("Bundled catalog should parse.");
    let mut rng = StdRng::seed_from_u64(42);

    let picked: HashSet<usize> = (0..2000)
        .map(|_| catalog.random_index(&mut rng).expect("Catalog isn't empty."))
        .collect();

    assert!(picked.iter().all(|index| *index < catalog.len()));
    assert_eq!(picked.len(), catalog.len());
}
