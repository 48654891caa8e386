use nglga_core::{LgaDb, LgaError, LgaSearch};
use std::fs;
use tempfile::TempDir;

#[test]
fn missing_dataset_is_not_found() {
    let dir = TempDir::new().unwrap();
    let err = LgaDb::load_from_dir(dir.path()).unwrap_err();
    match err {
        LgaError::NotFound(msg) => assert!(msg.contains("nigeria_states_and_lgas.json")),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn wrong_shape_is_malformed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(LgaDb::default_dataset_filename());

    for doc in [
        r#"["Lagos"]"#,
        r#"{"Lagos": "Ikeja"}"#,
        r#"{"Lagos": ["Ikeja", 7]}"#,
        r#"{"Lagos": ["Ikeja""#,
    ] {
        fs::write(&path, doc).unwrap();
        let err = LgaDb::load_from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, LgaError::Malformed(_)), "{doc}: {err:?}");
    }
}

#[test]
fn load_from_path_uses_parent_as_data_dir() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.json");
    fs::write(&path, r#"{"Kano": ["Nassarawa"]}"#).unwrap();

    let db = LgaDb::load_from_path(&path).unwrap();
    assert_eq!(db.states(), vec!["Kano"]);
    assert_eq!(db.data_dir(), dir.path());
}

#[cfg(feature = "compact")]
#[test]
fn loads_gzipped_dataset() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nigeria_states_and_lgas.json.gz");
    let mut enc = GzEncoder::new(fs::File::create(&path).unwrap(), Compression::default());
    enc.write_all(br#"{"Lagos": ["Ikeja", "Eti-Osa"], "Kano": ["Nassarawa"]}"#)
        .unwrap();
    enc.finish().unwrap();

    let db = LgaDb::load_from_path(&path).unwrap();
    assert_eq!(db.states(), vec!["Lagos", "Kano"]);
    assert_eq!(db.find_state_by_lga("ikeja"), Some("Lagos"));
}
