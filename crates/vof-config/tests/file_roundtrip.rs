//! Integration tests for on-disk configuration roots.

use vof_config::{ConfigError, ConfigSource, Dictionary, FileSource, load, save_json, save_yaml};

fn case_root() -> Dictionary {
    let mut coeffs = Dictionary::new();
    coeffs.insert("nSmooth", 3_u32).unwrap();
    coeffs.insert("cSmooth", 0.25_f64).unwrap();

    let mut root = Dictionary::new();
    root.insert("curvatureModel", "smoothed").unwrap();
    root.insert_dict("smoothedCoeffs", coeffs);
    root
}

#[test]
fn yaml_file_roundtrip() {
    let path = std::env::temp_dir().join("vof_config_roundtrip.yaml");
    let root = case_root();
    save_yaml(&path, &root).unwrap();
    assert_eq!(load(&path).unwrap(), root);
}

#[test]
fn json_file_roundtrip() {
    let path = std::env::temp_dir().join("vof_config_roundtrip.json");
    let root = case_root();
    save_json(&path, &root).unwrap();
    assert_eq!(load(&path).unwrap(), root);
}

#[test]
fn file_source_rereads_on_every_load() {
    let path = std::env::temp_dir().join("vof_config_live_reload.yaml");
    std::fs::write(&path, "smoothedCoeffs:\n  nSmooth: 1\n").unwrap();
    let source = FileSource::new(&path);

    let first = source.load().unwrap().optional_sub_dict("smoothedCoeffs").unwrap();
    assert_eq!(first.lookup::<u32>("nSmooth").unwrap(), 1);

    std::fs::write(&path, "smoothedCoeffs:\n  nSmooth: 5\n").unwrap();
    let second = source.load().unwrap().optional_sub_dict("smoothedCoeffs").unwrap();
    assert_eq!(second.lookup::<u32>("nSmooth").unwrap(), 5);
}

#[test]
fn malformed_yaml_is_reported_by_parser() {
    let path = std::env::temp_dir().join("vof_config_malformed.yaml");
    std::fs::write(&path, "smoothedCoeffs: [unterminated\n").unwrap();
    let err = FileSource::new(&path).load().unwrap_err();
    assert!(matches!(err, ConfigError::Yaml(_)));
}
