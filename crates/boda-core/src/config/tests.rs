use super::*;
use crate::locale::Locale;

#[test]
fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.site.name, "Iker eta Nerea");
    assert_eq!(cfg.site.log_level, "info");
    assert!(cfg.site.log_dir.is_empty());
    assert_eq!(cfg.server.addr(), "127.0.0.1:3000");
    assert!(cfg.i18n.messages_dir.is_empty());
}

#[test]
fn test_partial_toml_fills_defaults() {
    let toml_str = r#"
        [server]
        port = 8080
    "#;
    let cfg: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.server.host, "127.0.0.1");
    assert_eq!(cfg.site.name, "Iker eta Nerea");
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let cfg = load("/nonexistent/__boda_test__/boda.toml").unwrap();
    assert_eq!(cfg.server.port, 3000);
}

#[test]
fn test_read_missing_file_is_none() {
    assert!(read("/nonexistent/__boda_test__/boda.toml")
        .unwrap()
        .is_none());
}

#[test]
fn test_load_from_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("boda.toml");
    std::fs::write(
        &path,
        r#"
        [site]
        name = "Boda"
        log_level = "debug"

        [server]
        host = "0.0.0.0"
        port = 8000
        "#,
    )
    .unwrap();

    let read_back = read(path.to_str().unwrap()).unwrap();
    assert_eq!(read_back.map(|c| c.server.port), Some(8000));

    let cfg = load(path.to_str().unwrap()).unwrap();
    assert_eq!(cfg.site.name, "Boda");
    assert_eq!(cfg.site.log_level, "debug");
    assert_eq!(cfg.server.addr(), "0.0.0.0:8000");
}

#[test]
fn test_load_invalid_toml() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("boda.toml");
    std::fs::write(&path, "[server\nport = ").unwrap();
    let err = load(path.to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("failed to parse config"));
}

#[test]
fn test_catalog_defaults_to_embedded() {
    let catalog = I18nConfig::default().catalog().unwrap();
    assert_eq!(catalog.translate(Locale::Es, "navigation.media"), "Fotos");
}

#[test]
fn test_catalog_rejects_missing_dir() {
    let cfg = I18nConfig {
        messages_dir: "/nonexistent/__boda_messages__".to_string(),
    };
    let err = cfg.catalog().unwrap_err();
    assert!(err.to_string().contains("is not a directory"));
}

#[test]
fn test_shellexpand_leaves_plain_paths() {
    assert_eq!(shellexpand("/srv/boda"), "/srv/boda");
    assert_eq!(shellexpand("messages"), "messages");
}
