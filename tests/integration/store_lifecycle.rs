//! Integration tests for the load-merge-persist lifecycle

use homevar::codec::read_document;
use homevar::{ConfigError, ConfigStore, Document, Format, LoadOutcome};
use tempfile::TempDir;

use crate::integration::test_utils::write_template;

fn yaml(text: &str) -> Document {
    serde_yaml::from_str(text).unwrap()
}

#[test]
fn test_bootstrap_writes_template_to_disk() {
    let temp_dir = TempDir::new().unwrap();
    let template = write_template(&temp_dir, "config-template.yml", "a: 1\nb: [1, 2]\n");
    let dir = temp_dir.path().join("var").join("app");

    let store = ConfigStore::open_in(&dir, Some(template.as_path()), "config.yml").unwrap();

    assert_eq!(store.get(), yaml("a: 1\nb: [1, 2]\n"));
    assert!(store.path().exists());
    assert_eq!(
        read_document(store.path(), Format::Yaml).unwrap(),
        yaml("a: 1\nb: [1, 2]\n")
    );
}

#[test]
fn test_user_values_survive_template_upgrade() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("var").join("app");
    let v1 = write_template(
        &temp_dir,
        "v1.yml",
        "server:\n  host: localhost\n  port: 80\nplugins: [core]\n",
    );

    let store = ConfigStore::open_in(&dir, Some(v1.as_path()), "config.yml").unwrap();
    store
        .update(&yaml("server:\n  port: 8443\nplugins: [extra]\n"))
        .unwrap();
    store.try_write().unwrap();
    drop(store);

    // A newer template adds keys; the user's port and plugin stay.
    let v2 = write_template(
        &temp_dir,
        "v2.yml",
        "server:\n  host: localhost\n  port: 80\n  timeout: 30\nplugins: [core, metrics]\nlogging:\n  level: info\n",
    );
    let store = ConfigStore::open_in(&dir, Some(v2.as_path()), "config.yml").unwrap();
    assert_eq!(store.last_load(), LoadOutcome::Merged);
    assert_eq!(
        store.get(),
        yaml(
            "server:\n  host: localhost\n  port: 8443\n  timeout: 30\nplugins: [core, metrics, extra]\nlogging:\n  level: info\n"
        )
    );
}

#[test]
fn test_refresh_picks_up_template_edits() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("app");
    let template = write_template(&temp_dir, "t.yml", "a: 1\n");

    let mut store = ConfigStore::open_in(&dir, Some(template.as_path()), "config.yml").unwrap();
    std::fs::write(&template, "a: 1\nb: new\n").unwrap();
    store.refresh().unwrap();

    assert_eq!(store.get(), yaml("a: 1\nb: new\n"));
}

#[test]
fn test_unreadable_template_is_absent() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("app");
    let template = write_template(&temp_dir, "t.json", "{ broken");

    let store = ConfigStore::open_in(&dir, Some(template.as_path()), "config.yml").unwrap();
    assert_eq!(store.last_load(), LoadOutcome::Empty);
    assert_eq!(store.get(), Document::mapping());
}

#[test]
fn test_toml_live_file() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("app");
    let template = write_template(&temp_dir, "t.toml", "name = \"demo\"\n\n[limits]\nmax = 10\n");

    let store = ConfigStore::open_in(&dir, Some(template.as_path()), "settings.toml").unwrap();
    assert_eq!(store.value_at("limits.max"), Some(Document::Integer(10)));
    let text = std::fs::read_to_string(store.path()).unwrap();
    assert!(text.contains("[limits]"));
}

#[test]
fn test_independent_stores_coexist() {
    let temp_dir = TempDir::new().unwrap();
    let first = ConfigStore::open_in(temp_dir.path().join("one"), None, "config.yml").unwrap();
    let second = ConfigStore::open_in(temp_dir.path().join("two"), None, "config.yml").unwrap();

    first.update(&yaml("name: one\n")).unwrap();
    second.update(&yaml("name: two\n")).unwrap();

    assert_eq!(first.value("name"), Some(Document::from("one")));
    assert_eq!(second.value("name"), Some(Document::from("two")));
}

#[test]
fn test_update_type_mismatch_leaves_file_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("app");
    let template = write_template(&temp_dir, "t.yml", "hosts: [a]\n");
    let store = ConfigStore::open_in(&dir, Some(template.as_path()), "config.yml").unwrap();

    let err = store.update(&yaml("hosts:\n  primary: b\n")).unwrap_err();
    assert!(matches!(err, ConfigError::TypeMismatch { ref path, .. } if path == "hosts"));
    assert_eq!(
        read_document(store.path(), Format::Yaml).unwrap(),
        yaml("hosts: [a]\n")
    );
}
