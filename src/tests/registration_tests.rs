use super::*;
use crate::services::config::VENDOR_KEY;
use crate::services::game::registry::Hive;
use crate::test_utils::{init_logging, FakeHost, FakeRegistry, FakeStore};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn host() -> FakeHost {
    init_logging();
    FakeHost::new(FakeRegistry::default(), FakeStore::empty())
}

#[test]
fn test_main_registers_game_and_installers() {
    let mut host = host();

    assert!(main(&mut host));

    assert_eq!(host.games.len(), 1);
    assert_eq!(host.games[0].descriptor.id, "fantasygroundsunity");
    let ids: Vec<&str> = host.installers.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "fantasygroundsunity-loosemod",
            "fantasygroundsunity-extfile",
            "fantasygroundsunity-loosemodule",
            "fantasygroundsunity-modfile",
        ]
    );
}

#[test]
fn test_rejected_installer_fails_load() {
    let mut host = host();
    host.installer_limit = Some(2);

    assert!(!main(&mut host));
    assert_eq!(host.installers.len(), 2);
}

#[test]
fn test_bad_config_file_fails_load() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("fgu.json");
    fs::write(&path, "{ broken").unwrap();

    let mut host = host();
    host.config_path = Some(path);

    assert!(!main(&mut host));
    assert!(host.games.is_empty());
}

#[test]
fn test_config_overrides_reach_installers() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("fgu.json");
    fs::write(&path, r#"{ "game_id": "fgu-beta" }"#).unwrap();

    let mut host = host();
    host.config_path = Some(path);
    register(&mut host).unwrap();

    assert_eq!(host.games[0].descriptor.id, "fgu-beta");
    let files = vec!["Theme.ext".to_string()];
    let ext = &host.installers[1].installer;
    assert!(ext.test_supported(&files, "fgu-beta").supported);
    assert!(!ext.test_supported(&files, "fantasygroundsunity").supported);
}

#[tokio::test]
async fn test_registered_resolver_uses_host_registry() {
    init_logging();
    let registry = FakeRegistry::default().with(Hive::CurrentUser, VENDOR_KEY, "DataDir", "/fg/data");
    let mut host = FakeHost::new(registry, FakeStore::empty());
    register(&mut host).unwrap();

    let resolver = host.games[0].resolver.clone();
    assert_eq!(resolver.config().data_dir.value, "DataDir");
    assert_eq!(resolver.find_mod_data_path().await, PathBuf::from("/fg/data"));
}
