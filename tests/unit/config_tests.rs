use std::path::{Path, PathBuf};

use sysbridge_lib::config::{
    create_default_config, load_config, locate_config_file, GatewayConfig, DEFAULT_LISTEN,
};

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let config = load_config(Path::new("/no/such/config.toml"));

    assert_eq!(config, create_default_config());
    assert_eq!(config.listen, DEFAULT_LISTEN);
}

#[test]
fn test_unparsable_file_falls_back_to_defaults() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("config.toml");
    std::fs::write(&path, "listen = [not toml").expect("write config");

    let config = load_config(&path);

    assert_eq!(config, create_default_config());
}

#[test]
fn test_incomplete_file_falls_back_to_defaults() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("config.toml");
    // A file missing required keys is treated the same as a broken one
    std::fs::write(&path, "listen = \"127.0.0.1:9000\"\n").expect("write config");

    let config = load_config(&path);

    assert_eq!(config, create_default_config());
}

#[test]
fn test_valid_file_is_loaded() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("config.toml");
    std::fs::write(
        &path,
        "listen = \"127.0.0.1:8400\"\nbase_dir = \"/srv/files\"\nallowed_commands = \"network, Show Files\"\n",
    )
    .expect("write config");

    let config = load_config(&path);

    assert_eq!(config.listen, "127.0.0.1:8400");
    assert_eq!(config.base_dir, "/srv/files");
    assert_eq!(config.resolve_base_dir(), PathBuf::from("/srv/files"));

    // Entries are trimmed and lowercased
    let allow_list = config.allow_list();
    assert_eq!(allow_list.len(), 2);
    assert!(allow_list.contains("network"));
    assert!(allow_list.contains("show files"));
    assert!(!allow_list.contains("process"));
}

#[test]
fn test_default_allow_list_covers_every_command() {
    let allow_list = create_default_config().allow_list();

    for kind in sysbridge_lib::commands::CommandKind::ALL {
        assert!(
            allow_list.contains(kind.name()),
            "default allow list is missing {}",
            kind.name()
        );
    }
}

#[test]
fn test_locate_prefers_explicit_path() {
    let explicit = Path::new("/etc/sysbridge/config.toml");
    assert_eq!(
        locate_config_file(Some(explicit)),
        PathBuf::from("/etc/sysbridge/config.toml")
    );
}

#[test]
fn test_custom_allow_list_shrinks_surface() {
    let config = GatewayConfig {
        listen: DEFAULT_LISTEN.to_string(),
        base_dir: String::new(),
        allowed_commands: "network".to_string(),
    };

    let allow_list = config.allow_list();
    assert!(allow_list.contains("network"));
    assert!(!allow_list.contains("shut down"));
    assert!(!allow_list.contains("create file"));
}
