use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sysbridge_lib::commands::{CommandDispatcher, Speaker};
use sysbridge_lib::utils::AppResult;

/// Speaker that records spoken text instead of producing audio.
struct RecordingSpeaker {
    spoken: Mutex<Vec<String>>,
}

impl RecordingSpeaker {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            spoken: Mutex::new(Vec::new()),
        })
    }

    fn texts(&self) -> Vec<String> {
        self.spoken.lock().expect("speaker lock").clone()
    }
}

#[async_trait]
impl Speaker for RecordingSpeaker {
    async fn speak(&self, text: &str) -> AppResult<()> {
        self.spoken.lock().expect("speaker lock").push(text.to_string());
        Ok(())
    }
}

fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn dispatcher_in(dir: &std::path::Path) -> CommandDispatcher {
    CommandDispatcher::new(dir.to_path_buf(), RecordingSpeaker::new())
}

#[tokio::test]
async fn test_unknown_command_is_rejected_without_prefix() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dispatcher = dispatcher_in(tmp.path());

    let result = dispatcher.execute("reboot", &HashMap::new()).await;

    assert!(!result.success);
    assert_eq!(result.message, "Invalid command type");
}

#[tokio::test]
async fn test_missing_arguments_listed_in_declaration_order() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dispatcher = dispatcher_in(tmp.path());

    // Both arguments missing: source must come before destination
    let result = dispatcher.execute("copy file", &HashMap::new()).await;
    assert!(!result.success);
    assert_eq!(result.message, "Missing arguments: source, destination");

    // Only source missing
    let result = dispatcher
        .execute("copy file", &args(&[("destination", "out.txt")]))
        .await;
    assert!(!result.success);
    assert_eq!(result.message, "Missing arguments: source");

    // Validation failures carry no "Computer: " prefix
    assert!(!result.message.starts_with("Computer:"));
}

#[tokio::test]
async fn test_create_file_then_show_files_lists_it() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dispatcher = dispatcher_in(tmp.path());

    let created = dispatcher
        .execute("create file", &args(&[("target", "report.txt")]))
        .await;
    assert!(created.success, "create failed: {}", created.message);
    assert_eq!(created.message, "Computer: Created file report.txt");

    let listed = dispatcher.execute("show files", &args(&[("target", "")])).await;
    assert!(listed.success, "listing failed: {}", listed.message);
    assert!(
        listed.message.contains("report.txt"),
        "created file missing from listing: {}",
        listed.message
    );
    assert!(listed.message.starts_with("Computer: Files in "));
}

#[tokio::test]
async fn test_remove_missing_file_reports_not_found() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dispatcher = dispatcher_in(tmp.path());

    let result = dispatcher
        .execute("remove file", &args(&[("target", "ghost.txt")]))
        .await;

    assert!(!result.success);
    assert_eq!(result.message, "Computer: File ghost.txt not found");
}

#[tokio::test]
async fn test_copy_folder_merges_into_existing_destination() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let root = tmp.path();

    std::fs::create_dir_all(root.join("src/sub")).expect("create src tree");
    std::fs::write(root.join("src/a.txt"), "alpha").expect("write a");
    std::fs::write(root.join("src/sub/b.txt"), "beta").expect("write b");
    std::fs::create_dir_all(root.join("dst")).expect("create dst");
    std::fs::write(root.join("dst/existing.txt"), "keep me").expect("write existing");

    let dispatcher = dispatcher_in(root);
    let result = dispatcher
        .execute(
            "copy folder",
            &args(&[("source", "src"), ("destination", "dst")]),
        )
        .await;

    assert!(result.success, "copy failed: {}", result.message);
    assert_eq!(result.message, "Computer: Copied folder from src to dst");

    // Copied entries are present, pre-existing unrelated files survive
    assert_eq!(
        std::fs::read_to_string(root.join("dst/a.txt")).expect("a copied"),
        "alpha"
    );
    assert_eq!(
        std::fs::read_to_string(root.join("dst/sub/b.txt")).expect("b copied"),
        "beta"
    );
    assert_eq!(
        std::fs::read_to_string(root.join("dst/existing.txt")).expect("existing kept"),
        "keep me"
    );
}

#[tokio::test]
async fn test_copy_file_missing_source_reports_not_found() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dispatcher = dispatcher_in(tmp.path());

    let result = dispatcher
        .execute(
            "copy file",
            &args(&[("source", "nope.txt"), ("destination", "out.txt")]),
        )
        .await;

    assert!(!result.success);
    assert_eq!(result.message, "Computer: Source file nope.txt not found");
}

#[tokio::test]
async fn test_read_file_speaks_content() {
    let tmp = tempfile::tempdir().expect("tempdir");
    std::fs::write(tmp.path().join("note.txt"), "hello gateway").expect("write note");

    let speaker = RecordingSpeaker::new();
    let dispatcher = CommandDispatcher::new(tmp.path().to_path_buf(), speaker.clone());

    let result = dispatcher
        .execute("read file", &args(&[("target", "note.txt")]))
        .await;

    assert!(result.success, "read failed: {}", result.message);
    assert_eq!(result.message, "Computer: Reading content of note.txt");
    assert_eq!(speaker.texts(), vec!["hello gateway".to_string()]);
}

#[tokio::test]
async fn test_read_missing_file_reports_not_found() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dispatcher = dispatcher_in(tmp.path());

    let result = dispatcher
        .execute("read file", &args(&[("target", "missing.txt")]))
        .await;

    assert!(!result.success);
    assert_eq!(result.message, "Computer: File missing.txt not found");
}

#[tokio::test]
async fn test_kill_unknown_process_reports_not_found() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dispatcher = dispatcher_in(tmp.path());

    let result = dispatcher
        .execute(
            "process",
            &args(&[("target", "sysbridge-no-such-process")]),
        )
        .await;

    assert!(!result.success);
    assert!(
        result
            .message
            .starts_with("Computer: Process sysbridge-no-such-process"),
        "unexpected message: {}",
        result.message
    );
    assert!(result.message.ends_with("not found"));
}

#[tokio::test]
async fn test_network_outcome_is_prefixed_either_way() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dispatcher = dispatcher_in(tmp.path());

    // The test environment may or may not reach the probe host; both
    // outcomes must come back as prefixed executor messages.
    let result = dispatcher.execute("network", &HashMap::new()).await;

    assert!(result.message.starts_with("Computer: "));
    if result.success {
        assert_eq!(result.message, "Computer: Network active");
    }
}

// A stub ping that always exits non-zero stands in for an unreachable network.
#[cfg(unix)]
#[tokio::test]
async fn test_unreachable_network_reports_network_issues() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = tempfile::tempdir().expect("tempdir");
    let stub = tmp.path().join("ping");
    std::fs::write(&stub, "#!/bin/sh\nexit 1\n").expect("write stub");
    std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755))
        .expect("mark stub executable");

    let original_path = std::env::var_os("PATH");
    let mut lookup = vec![tmp.path().to_path_buf()];
    if let Some(ref existing) = original_path {
        lookup.extend(std::env::split_paths(existing));
    }
    let stubbed = std::env::join_paths(lookup).expect("join PATH entries");
    std::env::set_var("PATH", &stubbed);

    let dispatcher = dispatcher_in(tmp.path());
    let result = dispatcher.execute("network", &HashMap::new()).await;

    match original_path {
        Some(path) => std::env::set_var("PATH", path),
        None => std::env::remove_var("PATH"),
    }

    assert!(!result.success);
    assert_eq!(result.message, "Computer: Network issues");
}
