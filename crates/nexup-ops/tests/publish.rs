use nexup_ops::ops_publish::{build_queue, publish, MTA_ARCHIVE, MTA_DESCRIPTOR};
use nexup_nexus::repository::{NexusRepository, NexusVersion};
use tempfile::TempDir;

fn test_repo() -> NexusRepository {
    NexusRepository {
        // Nothing listens here; tests must fail before any request is sent.
        base_url: "127.0.0.1:1".to_string(),
        version: NexusVersion::Nexus3,
        repository: "releases".to_string(),
        group_id: "com.example".to_string(),
        artifact_version: "1.0".to_string(),
        username: None,
        password: None,
    }
}

#[test]
fn test_mta_project_queues_fixed_artifacts_first() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("mta.yaml"), "ID: demo").unwrap();

    let json = r#"[{"artifactId": "app", "type": "jar", "file": "target/app.jar"}]"#;
    let queue = build_queue(tmp.path(), json).unwrap();

    assert_eq!(queue.len(), 3);
    assert!(queue[0].file.ends_with(MTA_ARCHIVE));
    assert_eq!(queue[0].artifact_id, "foo");
    assert_eq!(queue[0].kind, "mtar");
    assert!(queue[1].file.ends_with(MTA_DESCRIPTOR));
    assert_eq!(queue[2].artifact_id, "app");
}

#[test]
fn test_mta_yml_only_project_skips_pre_step() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("mta.yml"), "ID: demo").unwrap();

    // The pre-step knows only the canonical descriptor name; with just an
    // mta.yml there is no mta.yaml to publish, so nothing extra is queued.
    let json = r#"[{"artifactId": "app", "type": "jar", "file": "target/app.jar"}]"#;
    let queue = build_queue(tmp.path(), json).unwrap();

    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].artifact_id, "app");
}

#[test]
fn test_plain_project_queues_configured_list_only() {
    let tmp = TempDir::new().unwrap();
    let json = r#"[
        {"artifactId": "app", "type": "jar", "file": "target/app.jar"},
        {"artifactId": "app", "classifier": "sources", "type": "jar", "file": "target/app-sources.jar"}
    ]"#;
    let queue = build_queue(tmp.path(), json).unwrap();
    assert_eq!(queue.len(), 2);
    assert_eq!(queue[0].file, "target/app.jar");
    assert_eq!(queue[1].classifier, "sources");
}

#[test]
fn test_malformed_artifact_list_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let err = build_queue(tmp.path(), "{broken").unwrap_err();
    assert!(err.to_string().contains("Configuration error"), "got: {err}");
}

#[tokio::test]
async fn test_empty_queue_publishes_nothing() {
    let tmp = TempDir::new().unwrap();
    publish(tmp.path(), &test_repo(), "[]", false).await.unwrap();
}

#[tokio::test]
async fn test_first_artifact_failure_aborts_run() {
    let tmp = TempDir::new().unwrap();
    let present = tmp.path().join("present.jar");
    std::fs::write(&present, b"bytes").unwrap();

    // The first artifact's file does not exist, so the run must die at its
    // checksum step with an I/O error. If the second artifact were
    // attempted, its checksum would succeed and the failure would instead
    // be a transport error against the unroutable repository URL.
    let json = format!(
        r#"[
            {{"artifactId": "missing", "type": "jar", "file": "{}/missing.jar"}},
            {{"artifactId": "present", "type": "jar", "file": "{}"}}
        ]"#,
        tmp.path().display(),
        present.display()
    );

    let err = publish(tmp.path(), &test_repo(), &json, false)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[tokio::test]
async fn test_first_upload_transport_failure_aborts_run() {
    let tmp = TempDir::new().unwrap();
    let first = tmp.path().join("first.jar");
    std::fs::write(&first, b"bytes").unwrap();

    // The first artifact's checksums succeed and its sidecar PUT then dies
    // against the unroutable repository, so the run must end in a transport
    // error. If the second artifact were attempted, the run would instead
    // end in an I/O error on its missing file.
    let json = format!(
        r#"[
            {{"artifactId": "first", "type": "jar", "file": "{}"}},
            {{"artifactId": "second", "type": "jar", "file": "{}/missing.jar"}}
        ]"#,
        first.display(),
        tmp.path().display()
    );

    let err = publish(tmp.path(), &test_repo(), &json, false)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Transport error"), "got: {err}");
}
