use cat_walk::logging::{init, LogTarget};

#[test]
fn unwritable_log_path_falls_back_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing_dir").join("cat_walk.log");

    assert_eq!(init(&path), LogTarget::Stderr);
    assert!(!path.exists());

    // Logging after the fallback must not panic.
    log::warn!("still running");
}

#[test]
fn writable_log_path_creates_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cat_walk.log");

    assert_eq!(init(&path), LogTarget::File(path.clone()));
    assert!(path.exists());
}
