//! Per-file failures are counted and never abort the run

use super::test_utils::{PagesFixture, PAGE};
use script_inject::{FileOutcome, InjectError, Injector, InjectorConfig};
use std::fs;

#[test]
fn test_invalid_utf8_counts_as_remainder() {
    let fixture = PagesFixture::new();
    let bytes: &[u8] = b"<body>\xff\xfe</body>";
    let bad = fixture.write("bad.html", bytes);
    fixture.write("good.html", PAGE);

    let summary = fixture.injector().run().unwrap();

    assert_eq!(summary.total, 2);
    assert_eq!(summary.updated, 1);
    assert_eq!(summary.read_failed, 1);
    assert_eq!(summary.remainder(), 1);
    assert_eq!(fs::read(bad).unwrap(), bytes);
}

#[test]
fn test_no_anchor_file_left_byte_identical() {
    let fixture = PagesFixture::new();
    let content = "<html><body><p>unterminated\r\n";
    fixture.write("open.html", content);

    let summary = fixture.injector().run().unwrap();

    assert_eq!(summary.updated, 0);
    assert_eq!(summary.no_anchor, 1);
    assert_eq!(summary.remainder(), 1);
    assert_eq!(fixture.read("open.html"), content);
}

#[cfg(unix)]
#[test]
fn test_read_only_file_counts_as_write_failure() {
    use std::os::unix::fs::PermissionsExt;

    let fixture = PagesFixture::new();
    let path = fixture.write("locked.html", PAGE);
    fs::set_permissions(&path, fs::Permissions::from_mode(0o444)).unwrap();

    // Privileged users can write regardless of mode bits.
    if fs::OpenOptions::new().write(true).open(&path).is_ok() {
        return;
    }

    let mut write_failures = 0;
    let summary = fixture
        .injector()
        .run_with(|_, outcome| {
            if let FileOutcome::WriteFailed(InjectError::Write { .. }) = outcome {
                write_failures += 1;
            }
        })
        .unwrap();

    assert_eq!(write_failures, 1);
    assert_eq!(summary.write_failed, 1);
    assert_eq!(summary.remainder(), 1);
    assert_eq!(fixture.read("locked.html"), PAGE);
}

#[test]
fn test_missing_root_fails_fast() {
    let fixture = PagesFixture::new();
    let result = Injector::new(InjectorConfig::with_root(fixture.workdir().join("absent")));
    assert!(matches!(result, Err(InjectError::RootNotFound { .. })));
}

#[test]
fn test_write_failure_counted_for_privileged_users() {
    let fixture = PagesFixture::new();
    fixture.write("index.html", PAGE);
    let injector = fixture.injector();
    let files = injector.discover().unwrap();

    // Swap the page for a directory: no user can write file content to it.
    let page = fixture.root().join("index.html");
    fs::remove_file(&page).unwrap();
    fs::create_dir(&page).unwrap();

    let outcome = injector.apply(&files[0], PAGE);
    assert!(matches!(
        outcome,
        FileOutcome::WriteFailed(InjectError::Write { .. })
    ));

    let mut summary = script_inject::RunSummary::default();
    summary.record(&outcome);
    assert_eq!(summary.write_failed, 1);
    assert_eq!(summary.remainder(), 1);
}

#[cfg(unix)]
#[test]
fn test_unlistable_root_fails_fast() {
    use std::os::unix::fs::PermissionsExt;

    let fixture = PagesFixture::new();
    fixture.write("index.html", PAGE);
    let root = fixture.root();
    fs::set_permissions(&root, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can list regardless of mode bits.
    let listable = fs::read_dir(&root).is_ok();
    let result = Injector::new(InjectorConfig::with_root(&root));
    fs::set_permissions(&root, fs::Permissions::from_mode(0o755)).unwrap();
    if listable {
        return;
    }

    assert!(matches!(result, Err(InjectError::RootUnreadable { .. })));
    assert_eq!(fixture.read("index.html"), PAGE);
}
