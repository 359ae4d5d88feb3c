//! Tests for log file setup and filter selection.

use super::*;
use serial_test::serial;
use std::fs;

#[test]
#[serial(tracing_init)]
fn init_creates_log_directory_if_missing() {
    let test_dir = std::env::temp_dir().join("postdeck_test_logs_create");
    let log_file = test_dir.join("test.log");

    let _ = fs::remove_dir_all(&test_dir);

    // may fail if a subscriber is already set, which is fine
    let _ = init(&log_file);

    assert!(
        test_dir.exists(),
        "Log directory should be created: {:?}",
        test_dir
    );

    let _ = fs::remove_dir_all(&test_dir);
}

#[test]
fn path_without_file_name_is_invalid() {
    let result = split_log_path(Path::new("/"));
    assert!(matches!(result, Err(LoggingError::InvalidPath(_))));
}

#[test]
fn bare_file_name_logs_to_current_directory() {
    let (directory, file_name) = split_log_path(Path::new("postdeck.log")).unwrap();
    assert_eq!(directory, Path::new("."));
    assert_eq!(file_name, "postdeck.log");
}

#[test]
fn filter_defaults_when_unset_or_blank() {
    assert_eq!(build_filter(None).to_string(), EnvFilter::new(DEFAULT_FILTER).to_string());
    assert_eq!(
        build_filter(Some("  ")).to_string(),
        EnvFilter::new(DEFAULT_FILTER).to_string()
    );
}

#[test]
fn filter_uses_given_directives() {
    let filter = build_filter(Some("postdeck=trace"));
    assert!(filter.to_string().contains("postdeck=trace"));
}

#[test]
fn events_reach_the_configured_writer() {
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let buffer = Buffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(build_filter(None))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!(operation = "load posts", "request finished");
        tracing::debug!("filtered out at info");
    });

    let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("request finished"));
    assert!(output.contains("load posts"));
    assert!(!output.contains("filtered out"));
}
