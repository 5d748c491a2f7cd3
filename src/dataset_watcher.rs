use notify::event::ModifyKind;
use notify::{recommended_watcher, Event, EventKind, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::data::Dataset;
use crate::error::Result;

/// How often the watcher checks whether the UI side has gone away.
pub const SHUTDOWN_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Blocks until the UI side of `tx` is dropped. Run it on a blocking worker.
///
/// The receiver is checked every [`SHUTDOWN_POLL_INTERVAL`] so a closed
/// window does not leave the runtime waiting on this task at exit.
///
/// Every successful reload is sent to `tx` and followed by `on_reload`, which
/// the GUI uses to request a repaint. Failed reloads are logged and skipped.
pub fn watch_dataset<F>(dataset_path: PathBuf, tx: mpsc::Sender<Dataset>, on_reload: F) -> Result<()>
where
    F: Fn(),
{
    info!("Starting dataset watcher for: {:?}", dataset_path);

    let (event_tx, event_rx) = std::sync::mpsc::channel();
    let mut watcher = recommended_watcher(event_tx)?;

    // Watch the directory: editors often replace the file instead of writing in place.
    let watch_root = dataset_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    watcher.watch(watch_root, RecursiveMode::NonRecursive)?;

    info!("Dataset watcher started. Waiting for changes...");

    loop {
        if tx.is_closed() {
            break;
        }

        let event = match event_rx.recv_timeout(SHUTDOWN_POLL_INTERVAL) {
            Ok(Ok(event)) => event,
            Ok(Err(e)) => {
                error!("Dataset watcher error: {:?}", e);
                continue;
            }
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        };

        match reload_on_change(&dataset_path, &event) {
            Some(Ok(dataset)) => {
                if tx.blocking_send(dataset).is_err() {
                    break;
                }
                info!("Dataset reloaded successfully.");
                on_reload();
            }
            Some(Err(e)) => warn!("Failed to reload dataset, keeping previous: {}", e),
            None => {}
        }
    }

    info!("Dataset watcher stopped.");
    Ok(())
}

/// Reloads when `event` writes or recreates `dataset_path`; `None` for unrelated events.
pub fn reload_on_change(dataset_path: &Path, event: &Event) -> Option<Result<Dataset>> {
    let relevant_kind = matches!(
        event.kind,
        EventKind::Modify(ModifyKind::Data(_)) | EventKind::Modify(ModifyKind::Name(_)) | EventKind::Create(_)
    );
    let file_name = dataset_path.file_name()?;
    let touches_file = event
        .paths
        .iter()
        .any(|p| p.file_name() == Some(file_name));

    if !(relevant_kind && touches_file) {
        return None;
    }

    info!("Dataset file modified. Reloading...");
    Some(Dataset::load(dataset_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, DataChange};
    use std::fs;
    use tempfile::tempdir;

    fn modify_event(path: &Path) -> Event {
        Event::new(EventKind::Modify(ModifyKind::Data(DataChange::Content))).add_path(path.to_path_buf())
    }

    #[test]
    fn test_reload_on_data_change() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dataset.toml");
        fs::write(&path, "[operation]\noperation_name = \"getAtms\"\n").unwrap();

        let dataset = reload_on_change(&path, &modify_event(&path)).unwrap().unwrap();
        assert_eq!(dataset.operation.operation_name, "getAtms");
    }

    #[test]
    fn test_reload_on_create() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dataset.toml");
        fs::write(&path, "").unwrap();

        let event = Event::new(EventKind::Create(CreateKind::File)).add_path(path.clone());
        assert!(matches!(reload_on_change(&path, &event), Some(Ok(_))));
    }

    #[test]
    fn test_ignores_other_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dataset.toml");
        let other = dir.path().join("other.toml");
        assert!(reload_on_change(&path, &modify_event(&other)).is_none());
    }

    #[test]
    fn test_ignores_access_events() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dataset.toml");
        let event = Event::new(EventKind::Access(AccessKind::Any)).add_path(path.clone());
        assert!(reload_on_change(&path, &event).is_none());
    }

    #[test]
    fn test_watcher_returns_when_receiver_dropped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dataset.toml");
        fs::write(&path, "").unwrap();

        let (tx, rx) = mpsc::channel(1);
        let (done_tx, done_rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let result = watch_dataset(path, tx, || {});
            let _ = done_tx.send(result.is_ok());
        });

        drop(rx);
        let finished = done_rx
            .recv_timeout(SHUTDOWN_POLL_INTERVAL * 12)
            .expect("watcher kept running after the receiver was dropped");
        assert!(finished);
    }

    #[test]
    fn test_runtime_shutdown_not_blocked_by_watcher() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dataset.toml");
        fs::write(&path, "").unwrap();

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .build()
            .unwrap();
        let (tx, rx) = mpsc::channel(1);
        runtime.spawn_blocking(move || watch_dataset(path, tx, || {}));
        drop(rx);

        let (done_tx, done_rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            drop(runtime);
            let _ = done_tx.send(());
        });
        assert!(done_rx.recv_timeout(SHUTDOWN_POLL_INTERVAL * 12).is_ok());
    }

    #[test]
    fn test_invalid_content_reports_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dataset.toml");
        fs::write(&path, "compliance_items = []").unwrap();
        assert!(matches!(reload_on_change(&path, &modify_event(&path)), Some(Err(_))));
    }
}
