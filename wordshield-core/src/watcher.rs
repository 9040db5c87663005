//! watcher.rs - File-change polling and automatic reload.
//!
//! A background thread polls a dictionary file's modification time on
//! a fixed interval and pushes changed content through the detector's
//! `reload`. Load or build failures leave the detector serving the old
//! dictionary. The thread holds only a `Weak` detector reference, so
//! dropping every detector handle ends it just as `stop` does.
//!
//! License: MIT OR Apache-2.0

use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Weak;
use std::thread::{self, JoinHandle};
use std::time::{Duration, SystemTime};

use log::{debug, warn};

use crate::detector::Detector;
use crate::loader::{DictSource, FileSource};

/// Handle to one polling thread. Stopping is idempotent.
pub struct FileWatcher {
    stop_tx: mpsc::Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl FileWatcher {
    /// Spawns a watcher for `path`, reloading through `detector` on
    /// every observed mtime change.
    pub(crate) fn spawn(detector: Weak<Detector>, path: PathBuf, interval: Duration) -> Self {
        let (stop_tx, stop_rx) = mpsc::channel();
        let handle = std::thread::spawn(move || {
            let source = FileSource::new(path.clone());
            let mut last_modified = modification_time(&path);
            loop {
                match stop_rx.recv_timeout(interval) {
                    // Stopped explicitly, or the watcher handle was dropped.
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
                    Err(RecvTimeoutError::Timeout) => {}
                }
                let Some(detector) = detector.upgrade() else {
                    // Every detector handle is gone.
                    return;
                };
                let modified = modification_time(&path);
                if modified.is_some() && modified != last_modified {
                    last_modified = modified;
                    debug!("dictionary file {} changed, reloading", path.display());
                    match source.load() {
                        Ok(entries) => {
                            if let Err(e) = detector.reload(entries) {
                                warn!(
                                    "reload from {} failed, keeping previous dictionary: {e}",
                                    path.display()
                                );
                            }
                        }
                        Err(e) => warn!(
                            "could not load {}, keeping previous dictionary: {e}",
                            path.display()
                        ),
                    }
                }
            }
        });
        Self {
            stop_tx,
            handle: Some(handle),
        }
    }

    /// Signals the thread to exit and waits for it. Safe to call more
    /// than once.
    pub fn stop(&mut self) {
        let _ = self.stop_tx.send(());
        if let Some(handle) = self.handle.take() {
            // When the watcher's own upgraded handle is the last one,
            // `Detector::drop` runs `stop` on the watcher thread
            // itself; joining the current thread is a std panic, and
            // the thread is already on its way out through the dead
            // `Weak`.
            if handle.thread().id() != thread::current().id() {
                let _ = handle.join();
            }
        }
    }
}

impl Drop for FileWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

fn modification_time(path: &std::path::Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}
