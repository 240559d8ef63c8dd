use crossbeam_channel::Sender;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};

/// Watches command scripts on notify's background thread and forwards
/// change events to a channel.
pub struct FileWatcher {
    watcher: RecommendedWatcher,
    watched: Vec<PathBuf>,
}

impl FileWatcher {
    /// Create a new file watcher that sends events to the provided channel
    pub fn new(tx: Sender<notify::Result<Event>>) -> notify::Result<Self> {
        let watcher = notify::recommended_watcher(move |res| {
            // The receiver is gone once the REPL exits
            let _ = tx.send(res);
        })?;

        Ok(Self {
            watcher,
            watched: Vec::new(),
        })
    }

    /// Start watching a script; watching the same path twice is a no-op
    pub fn watch<P: AsRef<Path>>(&mut self, path: P) -> notify::Result<()> {
        let path = path.as_ref();
        if self.is_watching(path) {
            return Ok(());
        }
        self.watcher.watch(path, RecursiveMode::NonRecursive)?;
        self.watched.push(path.to_path_buf());
        Ok(())
    }

    pub fn is_watching(&self, path: &Path) -> bool {
        self.watched.iter().any(|p| p == path)
    }
}
