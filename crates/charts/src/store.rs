//! Request-scoped chart directories.
//!
//! Every rendered summary gets a fresh directory named by a random UUID under the store root.
//! The store remembers the directories it issued and deletes the oldest once more than
//! `retention` exist. The root is owned by the store: leftovers from a previous process are
//! removed when the store is opened.

use crate::{ChartError, ChartKind, ChartResult};
use std::collections::VecDeque;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use uuid::Uuid;

/// A directory reserved for one request's charts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSlot {
    id: String,
    dir: PathBuf,
}

impl ChartSlot {
    /// Canonical identifier: 32 lowercase hex characters.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// URL of a chart in this slot, given the URL the store root is served under.
    pub fn url(&self, base_url: &str, kind: ChartKind) -> String {
        format!(
            "{}/{}/{}",
            base_url.trim_end_matches('/'),
            self.id,
            kind.file_name()
        )
    }
}

/// Allocates and evicts request-scoped chart directories.
#[derive(Debug)]
pub struct ChartStore {
    root: PathBuf,
    retention: usize,
    issued: Mutex<VecDeque<String>>,
}

impl ChartStore {
    /// Opens a store rooted at `root`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns `ChartError::InvalidOutputDir` if `retention` is zero or `root` is not a
    /// directory, and `ChartError::CreateDir`/`RemoveDir` on I/O failure.
    pub fn open(root: &Path, retention: usize) -> ChartResult<Self> {
        if retention == 0 {
            return Err(ChartError::InvalidOutputDir(
                "retention must be at least 1".into(),
            ));
        }

        fs::create_dir_all(root).map_err(ChartError::CreateDir)?;
        if !root.is_dir() {
            return Err(ChartError::InvalidOutputDir(format!(
                "Path is not a directory: {}",
                root.display()
            )));
        }

        let mut stale = 0usize;
        for entry in fs::read_dir(root).map_err(ChartError::CreateDir)? {
            let path = entry.map_err(ChartError::CreateDir)?.path();
            if path.is_dir() && is_slot_name(&path) {
                fs::remove_dir_all(&path).map_err(ChartError::RemoveDir)?;
                stale += 1;
            }
        }
        if stale > 0 {
            tracing::info!("removed {stale} stale chart directories from {}", root.display());
        }

        Ok(Self {
            root: root.to_path_buf(),
            retention,
            issued: Mutex::new(VecDeque::new()),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn retention(&self) -> usize {
        self.retention
    }

    /// Number of slots currently on disk.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Creates a new slot directory, evicting the oldest slots beyond the retention limit.
    ///
    /// A slot can be evicted while its request is still rendering if `retention` newer slots
    /// are allocated in the meantime.
    ///
    /// # Errors
    ///
    /// Returns `ChartError::CreateDir` if the directory cannot be created. Eviction failures
    /// are logged, not returned.
    pub fn allocate(&self) -> ChartResult<ChartSlot> {
        let id = Uuid::new_v4().simple().to_string();
        let dir = self.root.join(&id);

        let mut issued = self.lock();
        fs::create_dir(&dir).map_err(ChartError::CreateDir)?;
        issued.push_back(id.clone());

        while issued.len() > self.retention {
            let Some(old) = issued.pop_front() else {
                break;
            };
            match fs::remove_dir_all(self.root.join(&old)) {
                Ok(()) => tracing::debug!("evicted chart directory {old}"),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => tracing::warn!("failed to evict chart directory {old}: {e}"),
            }
        }

        Ok(ChartSlot { id, dir })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<String>> {
        // the queue stays consistent even if a holder panicked mid-allocation
        self.issued
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn is_slot_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| {
            name.len() == 32 && name.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_root() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("static").join("charts");

        let store = ChartStore::open(&root, 4).unwrap();

        assert!(root.is_dir());
        assert!(store.is_empty());
        assert_eq!(store.retention(), 4);
    }

    #[test]
    fn test_open_rejects_zero_retention() {
        let temp = TempDir::new().unwrap();

        let result = ChartStore::open(temp.path(), 0);

        assert!(matches!(result, Err(ChartError::InvalidOutputDir(_))));
    }

    #[test]
    fn test_open_removes_stale_slots_only() {
        let temp = TempDir::new().unwrap();
        let stale = temp.path().join("0123456789abcdef0123456789abcdef");
        let keep = temp.path().join("keep-me");
        fs::create_dir_all(&stale).unwrap();
        fs::create_dir_all(&keep).unwrap();

        ChartStore::open(temp.path(), 2).unwrap();

        assert!(!stale.exists());
        assert!(keep.exists());
    }

    #[test]
    fn test_allocate_creates_unique_dirs() {
        let temp = TempDir::new().unwrap();
        let store = ChartStore::open(temp.path(), 8).unwrap();

        let a = store.allocate().unwrap();
        let b = store.allocate().unwrap();

        assert_ne!(a.id(), b.id());
        assert!(a.dir().is_dir());
        assert!(b.dir().is_dir());
        assert_eq!(a.id().len(), 32);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_allocate_evicts_oldest_beyond_retention() {
        let temp = TempDir::new().unwrap();
        let store = ChartStore::open(temp.path(), 2).unwrap();

        let first = store.allocate().unwrap();
        let second = store.allocate().unwrap();
        let third = store.allocate().unwrap();

        assert!(!first.dir().exists());
        assert!(second.dir().exists());
        assert!(third.dir().exists());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_slot_url() {
        let temp = TempDir::new().unwrap();
        let store = ChartStore::open(temp.path(), 1).unwrap();
        let slot = store.allocate().unwrap();

        assert_eq!(
            slot.url("/static/charts/", ChartKind::PieChart),
            format!("/static/charts/{}/piechart.png", slot.id())
        );
    }
}
