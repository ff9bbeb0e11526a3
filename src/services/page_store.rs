use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

use crate::errors::WikiError;
use crate::types::Page;

/// Extension shared by every page file in the data directory.
const PAGE_SUFFIX: &str = ".txt";

/// File-backed page storage: one `{title}.txt` per page in a flat
/// directory. The directory is the single source of truth; nothing is
/// cached in memory.
///
/// Concurrent saves to the same title are not coordinated: the last
/// whole-file write wins, and a racing reader sees either the old or the
/// new body, with whatever atomicity the filesystem gives a single write.
#[derive(Clone)]
pub struct PageStore {
    data_dir: PathBuf,
}

impl PageStore {
    /// Create a store rooted at `data_dir`. The directory itself is only
    /// created when an operation first needs it.
    pub fn new(data_dir: PathBuf) -> Self {
        debug!("Creating PageStore with data directory: {:?}", data_dir);
        Self { data_dir }
    }

    /// Write the page body verbatim, creating or truncating its file.
    /// The file is readable by the owning account only.
    pub fn save(&self, page: &Page) -> Result<(), WikiError> {
        self.ensure_data_dir()?;
        let path = self.page_path(&page.title);
        debug!("Saving page '{}' to {:?}", page.title, path);

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&path).map_err(|e| {
            error!("Failed to open {:?} for writing: {}", path, e);
            WikiError::Io(e)
        })?;
        file.write_all(&page.body).map_err(|e| {
            error!("Failed to write page '{}': {}", page.title, e);
            WikiError::Io(e)
        })?;

        info!("Saved page '{}', {} bytes", page.title, page.body.len());
        Ok(())
    }

    /// Read a page back in full. A missing file is `WikiError::NotFound`
    /// so callers can branch on existence; every other failure is
    /// surfaced as an I/O error.
    pub fn load(&self, title: &str) -> Result<Page, WikiError> {
        let path = self.page_path(title);
        debug!("Loading page '{}' from {:?}", title, path);

        match fs::read(&path) {
            Ok(body) => {
                info!("Loaded page '{}', {} bytes", title, body.len());
                Ok(Page::new(title, body))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Page '{}' does not exist yet", title);
                Err(WikiError::NotFound)
            }
            Err(e) => {
                error!("Failed to read page '{}': {}", title, e);
                Err(WikiError::Io(e))
            }
        }
    }

    /// Enumerate stored page titles by listing the data directory and
    /// stripping the page suffix. Creates the directory if it does not
    /// exist yet. No ordering is guaranteed, and the result holds exactly
    /// one entry per page file.
    pub fn list_titles(&self) -> Result<Vec<String>, WikiError> {
        self.ensure_data_dir()?;
        let entries = fs::read_dir(&self.data_dir).map_err(|e| {
            error!("Failed to read data directory {:?}: {}", self.data_dir, e);
            WikiError::Io(e)
        })?;

        let mut titles = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Failed to read directory entry: {}", e);
                    continue;
                }
            };
            let is_file = entry.file_type().map(|ft| ft.is_file()).unwrap_or(false);
            if !is_file {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            if let Some(title) = name.strip_suffix(PAGE_SUFFIX) {
                if !title.is_empty() {
                    titles.push(title.to_string());
                }
            }
        }

        info!("Listed data directory, found {} pages", titles.len());
        Ok(titles)
    }

    /// Title → on-disk path. Reversible: stripping the suffix from the
    /// file name gives the title back. Callers must have validated the
    /// title; the store does not re-check it.
    fn page_path(&self, title: &str) -> PathBuf {
        self.data_dir.join(format!("{}{}", title, PAGE_SUFFIX))
    }

    fn ensure_data_dir(&self) -> Result<(), WikiError> {
        if !self.data_dir.exists() {
            debug!("Creating data directory {:?}", self.data_dir);
            fs::create_dir_all(&self.data_dir).map_err(|e| {
                error!("Failed to create data directory {:?}: {}", self.data_dir, e);
                WikiError::Io(e)
            })?;
        }
        Ok(())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> (tempfile::TempDir, PageStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = PageStore::new(dir.path().join("data"));
        (dir, store)
    }

    #[test]
    fn save_then_load_round_trips() {
        let (_dir, store) = test_store();
        store.save(&Page::new("Foo", b"hello".to_vec())).unwrap();

        let page = store.load("Foo").unwrap();
        assert_eq!(page.title, "Foo");
        assert_eq!(page.body, b"hello");
    }

    #[test]
    fn load_missing_page_is_not_found() {
        let (_dir, store) = test_store();
        // The distinction matters: handlers branch on existence alone.
        match store.load("Nope") {
            Err(WikiError::NotFound) => {}
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn save_overwrites_whole_body() {
        let (_dir, store) = test_store();
        store.save(&Page::new("Foo", b"first version".to_vec())).unwrap();
        store.save(&Page::new("Foo", b"second".to_vec())).unwrap();

        assert_eq!(store.load("Foo").unwrap().body, b"second");
    }

    #[test]
    fn repeated_identical_saves_are_idempotent() {
        let (_dir, store) = test_store();
        let page = Page::new("Foo", b"same".to_vec());
        store.save(&page).unwrap();
        store.save(&page).unwrap();

        assert_eq!(store.load("Foo").unwrap().body, b"same");
    }

    #[test]
    fn empty_body_saves_and_loads() {
        let (_dir, store) = test_store();
        store.save(&Page::blank("Empty")).unwrap();

        let page = store.load("Empty").unwrap();
        assert!(page.body.is_empty());
    }

    #[test]
    fn save_creates_data_directory() {
        let (_dir, store) = test_store();
        assert!(!store.data_dir().exists());

        store.save(&Page::new("Foo", b"x".to_vec())).unwrap();
        assert!(store.data_dir().is_dir());
    }

    #[test]
    fn list_on_missing_directory_creates_it_and_is_empty() {
        let (_dir, store) = test_store();
        assert!(!store.data_dir().exists());

        let titles = store.list_titles().unwrap();
        assert!(titles.is_empty());
        assert!(store.data_dir().is_dir());
    }

    #[test]
    fn listing_is_the_set_of_saved_titles() {
        let (_dir, store) = test_store();
        store.save(&Page::new("Alpha", b"a".to_vec())).unwrap();
        store.save(&Page::new("Beta", b"b".to_vec())).unwrap();

        let mut titles = store.list_titles().unwrap();
        titles.sort();
        assert_eq!(titles, vec!["Alpha".to_string(), "Beta".to_string()]);
    }

    #[test]
    fn listing_length_matches_stored_page_count() {
        let (_dir, store) = test_store();
        for title in ["One", "Two", "Three"] {
            store.save(&Page::new(title, b"x".to_vec())).unwrap();
        }

        let titles = store.list_titles().unwrap();
        assert_eq!(titles.len(), 3);
        assert!(titles.iter().all(|t| !t.is_empty()));
    }

    #[test]
    fn listing_ignores_entries_without_the_page_suffix() {
        let (_dir, store) = test_store();
        store.save(&Page::new("Real", b"x".to_vec())).unwrap();
        fs::write(store.data_dir().join("notes.md"), "not a page").unwrap();
        fs::create_dir(store.data_dir().join("subdir.txt")).unwrap();

        assert_eq!(store.list_titles().unwrap(), vec!["Real".to_string()]);
    }

    #[test]
    fn storage_failure_is_not_reported_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        // Occupy the data-dir path with a regular file so enumeration fails.
        fs::write(dir.path().join("data"), "in the way").unwrap();

        let store = PageStore::new(dir.path().join("data"));
        match store.list_titles() {
            Err(WikiError::Io(_)) => {}
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn saved_page_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let (_dir, store) = test_store();
        store.save(&Page::new("Secret", b"x".to_vec())).unwrap();

        let meta = fs::metadata(store.data_dir().join("Secret.txt")).unwrap();
        assert_eq!(meta.permissions().mode() & 0o777, 0o600);
    }
}
