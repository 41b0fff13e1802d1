// This file is only compiled during tests

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{SysfsError, SysfsResult};

#[derive(Default)]
struct MockFs {
    // Directory listings in insertion order; find_entry returns the first hit.
    dirs: HashMap<PathBuf, Vec<String>>,
    files: HashMap<PathBuf, String>,
    writes: Vec<(PathBuf, String)>,
}

thread_local! {
    static MOCK_FS: RefCell<MockFs> = RefCell::new(MockFs::default());
}

pub fn find_entry(dir: &Path, pattern: &str) -> Option<String> {
    MOCK_FS.with(|fs| {
        let fs = fs.borrow();
        let entries = fs.dirs.get(dir)?;
        entries
            .iter()
            .filter(|name| !name.starts_with('.'))
            .find(|name| name.contains(pattern))
            .cloned()
    })
}

pub fn read_first_token(path: &Path) -> SysfsResult<String> {
    MOCK_FS.with(|fs| {
        let fs = fs.borrow();
        match fs.files.get(path) {
            Some(content) => Ok(content.split_whitespace().next().unwrap_or("").to_string()),
            None => Err(SysfsError::Read {
                path: path.to_path_buf(),
                source: io::Error::from(io::ErrorKind::NotFound),
            }),
        }
    })
}

pub fn write_text(path: &Path, content: &str) -> SysfsResult<()> {
    MOCK_FS.with(|fs| {
        let mut fs = fs.borrow_mut();
        if !fs.files.contains_key(path) {
            return Err(SysfsError::Write {
                path: path.to_path_buf(),
                source: io::Error::from(io::ErrorKind::NotFound),
            });
        }
        println!("[Mock sysfs] write {} = {}", path.display(), content);
        fs.files.insert(path.to_path_buf(), content.to_string());
        fs.writes.push((path.to_path_buf(), content.to_string()));
        Ok(())
    })
}

// test helper to clear all mock state
pub fn reset_mock_fs() {
    MOCK_FS.with(|fs| {
        *fs.borrow_mut() = MockFs::default();
    });
}

// test helper to register a directory entry
pub fn add_mock_dir_entry(dir: &Path, name: &str) {
    MOCK_FS.with(|fs| {
        fs.borrow_mut()
            .dirs
            .entry(dir.to_path_buf())
            .or_default()
            .push(name.to_string());
    });
}

// test helper to create a file with initial content
pub fn add_mock_file(path: &Path, content: &str) {
    MOCK_FS.with(|fs| {
        fs.borrow_mut()
            .files
            .insert(path.to_path_buf(), content.to_string());
    });
}

// test helper to make a file unopenable again
pub fn remove_mock_file(path: &Path) {
    MOCK_FS.with(|fs| {
        fs.borrow_mut().files.remove(path);
    });
}

// test helper to inspect current file content
pub fn get_mock_file(path: &Path) -> Option<String> {
    MOCK_FS.with(|fs| fs.borrow().files.get(path).cloned())
}

// test helper returning every value written to a path, oldest first
pub fn get_mock_writes(path: &Path) -> Vec<String> {
    MOCK_FS.with(|fs| {
        fs.borrow()
            .writes
            .iter()
            .filter(|(p, _)| p == path)
            .map(|(_, v)| v.clone())
            .collect()
    })
}
