use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::{SysfsError, SysfsResult};

/// Returns the name of the first directory entry that contains `pattern`.
///
/// Entries starting with a dot are skipped. Iteration order is whatever the
/// kernel hands back, so with several matches the winner is arbitrary.
/// An unreadable directory reports the same as no match.
pub(crate) fn find_entry(dir: &Path, pattern: &str) -> Option<String> {
    let entries = fs::read_dir(dir).ok()?;
    for entry in entries.flatten() {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with('.') {
            continue;
        }
        if name.contains(pattern) {
            return Some(name.into_owned());
        }
    }
    None
}

/// Reads a file and returns its first whitespace-delimited token.
///
/// Control files hold a single value followed by a newline; an empty file
/// yields an empty token.
pub(crate) fn read_first_token(path: &Path) -> SysfsResult<String> {
    let content = fs::read_to_string(path).map_err(|source| SysfsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.split_whitespace().next().unwrap_or("").to_string())
}

/// Overwrites a control file with `content`.
///
/// The file must already exist. sysfs nodes cannot be created from
/// userspace, so a missing file is an error rather than something to
/// create.
pub(crate) fn write_text(path: &Path, content: &str) -> SysfsResult<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|source| SysfsError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    file.write_all(content.as_bytes())
        .map_err(|source| SysfsError::Write {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::path::PathBuf;

    fn scratch_dir(tag: &str) -> Result<PathBuf, Box<dyn Error>> {
        let dir = std::env::temp_dir().join(format!("bonepwm_sysfs_{tag}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    #[test]
    fn test_find_entry_matches_substring() -> Result<(), Box<dyn Error>> {
        let dir = scratch_dir("find")?;
        fs::write(dir.join("foo.1"), "")?;
        fs::write(dir.join("unrelated"), "")?;

        assert_eq!(find_entry(&dir, "foo."), Some("foo.1".to_string()));
        assert_eq!(find_entry(&dir, "baz."), None);

        fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[test]
    fn test_find_entry_skips_dot_entries() -> Result<(), Box<dyn Error>> {
        let dir = scratch_dir("hidden")?;
        fs::write(dir.join(".hidden"), "")?;
        fs::write(dir.join("foo.1"), "")?;

        assert_eq!(find_entry(&dir, "hidden"), None);
        assert_eq!(find_entry(&dir, "foo."), Some("foo.1".to_string()));

        fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[test]
    fn test_find_entry_missing_directory_is_no_match() {
        let dir = std::env::temp_dir().join("bonepwm_sysfs_does_not_exist");
        assert_eq!(find_entry(&dir, "foo"), None);
    }

    #[test]
    fn test_read_first_token_trims_to_one_token() -> Result<(), Box<dyn Error>> {
        let dir = scratch_dir("read")?;
        let file = dir.join("period");

        fs::write(&file, "1000\n")?;
        assert_eq!(read_first_token(&file)?, "1000");

        fs::write(&file, "space time\n")?;
        assert_eq!(read_first_token(&file)?, "space");

        fs::write(&file, "")?;
        assert_eq!(read_first_token(&file)?, "");

        fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[test]
    fn test_read_missing_file_reports_path() {
        let path = std::env::temp_dir().join("bonepwm_sysfs_no_such_file");
        let err = read_first_token(&path).unwrap_err();
        assert!(matches!(err, SysfsError::Read { .. }));
        assert!(err.to_string().contains("could not read"));
    }

    #[test]
    fn test_write_truncates_existing_file() -> Result<(), Box<dyn Error>> {
        let dir = scratch_dir("write")?;
        let file = dir.join("run");
        fs::write(&file, "previous longer content")?;

        write_text(&file, "1")?;
        assert_eq!(fs::read_to_string(&file)?, "1");

        fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[test]
    fn test_write_does_not_create_missing_file() -> Result<(), Box<dyn Error>> {
        let dir = scratch_dir("nocreate")?;
        let file = dir.join("duty");

        let err = write_text(&file, "500").unwrap_err();
        assert!(matches!(err, SysfsError::Write { .. }));
        assert!(!file.exists());

        fs::remove_dir_all(&dir)?;
        Ok(())
    }
}
