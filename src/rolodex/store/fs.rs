use super::LineStore;
use crate::error::{RolodexError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        debug!(path = %path.display(), "opening contact list");
        Self { path }
    }

    /// The file a rewrite must land on: the symlink target when the list is a link.
    fn write_target(&self) -> Result<PathBuf> {
        if self.path.exists() {
            fs::canonicalize(&self.path).map_err(RolodexError::Io)
        } else {
            Ok(self.path.clone())
        }
    }
}

fn parent_of(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

fn tmp_path_for(target: &Path) -> PathBuf {
    let stem = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "contacts".to_string());
    parent_of(target).join(format!(".{}-{}.tmp", stem, Uuid::new_v4()))
}

impl LineStore for FileStore {
    fn location(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn create(&mut self) -> Result<()> {
        let dir = parent_of(&self.path);
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(RolodexError::Io)?;
        }
        fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .map_err(RolodexError::Io)?;
        debug!(path = %self.path.display(), "created contact list");
        Ok(())
    }

    fn read_lines(&self) -> Result<Vec<String>> {
        if !self.exists() {
            return Err(RolodexError::FileNotFound(self.path.clone()));
        }
        let content = fs::read_to_string(&self.path).map_err(RolodexError::Io)?;
        let lines: Vec<String> = content
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(str::to_string)
            .collect();
        trace!(count = lines.len(), "read contact lines");
        Ok(lines)
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        let mut content = String::new();
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }

        let target = self.write_target()?;
        let tmp = tmp_path_for(&target);
        fs::write(&tmp, content).map_err(RolodexError::Io)?;

        // The replacement keeps the original file's mode
        let replaced = match fs::metadata(&target) {
            Ok(meta) => fs::set_permissions(&tmp, meta.permissions()),
            Err(_) => Ok(()),
        }
        .and_then(|_| fs::rename(&tmp, &target));
        if let Err(e) = replaced {
            let _ = fs::remove_file(&tmp);
            return Err(RolodexError::Io(e));
        }
        trace!(count = lines.len(), "wrote contact lines");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_makes_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join("contacts.txt");
        let mut store = FileStore::open(&path);

        assert!(!store.exists());
        store.create().unwrap();
        assert!(store.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn create_keeps_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contacts.txt");
        fs::write(&path, "Jo: 111-222-3333\n").unwrap();

        let mut store = FileStore::open(&path);
        store.create().unwrap();
        assert_eq!(store.read_lines().unwrap(), vec!["Jo: 111-222-3333"]);
    }

    #[test]
    fn read_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path().join("missing.txt"));
        assert!(matches!(
            store.read_lines(),
            Err(RolodexError::FileNotFound(_))
        ));
    }

    #[test]
    fn read_skips_blank_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contacts.txt");
        fs::write(&path, "A: 111-111-1111\n\n  \nB: 222-222-2222\n").unwrap();

        let store = FileStore::open(&path);
        assert_eq!(store.read_lines().unwrap().len(), 2);
    }

    #[test]
    fn write_replaces_content_and_leaves_no_tmp_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contacts.txt");
        fs::write(&path, "old line\n").unwrap();

        let mut store = FileStore::open(&path);
        store
            .write_lines(&["A: 111-111-1111".to_string(), "B: 222-222-2222".to_string()])
            .unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "A: 111-111-1111\nB: 222-222-2222\n"
        );
        for entry in fs::read_dir(dir.path()).unwrap() {
            let name = entry.unwrap().file_name().to_string_lossy().into_owned();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[cfg(unix)]
    #[test]
    fn rewrite_keeps_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contacts.txt");
        fs::write(&path, "B: 222-222-2222\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o600)).unwrap();

        let mut store = FileStore::open(&path);
        store.write_lines(&["A: 111-111-1111".to_string()]).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn rewrite_through_symlink_updates_target() {
        let dir = TempDir::new().unwrap();
        let real = dir.path().join("real.txt");
        let link = dir.path().join("contacts.txt");
        fs::write(&real, "B: 222-222-2222\n").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let mut store = FileStore::open(&link);
        store.write_lines(&["A: 111-111-1111".to_string()]).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap(), "A: 111-111-1111\n");
        assert_eq!(store.read_lines().unwrap(), vec!["A: 111-111-1111"]);
    }
}
