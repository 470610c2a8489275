use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// One node of the vault hierarchy, captured at scan time. The UI only ever
/// holds snapshots of this tree; the file-system worker rescans after every
/// successful mutation.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum Fs {
    Folder {
        name: String,
        path: PathBuf,
        modified: Option<SystemTime>,
        children: Vec<Fs>,
    },
    File {
        name: String,
        path: PathBuf,
        modified: Option<SystemTime>,
        size: Option<u64>,
    },
}

impl Fs {
    pub fn name(&self) -> &str {
        match self {
            Fs::Folder { name, .. } | Fs::File { name, .. } => name,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Fs::Folder { path, .. } | Fs::File { path, .. } => path,
        }
    }

    pub fn modified(&self) -> Option<SystemTime> {
        match self {
            Fs::Folder { modified, .. } | Fs::File { modified, .. } => *modified,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Fs::Folder { .. })
    }

    /// File extension without the dot. Folders have none.
    pub fn extension(&self) -> Option<&str> {
        match self {
            Fs::Folder { .. } => None,
            Fs::File { name, .. } => Path::new(name).extension().and_then(|ext| ext.to_str()),
        }
    }

    /// Name with the extension stripped. Folder names are returned as-is.
    pub fn basename(&self) -> &str {
        match self {
            Fs::Folder { name, .. } => name,
            Fs::File { name, .. } => Path::new(name)
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or(name),
        }
    }

    pub fn children(&self) -> &[Fs] {
        match self {
            Fs::Folder { children, .. } => children,
            Fs::File { .. } => &[],
        }
    }

    /// Finds the folder node with the given path anywhere in this subtree.
    pub fn find_folder(&self, target: &Path) -> Option<&Fs> {
        match self {
            Fs::File { .. } => None,
            Fs::Folder { path, children, .. } => {
                if path == target {
                    return Some(self);
                }
                children.iter().find_map(|child| child.find_folder(target))
            }
        }
    }

    /// Builds a snapshot of the directory tree rooted at `path`.
    pub fn scan(path: &Path) -> Fs {
        let metadata = std::fs::metadata(path).ok();
        let modified = metadata.as_ref().and_then(|m| m.modified().ok());
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_string();

        if path.is_dir() {
            let mut children = Vec::new();
            if let Ok(entries) = std::fs::read_dir(path) {
                for entry in entries.flatten() {
                    children.push(Self::scan(&entry.path()));
                }
            }
            Fs::Folder {
                name,
                path: path.to_path_buf(),
                modified,
                children,
            }
        } else {
            Fs::File {
                name,
                path: path.to_path_buf(),
                modified,
                size: metadata.map(|m| m.len()),
            }
        }
    }
}

/// True when `candidate` sits anywhere below `ancestor`.
pub fn is_descendant(ancestor: &Path, candidate: &Path) -> bool {
    candidate
        .ancestors()
        .skip(1)
        .any(|parent| parent == ancestor)
}

/// Requests the UI sends to the file-system worker, and the responses the
/// worker sends back. Mutations echo themselves on success so the worker can
/// build a notification from the same data.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum FileEvent {
    GetDirectoryListing,
    DirectoryListing {
        path: PathBuf,
        listing: Option<Fs>,
    },
    ReadFile {
        path: PathBuf,
    },
    FileContent {
        path: PathBuf,
        content: String,
    },
    Move {
        from: PathBuf,
        to_dir: PathBuf,
    },
    Rename {
        path: PathBuf,
        new_name: String,
    },
    Delete {
        path: PathBuf,
    },
}

impl FileEvent {
    /// Executes a request against the vault rooted at `root`. Failures never
    /// leave a partial state behind: every mutation is a single rename or
    /// remove call, checked up front.
    pub fn execute(&self, root: &Path) -> Result<FileEvent, String> {
        match self {
            FileEvent::GetDirectoryListing => {
                log::debug!("Scanning vault at {}", root.display());
                Ok(FileEvent::DirectoryListing {
                    path: root.to_path_buf(),
                    listing: Some(Fs::scan(root)),
                })
            }
            FileEvent::ReadFile { path } => {
                ensure_in_vault(root, path)?;
                let content = std::fs::read_to_string(path)
                    .map_err(|e| format!("Failed to read {}: {}", display_name(path), e))?;
                Ok(FileEvent::FileContent {
                    path: path.clone(),
                    content,
                })
            }
            FileEvent::Move { from, to_dir } => {
                ensure_in_vault(root, from)?;
                ensure_in_vault(root, to_dir)?;
                if !to_dir.is_dir() {
                    return Err(format!("{} is not a folder", display_name(to_dir)));
                }
                let file_name = from
                    .file_name()
                    .ok_or_else(|| "Cannot move the vault root".to_string())?;
                let dest = to_dir.join(file_name);
                if dest.exists() {
                    return Err(format!("{} already exists", dest.display()));
                }
                std::fs::rename(from, &dest)
                    .map_err(|e| format!("Failed to move {}: {}", display_name(from), e))?;
                Ok(self.clone())
            }
            FileEvent::Rename { path, new_name } => {
                ensure_in_vault(root, path)?;
                let new_name = new_name.trim();
                if new_name.is_empty() {
                    return Err("New name is empty".to_string());
                }
                if new_name.contains(['/', '\\']) {
                    return Err(format!("Invalid name: {}", new_name));
                }
                let parent = path
                    .parent()
                    .ok_or_else(|| "Cannot rename the vault root".to_string())?;
                let dest = parent.join(new_name);
                if dest.exists() {
                    return Err(format!("{} already exists", dest.display()));
                }
                std::fs::rename(path, &dest)
                    .map_err(|e| format!("Failed to rename {}: {}", display_name(path), e))?;
                Ok(self.clone())
            }
            FileEvent::Delete { path } => {
                ensure_in_vault(root, path)?;
                let result = if path.is_dir() {
                    std::fs::remove_dir_all(path)
                } else {
                    std::fs::remove_file(path)
                };
                result.map_err(|e| format!("Failed to delete {}: {}", display_name(path), e))?;
                Ok(self.clone())
            }
            other => Err(format!("Not a request: {:?}", other)),
        }
    }
}

fn ensure_in_vault(root: &Path, path: &Path) -> Result<(), String> {
    if path == root || is_descendant(root, path) {
        Ok(())
    } else {
        Err(format!("{} is outside the vault", path.display()))
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        std::fs::write(path, "note").expect("write file");
    }

    #[test]
    fn scan_captures_files_and_folders() {
        let dir = tempdir().expect("tempdir");
        std::fs::create_dir(dir.path().join("projects")).expect("mkdir");
        touch(&dir.path().join("a.md"));

        let root = Fs::scan(dir.path());
        assert!(root.is_folder());
        assert_eq!(root.children().len(), 2);
        assert!(root.find_folder(&dir.path().join("projects")).is_some());
    }

    #[test]
    fn extension_and_basename() {
        let file = Fs::File {
            name: "notes.md".to_string(),
            path: PathBuf::from("/vault/notes.md"),
            modified: None,
            size: None,
        };
        assert_eq!(file.extension(), Some("md"));
        assert_eq!(file.basename(), "notes");

        let folder = Fs::Folder {
            name: "projects".to_string(),
            path: PathBuf::from("/vault/projects"),
            modified: None,
            children: Vec::new(),
        };
        assert_eq!(folder.extension(), None);
        assert_eq!(folder.basename(), "projects");
    }

    #[test]
    fn descendant_check() {
        let root = Path::new("/vault");
        assert!(is_descendant(root, Path::new("/vault/a")));
        assert!(is_descendant(root, Path::new("/vault/a/b/c")));
        assert!(!is_descendant(root, Path::new("/vault")));
        assert!(!is_descendant(root, Path::new("/elsewhere/a")));
    }

    #[test]
    fn move_into_folder() {
        let dir = tempdir().expect("tempdir");
        let target = dir.path().join("projects");
        std::fs::create_dir(&target).expect("mkdir");
        let source = dir.path().join("a.md");
        touch(&source);

        let event = FileEvent::Move {
            from: source.clone(),
            to_dir: target.clone(),
        };
        event.execute(dir.path()).expect("move");
        assert!(!source.exists());
        assert!(target.join("a.md").exists());
    }

    #[test]
    fn move_rejects_occupied_destination() {
        let dir = tempdir().expect("tempdir");
        let target = dir.path().join("projects");
        std::fs::create_dir(&target).expect("mkdir");
        let source = dir.path().join("a.md");
        touch(&source);
        touch(&target.join("a.md"));

        let event = FileEvent::Move {
            from: source.clone(),
            to_dir: target,
        };
        assert!(event.execute(dir.path()).is_err());
        // Source untouched on failure.
        assert!(source.exists());
    }

    #[test]
    fn move_rejects_paths_outside_the_vault() {
        let vault = tempdir().expect("tempdir");
        let other = tempdir().expect("tempdir");
        let stray = other.path().join("a.md");
        touch(&stray);

        let event = FileEvent::Move {
            from: stray,
            to_dir: vault.path().to_path_buf(),
        };
        assert!(event.execute(vault.path()).is_err());

        // The destination gets the same guard as the source.
        let inside = vault.path().join("a.md");
        touch(&inside);
        let escape = FileEvent::Move {
            from: inside.clone(),
            to_dir: other.path().to_path_buf(),
        };
        assert!(escape.execute(vault.path()).is_err());
        assert!(inside.exists());
    }

    #[test]
    fn rename_file() {
        let dir = tempdir().expect("tempdir");
        let source = dir.path().join("a.md");
        touch(&source);

        let event = FileEvent::Rename {
            path: source.clone(),
            new_name: "z.md".to_string(),
        };
        event.execute(dir.path()).expect("rename");
        assert!(!source.exists());
        assert!(dir.path().join("z.md").exists());
    }

    #[test]
    fn rename_rejects_empty_and_taken_names() {
        let dir = tempdir().expect("tempdir");
        let source = dir.path().join("a.md");
        touch(&source);
        touch(&dir.path().join("b.md"));

        let empty = FileEvent::Rename {
            path: source.clone(),
            new_name: "  ".to_string(),
        };
        assert!(empty.execute(dir.path()).is_err());

        let taken = FileEvent::Rename {
            path: source.clone(),
            new_name: "b.md".to_string(),
        };
        assert!(taken.execute(dir.path()).is_err());
        assert!(source.exists());
    }

    #[test]
    fn delete_file_and_folder() {
        let dir = tempdir().expect("tempdir");
        let file = dir.path().join("a.md");
        touch(&file);
        let folder = dir.path().join("projects");
        std::fs::create_dir(&folder).expect("mkdir");
        touch(&folder.join("nested.md"));

        FileEvent::Delete { path: file.clone() }
            .execute(dir.path())
            .expect("delete file");
        assert!(!file.exists());

        FileEvent::Delete {
            path: folder.clone(),
        }
        .execute(dir.path())
        .expect("delete folder");
        assert!(!folder.exists());
    }

    #[test]
    fn delete_missing_entry_fails() {
        let dir = tempdir().expect("tempdir");
        let event = FileEvent::Delete {
            path: dir.path().join("ghost.md"),
        };
        assert!(event.execute(dir.path()).is_err());
    }

    #[test]
    fn read_file_returns_content() {
        let dir = tempdir().expect("tempdir");
        let file = dir.path().join("a.md");
        touch(&file);

        let event = FileEvent::ReadFile { path: file.clone() };
        match event.execute(dir.path()) {
            Ok(FileEvent::FileContent { path, content }) => {
                assert_eq!(path, file);
                assert_eq!(content, "note");
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }
}
