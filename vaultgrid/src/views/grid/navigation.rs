use events::Fs;
use std::path::{Path, PathBuf};

/// Tracks which folder the grid is showing. Always the vault root or one of
/// its descendants; resets to the root when the panel is constructed.
#[derive(Debug, Clone)]
pub struct Navigation {
    root: PathBuf,
    current: PathBuf,
}

impl Navigation {
    pub fn new(root: PathBuf) -> Self {
        Navigation {
            current: root.clone(),
            root,
        }
    }

    pub fn current(&self) -> &Path {
        &self.current
    }

    pub fn at_root(&self) -> bool {
        self.current == self.root
    }

    pub fn enter(&mut self, folder: PathBuf) {
        self.current = folder;
    }

    /// Moves to the parent folder. No-op at the vault root.
    pub fn go_up(&mut self) {
        if self.at_root() {
            return;
        }
        if let Some(parent) = self.current.parent() {
            self.current = parent.to_path_buf();
        }
    }

    /// The current folder relative to the root, `"/"` at the root itself.
    pub fn display_path(&self) -> String {
        match self.current.strip_prefix(&self.root) {
            Ok(rel) if !rel.as_os_str().is_empty() => {
                rel.to_string_lossy().replace('\\', "/")
            }
            _ => "/".to_string(),
        }
    }

    /// After a rescan the current folder may be gone (deleted or moved from
    /// outside the view). Walk up until a folder that still exists.
    pub fn reconcile(&mut self, snapshot: &Fs) {
        while !self.at_root() && snapshot.find_folder(&self.current).is_none() {
            self.go_up();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(name: &str, path: &str, children: Vec<Fs>) -> Fs {
        Fs::Folder {
            name: name.to_string(),
            path: PathBuf::from(path),
            modified: None,
            children,
        }
    }

    #[test]
    fn starts_at_root_with_slash_path() {
        let nav = Navigation::new(PathBuf::from("/vault"));
        assert!(nav.at_root());
        assert_eq!(nav.display_path(), "/");
    }

    #[test]
    fn enter_then_go_up_returns_to_root() {
        let mut nav = Navigation::new(PathBuf::from("/vault"));
        nav.enter(PathBuf::from("/vault/projects"));
        assert!(!nav.at_root());
        assert_eq!(nav.display_path(), "projects");

        nav.go_up();
        assert!(nav.at_root());
        assert_eq!(nav.display_path(), "/");
    }

    #[test]
    fn go_up_at_root_is_a_no_op() {
        let mut nav = Navigation::new(PathBuf::from("/vault"));
        nav.go_up();
        assert!(nav.at_root());
        assert_eq!(nav.current(), Path::new("/vault"));
    }

    #[test]
    fn nested_display_path_uses_forward_slashes() {
        let mut nav = Navigation::new(PathBuf::from("/vault"));
        nav.enter(PathBuf::from("/vault/projects/active"));
        assert_eq!(nav.display_path(), "projects/active");
    }

    #[test]
    fn reconcile_falls_back_to_nearest_existing_ancestor() {
        let snapshot = folder(
            "vault",
            "/vault",
            vec![folder("projects", "/vault/projects", Vec::new())],
        );

        let mut nav = Navigation::new(PathBuf::from("/vault"));
        nav.enter(PathBuf::from("/vault/projects/gone"));
        nav.reconcile(&snapshot);
        assert_eq!(nav.current(), Path::new("/vault/projects"));

        nav.enter(PathBuf::from("/vault/also/gone"));
        nav.reconcile(&snapshot);
        assert!(nav.at_root());
    }
}
