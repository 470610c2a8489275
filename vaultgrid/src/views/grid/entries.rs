use crate::models::settings::SortBy;
use events::{is_descendant, Fs};
use std::cmp::Ordering;
use std::path::Path;

/// The children of `folder` the grid actually shows: every folder, plus
/// markdown files. Folders always sort before files; within a variant the
/// sort mode decides (name ascending, case-insensitive, or modified time
/// newest-first).
pub fn displayed_entries(folder: &Fs, sort_by: SortBy) -> Vec<&Fs> {
    let mut entries: Vec<&Fs> = folder
        .children()
        .iter()
        .filter(|child| child.is_folder() || child.extension() == Some("md"))
        .collect();

    entries.sort_by(|a, b| match (a.is_folder(), b.is_folder()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => match sort_by {
            SortBy::Date => b.modified().cmp(&a.modified()),
            SortBy::Name => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
        },
    });
    entries
}

/// Block label: folders keep their name; files drop the extension unless the
/// setting says otherwise.
pub fn display_name(entry: &Fs, show_extensions: bool) -> &str {
    if entry.is_folder() || show_extensions {
        entry.name()
    } else {
        entry.basename()
    }
}

/// A drop is allowed onto any folder other than the dragged entry itself or
/// one of its own descendants.
pub fn move_allowed(dragged: &Path, target: &Path) -> bool {
    dragged != target && !is_descendant(dragged, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    fn file(name: &str, mtime_secs: u64) -> Fs {
        Fs::File {
            name: name.to_string(),
            path: PathBuf::from("/vault").join(name),
            modified: Some(UNIX_EPOCH + Duration::from_secs(mtime_secs)),
            size: None,
        }
    }

    fn folder(name: &str, mtime_secs: u64) -> Fs {
        Fs::Folder {
            name: name.to_string(),
            path: PathBuf::from("/vault").join(name),
            modified: Some(UNIX_EPOCH + Duration::from_secs(mtime_secs)),
            children: Vec::new(),
        }
    }

    fn root(children: Vec<Fs>) -> Fs {
        Fs::Folder {
            name: "vault".to_string(),
            path: PathBuf::from("/vault"),
            modified: Some(SystemTime::UNIX_EPOCH),
            children,
        }
    }

    fn names(entries: &[&Fs]) -> Vec<String> {
        entries.iter().map(|e| e.name().to_string()).collect()
    }

    #[test]
    fn filters_to_folders_and_markdown() {
        let vault = root(vec![
            folder("Projects", 10),
            file("a.md", 10),
            file("b.txt", 10),
            file("c.md", 10),
        ]);

        let shown = displayed_entries(&vault, SortBy::Name);
        assert_eq!(names(&shown), vec!["Projects", "a.md", "c.md"]);
    }

    #[test]
    fn folders_precede_files_under_both_sort_modes() {
        let vault = root(vec![
            file("aaa.md", 999),
            folder("zzz", 1),
            file("bbb.md", 500),
            folder("mmm", 2),
        ]);

        for sort_by in [SortBy::Name, SortBy::Date] {
            let shown = displayed_entries(&vault, sort_by);
            let folder_count = shown.iter().take_while(|e| e.is_folder()).count();
            assert_eq!(folder_count, 2, "folders first under {:?}", sort_by);
        }
    }

    #[test]
    fn name_sort_is_case_insensitive_ascending() {
        let vault = root(vec![file("Banana.md", 1), file("apple.md", 2), file("Cherry.md", 3)]);

        let shown = displayed_entries(&vault, SortBy::Name);
        assert_eq!(names(&shown), vec!["apple.md", "Banana.md", "Cherry.md"]);
    }

    #[test]
    fn date_sort_is_newest_first_within_variant() {
        let vault = root(vec![
            file("old.md", 100),
            file("new.md", 300),
            file("mid.md", 200),
            folder("older", 50),
            folder("newer", 400),
        ]);

        let shown = displayed_entries(&vault, SortBy::Date);
        assert_eq!(
            names(&shown),
            vec!["newer", "older", "new.md", "mid.md", "old.md"]
        );
    }

    #[test]
    fn rename_reorders_on_next_render() {
        // After renaming a.md to z.md the fresh listing sorts it last.
        let vault = root(vec![folder("Projects", 1), file("c.md", 1), file("z.md", 1)]);

        let shown = displayed_entries(&vault, SortBy::Name);
        assert_eq!(names(&shown), vec!["Projects", "c.md", "z.md"]);
    }

    #[test]
    fn display_name_strips_extension_only_for_files() {
        let note = file("notes.md", 1);
        assert_eq!(display_name(&note, true), "notes.md");
        assert_eq!(display_name(&note, false), "notes");

        let dir = folder("projects", 1);
        assert_eq!(display_name(&dir, false), "projects");
    }

    #[test]
    fn move_guard_rejects_self_and_descendants() {
        let dragged = Path::new("/vault/projects");
        assert!(!move_allowed(dragged, Path::new("/vault/projects")));
        assert!(!move_allowed(dragged, Path::new("/vault/projects/archive")));
        assert!(move_allowed(dragged, Path::new("/vault/other")));
        assert!(move_allowed(Path::new("/vault/a.md"), Path::new("/vault/projects")));
    }
}
