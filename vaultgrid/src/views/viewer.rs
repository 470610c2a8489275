use std::path::PathBuf;

use egui_commonmark::{CommonMarkCache, CommonMarkViewer};

/// Renders the markdown file last opened from the grid. One file at a time;
/// opening another replaces the current one.
pub struct Viewer {
    open: Option<(PathBuf, String)>,
    cache: CommonMarkCache,
}

impl Viewer {
    pub fn new() -> Self {
        Viewer {
            open: None,
            cache: CommonMarkCache::default(),
        }
    }

    pub fn show_file(&mut self, path: PathBuf, content: String) {
        log::info!("Viewing {}", path.display());
        self.open = Some((path, content));
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        let Some((path, content)) = &self.open else {
            return;
        };

        let title = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let mut keep_open = true;
        egui::Window::new(title)
            .id(egui::Id::new("markdown-viewer"))
            .open(&mut keep_open)
            .default_size([520.0, 480.0])
            .vscroll(true)
            .show(ctx, |ui| {
                CommonMarkViewer::new().show(ui, &mut self.cache, content);
            });

        if !keep_open {
            self.open = None;
        }
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}
