use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Local};
use egui::{
    pos2, vec2, Align2, Button, FontId, Label, Rect, RichText, Sense, Stroke, StrokeKind,
    TextEdit, Ui,
};
use events::{FileEvent, Fs};

use crate::models::settings::Settings;
use crate::Channels;

pub mod entries;
pub mod navigation;

use navigation::Navigation;

/// The block grid panel: one square block per displayed entry, with click,
/// drag-to-move, and context-menu wiring. Holds only transient UI state; the
/// entries themselves come from the latest worker snapshot each frame.
pub struct BlockGrid {
    dragging: Option<PathBuf>,
    renaming: Option<PathBuf>,
    rename_buf: String,
    confirm_delete: Option<(PathBuf, String)>,
}

impl BlockGrid {
    pub fn new() -> Self {
        BlockGrid {
            dragging: None,
            renaming: None,
            rename_buf: String::new(),
            confirm_delete: None,
        }
    }

    pub fn ui(
        &mut self,
        ui: &mut Ui,
        folder: &Fs,
        nav: &mut Navigation,
        settings: &Settings,
        channels: &Arc<Channels>,
    ) {
        let shown = entries::displayed_entries(folder, settings.sort_by);

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.add_space(8.0);
                if shown.is_empty() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(24.0);
                        ui.label("Nothing here yet.");
                    });
                    return;
                }
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = vec2(settings.grid_gap, settings.grid_gap);
                    for entry in &shown {
                        self.block_ui(ui, entry, nav, settings, channels);
                    }
                });
            });

        // Drop handling above ran first; whatever is left of the session ends
        // with the pointer.
        if ui.input(|i| i.pointer.any_released()) {
            self.dragging = None;
        }

        self.confirm_delete_modal(ui, channels);
    }

    /// Drops transient state that points at entries a fresh snapshot no
    /// longer contains.
    pub fn reconcile(&mut self, snapshot: &Fs) {
        if self
            .renaming
            .as_ref()
            .is_some_and(|path| !contains_path(snapshot, path))
        {
            self.cancel_rename();
        }
        if self
            .confirm_delete
            .as_ref()
            .is_some_and(|(path, _)| !contains_path(snapshot, path))
        {
            self.confirm_delete = None;
        }
    }

    fn block_ui(
        &mut self,
        ui: &mut Ui,
        entry: &Fs,
        nav: &mut Navigation,
        settings: &Settings,
        channels: &Arc<Channels>,
    ) {
        let path = entry.path().to_path_buf();

        if self.renaming.as_deref() == Some(path.as_path()) {
            self.rename_block(ui, settings, channels);
            return;
        }

        let palette = theme::active(ui.visuals().dark_mode);
        let size = vec2(settings.block_size, settings.block_size);
        let (rect, resp) = ui.allocate_exact_size(size, Sense::click_and_drag());

        let is_dragged = self.dragging.as_deref() == Some(path.as_path());
        let drop_target = entry.is_folder()
            && resp.hovered()
            && self
                .dragging
                .as_deref()
                .is_some_and(|dragged| entries::move_allowed(dragged, &path));

        if ui.is_rect_visible(rect) {
            let fill = if resp.hovered() {
                palette.overlay
            } else {
                palette.surface
            };
            ui.painter().rect_filled(rect, 6.0, fill);
            ui.painter().rect_stroke(
                rect,
                6.0,
                Stroke {
                    width: 1.0,
                    color: palette.overlay,
                },
                StrokeKind::Inside,
            );
            if is_dragged {
                ui.painter()
                    .rect_filled(rect, 6.0, palette.blue.gamma_multiply(0.15));
            }
            if drop_target {
                ui.painter().rect_stroke(
                    rect,
                    6.0,
                    Stroke {
                        width: 2.0,
                        color: ui.visuals().selection.stroke.color,
                    },
                    StrokeKind::Inside,
                );
            }

            let (icon, icon_color) = if entry.is_folder() {
                (egui_material_icons::icons::ICON_FOLDER, palette.blue)
            } else {
                (egui_material_icons::icons::ICON_DESCRIPTION, palette.subtext)
            };
            ui.painter().text(
                rect.center() - vec2(0.0, size.y * 0.12),
                Align2::CENTER_CENTER,
                icon,
                FontId::proportional(settings.block_size * 0.3),
                icon_color,
            );

            let label_rect = Rect::from_min_max(
                pos2(rect.left() + 6.0, rect.bottom() - size.y * 0.34),
                pos2(rect.right() - 6.0, rect.bottom() - 6.0),
            );
            let label = RichText::new(entries::display_name(entry, settings.show_file_extensions))
                .text_style(theme::block_text_style())
                .color(theme::block_text_color(&settings.text_color, palette));
            ui.put(label_rect, Label::new(label).truncate());
        }

        let resp = resp.on_hover_text(hover_text(entry));

        if resp.clicked() {
            open_entry(entry, nav, channels);
        }

        if resp.drag_started() {
            log::debug!("Drag started on {}", path.display());
            self.dragging = Some(path.clone());
        }

        if drop_target && ui.input(|i| i.pointer.any_released()) {
            if let Some(from) = self.dragging.take() {
                log::info!("Moving {} into {}", from.display(), path.display());
                let _ = channels.senders().file_tx().send(FileEvent::Move {
                    from,
                    to_dir: path.clone(),
                });
            }
        }

        resp.context_menu(|ui| {
            if ui.button("Open").clicked() {
                open_entry(entry, nav, channels);
                ui.close();
            }
            if ui.button("Rename…").clicked() {
                self.renaming = Some(path.clone());
                self.rename_buf = entry.name().to_string();
                ui.close();
            }
            if ui.button("Delete…").clicked() {
                self.confirm_delete = Some((path.clone(), entry.name().to_string()));
                ui.close();
            }
            ui.separator();
            if ui.button("Reveal in file manager").clicked() {
                reveal(entry);
                ui.close();
            }
        });
    }

    fn rename_block(&mut self, ui: &mut Ui, settings: &Settings, channels: &Arc<Channels>) {
        let size = vec2(settings.block_size, settings.block_size);
        ui.allocate_ui_with_layout(
            size,
            egui::Layout::top_down(egui::Align::Center),
            |ui| {
                ui.set_min_size(size);
                ui.add_space(size.y * 0.25);
                let edit = ui.add(
                    TextEdit::singleline(&mut self.rename_buf)
                        .desired_width(size.x - 12.0)
                        .hint_text("New name"),
                );
                if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    self.commit_rename_if_any(channels);
                }
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        self.commit_rename_if_any(channels);
                    }
                    if ui.button("Cancel").clicked() {
                        self.cancel_rename();
                    }
                });
                if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    self.cancel_rename();
                }
            },
        );
    }

    fn commit_rename_if_any(&mut self, channels: &Arc<Channels>) {
        if let Some(path) = self.renaming.take() {
            let new_name = std::mem::take(&mut self.rename_buf);
            let old_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            if !new_name.trim().is_empty() && new_name != old_name {
                let _ = channels
                    .senders()
                    .file_tx()
                    .send(FileEvent::Rename { path, new_name });
            }
        }
    }

    fn cancel_rename(&mut self) {
        self.renaming = None;
        self.rename_buf.clear();
    }

    fn confirm_delete_modal(&mut self, ui: &mut Ui, channels: &Arc<Channels>) {
        let Some((path, name)) = self.confirm_delete.clone() else {
            return;
        };

        egui::Window::new("Delete")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, vec2(0.0, 0.0))
            .show(ui.ctx(), |ui| {
                ui.label(format!("Are you sure you want to delete \"{}\"?", name));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        self.confirm_delete = None;
                    }
                    let palette = theme::active(ui.visuals().dark_mode);
                    let delete = Button::new(RichText::new("Delete").color(palette.red));
                    if ui.add(delete).clicked() {
                        let _ = channels.senders().file_tx().send(FileEvent::Delete { path });
                        self.confirm_delete = None;
                    }
                });
            });
    }
}

impl Default for BlockGrid {
    fn default() -> Self {
        Self::new()
    }
}

fn open_entry(entry: &Fs, nav: &mut Navigation, channels: &Arc<Channels>) {
    if entry.is_folder() {
        nav.enter(entry.path().to_path_buf());
    } else {
        let _ = channels.senders().file_tx().send(FileEvent::ReadFile {
            path: entry.path().to_path_buf(),
        });
    }
}

fn reveal(entry: &Fs) {
    // File managers select poorly; opening the containing folder is the
    // portable behavior.
    let target: &Path = if entry.is_folder() {
        entry.path()
    } else {
        entry.path().parent().unwrap_or(entry.path())
    };
    if let Err(e) = open::that(target) {
        log::error!("Failed to reveal {}: {}", target.display(), e);
    }
}

fn hover_text(entry: &Fs) -> String {
    match entry.modified() {
        Some(modified) => {
            let stamp: DateTime<Local> = modified.into();
            format!("{}\nModified {}", entry.name(), stamp.format("%Y-%m-%d %H:%M"))
        }
        None => entry.name().to_string(),
    }
}

fn contains_path(fs: &Fs, target: &Path) -> bool {
    fs.path() == target || fs.children().iter().any(|child| contains_path(child, target))
}
