#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![allow(rustdoc::missing_crate_level_docs)]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use eframe::egui;
use egui_notify::Toasts;
use events::{FileEvent, Fs};
use theme::{set_theme, GITHUB_DARK, GITHUB_LIGHT};

use vaultgrid::models::settings::{Settings, SettingsStore};
use vaultgrid::models::ui::UIEvent;
use vaultgrid::views::grid::navigation::Navigation;
use vaultgrid::views::grid::BlockGrid;
use vaultgrid::views::navbar::navbar;
use vaultgrid::views::sidebar::SideBar;
use vaultgrid::views::viewer::Viewer;
use vaultgrid::Channels;

fn main() -> eframe::Result {
    env_logger::init();

    let root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    let root = root.canonicalize().unwrap_or(root);
    log::info!("Opening vault at {}", root.display());

    let channels = Arc::new(Channels::new());
    channels.notification_thread();
    channels.file_thread(root.clone());
    let _ = channels
        .senders()
        .file_tx()
        .send(FileEvent::GetDirectoryListing);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Vault Grid",
        options,
        Box::new(move |cc| {
            egui_material_icons::initialize(&cc.egui_ctx);
            Ok(Box::new(VaultGrid::new(root, channels)))
        }),
    )
}

struct VaultGrid {
    channels: Arc<Channels>,
    nav: Navigation,
    grid: BlockGrid,
    sidebar: SideBar,
    viewer: Viewer,
    toasts: Toasts,
    settings: Settings,
    dark_mode: bool,
    snapshot: Option<Arc<Fs>>,
}

impl VaultGrid {
    fn new(root: PathBuf, channels: Arc<Channels>) -> Self {
        let (store, settings) = match SettingsStore::default_store() {
            Ok(store) => {
                let settings = store.load().unwrap_or_else(|e| {
                    log::error!("Failed to load settings: {:?}", e);
                    Settings::default()
                });
                (store, settings)
            }
            Err(e) => {
                log::error!("No config directory available: {:?}", e);
                (
                    SettingsStore::new(std::env::temp_dir().join("vaultgrid-settings.json")),
                    Settings::default(),
                )
            }
        };

        VaultGrid {
            channels,
            nav: Navigation::new(root),
            grid: BlockGrid::new(),
            sidebar: SideBar::new(store),
            viewer: Viewer::new(),
            toasts: Toasts::default(),
            settings,
            dark_mode: true,
            snapshot: None,
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.channels.receivers().ui_rx() {
            match event {
                UIEvent::Notification(notification) => {
                    notification.create_toast(&mut self.toasts);
                }
                UIEvent::Listing(listing) => {
                    self.nav.reconcile(&listing);
                    self.grid.reconcile(&listing);
                    self.snapshot = Some(listing);
                }
                UIEvent::ShowFile { path, content } => {
                    self.viewer.show_file(path, content);
                }
            }
        }
    }
}

impl eframe::App for VaultGrid {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        set_theme(ctx, if self.dark_mode { GITHUB_DARK } else { GITHUB_LIGHT });
        theme::apply_block_style(ctx, self.settings.font_size);

        self.drain_events();

        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(self.sidebar.width())
            .show_separator_line(false)
            .show(ctx, |ui| {
                self.sidebar.ui(
                    ui,
                    &mut self.settings,
                    &mut self.dark_mode,
                    Arc::clone(&self.channels),
                );
            });

        egui::TopBottomPanel::top("navbar").show(ctx, |ui| {
            navbar(ui, &mut self.nav);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let folder = self
                .snapshot
                .as_deref()
                .and_then(|snapshot| snapshot.find_folder(self.nav.current()));
            match folder {
                Some(folder) => {
                    self.grid.ui(
                        ui,
                        folder,
                        &mut self.nav,
                        &self.settings,
                        &self.channels,
                    );
                }
                None => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(48.0);
                        ui.spinner();
                        ui.label("Scanning vault...");
                    });
                }
            }
        });

        self.viewer.ui(ctx);
        self.toasts.show(ctx);

        // Worker responses arrive without input events; poll for them.
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
