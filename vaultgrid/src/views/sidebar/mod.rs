use egui::RichText;

use egui_flex::{Flex, FlexAlignContent, FlexItem};

use crate::models::settings::{Settings, SettingsStore};
use crate::Channels;
use events::FileEvent;
use std::sync::Arc;

mod settings;

pub struct SideBar {
    pub show_settings: bool,
    store: SettingsStore,
}

impl SideBar {
    pub fn new(store: SettingsStore) -> Self {
        SideBar {
            show_settings: false,
            store,
        }
    }

    pub fn width(&self) -> f32 {
        if self.show_settings {
            64.0 + 270.0
        } else {
            64.0
        }
    }

    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        settings: &mut Settings,
        dark_mode: &mut bool,
        channels: Arc<Channels>,
    ) {
        let primary_background = if ui.visuals().dark_mode {
            theme::GITHUB_DARK.crust
        } else {
            theme::GITHUB_LIGHT.crust
        };

        let before = settings.clone();

        Flex::horizontal()
            .align_content(FlexAlignContent::Stretch)
            .show(ui, |flex| {
                flex.add_ui(FlexItem::new().grow(1.0), |ui| {
                    egui::Frame::new().fill(primary_background).show(ui, |ui| {
                        ui.set_max_width(64.0);
                        ui.set_min_width(64.0);
                        ui.vertical_centered(|ui| {
                            ui.set_min_height(ui.available_height());

                            ui.add_space(24.0);

                            if ui
                                .add(
                                    egui::Button::new(
                                        RichText::new(egui_material_icons::icons::ICON_REFRESH)
                                            .size(32.0),
                                    )
                                    .fill(egui::Color32::TRANSPARENT),
                                )
                                .on_hover_text("Rescan vault")
                                .clicked()
                            {
                                let _ = channels
                                    .senders()
                                    .file_tx()
                                    .send(FileEvent::GetDirectoryListing);
                            }

                            let space_between = ui.available_height() - 72.0;
                            ui.add_space(space_between);

                            if ui
                                .add(
                                    egui::Button::new(
                                        RichText::new(egui_material_icons::icons::ICON_SETTINGS)
                                            .size(32.0),
                                    )
                                    .fill(egui::Color32::TRANSPARENT),
                                )
                                .on_hover_text("Open settings")
                                .clicked()
                            {
                                self.show_settings = !self.show_settings;
                            }
                        });
                    });
                });

                flex.add_ui(FlexItem::new().grow(1.0), |ui| {
                    let secondary_background = if ui.visuals().dark_mode {
                        theme::GITHUB_DARK.mantle
                    } else {
                        theme::GITHUB_LIGHT.mantle
                    };

                    egui::Frame::new()
                        .fill(secondary_background)
                        .show(ui, |ui| {
                            if self.show_settings {
                                ui.add_space(8.0);
                                settings::settings_ui(ui, settings, dark_mode);
                            }
                        });
                });
            });

        if *settings != before {
            theme::apply_block_style(ui.ctx(), settings.font_size);
            if let Err(e) = self.store.save(settings) {
                log::error!("Failed to persist settings: {:?}", e);
            }
        }
    }
}
