use crate::models::settings::{Settings, SortBy};

pub fn settings_ui(ui: &mut egui::Ui, settings: &mut Settings, dark_mode: &mut bool) {
    egui::Frame::new()
        .inner_margin(0.0)
        .outer_margin(0.0)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.set_min_height(ui.available_height());
                ui.set_max_width(256.0);
                ui.add_space(12.0);
                ui.heading("Settings");
                ui.separator();
                ui.add_space(12.0);

                ui.label("Block size");
                ui.add(egui::Slider::new(&mut settings.block_size, 80.0..=240.0).suffix(" px"));
                ui.add_space(8.0);

                ui.label("Grid gap");
                ui.add(egui::Slider::new(&mut settings.grid_gap, 4.0..=48.0).suffix(" px"));
                ui.add_space(8.0);

                ui.label("Block name size");
                ui.add(egui::Slider::new(&mut settings.font_size, 9.0..=24.0).suffix(" pt"));
                ui.add_space(8.0);

                ui.label("Block name color");
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut settings.text_color)
                            .desired_width(96.0)
                            .hint_text("#c9d1d9"),
                    );
                    if !settings.text_color.is_empty()
                        && theme::parse_hex_color(&settings.text_color).is_none()
                    {
                        ui.label(
                            egui::RichText::new("invalid")
                                .small()
                                .color(ui.visuals().error_fg_color),
                        );
                    }
                });
                ui.add_space(8.0);

                ui.checkbox(&mut settings.show_file_extensions, "Show file extensions");
                ui.add_space(8.0);

                ui.label("Sort blocks by");
                egui::ComboBox::from_id_salt("sort-by")
                    .selected_text(match settings.sort_by {
                        SortBy::Name => "Name",
                        SortBy::Date => "Date modified",
                    })
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut settings.sort_by, SortBy::Name, "Name");
                        ui.selectable_value(&mut settings.sort_by, SortBy::Date, "Date modified");
                    });
                ui.add_space(12.0);
                ui.separator();
                ui.add_space(12.0);

                if ui.button("Toggle Dark/Light Mode").clicked() {
                    *dark_mode = !*dark_mode;
                }
            });
        });
}
