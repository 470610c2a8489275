use egui::{Button, RichText};

use crate::views::grid::navigation::Navigation;

/// Top strip: an up button plus the current path relative to the vault root.
pub fn navbar(ui: &mut egui::Ui, nav: &mut Navigation) {
    ui.horizontal(|ui| {
        ui.add_space(4.0);

        let up = Button::new(
            RichText::new(egui_material_icons::icons::ICON_ARROW_BACK).size(18.0),
        )
        .fill(egui::Color32::TRANSPARENT);

        if ui
            .add_enabled(!nav.at_root(), up)
            .on_hover_text("Up one folder")
            .clicked()
        {
            nav.go_up();
        }

        ui.add_space(8.0);
        ui.label(RichText::new(nav.display_path()).monospace());
    });
}
