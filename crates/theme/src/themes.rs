use egui::Color32;

/// The colors for a theme variant.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Theme {
    pub text: Color32,
    pub subtext: Color32,
    pub overlay: Color32,
    pub surface: Color32,
    pub base: Color32,
    pub mantle: Color32,
    pub crust: Color32,
    pub red: Color32,
    pub green: Color32,
    pub yellow: Color32,
    pub blue: Color32,
}

pub const GITHUB_LIGHT: Theme = Theme {
    text: Color32::from_rgb(36, 41, 46),       // fg.default
    subtext: Color32::from_rgb(88, 96, 105),   // fg.muted
    overlay: Color32::from_rgb(208, 215, 222),
    surface: Color32::from_rgb(246, 248, 250),
    base: Color32::from_rgb(255, 255, 255), // canvas.default
    mantle: Color32::from_rgb(246, 248, 250), // canvas.subtle
    crust: Color32::from_rgb(240, 240, 240),
    red: Color32::from_rgb(255, 87, 87),
    green: Color32::from_rgb(34, 197, 94),
    yellow: Color32::from_rgb(255, 212, 0),
    blue: Color32::from_rgb(36, 114, 200),
};

pub const GITHUB_DARK: Theme = Theme {
    text: Color32::from_rgb(201, 209, 217),   // fg.default
    subtext: Color32::from_rgb(139, 148, 158), // fg.muted
    overlay: Color32::from_rgb(48, 54, 61),
    surface: Color32::from_rgb(22, 27, 34), // canvas.subtle
    base: Color32::from_rgb(13, 17, 23),    // canvas.default
    mantle: Color32::from_rgb(22, 27, 34),
    crust: Color32::from_rgb(0, 0, 0),
    red: Color32::from_rgb(248, 81, 73),
    green: Color32::from_rgb(74, 222, 128),
    yellow: Color32::from_rgb(255, 205, 68),
    blue: Color32::from_rgb(88, 166, 255),
};

impl Theme {
    pub fn is_dark(&self) -> bool {
        let [r, g, b, _] = self.base.to_array();
        (r as u32 + g as u32 + b as u32) < 3 * 128
    }
}
