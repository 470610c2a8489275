use egui::{Color32, Context, FontId, TextStyle, Visuals};

mod themes;
pub use themes::{Theme, GITHUB_DARK, GITHUB_LIGHT};

pub fn active(dark_mode: bool) -> Theme {
    if dark_mode {
        GITHUB_DARK
    } else {
        GITHUB_LIGHT
    }
}

/// Writes the palette into the context visuals. Safe to call every frame.
pub fn set_theme(ctx: &Context, theme: Theme) {
    let mut visuals = if theme.is_dark() {
        Visuals::dark()
    } else {
        Visuals::light()
    };

    visuals.panel_fill = theme.base;
    visuals.window_fill = theme.mantle;
    visuals.extreme_bg_color = theme.crust;
    visuals.faint_bg_color = theme.surface;
    visuals.hyperlink_color = theme.blue;
    visuals.warn_fg_color = theme.yellow;
    visuals.error_fg_color = theme.red;
    visuals.selection.bg_fill = theme.blue.gamma_multiply(0.35);
    visuals.selection.stroke.color = theme.blue;

    visuals.widgets.noninteractive.fg_stroke.color = theme.text;
    visuals.widgets.noninteractive.bg_stroke.color = theme.overlay;
    visuals.widgets.inactive.fg_stroke.color = theme.text;
    visuals.widgets.inactive.bg_fill = theme.surface;
    visuals.widgets.inactive.weak_bg_fill = theme.surface;
    visuals.widgets.hovered.fg_stroke.color = theme.text;
    visuals.widgets.hovered.bg_fill = theme.overlay;
    visuals.widgets.hovered.weak_bg_fill = theme.overlay;
    visuals.widgets.active.fg_stroke.color = theme.text;
    visuals.widgets.active.bg_fill = theme.overlay;
    visuals.widgets.open.fg_stroke.color = theme.text;

    ctx.set_visuals(visuals);
}

/// The text style key the block grid renders its labels with. The style map
/// entry under this key is the single place block typography lives.
pub const BLOCK_TEXT_STYLE: &str = "block-name";

pub fn block_text_style() -> TextStyle {
    TextStyle::Name(BLOCK_TEXT_STYLE.into())
}

/// Installs or overwrites the block label text style on the context.
/// Idempotent; called on startup and whenever the font-size setting changes.
pub fn apply_block_style(ctx: &Context, font_size: f32) {
    ctx.style_mut(|style| {
        style
            .text_styles
            .insert(block_text_style(), FontId::proportional(font_size));
    });
}

/// Resolves the block label color: a custom `#rgb`/`#rrggbb` setting when it
/// parses, the theme text color otherwise (empty string means "theme
/// default").
pub fn block_text_color(custom: &str, theme: Theme) -> Color32 {
    parse_hex_color(custom).unwrap_or(theme.text)
}

pub fn parse_hex_color(input: &str) -> Option<Color32> {
    let hex = input.trim().strip_prefix('#').unwrap_or(input.trim());
    // Length checks below count bytes; multi-byte input must not reach the
    // slicing.
    if !hex.is_ascii() {
        return None;
    }
    let expanded;
    let hex = match hex.len() {
        3 => {
            expanded = hex
                .chars()
                .flat_map(|c| [c, c])
                .collect::<String>();
            expanded.as_str()
        }
        6 => hex,
        _ => return None,
    };
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(
            parse_hex_color("#24a148"),
            Some(Color32::from_rgb(0x24, 0xa1, 0x48))
        );
        assert_eq!(
            parse_hex_color("c9d1d9"),
            Some(Color32::from_rgb(0xc9, 0xd1, 0xd9))
        );
    }

    #[test]
    fn parses_three_digit_hex() {
        assert_eq!(parse_hex_color("#fff"), Some(Color32::from_rgb(255, 255, 255)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_hex_color(""), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("not-a-color"), None);
        // Multi-byte input whose byte length looks like a valid hex length.
        assert_eq!(parse_hex_color("€€"), None);
        assert_eq!(parse_hex_color("#é0"), None);
    }

    #[test]
    fn empty_setting_falls_back_to_theme_text() {
        assert_eq!(block_text_color("", GITHUB_DARK), GITHUB_DARK.text);
        assert_eq!(
            block_text_color("#ff5757", GITHUB_DARK),
            Color32::from_rgb(0xff, 0x57, 0x57)
        );
    }

    #[test]
    fn variants_report_dark_mode() {
        assert!(GITHUB_DARK.is_dark());
        assert!(!GITHUB_LIGHT.is_dark());
    }
}
