use ratatui::style::Color;

use crate::query::MarkerCategory;

/// Marker colors, one per visual category.
pub const MARKER_DEFAULT: Color = Color::Rgb(0x0d, 0x94, 0x88);
pub const MARKER_ACCESSIBLE: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const MARKER_GENDER_NEUTRAL: Color = Color::Rgb(0x8b, 0x5c, 0xf6);
pub const MARKER_FAMILY: Color = Color::Rgb(0xf5, 0x9e, 0x0b);

pub fn marker_color(category: MarkerCategory) -> Color {
    match category {
        MarkerCategory::Accessible => MARKER_ACCESSIBLE,
        MarkerCategory::GenderNeutral => MARKER_GENDER_NEUTRAL,
        MarkerCategory::Family => MARKER_FAMILY,
        MarkerCategory::Default => MARKER_DEFAULT,
    }
}

/// Palette for one theme. Every screen pulls from here; nothing hardcodes a
/// color at the call site except the marker categories above.
pub struct Theme {
    pub bg: Color,
    pub panel_bg: Color,
    pub text: Color,
    pub muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub border: Color,
    pub highlight_bg: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(0xf5, 0xf5, 0xf4),
            panel_bg: Color::Rgb(0xff, 0xff, 0xff),
            text: Color::Rgb(0x17, 0x17, 0x17),
            muted: Color::Rgb(0x73, 0x73, 0x73),
            primary: Color::Rgb(0x0d, 0x94, 0x88),
            accent: Color::Rgb(0xf5, 0x9e, 0x0b),
            success: Color::Rgb(0x16, 0xa3, 0x4a),
            error: Color::Rgb(0xdc, 0x26, 0x26),
            warning: Color::Rgb(0xd9, 0x77, 0x06),
            border: Color::Rgb(0xd4, 0xd4, 0xd4),
            highlight_bg: Color::Rgb(0xcc, 0xfb, 0xf1),
        }
    }

    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(0x0a, 0x0a, 0x0a),
            panel_bg: Color::Rgb(0x17, 0x17, 0x17),
            text: Color::Rgb(0xe5, 0xe5, 0xe5),
            muted: Color::Rgb(0x8a, 0x8a, 0x8a),
            primary: Color::Rgb(0x2d, 0xd4, 0xbf),
            accent: Color::Rgb(0xfb, 0xbf, 0x24),
            success: Color::Rgb(0x22, 0xc5, 0x5e),
            error: Color::Rgb(0xef, 0x44, 0x44),
            warning: Color::Rgb(0xf5, 0x9e, 0x0b),
            border: Color::Rgb(0x40, 0x40, 0x40),
            highlight_bg: Color::Rgb(0x13, 0x4e, 0x4a),
        }
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}
