use ratatui::style::Color;

pub const ACCENT_ORANGE: Color = Color::Rgb(0xff, 0x6f, 0x00);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TITLE_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const BODY_TEXT: Color = Color::Rgb(0xb4, 0xb4, 0xb4);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const IMAGE_FILL: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const BUTTON_BG: Color = Color::Rgb(0x11, 0x11, 0x11);
pub const BUTTON_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const FAVORITE_ACTIVE_BG: Color = Color::Rgb(0x3a, 0x22, 0x10);
