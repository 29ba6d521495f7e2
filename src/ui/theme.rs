use ratatui::style::Color;

/// Base color palette
pub struct Palette;

impl Palette {
    pub const CATPPUCCIN_MOCHA: Color = Color::Rgb(0x1e, 0x1e, 0x2e);
    pub const SURFACE: Color = Color::Rgb(0x45, 0x47, 0x5a);
}

/// Application color theme constants
pub struct Theme;

impl Theme {
    // Modal/Overlay backgrounds
    pub const MODAL_BG: Color = Palette::CATPPUCCIN_MOCHA;

    // Panel borders
    pub const FOCUS_BORDER: Color = Color::Cyan;
    pub const UNFOCUS_BORDER: Color = Color::DarkGray;
    pub const HIGHLIGHT_BORDER: Color = Color::Green;

    // Text
    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_SECONDARY: Color = Color::Gray;
    pub const TEXT_MUTED: Color = Color::DarkGray;
    pub const TEXT_ACCENT: Color = Color::Yellow;
    pub const SECTION_HEADER: Color = Color::Cyan;

    // Key chips (help overlay)
    pub const KEY_CHIP_BG: Color = Palette::SURFACE;
    pub const KEY_CHIP_FG: Color = Color::Yellow;

    // Roller states
    pub const ROLLER_RUNNING: Color = Color::Yellow;
    pub const ROLLER_WINNER: Color = Color::Green;
    pub const ROLLER_IDLE: Color = Color::Magenta;

    // Status messages
    pub const STATUS_ERROR: Color = Color::Red;
    pub const STATUS_SUCCESS: Color = Color::Green;
}
