use crossterm::style::Color;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Grid border color
    pub border: Color,
    /// Letters not part of any selection
    pub letter: Color,
    /// Cursor cell background
    pub cursor_bg: Color,
    /// Cells in the current chain
    pub chain_bg: Color,
    /// Cells of found words
    pub confirmed: Color,
    /// Cells revealed by a hint
    pub hint: Color,
    /// Success/complete color
    pub success: Color,
    /// Info text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            border: Color::Rgb { r: 70, g: 75, b: 90 },
            letter: Color::Rgb { r: 200, g: 205, b: 220 },
            cursor_bg: Color::Rgb { r: 70, g: 90, b: 140 },
            chain_bg: Color::Rgb { r: 150, g: 120, b: 20 },
            confirmed: Color::Rgb { r: 90, g: 255, b: 130 },
            hint: Color::Rgb { r: 255, g: 120, b: 220 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb { r: 250, g: 250, b: 245 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            border: Color::Rgb { r: 170, g: 170, b: 180 },
            letter: Color::Rgb { r: 40, g: 45, b: 60 },
            cursor_bg: Color::Rgb { r: 180, g: 200, b: 240 },
            chain_bg: Color::Rgb { r: 255, g: 230, b: 120 },
            confirmed: Color::Rgb { r: 20, g: 140, b: 60 },
            hint: Color::Rgb { r: 200, g: 40, b: 150 },
            success: Color::Rgb { r: 20, g: 140, b: 60 },
            info: Color::Rgb { r: 100, g: 100, b: 115 },
            key: Color::Rgb { r: 180, g: 110, b: 0 },
        }
    }
}
