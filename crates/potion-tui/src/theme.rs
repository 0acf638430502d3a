use crossterm::style::Color;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Slot bracket color
    pub border: Color,
    /// Background behind locked slots
    pub locked_bg: Color,
    /// Rack cursor background
    pub selected_bg: Color,
    /// Wrong-color marker
    pub error: Color,
    /// Correct marker and completion text
    pub success: Color,
    /// Wrong-position marker
    pub warning: Color,
    /// Secondary text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            border: Color::Rgb { r: 90, g: 95, b: 115 },
            locked_bg: Color::Rgb { r: 30, g: 60, b: 40 },
            selected_bg: Color::Rgb { r: 70, g: 90, b: 140 },
            error: Color::Rgb { r: 255, g: 90, b: 90 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
            warning: Color::Rgb { r: 255, g: 200, b: 80 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb { r: 248, g: 248, b: 252 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            border: Color::Rgb { r: 150, g: 150, b: 170 },
            locked_bg: Color::Rgb { r: 205, g: 240, b: 210 },
            selected_bg: Color::Rgb { r: 180, g: 200, b: 255 },
            error: Color::Rgb { r: 220, g: 50, b: 50 },
            success: Color::Rgb { r: 40, g: 160, b: 60 },
            warning: Color::Rgb { r: 200, g: 130, b: 0 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
        }
    }

    /// Terminal color for a potion
    pub fn potion(&self, color: potion_core::Color) -> Color {
        use potion_core::Color as Potion;
        match color {
            Potion::Red => Color::Rgb { r: 230, g: 40, b: 40 },
            Potion::Yellow => Color::Rgb { r: 250, g: 220, b: 40 },
            Potion::Purple => Color::Rgb { r: 160, g: 60, b: 220 },
            Potion::Orange => Color::Rgb { r: 255, g: 140, b: 20 },
            Potion::DarkBlue => Color::Rgb { r: 30, g: 60, b: 200 },
            Potion::LightBlue => Color::Rgb { r: 100, g: 190, b: 255 },
            Potion::DarkGreen => Color::Rgb { r: 20, g: 120, b: 40 },
            Potion::LightGreen => Color::Rgb { r: 130, g: 230, b: 110 },
            Potion::Brown => Color::Rgb { r: 140, g: 85, b: 40 },
            Potion::Pink => Color::Rgb { r: 255, g: 130, b: 190 },
        }
    }
}
