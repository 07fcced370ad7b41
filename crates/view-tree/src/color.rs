use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque RGB color value carried on a view's background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const DARK_GRAY: Color = Color::rgb(0x44, 0x44, 0x44);
    pub const CYAN: Color = Color::rgb(0x00, 0xff, 0xff);
    pub const YELLOW: Color = Color::rgb(0xff, 0xff, 0x00);
    pub const MAGENTA: Color = Color::rgb(0xff, 0x00, 0xff);
    pub const CORAL: Color = Color::rgb(0xff, 0x7f, 0x50);
    pub const GREEN: Color = Color::rgb(0x00, 0xff, 0x00);
    pub const BLUE: Color = Color::rgb(0x00, 0x00, 0xff);
    pub const RED: Color = Color::rgb(0xff, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_display() {
        assert_eq!(format!("{}", Color::CORAL), "#ff7f50");
        assert_eq!(format!("{}", Color::rgb(0, 0, 0)), "#000000");
    }
}
