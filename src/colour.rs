use crate::closest::ColorLike;
use crate::palette::Palette;

/// A plain truecolor RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub rgb: (u8, u8, u8),
}

impl Color {
    /// Create from RGB.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: (r, g, b) }
    }

    /// Create from an ANSI-256 code.
    pub fn from_ansi256(code: u8) -> Self {
        Self {
            rgb: Self::ansi256_to_rgb(code),
        }
    }

    /// Convert ANSI-256 -> RGB, using the xterm defaults.
    pub fn ansi256_to_rgb(code: u8) -> (u8, u8, u8) {
        match code {
            0..=15 => Self::SYSTEM[code as usize].rgb,
            16..=231 => {
                let c = code - 16;
                let level = |v: u8| if v == 0 { 0 } else { 55 + v * 40 };
                (level(c / 36), level((c % 36) / 6), level(c % 6))
            }
            232..=255 => {
                let gray = 8 + (code - 232) * 10;
                (gray, gray, gray)
            }
        }
    }

    /// The ANSI-256 index whose xterm colour is closest to self.
    ///
    /// Exact duplicates in the table resolve to the lower index, so
    /// `Color::RED` maps to 9 rather than 196.
    pub fn to_ansi256(self) -> u8 {
        // xterm ids are 0..=255
        Palette::xterm256()
            .closest(&self)
            .map_or(0, |entry| entry.id as u8)
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.rgb;
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// The closest ANSI-256 colour, for terminals without truecolor.
    pub fn to_crossterm_ansi(self) -> crossterm::style::Color {
        crossterm::style::Color::AnsiValue(self.to_ansi256())
    }

    // Standard ANSI 16 colors
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const MAROON: Self = Self::rgb(128, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 128, 0);
    pub const OLIVE: Self = Self::rgb(128, 128, 0);
    pub const NAVY: Self = Self::rgb(0, 0, 128);
    pub const PURPLE: Self = Self::rgb(128, 0, 128);
    pub const TEAL: Self = Self::rgb(0, 128, 128);
    pub const SILVER: Self = Self::rgb(192, 192, 192);

    pub const GREY: Self = Self::rgb(128, 128, 128);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const LIME: Self = Self::rgb(0, 255, 0);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const FUCHSIA: Self = Self::rgb(255, 0, 255);
    pub const AQUA: Self = Self::rgb(0, 255, 255);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub(crate) const SYSTEM: [Self; 16] = [
        Self::BLACK,
        Self::MAROON,
        Self::GREEN,
        Self::OLIVE,
        Self::NAVY,
        Self::PURPLE,
        Self::TEAL,
        Self::SILVER,
        Self::GREY,
        Self::RED,
        Self::LIME,
        Self::YELLOW,
        Self::BLUE,
        Self::FUCHSIA,
        Self::AQUA,
        Self::WHITE,
    ];

    pub(crate) const SYSTEM_NAMES: [&'static str; 16] = [
        "Black", "Maroon", "Green", "Olive", "Navy", "Purple", "Teal", "Silver", "Grey", "Red",
        "Lime", "Yellow", "Blue", "Fuchsia", "Aqua", "White",
    ];
}

impl ColorLike for Color {
    fn channels(&self) -> (u8, u8, u8) {
        self.rgb
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<Color> for crossterm::style::Color {
    fn from(color: Color) -> Self {
        let (r, g, b) = color.rgb;
        crossterm::style::Color::Rgb { r, g, b }
    }
}
