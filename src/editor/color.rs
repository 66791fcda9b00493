use std::fmt;
use std::str::FromStr;

/// A 24-bit RGB color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorValue {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorValue {
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Whether the color reads as light, using Rec. 709 luma.
    ///
    /// Used to pick a contrasting glyph color when drawing over a pixel.
    pub fn is_light(self) -> bool {
        let luma = 0.0722f32.mul_add(
            f32::from(self.b),
            0.2126f32.mul_add(f32::from(self.r), 0.7152 * f32::from(self.g)),
        );
        luma >= 140.0
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for ColorValue {
    type Err = PaletteError;

    /// Parse `#rrggbb` or `#rgb`. The leading `#` is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || PaletteError::InvalidColor(trimmed.to_string());
        if !hex.is_ascii() {
            return Err(invalid());
        }
        match hex.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
                Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
            }
            3 => {
                // #abc expands to #aabbcc
                let channel = |i: usize| {
                    u8::from_str_radix(&hex[i..=i], 16)
                        .map(|v| v * 0x11)
                        .map_err(|_| invalid())
                };
                Ok(Self::rgb(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

/// Errors produced while building a palette from user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    #[error("invalid color `{0}` (expected #rrggbb or #rgb)")]
    InvalidColor(String),
    #[error("palette must contain at least one color")]
    Empty,
    #[error("palette lists {0} more than once")]
    Duplicate(ColorValue),
}

/// The eight swatches offered when no palette is configured.
pub const DEFAULT_COLORS: [ColorValue; 8] = [
    ColorValue::WHITE,
    ColorValue::rgb(0xff, 0x00, 0x00),
    ColorValue::rgb(0xff, 0xff, 0x00),
    ColorValue::rgb(0x00, 0xff, 0x00),
    ColorValue::rgb(0x00, 0xff, 0xff),
    ColorValue::rgb(0x00, 0x00, 0xff),
    ColorValue::rgb(0xff, 0x00, 0xff),
    ColorValue::BLACK,
];

/// An ordered, closed set of selectable colors.
///
/// Never empty and never contains the same color twice, so "the first
/// entry" and "the swatch at index i" are always well defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<ColorValue>,
}

impl Palette {
    /// Build a palette from an ordered list of colors.
    ///
    /// # Errors
    /// Returns [`PaletteError::Empty`] for an empty list and
    /// [`PaletteError::Duplicate`] when a color repeats.
    pub fn new(colors: Vec<ColorValue>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        for (i, color) in colors.iter().enumerate() {
            if colors[..i].contains(color) {
                return Err(PaletteError::Duplicate(*color));
            }
        }
        Ok(Self { colors })
    }

    /// Parse a comma-separated list such as `#fff,#ff0000,#000`.
    ///
    /// # Errors
    /// Returns an error if any entry is not a hex color, or if the
    /// resulting list is empty or has duplicates.
    pub fn parse_list(list: &str) -> Result<Self, PaletteError> {
        let colors = list
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<ColorValue>, _>>()?;
        Self::new(colors)
    }

    /// The first swatch; the color of a fresh canvas.
    pub fn background(&self) -> ColorValue {
        self.colors[0]
    }

    pub fn get(&self, index: usize) -> Option<ColorValue> {
        self.colors.get(index).copied()
    }

    pub fn contains(&self, color: ColorValue) -> bool {
        self.colors.contains(&color)
    }

    pub fn index_of(&self, color: ColorValue) -> Option<usize> {
        self.colors.iter().position(|c| *c == color)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ColorValue> + '_ {
        self.colors.iter().copied()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.to_vec(),
        }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list = self
            .colors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        f.write_str(&list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short_hex() {
        assert_eq!("#ff8000".parse::<ColorValue>(), Ok(ColorValue::rgb(255, 128, 0)));
        assert_eq!("#F80".parse::<ColorValue>(), Ok(ColorValue::rgb(255, 136, 0)));
        assert_eq!("00ff00".parse::<ColorValue>(), Ok(ColorValue::rgb(0, 255, 0)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "#12345".parse::<ColorValue>(),
            Err(PaletteError::InvalidColor(_))
        ));
        assert!("#gggggg".parse::<ColorValue>().is_err());
        assert!("#ffé".parse::<ColorValue>().is_err());
    }

    #[test]
    fn test_display_is_lowercase_long_form() {
        assert_eq!(ColorValue::rgb(0xAB, 0x0C, 0xFF).to_string(), "#ab0cff");
    }

    #[test]
    fn test_default_palette_starts_white_and_ends_black() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 8);
        assert_eq!(palette.background(), ColorValue::WHITE);
        assert_eq!(palette.get(7), Some(ColorValue::BLACK));
        assert_eq!(palette.get(8), None);
    }

    #[test]
    fn test_parse_list_keeps_order() {
        let palette = Palette::parse_list("#000, #fff ,#ff0000").unwrap();
        assert_eq!(palette.background(), ColorValue::BLACK);
        assert_eq!(palette.index_of(ColorValue::rgb(255, 0, 0)), Some(2));
        assert_eq!(palette.to_string(), "#000000,#ffffff,#ff0000");
    }

    #[test]
    fn test_parse_list_rejects_empty_and_duplicates() {
        assert_eq!(Palette::parse_list(" , "), Err(PaletteError::Empty));
        assert_eq!(
            Palette::parse_list("#fff,#ffffff"),
            Err(PaletteError::Duplicate(ColorValue::WHITE))
        );
    }

    #[test]
    fn test_is_light() {
        assert!(ColorValue::WHITE.is_light());
        assert!(ColorValue::rgb(0xff, 0xff, 0x00).is_light());
        assert!(!ColorValue::BLACK.is_light());
        assert!(!ColorValue::rgb(0x00, 0x00, 0xff).is_light());
    }
}
