//! 8-bit ARGB palette colors.
//!
//! The display uses a 64-color palette.  Every color fits in one byte:
//!
//! ```text
//! bit:  7 6 | 5 4 | 3 2 | 1 0
//!       a a | r r | g g | b b
//! ```
//!
//! Each channel keeps only its two most significant bits, so `0xAA` and
//! `0xBF` both land on channel value `0b10`.  Alpha is `0b11` for every opaque
//! color and `0b00` for [`Color::CLEAR`].
//!
//! # Why one byte? (for beginners)
//!
//! The settings blob persisted on the watch stores five colors and a flag in
//! a handful of bytes.  Keeping [`Color`] as a one-byte newtype means the blob
//! layout is exactly the in-memory representation of each field, and the
//! compiler stops anyone from mixing up a color with an arbitrary integer.
//!
//! # Hex conversion
//!
//! The companion app sends colors as `0xRRGGBB` integers.
//! [`Color::from_hex`] drops the low six bits of each channel;
//! [`Color::to_hex`] expands each 2-bit channel back to 8 bits by repeating it
//! (`0b10 → 0xAA`), so `from_hex(to_hex(c)) == c` for every palette color.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for palette lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    /// The name does not match any palette color.
    #[error("unknown palette color name: {0:?}")]
    UnknownName(String),
}

/// A palette color in 8-bit ARGB (2 bits per channel) encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(u8);

/// Full alpha in the top two bits.
const OPAQUE: u8 = 0b1100_0000;

impl Color {
    /// Wraps a raw ARGB8 byte.
    pub const fn from_argb8(argb: u8) -> Self {
        Color(argb)
    }

    /// Returns the raw ARGB8 byte.
    pub const fn argb8(self) -> u8 {
        self.0
    }

    /// Builds an opaque color from 8-bit channels, keeping the top two bits of each.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(OPAQUE | ((r >> 6) << 4) | ((g >> 6) << 2) | (b >> 6))
    }

    /// Builds an opaque color from a `0xRRGGBB` integer.  Bits above the low
    /// 24 are ignored.
    pub const fn from_hex(hex: u32) -> Self {
        Self::from_rgb(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Expands the color back to a `0xRRGGBB` integer.
    pub const fn to_hex(self) -> u32 {
        let r = expand_channel((self.0 >> 4) & 0b11) as u32;
        let g = expand_channel((self.0 >> 2) & 0b11) as u32;
        let b = expand_channel(self.0 & 0b11) as u32;
        (r << 16) | (g << 8) | b
    }

    /// 2-bit alpha channel.
    pub const fn alpha(self) -> u8 {
        self.0 >> 6
    }

    pub const fn is_opaque(self) -> bool {
        self.alpha() == 0b11
    }

    /// Palette name of this color, if it is one of the named colors.
    pub fn name(self) -> Option<&'static str> {
        if self == Color::CLEAR {
            return Some("Clear");
        }
        PALETTE
            .iter()
            .find(|(_, color)| *color == self)
            .map(|(name, _)| *name)
    }

    /// Looks up a palette color by name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::UnknownName`] when no palette entry matches.
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        if name.eq_ignore_ascii_case("clear") {
            return Ok(Color::CLEAR);
        }
        PALETTE
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|(_, color)| *color)
            .ok_or_else(|| ColorError::UnknownName(name.to_string()))
    }

    /// All 64 opaque palette colors with their names, ordered by ARGB8 value.
    pub fn palette() -> &'static [(&'static str, Color)] {
        &PALETTE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name} (#{:06X})", self.to_hex()),
            None => write!(f, "#{:06X}/a{}", self.to_hex(), self.alpha()),
        }
    }
}

const fn expand_channel(two_bits: u8) -> u8 {
    two_bits * 0x55
}

// ── Named palette colors ──────────────────────────────────────────────────────

impl Color {
    pub const CLEAR: Color = Color(0x00);

    pub const BLACK: Color = Color(0b1100_0000);
    pub const OXFORD_BLUE: Color = Color(0b1100_0001);
    pub const DUKE_BLUE: Color = Color(0b1100_0010);
    pub const BLUE: Color = Color(0b1100_0011);
    pub const DARK_GREEN: Color = Color(0b1100_0100);
    pub const MIDNIGHT_GREEN: Color = Color(0b1100_0101);
    pub const COBALT_BLUE: Color = Color(0b1100_0110);
    pub const BLUE_MOON: Color = Color(0b1100_0111);
    pub const ISLAMIC_GREEN: Color = Color(0b1100_1000);
    pub const JAEGER_GREEN: Color = Color(0b1100_1001);
    pub const TIFFANY_BLUE: Color = Color(0b1100_1010);
    pub const VIVID_CERULEAN: Color = Color(0b1100_1011);
    pub const GREEN: Color = Color(0b1100_1100);
    pub const MALACHITE: Color = Color(0b1100_1101);
    pub const MEDIUM_SPRING_GREEN: Color = Color(0b1100_1110);
    pub const CYAN: Color = Color(0b1100_1111);
    pub const BULGARIAN_ROSE: Color = Color(0b1101_0000);
    pub const IMPERIAL_PURPLE: Color = Color(0b1101_0001);
    pub const INDIGO: Color = Color(0b1101_0010);
    pub const ELECTRIC_ULTRAMARINE: Color = Color(0b1101_0011);
    pub const ARMY_GREEN: Color = Color(0b1101_0100);
    pub const DARK_GRAY: Color = Color(0b1101_0101);
    pub const LIBERTY: Color = Color(0b1101_0110);
    pub const VERY_LIGHT_BLUE: Color = Color(0b1101_0111);
    pub const KELLY_GREEN: Color = Color(0b1101_1000);
    pub const MAY_GREEN: Color = Color(0b1101_1001);
    pub const CADET_BLUE: Color = Color(0b1101_1010);
    pub const PICTON_BLUE: Color = Color(0b1101_1011);
    pub const BRIGHT_GREEN: Color = Color(0b1101_1100);
    pub const SCREAMIN_GREEN: Color = Color(0b1101_1101);
    pub const MEDIUM_AQUAMARINE: Color = Color(0b1101_1110);
    pub const ELECTRIC_BLUE: Color = Color(0b1101_1111);
    pub const DARK_CANDY_APPLE_RED: Color = Color(0b1110_0000);
    pub const JAZZBERRY_JAM: Color = Color(0b1110_0001);
    pub const PURPLE: Color = Color(0b1110_0010);
    pub const VIVID_VIOLET: Color = Color(0b1110_0011);
    pub const WINDSOR_TAN: Color = Color(0b1110_0100);
    pub const ROSE_VALE: Color = Color(0b1110_0101);
    pub const PURPUREUS: Color = Color(0b1110_0110);
    pub const LAVENDER_INDIGO: Color = Color(0b1110_0111);
    pub const LIMERICK: Color = Color(0b1110_1000);
    pub const BRASS: Color = Color(0b1110_1001);
    pub const LIGHT_GRAY: Color = Color(0b1110_1010);
    pub const BABY_BLUE_EYES: Color = Color(0b1110_1011);
    pub const SPRING_BUD: Color = Color(0b1110_1100);
    pub const INCHWORM: Color = Color(0b1110_1101);
    pub const MINT_GREEN: Color = Color(0b1110_1110);
    pub const CELESTE: Color = Color(0b1110_1111);
    pub const RED: Color = Color(0b1111_0000);
    pub const FOLLY: Color = Color(0b1111_0001);
    pub const FASHION_MAGENTA: Color = Color(0b1111_0010);
    pub const MAGENTA: Color = Color(0b1111_0011);
    pub const ORANGE: Color = Color(0b1111_0100);
    pub const SUNSET_ORANGE: Color = Color(0b1111_0101);
    pub const BRILLIANT_ROSE: Color = Color(0b1111_0110);
    pub const SHOCKING_PINK: Color = Color(0b1111_0111);
    pub const CHROME_YELLOW: Color = Color(0b1111_1000);
    pub const RAJAH: Color = Color(0b1111_1001);
    pub const MELON: Color = Color(0b1111_1010);
    pub const RICH_BRILLIANT_LAVENDER: Color = Color(0b1111_1011);
    pub const YELLOW: Color = Color(0b1111_1100);
    pub const ICTERINE: Color = Color(0b1111_1101);
    pub const PASTEL_YELLOW: Color = Color(0b1111_1110);
    pub const WHITE: Color = Color(0b1111_1111);
}

static PALETTE: [(&str, Color); 64] = [
    ("Black", Color::BLACK),
    ("OxfordBlue", Color::OXFORD_BLUE),
    ("DukeBlue", Color::DUKE_BLUE),
    ("Blue", Color::BLUE),
    ("DarkGreen", Color::DARK_GREEN),
    ("MidnightGreen", Color::MIDNIGHT_GREEN),
    ("CobaltBlue", Color::COBALT_BLUE),
    ("BlueMoon", Color::BLUE_MOON),
    ("IslamicGreen", Color::ISLAMIC_GREEN),
    ("JaegerGreen", Color::JAEGER_GREEN),
    ("TiffanyBlue", Color::TIFFANY_BLUE),
    ("VividCerulean", Color::VIVID_CERULEAN),
    ("Green", Color::GREEN),
    ("Malachite", Color::MALACHITE),
    ("MediumSpringGreen", Color::MEDIUM_SPRING_GREEN),
    ("Cyan", Color::CYAN),
    ("BulgarianRose", Color::BULGARIAN_ROSE),
    ("ImperialPurple", Color::IMPERIAL_PURPLE),
    ("Indigo", Color::INDIGO),
    ("ElectricUltramarine", Color::ELECTRIC_ULTRAMARINE),
    ("ArmyGreen", Color::ARMY_GREEN),
    ("DarkGray", Color::DARK_GRAY),
    ("Liberty", Color::LIBERTY),
    ("VeryLightBlue", Color::VERY_LIGHT_BLUE),
    ("KellyGreen", Color::KELLY_GREEN),
    ("MayGreen", Color::MAY_GREEN),
    ("CadetBlue", Color::CADET_BLUE),
    ("PictonBlue", Color::PICTON_BLUE),
    ("BrightGreen", Color::BRIGHT_GREEN),
    ("ScreaminGreen", Color::SCREAMIN_GREEN),
    ("MediumAquamarine", Color::MEDIUM_AQUAMARINE),
    ("ElectricBlue", Color::ELECTRIC_BLUE),
    ("DarkCandyAppleRed", Color::DARK_CANDY_APPLE_RED),
    ("JazzberryJam", Color::JAZZBERRY_JAM),
    ("Purple", Color::PURPLE),
    ("VividViolet", Color::VIVID_VIOLET),
    ("WindsorTan", Color::WINDSOR_TAN),
    ("RoseVale", Color::ROSE_VALE),
    ("Purpureus", Color::PURPUREUS),
    ("LavenderIndigo", Color::LAVENDER_INDIGO),
    ("Limerick", Color::LIMERICK),
    ("Brass", Color::BRASS),
    ("LightGray", Color::LIGHT_GRAY),
    ("BabyBlueEyes", Color::BABY_BLUE_EYES),
    ("SpringBud", Color::SPRING_BUD),
    ("Inchworm", Color::INCHWORM),
    ("MintGreen", Color::MINT_GREEN),
    ("Celeste", Color::CELESTE),
    ("Red", Color::RED),
    ("Folly", Color::FOLLY),
    ("FashionMagenta", Color::FASHION_MAGENTA),
    ("Magenta", Color::MAGENTA),
    ("Orange", Color::ORANGE),
    ("SunsetOrange", Color::SUNSET_ORANGE),
    ("BrilliantRose", Color::BRILLIANT_ROSE),
    ("ShockingPink", Color::SHOCKING_PINK),
    ("ChromeYellow", Color::CHROME_YELLOW),
    ("Rajah", Color::RAJAH),
    ("Melon", Color::MELON),
    ("RichBrilliantLavender", Color::RICH_BRILLIANT_LAVENDER),
    ("Yellow", Color::YELLOW),
    ("Icterine", Color::ICTERINE),
    ("PastelYellow", Color::PASTEL_YELLOW),
    ("White", Color::WHITE),
];
