use crate::foundation::core::Rgba8Premul;
use serde::{Deserialize, Serialize};

/// Overlay background colour as packed straight-alpha ARGB (`0xAARRGGBB`).
///
/// Zero is reserved for "unset" and resolves to [`BackgroundColor::DEFAULT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct BackgroundColor(pub u32);

impl BackgroundColor {
    /// Translucent dark used when no colour is configured.
    pub const DEFAULT: Self = Self(0xDD00_0000);

    pub fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(u32::from_be_bytes([a, r, g, b]))
    }

    /// Build from normalised `0..=1` channels.
    pub fn rgba_f64(r: f64, g: f64, b: f64, a: f64) -> Self {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        Self::argb(to_u8(a), to_u8(r), to_u8(g), to_u8(b))
    }

    pub fn is_unset(self) -> bool {
        self.0 == 0
    }

    /// The colour to actually paint with.
    pub fn resolve(self) -> Self {
        if self.is_unset() { Self::DEFAULT } else { self }
    }

    pub fn alpha(self) -> u8 {
        self.0.to_be_bytes()[0]
    }

    pub fn to_rgba8_premul(self) -> Rgba8Premul {
        let [a, r, g, b] = self.0.to_be_bytes();
        Rgba8Premul::from_straight_rgba(r, g, b, a)
    }
}

impl<'de> Deserialize<'de> for BackgroundColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Argb(u32),
            Hex(String),
            RgbaObj {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "one")]
                a: f64,
            },
            Arr(Vec<f64>),
        }

        fn one() -> f64 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Argb(v) => Ok(Self(v)),
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Self::rgba_f64(r, g, b, a)),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::rgba_f64(*r, *g, *b, 1.0)),
                [r, g, b, a] => Ok(Self::rgba_f64(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
pub fn parse_hex(s: &str) -> Result<BackgroundColor, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err("hex color must be ASCII".to_owned());
    }

    let (r, g, b, a) = match s.len() {
        6 => (hex_byte(&s[0..2])?, hex_byte(&s[2..4])?, hex_byte(&s[4..6])?, 255),
        8 => (
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        ),
        _ => {
            return Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned());
        }
    };

    Ok(BackgroundColor::argb(a, r, g, b))
}
