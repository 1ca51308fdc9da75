//! `#rrggbb` colours: parsing, formatting and linear interpolation.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// 24-bit RGB colour, written and read as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub const fn from_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// Parse `#rrggbb` (the leading `#` is optional). Returns `None` for anything else.
    pub fn parse(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Channels as floats in [0, 1].
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Per-channel linear interpolation, rounded to the nearest integer.
    /// `percent` is clamped to [0, 1], so the endpoints are returned exactly.
    pub fn lerp(self, other: Self, percent: f32) -> Self {
        let t = percent.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    pub const WHITE: Self = Self::from_u32(0xffffff);
    pub const BLACK: Self = Self::from_u32(0x000000);
    pub const GREY: Self = Self::from_u32(0x808080);
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        HexColor::parse(&s)
            .ok_or_else(|| de::Error::custom(format!("invalid colour {:?}, expected #rrggbb", s)))
    }
}

/// Colour plus opacity, as handed to the canvas surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub color: HexColor,
    pub alpha: f32,
}

impl Rgba {
    pub const fn new(color: HexColor, alpha: f32) -> Self {
        Self { color, alpha }
    }

    pub const fn opaque(color: HexColor) -> Self {
        Self { color, alpha: 1.0 }
    }

    /// Channels as floats in [0, 1], alpha last.
    pub fn to_unit(self) -> [f32; 4] {
        let [r, g, b] = self.color.to_unit();
        [r, g, b, self.alpha.clamp(0.0, 1.0)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_format() {
        let c = HexColor::parse("#fae684").unwrap();
        assert_eq!(c, HexColor::new(0xfa, 0xe6, 0x84));
        assert_eq!(c.to_string(), "#fae684");
        assert_eq!(HexColor::parse("65D4FC"), Some(HexColor::from_u32(0x65d4fc)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(HexColor::parse("#fff").is_none());
        assert!(HexColor::parse("#gggggg").is_none());
        assert!(HexColor::parse("grey").is_none());
        assert!(HexColor::parse("#ffé000").is_none());
    }

    #[test]
    fn lerp_endpoints_exact() {
        let a = HexColor::from_u32(0xfae684);
        let b = HexColor::from_u32(0x881da8);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 7.5), b);
        assert_eq!(a.lerp(b, -1.0), a);
    }

    #[test]
    fn lerp_midpoint_rounds() {
        let mid = HexColor::BLACK.lerp(HexColor::WHITE, 0.5);
        assert_eq!(mid, HexColor::new(128, 128, 128));
        let s = mid.to_string();
        assert_eq!(s.len(), 7);
        assert!(s.starts_with('#'));
    }

    #[test]
    fn serde_round_trips_as_string() {
        let json = serde_json::to_string(&HexColor::from_u32(0x4361d9)).unwrap();
        assert_eq!(json, "\"#4361d9\"");
        let back: HexColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, HexColor::from_u32(0x4361d9));
        assert!(serde_json::from_str::<HexColor>("\"blue\"").is_err());
    }
}
