#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub usize);

impl FrameIndex {
    /// Successor index on a cycle of `count` frames.
    pub fn next_wrapping(self, count: usize) -> Self {
        if count == 0 {
            return self;
        }
        Self((self.0 + 1) % count)
    }
}

/// Straight (non-premultiplied) RGB8 text color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for Rgb8 {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Rgb8 {
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `#RGB` (the `#` is optional, case-insensitive).
    pub fn parse_hex(s: &str) -> Option<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.is_ascii() {
            return None;
        }

        fn byte(pair: &str) -> Option<u8> {
            // from_str_radix alone lets a leading '+' through.
            if !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            u8::from_str_radix(pair, 16).ok()
        }

        match hex.len() {
            3 => {
                let r = byte(&hex[0..1])?;
                let g = byte(&hex[1..2])?;
                let b = byte(&hex[2..3])?;
                Some(Self::new(r * 17, g * 17, b * 17))
            }
            6 => Some(Self::new(
                byte(&hex[0..2])?,
                byte(&hex[2..4])?,
                byte(&hex[4..6])?,
            )),
            _ => None,
        }
    }

    /// Malformed input falls back to opaque white.
    pub fn from_hex_or_white(s: &str) -> Self {
        Self::parse_hex(s).unwrap_or(Self::WHITE)
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels normalized to `[0, 1]`, the form most hosts take paint colors in.
    pub fn to_unit_rgb(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }
}

/// Normalized positional offset of a frame's text relative to its resting place.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn scale(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
