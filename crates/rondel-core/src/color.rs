/// RGBA8 color used by the overlay style.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const WHITE: Color = Color(255, 255, 255, 255);
    pub const GRAY: Color = Color(128, 128, 128, 255);

    /// Parses `rrggbb` or `rrggbbaa`, with an optional leading `#`.
    /// Malformed input yields opaque black rather than panicking.
    pub fn from_hex(hex: &str) -> Self {
        let s = hex.trim_start_matches('#');
        // Byte slicing below is only safe on ASCII.
        if !s.is_ascii() {
            return Color(0, 0, 0, 255);
        }
        let (r, g, b, a) = match s.len() {
            6 => (
                u8::from_str_radix(&s[0..2], 16).unwrap_or(0),
                u8::from_str_radix(&s[2..4], 16).unwrap_or(0),
                u8::from_str_radix(&s[4..6], 16).unwrap_or(0),
                255,
            ),
            8 => (
                u8::from_str_radix(&s[0..2], 16).unwrap_or(0),
                u8::from_str_radix(&s[2..4], 16).unwrap_or(0),
                u8::from_str_radix(&s[4..6], 16).unwrap_or(0),
                u8::from_str_radix(&s[6..8], 16).unwrap_or(255),
            ),
            _ => (0, 0, 0, 255),
        };
        Color(r, g, b, a)
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Color(self.0, self.1, self.2, a)
    }

    /// Alpha given as a fraction in `[0, 1]`.
    pub fn with_opacity(self, f: f32) -> Self {
        self.with_alpha((f.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}
