/// Color representation.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Color {
    /// Black color: `#000000`
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    /// CSS `orange` color: `#ffa500`
    pub const ORANGE: Color = Color::rgba(255, 165, 0, 255);

    /// Constructs color from its RGBA channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses a color from the hex string. Hex string can be either HEX6 (`#rrggbb`) or HEX8
    /// (`#rrggbbaa`).
    ///
    /// # Panics
    ///
    /// Panics if the string is not a valid hex color. Intended for constants.
    pub const fn from_hex(hex_string: &'static str) -> Self {
        let bytes = hex_string.as_bytes();
        if bytes.len() != 7 && bytes.len() != 9 || bytes[0] != b'#' {
            panic!("Invalid color hex string");
        }

        let r = decode_byte(bytes[1], bytes[2]);
        let g = decode_byte(bytes[3], bytes[4]);
        let b = decode_byte(bytes[5], bytes[6]);
        let a = if bytes.len() == 9 {
            decode_byte(bytes[7], bytes[8])
        } else {
            255
        };

        Self { r, g, b, a }
    }

    /// Lowercase hex form. Opaque colors are written as `#rrggbb`, others as `#rrggbbaa`.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Returns a new color instance, copied from the base one but with the given alpha channel.
    pub fn with_alpha(&self, a: u8) -> Self {
        Self { a, ..*self }
    }

    /// Scales the alpha channel by `opacity` in `[0, 1]`. Values outside the range are clamped.
    pub fn with_opacity(&self, opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        self.with_alpha((self.a as f32 * opacity).round() as u8)
    }

    /// Converts the color into u8 array (RGBA).
    pub fn to_u8_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

const fn decode_byte(high: u8, low: u8) -> u8 {
    decode_char(high) * 16 + decode_char(low)
}

const fn decode_char(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        b'A'..=b'F' => byte - b'A' + 10,
        _ => panic!("Invalid hex character"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip() {
        let hex = "#ffcc00";
        assert_eq!(Color::from_hex(hex).to_u8_array(), [0xff, 0xcc, 0x00, 0xff]);
        assert_eq!(Color::from_hex(hex).to_hex(), hex);
        assert_eq!(Color::from_hex("#FF660080").to_hex(), "#ff660080");
    }

    #[test]
    fn opacity_scales_alpha() {
        assert_eq!(Color::BLACK.with_opacity(0.8).to_u8_array()[3], 204);
        assert_eq!(Color::BLACK.with_opacity(2.0).to_u8_array()[3], 255);
        assert_eq!(Color::ORANGE.to_hex(), "#ffa500");
    }
}
