//! Colour literal parsing and terminal colour conversion.

use std::fmt;

use cssparser::{Parser, ParserInput, Token};

/// Error returned when a colour literal is not a CSS hex colour.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// The value did not start with a `#` hash token.
    #[error("'{0}' is not a hex colour")]
    NotHex(String),
    /// The hash token has a length other than 3 or 6 hex digits.
    #[error("'{0}' must have 3 or 6 hex digits")]
    BadLength(String),
    /// The hash token contains non-hex characters.
    #[error("'{0}' contains non-hex digits")]
    BadDigit(String),
    /// Something follows the colour.
    #[error("unexpected input after colour '{0}'")]
    TrailingInput(String),
}

/// An opaque sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parses a CSS hex colour (`#rgb` or `#rrggbb`).
    ///
    /// Surrounding whitespace is ignored, matching how CSS tokenises
    /// a declaration value.
    ///
    /// ```rust
    /// use swatch::Rgb;
    ///
    /// assert_eq!(Rgb::parse("#ec131e").unwrap(), Rgb { r: 0xec, g: 0x13, b: 0x1e });
    /// assert_eq!(Rgb::parse("#fff").unwrap(), Rgb { r: 255, g: 255, b: 255 });
    /// assert!(Rgb::parse("red").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self, ColorError> {
        let mut input = ParserInput::new(value);
        let mut parser = Parser::new(&mut input);

        let digits = match parser.next() {
            Ok(Token::Hash(hex)) | Ok(Token::IDHash(hex)) => hex.to_string(),
            _ => return Err(ColorError::NotHex(value.to_string())),
        };
        if parser.expect_exhausted().is_err() {
            return Err(ColorError::TrailingInput(value.to_string()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(value.to_string()));
        }

        let channel = |hex: &str| u8::from_str_radix(hex, 16);
        let parsed = match digits.len() {
            6 => (channel(&digits[0..2]), channel(&digits[2..4]), channel(&digits[4..6])),
            3 => {
                let doubled: Vec<String> = digits.chars().map(|c| c.to_string().repeat(2)).collect();
                (
                    channel(doubled[0].as_str()),
                    channel(doubled[1].as_str()),
                    channel(doubled[2].as_str()),
                )
            }
            _ => return Err(ColorError::BadLength(value.to_string())),
        };

        match parsed {
            (Ok(r), Ok(g), Ok(b)) => Ok(Rgb { r, g, b }),
            _ => Err(ColorError::BadDigit(value.to_string())),
        }
    }

    /// Converts to the nearest ANSI 256-color palette index.
    ///
    /// Greys map onto the 24-step grey ramp; everything else onto the 6x6x6 cube.
    ///
    /// ```rust
    /// use swatch::Rgb;
    ///
    /// // Pure red maps to ANSI 196
    /// assert_eq!(Rgb { r: 255, g: 0, b: 0 }.to_ansi256(), 196);
    /// ```
    pub fn to_ansi256(self) -> u8 {
        let Rgb { r, g, b } = self;
        if r == g && g == b {
            if r < 8 {
                16
            } else if r > 248 {
                231
            } else {
                232 + ((r as u16 - 8) * 24 / 247) as u8
            }
        } else {
            let red = (r as u16 * 5 / 255) as u8;
            let green = (g as u16 * 5 / 255) as u8;
            let blue = (b as u16 * 5 / 255) as u8;
            16 + 36 * red + 6 * green + blue
        }
    }

    /// Relative luminance in `0.0..=1.0` (WCAG definition).
    ///
    /// Used to pick a readable foreground over a swatch.
    pub fn luminance(self) -> f64 {
        fn linear(channel: u8) -> f64 {
            let c = channel as f64 / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
