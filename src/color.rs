//! Color values for theme roles.
//!
//! A [`Color`] is a validated CSS color encoding. Parsing happens once, at
//! construction; everything downstream (stylesheet generation, terminal
//! previews) works with an already-checked value. The accepted forms are
//! hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`), `rgb()`/`rgba()` with
//! numeric components, and keywords. Keywords are passed through verbatim
//! so tool-specific tokens keep working; the common CSS keywords also
//! resolve to RGB for preview purposes.

use cssparser::{Parser, ParserInput, Token};

/// Error returned when a color value cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError {
    /// The rejected input.
    pub value: String,
    /// Short description of what went wrong.
    pub reason: String,
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid color \"{}\": {}", self.value, self.reason)
    }
}

impl std::error::Error for ColorParseError {}

/// A validated CSS color value.
///
/// Keeps the authored text so serialization reproduces the input exactly,
/// plus the resolved RGB channels when the form has them.
///
/// # Example
///
/// ```rust
/// use vitrine::Color;
///
/// let amber: Color = "#fbbf24".parse().unwrap();
/// assert_eq!(amber.as_css(), "#fbbf24");
/// assert_eq!(amber.rgb(), Some((0xfb, 0xbf, 0x24)));
///
/// assert!("#wat".parse::<Color>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Color {
    css: String,
    rgb: Option<(u8, u8, u8)>,
}

impl Color {
    /// Parses a color from its CSS textual form.
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] if the input is not a hex color, an
    /// `rgb()`/`rgba()` function, or a keyword token.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError {
                value: input.to_string(),
                reason: "empty value".to_string(),
            });
        }

        let mut parser_input = ParserInput::new(trimmed);
        let mut parser = Parser::new(&mut parser_input);

        let token = match parser.next() {
            Ok(token) => token.clone(),
            Err(_) => {
                return Err(ColorParseError {
                    value: trimmed.to_string(),
                    reason: "not a CSS token".to_string(),
                })
            }
        };

        let color = match token {
            Token::Hash(value) | Token::IDHash(value) => {
                let rgb = parse_hex(&value).ok_or_else(|| ColorParseError {
                    value: trimmed.to_string(),
                    reason: "malformed hex color".to_string(),
                })?;
                Self {
                    css: trimmed.to_string(),
                    rgb: Some(rgb),
                }
            }
            Token::Ident(name) => Self {
                css: trimmed.to_string(),
                rgb: keyword_rgb(&name),
            },
            Token::Function(name)
                if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
            {
                let rgb = parse_rgb_function(&mut parser).map_err(|reason| ColorParseError {
                    value: trimmed.to_string(),
                    reason,
                })?;
                Self {
                    css: trimmed.to_string(),
                    rgb: Some(rgb),
                }
            }
            _ => {
                return Err(ColorParseError {
                    value: trimmed.to_string(),
                    reason: "expected hex, rgb()/rgba(), or keyword".to_string(),
                })
            }
        };

        if parser.expect_exhausted().is_err() {
            return Err(ColorParseError {
                value: trimmed.to_string(),
                reason: "trailing content after color".to_string(),
            });
        }

        Ok(color)
    }

    /// Returns the color exactly as it was authored.
    pub fn as_css(&self) -> &str {
        &self.css
    }

    /// Returns the RGB channels, if the form resolves to them.
    ///
    /// Unrecognized keywords (tool-specific tokens) have no channels.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        self.rgb
    }

    /// Returns the nearest ANSI 256-color palette index, for terminal
    /// swatches. `None` for colors without resolved channels.
    pub fn ansi256(&self) -> Option<u8> {
        self.rgb.map(rgb_to_ansi256)
    }
}

impl std::str::FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.css)
    }
}

fn parse_hex(digits: &str) -> Option<(u8, u8, u8)> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |b: u8| -> u8 {
        match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            b'A'..=b'F' => b - b'A' + 10,
            _ => unreachable!(),
        }
    };
    let bytes = digits.as_bytes();
    match bytes.len() {
        // #rgb and #rgba: each digit doubles
        3 | 4 => Some((
            nibble(bytes[0]) * 17,
            nibble(bytes[1]) * 17,
            nibble(bytes[2]) * 17,
        )),
        6 | 8 => Some((
            nibble(bytes[0]) * 16 + nibble(bytes[1]),
            nibble(bytes[2]) * 16 + nibble(bytes[3]),
            nibble(bytes[4]) * 16 + nibble(bytes[5]),
        )),
        _ => None,
    }
}

fn parse_rgb_function(parser: &mut Parser<'_, '_>) -> Result<(u8, u8, u8), String> {
    let channels = parser.parse_nested_block(|p| {
        let r = p.expect_number()?;
        let _ = p.try_parse(|p| p.expect_comma());
        let g = p.expect_number()?;
        let _ = p.try_parse(|p| p.expect_comma());
        let b = p.expect_number()?;
        // Optional alpha; validated for form, not kept (previews are opaque).
        if !p.is_exhausted() {
            let _ = p.try_parse(|p| p.expect_comma());
            let _ = p.try_parse(|p| p.expect_delim('/'));
            let _ = p.try_parse(|p| p.expect_percentage());
            let _ = p.try_parse(|p| p.expect_number());
        }
        p.expect_exhausted()?;
        Ok::<_, cssparser::ParseError<'_, ()>>((r, g, b))
    });

    match channels {
        Ok((r, g, b)) => {
            for channel in [r, g, b] {
                if !(0.0..=255.0).contains(&channel) {
                    return Err(format!("channel {} out of range", channel));
                }
            }
            Ok((r as u8, g as u8, b as u8))
        }
        Err(_) => Err("malformed rgb() components".to_string()),
    }
}

/// RGB values for the CSS keywords worth previewing in a terminal.
/// Everything else passes through as an opaque token.
const KEYWORD_RGB: &[(&str, (u8, u8, u8))] = &[
    ("black", (0, 0, 0)),
    ("silver", (192, 192, 192)),
    ("gray", (128, 128, 128)),
    ("white", (255, 255, 255)),
    ("maroon", (128, 0, 0)),
    ("red", (255, 0, 0)),
    ("purple", (128, 0, 128)),
    ("fuchsia", (255, 0, 255)),
    ("green", (0, 128, 0)),
    ("lime", (0, 255, 0)),
    ("olive", (128, 128, 0)),
    ("yellow", (255, 255, 0)),
    ("navy", (0, 0, 128)),
    ("blue", (0, 0, 255)),
    ("teal", (0, 128, 128)),
    ("aqua", (0, 255, 255)),
    ("orange", (255, 165, 0)),
    ("rebeccapurple", (102, 51, 153)),
    ("transparent", (0, 0, 0)),
];

fn keyword_rgb(name: &str) -> Option<(u8, u8, u8)> {
    let lowered = name.to_ascii_lowercase();
    KEYWORD_RGB
        .iter()
        .find(|(keyword, _)| *keyword == lowered)
        .map(|(_, rgb)| *rgb)
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
pub(crate) fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
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
