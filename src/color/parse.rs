use crate::color::model::ColorValue;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex length")]
    InvalidLength,
    #[error("invalid hex digits")]
    InvalidHex,
    #[error("invalid rgb()/hsl() function")]
    InvalidFunc,
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
}

/// Parse a hex color from a string.
///
/// The allowed formats are:
/// * #RGB
/// * #RRGGBB
fn parse_hex(hex: &str) -> Result<ColorValue, ColorParseError> {
    use ColorParseError::*;

    let nibble = |c: u8| -> Result<u8, ColorParseError> {
        match c {
            b'0'..=b'9' => Ok(c - b'0'),
            b'a'..=b'f' => Ok(c - b'a' + 10),
            b'A'..=b'F' => Ok(c - b'A' + 10),
            _ => Err(InvalidHex),
        }
    };

    let bytes = hex.as_bytes();
    let rgb = match bytes.len() {
        // #RGB, each digit doubled
        3 => [
            nibble(bytes[0])? * 17,
            nibble(bytes[1])? * 17,
            nibble(bytes[2])? * 17,
        ],
        6 => {
            let byte = |hi: u8, lo: u8| -> Result<u8, ColorParseError> {
                Ok((nibble(hi)? << 4) | nibble(lo)?)
            };
            [
                byte(bytes[0], bytes[1])?,
                byte(bytes[2], bytes[3])?,
                byte(bytes[4], bytes[5])?,
            ]
        }
        _ => return Err(InvalidLength),
    };

    Ok(ColorValue::from(rgb))
}

/// Split function arguments on commas and/or whitespace.
fn split_args(args: &str) -> Vec<&str> {
    args.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect()
}

fn number(token: &str) -> Result<f64, ColorParseError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ColorParseError::InvalidNumber(token.to_owned()))
}

/// Parse the arguments of a CSS rgb function.
///
/// The allowed styles are:
/// rgb(r, g, b)
/// rgb(r g b)
/// rgb(r% g% b%)
///
/// Components outside 0-255 are clamped like every other color input.
fn parse_css_rgb(args: &str) -> Result<ColorValue, ColorParseError> {
    let tokens = split_args(args);
    let [r, g, b] = tokens[..] else {
        return Err(ColorParseError::InvalidFunc);
    };

    let channel = |t: &str| -> Result<f64, ColorParseError> {
        match t.strip_suffix('%') {
            Some(pct) => Ok(number(pct)? / 100.0 * 255.0),
            None => number(t),
        }
    };

    Ok(ColorValue::from_rgb(channel(r)?, channel(g)?, channel(b)?))
}

/// Parse the arguments of a CSS hsl function.
///
/// The allowed styles are:
/// hsl(h, s%, l%)
/// hsl(h s% l%)
/// hsl(hdeg s l)
fn parse_css_hsl(args: &str) -> Result<ColorValue, ColorParseError> {
    let tokens = split_args(args);
    let [h, s, l] = tokens[..] else {
        return Err(ColorParseError::InvalidFunc);
    };

    let h = number(h.strip_suffix("deg").unwrap_or(h))?;
    let s = number(s.strip_suffix('%').unwrap_or(s))?;
    let l = number(l.strip_suffix('%').unwrap_or(l))?;

    Ok(ColorValue::from_hsl(h, s, l))
}

/// Parse any of the forms [`ColorValue`] prints: a hex code, `rgb()` or
/// `hsl()`. Surrounding whitespace and function-name case are ignored.
pub fn parse_color(s: &str) -> Result<ColorValue, ColorParseError> {
    use ColorParseError::*;

    let s = s.trim();
    if s.is_empty() {
        return Err(Empty);
    }

    if let Some(rest) = s.strip_prefix('#') {
        return parse_hex(rest.trim());
    }

    let lower = s.to_ascii_lowercase();
    if let Some(args) = lower.strip_prefix("rgb(").and_then(|x| x.strip_suffix(')')) {
        return parse_css_rgb(args);
    }
    if let Some(args) = lower.strip_prefix("hsl(").and_then(|x| x.strip_suffix(')')) {
        return parse_css_hsl(args);
    }

    Err(InvalidFunc)
}

impl core::str::FromStr for ColorValue {
    type Err = ColorParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl TryFrom<&str> for ColorValue {
    type Error = ColorParseError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_color(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn hex_forms() {
        assert_eq!(parse_color("#3CA0A0").unwrap().rgb(), [60, 160, 160]);
        assert_eq!(parse_color("#3ca0a0").unwrap().rgb(), [60, 160, 160]);
        assert_eq!(parse_color("  #F0a ").unwrap().rgb(), [255, 0, 170]);
    }

    #[test]
    fn hex_errors() {
        assert_eq!(parse_color("#12345"), Err(ColorParseError::InvalidLength));
        assert_eq!(parse_color("#FF0A00FF"), Err(ColorParseError::InvalidLength));
        assert_eq!(parse_color("#GG0000"), Err(ColorParseError::InvalidHex));
    }

    #[test]
    fn rgb_function() {
        assert_eq!(parse_color("rgb(255, 10, 0)").unwrap().hex_code(), "#FF0A00");
        assert_eq!(parse_color("RGB(1 2 3)").unwrap().rgb(), [1, 2, 3]);
        assert_eq!(parse_color("rgb(100%, 0%, 50%)").unwrap().rgb(), [255, 0, 128]);
        // clamped, not rejected
        assert_eq!(parse_color("rgb(-10, 300, 128)").unwrap().rgb(), [0, 255, 128]);
    }

    #[test]
    fn hsl_function() {
        assert_eq!(parse_color("hsl(120, 100%, 50%)").unwrap().rgb(), [0, 255, 0]);
        assert_eq!(parse_color("hsl(240deg 100% 50%)").unwrap().rgb(), [0, 0, 255]);
        assert_eq!(parse_color("hsl(0, 0%, 0%)").unwrap().rgb(), [0, 0, 0]);
    }

    #[test]
    fn function_errors() {
        assert_eq!(parse_color(""), Err(ColorParseError::Empty));
        assert_eq!(parse_color("   "), Err(ColorParseError::Empty));
        assert_eq!(parse_color("rgb(1, 2)"), Err(ColorParseError::InvalidFunc));
        assert_eq!(parse_color("hwb(0 0% 0%)"), Err(ColorParseError::InvalidFunc));
        assert_eq!(parse_color("rgb(1, 2, 3"), Err(ColorParseError::InvalidFunc));
        assert_eq!(
            parse_color("rgb(1, x, 3)"),
            Err(ColorParseError::InvalidNumber("x".into()))
        );
        assert_eq!(
            parse_color("hsl(nan, 1%, 1%)"),
            Err(ColorParseError::InvalidNumber("nan".into()))
        );
    }

    #[test]
    fn from_str_and_try_from() {
        let a: ColorValue = "#B4E6E6".parse().unwrap();
        let b = ColorValue::try_from("rgb(180, 230, 230)").unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn formatted_output_parses_back(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let color = ColorValue::from([r, g, b]);
            prop_assert_eq!(parse_color(&color.hex_code()).unwrap(), color);
            prop_assert_eq!(parse_color(&color.css_rgb()).unwrap(), color);
            prop_assert!(parse_color(&color.css_hsl()).is_ok());
        }
    }
}
