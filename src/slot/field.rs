use std::fmt;
use std::str::FromStr;

use crate::color::ColorMode;
use crate::slot::EditParseError;

/// One of the six editable fields of a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    Red,
    Green,
    Blue,
    Hue,
    Saturation,
    Lightness,
}

impl Element {
    pub const ALL: [Element; 6] = [
        Element::Red,
        Element::Green,
        Element::Blue,
        Element::Hue,
        Element::Saturation,
        Element::Lightness,
    ];
    pub const RGB: [Element; 3] = [Element::Red, Element::Green, Element::Blue];
    pub const HSL: [Element; 3] = [Element::Hue, Element::Saturation, Element::Lightness];

    /// The triple this field belongs to.
    #[must_use]
    pub fn mode(self) -> ColorMode {
        match self {
            Element::Red | Element::Green | Element::Blue => ColorMode::Rgb,
            Element::Hue | Element::Saturation | Element::Lightness => ColorMode::Hsl,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Element::Red => "Red",
            Element::Green => "Green",
            Element::Blue => "Blue",
            Element::Hue => "Hue",
            Element::Saturation => "Saturation",
            Element::Lightness => "Lightness",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Element {
    type Err = EditParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Element::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| EditParseError::UnknownElement(s.to_owned()))
    }
}

/// The value of a single slot field.
///
/// Text typed into a field is parsed once, at ingestion. Anything that is
/// not a finite number is kept verbatim as `Invalid` so it can be shown back
/// to the user, and contributes 0 to every conversion.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Invalid(String),
}

impl FieldValue {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => FieldValue::Number(v),
            _ => FieldValue::Invalid(raw.to_owned()),
        }
    }

    /// The number, or 0 for invalid text.
    #[must_use]
    pub fn numeric(&self) -> f64 {
        match self {
            FieldValue::Number(v) => *v,
            FieldValue::Invalid(_) => 0.0,
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldValue::Number(_))
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Number(0.0)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        if v.is_finite() {
            FieldValue::Number(v)
        } else {
            FieldValue::Invalid(v.to_string())
        }
    }
}

impl From<u8> for FieldValue {
    fn from(v: u8) -> Self {
        FieldValue::Number(v as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(raw: &str) -> Self {
        FieldValue::parse(raw)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64's Display already drops a zero fraction: 180.0 -> "180"
            FieldValue::Number(v) => write!(f, "{v}"),
            FieldValue::Invalid(raw) => f.write_str(raw),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FieldValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Number(v) => serializer.serialize_f64(*v),
            FieldValue::Invalid(raw) => serializer.serialize_str(raw),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FieldValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        Ok(match <Raw as serde::Deserialize>::deserialize(deserializer)? {
            Raw::Number(v) => FieldValue::from(v),
            Raw::Text(s) => FieldValue::parse(&s),
        })
    }
}
