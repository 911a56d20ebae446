use std::fmt;

use crate::color::convert::{hsl_from_rgb, rgb_from_hsl};
use crate::traits::float::Float;

/// Which triple the three arguments of [`ColorValue::create`] describe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorMode {
    #[default]
    Rgb,
    Hsl,
}

/// Integer HSL as shown to a user: hue in 0..=359, the rest in 0..=100.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    #[must_use]
    pub fn into_array(self) -> [f64; 3] {
        [
            self.hue as f64,
            self.saturation as f64,
            self.lightness as f64,
        ]
    }
}

/// A single color.
///
/// Stores unrounded sRGB channels on the 0-255 scale and nothing else; HSL
/// is derived on every read. The channels are clamped on construction, so a
/// `ColorValue` is always a valid point of the RGB cube. There is no way to
/// mutate one in place: the `with_*` helpers return a new value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorValue {
    r: f64,
    g: f64,
    b: f64,
}

impl ColorValue {
    /// Build a color from three numbers in the given mode.
    ///
    /// In [`ColorMode::Rgb`] `a, b, c` are red, green and blue; in
    /// [`ColorMode::Hsl`] they are hue, saturation and lightness. Nothing is
    /// rejected: out-of-range values are clamped and NaN counts as 0.
    #[must_use]
    pub fn create(a: f64, b: f64, c: f64, mode: ColorMode) -> Self {
        match mode {
            ColorMode::Rgb => Self::from_rgb(a, b, c),
            ColorMode::Hsl => Self::from_hsl(a, b, c),
        }
    }

    #[must_use]
    #[inline]
    pub fn from_rgb(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: r.clamp_domain(0.0, 255.0),
            g: g.clamp_domain(0.0, 255.0),
            b: b.clamp_domain(0.0, 255.0),
        }
    }

    #[must_use]
    #[inline]
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let [r, g, b] = rgb_from_hsl(h, s, l);
        Self::from_rgb(r, g, b)
    }

    #[must_use]
    #[inline]
    pub fn red(self) -> u8 {
        self.r.round_u8()
    }

    #[must_use]
    #[inline]
    pub fn green(self) -> u8 {
        self.g.round_u8()
    }

    #[must_use]
    #[inline]
    pub fn blue(self) -> u8 {
        self.b.round_u8()
    }

    #[must_use]
    #[inline]
    pub fn rgb(self) -> [u8; 3] {
        [self.red(), self.green(), self.blue()]
    }

    /// The stored channels, fraction included.
    #[must_use]
    #[inline]
    pub fn channels(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Rounded HSL, recomputed from the channels on every call.
    ///
    /// A hue that rounds up to 360 wraps to 0.
    #[must_use]
    pub fn hsl(self) -> Hsl {
        let [h, s, l] = self.hsl_f64();
        Hsl {
            hue: ((h + 0.5).floor() as u16) % 360,
            saturation: s.round_u8(),
            lightness: l.round_u8(),
        }
    }

    #[must_use]
    #[inline]
    pub fn hsl_f64(self) -> [f64; 3] {
        hsl_from_rgb(self.r, self.g, self.b)
    }

    #[must_use]
    pub fn with_red(self, r: f64) -> Self {
        Self::from_rgb(r, self.g, self.b)
    }

    #[must_use]
    pub fn with_green(self, g: f64) -> Self {
        Self::from_rgb(self.r, g, self.b)
    }

    #[must_use]
    pub fn with_blue(self, b: f64) -> Self {
        Self::from_rgb(self.r, self.g, b)
    }

    /// `#RRGGBB`, uppercase.
    #[must_use]
    pub fn hex_code(self) -> String {
        let [r, g, b] = self.rgb();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// `rgb(r, g, b)` with integer channels.
    #[must_use]
    pub fn css_rgb(self) -> String {
        let [r, g, b] = self.rgb();
        format!("rgb({r}, {g}, {b})")
    }

    /// `hsl(h, s%, l%)` with integer components.
    #[must_use]
    pub fn css_hsl(self) -> String {
        let Hsl {
            hue,
            saturation,
            lightness,
        } = self.hsl();
        format!("hsl({hue}, {saturation}%, {lightness}%)")
    }
}

impl From<[u8; 3]> for ColorValue {
    fn from(rgb: [u8; 3]) -> Self {
        Self::from_rgb(rgb[0] as f64, rgb[1] as f64, rgb[2] as f64)
    }
}

impl From<(u8, u8, u8)> for ColorValue {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::from([r, g, b])
    }
}

impl From<Hsl> for ColorValue {
    fn from(hsl: Hsl) -> Self {
        let [h, s, l] = hsl.into_array();
        Self::from_hsl(h, s, l)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex_code())
    }
}

// hex on the wire; anything `parse_color` understands on the way in
#[cfg(feature = "serde")]
impl serde::Serialize for ColorValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex_code())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ColorValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        crate::color::parse::parse_color(&s).map_err(serde::de::Error::custom)
    }
}
