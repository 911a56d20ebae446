pub mod field;
pub mod reducer;

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::color::ColorValue;

pub use field::{Element, FieldValue};
pub use reducer::{ColorSlot, Edit, SlotState, reduce};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EditParseError {
    #[error("unknown color slot `{0}`")]
    UnknownSlot(String),
    #[error("unknown color element `{0}`")]
    UnknownElement(String),
}

/// Identifies one independently edited color.
///
/// Every slot-keyed structure is a [`SlotMap`], so a new slot only needs a
/// variant here, an entry in `ALL` and a default color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SlotId {
    Foreground,
    Background,
}

impl SlotId {
    pub const ALL: [SlotId; 2] = [SlotId::Foreground, SlotId::Background];
    pub const COUNT: usize = Self::ALL.len();

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SlotId::Foreground => "foreground",
            SlotId::Background => "background",
        }
    }

    /// Session-start color used when no config overrides it.
    #[must_use]
    pub fn default_color(self) -> ColorValue {
        match self {
            SlotId::Foreground => ColorValue::from([180, 230, 230]),
            SlotId::Background => ColorValue::from([60, 160, 160]),
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SlotId {
    type Err = EditParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SlotId::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| EditParseError::UnknownSlot(s.to_owned()))
    }
}

// by name, so slot ids work as TOML and JSON map keys
#[cfg(feature = "serde")]
impl serde::Serialize for SlotId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SlotId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A fixed map with exactly one entry per [`SlotId`].
#[derive(Clone, Debug, PartialEq)]
pub struct SlotMap<T>([T; SlotId::COUNT]);

impl<T> SlotMap<T> {
    pub fn from_fn(f: impl FnMut(SlotId) -> T) -> Self {
        Self(SlotId::ALL.map(f))
    }

    #[must_use]
    pub fn get(&self, id: SlotId) -> &T {
        &self.0[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &T)> {
        SlotId::ALL.into_iter().zip(self.0.iter())
    }
}

impl<T> Index<SlotId> for SlotMap<T> {
    type Output = T;

    fn index(&self, id: SlotId) -> &T {
        self.get(id)
    }
}
