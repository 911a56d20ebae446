use std::collections::BTreeMap;

use crate::color::ColorValue;
use crate::slot::SlotId;

/// Session-start colors per slot.
///
/// Slots missing from the map start at [`SlotId::default_color`]. With the
/// `serde` feature the config reads from TOML, each color written in any
/// form `parse_color` accepts:
///
/// ```toml
/// [slots]
/// foreground = "#B4E6E6"
/// background = "hsl(180, 45%, 43%)"
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ViewerConfig {
    pub slots: BTreeMap<SlotId, ColorValue>,
}

#[cfg(feature = "serde")]
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid viewer config: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ViewerConfig {
    #[must_use]
    pub fn color(&self, id: SlotId) -> ColorValue {
        self.slots
            .get(&id)
            .copied()
            .unwrap_or_else(|| id.default_color())
    }

    #[must_use]
    pub fn with_color(mut self, id: SlotId, color: ColorValue) -> Self {
        self.slots.insert(id, color);
        self
    }

    #[cfg(feature = "serde")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        tracing::info!(
            overridden = config.slots.len(),
            "loaded viewer config"
        );
        Ok(config)
    }
}
