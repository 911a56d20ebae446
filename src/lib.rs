//! A color model that keeps RGB and HSL in step.
//!
//! [`ColorValue`] holds one color and converts it both ways. [`SlotState`]
//! tracks a handful of independently edited colors (foreground and
//! background) as six numeric fields each, and re-derives one triple from
//! the other whenever a single field is edited.
//!
//! ```
//! use colorview::{Edit, Element, SlotId, SlotState};
//!
//! let state = SlotState::default();
//! let state = state.apply(&Edit::new(SlotId::Foreground, Element::Red, "10"));
//! assert_eq!(state.color(SlotId::Foreground).hex_code(), "#0AE6E6");
//! assert_eq!(state[SlotId::Foreground][Element::Saturation].to_string(), "92");
//! ```

pub mod color;
pub mod config;
pub mod slot;
pub(crate) mod traits;

pub use color::{ColorMode, ColorParseError, ColorValue, Hsl, parse_color};
pub use config::ViewerConfig;
#[cfg(feature = "serde")]
pub use config::ConfigError;
pub use slot::{ColorSlot, Edit, EditParseError, Element, FieldValue, SlotId, SlotMap, SlotState, reduce};
