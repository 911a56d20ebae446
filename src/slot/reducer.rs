use std::ops::Index;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::color::{ColorMode, ColorValue};
use crate::config::ViewerConfig;
use crate::slot::field::{Element, FieldValue};
use crate::slot::{EditParseError, SlotId, SlotMap};

/// The six fields of one color, in [`Element::ALL`] order.
///
/// Right after an edit the RGB and HSL triples describe the same color;
/// nothing recomputes them in between.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorSlot {
    fields: [FieldValue; 6],
}

impl ColorSlot {
    /// A consistent slot for `color`: its rounded RGB next to its rounded HSL.
    #[must_use]
    pub fn from_color(color: ColorValue) -> Self {
        let [r, g, b] = color.rgb();
        let hsl = color.hsl();
        Self {
            fields: [
                r.into(),
                g.into(),
                b.into(),
                FieldValue::Number(hsl.hue as f64),
                hsl.saturation.into(),
                hsl.lightness.into(),
            ],
        }
    }

    #[must_use]
    pub fn field(&self, element: Element) -> &FieldValue {
        &self.fields[element.index()]
    }

    fn triple(&self, elements: [Element; 3]) -> [f64; 3] {
        elements.map(|e| self.field(e).numeric())
    }

    fn set_triple(&mut self, elements: [Element; 3], values: [f64; 3]) {
        for (e, v) in elements.into_iter().zip(values) {
            self.fields[e.index()] = FieldValue::Number(v);
        }
    }

    /// The color as displayed, built from the red, green and blue fields.
    #[must_use]
    pub fn color(&self) -> ColorValue {
        let [r, g, b] = self.triple(Element::RGB);
        ColorValue::from_rgb(r, g, b)
    }

    /// The color described by the hue, saturation and lightness fields.
    #[must_use]
    pub fn color_from_hsl(&self) -> ColorValue {
        let [h, s, l] = self.triple(Element::HSL);
        ColorValue::from_hsl(h, s, l)
    }

    /// Write `value` into `element` and re-derive the other triple from the
    /// one that was just edited.
    fn with_edit(&self, element: Element, value: FieldValue) -> ColorSlot {
        let mut slot = self.clone();
        slot.fields[element.index()] = value;

        match element.mode() {
            ColorMode::Rgb => {
                let hsl = slot.color().hsl();
                slot.set_triple(Element::HSL, hsl.into_array());
            }
            ColorMode::Hsl => {
                let rgb = slot.color_from_hsl().rgb();
                slot.set_triple(Element::RGB, rgb.map(f64::from));
            }
        }

        trace!(
            rgb = ?slot.triple(Element::RGB),
            hsl = ?slot.triple(Element::HSL),
            "re-derived slot"
        );
        slot
    }
}

impl Default for ColorSlot {
    fn default() -> Self {
        Self::from_color(ColorValue::default())
    }
}

impl Index<Element> for ColorSlot {
    type Output = FieldValue;

    fn index(&self, element: Element) -> &FieldValue {
        self.field(element)
    }
}

/// A single-field change coming from the UI.
#[derive(Clone, Debug, PartialEq)]
pub struct Edit {
    pub kind: SlotId,
    pub element: Element,
    /// Raw text as typed; parsed when the edit is applied.
    pub value: String,
}

impl Edit {
    pub fn new(kind: SlotId, element: Element, value: impl Into<String>) -> Self {
        Self {
            kind,
            element,
            value: value.into(),
        }
    }

    /// Build an edit from names such as `("foreground", "Red", "10")`.
    /// Names are matched case-insensitively; the value is never rejected.
    pub fn parse(kind: &str, element: &str, value: &str) -> Result<Self, EditParseError> {
        Ok(Self::new(kind.parse()?, element.parse()?, value))
    }
}

/// Every slot of a session.
///
/// Slots sit behind `Arc` so [`SlotState::apply`] can hand untouched slots to
/// the new state without copying them.
#[derive(Clone, Debug, PartialEq)]
pub struct SlotState {
    slots: SlotMap<Arc<ColorSlot>>,
}

impl SlotState {
    pub fn new(config: &ViewerConfig) -> Self {
        Self::from_colors(|id| config.color(id))
    }

    pub fn from_colors(mut color: impl FnMut(SlotId) -> ColorValue) -> Self {
        Self {
            slots: SlotMap::from_fn(|id| Arc::new(ColorSlot::from_color(color(id)))),
        }
    }

    #[must_use]
    pub fn slot(&self, id: SlotId) -> &ColorSlot {
        &self.slots[id]
    }

    /// Whether both states hold the very same slot allocation for `id`.
    #[must_use]
    pub fn shares_slot(&self, other: &SlotState, id: SlotId) -> bool {
        Arc::ptr_eq(&self.slots[id], &other.slots[id])
    }

    /// The color to render for `id`.
    #[must_use]
    pub fn color(&self, id: SlotId) -> ColorValue {
        self.slots[id].color()
    }

    /// The background color. Applying it to the page is up to the caller.
    #[must_use]
    pub fn page_background(&self) -> ColorValue {
        self.color(SlotId::Background)
    }

    /// Apply one edit and return the resulting state.
    ///
    /// The edited slot is rebuilt; every other slot is carried over as-is.
    /// Never fails: invalid text is kept in its field and counts as 0.
    #[must_use]
    pub fn apply(&self, edit: &Edit) -> SlotState {
        let value = FieldValue::parse(&edit.value);
        if let FieldValue::Invalid(raw) = &value {
            debug!(
                slot = %edit.kind,
                element = %edit.element,
                raw = %raw,
                "edit text is not a number, counting it as 0"
            );
        }
        debug!(slot = %edit.kind, element = %edit.element, "applying color edit");

        let slots = SlotMap::from_fn(|id| {
            if id == edit.kind {
                Arc::new(self.slots[id].with_edit(edit.element, value.clone()))
            } else {
                Arc::clone(&self.slots[id])
            }
        });
        SlotState { slots }
    }
}

impl Default for SlotState {
    fn default() -> Self {
        Self::from_colors(SlotId::default_color)
    }
}

impl Index<SlotId> for SlotState {
    type Output = ColorSlot;

    fn index(&self, id: SlotId) -> &ColorSlot {
        self.slot(id)
    }
}

/// Free-function form of [`SlotState::apply`].
#[must_use]
pub fn reduce(state: &SlotState, edit: &Edit) -> SlotState {
    state.apply(edit)
}
