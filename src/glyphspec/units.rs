//! # Unit Resolution
//!
//! Every bindable attribute belongs to a [`UnitCategory`]. A glyph type declares
//! one default unit string per category ([`UnitDefaults`]); that string is what
//! appears as `units` in the attribute's envelope.
//!
//! Some attributes are additionally governed by a [`UnitSlot`] (`radius_units`,
//! `length_units`, ...). A glyph instance may override a slot, and the override
//! wins over the type default for every attribute that slot governs. Overrides
//! live on the instance ([`UnitOverrides`]) and never touch the shared schema.
//!
//! Resolution order for an attribute's `units`:
//!
//! 1. the instance's override for the attribute's slot, if both exist
//! 2. the type's default for the attribute's category

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Grouping of attributes that share one default unit string per glyph type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitCategory {
    /// Coordinates and positional data fields (`x`, `start_angle`, `width`, ...)
    Position,
    /// Extents measured from a point (`size`, `radius`, ...)
    Size,
    Angle,
}

impl UnitCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitCategory::Position => "position",
            UnitCategory::Size => "size",
            UnitCategory::Angle => "angle",
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-type default unit string for each category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitDefaults {
    pub position: &'static str,
    pub size: &'static str,
    pub angle: &'static str,
}

impl UnitDefaults {
    pub const fn new(position: &'static str, size: &'static str, angle: &'static str) -> Self {
        Self {
            position,
            size,
            angle,
        }
    }

    pub fn for_category(&self, category: UnitCategory) -> &'static str {
        match category {
            UnitCategory::Position => self.position,
            UnitCategory::Size => self.size,
            UnitCategory::Angle => self.angle,
        }
    }
}

impl Default for UnitDefaults {
    fn default() -> Self {
        UnitDefaults::new("data", "screen", "deg")
    }
}

/// Per-instance unit override setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UnitSlot {
    Radius,
    Length,
    Angle,
    StartAngle,
    EndAngle,
}

impl UnitSlot {
    pub const ALL: [UnitSlot; 5] = [
        UnitSlot::Radius,
        UnitSlot::Length,
        UnitSlot::Angle,
        UnitSlot::StartAngle,
        UnitSlot::EndAngle,
    ];

    /// The attribute name of the slot on a glyph (e.g. `radius_units`).
    pub fn attr_name(&self) -> &'static str {
        match self {
            UnitSlot::Radius => "radius_units",
            UnitSlot::Length => "length_units",
            UnitSlot::Angle => "angle_units",
            UnitSlot::StartAngle => "start_angle_units",
            UnitSlot::EndAngle => "end_angle_units",
        }
    }

    /// Value reported by a glyph whose slot has not been overridden.
    pub fn default_units(&self) -> &'static str {
        match self {
            UnitSlot::Radius | UnitSlot::Length => "screen",
            UnitSlot::Angle | UnitSlot::StartAngle | UnitSlot::EndAngle => "deg",
        }
    }
}

impl fmt::Display for UnitSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attr_name())
    }
}

impl FromStr for UnitSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnitSlot::ALL
            .iter()
            .copied()
            .find(|slot| slot.attr_name() == s)
            .ok_or_else(|| format!("Unknown unit slot: {}", s))
    }
}

/// Unit overrides held by one glyph instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitOverrides {
    slots: BTreeMap<UnitSlot, String>,
}

impl UnitOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, slot: UnitSlot, units: impl Into<String>) {
        self.slots.insert(slot, units.into());
    }

    pub fn clear(&mut self, slot: UnitSlot) {
        self.slots.remove(&slot);
    }

    /// The explicit override for `slot`, if any.
    pub fn get(&self, slot: UnitSlot) -> Option<&str> {
        self.slots.get(&slot).map(String::as_str)
    }

    /// The override for `slot`, or the slot's glyph-level default.
    pub fn effective(&self, slot: UnitSlot) -> &str {
        self.get(slot).unwrap_or_else(|| slot.default_units())
    }

    /// Units for an attribute of `category` governed by `slot`.
    pub fn resolve<'a>(
        &'a self,
        defaults: &UnitDefaults,
        category: UnitCategory,
        slot: Option<UnitSlot>,
    ) -> &'a str {
        slot.and_then(|s| self.get(s))
            .unwrap_or_else(|| defaults.for_category(category))
    }
}
