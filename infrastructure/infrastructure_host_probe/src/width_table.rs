//! Word Width Table Module
//!
//! Provides the width probe: one bit width per integer category, built once
//! from host-reported byte sizes and consulted by lookup afterwards.

use entities_numeric_types::{BitWidth, IntegerCategory, IntegerTypeDescriptor};

use crate::facts::HostFacts;

/// Bit width of every integer category on one host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordWidthTable {
    widths: [BitWidth; IntegerCategory::COUNT],
}

impl WordWidthTable {
    /// Build the table from host facts
    ///
    /// Categories with a non-positive byte size resolve to
    /// [`BitWidth::UNSUPPORTED`].
    pub fn from_facts(facts: &HostFacts) -> Self {
        let mut widths = [BitWidth::UNSUPPORTED; IntegerCategory::COUNT];
        for category in IntegerCategory::ALL {
            widths[category.index()] = BitWidth::from_byte_size(facts.size_of(category));
        }
        Self { widths }
    }

    /// Width of a category, or the sentinel if the host lacks it
    pub fn width_of(&self, category: IntegerCategory) -> BitWidth {
        self.widths[category.index()]
    }

    /// Descriptor for a category with the given signedness
    pub fn descriptor_of(&self, category: IntegerCategory, is_signed: bool) -> IntegerTypeDescriptor {
        IntegerTypeDescriptor::new(self.width_of(category), is_signed)
    }

    /// Whether the host provides a category
    pub fn is_available(&self, category: IntegerCategory) -> bool {
        self.width_of(category).is_supported()
    }

    /// `(category, width)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (IntegerCategory, BitWidth)> + '_ {
        IntegerCategory::ALL.iter().map(move |&c| (c, self.width_of(c)))
    }
}
