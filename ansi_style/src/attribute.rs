// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Display-mode attributes. Each [`Attribute`] occupies one slot, and its slot index is
//! also the SGR parameter the terminal expects:
//!
//! | Slot | Attribute       | Support                                                |
//! | :--- | :-------------- | :----------------------------------------------------- |
//! | 0    | Normal          | everywhere                                             |
//! | 1    | Bold / Bright   | everywhere                                             |
//! | 2    | Dull / Faint    | not widely supported                                   |
//! | 3    | Italic          | not widely supported, sometimes rendered as inverse    |
//! | 4    | Underline       | everywhere                                             |
//! | 5    | Blink (slow)    | everywhere                                             |
//! | 6    | Blink (fast)    | only `ANSI.SYS` on old MS-DOS                          |
//! | 7    | Inverse         | everywhere, but only for the base 8 colors             |

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter, FromRepr};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, FromRepr,
)]
#[repr(u8)]
pub enum Attribute {
    #[strum(to_string = "Normal")]
    Normal = 0,
    #[strum(to_string = "Bold/Bright")]
    Bold = 1,
    #[strum(to_string = "Dull/Faint")]
    Dull = 2,
    #[strum(to_string = "Italic")]
    Italic = 3,
    #[strum(to_string = "Underline")]
    Underline = 4,
    #[strum(to_string = "Blink (slow)")]
    BlinkSlow = 5,
    #[strum(to_string = "Blink (fast/DOS)")]
    BlinkFast = 6,
    #[strum(to_string = "Inverse")]
    Inverse = 7,
}

/// Upper case name to attribute, aliases included.
pub const ATTRIBUTE_NAME_TABLE: [(&str, Attribute); 12] = [
    ("NORMAL", Attribute::Normal),
    ("BOLD", Attribute::Bold),
    ("BRIGHT", Attribute::Bold),
    ("DULL", Attribute::Dull),
    ("FAINT", Attribute::Dull),
    ("ITALIC", Attribute::Italic),
    ("UNDERLINE", Attribute::Underline),
    ("BLINK", Attribute::BlinkSlow),
    ("BLINK_SLOW", Attribute::BlinkSlow),
    ("BLINK_FAST", Attribute::BlinkFast),
    ("BLINK_DOS", Attribute::BlinkFast),
    ("INVERSE", Attribute::Inverse),
];

mod attribute_impl {
    use super::{ATTRIBUTE_NAME_TABLE, Attribute};

    impl Attribute {
        /// Slot index, which doubles as the SGR parameter.
        #[must_use]
        pub fn index(self) -> u8 { self as u8 }

        #[must_use]
        pub fn from_index(index: u8) -> Option<Self> { Self::from_repr(index) }

        #[must_use]
        pub fn from_name(name: &str) -> Option<Self> {
            ATTRIBUTE_NAME_TABLE
                .iter()
                .find(|(table_name, _)| table_name.eq_ignore_ascii_case(name))
                .map(|(_, attribute)| *attribute)
        }
    }
}

/// Fixed table of 8 independently toggleable attribute slots, one bit per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct AttributeSet {
    bits: u8,
}

mod attribute_set_impl {
    use super::{Attribute, AttributeSet, IntoEnumIterator};

    impl AttributeSet {
        #[must_use]
        pub fn new() -> Self { Self::default() }

        #[must_use]
        pub fn contains(&self, attribute: Attribute) -> bool {
            self.bits & (1 << attribute.index()) != 0
        }

        pub fn insert(&mut self, attribute: Attribute) {
            self.bits |= 1 << attribute.index();
        }

        pub fn remove(&mut self, attribute: Attribute) {
            self.bits &= !(1 << attribute.index());
        }

        pub fn set(&mut self, attribute: Attribute, value: bool) {
            if value {
                self.insert(attribute);
            } else {
                self.remove(attribute);
            }
        }

        /// Active attributes in ascending slot order.
        pub fn iter(&self) -> impl Iterator<Item = Attribute> + '_ {
            Attribute::iter().filter(|attribute| self.contains(*attribute))
        }
    }

    impl Extend<Attribute> for AttributeSet {
        fn extend<I: IntoIterator<Item = Attribute>>(&mut self, iter: I) {
            for attribute in iter {
                self.insert(attribute);
            }
        }
    }

    impl FromIterator<Attribute> for AttributeSet {
        fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
            let mut set = Self::new();
            set.extend(iter);
            set
        }
    }
}
