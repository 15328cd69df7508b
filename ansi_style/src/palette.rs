// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The 8 base (system) colors, addressable with the classic `30..=37` (foreground) and
//! `40..=47` (background) SGR codes.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>
//! - <https://www.ditig.com/256-colors-cheat-sheet>

use strum_macros::{Display, EnumCount, EnumIter, FromRepr};

/// Highest index that is still a base color. Anything above this is an extended color.
pub const MAX_BASE_COLOR_INDEX: u8 = 7;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, FromRepr,
)]
#[repr(u8)]
pub enum BaseColor {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Purple = 5,
    Cyan = 6,
    White = 7,
}

/// Upper case name to color. Lookups ignore case but must otherwise match exactly.
pub const BASE_COLOR_NAME_TABLE: [(&str, BaseColor); 8] = [
    ("BLACK", BaseColor::Black),
    ("RED", BaseColor::Red),
    ("GREEN", BaseColor::Green),
    ("YELLOW", BaseColor::Yellow),
    ("BLUE", BaseColor::Blue),
    ("PURPLE", BaseColor::Purple),
    ("CYAN", BaseColor::Cyan),
    ("WHITE", BaseColor::White),
];

mod base_color_impl {
    use super::{BASE_COLOR_NAME_TABLE, BaseColor};

    impl BaseColor {
        #[must_use]
        pub fn index(self) -> u8 { self as u8 }

        /// Returns `None` for indices in the extended range.
        #[must_use]
        pub fn from_index(index: u8) -> Option<Self> { Self::from_repr(index) }

        #[must_use]
        pub fn from_name(name: &str) -> Option<Self> {
            BASE_COLOR_NAME_TABLE
                .iter()
                .find(|(table_name, _)| table_name.eq_ignore_ascii_case(name))
                .map(|(_, color)| *color)
        }

        /// Upper case name, as used in the palette dumps.
        #[must_use]
        pub fn upper_case_name(self) -> &'static str {
            BASE_COLOR_NAME_TABLE[usize::from(self.index())].0
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::{EnumCount, IntoEnumIterator};
    use test_case::test_case;

    use super::{BASE_COLOR_NAME_TABLE, BaseColor};

    #[test_case("black", BaseColor::Black)]
    #[test_case("RED", BaseColor::Red)]
    #[test_case("Green", BaseColor::Green)]
    #[test_case("yElLoW", BaseColor::Yellow)]
    #[test_case("blue", BaseColor::Blue)]
    #[test_case("purple", BaseColor::Purple)]
    #[test_case("CYAN", BaseColor::Cyan)]
    #[test_case("white", BaseColor::White)]
    fn test_from_name(name: &str, expected: BaseColor) {
        assert_eq!(BaseColor::from_name(name), Some(expected));
    }

    #[test_case("magenta")]
    #[test_case("")]
    #[test_case("re d")]
    #[test_case("redd")]
    #[test_case(" red")]
    fn test_from_name_rejects_unknown(name: &str) {
        assert_eq!(BaseColor::from_name(name), None);
    }

    #[test]
    fn table_covers_every_color_in_index_order() {
        assert_eq!(BASE_COLOR_NAME_TABLE.len(), BaseColor::COUNT);
        for (index, color) in BaseColor::iter().enumerate() {
            let (name, table_color) = BASE_COLOR_NAME_TABLE[index];
            assert_eq!(table_color, color);
            assert_eq!(name, color.to_string().to_ascii_uppercase());
            assert_eq!(usize::from(color.index()), index);
        }
    }

    #[test]
    fn from_index_stops_at_the_base_range() {
        assert_eq!(BaseColor::from_index(5), Some(BaseColor::Purple));
        assert_eq!(BaseColor::from_index(8), None);
        assert_eq!(BaseColor::from_index(200), None);
    }
}
