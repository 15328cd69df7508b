// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Caller facing inputs. A color or attribute can be given either by name or by
//! number; [`ColorSpec`] and [`AttributeSpec`] carry that choice to the boundary, where
//! it is resolved exactly once into a plain integer.

use crate::{AnsiStyleError, Attribute, BaseColor, RgbValue, StyleResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorSpec {
    /// Case-insensitive name from the base palette.
    Named(String),
    /// Palette index, valid in `0..=255`.
    Indexed(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeSpec {
    /// Case-insensitive attribute name, aliases included.
    Named(String),
    /// Slot index, valid in `0..=7`.
    Indexed(i64),
}

mod color_spec_impl {
    use super::{AnsiStyleError, BaseColor, ColorSpec, RgbValue, StyleResult};

    impl ColorSpec {
        /// # Errors
        ///
        /// - [`AnsiStyleError::InvalidColorName`] for names outside the base palette.
        /// - [`AnsiStyleError::InvalidColorValue`] for numbers outside `0..=255`.
        pub fn resolve(&self) -> StyleResult<u8> {
            match self {
                ColorSpec::Named(name) => BaseColor::from_name(name)
                    .map(BaseColor::index)
                    .ok_or_else(|| AnsiStyleError::InvalidColorName { name: name.clone() }),
                ColorSpec::Indexed(value) => u8::try_from(*value)
                    .map_err(|_| AnsiStyleError::InvalidColorValue { value: *value }),
            }
        }
    }

    /// A numeric string is an index, anything else is a name.
    impl From<&str> for ColorSpec {
        fn from(arg: &str) -> Self {
            match arg.trim().parse::<i64>() {
                Ok(value) => ColorSpec::Indexed(value),
                Err(_) => ColorSpec::Named(arg.to_string()),
            }
        }
    }

    impl From<String> for ColorSpec {
        fn from(arg: String) -> Self { ColorSpec::from(arg.as_str()) }
    }

    impl From<&String> for ColorSpec {
        fn from(arg: &String) -> Self { ColorSpec::from(arg.as_str()) }
    }

    impl From<u8> for ColorSpec {
        fn from(index: u8) -> Self { ColorSpec::Indexed(i64::from(index)) }
    }

    impl From<i32> for ColorSpec {
        fn from(value: i32) -> Self { ColorSpec::Indexed(i64::from(value)) }
    }

    impl From<i64> for ColorSpec {
        fn from(value: i64) -> Self { ColorSpec::Indexed(value) }
    }

    impl From<BaseColor> for ColorSpec {
        fn from(color: BaseColor) -> Self { ColorSpec::from(color.index()) }
    }

    /// Resolves through the nearest extended palette entry.
    impl From<RgbValue> for ColorSpec {
        fn from(rgb_value: RgbValue) -> Self { ColorSpec::from(rgb_value.as_ansi().index) }
    }
}

mod attribute_spec_impl {
    use super::{AnsiStyleError, Attribute, AttributeSpec, StyleResult};

    impl AttributeSpec {
        /// # Errors
        ///
        /// [`AnsiStyleError::InvalidAttribute`] for unknown names, or indices outside
        /// `0..=7`.
        pub fn resolve(&self) -> StyleResult<Attribute> {
            let maybe_attribute = match self {
                AttributeSpec::Named(name) => Attribute::from_name(name),
                AttributeSpec::Indexed(value) => {
                    u8::try_from(*value).ok().and_then(Attribute::from_index)
                }
            };
            maybe_attribute.ok_or_else(|| AnsiStyleError::InvalidAttribute {
                attribute: match self {
                    AttributeSpec::Named(name) => name.clone(),
                    AttributeSpec::Indexed(value) => value.to_string(),
                },
            })
        }
    }

    impl From<&str> for AttributeSpec {
        fn from(arg: &str) -> Self {
            match arg.trim().parse::<i64>() {
                Ok(value) => AttributeSpec::Indexed(value),
                Err(_) => AttributeSpec::Named(arg.to_string()),
            }
        }
    }

    impl From<String> for AttributeSpec {
        fn from(arg: String) -> Self { AttributeSpec::from(arg.as_str()) }
    }

    impl From<&String> for AttributeSpec {
        fn from(arg: &String) -> Self { AttributeSpec::from(arg.as_str()) }
    }

    impl From<u8> for AttributeSpec {
        fn from(index: u8) -> Self { AttributeSpec::Indexed(i64::from(index)) }
    }

    impl From<i32> for AttributeSpec {
        fn from(value: i32) -> Self { AttributeSpec::Indexed(i64::from(value)) }
    }

    impl From<Attribute> for AttributeSpec {
        fn from(attribute: Attribute) -> Self { AttributeSpec::from(attribute.index()) }
    }
}
