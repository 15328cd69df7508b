// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          io::Write};

use smallstr::SmallString;
use smallvec::SmallVec;

use crate::{Attribute, AttributeSet, AttributeSpec, BaseColor, CSI, ColorSpec,
            ForegroundParam, MAX_BASE_COLOR_INDEX, SGR, SGR_RESET, SgrCode, StyleResult};

/// One active style context: a foreground color, an optional background color, and a
/// set of display-mode attributes, along with the escape sequence prefix they render to.
///
/// - Inputs are given as [`ColorSpec`] / [`AttributeSpec`] (names or numbers) and are
///   resolved once, at the boundary. Internally everything is a plain integer.
/// - Every mutator re-renders the prefix before it returns, so the prefix always agrees
///   with the colors and attributes.
/// - Attributes are only rendered while both colors are base colors (`0..=7`). If either
///   one is extended (`8..=255`) the attribute codes are dropped. [`Attribute::Inverse`]
///   is emulated in that case by swapping the two colors, see [`Self::set_inverse()`].
/// - Output goes to any [`Write`] sink, so tests capture it in a `Vec<u8>`.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_ansi_style::{Attribute, BaseColor, ResetPolicy, StyleDescriptor};
///
/// let style = StyleDescriptor::try_new(BaseColor::White)?
///     .with_background(BaseColor::Green)?
///     .with_attributes([Attribute::Bold, Attribute::Underline, Attribute::BlinkSlow])?;
///
/// let mut out: Vec<u8> = vec![];
/// style.print_line(&mut out, "test", ResetPolicy::ResetAfter)?;
/// assert_eq!(out, b"\x1b[1;4;5;37m\x1b[42mtest\x1b[0m\n");
/// # Ok::<(), r3bl_ansi_style::AnsiStyleError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDescriptor {
    foreground: u8,
    background: Option<u8>,
    attributes: AttributeSet,
    /// Set while inverse emulation has moved an extended foreground into an unset
    /// background slot, so turning inverse off can unset the background again.
    is_background_borrowed: bool,
    rendered_prefix: sizing::InlineString,
    reset_sequence: &'static str,
}

pub mod sizing {
    use super::{Attribute, SmallString, SmallVec};

    /// Longest prefix is 8 attribute params followed by an extended foreground and an
    /// extended background: `ESC[0;1;2;3;4;5;6;7;38;5;255mESC[48;5;255m`.
    pub const PREFIX_STORAGE_SIZE: usize = 48;
    pub type InlineString = SmallString<[u8; PREFIX_STORAGE_SIZE]>;

    pub const MAX_ATTRIBUTES: usize = 8;
    pub type InlineVecAttributes = SmallVec<[Attribute; MAX_ATTRIBUTES]>;
}

/// Whether [`StyleDescriptor::print()`] restores the terminal defaults after the text.
///
/// With [`ResetPolicy::LeaveStyled`] the caller owns the obligation to call
/// [`StyleDescriptor::reset()`] later, or the terminal stays styled after the process
/// exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetPolicy {
    #[default]
    ResetAfter,
    LeaveStyled,
}

fn resolve_color(spec: ColorSpec) -> StyleResult<u8> {
    spec.resolve().inspect_err(|error| {
        // % is Display, ? is Debug.
        tracing::warn!(message = "Rejected color", error = %error);
    })
}

fn resolve_attribute(spec: AttributeSpec) -> StyleResult<Attribute> {
    spec.resolve().inspect_err(|error| {
        tracing::warn!(message = "Rejected attribute", error = %error);
    })
}

mod construct {
    use super::{AttributeSet, AttributeSpec, ColorSpec, SGR_RESET, StyleDescriptor,
                StyleResult, resolve_attribute, resolve_color, sizing};

    impl StyleDescriptor {
        /// Foreground only: no background, no attributes.
        ///
        /// # Errors
        ///
        /// Returns an error if `foreground` does not resolve, see [`ColorSpec::resolve()`].
        pub fn try_new(foreground: impl Into<ColorSpec>) -> StyleResult<Self> {
            let foreground = resolve_color(foreground.into())?;
            let mut it = Self {
                foreground,
                background: None,
                attributes: AttributeSet::new(),
                is_background_borrowed: false,
                rendered_prefix: sizing::InlineString::new(),
                reset_sequence: SGR_RESET,
            };
            it.recompute();
            Ok(it)
        }

        /// # Errors
        ///
        /// Returns an error if `background` does not resolve.
        pub fn with_background(mut self, background: impl Into<ColorSpec>) -> StyleResult<Self> {
            self.set_background(background)?;
            Ok(self)
        }

        /// Every attribute in the collection is activated. Duplicates are harmless.
        ///
        /// # Errors
        ///
        /// Returns an error if any attribute does not resolve. Nothing is applied in that
        /// case.
        pub fn with_attributes<S: Into<AttributeSpec>>(
            mut self,
            attributes: impl IntoIterator<Item = S>,
        ) -> StyleResult<Self> {
            let resolved = attributes
                .into_iter()
                .map(|it| resolve_attribute(it.into()))
                .collect::<StyleResult<Vec<_>>>()?;
            self.attributes.extend(resolved);
            self.recompute();
            Ok(self)
        }
    }
}

mod mutate {
    use super::{Attribute, AttributeSpec, BaseColor, ColorSpec, MAX_BASE_COLOR_INDEX,
                StyleDescriptor, StyleResult, resolve_attribute, resolve_color};

    impl StyleDescriptor {
        /// # Errors
        ///
        /// Returns an error if `color` does not resolve. The descriptor is unchanged.
        pub fn set_foreground(&mut self, color: impl Into<ColorSpec>) -> StyleResult<()> {
            self.foreground = resolve_color(color.into())?;
            self.is_background_borrowed = false;
            self.recompute();
            Ok(())
        }

        /// # Errors
        ///
        /// Returns an error if `color` does not resolve. The descriptor is unchanged.
        pub fn set_background(&mut self, color: impl Into<ColorSpec>) -> StyleResult<()> {
            self.background = Some(resolve_color(color.into())?);
            self.is_background_borrowed = false;
            self.recompute();
            Ok(())
        }

        /// Back to the terminal's default background.
        pub fn clear_background(&mut self) {
            self.background = None;
            self.is_background_borrowed = false;
            self.recompute();
        }

        pub fn set_bold(&mut self, value: bool) { self.set_attribute(Attribute::Bold, value); }

        pub fn set_underline(&mut self, value: bool) {
            self.set_attribute(Attribute::Underline, value);
        }

        pub fn set_blink(&mut self, value: bool) {
            self.set_attribute(Attribute::BlinkSlow, value);
        }

        /// The terminal's native inverse video only affects the base 8 color pair. When
        /// the requested value differs from the current one and either color is
        /// extended, the stored colors are swapped to fake it. Calling this again with
        /// the same value does not swap back.
        ///
        /// An extended foreground with no background moves into the background slot,
        /// and the foreground becomes [`BaseColor::Black`]. Turning inverse off again
        /// restores it, and unsets the background.
        pub fn set_inverse(&mut self, value: bool) {
            let is_changing = self.attributes.contains(Attribute::Inverse) != value;
            let is_extended = self.foreground > MAX_BASE_COLOR_INDEX
                || self
                    .background
                    .is_some_and(|background| background > MAX_BASE_COLOR_INDEX);
            if is_changing && is_extended {
                self.swap_colors();
            }
            self.set_attribute(Attribute::Inverse, value);
        }

        /// Toggle any attribute slot.
        pub fn set_attribute(&mut self, attribute: Attribute, value: bool) {
            self.attributes.set(attribute, value);
            self.recompute();
        }

        /// # Errors
        ///
        /// Returns an error if `attribute` does not resolve.
        pub fn set_attribute_spec(
            &mut self,
            attribute: impl Into<AttributeSpec>,
            value: bool,
        ) -> StyleResult<()> {
            let attribute = resolve_attribute(attribute.into())?;
            if attribute == Attribute::Inverse {
                self.set_inverse(value);
            } else {
                self.set_attribute(attribute, value);
            }
            Ok(())
        }

        fn swap_colors(&mut self) {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "Emulating inverse by swapping colors",
                foreground = %self.foreground,
                background = ?self.background
            );
            match self.background {
                None => {
                    self.background = Some(self.foreground);
                    self.foreground = BaseColor::Black.index();
                    self.is_background_borrowed = true;
                }
                Some(background) if self.is_background_borrowed => {
                    self.foreground = background;
                    self.background = None;
                    self.is_background_borrowed = false;
                }
                Some(background) => {
                    self.background = Some(self.foreground);
                    self.foreground = background;
                }
            }
        }
    }
}

mod render {
    use std::fmt::Write as _;

    use super::{CSI, Display, ForegroundParam, Formatter, MAX_BASE_COLOR_INDEX, SGR,
                SgrCode, StyleDescriptor};

    impl StyleDescriptor {
        /// Rebuilds the prefix from scratch. Called by every mutator.
        pub(super) fn recompute(&mut self) {
            let mut acc = super::sizing::InlineString::new();
            // Writing into an inline string can't fail.
            write!(acc, "{}", PrefixParts::from(&*self)).ok();
            self.rendered_prefix = acc;
            tracing::trace!(message = "Recomputed prefix", prefix = ?self.rendered_prefix);
        }

        /// True when attribute codes make it into the prefix.
        #[must_use]
        pub fn renders_attributes(&self) -> bool {
            self.foreground <= MAX_BASE_COLOR_INDEX
                && self
                    .background
                    .is_none_or(|background| background <= MAX_BASE_COLOR_INDEX)
        }
    }

    struct PrefixParts<'a> {
        descriptor: &'a StyleDescriptor,
    }

    impl<'a> From<&'a StyleDescriptor> for PrefixParts<'a> {
        fn from(descriptor: &'a StyleDescriptor) -> Self { Self { descriptor } }
    }

    /// `ESC[` + `<attr>;`... + foreground + `m`, then the background sequence if any.
    impl Display for PrefixParts<'_> {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            let descriptor = self.descriptor;
            write!(f, "{CSI}")?;
            if descriptor.renders_attributes() {
                for attribute in descriptor.attributes.iter() {
                    write!(f, "{};", attribute.index())?;
                }
            }
            write!(f, "{}{SGR}", ForegroundParam(descriptor.foreground))?;
            if let Some(background) = descriptor.background {
                write!(f, "{}", SgrCode::background(background))?;
            }
            Ok(())
        }
    }
}

mod output {
    use super::{ResetPolicy, StyleDescriptor, StyleResult, Write};

    impl StyleDescriptor {
        /// Prefix, then `text`, then the reset sequence unless `policy` says otherwise.
        /// No trailing newline.
        ///
        /// # Errors
        ///
        /// Propagates failures of the output sink.
        pub fn print(
            &self,
            out: &mut impl Write,
            text: &str,
            policy: ResetPolicy,
        ) -> StyleResult<()> {
            out.write_all(self.paint(text, policy).as_bytes())?;
            Ok(())
        }

        /// Same as [`Self::print()`] followed by a newline, after the optional reset.
        ///
        /// # Errors
        ///
        /// Propagates failures of the output sink.
        pub fn print_line(
            &self,
            out: &mut impl Write,
            text: &str,
            policy: ResetPolicy,
        ) -> StyleResult<()> {
            self.print(out, text, policy)?;
            out.write_all(b"\n")?;
            Ok(())
        }

        /// Emits only the reset sequence, reverting an earlier
        /// [`ResetPolicy::LeaveStyled`] print.
        ///
        /// # Errors
        ///
        /// Propagates failures of the output sink.
        pub fn reset(&self, out: &mut impl Write) -> StyleResult<()> {
            out.write_all(self.reset_sequence.as_bytes())?;
            Ok(())
        }

        /// What [`Self::print()`] writes, as a [String].
        #[must_use]
        pub fn paint(&self, text: &str, policy: ResetPolicy) -> String {
            let reset = match policy {
                ResetPolicy::ResetAfter => self.reset_sequence,
                ResetPolicy::LeaveStyled => "",
            };
            format!("{}{text}{reset}", self.rendered_prefix)
        }
    }
}

mod accessors {
    use super::{AttributeSet, StyleDescriptor};

    impl StyleDescriptor {
        #[must_use]
        pub fn rendered_prefix(&self) -> &str { &self.rendered_prefix }

        #[must_use]
        pub fn reset_sequence(&self) -> &'static str { self.reset_sequence }

        #[must_use]
        pub fn foreground(&self) -> u8 { self.foreground }

        #[must_use]
        pub fn background(&self) -> Option<u8> { self.background }

        #[must_use]
        pub fn attributes(&self) -> AttributeSet { self.attributes }
    }
}

/// A resolved color as reported by [`StyleDescriptor::describe()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDescription {
    Base(BaseColor),
    Extended(u8),
}

/// Snapshot of a [`StyleDescriptor`], rebuilt on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDescription {
    pub foreground: ColorDescription,
    pub background: Option<ColorDescription>,
    /// Active attribute slots, ascending.
    pub attributes: sizing::InlineVecAttributes,
}

mod describe {
    use super::{BaseColor, ColorDescription, Display, Formatter, StyleDescription,
                StyleDescriptor};

    impl ColorDescription {
        #[must_use]
        pub fn from_index(index: u8) -> Self {
            match BaseColor::from_index(index) {
                Some(color) => ColorDescription::Base(color),
                None => ColorDescription::Extended(index),
            }
        }
    }

    impl Display for ColorDescription {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            match self {
                ColorDescription::Base(color) => write!(f, "{color}"),
                ColorDescription::Extended(index) => write!(f, "{index}"),
            }
        }
    }

    impl Display for StyleDescription {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            writeln!(f, "foreground: {}", self.foreground)?;
            match self.background {
                Some(background) => writeln!(f, "background: {background}")?,
                None => writeln!(f, "background: none")?,
            }
            let names: Vec<String> =
                self.attributes.iter().map(ToString::to_string).collect();
            write!(f, "attributes: [{}]", names.join(", "))
        }
    }

    impl StyleDescriptor {
        #[must_use]
        pub fn describe(&self) -> StyleDescription {
            StyleDescription {
                foreground: ColorDescription::from_index(self.foreground),
                background: self.background.map(ColorDescription::from_index),
                attributes: self.attributes.iter().collect(),
            }
        }
    }
}
