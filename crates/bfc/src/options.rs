use core::num::{NonZeroU8, NonZeroUsize};

/// Default number of cells in the emitted program's tape.
pub const DEFAULT_TAPE_SIZE: NonZeroUsize = NonZeroUsize::MIN.saturating_add(29_999);

/// Configuration options for the translator.
///
/// These options control the layout of the emitted C program and how the
/// translator treats programs whose loops do not pair up.
///
/// # Examples
///
/// ```rust
/// use bfc::{BracketPolicy, Indent, TranslatorOptions};
///
/// let options = TranslatorOptions {
///     indent: Indent::spaces(4),
///     brackets: BracketPolicy::Permissive,
///     ..Default::default()
/// };
/// assert_eq!(options.tape_size.get(), 30_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct TranslatorOptions {
    /// Indentation unit for each nesting level.
    ///
    /// # Default
    ///
    /// [`Indent::Tabs`]
    pub indent: Indent,

    /// Number of cells declared for the program's tape.
    ///
    /// Pointer movement is not bounds checked in the emitted code, so programs
    /// that walk past either end of the tape have undefined behavior in C.
    ///
    /// # Default
    ///
    /// 30000
    pub tape_size: NonZeroUsize,

    /// What `,` stores when standard input is exhausted.
    ///
    /// # Default
    ///
    /// [`EofBehavior::Unchanged`]
    pub eof: EofBehavior,

    /// Whether unbalanced loops are rejected before anything is written.
    ///
    /// # Default
    ///
    /// [`BracketPolicy::Checked`]
    pub brackets: BracketPolicy,
}

impl Default for TranslatorOptions {
    fn default() -> Self {
        Self {
            indent: Indent::default(),
            tape_size: DEFAULT_TAPE_SIZE,
            eof: EofBehavior::default(),
            brackets: BracketPolicy::default(),
        }
    }
}

/// The whitespace written once per nesting level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Indent {
    /// One horizontal tab per level.
    #[default]
    Tabs,
    /// The given number of spaces per level.
    Spaces(NonZeroU8),
}

impl Indent {
    /// `width` spaces per level, or [`Indent::Tabs`] when `width` is zero.
    #[must_use]
    pub const fn spaces(width: u8) -> Self {
        match NonZeroU8::new(width) {
            Some(width) => Self::Spaces(width),
            None => Self::Tabs,
        }
    }
}

/// Behavior of the input command once `getchar()` reports end of file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum EofBehavior {
    /// Leave the current cell as it was.
    #[default]
    Unchanged,
    /// Store zero in the current cell.
    Zero,
    /// Store `EOF` truncated to a byte (255).
    Max,
}

/// How the translator deals with `[` and `]` that do not pair up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum BracketPolicy {
    /// Scan the program before emitting and fail with a
    /// [`StructureError`](crate::StructureError) if any loop is unbalanced.
    #[default]
    Checked,
    /// Emit whatever the program says. An unclosed `[` leaves the generated
    /// code with unbalanced braces; a stray `]` closes a brace at the outermost
    /// level without letting the nesting depth go negative.
    Permissive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_layout() {
        let options = TranslatorOptions::default();
        assert_eq!(options.indent, Indent::Tabs);
        assert_eq!(options.tape_size.get(), 30_000);
        assert_eq!(options.eof, EofBehavior::Unchanged);
        assert_eq!(options.brackets, BracketPolicy::Checked);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_config_fills_in_defaults() {
        let options: TranslatorOptions =
            serde_json::from_str(r#"{"indent":{"spaces":2},"eof":"zero"}"#).unwrap();
        assert_eq!(
            options,
            TranslatorOptions {
                indent: Indent::spaces(2),
                eof: EofBehavior::Zero,
                ..Default::default()
            }
        );
    }

    #[test]
    fn zero_width_spaces_fall_back_to_tabs() {
        assert_eq!(Indent::spaces(0), Indent::Tabs);
        assert!(matches!(Indent::spaces(3), Indent::Spaces(w) if w.get() == 3));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn zero_width_indent_is_rejected() {
        let err = serde_json::from_str::<TranslatorOptions>(r#"{"indent":{"spaces":0}}"#);
        assert!(err.is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn zero_tape_is_rejected() {
        let err = serde_json::from_str::<TranslatorOptions>(r#"{"tape-size":0}"#);
        assert!(err.is_err());
    }
}
