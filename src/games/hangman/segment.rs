//! Splitting raw text into the units a player actually sees.
//!
//! Every unit is one Unicode scalar value. Characters outside the Basic
//! Multilingual Plane (most emoji) take two UTF-16 code units, but they are
//! still one unit here, and they are never guessable.

use std::{convert::Infallible, fmt, str::FromStr};

use unicode_general_category::{get_general_category, GeneralCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterUnit {
    ch: char,
}

impl LetterUnit {
    pub const fn new(ch: char) -> Self {
        Self { ch }
    }

    /// Number of UTF-16 code units this unit was made of.
    pub const fn width(self) -> usize {
        self.ch.len_utf16()
    }

    /// Only single-code-unit letters and digits can be guessed.
    pub fn is_guessable(self) -> bool {
        self.width() == 1 && is_letter_or_digit(self.ch)
    }

    /// The uppercase form used for matching, or `None` for decorative units.
    pub fn canonical(self) -> Option<char> {
        self.is_guessable().then(|| canonicalize(self.ch))
    }
}

impl fmt::Display for LetterUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ch)
    }
}

/// Uppercases `ch` when that gives exactly one character.
///
/// Letters like `ß` uppercase to more than one character; those keep their
/// own form so a guess always stays a single `char`.
pub fn canonicalize(ch: char) -> char {
    let mut upper = ch.to_uppercase();

    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

/// Any letter category, or a decimal digit. Other numbers (`²`, `Ⅻ`) and
/// combining marks are shown but never guessed.
fn is_letter_or_digit(ch: char) -> bool {
    use GeneralCategory::*;

    matches!(
        get_general_category(ch),
        UppercaseLetter
            | LowercaseLetter
            | TitlecaseLetter
            | ModifierLetter
            | OtherLetter
            | DecimalNumber
    )
}

pub fn segment(raw: &str) -> Vec<LetterUnit> {
    raw.chars().map(LetterUnit::new).collect()
}

/// A target word, segmented once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    raw: String,
    units: Vec<LetterUnit>,
}

impl Word {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let units = segment(&raw);

        Self { raw, units }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn units(&self) -> &[LetterUnit] {
        &self.units
    }

    pub fn guessable(&self) -> impl Iterator<Item = LetterUnit> + '_ {
        self.units.iter().copied().filter(|unit| unit.is_guessable())
    }

    pub fn contains(&self, canonical: char) -> bool {
        self.guessable()
            .any(|unit| unit.canonical() == Some(canonical))
    }
}

impl FromStr for Word {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
