//! Key normalization.
//!
//! Attribute keys and option names are compared by a canonical form so that
//! spellings differing only by case or camelCase word boundaries collide:
//!
//! | Input | Normalized |
//! |-------|------------|
//! | `fooBar` | `foo_bar` |
//! | `FOOBar` | `foo_bar` |
//! | `foo_BAR` | `foo_bar` |
//! | `0Foo` | `0_foo` |
//! | `__FooBar__` | `__foo_bar__` |
//!
//! Normalization is opt-in per container through [`KeyMode`].

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use unicode_general_category::{get_general_category, GeneralCategory};

/// How a container turns caller-supplied keys into storage keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyMode {
    /// Keys are stored exactly as given.
    #[default]
    Verbatim,
    /// Keys are folded through [`normalize`] before storage and lookup.
    Normalized,
}

impl KeyMode {
    /// Resolve `key` to its storage form under this mode.
    ///
    /// Borrows in verbatim mode, allocates only when normalizing.
    pub fn resolve<'a>(&self, key: &'a str) -> Cow<'a, str> {
        match self {
            KeyMode::Verbatim => Cow::Borrowed(key),
            KeyMode::Normalized => Cow::Owned(normalize(key)),
        }
    }

    pub fn is_normalized(&self) -> bool {
        matches!(self, KeyMode::Normalized)
    }
}

/// Normalize a key to its canonical lowercase, underscore-separated form.
///
/// The transform is total and idempotent. Surrounding whitespace is
/// trimmed, an underscore is inserted at each word boundary, then the result
/// is lowercased. A boundary sits before an uppercase letter (Lu) that
/// either follows a lowercase letter (Ll) or decimal digit (Nd) (`fooBar`,
/// `0Foo`), or ends an uppercase run and starts a capitalized word
/// (`FOOBar`).
///
/// # Examples
/// ```
/// use attrbag::normalizer::normalize;
///
/// assert_eq!(normalize("fooBar"), "foo_bar");
/// assert_eq!(normalize("FOOBar"), "foo_bar");
/// assert_eq!(normalize(" foo "), "foo");
/// assert_eq!(normalize("foo1"), "foo1");
/// ```
pub fn normalize(input: &str) -> String {
    let chars: Vec<char> = input.trim().chars().collect();
    let mut split = String::with_capacity(chars.len() + 4);

    for (i, &ch) in chars.iter().enumerate() {
        if i > 0 && is_word_boundary(chars[i - 1], ch, chars.get(i + 1).copied()) {
            split.push('_');
        }
        split.push(ch);
    }

    split.to_lowercase()
}

fn is_word_boundary(prev: char, ch: char, next: Option<char>) -> bool {
    if !is_foldable_upper(ch) {
        return false;
    }
    if is_lower_letter(prev) || is_decimal_digit(prev) {
        return true;
    }
    is_foldable_upper(prev) && next.is_some_and(is_lower_letter)
}

// Uppercase letters without a lowercase mapping (e.g. `ℍ`) survive the final
// fold, so they must not open a boundary or the output would re-split.
fn is_foldable_upper(ch: char) -> bool {
    get_general_category(ch) == GeneralCategory::UppercaseLetter
        && ch.to_lowercase().ne(std::iter::once(ch))
}

// Category Ll only; `ª` or `ⁿ` are lowercase by property but not letters of
// that category.
fn is_lower_letter(ch: char) -> bool {
    get_general_category(ch) == GeneralCategory::LowercaseLetter
}

// Category Nd only; `½` and `²` are numeric but not decimal digits.
fn is_decimal_digit(ch: char) -> bool {
    get_general_category(ch) == GeneralCategory::DecimalNumber
}
