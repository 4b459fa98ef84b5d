//! Option name validation.
//!
//! An option name is valid when it has at least one non-whitespace
//! character. Invalid names are never stored; [`OptionSet`](super::OptionSet)
//! drops them without failing.

/// Validates an option name.
///
/// # Examples
/// ```
/// use attrbag::options::validation::{validate_option_name, OptionNameError};
///
/// assert!(validate_option_name("verbose").is_ok());
/// assert!(validate_option_name(" dry-run ").is_ok());
///
/// assert_eq!(validate_option_name(""), Err(OptionNameError::Empty));
/// assert_eq!(validate_option_name("   "), Err(OptionNameError::Blank));
/// ```
pub fn validate_option_name(name: &str) -> Result<(), OptionNameError> {
    if name.is_empty() {
        return Err(OptionNameError::Empty);
    }
    if name.trim().is_empty() {
        return Err(OptionNameError::Blank);
    }
    Ok(())
}

pub fn is_valid_option_name(name: &str) -> bool {
    validate_option_name(name).is_ok()
}

/// Reason an option name was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionNameError {
    /// Option name is empty
    Empty,
    /// Option name contains only whitespace
    Blank,
}

impl std::fmt::Display for OptionNameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionNameError::Empty => write!(f, "option name cannot be empty"),
            OptionNameError::Blank => write!(f, "option name cannot be only whitespace"),
        }
    }
}

impl std::error::Error for OptionNameError {}
