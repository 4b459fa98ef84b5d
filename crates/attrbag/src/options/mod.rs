//! # Option Sets
//!
//! Named boolean flags with three observable states per name: never added,
//! active, or removed (a tombstone). Names go through the same
//! [`KeyMode`](crate::KeyMode) as attribute keys, so `forUpdate` and
//! `for_update` are the same option when normalization is on.
//!
//! Unlike attributes, options never fail: invalid names (see [`validation`],
//! or a rule installed with [`OptionSet::with_validator`]) are dropped.

mod aware;
mod set;
pub mod validation;

pub use aware::OptionAware;
pub use set::{OptionSet, OptionState};
pub use validation::{is_valid_option_name, validate_option_name, OptionNameError};
