//! # Attribute Bags
//!
//! Dynamic key/value storage meant to be embedded in host types.
//!
//! - **Storage**: [`AttributeStore`] keeps one slot per (normalized) key and
//!   remembers the spelling that created it.
//! - **Locking**: keys can be locked, even before they exist.
//! - **Ambiguity**: with normalization on, `fooBar` and `foo_bar` share a
//!   slot, so writing through the second spelling is an error.
//! - **Strictness**: a strict store fails on missing reads; a lenient one
//!   returns `None`.
//! - **Capability**: hosts implement [`AttributeAware`] by handing out their
//!   store.
//!
//! ## Usage
//!
//! ```
//! use attrbag::{AttributeStore, BagConfig};
//!
//! let mut store = AttributeStore::with_config(&BagConfig::normalized());
//! store.set("fooBar", 1).unwrap();
//! store.lock("foo_bar");
//! assert!(store.set("fooBar", 2).unwrap_err().is_locked());
//! ```

mod accessors;
mod aware;
pub mod magic;
mod store;

pub use aware::AttributeAware;
pub use magic::{Dispatch, Magic, MagicCall};
#[cfg(any(test, feature = "test_utils"))]
pub use store::fixtures;
pub use store::{AttributeStore, DynamicAttributes};
