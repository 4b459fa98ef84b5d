//! # attrbag
//!
//! Reusable building blocks for giving host types dynamic attributes and
//! flags without inheritance. A host embeds a container as a field and
//! implements a capability trait by handing that field out:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Host type (your struct)                                 │
//! │  - implements AttributeAware / OptionAware               │
//! │  - optionally attribute_accessors!{...} for typed names  │
//! └──────────────────────────────────────────────────────────┘
//!                 │ has-a                 │ has-a
//!                 ▼                       ▼
//! ┌───────────────────────────┐ ┌───────────────────────────┐
//! │  AttributeStore<V>        │ │  OptionSet                │
//! │  slots, locks, strictness │ │  active / removed records │
//! └───────────────────────────┘ └───────────────────────────┘
//!                 │                       │
//!                 └──────────┬────────────┘
//!                            ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  normalizer: KeyMode + normalize()                       │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Normalization
//!
//! With [`BagConfig::normalize`] on, keys are compared in canonical form
//! (`fooBar`, `FOOBar` and `foo_bar` are all `foo_bar`). Containers still
//! report keys in the spelling the caller used. Since normalization merges
//! spellings, the attribute store refuses writes that reach an existing slot
//! through a different spelling.
//!
//! ## Errors
//!
//! Attribute operations return [`Result`]. [`Error::NotFound`],
//! [`Error::Locked`] and [`Error::Ambiguous`] are caller mistakes, not
//! transient failures; retrying will not help. Option sets have no error
//! path.
//!
//! ## Threading
//!
//! Containers are plain owned data with no interior locking. Share them
//! across threads the way you would share any other collection.
//!
//! ## Module Overview
//!
//! - [`normalizer`]: key folding and [`KeyMode`]
//! - [`attributes`]: [`AttributeStore`], [`AttributeAware`], name-based forwarding
//! - [`options`]: [`OptionSet`], [`OptionAware`], name validation
//! - [`config`]: [`BagConfig`] loading
//! - [`error`]: [`Error`] and [`Result`]

pub mod attributes;
pub mod config;
pub mod error;
pub mod normalizer;
pub mod options;

pub use attributes::{AttributeAware, AttributeStore, Dispatch, DynamicAttributes, Magic, MagicCall};
pub use config::BagConfig;
pub use error::{Error, Result};
pub use normalizer::{normalize, KeyMode};
pub use options::{OptionAware, OptionSet, OptionState};
