//! Name-based forwarding to an attribute store.
//!
//! Some callers only know attribute names at runtime, as method-style
//! strings (`setTitle`, `getTitle`) or bare property names. [`Magic`] maps
//! those onto the regular store API. It has to be constructed explicitly
//! around a store; nothing is dispatched implicitly.
//!
//! For names known at compile time prefer [`attribute_accessors!`](crate::attribute_accessors),
//! which generates typed methods instead.

use super::AttributeStore;
use crate::error::Result;

/// A parsed accessor call.
#[derive(Debug, Clone, PartialEq)]
pub enum MagicCall<V> {
    Set { key: String, value: V },
    Get { key: String },
}

impl<V> MagicCall<V> {
    /// Parse `setFoo` with exactly one argument or `getFoo` with none.
    ///
    /// The first character after the prefix is lowercased and the rest is
    /// kept, so `setFooBar` targets `fooBar`. Anything else, including a
    /// bare `set`/`get`, yields `None`.
    pub fn parse(method: &str, mut args: Vec<V>) -> Option<Self> {
        if let Some(name) = method.strip_prefix("set") {
            if args.len() == 1 && !name.is_empty() {
                let value = args.pop()?;
                return Some(MagicCall::Set {
                    key: lower_first(name),
                    value,
                });
            }
        } else if let Some(name) = method.strip_prefix("get") {
            if args.is_empty() && !name.is_empty() {
                return Some(MagicCall::Get {
                    key: lower_first(name),
                });
            }
        }
        None
    }
}

fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Result of [`Magic::call`].
#[derive(Debug, PartialEq)]
pub enum Dispatch<'a, V> {
    /// A setter ran.
    Stored,
    /// A getter ran; `None` only for lenient stores.
    Value(Option<&'a V>),
    /// The method name or arity did not match an accessor.
    Unhandled,
}

/// Explicit, opt-in dynamic accessor over an [`AttributeStore`].
pub struct Magic<'s, V> {
    store: &'s mut AttributeStore<V>,
}

impl<'s, V> Magic<'s, V> {
    pub fn new(store: &'s mut AttributeStore<V>) -> Self {
        Self { store }
    }

    /// Forward a method-style call such as `setTitle(v)` or `getTitle()`.
    pub fn call(&mut self, method: &str, args: Vec<V>) -> Result<Dispatch<'_, V>> {
        match MagicCall::parse(method, args) {
            Some(MagicCall::Set { key, value }) => {
                self.store.set(&key, value)?;
                Ok(Dispatch::Stored)
            }
            Some(MagicCall::Get { key }) => Ok(Dispatch::Value(self.store.get(&key)?)),
            None => Ok(Dispatch::Unhandled),
        }
    }

    /// Property-style read (`obj.title`).
    pub fn property(&self, name: &str) -> Result<Option<&V>> {
        self.store.get(name)
    }

    /// Property-style write (`obj.title = v`).
    pub fn set_property(&mut self, name: &str, value: V) -> Result<()> {
        self.store.set(name, value)?;
        Ok(())
    }
}

impl<V> AttributeStore<V> {
    /// Wrap this store for name-based access.
    pub fn magic(&mut self) -> Magic<'_, V> {
        Magic::new(self)
    }
}
