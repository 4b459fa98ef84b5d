use super::AttributeStore;
use crate::error::Result;

/// Capability granted to a host type that embeds an [`AttributeStore`].
///
/// Implementors only provide access to the store; every attribute operation
/// is a provided method delegating to it.
///
/// ```
/// use attrbag::{AttributeAware, AttributeStore};
///
/// #[derive(Default)]
/// struct Widget {
///     attrs: AttributeStore<String>,
/// }
///
/// impl AttributeAware for Widget {
///     type Value = String;
///
///     fn attributes(&self) -> &AttributeStore<String> {
///         &self.attrs
///     }
///
///     fn attributes_mut(&mut self) -> &mut AttributeStore<String> {
///         &mut self.attrs
///     }
/// }
///
/// let mut widget = Widget::default();
/// widget.set_attribute("label", "OK".to_string()).unwrap();
/// assert!(widget.has_attribute("label"));
/// ```
pub trait AttributeAware {
    type Value;

    fn attributes(&self) -> &AttributeStore<Self::Value>;

    fn attributes_mut(&mut self) -> &mut AttributeStore<Self::Value>;

    fn set_attribute(&mut self, key: &str, value: Self::Value) -> Result<&mut Self> {
        self.attributes_mut().set(key, value)?;
        Ok(self)
    }

    fn has_attribute(&self, key: &str) -> bool {
        self.attributes().has(key)
    }

    /// See [`AttributeStore::get`]: strict hosts fail on a miss.
    fn get_attribute(&self, key: &str) -> Result<Option<&Self::Value>> {
        self.attributes().get(key)
    }

    fn get_attribute_or<'a>(&'a self, key: &str, default: &'a Self::Value) -> &'a Self::Value {
        self.attributes().get_or(key, default)
    }

    fn find_attribute(&self, key: &str) -> Option<&Self::Value> {
        self.attributes().find(key)
    }

    fn unset_attribute(&mut self, key: &str) -> &mut Self {
        self.attributes_mut().unset(key);
        self
    }

    fn lock_attribute(&mut self, key: &str) -> &mut Self {
        self.attributes_mut().lock(key);
        self
    }

    fn unlock_attribute(&mut self, key: &str) -> &mut Self {
        self.attributes_mut().unlock(key);
        self
    }

    fn attribute_list(&self) -> Vec<(&str, &Self::Value)> {
        self.attributes().list()
    }

    /// Whether a missing attribute read without a default is an error.
    ///
    /// Collaborators check this to decide whether to pass a default.
    fn is_strict(&self) -> bool {
        self.attributes().is_strict()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BagConfig;

    #[derive(Debug)]
    struct Host {
        attrs: AttributeStore<u32>,
    }

    impl AttributeAware for Host {
        type Value = u32;

        fn attributes(&self) -> &AttributeStore<u32> {
            &self.attrs
        }

        fn attributes_mut(&mut self) -> &mut AttributeStore<u32> {
            &mut self.attrs
        }
    }

    fn host(config: BagConfig) -> Host {
        Host {
            attrs: AttributeStore::with_config(&config),
        }
    }

    #[test]
    fn test_host_delegates_to_store() {
        let mut host = host(BagConfig::normalized());
        host.set_attribute("fooBar", 1)
            .unwrap()
            .set_attribute("baz", 2)
            .unwrap();

        assert!(host.has_attribute("foo_bar"));
        assert_eq!(host.get_attribute("FooBar").unwrap(), Some(&1));
        assert_eq!(host.attribute_list(), vec![("fooBar", &1), ("baz", &2)]);

        host.unset_attribute("fooBar");
        assert_eq!(host.find_attribute("fooBar"), None);
        assert_eq!(host.get_attribute_or("fooBar", &7), &7);
    }

    #[test]
    fn test_host_lock_unlock() {
        let mut host = host(BagConfig::default());
        host.lock_attribute("foo");
        assert!(host.set_attribute("foo", 1).unwrap_err().is_locked());
        host.unlock_attribute("foo").set_attribute("foo", 1).unwrap();
        assert_eq!(host.find_attribute("foo"), Some(&1));
    }

    #[test]
    fn test_strictness_follows_config() {
        let strict = host(BagConfig::default());
        assert!(strict.is_strict());
        assert!(strict.get_attribute("nope").unwrap_err().is_not_found());

        let lenient = host(BagConfig {
            strict: false,
            ..Default::default()
        });
        assert!(!lenient.is_strict());
        assert_eq!(lenient.get_attribute("nope").unwrap(), None);
    }
}
