/// Generate typed accessors for a fixed set of attribute names.
///
/// The host must implement [`AttributeAware`](crate::AttributeAware). Each
/// entry `getter / setter => "key"` produces
///
/// - `fn getter(&self) -> Result<Option<&Value>>`
/// - `fn setter(&mut self, value: Value) -> Result<&mut Self>`
///
/// both forwarding to the attribute store under `"key"`.
///
/// ```
/// use attrbag::{attribute_accessors, AttributeAware, AttributeStore};
///
/// #[derive(Default)]
/// struct Page {
///     attrs: AttributeStore<String>,
/// }
///
/// impl AttributeAware for Page {
///     type Value = String;
///     fn attributes(&self) -> &AttributeStore<String> { &self.attrs }
///     fn attributes_mut(&mut self) -> &mut AttributeStore<String> { &mut self.attrs }
/// }
///
/// attribute_accessors!(Page {
///     title / set_title => "title",
/// });
///
/// let mut page = Page::default();
/// page.set_title("Home".to_string()).unwrap();
/// assert_eq!(page.title().unwrap().map(String::as_str), Some("Home"));
/// ```
#[macro_export]
macro_rules! attribute_accessors {
    ($host:ty { $($getter:ident / $setter:ident => $key:literal),* $(,)? }) => {
        impl $host {
            $(
                #[doc = concat!("Read the `", $key, "` attribute.")]
                pub fn $getter(
                    &self,
                ) -> $crate::Result<Option<&<$host as $crate::AttributeAware>::Value>> {
                    $crate::AttributeAware::get_attribute(self, $key)
                }

                #[doc = concat!("Write the `", $key, "` attribute.")]
                pub fn $setter(
                    &mut self,
                    value: <$host as $crate::AttributeAware>::Value,
                ) -> $crate::Result<&mut Self> {
                    $crate::AttributeAware::set_attribute(self, $key, value)
                }
            )*
        }
    };
}
