use super::OptionSet;

/// Capability granted to a host type that embeds an [`OptionSet`].
pub trait OptionAware {
    fn options(&self) -> &OptionSet;

    fn options_mut(&mut self) -> &mut OptionSet;

    fn add_option(&mut self, name: &str) -> &mut Self {
        self.options_mut().add(name);
        self
    }

    fn add_options<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.options_mut().add_all(names);
        self
    }

    fn remove_option(&mut self, name: &str) -> &mut Self {
        self.options_mut().remove(name);
        self
    }

    fn unset_option(&mut self, name: &str) -> &mut Self {
        self.options_mut().unset(name);
        self
    }

    fn has_option(&self, name: &str) -> bool {
        self.options().has(name)
    }

    fn clear_options(&mut self) -> &mut Self {
        self.options_mut().clear();
        self
    }

    fn active_options(&self) -> Vec<&str> {
        self.options().active_options()
    }

    fn removed_options(&self) -> Vec<&str> {
        self.options().removed_options()
    }
}
