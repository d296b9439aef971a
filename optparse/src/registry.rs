//! Ordered arena of option descriptors.
//!
//! Lookups are linear and return the first match. Plain registration does not
//! check names, so a later option reusing a short letter or long name is
//! shadowed by the earlier one; [`Registry::try_push`] refuses such options.

use crate::error::{Error, Result};
use crate::opt::Descriptor;

#[derive(Debug, Default)]
pub(crate) struct Registry {
    slots: Vec<Descriptor>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Registry { slots: Vec::new() }
    }

    pub(crate) fn push(&mut self, descriptor: Descriptor) -> usize {
        if let Some(shadow) = self.conflict(descriptor.long_name(), descriptor.short_name()) {
            tracing::warn!(option = descriptor.long_name(), shadowed_by = %shadow,
                "option registered twice; first registration wins");
        }
        self.slots.push(descriptor);
        self.slots.len() - 1
    }

    pub(crate) fn try_push(&mut self, descriptor: Descriptor) -> Result<usize> {
        if descriptor.long_name().is_empty() {
            return Err(Error::Definition("long name must not be empty".to_string()));
        }
        if descriptor.long_name().contains('=') {
            return Err(Error::Definition(format!(
                "long name {} contains '='",
                descriptor.long_name()
            )));
        }
        if let Some(c) = descriptor.short_name() {
            if c == '-' || c == '=' {
                return Err(Error::Definition(format!("'{}' cannot be a short name", c)));
            }
        }
        if let Some(shadow) = self.conflict(descriptor.long_name(), descriptor.short_name()) {
            return Err(Error::Duplicate(shadow));
        }
        Ok(self.push(descriptor))
    }

    /// Describe the first existing option a new one would collide with.
    fn conflict(&self, long_name: &str, short_name: Option<char>) -> Option<String> {
        if self.find_by_long(long_name).is_some() {
            return Some(format!("--{}", long_name));
        }
        let c = short_name?;
        self.find_by_short(c).map(|_| format!("-{}", c))
    }

    pub(crate) fn find_by_short(&self, c: char) -> Option<usize> {
        self.slots.iter().position(|d| d.short_name() == Some(c))
    }

    pub(crate) fn find_by_long(&self, name: &str) -> Option<usize> {
        self.slots.iter().position(|d| d.long_name() == name)
    }

    pub(crate) fn get(&self, index: usize) -> Option<&Descriptor> {
        self.slots.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Descriptor> {
        self.slots.get_mut(index)
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Descriptor> {
        self.slots.iter()
    }
}
