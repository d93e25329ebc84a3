//! ProfileStore: insertion-ordered profile collection

use super::record::Profile;
use std::collections::HashMap;

/// Keyed profile collection that remembers insertion order
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    profiles: HashMap<String, Profile>,
    order: Vec<String>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a profile under its name.
    ///
    /// Returns `false` and leaves the store untouched if the name is taken.
    pub fn add(&mut self, profile: Profile) -> bool {
        if self.profiles.contains_key(profile.name()) {
            return false;
        }
        self.order.push(profile.name().to_string());
        self.profiles.insert(profile.name().to_string(), profile);
        true
    }

    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Profile> {
        self.profiles.get_mut(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Profile> {
        let removed = self.profiles.remove(name)?;
        self.order.retain(|k| k != name);
        Some(removed)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    /// Profile names in insertion order
    pub fn keys(&self) -> &[String] {
        &self.order
    }

    /// Profiles in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.order.iter().filter_map(|k| self.profiles.get(k))
    }

    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut Profile> {
        self.profiles.values_mut()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
