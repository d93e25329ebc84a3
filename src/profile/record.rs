//! Profile record

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user profile
///
/// The name is the primary key and the vertex key in the friendship graph,
/// so it cannot change after creation. `friends` mirrors the profile's
/// direct graph neighbors and is maintained by the network manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    name: String,
    pub location: String,
    pub relationship_status: String,
    pub age: u32,
    pub occupation: String,
    pub astrological_sign: String,
    /// Free-text status line
    pub status: String,
    /// Picture reference (path or URL) as given by the import source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default)]
    friends: Vec<String>,
}

impl Profile {
    /// Create a profile with empty attributes
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: String::new(),
            relationship_status: String::new(),
            age: 0,
            occupation: String::new(),
            astrological_sign: String::new(),
            status: String::new(),
            picture: None,
            friends: Vec::new(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_relationship_status(mut self, relationship_status: impl Into<String>) -> Self {
        self.relationship_status = relationship_status.into();
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn with_occupation(mut self, occupation: impl Into<String>) -> Self {
        self.occupation = occupation.into();
        self
    }

    pub fn with_astrological_sign(mut self, sign: impl Into<String>) -> Self {
        self.astrological_sign = sign.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_picture(mut self, picture: impl Into<String>) -> Self {
        self.picture = Some(picture.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Cached friend names, in the order friendships were made
    pub fn friends(&self) -> &[String] {
        &self.friends
    }

    pub fn has_friend(&self, name: &str) -> bool {
        self.friends.iter().any(|f| f == name)
    }

    /// Append `name` unless already present.
    pub(crate) fn add_friend(&mut self, name: &str) {
        if !self.has_friend(name) {
            self.friends.push(name.to_string());
        }
    }

    pub(crate) fn remove_friend(&mut self, name: &str) {
        self.friends.retain(|f| f != name);
    }

    pub(crate) fn clear_friends(&mut self) {
        self.friends.clear();
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Location: {}", self.location)?;
        writeln!(f, "Relationship Status: {}", self.relationship_status)?;
        writeln!(f, "Age: {}", self.age)?;
        writeln!(f, "Occupation: {}", self.occupation)?;
        writeln!(f, "Astrological Sign: {}", self.astrological_sign)?;
        writeln!(f, "Status: {}", self.status)?;
        if let Some(picture) = &self.picture {
            writeln!(f, "Picture: {}", picture)?;
        }
        if self.friends.is_empty() {
            write!(f, "Friends: None")
        } else {
            write!(f, "Friends: {}", self.friends.join(", "))
        }
    }
}
