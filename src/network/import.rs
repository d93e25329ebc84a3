//! Bulk profile ingestion from CSV
//!
//! Expected header (any column order, extra columns ignored, missing
//! columns and short rows read as empty):
//!
//! ```text
//! name,status,picture,location,relationship_status,age,occupation,astrological_sign,friends
//! ```
//!
//! `friends` is a `|`-separated list of profile names. Friendships are made
//! in a second pass so a row may name friends defined further down.

use super::error::NetworkResult;
use super::manager::NetworkManager;
use crate::profile::Profile;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Separator between names in the `friends` column
pub const FRIEND_SEPARATOR: char = '|';

/// One CSV row; every column is optional
#[derive(Debug, Clone, Default)]
struct ProfileRow {
    name: String,
    status: String,
    picture: String,
    location: String,
    relationship_status: String,
    age: String,
    occupation: String,
    astrological_sign: String,
    friends: String,
}

/// Header name to column position
struct Columns(HashMap<String, usize>);

impl Columns {
    fn new(headers: &StringRecord) -> Self {
        Self(
            headers
                .iter()
                .enumerate()
                .map(|(i, h)| (h.to_string(), i))
                .collect(),
        )
    }

    /// Missing columns and short rows read as empty
    fn field<'r>(&self, record: &'r StringRecord, name: &str) -> &'r str {
        self.0
            .get(name)
            .and_then(|&i| record.get(i))
            .unwrap_or("")
    }
}

impl ProfileRow {
    fn from_record(columns: &Columns, record: &StringRecord) -> Self {
        let field = |name: &str| columns.field(record, name).to_string();
        Self {
            name: field("name"),
            status: field("status"),
            picture: field("picture"),
            location: field("location"),
            relationship_status: field("relationship_status"),
            age: field("age"),
            occupation: field("occupation"),
            astrological_sign: field("astrological_sign"),
            friends: field("friends"),
        }
    }

    /// Blank or non-integer ages become 0
    fn age(&self) -> u32 {
        self.age.trim().parse().unwrap_or(0)
    }

    fn to_profile(&self) -> Profile {
        let mut profile = Profile::new(self.name.trim())
            .with_status(self.status.trim())
            .with_location(self.location.trim())
            .with_relationship_status(self.relationship_status.trim())
            .with_age(self.age())
            .with_occupation(self.occupation.trim())
            .with_astrological_sign(self.astrological_sign.trim());
        let picture = self.picture.trim();
        if !picture.is_empty() {
            profile = profile.with_picture(picture);
        }
        profile
    }

    fn friend_names(&self) -> impl Iterator<Item = &str> {
        self.friends
            .split(FRIEND_SEPARATOR)
            .map(str::trim)
            .filter(|f| !f.is_empty())
    }
}

/// What a CSV import did
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Data rows read (header excluded)
    pub rows_read: usize,
    /// Rows skipped for a blank name
    pub rows_skipped: usize,
    /// New profiles created
    pub profiles_created: usize,
    /// Rows naming a profile that already existed
    pub profiles_existing: usize,
    /// Friend references that resulted in a connection
    pub connections_made: usize,
    /// Friend references to names no row defined
    pub unknown_friends: usize,
}

impl NetworkManager {
    /// Import profiles and friendships from a CSV file.
    ///
    /// Fails only if the file cannot be opened or a record cannot be read.
    /// Import is not transactional: profiles created before a read error
    /// remain in the network.
    pub fn read_profiles_from_csv(&mut self, path: impl AsRef<Path>) -> NetworkResult<ImportSummary> {
        let path = path.as_ref();
        let file = File::open(path)?;
        tracing::debug!(path = %path.display(), "importing profiles");
        self.read_profiles_from_reader(file)
    }

    /// Import profiles and friendships from any CSV source.
    pub fn read_profiles_from_reader<R: Read>(&mut self, source: R) -> NetworkResult<ImportSummary> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::Headers)
            .from_reader(source);

        let columns = Columns::new(reader.headers()?);
        let mut summary = ImportSummary::default();
        let mut rows: Vec<ProfileRow> = Vec::new();

        // Pass 1: profiles
        for result in reader.records() {
            let row = ProfileRow::from_record(&columns, &result?);
            summary.rows_read += 1;

            let name = row.name.trim();
            if name.is_empty() {
                summary.rows_skipped += 1;
                continue;
            }

            if self.get_profile(name).is_some() {
                tracing::debug!(name, "profile already present, keeping existing record");
                summary.profiles_existing += 1;
            } else if self.add_profile(row.to_profile()) {
                summary.profiles_created += 1;
            }
            rows.push(row);
        }

        // Pass 2: friendships, now that every row's profile exists
        for row in &rows {
            let name = row.name.trim();
            for friend in row.friend_names() {
                if self.get_profile(friend).is_none() {
                    tracing::debug!(name, friend, "skipping unknown friend");
                    summary.unknown_friends += 1;
                    continue;
                }
                if self.connect_profiles(name, friend, 0) {
                    summary.connections_made += 1;
                }
            }
        }

        tracing::info!(
            rows = summary.rows_read,
            created = summary.profiles_created,
            connections = summary.connections_made,
            unknown_friends = summary.unknown_friends,
            "profile import finished"
        );
        Ok(summary)
    }
}
