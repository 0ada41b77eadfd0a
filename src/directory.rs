//! Directory cache — snapshot of workspace users and channels.
//!
//! Loaded once per connection and shared read-only afterwards.

use serde::{Deserialize, Serialize};

/// A user or channel known to the workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub id: String,
    pub name: String,
}

impl DirectoryEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Users and channels of the workspace, as of the last connect.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    users: Vec<DirectoryEntry>,
    channels: Vec<DirectoryEntry>,
}

impl Directory {
    pub fn new(users: Vec<DirectoryEntry>, channels: Vec<DirectoryEntry>) -> Self {
        Self { users, channels }
    }

    pub fn users(&self) -> &[DirectoryEntry] {
        &self.users
    }

    pub fn channels(&self) -> &[DirectoryEntry] {
        &self.channels
    }

    pub fn user_by_id(&self, id: &str) -> Option<&DirectoryEntry> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn user_by_name(&self, name: &str) -> Option<&DirectoryEntry> {
        self.users.iter().find(|u| u.name == name)
    }

    pub fn channel_by_id(&self, id: &str) -> Option<&DirectoryEntry> {
        self.channels.iter().find(|c| c.id == id)
    }

    pub fn channel_by_name(&self, name: &str) -> Option<&DirectoryEntry> {
        self.channels.iter().find(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Directory {
        Directory::new(
            vec![
                DirectoryEntry::new("U1", "janedoe"),
                DirectoryEntry::new("U2", "bob"),
            ],
            vec![
                DirectoryEntry::new("C1", "general"),
                DirectoryEntry::new("G7", "front-desk"),
            ],
        )
    }

    #[test]
    fn lookups_by_id_and_name() {
        let dir = sample();
        assert_eq!(dir.user_by_id("U2").map(|u| u.name.as_str()), Some("bob"));
        assert_eq!(dir.user_by_name("janedoe").map(|u| u.id.as_str()), Some("U1"));
        assert_eq!(dir.channel_by_id("G7").map(|c| c.name.as_str()), Some("front-desk"));
        assert_eq!(dir.channel_by_name("general").map(|c| c.id.as_str()), Some("C1"));
    }

    #[test]
    fn names_are_matched_exactly() {
        let dir = sample();
        assert!(dir.user_by_name("Bob").is_none());
        assert!(dir.user_by_name("").is_none());
        assert!(dir.channel_by_id("c1").is_none());
    }

    #[test]
    fn users_and_channels_are_separate_sets() {
        let dir = sample();
        assert!(dir.user_by_id("C1").is_none());
        assert!(dir.channel_by_id("U1").is_none());
        assert_eq!(dir.users().len(), 2);
        assert_eq!(dir.channels().len(), 2);
    }
}
