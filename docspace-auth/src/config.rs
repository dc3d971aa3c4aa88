// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

/// Team-wide policy switches consulted while deriving abilities.
///
/// Every switch defaults to `false`: a team loaded without settings grants nothing that depends
/// on them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamSettings {
    /// Collections and documents may be shared.
    pub(crate) sharing: bool,

    /// Members (not only admins) may create collections.
    pub(crate) member_collection_create: bool,

    /// Documents may be downloaded by team members.
    pub(crate) document_downloads: bool,

    /// Guests may download documents shared with them.
    pub(crate) guest_downloads: bool,
}

impl TeamSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sharing(mut self, enabled: bool) -> Self {
        self.sharing = enabled;
        self
    }

    pub fn with_member_collection_create(mut self, enabled: bool) -> Self {
        self.member_collection_create = enabled;
        self
    }

    pub fn with_document_downloads(mut self, enabled: bool) -> Self {
        self.document_downloads = enabled;
        self
    }

    pub fn with_guest_downloads(mut self, enabled: bool) -> Self {
        self.guest_downloads = enabled;
        self
    }

    pub fn sharing(&self) -> bool {
        self.sharing
    }

    pub fn member_collection_create(&self) -> bool {
        self.member_collection_create
    }

    pub fn document_downloads(&self) -> bool {
        self.document_downloads
    }

    pub fn guest_downloads(&self) -> bool {
        self.guest_downloads
    }
}

#[cfg(test)]
mod tests {
    use super::TeamSettings;

    #[test]
    fn missing_fields_are_disabled() {
        let settings: TeamSettings = serde_json::from_str(r#"{ "sharing": true }"#).unwrap();
        assert!(settings.sharing());
        assert!(!settings.member_collection_create());
        assert!(!settings.document_downloads());
        assert!(!settings.guest_downloads());

        let settings: TeamSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, TeamSettings::default());
    }

    #[test]
    fn camel_case_fields() {
        let settings = TeamSettings::new()
            .with_member_collection_create(true)
            .with_guest_downloads(true);
        let json = serde_json::to_value(&settings).unwrap();

        assert_eq!(json["memberCollectionCreate"], true);
        assert_eq!(json["guestDownloads"], true);
        assert_eq!(json["documentDownloads"], false);
    }
}
