//! Status display state: named UI regions holding a message and category.

use std::collections::HashMap;

use shared::domain::StatusCategory;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub message: String,
    pub category: StatusCategory,
}

/// Last-write-wins per region, single region per update, no persistence.
#[derive(Debug, Default)]
pub struct StatusBoard {
    regions: HashMap<String, StatusMessage>,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, region: &str, message: impl Into<String>, category: StatusCategory) {
        self.regions.insert(
            region.to_string(),
            StatusMessage {
                message: message.into(),
                category,
            },
        );
    }

    pub fn get(&self, region: &str) -> Option<&StatusMessage> {
        self.regions.get(region)
    }
}
