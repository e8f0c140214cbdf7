// src/core/profile_store.rs
//! Process-wide profile, loaded once at startup and read-only afterwards

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::types::Profile;

#[derive(Debug, Clone)]
pub struct ProfileStore {
    profile: Profile,
    serialized: String,
}

impl ProfileStore {
    /// Load the profile document from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile: {}", path.display()))?;

        let store = Self::from_json(&content)
            .with_context(|| format!("Failed to parse profile: {}", path.display()))?;

        info!(
            "Loaded profile for {} ({} skills, {} projects, {} experiences)",
            store.profile.name,
            store.profile.skills.len(),
            store.profile.projects.len(),
            store.profile.experience.len()
        );

        Ok(store)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let profile: Profile =
            serde_json::from_str(content).context("Invalid profile JSON document")?;
        Self::new(profile)
    }

    pub fn new(profile: Profile) -> Result<Self> {
        // Serialized once: the profile never changes after startup
        let serialized =
            serde_json::to_string(&profile).context("Failed to serialize profile")?;
        Ok(Self {
            profile,
            serialized,
        })
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn serialized(&self) -> &str {
        &self.serialized
    }

    /// Profile owner's name, None when the document leaves it blank
    pub fn owner_name(&self) -> Option<&str> {
        Some(self.profile.name.trim()).filter(|name| !name.is_empty())
    }

    /// Name used when the assistant refers to the profile owner
    pub fn display_name(&self) -> &str {
        self.owner_name().unwrap_or("the portfolio owner")
    }
}
