//! Progression rules: rewards, storage key and tracked content ids

use serde::{Deserialize, Serialize};

/// Progression settings
///
/// `sections` and `items` are the full lists the "visit everything"
/// achievements check against. They describe the page content, so they live
/// here instead of in the achievement catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressionSettings {
    /// Key of the persisted record in the key-value store
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// XP for the first visit of a section
    #[serde(default = "default_section_xp")]
    pub section_xp: u32,

    /// XP for the first examination of an item
    #[serde(default = "default_item_xp")]
    pub item_xp: u32,

    /// XP for every social link click
    #[serde(default = "default_social_link_xp")]
    pub social_link_xp: u32,

    /// XP for every project link followed
    #[serde(default = "default_project_link_xp")]
    pub project_link_xp: u32,

    /// XP for typing the classic secret word
    #[serde(default = "default_secret_word_xp")]
    pub secret_word_xp: u32,

    /// Every section of the page, in scroll order
    #[serde(default = "default_sections")]
    pub sections: Vec<String>,

    /// Every examinable item
    #[serde(default = "default_items")]
    pub items: Vec<String>,
}

fn default_storage_key() -> String {
    "pixelfolio_state".to_string()
}

fn default_section_xp() -> u32 {
    50
}

fn default_item_xp() -> u32 {
    25
}

fn default_social_link_xp() -> u32 {
    100
}

fn default_project_link_xp() -> u32 {
    100
}

fn default_secret_word_xp() -> u32 {
    50
}

fn default_sections() -> Vec<String> {
    ["about", "projects", "experience", "contact"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_items() -> Vec<String> {
    ["bannerlord", "gpt-rpg", "fire-furious", "portfolio"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for ProgressionSettings {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            section_xp: default_section_xp(),
            item_xp: default_item_xp(),
            social_link_xp: default_social_link_xp(),
            project_link_xp: default_project_link_xp(),
            secret_word_xp: default_secret_word_xp(),
            sections: default_sections(),
            items: default_items(),
        }
    }
}
