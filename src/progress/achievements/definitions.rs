//! Achievement definitions and metadata
//!
//! All achievements are defined here with their rewards. String ids are the
//! ones written to the persisted record.

/// Unique identifier for each achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AchievementId {
    // Exploration
    FirstSteps,
    Archaeologist,
    Historian,
    Completionist,

    // Social
    SocialButterfly,
    Messenger,

    // Time
    NightOwl,
    EarlyBird,
    ReturnVisitor,

    // Secret
    SecretHunter,
    KonamiMaster,
    CodeWhisperer,
}

impl AchievementId {
    /// Get the string ID for storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstSteps => "firstSteps",
            Self::Archaeologist => "archaeologist",
            Self::Historian => "historian",
            Self::Completionist => "completionist",
            Self::SocialButterfly => "socialButterfly",
            Self::Messenger => "messenger",
            Self::NightOwl => "nightOwl",
            Self::EarlyBird => "earlyBird",
            Self::ReturnVisitor => "returnVisitor",
            Self::SecretHunter => "secretHunter",
            Self::KonamiMaster => "konamiMaster",
            Self::CodeWhisperer => "codeWhisperer",
        }
    }

    /// Parse from a stored string
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|id| id.as_str() == s)
    }

    /// Get all achievement IDs in catalog order
    pub fn all() -> &'static [AchievementId] {
        &[
            Self::FirstSteps,
            Self::Archaeologist,
            Self::Historian,
            Self::SocialButterfly,
            Self::Completionist,
            Self::NightOwl,
            Self::EarlyBird,
            Self::SecretHunter,
            Self::KonamiMaster,
            Self::CodeWhisperer,
            Self::ReturnVisitor,
            Self::Messenger,
        ]
    }
}

impl std::fmt::Display for AchievementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Achievement category for grouping in UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementCategory {
    Exploration,
    Social,
    Time,
    Secret,
}

impl AchievementCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Exploration => "Exploration",
            Self::Social => "Social",
            Self::Time => "Time",
            Self::Secret => "Secrets",
        }
    }
}

/// Achievement definition with all metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: AchievementCategory,
    /// One-time XP granted on unlock, `0` for none
    pub xp_reward: u32,
}

/// All achievement definitions
pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: AchievementId::FirstSteps,
        name: "First Steps",
        description: "Visit the portfolio for the first time",
        icon: "👢",
        category: AchievementCategory::Exploration,
        xp_reward: 50,
    },
    Achievement {
        id: AchievementId::Archaeologist,
        name: "Archaeologist",
        description: "Examine all projects in the dungeon",
        icon: "⛏️",
        category: AchievementCategory::Exploration,
        xp_reward: 100,
    },
    Achievement {
        id: AchievementId::Historian,
        name: "Historian",
        description: "Read through the experience timeline",
        icon: "📜",
        category: AchievementCategory::Exploration,
        xp_reward: 50,
    },
    Achievement {
        id: AchievementId::SocialButterfly,
        name: "Social Butterfly",
        description: "Click any social link",
        icon: "🦋",
        category: AchievementCategory::Social,
        xp_reward: 50,
    },
    Achievement {
        id: AchievementId::Completionist,
        name: "Completionist",
        description: "Visit all sections of the portfolio",
        icon: "⭐",
        category: AchievementCategory::Exploration,
        xp_reward: 150,
    },
    Achievement {
        id: AchievementId::NightOwl,
        name: "Night Owl",
        description: "Visit between 10 PM and 4 AM",
        icon: "🦉",
        category: AchievementCategory::Time,
        xp_reward: 75,
    },
    Achievement {
        id: AchievementId::EarlyBird,
        name: "Early Bird",
        description: "Visit between 5 AM and 8 AM",
        icon: "🌅",
        category: AchievementCategory::Time,
        xp_reward: 75,
    },
    Achievement {
        id: AchievementId::SecretHunter,
        name: "Secret Hunter",
        description: "Find a hidden Easter egg",
        icon: "🔍",
        category: AchievementCategory::Secret,
        xp_reward: 200,
    },
    Achievement {
        id: AchievementId::KonamiMaster,
        name: "Konami Master",
        description: "Enter the legendary code",
        icon: "🎮",
        category: AchievementCategory::Secret,
        xp_reward: 200,
    },
    Achievement {
        id: AchievementId::CodeWhisperer,
        name: "Code Whisperer",
        description: "Open the developer tools",
        icon: "💻",
        category: AchievementCategory::Secret,
        xp_reward: 100,
    },
    Achievement {
        id: AchievementId::ReturnVisitor,
        name: "Return Visitor",
        description: "Come back another day",
        icon: "🔄",
        category: AchievementCategory::Time,
        xp_reward: 150,
    },
    Achievement {
        id: AchievementId::Messenger,
        name: "Messenger",
        description: "Send a message through the contact form",
        icon: "✉️",
        category: AchievementCategory::Social,
        xp_reward: 100,
    },
];

impl Achievement {
    /// Get achievement definition by ID.
    ///
    /// Every `AchievementId` has an entry; a missing one falls back to the
    /// first catalog entry rather than panicking.
    pub fn get(id: AchievementId) -> &'static Achievement {
        ACHIEVEMENTS
            .iter()
            .find(|a| a.id == id)
            .unwrap_or(&ACHIEVEMENTS[0])
    }

    /// Look up a definition by its stored string id
    pub fn find(id: &str) -> Option<&'static Achievement> {
        ACHIEVEMENTS.iter().find(|a| a.id.as_str() == id)
    }

    /// Get total number of achievements
    pub fn total_count() -> usize {
        ACHIEVEMENTS.len()
    }

    /// Get total possible XP from all achievements
    pub fn total_xp() -> u32 {
        ACHIEVEMENTS.iter().map(|a| a.xp_reward).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_id_has_a_definition() {
        assert_eq!(AchievementId::all().len(), ACHIEVEMENTS.len());
        for id in AchievementId::all() {
            assert_eq!(Achievement::get(*id).id, *id);
        }
    }

    #[test]
    fn test_string_ids_round_trip() {
        for id in AchievementId::all() {
            assert_eq!(AchievementId::parse(id.as_str()), Some(*id));
        }
        assert_eq!(AchievementId::parse("not-a-real-id"), None);
    }

    #[test]
    fn test_find_by_string() {
        let konami = Achievement::find("konamiMaster").unwrap();
        assert_eq!(konami.name, "Konami Master");
        assert_eq!(konami.xp_reward, 200);
        assert!(Achievement::find("KonamiMaster").is_none());
    }

    #[test]
    fn test_total_xp() {
        assert_eq!(Achievement::total_xp(), 1300);
        assert_eq!(Achievement::total_count(), 12);
    }
}
