//! Player and skill level value types
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Skill rating, declared from lowest to highest.
///
/// The derived `Ord` follows declaration order, so sorting by skill
/// never depends on the names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SkillLevel {
    New,
    Easy,
    Medium,
    Hard,
}

impl SkillLevel {
    /// All levels, lowest first
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::New,
        SkillLevel::Easy,
        SkillLevel::Medium,
        SkillLevel::Hard,
    ];

    /// Name used in CSV rows
    pub fn name(self) -> &'static str {
        match self {
            SkillLevel::New => "NEW",
            SkillLevel::Easy => "EASY",
            SkillLevel::Medium => "MEDIUM",
            SkillLevel::Hard => "HARD",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown skill level '{0}'")]
pub struct UnknownSkillLevel(pub String);

impl FromStr for SkillLevel {
    type Err = UnknownSkillLevel;

    /// Exact, case-sensitive match against [`SkillLevel::name`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillLevel::ALL
            .into_iter()
            .find(|level| level.name() == s)
            .ok_or_else(|| UnknownSkillLevel(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub skill_level: SkillLevel,
}

impl Player {
    pub fn new(name: impl Into<String>, skill_level: SkillLevel) -> Self {
        Self {
            name: name.into(),
            skill_level,
        }
    }
}

/// An ordered run of players produced by the group divider
pub type Group = Vec<Player>;
