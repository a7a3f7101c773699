//! Splitting present players into training groups
use crate::player::{Group, Player};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupingMode {
    /// Snake distribution, every group gets a similar skill mix
    #[default]
    Even,
    /// Contiguous chunks, similar skill levels train together
    SkillBased,
}

impl GroupingMode {
    pub fn display_name(self) -> &'static str {
        match self {
            GroupingMode::Even => "Jämna",
            GroupingMode::SkillBased => "Nivåindelat",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            GroupingMode::Even => GroupingMode::SkillBased,
            GroupingMode::SkillBased => GroupingMode::Even,
        }
    }
}

impl fmt::Display for GroupingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GroupingMode::Even => "even",
            GroupingMode::SkillBased => "skill",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown grouping mode '{0}' (expected even or skill)")]
pub struct UnknownGroupingMode(pub String);

impl FromStr for GroupingMode {
    type Err = UnknownGroupingMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "even" => Ok(GroupingMode::Even),
            "skill" | "skill-based" | "skill_based" => Ok(GroupingMode::SkillBased),
            _ => Err(UnknownGroupingMode(s.to_string())),
        }
    }
}

/// Divides `players` into `group_count` groups using `mode`.
///
/// No players gives no groups. A `group_count` of zero or less gives one
/// group holding every player in input order.
pub fn divide(mode: GroupingMode, players: &[Player], group_count: i32) -> Vec<Group> {
    let groups = match mode {
        GroupingMode::Even => divide_even(players, group_count),
        GroupingMode::SkillBased => divide_by_skill(players, group_count),
    };

    tracing::debug!(
        %mode,
        players = players.len(),
        group_count,
        sizes = ?groups.iter().map(Vec::len).collect::<Vec<_>>(),
        "divided players into groups"
    );

    groups
}

/// Snake distribution over the skill-sorted players.
///
/// Index `i` lands in group `p` where `p = i mod 2n` for `p < n`, and
/// `n - 1 - (p mod n)` otherwise, so passes alternate direction.
pub fn divide_even(players: &[Player], group_count: i32) -> Vec<Group> {
    let n = match fallback_or_count(players, group_count) {
        Ok(n) => n,
        Err(groups) => return groups,
    };

    let mut groups: Vec<Group> = vec![Vec::new(); n];
    for (i, player) in sort_by_skill_desc(players).into_iter().enumerate() {
        let position = i % (2 * n);
        let target = if position < n {
            position
        } else {
            n - 1 - (position % n)
        };
        groups[target].push(player);
    }

    groups
}

/// Contiguous chunks of the skill-sorted players.
///
/// The first `len % n` groups take one extra player.
pub fn divide_by_skill(players: &[Player], group_count: i32) -> Vec<Group> {
    let n = match fallback_or_count(players, group_count) {
        Ok(n) => n,
        Err(groups) => return groups,
    };

    let base = players.len() / n;
    let extra = players.len() % n;

    let mut sorted = sort_by_skill_desc(players).into_iter();
    (0..n)
        .map(|g| {
            let size = if g < extra { base + 1 } else { base };
            sorted.by_ref().take(size).collect()
        })
        .collect()
}

/// Stable sort, highest skill first
pub fn sort_by_skill_desc(players: &[Player]) -> Vec<Player> {
    let mut sorted = players.to_vec();
    sorted.sort_by(|a, b| b.skill_level.cmp(&a.skill_level));
    sorted
}

/// Shared edge cases: `Err` carries the finished result, `Ok` the usable count
fn fallback_or_count(players: &[Player], group_count: i32) -> Result<usize, Vec<Group>> {
    if players.is_empty() {
        return Err(Vec::new());
    }
    if group_count <= 0 {
        return Err(vec![players.to_vec()]);
    }
    Ok(group_count as usize)
}
