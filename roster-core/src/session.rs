//! Attendance tracking for one training session
use crate::divider::{GroupingMode, divide};
use crate::player::{Group, Player};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    NotPresent,
    #[default]
    Unknown,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 3] = [
        AttendanceStatus::Present,
        AttendanceStatus::NotPresent,
        AttendanceStatus::Unknown,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::NotPresent => "Not Present",
            AttendanceStatus::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceSummary {
    pub present: usize,
    pub not_present: usize,
    pub unknown: usize,
}

/// Per-player attendance, kept in roster order.
///
/// Entries are addressed by roster position, so two identical rows stay two
/// players.
#[derive(Debug, Clone, Default)]
pub struct Attendance {
    entries: Vec<(Player, AttendanceStatus)>,
}

impl Attendance {
    /// Everyone on the roster starts out `Unknown`
    pub fn new(roster: &[Player]) -> Self {
        let entries = roster
            .iter()
            .map(|p| (p.clone(), AttendanceStatus::Unknown))
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sets the status of the player at roster position `index`. Returns
    /// false if there is no such position.
    pub fn mark(&mut self, index: usize, status: AttendanceStatus) -> bool {
        match self.entries.get_mut(index) {
            Some((_, current)) => {
                *current = status;
                true
            }
            None => false,
        }
    }

    pub fn mark_all(&mut self, status: AttendanceStatus) {
        for (_, current) in &mut self.entries {
            *current = status;
        }
    }

    pub fn status(&self, index: usize) -> Option<AttendanceStatus> {
        self.entries.get(index).map(|&(_, status)| status)
    }

    /// Roster positions and players in order, with their current status
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Player, AttendanceStatus)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, (player, status))| (index, player, *status))
    }

    pub fn present_players(&self) -> Vec<Player> {
        self.with_status(|s| s == AttendanceStatus::Present)
    }

    /// Players still to be marked present, as listed below the groups
    pub fn not_yet_present(&self) -> Vec<Player> {
        self.with_status(|s| s != AttendanceStatus::Present)
    }

    pub fn summary(&self) -> AttendanceSummary {
        self.entries
            .iter()
            .fold(AttendanceSummary::default(), |mut acc, (_, status)| {
                match status {
                    AttendanceStatus::Present => acc.present += 1,
                    AttendanceStatus::NotPresent => acc.not_present += 1,
                    AttendanceStatus::Unknown => acc.unknown += 1,
                }
                acc
            })
    }

    /// Training groups for the players marked present
    pub fn groups(&self, mode: GroupingMode, group_count: i32) -> Vec<Group> {
        divide(mode, &self.present_players(), group_count)
    }

    fn with_status(&self, keep: impl Fn(AttendanceStatus) -> bool) -> Vec<Player> {
        self.entries
            .iter()
            .filter(|&&(_, status)| keep(status))
            .map(|(player, _)| player.clone())
            .collect()
    }
}
