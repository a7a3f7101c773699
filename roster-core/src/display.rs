//! Presentation lookups kept apart from the data model
use crate::player::{Player, SkillLevel};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillStyle {
    pub label: &'static str,
    pub color: Rgb,
}

pub fn skill_style(level: SkillLevel) -> SkillStyle {
    match level {
        SkillLevel::New => SkillStyle {
            label: "Ny",
            color: Rgb(0x9e, 0x9e, 0x9e),
        },
        SkillLevel::Easy => SkillStyle {
            label: "Lätt",
            color: Rgb(0x4c, 0xaf, 0x50),
        },
        SkillLevel::Medium => SkillStyle {
            label: "Medel",
            color: Rgb(0xff, 0x98, 0x00),
        },
        SkillLevel::Hard => SkillStyle {
            label: "Svår",
            color: Rgb(0xf4, 0x43, 0x36),
        },
    }
}

/// "Group N", counting from 1
pub fn group_title(index: usize) -> String {
    format!("Group {}", index + 1)
}

fn first_name(name: &str) -> &str {
    name.split(' ').next().unwrap_or(name)
}

/// First name, plus the initial of the last name word when another player in
/// `among` has the same first name.
///
/// `among` is expected to contain `player` itself.
pub fn short_name(player: &Player, among: &[Player]) -> String {
    let first = first_name(&player.name);
    let namesakes = among
        .iter()
        .filter(|p| first_name(&p.name) == first)
        .count();

    if namesakes <= 1 {
        return first.to_string();
    }

    match player
        .name
        .split(' ')
        .next_back()
        .and_then(|last| last.chars().next())
    {
        Some(initial) => format!("{first} {initial}"),
        None => first.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_has_a_style() {
        let labels: Vec<&str> = SkillLevel::ALL.iter().map(|&l| skill_style(l).label).collect();
        assert_eq!(labels, vec!["Ny", "Lätt", "Medel", "Svår"]);
        assert_eq!(skill_style(SkillLevel::Hard).color.to_string(), "#f44336");
    }

    #[test]
    fn test_group_title() {
        assert_eq!(group_title(0), "Group 1");
        assert_eq!(group_title(7), "Group 8");
    }

    #[test]
    fn test_short_name_unique_first_name() {
        let players = vec![
            Player::new("Anton Hall", SkillLevel::Medium),
            Player::new("Filip Hagenblad", SkillLevel::Medium),
        ];
        assert_eq!(short_name(&players[0], &players), "Anton");
    }

    #[test]
    fn test_short_name_shared_first_name() {
        let players = vec![
            Player::new("Filip Hagenblad", SkillLevel::Medium),
            Player::new("Filip Jönsson", SkillLevel::Hard),
            Player::new("Ennio Mazza Klemi", SkillLevel::Hard),
        ];
        assert_eq!(short_name(&players[0], &players), "Filip H");
        assert_eq!(short_name(&players[1], &players), "Filip J");
        assert_eq!(short_name(&players[2], &players), "Ennio");
    }

    #[test]
    fn test_short_name_single_word() {
        let players = vec![
            Player::new("Kim", SkillLevel::Easy),
            Player::new("Kim", SkillLevel::Hard),
        ];
        assert_eq!(short_name(&players[0], &players), "Kim K");
    }
}
