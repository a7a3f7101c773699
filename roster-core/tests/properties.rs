use proptest::prelude::*;
use roster_core::{
    GroupingMode, HEADER, Player, SkillLevel, decrypt, divide, encrypt, escape_field, parse_csv,
    sort_by_skill_desc, to_csv,
};

fn arb_skill_level() -> impl Strategy<Value = SkillLevel> {
    prop::sample::select(SkillLevel::ALL.to_vec())
}

/// Names with no surrounding whitespace and an even number of quotes
fn arb_name() -> impl Strategy<Value = String> {
    "[A-Za-zÅÄÖåäöé ,\"']{0,18}".prop_map(|middle| {
        let mut name = format!("N{middle}");
        if name.chars().filter(|&c| c == '"').count() % 2 == 0 {
            name.push('x');
        } else {
            name.push('"');
        }
        name
    })
}

fn arb_player() -> impl Strategy<Value = Player> {
    (arb_name(), arb_skill_level()).prop_map(|(name, level)| Player::new(name, level))
}

fn arb_roster() -> impl Strategy<Value = Vec<Player>> {
    prop::collection::vec(arb_player(), 0..40)
}

fn arb_mode() -> impl Strategy<Value = GroupingMode> {
    prop_oneof![Just(GroupingMode::Even), Just(GroupingMode::SkillBased)]
}

/// One data row as someone might type it: padded fields, optional blank
/// line after it
fn arb_row() -> impl Strategy<Value = (Player, String)> {
    (arb_player(), "[ \t]{0,2}", "[ \t]{0,2}", "[ \t]{0,2}", "[ \t]{0,2}", any::<bool>()).prop_map(
        |(player, a, b, c, d, blank_after)| {
            let name = escape_field(&player.name).unwrap();
            let mut row = format!("{a}{name}{b},{c}{}{d}", player.skill_level.name());
            if blank_after {
                row.push_str("\n  ");
            }
            (player, row)
        },
    )
}

/// Well-formed roster text plus the players it holds
fn arb_roster_text() -> impl Strategy<Value = (String, Vec<Player>)> {
    (
        prop::sample::select(vec![HEADER, "Name , Skill Level", "NAME,SKILL"]),
        prop::collection::vec(arb_row(), 0..20),
        prop_oneof![Just("\n"), Just("\r\n")],
        any::<bool>(),
    )
        .prop_map(|(header, rows, newline, trailing_newline)| {
            let (players, lines): (Vec<Player>, Vec<String>) = rows.into_iter().unzip();
            let mut text = std::iter::once(header.to_string())
                .chain(lines)
                .collect::<Vec<_>>()
                .join("\n")
                .replace('\n', newline);
            if trailing_newline {
                text.push_str(newline);
            }
            (text, players)
        })
}

/// The canonical form of roster text: header, then `name,LEVEL` rows
fn normalized(players: &[Player]) -> String {
    std::iter::once(HEADER.to_string())
        .chain(
            players
                .iter()
                .map(|p| format!("{},{}", escape_field(&p.name).unwrap(), p.skill_level.name())),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #[test]
    fn formatting_parsed_text_normalizes_it((text, players) in arb_roster_text()) {
        let parsed = parse_csv(&text).unwrap();
        prop_assert_eq!(&parsed, &players);
        prop_assert_eq!(to_csv(&parsed).unwrap(), normalized(&players));
    }

    #[test]
    fn csv_roundtrip(players in arb_roster()) {
        let csv = to_csv(&players).unwrap();
        prop_assert_eq!(parse_csv(&csv).unwrap(), players);
    }

    #[test]
    fn cipher_roundtrip(text in any::<String>(), password in ".{1,16}") {
        let encrypted = encrypt(&text, &password).unwrap();
        prop_assert_eq!(decrypt(&encrypted, &password).unwrap(), text);
    }

    #[test]
    fn division_keeps_every_player(
        players in arb_roster(),
        mode in arb_mode(),
        group_count in 1i32..10,
    ) {
        let groups = divide(mode, &players, group_count);

        if players.is_empty() {
            prop_assert!(groups.is_empty());
        } else {
            prop_assert_eq!(groups.len(), group_count as usize);
        }

        let mut seen: Vec<Player> = groups.into_iter().flatten().collect();
        let mut expected = players.clone();
        seen.sort_by(|a, b| a.name.cmp(&b.name).then(a.skill_level.cmp(&b.skill_level)));
        expected.sort_by(|a, b| a.name.cmp(&b.name).then(a.skill_level.cmp(&b.skill_level)));
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn group_sizes_differ_by_at_most_one(
        players in arb_roster(),
        mode in arb_mode(),
        group_count in 1i32..10,
    ) {
        let groups = divide(mode, &players, group_count);
        if let (Some(max), Some(min)) = (
            groups.iter().map(Vec::len).max(),
            groups.iter().map(Vec::len).min(),
        ) {
            prop_assert!(max - min <= 1);
        }
    }

    #[test]
    fn skill_based_groups_are_the_sorted_roster(
        players in arb_roster(),
        group_count in 1i32..10,
    ) {
        let groups = divide(GroupingMode::SkillBased, &players, group_count);
        let flattened: Vec<Player> = groups.into_iter().flatten().collect();
        prop_assert_eq!(flattened, sort_by_skill_desc(&players));
    }

    #[test]
    fn non_positive_count_is_identity(players in arb_roster(), mode in arb_mode(), group_count in -5i32..=0) {
        let groups = divide(mode, &players, group_count);
        if players.is_empty() {
            prop_assert!(groups.is_empty());
        } else {
            prop_assert_eq!(groups, vec![players]);
        }
    }
}
