//! Roster CSV codec: `name,skill_level` header followed by one player per line
use crate::error::{Result, RosterError};
use crate::player::{Player, SkillLevel};

/// Header line written by [`to_csv`]
pub const HEADER: &str = "name,skill_level";

/// Parse roster CSV text into players, preserving line order.
///
/// Blank lines are skipped and a leading header line (anything mentioning
/// both "name" and "skill", case-insensitively) is dropped. Line numbers in
/// errors count data lines only, starting at 1.
pub fn parse_csv(text: &str) -> Result<Vec<Player>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    let Some(first) = lines.first() else {
        return Ok(Vec::new());
    };

    let first = first.to_lowercase();
    let data = if first.contains("name") && first.contains("skill") {
        &lines[1..]
    } else {
        &lines[..]
    };

    let players = data
        .iter()
        .enumerate()
        .map(|(index, line)| parse_line(index + 1, line))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(players = players.len(), "parsed roster csv");
    Ok(players)
}

fn parse_line(line_no: usize, line: &str) -> Result<Player> {
    let [name, level] = <[String; 2]>::try_from(split_fields(line)).map_err(|fields| {
        RosterError::FieldCount {
            line: line_no,
            fields: fields.len(),
            content: line.to_string(),
        }
    })?;

    let skill_level = level
        .parse::<SkillLevel>()
        .map_err(|_| RosterError::UnknownSkillLevel {
            line: line_no,
            value: level.clone(),
            content: line.to_string(),
        })?;

    Ok(Player { name, skill_level })
}

/// Split a row into trimmed fields.
///
/// Rows whose quotes all wrap whole fields, the way [`escape_field`] writes
/// them, split only on commas outside the quotes and get unwrapped. Any other
/// row, including one with a stray `"` inside a name, splits on every comma.
fn split_fields(line: &str) -> Vec<String> {
    split_quoted(line).unwrap_or_else(|| {
        line.split(',')
            .map(|field| field.trim().to_string())
            .collect()
    })
}

/// `None` when a quote opens mid-field, text follows a closing quote, or a
/// quote is never closed.
fn split_quoted(line: &str) -> Option<Vec<String>> {
    let mut fields = Vec::new();
    let mut in_quotes = false;
    let mut closed = false;
    let mut start = 0;

    let mut chars = line.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if in_quotes {
            // `""` inside a quoted field is one literal quote
            if c == '"' && chars.next_if(|&(_, next)| next == '"').is_none() {
                in_quotes = false;
                closed = true;
            }
            continue;
        }

        match c {
            ',' => {
                fields.push(unquote(line[start..i].trim()));
                start = i + 1;
                closed = false;
            }
            _ if closed => {
                if !c.is_whitespace() {
                    return None;
                }
            }
            '"' if line[start..i].trim().is_empty() => in_quotes = true,
            '"' => return None,
            _ => {}
        }
    }

    if in_quotes {
        return None;
    }
    fields.push(unquote(line[start..].trim()));

    Some(fields)
}

fn unquote(field: &str) -> String {
    match field
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        Some(inner) => inner.replace("\"\"", "\""),
        None => field.to_string(),
    }
}

/// Quote a name for CSV output if it contains a comma or a double quote.
///
/// Names with an odd number of `"` are rejected rather than guessed at.
pub fn escape_field(field: &str) -> Result<String> {
    if !field.contains(',') && !field.contains('"') {
        return Ok(field.to_string());
    }

    let quotes = field.chars().filter(|&c| c == '"').count();
    if quotes % 2 != 0 {
        return Err(RosterError::UnterminatedQuote {
            name: field.to_string(),
        });
    }

    Ok(format!("\"{}\"", field.replace('"', "\"\"")))
}

/// Format players as roster CSV: the header, then one `name,LEVEL` row per
/// player, newline separated with no trailing newline.
pub fn to_csv(players: &[Player]) -> Result<String> {
    let mut out = String::from(HEADER);

    for player in players {
        out.push('\n');
        out.push_str(&escape_field(&player.name)?);
        out.push(',');
        out.push_str(player.skill_level.name());
    }

    Ok(out)
}
