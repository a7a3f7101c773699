use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use roster_core::{
    Attendance, AttendanceStatus, GroupingMode, Player, SkillLevel, group_title, parse_csv,
    seed_roster, short_name, skill_style, to_csv,
};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roster-cli")]
#[command(about = "P13 roster tool – CSV (de|en)crypt and training groups", long_about = None)]
#[command(version)]
struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct Io {
    /// Read from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate roster CSV and encrypt it to base64
    Encrypt {
        /// Password used as the XOR key
        #[arg(env = "ROSTER_PASSWORD", hide_env_values = true)]
        password: String,

        #[command(flatten)]
        io: Io,
    },

    /// Decrypt base64 back to roster CSV
    Decrypt {
        /// Password used as the XOR key
        #[arg(env = "ROSTER_PASSWORD", hide_env_values = true)]
        password: String,

        #[command(flatten)]
        io: Io,
    },

    /// Print the bundled P13 roster as CSV
    Seed {
        /// Team password for the bundled roster
        #[arg(env = "ROSTER_PASSWORD", hide_env_values = true)]
        password: String,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Split players from roster CSV into training groups
    Divide {
        /// Number of groups
        #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(i32).range(2..=8))]
        groups: i32,

        /// even: similar skill mix in every group, skill: similar skill together
        #[arg(short, long, default_value_t = GroupingMode::Even)]
        mode: GroupingMode,

        /// Only divide these players (exact names); everyone when omitted
        #[arg(long = "present", value_name = "NAME")]
        present: Vec<String>,

        /// Print groups as JSON
        #[arg(long)]
        json: bool,

        /// Read from this file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Validate roster CSV and count players per skill level
    Check {
        /// Read from this file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Encrypt { password, io } => {
            let blob = cmd_encrypt(&password, io.input.as_deref())?;
            write_output(io.output.as_deref(), &blob)?;
        }
        Commands::Decrypt { password, io } => {
            let csv = cmd_decrypt(&password, io.input.as_deref())?;
            write_output(io.output.as_deref(), &csv)?;
        }
        Commands::Seed { password, output } => {
            let csv = cmd_seed(&password)?;
            write_output(output.as_deref(), &csv)?;
        }
        Commands::Divide {
            groups,
            mode,
            present,
            json,
            input,
        } => {
            let report = cmd_divide(input.as_deref(), groups, mode, &present, json)?;
            write_output(None, &report)?;
        }
        Commands::Check { input } => {
            let report = cmd_check(input.as_deref())?;
            write_output(None, &report)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read from stdin")?;
            Ok(text)
        }
    }
}

fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, format!("{text}\n"))
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => println!("{text}"),
    }
    Ok(())
}

/// Roster CSV as read line by line, without a trailing newline
fn read_roster_text(path: Option<&Path>) -> Result<String> {
    Ok(read_input(path)?.lines().collect::<Vec<_>>().join("\n"))
}

fn cmd_encrypt(password: &str, input: Option<&Path>) -> Result<String> {
    let csv = read_roster_text(input)?;

    let players = parse_csv(&csv).context("Input is not a valid roster")?;
    tracing::info!(players = players.len(), "validated roster");

    Ok(roster_core::encrypt(&csv, password)?)
}

fn cmd_decrypt(password: &str, input: Option<&Path>) -> Result<String> {
    let blob = read_input(input)?;

    let csv = roster_core::decrypt(blob.trim(), password)?;
    let players = parse_csv(&csv).context("Decrypted text is not a valid roster (wrong password?)")?;
    tracing::info!(players = players.len(), "decrypted roster");

    Ok(csv)
}

fn cmd_seed(password: &str) -> Result<String> {
    let players = seed_roster(password).context("Failed to decrypt seed roster (wrong password?)")?;
    Ok(to_csv(&players)?)
}

fn cmd_divide(
    input: Option<&Path>,
    group_count: i32,
    mode: GroupingMode,
    present: &[String],
    json: bool,
) -> Result<String> {
    let roster = parse_csv(&read_input(input)?)?;
    let attendance = mark_present(&roster, present)?;
    let present_players = attendance.present_players();
    let groups = attendance.groups(mode, group_count);

    if json {
        return serde_json::to_string_pretty(&groups).context("Failed to serialize groups");
    }

    let mut lines = vec![
        format!("{} ({})", mode.display_name(), mode),
        format!("Total players: {}", present_players.len()),
    ];
    for (index, group) in groups.iter().enumerate() {
        lines.push(String::new());
        lines.push(group_title(index));
        for player in group {
            lines.push(format!(
                "  {} [{}]",
                short_name(player, &present_players),
                skill_style(player.skill_level).label
            ));
        }
    }

    Ok(lines.join("\n"))
}

/// Marks the named players present, or everyone when no names are given.
///
/// Each name marks the next roster row with that name, so a name listed
/// twice covers two identical rows.
fn mark_present(roster: &[Player], names: &[String]) -> Result<Attendance> {
    let mut attendance = Attendance::new(roster);

    if names.is_empty() {
        attendance.mark_all(AttendanceStatus::Present);
        return Ok(attendance);
    }

    for name in names {
        if !roster.iter().any(|p| &p.name == name) {
            bail!("No player named '{}' in the roster", name);
        }

        let next = attendance
            .iter()
            .find(|(_, player, status)| {
                &player.name == name && *status != AttendanceStatus::Present
            })
            .map(|(index, _, _)| index);
        let Some(index) = next else {
            bail!("'{}' is listed more times than the roster has rows for", name);
        };
        attendance.mark(index, AttendanceStatus::Present);
    }

    let summary = attendance.summary();
    tracing::info!(
        present = summary.present,
        absent = summary.unknown + summary.not_present,
        "marked attendance"
    );

    Ok(attendance)
}

fn cmd_check(input: Option<&Path>) -> Result<String> {
    let players = parse_csv(&read_input(input)?)?;

    let mut lines = vec![format!("{} players", players.len())];
    for level in SkillLevel::ALL.iter().rev() {
        let count = players.iter().filter(|p| p.skill_level == *level).count();
        lines.push(format!(
            "  {:<6} {:<5} {}",
            level.name(),
            skill_style(*level).label,
            count
        ));
    }

    Ok(lines.join("\n"))
}
