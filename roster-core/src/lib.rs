//! core functionality for the P13 team roster: importing and exporting
//! players as CSV, the obfuscated seed roster and training group division
//!
//! # Modules
//!
//! - `codec`: Roster CSV parsing and formatting
//! - `base64`: Forgiving base64 text encoding
//! - `crypto`: Repeating-key XOR cipher for the player list
//! - `divider`: Even and skill-based group division
//! - `session`: Attendance for a training session
//! - `display`: Labels, colors and short names for presentation
//! - `seed`: The bundled, encrypted seed roster

pub mod base64;
pub mod codec;
pub mod crypto;
pub mod display;
pub mod divider;
pub mod error;
pub mod player;
pub mod seed;
pub mod session;

// Re-export commonly used items
pub use codec::{HEADER, escape_field, parse_csv, to_csv};
pub use crypto::{decrypt, encrypt, xor_with_key};
pub use display::{Rgb, SkillStyle, group_title, short_name, skill_style};
pub use divider::{
    GroupingMode, UnknownGroupingMode, divide, divide_by_skill, divide_even, sort_by_skill_desc,
};
pub use error::{ErrorKind, Result, RosterError};
pub use player::{Group, Player, SkillLevel, UnknownSkillLevel};
pub use seed::{SEED_ROSTER, seed_roster};
pub use session::{Attendance, AttendanceStatus, AttendanceSummary};
