//! The P13 roster shipped with the app, obfuscated with the team password
use crate::codec::parse_csv;
use crate::crypto::decrypt;
use crate::error::Result;
use crate::player::Player;

pub const SEED_ROSTER: &str = "\
    BAAAFUMZAQgBHDAGDxcIHGUrDxIMHU8rGQkEHQZGJyQpOTonYCAAHQ4YSigfAwcLAwUMBEMvKzI0\
    ei4EHg4DUCcLBg1BPSouIzQgei4SDw1NPAoZEAIXCQEZAQBBPSouIzQgei0LGRUEEQFKIQABHAYE\
    RiksIitgKAQDGg4HAw9NMR0fBgADEQEeAgAAXCorOThnMwoZCxNNMQgPGAMIAghGJyQpOTonYCIF\
    ER0GAwRNIgAOAgQBGQEORiksIitgKQ4BGQFKIxIIHgYLRiwoNCY/J2spFRceDxNNJwYGBggeXCIv\
    Lig4PWUvAxcEHk8hCw0BGQFGIiA/NGUvBggMGE8tqdcZFRwZBQ9BPSouIzQgeioEBAgCUCILEBsM\
    UCQGDwwEXCcrOCVnNgYGAxFNOA4NDw8PHA4ORiwoNCY/J2srGQMDGkEns9kEGRICHkMiKzMpeigL\
    CBMEFQNKKAQfFwMfBAVBNS45M2slFQEEAw8KUC0YAw8GXCorOThnOAoEBAgDF08/Bg8IA0MiKzMp\
    eiYcCw9NJAoNBAADFAoYSjYIGQEYDwgOGEMvKzI0eiUFAgADHgoZSjMCFwYEGQoEXCorOThnOgAC\
    BEEgs8oCBqLEHkMnLyUkJSJgIRQeEQZKIgAAGQsDRiwoNCY/J2shFQpKIQgDFA0FB00lMT0uYC0I\
    H08oAKLbAgMDBAZBPSouIzQgeiILHhUEA08nBRMBEQEOSjICHKzOBAZBPSouIzQgeiIFCwkMHQtK\
    IhQeAwoDBE0oMTwzYC4fHA4EDg5NPgoECQkYXCIvLig4PWUlGQoMAk8PDQRNNgYEDggGXCcrOCVn\
    PxseBUEoGQsPHAABHEMvKzI0ej0fCAQDUCcPGA8MHgsPEE0gNSsjPyxnIw4HHwQBUD2pzwUPFR0N\
    RiwoNCY/J2s5EQMCC0ElEQYODxNBNS45M2s0HxoZDwdNIwcLGQkEBEMvKzI0UA==";

/// Decrypts and parses the bundled roster.
///
/// A wrong password almost always shows up as a CSV format error, so a
/// caller can check this before touching the stored roster.
pub fn seed_roster(password: &str) -> Result<Vec<Player>> {
    let csv = decrypt(SEED_ROSTER, password)?;
    let players = parse_csv(&csv)?;
    tracing::debug!(players = players.len(), "decrypted seed roster");
    Ok(players)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base64::is_base64_text;
    use crate::error::ErrorKind;

    #[test]
    fn test_blob_is_base64() {
        assert!(is_base64_text(SEED_ROSTER));
    }

    #[test]
    fn test_empty_password() {
        assert_eq!(seed_roster("").unwrap_err().kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_wrong_password_is_a_format_error() {
        assert_eq!(seed_roster("wrong").unwrap_err().kind(), ErrorKind::Format);
    }
}
