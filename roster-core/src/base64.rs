//! Standard-alphabet base64 with `=` padding.
//!
//! Decoding is forgiving: bytes outside the alphabet are skipped and the
//! first `=` ends the input. Callers that need strict input must check it
//! themselves (see [`is_base64_text`]).

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const PAD: char = '=';

#[inline]
fn sextet(c: u8) -> Option<u32> {
    let v = match c {
        b'A'..=b'Z' => c - b'A',
        b'a'..=b'z' => c - b'a' + 26,
        b'0'..=b'9' => c - b'0' + 52,
        b'+' => 62,
        b'/' => 63,
        _ => return None,
    };
    Some(v as u32)
}

/// Encodes bytes, 3 input bytes to 4 output characters
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len().div_ceil(3) * 4);

    for chunk in data.chunks(3) {
        let b1 = chunk[0] as usize;
        let b2 = chunk.get(1).copied().unwrap_or(0) as usize;
        let b3 = chunk.get(2).copied().unwrap_or(0) as usize;

        out.push(ALPHABET[b1 >> 2] as char);
        out.push(ALPHABET[((b1 & 0x03) << 4) | (b2 >> 4)] as char);

        if chunk.len() > 1 {
            out.push(ALPHABET[((b2 & 0x0F) << 2) | (b3 >> 6)] as char);
        } else {
            out.push(PAD);
        }

        if chunk.len() > 2 {
            out.push(ALPHABET[b3 & 0x3F] as char);
        } else {
            out.push(PAD);
        }
    }

    out
}

/// Decodes as many whole bytes as the input holds.
///
/// Never fails; malformed trailing data yields fewer bytes.
pub fn decode(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() / 4 * 3);
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for c in text.bytes() {
        if c == PAD as u8 {
            break;
        }

        let Some(value) = sextet(c) else {
            continue;
        };

        buffer = (buffer << 6) | value;
        bits += 6;

        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
            // keep only the bits not yet emitted
            buffer &= (1 << bits) - 1;
        }
    }

    out
}

/// True when every character is in `[A-Za-z0-9+/=]` (empty text included)
pub fn is_base64_text(text: &str) -> bool {
    text.bytes().all(|c| c == PAD as u8 || sextet(c).is_some())
}
