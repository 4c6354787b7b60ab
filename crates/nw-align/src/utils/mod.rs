//! Utility traits and functions for the crate.

mod score_value;

pub use score_value::ScoreValue;

/// Renders a byte as a printable character for error messages and logs.
pub(crate) fn printable(byte: u8) -> char {
    if byte.is_ascii_graphic() || byte == b' ' {
        byte as char
    } else {
        char::REPLACEMENT_CHARACTER
    }
}
