//! Text → byte conversion
//!
//! The browser form percent-encodes the text (`encodeURIComponent`) and
//! reads the numeric value of every escaped byte, with unescaped ASCII
//! characters standing for themselves. That is exactly the UTF-8 encoding
//! of the text, one value per byte, which is what [`text_to_bytes`] returns.

/// Bytes fed to the transcoder for `text`
pub fn text_to_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}
