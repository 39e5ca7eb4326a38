//! Base64 text encoding for the binary envelope fields.
//!
//! Standard alphabet with padding (RFC 4648 §4), which is what browsers'
//! `btoa`/`atob` produce, so exports stay portable.

use data_encoding::BASE64;

/// Error returned when text is not valid base64 or has the wrong length.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The text is not valid padded base64.
    #[error("invalid base64: {0}")]
    InvalidEncoding(#[from] data_encoding::DecodeError),

    /// The decoded buffer does not have the expected fixed length.
    #[error("decoded length {actual} bytes (expected {expected})")]
    WrongLength {
        /// Required length in bytes.
        expected: usize,
        /// Length actually decoded.
        actual: usize,
    },
}

/// Encode bytes as padded base64.
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Decode padded base64 text into bytes.
///
/// # Errors
///
/// Returns [`CodecError::InvalidEncoding`] on any malformed input.
pub fn decode(text: &str) -> Result<Vec<u8>, CodecError> {
    Ok(BASE64.decode(text.as_bytes())?)
}

/// Decode padded base64 text into a fixed-size array.
///
/// # Errors
///
/// Returns [`CodecError::InvalidEncoding`] on malformed input and
/// [`CodecError::WrongLength`] if the decoded length is not `N`.
pub fn decode_array<const N: usize>(text: &str) -> Result<[u8; N], CodecError> {
    let bytes = decode(text)?;
    <[u8; N]>::try_from(bytes.as_slice()).map_err(|_| CodecError::WrongLength {
        expected: N,
        actual: bytes.len(),
    })
}
