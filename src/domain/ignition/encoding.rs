//! Data URI transport encoding for file contents.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::domain::AppError;

/// Prefix of every content source emitted by the encoder.
pub const DATA_URI_PREFIX: &str = "data:text/plain;base64,";

/// Encode raw bytes as a self-describing base64 data URI.
pub fn encode(data: &[u8]) -> String {
    let mut source = String::with_capacity(DATA_URI_PREFIX.len() + data.len().div_ceil(3) * 4);
    source.push_str(DATA_URI_PREFIX);
    STANDARD.encode_string(data, &mut source);
    source
}

/// Decode a data URI produced by [`encode`] back into raw bytes.
pub fn decode(source: &str) -> Result<Vec<u8>, AppError> {
    let payload = source.strip_prefix(DATA_URI_PREFIX).ok_or_else(|| {
        AppError::InvalidDataUri(format!("expected '{}' prefix", DATA_URI_PREFIX))
    })?;
    STANDARD.decode(payload).map_err(|e| AppError::InvalidDataUri(e.to_string()))
}
