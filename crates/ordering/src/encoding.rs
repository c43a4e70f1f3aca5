//! Percent-encoding for deep-link query values.
//!
//! Every byte of the UTF-8 text outside the RFC 3986 unreserved set
//! (`A-Z a-z 0-9 - . _ ~`) becomes `%XX`, so a space is `%20` and a newline
//! `%0A`. `+` is never used for spaces.

use thiserror::Error;

#[derive(Debug, Error)]
#[error("percent-decoded bytes are not valid UTF-8: {0}")]
pub struct DecodeError(#[from] std::string::FromUtf8Error);

pub fn percent_encode(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

pub fn percent_decode(encoded: &str) -> Result<String, DecodeError> {
    Ok(urlencoding::decode(encoded)?.into_owned())
}
