use crate::searchlibs::EncodingError;
use std::fmt;

/// A keyword that is safe to drop into a URL query component as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedKeyword(String);

impl EncodedKeyword {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EncodedKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub struct KeywordEncoder;

impl KeywordEncoder {
    /// Percent-encodes everything outside `A-Z a-z 0-9 - _ . ~`, so `&`, `?`,
    /// `=`, spaces and non-ASCII text can never split the query string.
    pub fn encode(raw: &str) -> Result<EncodedKeyword, EncodingError> {
        let encoded = urlencoding::encode(raw);
        if encoded.is_empty() {
            return Err(EncodingError::Empty);
        }

        Ok(EncodedKeyword(encoded.into_owned()))
    }
}
