/*
[INPUT]:  Raw access token strings
[OUTPUT]: Opaque token with redacted Debug output
[POS]:    Auth layer - bearer token value type
[UPDATE]: When changing token validation or masking
*/

use std::fmt;

/// Opaque bearer token. The value is never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a raw token. Blank input yields `None`.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short masked form for display, keeping the first and last few chars
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 8 {
            return "*".repeat(chars.len());
        }
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}…{tail}")
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_token_rejected() {
        assert!(AccessToken::new("").is_none());
        assert!(AccessToken::new("   ").is_none());
    }

    #[test]
    fn test_token_trimmed() {
        let token = AccessToken::new("  abc.def.ghi \n").expect("token");
        assert_eq!(token.as_str(), "abc.def.ghi");
    }

    #[test]
    fn test_debug_is_redacted() {
        let token = AccessToken::new("super-secret-value").expect("token");
        let rendered = format!("{token:?}");
        assert!(!rendered.contains("secret"));
    }

    #[test]
    fn test_masked() {
        let token = AccessToken::new("eyJhbGciOiJIUzI1NiJ9.payload.sig").expect("token");
        assert_eq!(token.masked(), "eyJh….sig");
        assert_eq!(AccessToken::new("short").expect("token").masked(), "*****");
    }
}
