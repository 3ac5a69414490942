use std::fmt;
use uuid::Uuid;

pub const GUARD_PREFIX: &str = "BUILD_INFO_";

/// Preprocessor macro name used as an include guard.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GuardToken(String);

impl GuardToken {
    pub fn from_id(id: Uuid) -> GuardToken {
        let sanitized: String = id
            .hyphenated()
            .to_string()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();

        let token = format!("{GUARD_PREFIX}{sanitized}");
        debug_assert!(Self::is_valid_identifier(&token));

        GuardToken(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_valid_identifier(name: &str) -> bool {
        let mut chars = name.chars();

        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() || first == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        }
    }
}

impl fmt::Display for GuardToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
