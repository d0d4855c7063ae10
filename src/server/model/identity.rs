use std::fmt;

/// Caller identity passed explicitly into mutating operations.
///
/// Only used for audit logging; no operation changes behavior based on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Anonymous,
    User(String),
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::Anonymous => f.write_str("anonymous"),
            Identity::User(id) => write!(f, "user {}", id),
        }
    }
}
