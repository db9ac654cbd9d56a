//! The two household members whose finances are reconciled

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two owners sharing the household
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Owner {
    Lorenzo,
    Maria,
}

impl Owner {
    /// Both owners, in reporting order
    pub const ALL: [Owner; 2] = [Owner::Lorenzo, Owner::Maria];

    /// The other owner
    pub const fn partner(self) -> Self {
        match self {
            Self::Lorenzo => Self::Maria,
            Self::Maria => Self::Lorenzo,
        }
    }

    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lorenzo => "Lorenzo",
            Self::Maria => "Maria",
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Owner {
    type Err = OwnerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Owner::ALL
            .into_iter()
            .find(|owner| owner.name() == s.trim())
            .ok_or_else(|| OwnerParseError(s.to_string()))
    }
}

/// Error returned for names that are not one of the two owners
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerParseError(pub String);

impl fmt::Display for OwnerParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown owner '{}'. Expected Lorenzo or Maria.", self.0)
    }
}

impl std::error::Error for OwnerParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partner() {
        assert_eq!(Owner::Lorenzo.partner(), Owner::Maria);
        assert_eq!(Owner::Maria.partner(), Owner::Lorenzo);
        for owner in Owner::ALL {
            assert_eq!(owner.partner().partner(), owner);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("Lorenzo".parse::<Owner>().unwrap(), Owner::Lorenzo);
        assert_eq!(" Maria ".parse::<Owner>().unwrap(), Owner::Maria);
        assert!("maria".parse::<Owner>().is_err());
        assert!("Bob".parse::<Owner>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Owner::Lorenzo.to_string(), "Lorenzo");
    }
}
