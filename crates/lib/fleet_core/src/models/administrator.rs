//! Administrator domain models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Administrator role.
///
/// `None` exists so that an unset role can be represented, but it is never a
/// valid role for a persisted administrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    None,
    Adm,
    Editor,
}

/// Lookup table for role names. Matching is case-insensitive.
const ROLE_NAMES: [(&str, Role); 3] = [
    ("none", Role::None),
    ("adm", Role::Adm),
    ("editor", Role::Editor),
];

impl Role {
    /// Canonical name, as stored and as embedded in tokens.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::None => "None",
            Role::Adm => "Adm",
            Role::Editor => "Editor",
        }
    }

    /// Whether this role may be assigned to a persisted administrator.
    pub fn is_assignable(&self) -> bool {
        !matches!(self, Role::None)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role name is not in the lookup table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ROLE_NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(needle))
            .map(|(_, role)| *role)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// Persisted administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Administrator {
    pub id: i32,
    pub email: String,
    /// Stored and compared as plaintext.
    pub password: String,
    pub role: Role,
}

/// Administrator not yet persisted (no identifier).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewAdministrator {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl NewAdministrator {
    pub fn new(email: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            role,
        }
    }
}

/// Administrator present in every fresh store.
pub const DEFAULT_ADMINISTRATOR_EMAIL: &str = "administrador@teste.com";
/// Password of the default administrator.
pub const DEFAULT_ADMINISTRATOR_PASSWORD: &str = "123456";

/// Builds the default administrator record.
pub fn default_administrator() -> NewAdministrator {
    NewAdministrator::new(
        DEFAULT_ADMINISTRATOR_EMAIL,
        DEFAULT_ADMINISTRATOR_PASSWORD,
        Role::Adm,
    )
}
