//! Identity data models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Login credentials posted to the token endpoint
#[derive(Serialize, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub tenant: String,
}

impl Credentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        tenant: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            tenant: tenant.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .field("tenant", &self.tenant)
            .finish()
    }
}

/// Token issued by the identity service
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
}
