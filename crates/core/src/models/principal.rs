use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An authenticated identity as reported by the session provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: Uuid,
    pub email: String,
}

impl Principal {
    pub fn new(id: Uuid, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Teacher,
    Admin,
}

impl Role {
    /// Resolves the role of an email against the configured admin address.
    /// The comparison is exact.
    pub fn resolve(email: &str, admin_email: &str) -> Self {
        if email == admin_email {
            Role::Admin
        } else {
            Role::Teacher
        }
    }

    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }
}

/// A principal with its role resolved once, at session load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub principal: Principal,
    pub role: Role,
}

impl Actor {
    pub fn id(&self) -> Uuid {
        self.principal.id
    }

    pub fn email(&self) -> &str {
        &self.principal.email
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// The session payload pushed by a session provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub principal: Principal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub signed_in: bool,
    pub id: Option<Uuid>,
    pub email: Option<String>,
    pub role: Option<Role>,
}

impl SessionResponse {
    pub fn signed_out() -> Self {
        Self {
            signed_in: false,
            id: None,
            email: None,
            role: None,
        }
    }
}

impl From<&Actor> for SessionResponse {
    fn from(actor: &Actor) -> Self {
        Self {
            signed_in: true,
            id: Some(actor.id()),
            email: Some(actor.email().to_string()),
            role: Some(actor.role),
        }
    }
}
