use std::fmt;

/// A registered account as held by the record store.
///
/// Deliberately not `Serialize`: the secret must never leave the process.
/// Outward representations go through `api::UserDto`.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,

    pub username: String,

    pub email: String,

    pub secret: String,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Registration candidate. The id is assigned by the store.
#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,

    pub email: String,

    pub secret: String,
}

impl NewUser {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            secret: secret.into(),
        }
    }

    #[must_use]
    pub fn with_id(self, id: i64) -> User {
        User {
            id,
            username: self.username,
            email: self.email,
            secret: self.secret,
        }
    }
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("secret", &"<redacted>")
            .finish()
    }
}
