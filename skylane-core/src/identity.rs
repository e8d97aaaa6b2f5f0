use serde::{Deserialize, Serialize};

/// A registered account. The digest is opaque to this module; computing and
/// verifying it is the caller's job, so nothing expensive runs while the
/// store is locked.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Minimal user-identifying payload carried inside a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityClaim {
    pub id: i32,
    pub email: String,
}

/// Registered users, keyed by exact (case-sensitive) email.
pub struct IdentityStore {
    users: Vec<User>,
    next_id: i32,
}

impl IdentityStore {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }

    /// Store a new user and return their identity claim. Fails if the email
    /// is already registered.
    pub fn register(
        &mut self,
        name: String,
        email: String,
        password_hash: String,
    ) -> Result<IdentityClaim, IdentityError> {
        if self.email_taken(&email) {
            return Err(IdentityError::DuplicateEmail);
        }

        let user = User {
            id: self.next_id,
            name,
            email: email.clone(),
            password_hash,
        };
        self.next_id += 1;
        let claim = IdentityClaim { id: user.id, email };
        self.users.push(user);

        Ok(claim)
    }

    /// Cheap duplicate pre-check so callers can reject before paying for a
    /// digest. `register` re-checks under the same store lock that inserts.
    pub fn email_taken(&self, email: &str) -> bool {
        self.users.iter().any(|u| u.email == email)
    }

    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for IdentityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("Email exists")]
    DuplicateEmail,

    #[error("Invalid credentials")]
    InvalidCredentials,
}
