use crate::core::Session;
use crate::domain::{validate, User};
use crate::storage::JsonStore;

use super::{ManagerError, ManagerResult};

/// Owns the user collection and the credential checks that gate the session.
pub struct UserManager {
    users: Vec<User>,
    store: JsonStore,
}

impl UserManager {
    pub fn load(store: JsonStore) -> Self {
        let users = store.load();
        Self { users, store }
    }

    /// Registers a new account. Usernames are not required to be unique:
    /// duplicates are stored as-is, and `login` matches the first entry.
    pub fn register(
        &mut self,
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> ManagerResult<()> {
        let email = email.into();
        if !validate::is_valid_email(&email) {
            return Err(ManagerError::Invalid("Invalid email format".into()));
        }
        self.users.push(User::new(username, password, email));
        self.store.save(&self.users)?;
        Ok(())
    }

    /// Signs in the first user whose username and password both match. On
    /// failure the session slot is left as it was.
    pub fn login(
        &self,
        session: &mut Session,
        username: &str,
        password: &str,
    ) -> ManagerResult<()> {
        match self
            .users
            .iter()
            .position(|user| user.username == username && user.verify_password(password))
        {
            Some(index) => {
                session.set(index);
                Ok(())
            }
            None => Err(ManagerError::BadCredentials),
        }
    }

    /// Replaces the signed-in user's password after checking the old one.
    /// The stored record is swapped for a new value rather than mutated.
    pub fn change_password(
        &mut self,
        session: &Session,
        old_password: &str,
        new_password: impl Into<String>,
    ) -> ManagerResult<()> {
        let index = session.current().ok_or(ManagerError::NotAuthenticated)?;
        let user = self
            .users
            .get(index)
            .ok_or(ManagerError::NotAuthenticated)?;
        if !user.verify_password(old_password) {
            return Err(ManagerError::BadCredentials);
        }
        let updated = user.with_password(new_password);
        self.users[index] = updated;
        self.store.save(&self.users)?;
        Ok(())
    }

    /// The signed-in user, if any.
    pub fn current<'a>(&'a self, session: &Session) -> Option<&'a User> {
        session.current().and_then(|index| self.users.get(index))
    }

    /// All registered users in insertion order.
    pub fn users(&self) -> &[User] {
        &self.users
    }
}
