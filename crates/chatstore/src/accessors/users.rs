use chrono::{DateTime, Utc};

use chatstore_core::chat::format_timestamp;
use chatstore_core::keys::USERS_KEY;
use chatstore_core::storage::{fields, Entity, Removal, Result, TableStore};

use super::UserAccessor;
use crate::ChatStore;

/// The registry of connected users.
pub struct UsersAccessor<'a, S: TableStore> {
    store: &'a ChatStore<S>,
}

impl<'a, S: TableStore> UsersAccessor<'a, S> {
    pub(crate) fn new(store: &'a ChatStore<S>) -> Self {
        Self { store }
    }

    /// Returns the direct conversations of `user`.
    pub fn user(&self, user: &str) -> UserAccessor<'a, S> {
        UserAccessor::new(self.store, user)
    }

    /// Registers `user`, stamping the current time as its connect time.
    pub async fn add(&self, user: &str) -> Result<()> {
        self.add_at(user, Utc::now()).await
    }

    /// Registers `user` with an explicit connect time.
    ///
    /// Re-adding a user replaces its previous registration.
    pub async fn add_at(&self, user: &str, connect_time: DateTime<Utc>) -> Result<()> {
        let entity = Entity::new(USERS_KEY, user)
            .with_field(fields::USER, user)
            .with_field(fields::CONNECT_TIME, format_timestamp(connect_time));

        self.store.update_entity(&entity).await
    }

    /// Unregisters `user`; an unknown user is reported as [`Removal::NotFound`].
    pub async fn remove(&self, user: &str) -> Result<Removal> {
        self.store.remove_entity(USERS_KEY, user).await
    }

    /// Returns up to `count` registered user names, ascending.
    pub async fn load(&self, count: usize) -> Result<Vec<String>> {
        self.store.query_entity(USERS_KEY, fields::USER, count).await
    }
}
