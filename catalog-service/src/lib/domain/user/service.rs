use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::record::RecordStore;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserDraft;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserKey;
use crate::user::errors::UserError;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort over any user record store.
pub struct UserService<S>
where
    S: RecordStore<User>,
{
    store: Arc<S>,
}

impl<S> UserService<S>
where
    S: RecordStore<User>,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> UserServicePort for UserService<S>
where
    S: RecordStore<User>,
{
    async fn get_all(&self) -> Result<Vec<User>, UserError> {
        Ok(self.store.find_all().await?)
    }

    async fn get_by(&self, key: &UserKey) -> Result<User, UserError> {
        Ok(self.store.find_one(key).await?)
    }

    async fn create(&self, new_user: NewUser) -> Result<User, UserError> {
        let created_user = self.store.insert(new_user).await?;

        tracing::info!(user_id = %created_user.id, "User created");

        Ok(created_user)
    }

    async fn update(&self, id: &UserId, draft: UserDraft) -> Result<User, UserError> {
        let mut user = self.store.find_one(&UserKey::Id(*id)).await?;

        user.name = draft.name;
        user.email = draft.email;

        let updated_user = self.store.update(user).await?;

        tracing::info!(user_id = %updated_user.id, "User updated");

        Ok(updated_user)
    }
}
