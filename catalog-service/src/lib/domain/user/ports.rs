use async_trait::async_trait;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserDraft;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserKey;
use crate::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Retrieve every registered user.
    ///
    /// # Returns
    /// All users; an empty vector when none are registered
    ///
    /// # Errors
    /// * `Store` - Store operation failed
    async fn get_all(&self) -> Result<Vec<User>, UserError>;

    /// Retrieve the user matching a lookup key.
    ///
    /// # Arguments
    /// * `key` - Column and value to match (id or email)
    ///
    /// # Errors
    /// * `NotFound` - No user matches
    /// * `Store` - Store operation failed
    async fn get_by(&self, key: &UserKey) -> Result<User, UserError>;

    /// Store a new user.
    ///
    /// # Arguments
    /// * `new_user` - Validated fields with an already hashed password
    ///
    /// # Returns
    /// Created user, including its generated id
    ///
    /// # Errors
    /// * `Store` - Store operation failed
    async fn create(&self, new_user: NewUser) -> Result<User, UserError>;

    /// Replace a user's profile fields.
    ///
    /// # Arguments
    /// * `id` - User ID to update
    /// * `draft` - New name and email; the password hash is kept
    ///
    /// # Returns
    /// Updated user entity
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `Store` - Store operation failed, including the row vanishing before the write
    async fn update(&self, id: &UserId, draft: UserDraft) -> Result<User, UserError>;
}
