use std::sync::Arc;

use crate::errors::Result;
use crate::users::users_errors::UserError;
use crate::users::users_model::{NewUser, User};
use crate::users::users_traits::{UserRepositoryTrait, UserServiceTrait};
use async_trait::async_trait;

pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        UserService { repository }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn register_user(&self, new_user: NewUser) -> Result<User> {
        let username = new_user.username.trim().to_string();
        if username.is_empty() {
            return Err(UserError::EmptyUsername.into());
        }

        if self.repository.get_user_by_username(&username)?.is_some() {
            return Err(UserError::UsernameTaken(username).into());
        }

        let user = self
            .repository
            .create_user(NewUser {
                username,
                ..new_user
            })
            .await?;
        log::debug!("Registered user {}", user.id);
        Ok(user)
    }

    fn get_user_by_id(&self, user_id: &str) -> Result<Option<User>> {
        self.repository.get_user_by_id(user_id)
    }

    fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.repository.get_user_by_username(username)
    }
}
