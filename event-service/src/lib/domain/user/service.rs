use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;

use crate::domain::pagination::Pagination;
use crate::domain::user::models::AccessToken;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::LoginIdentifier;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Password;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::PasswordError;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Owns the credential workflows: registration, login and per-request
/// identity resolution. bcrypt work is moved off the async workers with
/// `spawn_blocking`.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token issuance
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    async fn hash_password(&self, password: &Password) -> Result<String, UserError> {
        let authenticator = Arc::clone(&self.authenticator);
        let password = password.expose().to_string();

        let hash = tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
            .await?
            .map_err(PasswordError::from)?;

        Ok(hash)
    }

    fn ensure_owner(actor: &User, id: &UserId) -> Result<(), UserError> {
        if actor.id != *id {
            tracing::warn!(actor = %actor.id, target = %id, "Rejected change to another account");
            return Err(UserError::Forbidden(id.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        if self
            .repository
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            return Err(UserError::UsernameAlreadyExists(command.username.to_string()));
        }

        if self.repository.find_by_email(&command.email).await?.is_some() {
            return Err(UserError::EmailAlreadyExists(command.email.to_string()));
        }

        let password_hash = self.hash_password(&command.password).await?;

        let created_user = self
            .repository
            .create(NewUser {
                username: command.username,
                email: command.email,
                password_hash,
            })
            .await?;

        tracing::info!(
            user_id = %created_user.id,
            username = %created_user.username,
            "User registered"
        );

        Ok(created_user)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn list_users(&self, pagination: Pagination) -> Result<Vec<User>, UserError> {
        self.repository.list(pagination).await
    }

    async fn update_user(
        &self,
        actor: &User,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        Self::ensure_owner(actor, id)?;

        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))?;

        if let Some(new_password) = command.password {
            user.password_hash = self.hash_password(&new_password).await?;
        }

        let updated_user = self.repository.update(user).await?;
        tracing::info!(user_id = %updated_user.id, "User updated");

        Ok(updated_user)
    }

    async fn delete_user(&self, actor: &User, id: &UserId) -> Result<(), UserError> {
        Self::ensure_owner(actor, id)?;

        self.repository.delete(id).await?;
        tracing::info!(user_id = %id, "User deleted");

        Ok(())
    }

    async fn authenticate(
        &self,
        identifier: &LoginIdentifier,
        password: &Password,
    ) -> Result<User, UserError> {
        let user = match identifier {
            LoginIdentifier::Username(username) => {
                self.repository.find_by_username(username).await?
            }
            LoginIdentifier::Email(email) => self.repository.find_by_email(email).await?,
        };

        let authenticator = Arc::clone(&self.authenticator);
        let stored_hash = user.as_ref().map(|u| u.password_hash.clone());
        let password = password.expose().to_string();

        let verified = tokio::task::spawn_blocking(move || {
            authenticator.check_credentials(&password, stored_hash.as_deref())
        })
        .await?;

        match user {
            Some(user) if verified => {
                tracing::info!(user_id = %user.id, "User authenticated");
                Ok(user)
            }
            Some(_) => {
                tracing::warn!(identifier = %identifier, reason = "password mismatch", "Login rejected");
                Err(UserError::InvalidCredentials)
            }
            None => {
                tracing::warn!(identifier = %identifier, reason = "unknown account", "Login rejected");
                Err(UserError::InvalidCredentials)
            }
        }
    }

    async fn issue_token(&self, user: &User) -> Result<AccessToken, UserError> {
        let result = self.authenticator.issue_token(user.username.as_str())?;
        Ok(result.into())
    }

    async fn resolve_identity(&self, token: &str) -> Result<User, UserError> {
        let claims = self
            .authenticator
            .validate_token(token)
            .map_err(|_| UserError::Unauthenticated)?;

        let subject = claims.subject().ok_or_else(|| {
            tracing::debug!("Token has no subject");
            UserError::Unauthenticated
        })?;

        let username = Username::new(subject.to_string()).map_err(|e| {
            tracing::debug!(error = %e, "Token subject is not a valid username");
            UserError::Unauthenticated
        })?;

        self.repository
            .find_by_username(&username)
            .await?
            .ok_or_else(|| {
                tracing::debug!(username = %username, "Token subject no longer exists");
                UserError::Unauthenticated
            })
    }
}
