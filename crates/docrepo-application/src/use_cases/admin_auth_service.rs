//! Admin Authentication Use Case
//!
//! Signup stores a salted hash of the password; login checks it and issues
//! a signed token bound to the admin email.

use crate::domain_services::auth::{AdminAuthServiceInterface, NewAdmin};
use async_trait::async_trait;
use docrepo_domain::constants::{ADMIN_EXISTS_MESSAGE, INVALID_CREDENTIALS_MESSAGE};
use docrepo_domain::entities::Admin;
use docrepo_domain::error::{Error, Result};
use docrepo_domain::ports::{PasswordHasher, TokenSigner};
use docrepo_domain::repositories::DocumentRepository;
use docrepo_domain::value_objects::{AccessToken, Claims, FieldFilter};
use std::sync::Arc;
use validator::Validate;

/// Admin authentication service implementation
pub struct AdminAuthService {
    admins: Arc<dyn DocumentRepository<Admin>>,
    hasher: Arc<dyn PasswordHasher>,
    signer: Arc<dyn TokenSigner>,
}

impl AdminAuthService {
    /// Create the service with injected dependencies
    pub fn new(
        admins: Arc<dyn DocumentRepository<Admin>>,
        hasher: Arc<dyn PasswordHasher>,
        signer: Arc<dyn TokenSigner>,
    ) -> Self {
        Self {
            admins,
            hasher,
            signer,
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Vec<Admin>> {
        self.admins
            .find_by_fields(FieldFilter::new().eq("email", email))
            .await
    }

    /// Hash on the blocking pool so slow hashers do not stall the executor
    async fn hash_password(&self, plain: String) -> Result<String> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&plain))
            .await
            .map_err(|e| Error::internal(format!("Password hashing task failed: {e}")))?
    }

    async fn verify_password(&self, plain: String, digest: String) -> Result<bool> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.verify(&plain, &digest))
            .await
            .map_err(|e| Error::internal(format!("Password verification task failed: {e}")))?
    }

    fn invalid_credentials() -> Error {
        Error::authentication(INVALID_CREDENTIALS_MESSAGE)
    }
}

fn validation_error(errors: &validator::ValidationErrors) -> Error {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| {
                err.message
                    .as_ref()
                    .map_or_else(|| format!("{field} is invalid"), ToString::to_string)
            })
        })
        .collect();
    messages.sort();
    Error::invalid_argument(messages.join("; "))
}

#[async_trait]
impl AdminAuthServiceInterface for AdminAuthService {
    async fn sign_up(&self, request: NewAdmin) -> Result<Admin> {
        request.validate().map_err(|e| validation_error(&e))?;

        if !self.find_by_email(&request.email).await?.is_empty() {
            tracing::debug!(email = %request.email, "Signup rejected: email taken");
            return Err(Error::conflict(ADMIN_EXISTS_MESSAGE));
        }

        let password_hash = self.hash_password(request.password).await?;
        let admin = Admin::new(request.fullname, request.email, password_hash);

        // The unique index closes the gap between the lookup and the insert
        let created = self.admins.create(admin).await.map_err(|e| match e {
            Error::Conflict { .. } => Error::conflict(ADMIN_EXISTS_MESSAGE),
            other => other,
        })?;

        tracing::info!(
            email = %created.email,
            algorithm = self.hasher.algorithm(),
            "Admin signed up"
        );
        Ok(created)
    }

    async fn login(&self, email: &str, password: &str) -> Result<AccessToken> {
        let mut matches = self.find_by_email(email).await?;
        let admin = match matches.len() {
            1 => matches.remove(0),
            0 => {
                tracing::warn!("Login rejected");
                return Err(Self::invalid_credentials());
            }
            n => {
                tracing::warn!(matches = n, "Login rejected: ambiguous account");
                return Err(Self::invalid_credentials());
            }
        };

        let verified = match self
            .verify_password(password.to_owned(), admin.password.clone())
            .await
        {
            Ok(verified) => verified,
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash could not be read");
                false
            }
        };
        if !verified {
            tracing::warn!("Login rejected");
            return Err(Self::invalid_credentials());
        }

        let token = self.signer.sign(&admin.email)?;
        tracing::info!(email = %admin.email, "Admin logged in");
        Ok(token)
    }

    fn validate_token(&self, token: &str) -> Result<Claims> {
        self.signer.verify(token)
    }
}
