//! End user service - certificate holders.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Certificate, EndUser, EndUserChanges, LoginStatus, NewEndUser, Password};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// End user registration input with a plain text password
#[derive(Debug, Clone)]
pub struct EndUserRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone_mobile: Option<String>,
    pub phone_home: Option<String>,
    pub address_code: Option<String>,
    pub address_detailed: Option<String>,
}

/// End user service trait for dependency injection.
#[async_trait]
pub trait EndUserService: Send + Sync {
    async fn list_end_users(&self) -> AppResult<Vec<EndUser>>;

    async fn get_end_user(&self, id: Uuid) -> AppResult<EndUser>;

    async fn register(&self, registration: EndUserRegistration) -> AppResult<EndUser>;

    async fn update_end_user(&self, id: Uuid, changes: EndUserChanges) -> AppResult<EndUser>;

    /// Delete an end user; their certificates go with them
    async fn delete_end_user(&self, id: Uuid) -> AppResult<()>;

    /// Certificates held by an existing end user
    async fn list_certificates(&self, id: Uuid) -> AppResult<Vec<Certificate>>;

    async fn login(&self, email: String, password: String) -> AppResult<LoginStatus>;
}

/// Concrete implementation of EndUserService using Unit of Work.
pub struct EndUserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> EndUserManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> EndUserService for EndUserManager<U> {
    async fn list_end_users(&self) -> AppResult<Vec<EndUser>> {
        self.uow.end_users().list().await
    }

    async fn get_end_user(&self, id: Uuid) -> AppResult<EndUser> {
        self.uow.end_users().find_by_id(id).await?.ok_or_not_found()
    }

    async fn register(&self, registration: EndUserRegistration) -> AppResult<EndUser> {
        let input = NewEndUser {
            name: registration.name,
            email: registration.email,
            password_hash: Password::new(&registration.password).into_string(),
            phone_mobile: registration.phone_mobile,
            phone_home: registration.phone_home,
            address_code: registration.address_code,
            address_detailed: registration.address_detailed,
        };

        let end_user = self.uow.end_users().create(input).await?;
        tracing::info!(end_user_id = %end_user.id, "End user registered");
        Ok(end_user)
    }

    async fn update_end_user(&self, id: Uuid, changes: EndUserChanges) -> AppResult<EndUser> {
        self.uow.end_users().update(id, changes).await
    }

    async fn delete_end_user(&self, id: Uuid) -> AppResult<()> {
        self.uow.end_users().delete(id).await?;
        tracing::info!(end_user_id = %id, "End user deleted with their certificates");
        Ok(())
    }

    async fn list_certificates(&self, id: Uuid) -> AppResult<Vec<Certificate>> {
        let end_user = self.get_end_user(id).await?;
        self.uow.certificates().list_by_end_user(end_user.id).await
    }

    async fn login(&self, email: String, password: String) -> AppResult<LoginStatus> {
        let end_user = self
            .uow
            .end_users()
            .find_by_email(&email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !Password::from_hash(end_user.password_hash).verify(&password) {
            return Err(AppError::InvalidCredentials);
        }

        self.uow.end_users().record_login(end_user.id).await?;
        tracing::info!(end_user_id = %end_user.id, "End user logged in");
        Ok(LoginStatus::logged_in(end_user.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{MockCertificateRepository, MockEndUserRepository};
    use crate::services::test_support::TestUnitOfWork;

    #[tokio::test]
    async fn test_certificates_of_missing_end_user() {
        let mut end_users = MockEndUserRepository::new();
        end_users.expect_find_by_id().returning(|_| Ok(None));
        let mut certificates = MockCertificateRepository::new();
        certificates.expect_list_by_end_user().never();

        let uow = TestUnitOfWork {
            end_users: Arc::new(end_users),
            certificates: Arc::new(certificates),
            ..TestUnitOfWork::default()
        };
        let result = EndUserManager::new(Arc::new(uow))
            .list_certificates(Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_plain_text() {
        let mut end_users = MockEndUserRepository::new();
        end_users
            .expect_create()
            .withf(|input| input.password_hash != "plain" && input.password_hash.ends_with('='))
            .returning(|input| {
                Ok(EndUser {
                    id: Uuid::new_v4(),
                    name: input.name,
                    email: input.email,
                    email_verified: false,
                    password_hash: input.password_hash,
                    phone_mobile: None,
                    phone_mobile_verified: None,
                    phone_home: None,
                    address_code: None,
                    address_detailed: None,
                    created_date: chrono::Utc::now(),
                    last_login_date: chrono::Utc::now(),
                })
            });

        let uow = TestUnitOfWork {
            end_users: Arc::new(end_users),
            ..TestUnitOfWork::default()
        };
        let registration = EndUserRegistration {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            password: "plain".to_string(),
            phone_mobile: None,
            phone_home: None,
            address_code: None,
            address_detailed: None,
        };
        let end_user = EndUserManager::new(Arc::new(uow))
            .register(registration)
            .await
            .unwrap();

        assert_eq!(end_user.name, "Sam");
    }
}
