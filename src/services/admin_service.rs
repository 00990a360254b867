//! Admin service - registration, maintenance and login of administrators.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Admin, AdminChanges, LoginStatus, NewAdmin, Password};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Admin registration input with a plain text password
#[derive(Debug, Clone)]
pub struct AdminRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone_mobile: Option<String>,
}

/// Admin service trait for dependency injection.
#[async_trait]
pub trait AdminService: Send + Sync {
    async fn list_admins(&self) -> AppResult<Vec<Admin>>;

    async fn get_admin(&self, id: Uuid) -> AppResult<Admin>;

    /// Hash the password and store a new admin
    async fn register(&self, registration: AdminRegistration) -> AppResult<Admin>;

    async fn update_admin(&self, id: Uuid, changes: AdminChanges) -> AppResult<Admin>;

    async fn delete_admin(&self, id: Uuid) -> AppResult<()>;

    /// Check credentials and stamp the login time
    async fn login(&self, email: String, password: String) -> AppResult<LoginStatus>;

    /// Confirm the admin exists; no state is persisted
    async fn logout(&self, id: Uuid) -> AppResult<LoginStatus>;
}

/// Concrete implementation of AdminService using Unit of Work.
pub struct AdminManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> AdminManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> AdminService for AdminManager<U> {
    async fn list_admins(&self) -> AppResult<Vec<Admin>> {
        self.uow.admins().list().await
    }

    async fn get_admin(&self, id: Uuid) -> AppResult<Admin> {
        self.uow.admins().find_by_id(id).await?.ok_or_not_found()
    }

    async fn register(&self, registration: AdminRegistration) -> AppResult<Admin> {
        let input = NewAdmin {
            first_name: registration.first_name,
            last_name: registration.last_name,
            email: registration.email,
            password_hash: Password::new(&registration.password).into_string(),
            phone_mobile: registration.phone_mobile,
        };

        let admin = self.uow.admins().create(input).await?;
        tracing::info!(admin_id = %admin.id, name = %admin.full_name(), "Admin registered");
        Ok(admin)
    }

    async fn update_admin(&self, id: Uuid, changes: AdminChanges) -> AppResult<Admin> {
        self.uow.admins().update(id, changes).await
    }

    async fn delete_admin(&self, id: Uuid) -> AppResult<()> {
        self.uow.admins().delete(id).await?;
        tracing::info!(admin_id = %id, "Admin deleted");
        Ok(())
    }

    async fn login(&self, email: String, password: String) -> AppResult<LoginStatus> {
        let admin = self
            .uow
            .admins()
            .find_by_email(&email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !Password::from_hash(admin.password_hash).verify(&password) {
            tracing::debug!(admin_id = %admin.id, "Admin login rejected");
            return Err(AppError::InvalidCredentials);
        }

        self.uow.admins().record_login(admin.id).await?;
        tracing::info!(admin_id = %admin.id, "Admin logged in");
        Ok(LoginStatus::logged_in(admin.id))
    }

    async fn logout(&self, id: Uuid) -> AppResult<LoginStatus> {
        let admin = self.get_admin(id).await?;
        Ok(LoginStatus::logged_out(admin.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hash_password;
    use crate::infra::MockAdminRepository;
    use crate::services::test_support::TestUnitOfWork;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn admin(id: Uuid, password: &str) -> Admin {
        Admin {
            id,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@qardless.com".to_string(),
            email_verified: false,
            password_hash: hash_password(password),
            phone_mobile: None,
            phone_mobile_verified: false,
            created_date: Utc::now(),
            last_login_date: Utc::now(),
        }
    }

    fn service(repo: MockAdminRepository) -> AdminManager<TestUnitOfWork> {
        let uow = TestUnitOfWork {
            admins: Arc::new(repo),
            ..TestUnitOfWork::default()
        };
        AdminManager::new(Arc::new(uow))
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let mut repo = MockAdminRepository::new();
        repo.expect_create()
            .withf(|input| input.password_hash == hash_password("hunter2"))
            .returning(|input| {
                let mut stored = admin(Uuid::new_v4(), "hunter2");
                stored.email = input.email;
                Ok(stored)
            });

        let result = service(repo)
            .register(AdminRegistration {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: "ada@qardless.com".to_string(),
                password: "hunter2".to_string(),
                phone_mobile: None,
            })
            .await;

        assert_eq!(result.unwrap().email, "ada@qardless.com");
    }

    #[tokio::test]
    async fn test_login_success_records_login() {
        let id = Uuid::new_v4();
        let mut repo = MockAdminRepository::new();
        repo.expect_find_by_email()
            .with(eq("ada@qardless.com"))
            .returning(move |_| Ok(Some(admin(id, "secret"))));
        repo.expect_record_login()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(()));

        let status = service(repo)
            .login("ada@qardless.com".to_string(), "secret".to_string())
            .await
            .unwrap();

        assert_eq!(status, LoginStatus::logged_in(id));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut repo = MockAdminRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Ok(Some(admin(Uuid::new_v4(), "secret"))));
        repo.expect_record_login().never();

        let result = service(repo)
            .login("ada@qardless.com".to_string(), "wrong".to_string())
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let mut repo = MockAdminRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));

        let result = service(repo)
            .login("nobody@qardless.com".to_string(), "secret".to_string())
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_logout_missing_admin() {
        let mut repo = MockAdminRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let result = service(repo).logout(Uuid::new_v4()).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_logout_returns_logged_out() {
        let id = Uuid::new_v4();
        let mut repo = MockAdminRepository::new();
        repo.expect_find_by_id()
            .with(eq(id))
            .returning(move |id| Ok(Some(admin(id, "secret"))));

        let status = service(repo).logout(id).await.unwrap();

        assert!(!status.is_logged_in);
        assert_eq!(status.id, id);
    }
}
