use async_trait::async_trait;
use tracing::{debug, info, warn};
use crate::accounts::domain::{Account, DirectoryService};
use crate::accounts::domain::model::AccountEntity;
use crate::core::library::{LibraryError, LibraryResult, Role};
use crate::core::repository::{LoadStatus, Repository};

pub(crate) struct DirectoryServiceImpl {
    accounts: Vec<AccountEntity>,
    account_repository: Box<dyn Repository<AccountEntity>>,
}

impl DirectoryServiceImpl {
    pub(crate) fn new(account_repository: Box<dyn Repository<AccountEntity>>) -> Self {
        Self {
            accounts: vec![],
            account_repository,
        }
    }
}

#[async_trait]
impl DirectoryService for DirectoryServiceImpl {
    async fn register_user(&mut self, role_choice: i64, username: &str, password: &str) -> LibraryResult<AccountEntity> {
        let role = Role::from_choice(role_choice)
            .ok_or_else(|| LibraryError::invalid_choice("Invalid choice. Registration failed."))?;
        let account = AccountEntity::new(username, password, role);
        self.accounts.push(account.clone());
        info!("registered {} {}", role, username);
        Ok(account)
    }

    async fn login_user(&self, role_choice: i64, username: &str, password: &str) -> LibraryResult<AccountEntity> {
        // the first credential match decides, a wrong role does not fall through to later accounts
        let account = self.accounts.iter()
            .find(|a| a.username() == username && a.validate_password(password))
            .ok_or_else(|| LibraryError::not_found("Invalid username or password. Please try again."))?;
        if Role::from_choice(role_choice) != Some(account.role()) {
            warn!("role mismatch for {} registered as {}", username, account.role());
            return Err(LibraryError::access_denied(
                "Incorrect role selected. Please try again.", Some(account.role().to_string())));
        }
        info!("logged in {} {}", account.role(), username);
        Ok(account.clone())
    }

    async fn load(&mut self) -> LoadStatus {
        let res = self.account_repository.load().await;
        let status = LoadStatus::from_result(res, &mut self.accounts);
        debug!("directory load {:?}", status);
        status
    }

    async fn save(&self) -> LibraryResult<usize> {
        self.account_repository.save(&self.accounts).await
    }
}
