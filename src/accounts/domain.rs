pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::accounts::domain::model::AccountEntity;
use crate::core::library::{LibraryResult, Role};
use crate::core::repository::LoadStatus;

// DirectoryService owns the ordered list of registered accounts. Usernames are not
// unique and login picks the first account with matching credentials.
#[async_trait]
pub trait DirectoryService: Sync + Send {
    async fn register_user(&mut self, role_choice: i64, username: &str, password: &str) -> LibraryResult<AccountEntity>;
    async fn login_user(&self, role_choice: i64, username: &str, password: &str) -> LibraryResult<AccountEntity>;
    async fn load(&mut self) -> LoadStatus;
    async fn save(&self) -> LibraryResult<usize>;
}

pub trait Account {
    fn username(&self) -> &str;
    fn role(&self) -> Role;
    fn validate_password(&self, password: &str) -> bool;
    fn is_librarian(&self) -> bool {
        self.role() == Role::Librarian
    }
    fn is_member(&self) -> bool {
        self.role() == Role::Member
    }
}
