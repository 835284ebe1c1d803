use serde::{Deserialize, Serialize};
use crate::accounts::domain::Account;
use crate::core::library::Role;

// AccountEntity is a registered member or librarian. The password is kept in plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountEntity {
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl AccountEntity {
    pub fn new(username: &str, password: &str, role: Role) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            role,
        }
    }
}

impl Account for AccountEntity {
    fn username(&self) -> &str {
        self.username.as_str()
    }

    fn role(&self) -> Role {
        self.role
    }

    fn validate_password(&self, password: &str) -> bool {
        self.password == password
    }
}
