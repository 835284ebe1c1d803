use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    // non-numeric entry where a number was expected
    InvalidInput {
        message: String,
    },
    // numeric entry outside of the offered menu or role choices
    InvalidChoice {
        message: String,
    },
    NotFound {
        message: String,
    },
    AccessDenied {
        message: String,
        reason_code: Option<String>,
    },
    // The book exists in a state that does not allow the operation, e.g. borrowing a
    // book that is already checked out. Missing isbn is reported the same way.
    StateConflict {
        message: String,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn invalid_input(message: &str) -> LibraryError {
        LibraryError::InvalidInput { message: message.to_string() }
    }

    pub fn invalid_choice(message: &str) -> LibraryError {
        LibraryError::InvalidChoice { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn access_denied(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::AccessDenied { message: message.to_string(), reason_code }
    }

    pub fn state_conflict(message: &str) -> LibraryError {
        LibraryError::StateConflict { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    // message is what gets shown at the console
    pub fn message(&self) -> &str {
        match self {
            LibraryError::InvalidInput { message } => { message }
            LibraryError::InvalidChoice { message } => { message }
            LibraryError::NotFound { message } => { message }
            LibraryError::AccessDenied { message, .. } => { message }
            LibraryError::StateConflict { message } => { message }
            LibraryError::Serialization { message } => { message }
            LibraryError::Runtime { message, .. } => { message }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::AccessDenied { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            _ => {
                write!(f, "{}", self.message())
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for library operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Role {
    Member,
    Librarian,
}

impl Role {
    // role selection as numbered in the register and login prompts
    pub fn from_choice(choice: i64) -> Option<Role> {
        match choice {
            1 => Some(Role::Member),
            2 => Some(Role::Librarian),
            _ => None,
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Librarian" => Role::Librarian,
            _ => Role::Member,
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Role::Member => write!(f, "Member"),
            Role::Librarian => write!(f, "Librarian"),
        }
    }
}
