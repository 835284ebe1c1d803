use std::env;
use std::path::PathBuf;

pub const BOOKS_FILE: &str = "books.json";
pub const USERS_FILE: &str = "users.json";

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub data_dir: PathBuf,
    pub books_file: String,
    pub users_file: String,
    pub log_level: String,
    pub log_json: bool,
}

impl Configuration {
    pub fn new(data_dir: &str) -> Self {
        Configuration {
            data_dir: PathBuf::from(data_dir),
            books_file: BOOKS_FILE.to_string(),
            users_file: USERS_FILE.to_string(),
            log_level: "warn".to_string(),
            log_json: false,
        }
    }

    // LMS_DATA_DIR, LMS_LOG_LEVEL and LMS_LOG_JSON override the defaults
    pub fn from_env() -> Self {
        let mut config = Configuration::new(
            env::var("LMS_DATA_DIR").unwrap_or_else(|_| ".".to_string()).as_str());
        if let Ok(level) = env::var("LMS_LOG_LEVEL") {
            config.log_level = level;
        }
        if let Ok(json) = env::var("LMS_LOG_JSON") {
            config.log_json = matches!(json.to_lowercase().as_str(), "1" | "true" | "yes");
        }
        config
    }

    pub fn books_path(&self) -> PathBuf {
        self.data_dir.join(&self.books_file)
    }

    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join(&self.users_file)
    }
}
