use tracing::{error, info};
use crate::accounts::domain::DirectoryService;
use crate::accounts::factory::create_directory_service;
use crate::catalog::domain::CatalogService;
use crate::catalog::factory::create_catalog_service;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::{LoadStatus, RepositoryStore};
use crate::session::console::{parse_number, Choice, Console, CHOICE_PROMPT};
use crate::session::controller::{report, run_session, view_all_books, INVALID_CHOICE, INVALID_INPUT};
use crate::session::menu::{GuestAction, GUEST_MENU};

// App drives the guest menu, registration and login, and owns the catalog and the
// directory for the lifetime of the process.
pub struct App {
    catalog_svc: Box<dyn CatalogService>,
    directory_svc: Box<dyn DirectoryService>,
    console: Console,
}

impl App {
    pub async fn new(config: &Configuration, store: RepositoryStore, console: Console) -> Self {
        Self {
            catalog_svc: create_catalog_service(config, store).await,
            directory_svc: create_directory_service(config, store).await,
            console,
        }
    }

    // Loads saved state, loops over the guest menu and saves on exit or end of input.
    // The save also runs when the loop fails on a console error.
    pub async fn run(&mut self) -> LibraryResult<()> {
        let res = self.run_loop().await;
        if let Err(err) = &res {
            error!("session aborted {}", err);
        }
        self.save().await?;
        self.console.println("Exiting the system...")?;
        res
    }

    async fn run_loop(&mut self) -> LibraryResult<()> {
        self.load().await?;
        loop {
            self.console.println(GUEST_MENU.render().as_str())?;
            let choice = match self.console.read_choice()? {
                Choice::Number(choice) => choice,
                Choice::Invalid => {
                    report(&mut self.console, &LibraryError::invalid_input(INVALID_INPUT))?;
                    continue;
                }
                Choice::EndOfInput => {
                    info!("input closed, exiting");
                    break;
                }
            };
            match GUEST_MENU.action(choice) {
                Some(GuestAction::Register) => self.register().await?,
                Some(GuestAction::Login) => self.login().await?,
                Some(GuestAction::ViewBooks) => view_all_books(self.catalog_svc.as_ref(), &mut self.console).await?,
                Some(GuestAction::BuyBook) => self.buy_book().await?,
                Some(GuestAction::Exit) => break,
                None => report(&mut self.console, &LibraryError::invalid_choice(INVALID_CHOICE))?,
            }
        }
        Ok(())
    }

    async fn load(&mut self) -> LibraryResult<()> {
        match self.directory_svc.load().await {
            LoadStatus::Loaded(_) => self.console.println("Users loaded successfully.")?,
            LoadStatus::Missing => self.console.println("No saved user data found.")?,
            LoadStatus::Corrupt(err) => {
                error!("failed to load users {}", err);
                self.console.println("Error loading users.")?
            }
        }
        match self.catalog_svc.load().await {
            LoadStatus::Loaded(_) => self.console.println("Data loaded successfully."),
            LoadStatus::Missing => self.console.println("No saved data found."),
            LoadStatus::Corrupt(err) => {
                error!("failed to load books {}", err);
                self.console.println("Error loading data.")
            }
        }
    }

    async fn save(&mut self) -> LibraryResult<()> {
        match self.directory_svc.save().await {
            Ok(_) => self.console.println("Users saved successfully.")?,
            Err(err) => {
                error!("failed to save users {}", err);
                self.console.println("Error saving users.")?
            }
        }
        match self.catalog_svc.save().await {
            Ok(_) => self.console.println("Data saved successfully."),
            Err(err) => {
                error!("failed to save books {}", err);
                self.console.println("Error saving data.")
            }
        }
    }

    // Asks for the role number, then the credentials. A role that is not a number
    // abandons the action instead of prompting again.
    fn read_role_and_credentials(&mut self, heading: &str) -> LibraryResult<Option<(i64, String, String)>> {
        self.console.println(heading)?;
        let Some(line) = self.console.prompt(CHOICE_PROMPT)? else { return Ok(None) };
        let Some(role_choice) = parse_number(line.as_str()) else {
            report(&mut self.console, &LibraryError::invalid_input(INVALID_INPUT))?;
            return Ok(None);
        };
        let Some(username) = self.console.prompt("Enter username: ")? else { return Ok(None) };
        let Some(password) = self.console.prompt("Enter password: ")? else { return Ok(None) };
        Ok(Some((role_choice, username, password)))
    }

    async fn register(&mut self) -> LibraryResult<()> {
        let Some((role_choice, username, password)) =
            self.read_role_and_credentials("Register as:\n1. Member\n2. Librarian")? else { return Ok(()) };
        match self.directory_svc.register_user(role_choice, username.as_str(), password.as_str()).await {
            Ok(account) => self.console.println(format!("{} registered successfully!", account.role).as_str()),
            Err(err) => report(&mut self.console, &err),
        }
    }

    async fn login(&mut self) -> LibraryResult<()> {
        let Some((role_choice, username, password)) =
            self.read_role_and_credentials("Login as:\n1. Member\n2. Librarian")? else { return Ok(()) };
        match self.directory_svc.login_user(role_choice, username.as_str(), password.as_str()).await {
            Ok(account) => {
                self.console.println("Login successful!")?;
                run_session(&account, self.catalog_svc.as_mut(), &mut self.console).await
            }
            Err(err) => report(&mut self.console, &err),
        }
    }

    async fn buy_book(&mut self) -> LibraryResult<()> {
        let Some(isbn) = self.console.prompt("Enter ISBN of the book to buy: ")? else { return Ok(()) };
        match self.catalog_svc.buy_book(isbn.as_str()).await {
            Ok(_) => self.console.println("Book bought successfully!"),
            Err(err) => report(&mut self.console, &err),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use crate::app::App;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::session::console::Console;
    use crate::session::console::testing::CapturedOutput;
    use crate::session::console::testing::{scripted, scripted_bytes};

    async fn run_script(config: &Configuration, store: RepositoryStore, input: &str) -> String {
        run_console(config, store, scripted(input)).await
    }

    async fn run_console(config: &Configuration, store: RepositoryStore, scripted: (Console, CapturedOutput)) -> String {
        let (console, output) = scripted;
        let mut app = App::new(config, store, console).await;
        app.run().await.expect("should run app");
        output.contents()
    }

    #[tokio::test]
    async fn test_should_start_empty_and_exit() {
        let out = run_script(&Configuration::new("test"), RepositoryStore::InMemory, "5\n").await;
        assert!(out.starts_with("No saved user data found.\nNo saved data found.\n"));
        assert!(out.contains("--- Welcome to the Library Management System ---"));
        assert!(out.ends_with("Users saved successfully.\nData saved successfully.\nExiting the system...\n"));
    }

    #[tokio::test]
    async fn test_should_reject_bad_top_level_input() {
        let out = run_script(&Configuration::new("test"), RepositoryStore::InMemory, "x\n7\n5\n").await;
        assert!(out.contains("Invalid input. Please enter a number."));
        assert!(out.contains("Invalid choice. Please try again."));
        assert_eq!(3, out.matches("--- Welcome to the Library Management System ---").count());
    }

    #[tokio::test]
    async fn test_should_abandon_login_on_non_numeric_role() {
        let out = run_script(&Configuration::new("test"), RepositoryStore::InMemory, "2\nabc\n5\n").await;
        assert!(out.contains("Login as:"));
        assert_eq!(1, out.matches("Invalid input. Please enter a number.").count());
        assert_eq!(0, out.matches("Enter username: ").count());
        assert_eq!(0, out.matches("Enter password: ").count());
        assert_eq!(2, out.matches("--- Welcome to the Library Management System ---").count());
        assert!(out.ends_with("Exiting the system...\n"));
    }

    #[tokio::test]
    async fn test_should_register_and_login_by_role() {
        let input = "1\n1\nalice\npw\n2\n2\nalice\npw\n2\n1\nalice\npw\n4\n5\n";
        let out = run_script(&Configuration::new("test"), RepositoryStore::InMemory, input).await;
        assert!(out.contains("Member registered successfully!"));
        assert!(out.contains("Incorrect role selected. Please try again."));
        assert!(out.contains("Login successful!"));
        assert!(out.contains("--- Member Menu ---"));
        assert!(out.contains("Logging out..."));
    }

    #[tokio::test]
    async fn test_should_fail_registration_on_bad_role() {
        let input = "1\n3\nalice\npw\n1\nabc\n2\n1\nalice\npw\n5\n";
        let out = run_script(&Configuration::new("test"), RepositoryStore::InMemory, input).await;
        assert!(out.contains("Invalid choice. Registration failed."));
        // non-numeric role abandons the action without asking for credentials
        assert_eq!(1, out.matches("Invalid input. Please enter a number.").count());
        assert_eq!(2, out.matches("Enter username: ").count());
        assert!(out.contains("Invalid username or password. Please try again."));
    }

    #[tokio::test]
    async fn test_should_let_guests_view_and_buy() {
        let input = "1\n2\nbob\npw\n2\n2\nbob\npw\n1\nDune\nHerbert\n111\n4\n3\n4\n111\n4\n111\n3\n5\n";
        let out = run_script(&Configuration::new("test"), RepositoryStore::InMemory, input).await;
        assert!(out.contains("Librarian registered successfully!"));
        assert!(out.contains("Book added successfully!"));
        assert_eq!(1, out.matches("Title: Dune, Author: Herbert, ISBN: 111, Available: true").count());
        assert_eq!(1, out.matches("Book bought successfully!").count());
        assert_eq!(1, out.matches("Book not found.").count());
    }

    #[tokio::test]
    async fn test_should_persist_between_runs() {
        let dir = TempDir::new().expect("should create temp dir");
        let config = Configuration::new(dir.path().to_str().expect("should be utf-8 path"));

        let input = "1\n2\nbob\npw\n1\n1\nalice\npw\n2\n2\nbob\npw\n1\nDune\nHerbert\n111\n1\nEmma\nAusten\n222\n4\n\
                     2\n1\nalice\npw\n1\n222\n4\n5\n";
        let out = run_script(&config, RepositoryStore::JsonFile, input).await;
        assert!(out.contains("Book borrowed successfully!"));
        assert!(config.books_path().exists());
        assert!(config.users_path().exists());

        let out = run_script(&config, RepositoryStore::JsonFile, "2\n1\nalice\npw\n3\n4\n5\n").await;
        assert!(out.starts_with("Users loaded successfully.\nData loaded successfully.\n"));
        assert!(out.contains("Login successful!"));
        let dune = out.find("Title: Dune, Author: Herbert, ISBN: 111, Available: true").expect("should list dune");
        let emma = out.find("Title: Emma, Author: Austen, ISBN: 222, Available: false").expect("should list emma");
        assert!(dune < emma);
    }

    #[tokio::test]
    async fn test_should_recover_from_corrupt_files() {
        let dir = TempDir::new().expect("should create temp dir");
        let config = Configuration::new(dir.path().to_str().expect("should be utf-8 path"));
        std::fs::write(config.books_path(), b"garbage").expect("should write books");
        std::fs::write(config.users_path(), b"[{\"username\": 1}]").expect("should write users");

        let out = run_script(&config, RepositoryStore::JsonFile, "3\n5\n").await;
        assert!(out.starts_with("Error loading users.\nError loading data.\n"));
        assert!(out.contains("Data saved successfully."));
        let saved = std::fs::read_to_string(config.books_path()).expect("should read books");
        assert_eq!("[]", saved.trim());
    }

    #[tokio::test]
    async fn test_should_save_on_end_of_input() {
        let dir = TempDir::new().expect("should create temp dir");
        let config = Configuration::new(dir.path().to_str().expect("should be utf-8 path"));

        let out = run_script(&config, RepositoryStore::JsonFile, "1\n1\nalice\npw\n").await;
        assert!(out.ends_with("Exiting the system...\n"));
        let saved = std::fs::read_to_string(config.users_path()).expect("should read users");
        assert!(saved.contains("alice"));
    }

    #[tokio::test]
    async fn test_should_keep_going_after_garbled_top_level_input() {
        let dir = TempDir::new().expect("should create temp dir");
        let config = Configuration::new(dir.path().to_str().expect("should be utf-8 path"));

        let mut input = b"1\n1\nalice\npw\n".to_vec();
        input.extend_from_slice(b"\xff\xfe\n5\n");
        let out = run_console(&config, RepositoryStore::JsonFile, scripted_bytes(&input)).await;
        assert_eq!(1, out.matches("Invalid input. Please enter a number.").count());
        assert_eq!(3, out.matches("--- Welcome to the Library Management System ---").count());
        assert!(out.ends_with("Users saved successfully.\nData saved successfully.\nExiting the system...\n"));
        let saved = std::fs::read_to_string(config.users_path()).expect("should read users");
        assert!(saved.contains("alice"));
    }

    #[tokio::test]
    async fn test_should_keep_going_after_garbled_session_input() {
        let dir = TempDir::new().expect("should create temp dir");
        let config = Configuration::new(dir.path().to_str().expect("should be utf-8 path"));

        let mut input = b"1\n1\nalice\npw\n2\n1\nalice\npw\n".to_vec();
        input.extend_from_slice(b"\xff\n4\n5\n");
        let out = run_console(&config, RepositoryStore::JsonFile, scripted_bytes(&input)).await;
        assert!(out.contains("Login successful!"));
        assert_eq!(1, out.matches("Invalid input. Please enter a number.").count());
        assert_eq!(2, out.matches("--- Member Menu ---").count());
        assert!(out.contains("Logging out..."));
        let saved = std::fs::read_to_string(config.users_path()).expect("should read users");
        assert!(saved.contains("alice"));
    }
}
