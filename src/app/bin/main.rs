use lms::app::App;
use lms::core::domain::Configuration;
use lms::core::library::LibraryError;
use lms::core::repository::RepositoryStore;
use lms::session::console::Console;
use lms::utils::logging::setup_tracing;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), LibraryError> {
    let config = Configuration::from_env();
    setup_tracing(&config)?;

    let mut app = App::new(&config, RepositoryStore::JsonFile, Console::stdio()).await;
    app.run().await
}
