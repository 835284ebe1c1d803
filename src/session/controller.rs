use tracing::{info, warn};
use crate::accounts::domain::Account;
use crate::accounts::domain::model::AccountEntity;
use crate::catalog::domain::CatalogService;
use crate::core::library::{LibraryError, LibraryResult};
use crate::session::console::{Choice, Console};
use crate::session::menu::MenuAction;

pub const INVALID_INPUT: &str = "Invalid input. Please enter a number.";
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

// Runs the menu of the account's role until the user logs out or input runs out.
pub async fn run_session(account: &AccountEntity, catalog_svc: &mut dyn CatalogService,
                         console: &mut Console) -> LibraryResult<()> {
    let menu = account.role().menu();
    console.println(menu.render().as_str())?;
    loop {
        let choice = match console.read_choice()? {
            Choice::Number(choice) => choice,
            Choice::Invalid => {
                report(console, &LibraryError::invalid_input(INVALID_INPUT))?;
                continue;
            }
            Choice::EndOfInput => {
                info!("input closed during session of {}", account.username());
                return Ok(());
            }
        };
        match menu.action(choice) {
            Some(MenuAction::AddBook) => add_book(catalog_svc, console).await?,
            Some(MenuAction::RemoveBook) => remove_book(catalog_svc, console).await?,
            Some(MenuAction::BorrowBook) => borrow_book(catalog_svc, console).await?,
            Some(MenuAction::ReturnBook) => return_book(catalog_svc, console).await?,
            Some(MenuAction::ViewAllBooks) => view_all_books(catalog_svc, console).await?,
            Some(MenuAction::Logout) => {
                console.println("Logging out...")?;
                info!("logged out {}", account.username());
                return Ok(());
            }
            None => report(console, &LibraryError::invalid_choice(INVALID_CHOICE))?,
        }
    }
}

pub async fn view_all_books(catalog_svc: &dyn CatalogService, console: &mut Console) -> LibraryResult<()> {
    let books = catalog_svc.view_all_books().await?;
    console.println("\n--- List of Available Books ---")?;
    for book in books {
        console.println(book.to_string().as_str())?;
    }
    Ok(())
}

// Prints a recognised failure and keeps the loop going, anything else is handed back.
pub fn report(console: &mut Console, err: &LibraryError) -> LibraryResult<()> {
    match err {
        LibraryError::Runtime { .. } | LibraryError::Serialization { .. } => {
            warn!("unexpected failure {}", err);
        }
        _ => {
            info!("reported {:?}", err);
        }
    }
    console.println(err.message())
}

async fn add_book(catalog_svc: &mut dyn CatalogService, console: &mut Console) -> LibraryResult<()> {
    let Some(title) = console.prompt("Enter book title: ")? else { return Ok(()) };
    let Some(author) = console.prompt("Enter book author: ")? else { return Ok(()) };
    let Some(isbn) = console.prompt("Enter book ISBN: ")? else { return Ok(()) };
    let _ = catalog_svc.add_book(title.as_str(), author.as_str(), isbn.as_str()).await?;
    console.println("Book added successfully!")
}

async fn remove_book(catalog_svc: &mut dyn CatalogService, console: &mut Console) -> LibraryResult<()> {
    let Some(isbn) = console.prompt("Enter ISBN of the book to remove: ")? else { return Ok(()) };
    // reported as removed even when no copy matched
    let _ = catalog_svc.remove_book(isbn.as_str()).await?;
    console.println("Book removed successfully!")
}

async fn borrow_book(catalog_svc: &mut dyn CatalogService, console: &mut Console) -> LibraryResult<()> {
    let Some(isbn) = console.prompt("Enter ISBN of the book to borrow: ")? else { return Ok(()) };
    match catalog_svc.borrow_book(isbn.as_str()).await {
        Ok(_) => console.println("Book borrowed successfully!"),
        Err(err) => report(console, &err),
    }
}

async fn return_book(catalog_svc: &mut dyn CatalogService, console: &mut Console) -> LibraryResult<()> {
    let Some(isbn) = console.prompt("Enter ISBN of the book to return: ")? else { return Ok(()) };
    match catalog_svc.return_book(isbn.as_str()).await {
        Ok(_) => console.println("Book returned successfully!"),
        Err(err) => report(console, &err),
    }
}
