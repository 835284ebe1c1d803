pub mod accounts;
pub mod app;
pub mod books;
pub mod catalog;
pub mod core;
pub mod session;
pub mod utils;
