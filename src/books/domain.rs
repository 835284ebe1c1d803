pub mod model;

pub trait Book {
    fn isbn(&self) -> &str;
    fn is_available(&self) -> bool;
}
