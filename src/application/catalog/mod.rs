mod availability;
mod catalog_service;
mod errors;

#[allow(unused_imports)]
pub use availability::{Availability, MAX_SCAN_DAYS, MAX_TITLES, find_availability};
#[allow(unused_imports)]
pub use catalog_service::{
    ServiceDependencies, create_book, delete_book, list_books, replace_book, search_books,
    update_book_status,
};
#[allow(unused_imports)]
pub use errors::{CatalogError, Result};
