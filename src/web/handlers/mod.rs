//! HTML page handlers.

mod home;
mod records;

pub use home::home_handler;
pub use records::{
    delete_handler, edit_page_handler, list_page_handler, new_page_handler, submit_handler,
};
