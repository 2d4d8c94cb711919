pub mod compare;
pub mod list_all;
pub mod list_files;
pub mod search;
