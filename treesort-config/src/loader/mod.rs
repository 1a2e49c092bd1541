pub mod error;
pub mod spec_file;
