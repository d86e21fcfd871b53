pub mod common;
pub mod parse;
pub mod types;
