pub mod commands;
pub mod parser;
pub mod validate;
