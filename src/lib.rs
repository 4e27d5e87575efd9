pub mod account;
pub mod command;
pub mod error;
pub mod logging;
pub mod parser;
pub mod session;
pub mod speech;
