pub mod config;
pub mod invite;
pub mod shell;
pub mod view;
