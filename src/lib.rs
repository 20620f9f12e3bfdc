pub mod cli;
pub mod commands;
pub mod config;
pub mod contracts;
pub mod encode;
pub mod error;
pub mod etherscan;
pub mod metadata;
