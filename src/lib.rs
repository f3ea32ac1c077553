//! motivar: print a random motivational quote, with optional remote quote
//! feeds cached in a local SQLite database.

pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod feed;
pub mod hash;
pub mod models;
pub mod quotes;
