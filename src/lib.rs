pub mod cli;
pub mod config;
pub mod error;
pub mod player;
pub mod render;
pub mod report;
pub mod scanner;
