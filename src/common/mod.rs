pub mod args;
pub mod colors;
pub mod config;
pub mod constants;
pub mod error;
pub mod font;
pub mod lines;
pub mod spectrum;
