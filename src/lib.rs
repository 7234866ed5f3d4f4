//! Eat Your Feelings: tell it how you feel, get a snack, a recipe and a roast

pub mod app;
pub mod config;
pub mod error;
pub mod flow;
pub mod help;
pub mod input;
pub mod mood;
pub mod notification;
pub mod once;
pub mod pages;
pub mod resolver;
pub mod suggestion;
pub mod widgets;

#[cfg(test)]
mod test_utils;

pub use app::App;
pub use config::{Config, ResolverMode};
pub use error::FeelingsError;
