pub mod article;
pub mod common;
pub mod health;
pub mod search;
