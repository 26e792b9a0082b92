//! UI components rendered inside the client bootstrap

pub mod logo;
pub mod pages;
pub mod router;
