//! `portfolio` - A personal portfolio website
//!
//! This library provides the pages, portfolio content and the file-backed
//! contact message log behind the `portfolio` binary.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod message;
pub mod pages;
pub mod server;
pub mod storage;

pub use catalog::{Portfolio, PortfolioStats};
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use message::{ContactMessage, ContactSubmission};
pub use storage::MessageLog;
