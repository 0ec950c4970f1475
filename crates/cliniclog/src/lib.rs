//! `cliniclog` - An in-memory visit log for a student clinic front desk
//!
//! This library provides the record store, table rendering and interactive
//! menu behind the `cliniclog` binary. Records live only for the session.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod menu;
pub mod record;
pub mod report;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use menu::Session;
pub use record::{Field, VisitRecord};
pub use store::RecordStore;
