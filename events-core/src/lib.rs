//! Core types for bristol-events.
//!
//! - `event`: the on-disk record format and the loaded `Event`
//! - `loader`: recursive discovery and decoding of record files
//! - `window`: time window filtering
//! - `agenda`: chronological ordering and day grouping
//! - `mirror`: keeping the local copy of the events repository up to date
//! - `config`: user configuration

pub mod agenda;
pub mod config;
pub mod error;
pub mod event;
pub mod loader;
pub mod mirror;
pub mod window;

#[cfg(test)]
mod testing;

pub use error::{EventsError, EventsResult};
pub use event::{Event, Location};
