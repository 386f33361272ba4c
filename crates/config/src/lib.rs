//! Configuration for the tutor client.

mod settings;

pub use settings::{Settings, DEFAULT_SERVER_URL};
