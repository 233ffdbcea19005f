//! Jitsi Meet bridge core.
//!
//! Pure Rust crate with no platform dependencies: turns meeting URLs into
//! conference options and relays SDK events to the host application.
//! Consumed by native shells via UniFFI bindings.

pub mod config;
pub mod errors;
pub mod events;
pub mod factory;
pub mod flags;
pub mod parser;
pub mod toolbar;

pub use config::{ConferenceConfig, ConfigParts, FlagValue, OverrideValue, UserInfo};
pub use errors::{BridgeError, ParseError, RelayError};
pub use events::{ConferenceEvent, EventListener, EventRelay, RelayedEvent};
pub use factory::conference_options;
pub use flags::FeatureFlag;
pub use parser::UrlConfigParser;
