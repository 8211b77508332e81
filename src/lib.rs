pub mod error;
pub mod gestures;
pub mod hub;
pub mod integration;
pub mod platform;

pub use error::{ConfigError, HubError, InstrumentationError};
pub use integration::UserInteractionIntegration;
