//! Window callback interception.
//!
//! # SAFETY INVARIANT
//! Instrumentation is a READ-ONLY side-effect layer. The wrapped callback
//! sees every event exactly as dispatched and its answer is what the window
//! gets back.

pub mod callback;
pub mod detector;
pub mod event;
pub mod noop;
pub mod window_callback;

pub use callback::{EventHandler, WindowCallback};
pub use detector::{Direction, Gesture, GestureDetector};
pub use event::*;
pub use noop::NoOpWindowCallback;
pub use window_callback::{BreadcrumbWindowCallback, SurfaceContext};
