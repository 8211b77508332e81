//! The monitoring subsystem collaborator.
//!
//! The instrumentation layer only ever hands breadcrumbs over. Transport,
//! scoping and sampling belong to whatever sits behind [`Hub`].

pub mod breadcrumb;
pub mod hub;
pub mod metrics;
pub mod options;

pub use breadcrumb::*;
pub use hub::*;
pub use metrics::*;
pub use options::*;
