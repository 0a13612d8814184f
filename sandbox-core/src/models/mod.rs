//! Domain models for the site sandbox.
//!
//! # Core Concepts
//!
//! - [`Project`]: An in-memory HTML document plus its bounded snapshot history.
//! - [`Snapshot`]: Immutable copy of a project's document taken right before a mutation.
//! - [`Intent`]: A resolved user request, waiting for approval before it can touch a document.
//! - [`LogEntry`]: One line of the session's chat/activity log.

mod intent;
mod log;
mod project;
mod snapshot;

pub use intent::*;
pub use log::*;
pub use project::*;
pub use snapshot::*;
