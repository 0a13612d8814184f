//! Core engine of the site sandbox.
//!
//! Raw command text is resolved to an [`Intent`], held as a single pending
//! proposal, and only applied to the active project's document on explicit
//! approval. Every applied mutation is preceded by a snapshot of the
//! document, kept in a bounded per-project history that supports restore
//! and fork.
//!
//! [`Sandbox`] is the entry point for hosts; the other modules are the leaf
//! pieces it composes and can be used on their own.

pub mod actions;
pub mod advisor;
pub mod error;
pub mod models;
pub mod mutator;
pub mod plan;
pub mod recent;
pub mod registry;
pub mod resolver;
pub mod session;
pub mod snapshot;
pub mod templates;
pub mod wizard;
pub mod workflow;

pub use error::{Result, SandboxError};
pub use models::*;
pub use registry::ProjectRegistry;
pub use session::{ApplyResult, PendingView, Sandbox, Submission};
pub use workflow::{ProposalState, ProposalWorkflow};
