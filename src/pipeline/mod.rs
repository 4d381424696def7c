//! Session pipeline - search, select, load photos, analyze.
//!
//! The [`Orchestrator`] owns a [`PipelineState`] and drives an
//! [`EnrichmentService`](crate::enrichment::EnrichmentService) through it.
//! Observers subscribe to a `watch` channel and get each committed state:
//!
//! ```ignore
//! let orchestrator = Orchestrator::new(service, prompt);
//! let mut rx = orchestrator.subscribe();
//!
//! orchestrator.submit_query("Kumpelnest").await;
//! let venue = rx.borrow_and_update().venues.first().cloned();
//! ```

mod orchestrator;
mod state;

pub use crate::enrichment::diagnostics::{PhotoDiagnostics, TracingDiagnostics};
pub use orchestrator::Orchestrator;
pub use state::{Event, Phase, PipelineError, PipelineState, Progress, reduce};
