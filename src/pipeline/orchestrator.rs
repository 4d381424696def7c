//! Orchestrator - drives the enrichment service and publishes state.
//!
//! Each public action commits a start event, awaits the service, then
//! commits the completion. State lives in a `watch` channel so any number
//! of observers can follow along; the check-and-set of a progress flag
//! happens under the channel's write lock, so racing calls of the same
//! action see each other.

use tokio::sync::watch;

use super::state::{Event, PipelineState, reduce};
use crate::enrichment::domain::{VenueSummary, normalize_query};
use crate::enrichment::service::{EnrichmentService, LoadedPhotos};

/// Session driver over an [`EnrichmentService`].
pub struct Orchestrator {
    service: EnrichmentService,
    prompt: String,
    state: watch::Sender<PipelineState>,
}

impl Orchestrator {
    /// Create an orchestrator that analyzes with `prompt`.
    pub fn new(service: EnrichmentService, prompt: impl Into<String>) -> Self {
        let (state, _) = watch::channel(PipelineState::default());
        Self {
            service,
            prompt: prompt.into(),
            state,
        }
    }

    /// Follow state changes. The receiver sees every committed state.
    pub fn subscribe(&self) -> watch::Receiver<PipelineState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state
    pub fn state(&self) -> PipelineState {
        self.state.borrow().clone()
    }

    /// Search venues. Returns `false` without doing anything when the query
    /// is blank or a search is already running.
    pub async fn submit_query(&self, query: &str) -> bool {
        let Ok(query) = normalize_query(query) else {
            return false;
        };
        if !self.dispatch(Event::SearchStarted {
            query: query.to_string(),
        }) {
            return false;
        }

        let event = match self.service.search(query).await {
            Ok(venues) => {
                tracing::info!("Found {} venues for {:?}", venues.len(), query);
                Event::SearchSucceeded { venues }
            }
            Err(e) => Event::SearchFailed {
                message: e.to_string(),
            },
        };
        self.dispatch(event);
        true
    }

    /// Select `venue` and load its photos. Returns `false` when a photo load
    /// is already running.
    pub async fn select_venue(&self, venue: VenueSummary) -> bool {
        let venue_id = venue.id.clone();
        let Some(selection) = self.start(Event::VenueSelected { venue }, |state| {
            Some(state.selection)
        }) else {
            return false;
        };

        let event = match self.service.load_photos(&venue_id).await {
            Ok(LoadedPhotos { detail, photos }) => Event::PhotosLoaded {
                selection,
                detail,
                photos,
            },
            Err(e) => Event::PhotosFailed {
                selection,
                message: format!("Failed to load photos: {}", e),
            },
        };
        self.dispatch(event);
        true
    }

    /// Drop the selection, its photos and analysis. Search results stay.
    pub fn deselect_venue(&self) -> bool {
        self.dispatch(Event::VenueDeselected)
    }

    /// Analyze the loaded photos. Returns `false` when there are no photos
    /// or an analysis is already running.
    pub async fn analyze(&self) -> bool {
        let job = self.start(Event::AnalysisStarted, |state| {
            let venue = state.selected.as_ref()?;
            Some((venue.id.clone(), state.selection, state.photos.clone()))
        });
        let Some((venue_id, selection, photos)) = job else {
            return false;
        };

        tracing::debug!("Analyzing {} photos for {}", photos.len(), venue_id);
        let event = match self.service.analyze(&photos, &self.prompt).await {
            Ok(result) => Event::AnalysisSucceeded { selection, result },
            Err(e) => Event::AnalysisFailed {
                selection,
                message: format!("Failed to analyze images: {}", e),
            },
        };
        self.dispatch(event);
        true
    }

    /// Commit a start event and, in the same commit, read what the action
    /// needs from the new state. `None` when the event was rejected.
    fn start<T>(
        &self,
        event: Event,
        capture: impl FnOnce(&PipelineState) -> Option<T>,
    ) -> Option<T> {
        let name = event.name();
        let mut job = None;
        self.state.send_if_modified(|state| {
            if !reduce(state, event) {
                return false;
            }
            job = capture(state);
            true
        });
        match job {
            Some(_) => tracing::debug!("Pipeline event {}", name),
            None => tracing::debug!("Pipeline event {} rejected", name),
        }
        job
    }

    fn dispatch(&self, event: Event) -> bool {
        let name = event.name();
        let changed = self.state.send_if_modified(|state| reduce(state, event));
        if changed {
            tracing::debug!("Pipeline event {}", name);
        } else {
            tracing::debug!("Pipeline event {} rejected", name);
        }
        changed
    }
}
