//! Pipeline state and its transitions.
//!
//! [`PipelineState`] is a plain record; the only way it changes is
//! [`reduce`], which applies one [`Event`] and reports whether anything
//! changed. The orchestrator feeds it events as sub-operations start and
//! complete.

use crate::enrichment::domain::{AnalysisResult, EnrichedPhoto, VenueDetail, VenueSummary};

/// Action category an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Search,
    Photos,
    Analysis,
}

/// A failed action, kept until the next successful action of the same phase
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct PipelineError {
    pub phase: Phase,
    pub message: String,
}

/// Independent in-flight flags, one per action category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub searching: bool,
    pub loading_photos: bool,
    pub analyzing: bool,
}

impl Progress {
    pub fn is_idle(&self) -> bool {
        !(self.searching || self.loading_photos || self.analyzing)
    }
}

/// Everything an observer needs to render the session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineState {
    /// Last submitted query, trimmed
    pub query: String,
    /// Search results in upstream order
    pub venues: Vec<VenueSummary>,
    pub selected: Option<VenueSummary>,
    /// Detail record of the selected venue, once loaded
    pub detail: Option<VenueDetail>,
    /// Loaded photos of the selected venue, at most five
    pub photos: Vec<EnrichedPhoto>,
    pub analysis: Option<AnalysisResult>,
    pub error: Option<PipelineError>,
    pub progress: Progress,
    /// Bumped on every select and deselect; completions carry the value
    /// they started under
    pub selection: u64,
}

impl PipelineState {
    fn is_current(&self, selection: u64) -> bool {
        self.selected.is_some() && self.selection == selection
    }

    fn clear_error(&mut self, phase: Phase) {
        if self.error.as_ref().is_some_and(|e| e.phase == phase) {
            self.error = None;
        }
    }

    fn set_error(&mut self, phase: Phase, message: String) {
        self.error = Some(PipelineError { phase, message });
    }
}

/// Something that happened to the pipeline
#[derive(Debug, Clone)]
pub enum Event {
    SearchStarted {
        query: String,
    },
    SearchSucceeded {
        venues: Vec<VenueSummary>,
    },
    SearchFailed {
        message: String,
    },
    VenueSelected {
        venue: VenueSummary,
    },
    PhotosLoaded {
        selection: u64,
        detail: VenueDetail,
        photos: Vec<EnrichedPhoto>,
    },
    PhotosFailed {
        selection: u64,
        message: String,
    },
    VenueDeselected,
    AnalysisStarted,
    AnalysisSucceeded {
        selection: u64,
        result: AnalysisResult,
    },
    AnalysisFailed {
        selection: u64,
        message: String,
    },
}

impl Event {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Event::SearchStarted { .. } => "SearchStarted",
            Event::SearchSucceeded { .. } => "SearchSucceeded",
            Event::SearchFailed { .. } => "SearchFailed",
            Event::VenueSelected { .. } => "VenueSelected",
            Event::PhotosLoaded { .. } => "PhotosLoaded",
            Event::PhotosFailed { .. } => "PhotosFailed",
            Event::VenueDeselected => "VenueDeselected",
            Event::AnalysisStarted => "AnalysisStarted",
            Event::AnalysisSucceeded { .. } => "AnalysisSucceeded",
            Event::AnalysisFailed { .. } => "AnalysisFailed",
        }
    }
}

/// Apply `event` to `state`. Returns `false` when the event was rejected
/// and the state is untouched.
///
/// Start events are rejected while their own progress flag is set.
/// Completions started under an earlier selection only clear the flag, even
/// when the same venue has been selected again since.
pub fn reduce(state: &mut PipelineState, event: Event) -> bool {
    match event {
        Event::SearchStarted { query } => {
            let query = query.trim();
            if query.is_empty() || state.progress.searching {
                return false;
            }
            state.query = query.to_string();
            state.error = None;
            state.progress.searching = true;
        }
        Event::SearchSucceeded { venues } => {
            state.venues = venues;
            state.clear_error(Phase::Search);
            state.progress.searching = false;
        }
        Event::SearchFailed { message } => {
            state.venues.clear();
            state.set_error(Phase::Search, message);
            state.progress.searching = false;
        }

        Event::VenueSelected { venue } => {
            if state.progress.loading_photos {
                return false;
            }
            state.selected = Some(venue);
            state.selection += 1;
            state.detail = None;
            state.photos.clear();
            state.analysis = None;
            state.clear_error(Phase::Photos);
            state.clear_error(Phase::Analysis);
            state.progress.loading_photos = true;
        }
        Event::PhotosLoaded {
            selection,
            detail,
            photos,
        } => {
            state.progress.loading_photos = false;
            if state.is_current(selection) {
                state.detail = Some(detail);
                state.photos = photos;
                state.clear_error(Phase::Photos);
            }
        }
        Event::PhotosFailed { selection, message } => {
            state.progress.loading_photos = false;
            if state.is_current(selection) {
                state.set_error(Phase::Photos, message);
            }
        }
        Event::VenueDeselected => {
            state.selected = None;
            state.selection += 1;
            state.detail = None;
            state.photos.clear();
            state.analysis = None;
        }

        Event::AnalysisStarted => {
            if state.photos.is_empty() || state.selected.is_none() || state.progress.analyzing {
                return false;
            }
            state.analysis = None;
            state.clear_error(Phase::Analysis);
            state.progress.analyzing = true;
        }
        Event::AnalysisSucceeded { selection, result } => {
            state.progress.analyzing = false;
            if state.is_current(selection) {
                state.analysis = Some(result);
                state.clear_error(Phase::Analysis);
            }
        }
        Event::AnalysisFailed { selection, message } => {
            state.progress.analyzing = false;
            if state.is_current(selection) {
                state.set_error(Phase::Analysis, message);
            }
        }
    }
    true
}
