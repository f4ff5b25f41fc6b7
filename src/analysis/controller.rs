// src/analysis/controller.rs
//! Per-screen submission lifecycle: edit, validate, dispatch, normalize, render.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use super::ingestor::ingest;
use super::normalizer::Normalizer;
use super::renderer::{render, DisplayModel};
use super::samples::{SAMPLE_FEEDBACK, SAMPLE_JOB_DESCRIPTION};
use super::validator::{Draft, ScreeningDraft, SentimentDraft, ValidationResult};
use crate::core::AnalysisService;
use crate::error::{AnalysisError, ErrorDescriptor};
use crate::types::{AnalysisKind, AnalysisRequest, AnalysisResult, DocumentBlob};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Idle,
    Validating,
    Pending,
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionState {
    pub status: SubmissionStatus,
    pub last_result: Option<AnalysisResult>,
    pub last_error: Option<ErrorDescriptor>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Default for SubmissionState {
    fn default() -> Self {
        Self {
            status: SubmissionStatus::Idle,
            last_result: None,
            last_error: None,
            completed_at: None,
        }
    }
}

/// An in-flight request, detached from its controller so the controller can
/// keep taking edits while the service works.
pub struct PendingSubmission {
    id: Uuid,
    generation: u64,
    request: AnalysisRequest,
    service: Arc<dyn AnalysisService>,
}

/// What came back for a [`PendingSubmission`]. Hand it to
/// [`SubmissionController::resolve`].
#[derive(Debug)]
pub struct SubmissionOutcome {
    id: Uuid,
    generation: u64,
    raw: Result<Value, AnalysisError>,
}

impl PendingSubmission {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn request(&self) -> &AnalysisRequest {
        &self.request
    }

    pub async fn dispatch(self) -> SubmissionOutcome {
        let span = info_span!("submission", id = %self.id, kind = %self.request.kind());
        let raw = self
            .service
            .dispatch(&self.request)
            .instrument(span)
            .await;

        SubmissionOutcome {
            id: self.id,
            generation: self.generation,
            raw,
        }
    }
}

pub struct SubmissionController<D: Draft> {
    service: Arc<dyn AnalysisService>,
    normalizer: Normalizer,
    draft: D,
    validation: ValidationResult,
    state: SubmissionState,
    generation: u64,
    notice: Option<String>,
}

pub type ScreeningController = SubmissionController<ScreeningDraft>;
pub type SentimentController = SubmissionController<SentimentDraft>;

impl<D: Draft> SubmissionController<D> {
    pub fn new(service: Arc<dyn AnalysisService>, normalizer: Normalizer) -> Self {
        let draft = D::default();
        let validation = draft.validate();
        Self {
            service,
            normalizer,
            draft,
            validation,
            state: SubmissionState::default(),
            generation: 0,
            notice: None,
        }
    }

    pub fn kind(&self) -> AnalysisKind {
        D::KIND
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn status(&self) -> SubmissionStatus {
        self.state.status
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    /// Whether the submit action is enabled right now
    pub fn can_submit(&self) -> bool {
        self.state.status != SubmissionStatus::Pending && self.validation.is_valid()
    }

    /// The single message for the alert region, if there is one
    pub fn alert(&self) -> Option<&str> {
        self.state
            .last_error
            .as_ref()
            .map(|e| e.message.as_str())
            .or(self.notice.as_deref())
    }

    pub fn rendered(&self) -> Option<DisplayModel> {
        self.state.last_result.as_ref().map(render)
    }

    /// Apply a user edit. Stale results, errors and in-flight submissions
    /// are dropped so nothing old shows against the new input.
    fn edit(&mut self, apply: impl FnOnce(&mut D)) {
        apply(&mut self.draft);
        self.validation = self.draft.validate();
        self.notice = None;

        match self.state.status {
            SubmissionStatus::Pending => {
                warn!(
                    "{} input changed while a submission was in flight; its reply will be discarded",
                    D::KIND
                );
                self.reset_to_idle();
            }
            SubmissionStatus::Success | SubmissionStatus::Failed => self.reset_to_idle(),
            SubmissionStatus::Idle | SubmissionStatus::Validating => {
                self.state.status = SubmissionStatus::Validating;
            }
        }
    }

    fn reset_to_idle(&mut self) {
        self.state.status = SubmissionStatus::Idle;
        self.state.last_result = None;
        self.state.last_error = None;
        self.state.completed_at = None;
    }

    /// Start a submission. Refused while one is pending or when the input
    /// does not validate; the state is left as it was in both cases.
    /// A finished submission can be sent again without an edit.
    pub fn submit(&mut self) -> Result<PendingSubmission, AnalysisError> {
        if self.state.status == SubmissionStatus::Pending {
            return Err(AnalysisError::Validation(
                "A submission is already in progress".to_string(),
            ));
        }

        let request = self.draft.to_request()?;

        self.generation += 1;
        self.state.status = SubmissionStatus::Pending;
        self.state.last_result = None;
        self.state.last_error = None;
        self.state.completed_at = None;
        self.notice = None;

        let id = Uuid::new_v4();
        info!("{} submission {} dispatched", D::KIND, id);

        Ok(PendingSubmission {
            id,
            generation: self.generation,
            request,
            service: Arc::clone(&self.service),
        })
    }

    /// Commit a reply. Returns false when the reply belongs to a submission
    /// that is no longer current and was discarded.
    pub fn resolve(&mut self, outcome: SubmissionOutcome) -> bool {
        if self.state.status != SubmissionStatus::Pending || outcome.generation != self.generation
        {
            warn!(
                "Discarding stale {} reply for submission {}",
                D::KIND,
                outcome.id
            );
            return false;
        }

        let result = outcome
            .raw
            .and_then(|raw| self.normalizer.normalize(&raw, D::KIND));

        match result {
            Ok(result) => {
                info!("{} submission {} succeeded", D::KIND, outcome.id);
                self.state.status = SubmissionStatus::Success;
                self.state.last_result = Some(result);
            }
            Err(e) => {
                error!("{} submission {} failed: {}", D::KIND, outcome.id, e);
                self.state.status = SubmissionStatus::Failed;
                self.state.last_error = Some(ErrorDescriptor::from_error(&e, D::KIND));
            }
        }
        self.state.completed_at = Some(Utc::now());
        true
    }

    /// Submit and wait for the reply in one step
    pub async fn submit_and_wait(&mut self) -> Result<&SubmissionState, AnalysisError> {
        let pending = self.submit()?;
        let outcome = pending.dispatch().await;
        self.resolve(outcome);
        Ok(&self.state)
    }
}

impl SubmissionController<ScreeningDraft> {
    /// Handle one drop or picker event. A rejected file leaves the current
    /// selection in place.
    pub fn select_files(&mut self, offered: Vec<DocumentBlob>) -> Result<(), AnalysisError> {
        match ingest(offered) {
            Ok(document) => {
                info!("Selected document {}", document.file_name);
                self.edit(|draft| draft.document = Some(document));
                Ok(())
            }
            Err(e) => {
                self.notice = Some(e.user_message(AnalysisKind::Screening));
                Err(e)
            }
        }
    }

    pub fn select_file(&mut self, document: DocumentBlob) -> Result<(), AnalysisError> {
        self.select_files(vec![document])
    }

    pub fn set_job_description(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.edit(|draft| draft.job_description = text);
    }

    pub fn load_sample_job_description(&mut self) {
        self.set_job_description(SAMPLE_JOB_DESCRIPTION);
    }
}

impl SubmissionController<SentimentDraft> {
    pub fn set_feedback(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.edit(|draft| draft.feedback = text);
    }

    pub fn load_sample_feedback(&mut self) {
        self.set_feedback(SAMPLE_FEEDBACK);
    }
}
