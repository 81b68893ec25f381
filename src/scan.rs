//! Scan-Ingestion Flow
//!
//! State machine behind the scanner screen:
//! `Idle -> ImageSelected -> Loading -> Results | Error`, with
//! `Error -> Loading` on retry and `Results -> Loading` on "scan another".
//!
//! Every fetch is issued under a [`FetchTicket`]. Completions carrying a
//! stale ticket, or arriving after the screen detached the flow, are dropped.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{DetectedItem, PickedImage};

/// Errors surfaced on the scanner screen (wire shape matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum ScanError {
    ImageSelectionFailed(String),
    NetworkFailed(String),
    ParseFailed(String),
}

impl ScanError {
    pub fn message(&self) -> &str {
        match self {
            ScanError::ImageSelectionFailed(msg)
            | ScanError::NetworkFailed(msg)
            | ScanError::ParseFailed(msg) => msg,
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::ImageSelectionFailed(msg) => write!(f, "Failed to select image: {}", msg),
            ScanError::NetworkFailed(msg) => write!(f, "Failed to fetch items: {}", msg),
            ScanError::ParseFailed(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScanState {
    Idle,
    ImageSelected,
    Loading,
    Results(Vec<DetectedItem>),
    Error(ScanError),
}

/// What the backend is asked to fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub image_path: Option<String>,
}

/// Handle for one in-flight fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    pub request: ScanRequest,
}

/// Manual action offered by "Try again"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryAction {
    PickImage,
    FetchItems,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScanFlow {
    state: ScanState,
    image: Option<PickedImage>,
    generation: u64,
    detached: bool,
}

impl Default for ScanFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanFlow {
    pub fn new() -> Self {
        Self {
            state: ScanState::Idle,
            image: None,
            generation: 0,
            detached: false,
        }
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    pub fn image(&self) -> Option<&PickedImage> {
        self.image.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ScanState::Loading)
    }

    pub fn loading_message(&self) -> &'static str {
        if self.image.is_some() {
            "Analyzing image..."
        } else {
            "Fetching items..."
        }
    }

    /// Whether the reset button should be offered
    pub fn can_reset(&self) -> bool {
        self.image.is_some() || matches!(&self.state, ScanState::Results(items) if !items.is_empty())
    }

    /// Record the picker outcome. `None` means the user cancelled and the
    /// state is left alone. Returns true when an image was accepted.
    pub fn image_picked(&mut self, picked: Option<PickedImage>) -> bool {
        if self.detached || self.is_loading() {
            return false;
        }
        match picked {
            Some(image) => {
                self.image = Some(image);
                self.state = ScanState::ImageSelected;
                true
            }
            None => false,
        }
    }

    pub fn image_pick_failed(&mut self, message: impl Into<String>) {
        if self.detached || self.is_loading() {
            return;
        }
        // The previous image is no longer the one the user wants
        self.image = None;
        self.state = ScanState::Error(ScanError::ImageSelectionFailed(message.into()));
    }

    /// Enter `Loading` and hand out a ticket. Returns `None` while a fetch is
    /// already in flight or after the flow was detached.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if self.detached || self.is_loading() {
            return None;
        }
        self.generation += 1;
        self.state = ScanState::Loading;
        Some(FetchTicket {
            generation: self.generation,
            request: ScanRequest {
                image_path: self.image.as_ref().map(|img| img.path.clone()),
            },
        })
    }

    /// Apply a fetch outcome. Returns false if the outcome was discarded.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<Vec<DetectedItem>, ScanError>,
    ) -> bool {
        if self.detached || ticket.generation != self.generation || !self.is_loading() {
            return false;
        }
        self.state = match outcome {
            Ok(items) => ScanState::Results(items),
            Err(err) => ScanState::Error(err),
        };
        true
    }

    /// Action for "Try again": repeat whatever failed. Only offered from `Error`.
    pub fn retry_action(&self) -> Option<RetryAction> {
        match &self.state {
            ScanState::Error(ScanError::ImageSelectionFailed(_)) => Some(RetryAction::PickImage),
            ScanState::Error(_) => Some(RetryAction::FetchItems),
            _ => None,
        }
    }

    /// Back to `Idle`; any fetch still in flight is invalidated
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = ScanState::Idle;
        self.image = None;
    }

    /// Called when the owning screen unmounts
    pub fn detach(&mut self) {
        self.detached = true;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn picked() -> PickedImage {
        PickedImage {
            path: "/tmp/groceries.jpg".to_string(),
            preview: None,
        }
    }

    fn apple() -> DetectedItem {
        DetectedItem {
            food: "Apple".to_string(),
            expiry: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        }
    }

    #[test]
    fn test_success_path() {
        let mut flow = ScanFlow::new();
        assert!(flow.image_picked(Some(picked())));
        assert_eq!(flow.state(), &ScanState::ImageSelected);

        let ticket = flow.begin_fetch().unwrap();
        assert!(flow.is_loading());
        assert_eq!(flow.loading_message(), "Analyzing image...");

        assert!(flow.complete(&ticket, Ok(vec![apple()])));
        assert_eq!(flow.state(), &ScanState::Results(vec![apple()]));
        assert!(flow.can_reset());
    }

    #[test]
    fn test_server_error_then_identical_retry() {
        let mut flow = ScanFlow::new();
        flow.image_picked(Some(picked()));
        let first = flow.begin_fetch().unwrap();
        flow.complete(&first, Err(ScanError::NetworkFailed("HTTP status 500".into())));

        match flow.state() {
            ScanState::Error(err) => assert!(!err.message().is_empty()),
            other => panic!("expected error, got {:?}", other),
        }
        assert_eq!(flow.retry_action(), Some(RetryAction::FetchItems));

        let second = flow.begin_fetch().unwrap();
        assert_eq!(first.request, second.request);
        assert!(flow.is_loading());
    }

    #[test]
    fn test_retry_without_image_picks_again() {
        let mut flow = ScanFlow::new();
        flow.image_pick_failed("permission denied");
        assert_eq!(flow.retry_action(), Some(RetryAction::PickImage));
        assert_eq!(
            flow.state(),
            &ScanState::Error(ScanError::ImageSelectionFailed("permission denied".into()))
        );
    }

    #[test]
    fn test_cancelled_pick_leaves_state() {
        let mut flow = ScanFlow::new();
        assert!(!flow.image_picked(None));
        assert_eq!(flow.state(), &ScanState::Idle);
        assert!(!flow.can_reset());
    }

    #[test]
    fn test_second_fetch_while_loading_is_ignored() {
        let mut flow = ScanFlow::new();
        flow.image_picked(Some(picked()));
        let ticket = flow.begin_fetch().unwrap();
        assert!(flow.begin_fetch().is_none());
        assert!(flow.complete(&ticket, Ok(vec![])));
    }

    #[test]
    fn test_stale_ticket_after_reset_is_dropped() {
        let mut flow = ScanFlow::new();
        flow.image_picked(Some(picked()));
        let ticket = flow.begin_fetch().unwrap();
        flow.reset();
        assert!(!flow.complete(&ticket, Ok(vec![apple()])));
        assert_eq!(flow.state(), &ScanState::Idle);
        assert!(flow.image().is_none());
    }

    #[test]
    fn test_completion_after_detach_is_dropped() {
        let mut flow = ScanFlow::new();
        flow.image_picked(Some(picked()));
        let ticket = flow.begin_fetch().unwrap();
        flow.detach();
        assert!(!flow.complete(&ticket, Ok(vec![apple()])));
        assert!(flow.begin_fetch().is_none());
    }

    #[test]
    fn test_scan_another_from_results() {
        let mut flow = ScanFlow::new();
        flow.image_picked(Some(picked()));
        let ticket = flow.begin_fetch().unwrap();
        flow.complete(&ticket, Ok(vec![apple()]));

        assert!(flow.image_picked(Some(PickedImage {
            path: "/tmp/second.jpg".into(),
            preview: None,
        })));
        let next = flow.begin_fetch().unwrap();
        assert_eq!(next.request.image_path.as_deref(), Some("/tmp/second.jpg"));
    }

    #[test]
    fn test_failed_repick_after_results_retries_picker() {
        let mut flow = ScanFlow::new();
        flow.image_picked(Some(picked()));
        let ticket = flow.begin_fetch().unwrap();
        flow.complete(&ticket, Ok(vec![apple()]));

        flow.image_pick_failed("permission denied");
        assert_eq!(flow.retry_action(), Some(RetryAction::PickImage));
        assert!(flow.image().is_none());
    }

    #[test]
    fn test_unreadable_image_from_backend_retries_picker() {
        let mut flow = ScanFlow::new();
        flow.image_picked(Some(picked()));
        let ticket = flow.begin_fetch().unwrap();
        flow.complete(&ticket, Err(ScanError::ImageSelectionFailed("could not read image".into())));

        assert_eq!(flow.retry_action(), Some(RetryAction::PickImage));
    }

    #[test]
    fn test_parse_error_retries_fetch() {
        let mut flow = ScanFlow::new();
        let ticket = flow.begin_fetch().unwrap();
        flow.complete(&ticket, Err(ScanError::ParseFailed("bad body".into())));
        assert_eq!(flow.retry_action(), Some(RetryAction::FetchItems));
    }

    #[test]
    fn test_error_wire_shape() {
        let err: ScanError =
            serde_json::from_str(r#"{"kind":"parse_failed","message":"missing field `data`"}"#).unwrap();
        assert_eq!(err, ScanError::ParseFailed("missing field `data`".into()));
    }
}
