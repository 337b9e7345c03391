use crate::{ClassificationRequest, ClassificationResult, InputSelection, SubmitError, Upload};
use derive_more::Display;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Result(ClassificationResult),
    Failed(String),
}

/// Sequence number handed out per submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "#{}", _0)]
pub struct Ticket(u64);

/// Owns the UI lifecycle. Each accepted submission gets a fresh ticket and
/// only the most recently issued ticket may complete; responses to older
/// submissions are dropped.
#[derive(Debug, Default)]
pub struct Submissions {
    state: UiState,
    issued: u64,
}

impl Submissions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, UiState::Loading)
    }

    pub fn latest(&self) -> Option<Ticket> {
        (self.issued > 0).then_some(Ticket(self.issued))
    }

    /// Validates the selection and, if it carries input, moves to `Loading`.
    /// A rejected selection leaves the state untouched.
    pub fn submit<F: Upload>(
        &mut self,
        selection: InputSelection<F>,
    ) -> Result<(Ticket, ClassificationRequest<F>), SubmitError> {
        let request = selection.into_request()?;
        self.issued += 1;
        self.state = UiState::Loading;
        Ok((Ticket(self.issued), request))
    }

    /// Applies the outcome of `ticket`. Returns `false` when the ticket is stale.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<ClassificationResult, SubmitError>,
    ) -> bool {
        if self.latest() != Some(ticket) {
            return false;
        }
        self.state = match outcome {
            Ok(result) => UiState::Result(result),
            Err(err) => UiState::Failed(err.to_string()),
        };
        true
    }
}
