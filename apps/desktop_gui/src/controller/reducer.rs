//! Request state for the two remote operations, mutated only via [`AssistantState::apply`].
//!
//! The store is owned by the app value and constructed in `main`; there is no
//! process-wide mutable global. Completion events are applied in arrival
//! order, so when two requests of the same kind overlap, the last one to
//! resolve wins the store's fields.

/// Outcome of the fetch/send request cycle, as exposed to the view layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssistantState {
    pub last_message: Option<String>,
    pub generated_response: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum StoreEvent {
    /// Applied synchronously at dispatch time, before the request leaves the
    /// process.
    FetchStarted,
    FetchSucceeded {
        message: String,
        generated_response: String,
    },
    FetchFailed {
        error: String,
    },
    SendSucceeded,
    SendFailed {
        error: String,
    },
}

impl AssistantState {
    pub fn apply(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::FetchStarted => {
                self.loading = true;
                self.error = None;
            }
            StoreEvent::FetchSucceeded {
                message,
                generated_response,
            } => {
                self.loading = false;
                self.last_message = Some(message);
                self.generated_response = Some(generated_response);
            }
            StoreEvent::FetchFailed { error } => {
                self.loading = false;
                self.error = Some(error);
            }
            // A send outcome never touches the fetched message or the draft.
            StoreEvent::SendSucceeded => {}
            StoreEvent::SendFailed { error } => {
                self.error = Some(error);
            }
        }
    }
}
