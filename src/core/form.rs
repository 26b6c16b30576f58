use super::debounce::{Debouncer, Ticket};
use fnv::FnvHashMap;

pub const SUBMIT_DELAY_MS: i32 = 1500;
pub const MESSAGE_HIDE_MS: i32 = 5000;
pub const PENDING_LABEL: &str = "Sending...";
pub const SUCCESS_CLASS: &str = "form-message success";
pub const SUCCESS_TEXT: &str =
    "Thank you! Your message has been sent successfully. We'll get back to you soon.";

/// Submitted field values keyed by field name. Later duplicates win.
pub type FormFields = FnvHashMap<String, String>;

pub fn collect_fields<I, K, V>(entries: I) -> FormFields
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Submitting { id: u64, original_label: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub id: u64,
    pub fields: FormFields,
}

/// What the page shows once the simulated send finishes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    pub restore_label: String,
    pub message_class: &'static str,
    pub message_text: &'static str,
    pub hide_ticket: Ticket,
}

/// Contact form lifecycle: idle → submitting → idle with a success notice.
///
/// A newer success supersedes the pending hide of an older notice.
#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    state: FormState,
    next_id: u64,
    hide: Debouncer,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, FormState::Submitting { .. })
    }

    /// Start a submission. Returns `None` if one is already in flight.
    pub fn begin(&mut self, fields: FormFields, current_label: &str) -> Option<Submission> {
        if self.is_submitting() {
            return None;
        }
        self.next_id += 1;
        let id = self.next_id;
        self.state = FormState::Submitting {
            id,
            original_label: current_label.to_string(),
        };
        Some(Submission { id, fields })
    }

    /// Finish submission `id`; always succeeds since nothing is sent.
    pub fn complete(&mut self, id: u64) -> Option<Completion> {
        let FormState::Submitting {
            id: pending,
            original_label,
        } = std::mem::take(&mut self.state)
        else {
            return None;
        };
        if pending != id {
            self.state = FormState::Submitting {
                id: pending,
                original_label,
            };
            return None;
        }
        Some(Completion {
            restore_label: original_label,
            message_class: SUCCESS_CLASS,
            message_text: SUCCESS_TEXT,
            hide_ticket: self.hide.schedule(),
        })
    }

    /// Returns true when the notice tied to `ticket` should be hidden now.
    pub fn should_hide(&mut self, ticket: Ticket) -> bool {
        self.hide.fire(ticket)
    }
}
