use std::fmt;

/// A single GET against the gateway: the resource family and the caller-supplied
/// value appended after it (which may already carry a query string)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub path: String,
    pub parameter: String,
}

impl RequestDescriptor {
    pub fn new(path: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            parameter: parameter.into(),
        }
    }
}

/// Sequence number handed out per invocation, strictly increasing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(pub u64);

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Terminal result of a request, as shown in the result panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 2xx with a JSON body; `text` is the pretty-printed body
    Success { status: u16, text: String },

    /// Transport error, non-2xx status, or a body that isn't JSON.
    /// `status` is `None` when no HTTP response was received.
    Failure { status: Option<u16>, text: String },
}

impl Outcome {
    pub fn text(&self) -> &str {
        match self {
            Outcome::Success { text, .. } | Outcome::Failure { text, .. } => text,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Outcome::Success { status, .. } => Some(*status),
            Outcome::Failure { status, .. } => *status,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }
}

/// Raw HTTP response as received from the transport
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Success,
    Failure,
}

impl From<&Outcome> for OutcomeKind {
    fn from(outcome: &Outcome) -> Self {
        if outcome.is_success() {
            OutcomeKind::Success
        } else {
            OutcomeKind::Failure
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        let ok = Outcome::Success {
            status: 200,
            text: "{}".to_string(),
        };
        assert_eq!(ok.text(), "{}");
        assert_eq!(ok.status(), Some(200));
        assert_eq!(OutcomeKind::from(&ok), OutcomeKind::Success);

        let network = Outcome::Failure {
            status: None,
            text: "connection refused".to_string(),
        };
        assert_eq!(network.status(), None);
        assert!(!network.is_success());
        assert_eq!(OutcomeKind::from(&network), OutcomeKind::Failure);
    }

    #[test]
    fn test_ticket_ordering() {
        assert!(Ticket(2) > Ticket(1));
        assert_eq!(Ticket(7).to_string(), "#7");
    }
}
