use thiserror::Error;

pub type Err = anyhow::Error;
pub type Res<T> = Result<T, Err>;
pub type Void = Res<()>;

/// Failure of an outbound call to the issue tracker or code host.
///
/// Transport errors and non-2xx statuses collapse into the same shape; the
/// detail string is the entire observable payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct RemoteCallFailed(pub String);

impl RemoteCallFailed {
    pub fn new(detail: impl Into<String>) -> Self {
        Self(detail.into())
    }
}

impl From<reqwest::Error> for RemoteCallFailed {
    fn from(err: reqwest::Error) -> Self {
        Self(err.to_string())
    }
}

/// What a query is asking for, with any extracted parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    TicketStatus { key: String },
    PrReviewers { number: String },
    PrComments { number: String },
    OpenPrs,
    BlockedTickets,
    Unrecognized,
}
