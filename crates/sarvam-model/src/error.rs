use mufasa_model::{Failure, FailureKind};
use reqwest::StatusCode;

use crate::proto;

/// Maps a non-200 completion status to the failure shown to the user.
pub fn completion_status(status: StatusCode, body: &[u8]) -> Failure {
    match status {
        StatusCode::UNAUTHORIZED => Failure::new(
            FailureKind::Unauthorized,
            "Invalid API key. Please check your SARVAM_API_KEY environment \
             variable.",
        ),
        StatusCode::TOO_MANY_REQUESTS => Failure::new(
            FailureKind::RateLimited,
            "Rate limit exceeded. Please try again later.",
        ),
        StatusCode::INTERNAL_SERVER_ERROR => Failure::new(
            FailureKind::Server,
            "Server error. Please try again later.",
        ),
        s => {
            let message = proto::parse_error_message(body)
                .unwrap_or_else(|| format!("HTTP {}", s.as_u16()));
            Failure::new(
                status_kind(s),
                format!("API request failed: {message}"),
            )
        }
    }
}

/// Maps a reqwest error raised while talking to the completion endpoint.
pub fn completion_transport(err: &reqwest::Error) -> Failure {
    let kind = transport_kind(err);
    let reason = match kind {
        FailureKind::Timeout => "Request timed out. Please check your \
                                 internet connection and try again."
            .to_owned(),
        FailureKind::Connection => "Connection error. Please check your \
                                    internet connection."
            .to_owned(),
        _ => format!("Request error: {err}"),
    };
    Failure::new(kind, reason)
}

/// Maps a non-200 status of a secondary endpoint, `label` names the call.
#[inline]
pub fn auxiliary_status(label: &str, status: StatusCode) -> Failure {
    Failure::new(
        status_kind(status),
        format!("{label} failed: HTTP {}", status.as_u16()),
    )
}

/// Maps a reqwest error of a secondary endpoint, `label` names the call.
#[inline]
pub fn auxiliary_transport(label: &str, err: &reqwest::Error) -> Failure {
    Failure::new(transport_kind(err), format!("{label} error: {err}"))
}

fn status_kind(status: StatusCode) -> FailureKind {
    match status {
        StatusCode::UNAUTHORIZED => FailureKind::Unauthorized,
        StatusCode::TOO_MANY_REQUESTS => FailureKind::RateLimited,
        s if s.is_server_error() => FailureKind::Server,
        _ => FailureKind::Transport,
    }
}

fn transport_kind(err: &reqwest::Error) -> FailureKind {
    if err.is_timeout() {
        FailureKind::Timeout
    } else if err.is_connect() {
        FailureKind::Connection
    } else if err.is_decode() {
        FailureKind::MalformedResponse
    } else {
        FailureKind::Transport
    }
}
