//! Backend reachability indicator driven by `GET /health`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every network-dependent control on both pages is disabled unless the
//! status is [`ConnectionStatus::Connected`]. Checks run once at mount and
//! again only when the user presses retry; there is no automatic backoff.

#[cfg(test)]
#[path = "connection_test.rs"]
mod connection_test;

use reviews::ApiError;

use super::notice::{Notice, NoticeUpdate};
use super::request_seq::{RequestSeq, RequestToken};

pub const DISCONNECTED_MESSAGE: &str = "Cannot connect to backend server. Please check if the server is running.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// A health check is in flight.
    #[default]
    Checking,
    Connected,
    Disconnected,
}

#[derive(Clone, Debug, Default)]
pub struct ConnectionState {
    pub status: ConnectionStatus,
    seq: RequestSeq,
}

impl ConnectionState {
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.status == ConnectionStatus::Connected
    }

    pub fn begin_check(&mut self) -> RequestToken {
        self.status = ConnectionStatus::Checking;
        self.seq.begin()
    }

    /// Apply a health check result. Stale results are dropped.
    pub fn finish_check(&mut self, token: RequestToken, result: Result<(), ApiError>) -> NoticeUpdate {
        if !self.seq.is_current(token) {
            return NoticeUpdate::Keep;
        }
        match result {
            Ok(()) => {
                self.status = ConnectionStatus::Connected;
                NoticeUpdate::Clear
            }
            Err(_) => {
                self.status = ConnectionStatus::Disconnected;
                Notice::error(DISCONNECTED_MESSAGE).into()
            }
        }
    }
}

/// Indicator dot class for a status.
#[must_use]
pub fn connection_status_class(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Checking => "connection__dot connection__dot--checking",
        ConnectionStatus::Connected => "connection__dot connection__dot--connected",
        ConnectionStatus::Disconnected => "connection__dot connection__dot--disconnected",
    }
}

#[must_use]
pub fn connection_status_label(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Checking => "Checking...",
        ConnectionStatus::Connected => "Connected",
        ConnectionStatus::Disconnected => "Disconnected",
    }
}
