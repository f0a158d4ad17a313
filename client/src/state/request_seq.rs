//! Per-action request sequencing.
//!
//! Each action (health check, snippet fetch, submit, ...) owns one
//! [`RequestSeq`]. Starting a request mints a fresh token; a response is only
//! applied when its token is still the latest one minted for that action.

#[cfg(test)]
#[path = "request_seq_test.rs"]
mod request_seq_test;

/// Identifies one in-flight request of one action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Monotonic token source for one action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    /// Mint a token that supersedes every earlier one.
    pub fn begin(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    #[must_use]
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}
