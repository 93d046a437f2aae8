use serde::Deserialize;

use crate::error::ClaimError;

/// Fallback shown when a failed reply carries no `error` text
pub const GENERIC_BACKEND_ERROR: &str = "Backend request failed.";

/// Outcome of a successful backend claim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimResult {
    pub success: bool,
    /// Human readable confirmation, e.g. "100.0 tokens sent!"
    pub message: String,
    /// Signature of the transfer performed by the backend
    pub transaction_signature: String,
}

/// Raw HTTP reply of the claim endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Union of the success and error bodies the backend sends
#[derive(Debug, Default, Deserialize)]
struct BackendBody {
    success: Option<bool>,
    message: Option<String>,
    transaction_signature: Option<String>,
    error: Option<String>,
    /// Seconds left on the per-wallet cooldown (429 replies)
    time_remaining: Option<u64>,
}

impl ClaimResult {
    /**
     * Decodes a backend reply
     *
     * Non-2xx: the backend `error` text (plus cooldown hint when present),
     * else the generic message. An empty `error` counts as absent. 2xx:
     * requires `message` and `transaction_signature`; an explicit
     * `success: false` is a failure.
     */
    pub fn from_reply(reply: &HttpReply) -> Result<Self, ClaimError> {
        let parsed = serde_json::from_str::<BackendBody>(&reply.body);

        if !reply.is_success() {
            let body = parsed.unwrap_or_default();
            let message = match (body.error.filter(|e| !e.is_empty()), body.time_remaining) {
                (Some(error), Some(secs)) => format!("{} Try again in {}s.", error, secs),
                (Some(error), None) => error,
                (None, _) => GENERIC_BACKEND_ERROR.to_string(),
            };
            return Err(ClaimError::Backend { status: reply.status, message });
        }

        let backend_error = |message: String| ClaimError::Backend { status: reply.status, message };

        let body = parsed.map_err(|_| backend_error(GENERIC_BACKEND_ERROR.to_string()))?;
        if body.success == Some(false) {
            let message = body
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| GENERIC_BACKEND_ERROR.to_string());
            return Err(backend_error(message));
        }
        match (body.message, body.transaction_signature) {
            (Some(message), Some(transaction_signature)) => Ok(Self {
                success: true,
                message,
                transaction_signature,
            }),
            _ => Err(backend_error(GENERIC_BACKEND_ERROR.to_string())),
        }
    }
}
