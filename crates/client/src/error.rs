/// Errors from talking to the board API.
///
/// The drag controller does not distinguish between variants: any of them
/// rolls an optimistic move back.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("API error ({status} {code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// A 2xx response whose body did not match the expected shape.
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

