//! Unified Provider Error Handling
//!
//! Single error type for every generation provider. Each variant carries the
//! static name of the provider that produced it, so log lines stay tagged
//! without threading context through the adapters.
//!
//! | Variant | Purpose | Upstream status |
//! |------|------|------------|
//! | Authentication | Key rejected by the provider | 401/403 |
//! | RateLimit | Provider throttled us | 429 |
//! | InvalidRequest | Provider rejected the payload | 400 |
//! | Network | Transport failure | - |
//! | Timeout | Client timeout elapsed | - |
//! | Configuration | Missing key or bad settings | - |
//! | ResponseParsing | Envelope did not match the expected shape | 2xx |
//! | ContentFiltered | Safety system blocked the output | 2xx |
//! | ApiError | Any other non-2xx | 4xx/5xx |

/// Unified provider error type
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("Authentication failed for {provider}: {message}")]
    Authentication {
        provider: &'static str,
        message: String,
    },

    #[error("Rate limit exceeded for {provider}: {message}")]
    RateLimit {
        provider: &'static str,
        message: String,
        retry_after: Option<u64>,
    },

    #[error("Invalid request for {provider}: {message}")]
    InvalidRequest {
        provider: &'static str,
        message: String,
    },

    #[error("Network error for {provider}: {message}")]
    Network {
        provider: &'static str,
        message: String,
    },

    #[error("Timeout for {provider}: {message}")]
    Timeout {
        provider: &'static str,
        message: String,
    },

    #[error("Configuration error for {provider}: {message}")]
    Configuration {
        provider: &'static str,
        message: String,
    },

    #[error("Failed to parse {provider} response: {message}")]
    ResponseParsing {
        provider: &'static str,
        message: String,
    },

    #[error("Content filtered by {provider} safety systems: {reason}")]
    ContentFiltered {
        provider: &'static str,
        reason: String,
    },

    #[error("API error for {provider} (status {status}): {message}")]
    ApiError {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("{provider} error: {message}")]
    Other {
        provider: &'static str,
        message: String,
    },
}

impl ProviderError {
    /// Create authentication error
    pub fn authentication(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Authentication {
            provider,
            message: message.into(),
        }
    }

    /// Create rate limit error
    pub fn rate_limit(provider: &'static str, retry_after: Option<u64>) -> Self {
        Self::RateLimit {
            provider,
            message: match retry_after {
                Some(seconds) => format!("Rate limit exceeded. Retry after {} seconds", seconds),
                None => "Rate limit exceeded".to_string(),
            },
            retry_after,
        }
    }

    /// Create invalid request error
    pub fn invalid_request(provider: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            provider,
            message: message.into(),
        }
    }

    /// Create network error
    pub fn network(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Network {
            provider,
            message: message.into(),
        }
    }

    /// Create timeout error
    pub fn timeout(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Timeout {
            provider,
            message: message.into(),
        }
    }

    /// Create configuration error
    pub fn configuration(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Configuration {
            provider,
            message: message.into(),
        }
    }

    /// Create response parsing error
    pub fn response_parsing(provider: &'static str, message: impl Into<String>) -> Self {
        Self::ResponseParsing {
            provider,
            message: message.into(),
        }
    }

    /// Create content filtered error
    pub fn content_filtered(provider: &'static str, reason: impl Into<String>) -> Self {
        Self::ContentFiltered {
            provider,
            reason: reason.into(),
        }
    }

    /// Create API error with status code
    pub fn api_error(provider: &'static str, status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            provider,
            status,
            message: message.into(),
        }
    }

    /// Create generic error
    pub fn other(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Other {
            provider,
            message: message.into(),
        }
    }

    /// Name of the provider that raised the error
    pub fn provider(&self) -> &'static str {
        match self {
            Self::Authentication { provider, .. }
            | Self::RateLimit { provider, .. }
            | Self::InvalidRequest { provider, .. }
            | Self::Network { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::Configuration { provider, .. }
            | Self::ResponseParsing { provider, .. }
            | Self::ContentFiltered { provider, .. }
            | Self::ApiError { provider, .. }
            | Self::Other { provider, .. } => provider,
        }
    }

    /// Upstream HTTP status, when the provider answered with one
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Authentication { .. } => Some(401),
            Self::RateLimit { .. } => Some(429),
            Self::InvalidRequest { .. } => Some(400),
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Map a `reqwest` transport error, distinguishing timeouts
    pub fn from_reqwest(provider: &'static str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::timeout(provider, err.to_string())
        } else if err.is_decode() {
            Self::response_parsing(provider, err.to_string())
        } else {
            Self::network(provider, err.to_string())
        }
    }

    /// Map a non-2xx response status and body
    pub fn from_http_status(provider: &'static str, status: u16, body: &str) -> Self {
        match status {
            400 => Self::invalid_request(provider, format!("Bad request: {}", body)),
            401 | 403 => Self::authentication(provider, "Invalid or missing API key"),
            429 => Self::rate_limit(provider, None),
            _ => Self::api_error(provider, status, body),
        }
    }
}
