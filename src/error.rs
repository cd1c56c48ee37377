use crate::i18n::Locale;
use std::path::PathBuf;
use thiserror::Error;

/// Failure reading or writing a locale document.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The locale file is missing or unreadable.
    #[error("failed to read locale file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not a valid locale document.
    #[error("failed to parse locale file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file declares a different locale than the one requested.
    #[error(
        "locale file {} declares locale '{found}', expected '{expected}'",
        .path.display()
    )]
    LocaleMismatch {
        path: PathBuf,
        expected: Locale,
        found: String,
    },

    /// The locale file could not be written.
    #[error("failed to write locale file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure from an external translation provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request could not be sent (network error, timeout).
    #[error("failed to send request to {provider}: {source}")]
    Request {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered with a non-success status.
    #[error("{provider} API error ({status}): {body}")]
    Api {
        provider: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body could not be decoded.
    #[error("failed to parse {provider} response: {source}")]
    Response {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The provider cannot translate into this locale.
    #[error("{provider} does not support locale '{locale}'")]
    UnsupportedLocale {
        provider: &'static str,
        locale: Locale,
    },
}

/// Failure while translating a label into one locale.
///
/// Caught at the per-locale loop boundary: logged, then the next locale runs.
#[derive(Debug, Error)]
pub enum LocaleError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}
