use league_api::ApiError;
use thiserror::Error;

/// Failures while setting up or running a test.
#[derive(Error, Debug)]
pub enum TestError {
    /// A scripted reply could not be serialized.
    #[error("Failed to serialize scripted reply: {0}")]
    Json(#[from] serde_json::Error),

    /// The client under test returned an error.
    #[error(transparent)]
    Api(#[from] ApiError),
}
