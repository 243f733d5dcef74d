use thiserror::Error;

/// Error type for directory operations
///
/// Every variant leaves the directory untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryError {
    /// The referenced activity does not exist
    #[error("Activity not found")]
    ActivityNotFound(String),
    /// Enroll was called for an email already on the list
    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp { email: String, activity: String },
    /// Withdraw was called for an email not on the list
    #[error("{email} is not signed up for {activity}")]
    NotSignedUp { email: String, activity: String },
}

/// Error type for building the directory from seed data
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("activity name must not be blank")]
    BlankName,
    #[error("duplicate activity: {0}")]
    DuplicateActivity(String),
    #[error("activity {0} must allow at least one participant")]
    ZeroCapacity(String),
    #[error("{email} appears more than once in {activity}")]
    DuplicateParticipant { activity: String, email: String },
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse seed file: {0}")]
    Json(#[from] serde_json::Error),
}
