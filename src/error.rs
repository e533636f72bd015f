//! Error types for the walkthrough controller

use thiserror::Error;

/// Result type for controller operations
pub type ControllerResult<T> = Result<T, ControllerError>;

/// Errors raised while configuring the controller or registering targets.
/// None of these stop the frame loop.
#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("Target has an empty name")]
    EmptyTargetName,

    #[error("Target {0} has a non-finite world position")]
    NonFinitePosition(String),

    #[error("Target {0} has no geometry to raycast against")]
    MissingGeometry(String),

    #[error("Target {0} has an inverted or non-finite bounding box")]
    InvalidGeometry(String),

    #[error("Target {0} has no inspection pose configured")]
    MissingInspectionPose(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
