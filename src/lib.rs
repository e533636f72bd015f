pub mod camera;
pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod input;
pub mod interaction;
pub mod math;
pub mod scene;

pub use camera::{CameraPose, ControllerState, FirstPersonController, InteractionOutcome};
pub use config::ControllerConfig;
pub use error::{ControllerError, ControllerResult};
pub use input::{InputSampler, InputSnapshot, Key};
pub use interaction::{AabbRaycaster, InteractableTarget, RaycastService, UiEvent, UiSink};
