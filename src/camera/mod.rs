mod bounds;
mod first_person;
mod head_bob;
mod pose;
mod state;

pub use bounds::Bounds;
pub use first_person::FirstPersonController;
pub use head_bob::HeadBob;
pub use pose::{look_rotation, CameraPose};
pub use state::{ControllerState, InteractionOutcome};
