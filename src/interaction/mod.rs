mod proximity;
mod raycast;
mod target;
mod ui;

pub use proximity::ProximityTracker;
pub use raycast::{AabbRaycaster, RayHit, RaycastService};
pub use target::{InteractableTarget, RegistrationReport, ResolvedTarget, TargetGeometry, TargetRegistry};
pub use ui::{LogSink, UiEvent, UiSink};

pub(crate) use ui::Toggle;
