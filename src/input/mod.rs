mod keys;
mod sampler;
mod winit_adapter;

pub use keys::{Key, KeyState, MouseButton};
pub use sampler::{InputSampler, InputSnapshot};
pub use winit_adapter::{keycode_to_key, mouse_button_to_button, HostSignal, WinitInput};
