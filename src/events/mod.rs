pub mod keyboard;
pub mod touch;

pub use keyboard::wire_global_keydown;
pub use touch::{wire_input_handlers, InputWiring};
