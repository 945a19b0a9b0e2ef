pub mod keyboard;
pub mod pointer;
pub mod scroll;

pub use keyboard::wire_global_keydown;
pub use pointer::wire_input_handlers;
