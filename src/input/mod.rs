pub mod binding;
pub mod driver;
pub mod listeners;

pub use binding::GestureBinding;
pub use driver::InputDriver;
pub use listeners::{ListenerHost, SessionListeners};
