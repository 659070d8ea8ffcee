pub mod gesture;
pub mod touch;

pub use gesture::GestureState;
pub use touch::TouchState;
