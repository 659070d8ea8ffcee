pub mod app;
pub mod gesture_pad;
pub mod nav_log;

pub use app::App;
pub use gesture_pad::GesturePad;
