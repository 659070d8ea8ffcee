//! Pointer-gesture navigation: a drag from an anchor point is classified
//! against a fixed set of directional targets, with live offset/progress
//! feedback and a single navigation at release.
//!
//! Two layouts share one core: a 4-way orthogonal pad and a 6-slot clock
//! face with magnetic snapping.

pub mod components;
pub mod config;
pub mod controller;
pub mod geometry;
pub mod input;
pub mod resolver;
pub mod state;
pub mod topology;
pub mod util;

pub use config::GestureConfig;
pub use controller::GestureController;
pub use geometry::{Direction, Vec2};
pub use resolver::{Resolution, resolve};
pub use state::GestureState;
pub use topology::{Target, TargetId, Topology};
