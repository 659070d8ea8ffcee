// Snapshot published to the rendering layer after every processed event.

use crate::geometry::Vec2;
use crate::resolver::Resolution;
use crate::topology::TargetId;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureState {
    pub is_dragging: bool,
    /// Visual offset, already clamped/blended.
    pub offset: Vec2,
    pub active_target: Option<TargetId>,
    /// In `[0, 1]`; 1 means a release now would navigate.
    pub progress: f64,
}

impl GestureState {
    /// Idle snapshot: not dragging, no offset, no target.
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Fresh session, pointer still on the anchor.
    pub fn pressed() -> Self {
        Self {
            is_dragging: true,
            ..Self::default()
        }
    }

    pub fn dragging(res: Resolution) -> Self {
        Self {
            is_dragging: true,
            offset: res.offset,
            active_target: res.target,
            progress: res.progress,
        }
    }

    /// Whether releasing in this state commits navigation.
    pub fn is_armed(&self) -> bool {
        self.is_dragging && self.progress >= 1.0 && self.active_target.is_some()
    }

    pub fn is_active(&self, id: &TargetId) -> bool {
        self.active_target.as_ref() == Some(id)
    }
}
