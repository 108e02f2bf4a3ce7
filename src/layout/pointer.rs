use crate::{
    animation::step::Span, config::LayoutConfig, foundation::core::Point,
    layout::slots::SlotLayout,
};

/// Derived visibility and target of the top pointer. Never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerState {
    /// `true` iff the stack is non-empty.
    pub visible: bool,
    /// Top index when visible.
    pub target_index: Option<usize>,
}

/// Arrow endpoints and label center for one target index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPose {
    /// Arrow from outside the container to just short of the block.
    pub arrow: Span,
    /// `Top` label center.
    pub label: Point,
}

/// Computes where the top pointer should be for a given stack length.
#[derive(Clone, Debug)]
pub struct PointerTracker {
    slots: SlotLayout,
    reach: f64,
    gap: f64,
    label_offset: f64,
}

impl PointerTracker {
    /// Tracker over `slots`.
    pub fn new(slots: SlotLayout, cfg: &LayoutConfig) -> Self {
        Self {
            slots,
            reach: cfg.pointer_reach,
            gap: cfg.pointer_gap,
            label_offset: cfg.pointer_label_offset,
        }
    }

    /// Derive the pointer state for a stack holding `len` elements.
    pub fn state(&self, len: usize) -> PointerState {
        PointerState {
            visible: len > 0,
            target_index: len.checked_sub(1),
        }
    }

    /// Pose pointing at the block in slot `index`.
    pub fn pose(&self, index: usize) -> PointerPose {
        let y = self.slots.slot_position(index).y;
        let x_start = self.slots.container_rect().x0 - self.reach;
        let x_end = self.slots.slot_rect(index).x0 - self.gap;
        PointerPose {
            arrow: Span {
                start: Point::new(x_start, y),
                end: Point::new(x_end, y),
            },
            label: Point::new(x_start - self.label_offset, y),
        }
    }

    /// Pose for `state`, or `None` when the pointer is hidden.
    pub fn target(&self, state: PointerState) -> Option<PointerPose> {
        state.target_index.map(|i| self.pose(i))
    }

    /// Resting pose used for the hidden pointer at setup.
    pub fn rest_pose(&self) -> PointerPose {
        self.pose(0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/pointer.rs"]
mod tests;
