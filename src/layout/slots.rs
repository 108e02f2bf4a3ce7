use crate::{
    config::LayoutConfig,
    foundation::core::{Point, Rect, Size},
};

/// Maps stack indices to slot centers and back.
///
/// Positions depend only on the index and fixed layout constants, never on where a neighboring
/// block happens to be drawn, so they are stable regardless of animation timing.
#[derive(Clone, Debug, PartialEq)]
pub struct SlotLayout {
    capacity: usize,
    stack_x: f64,
    base_y: f64,
    slot_height: f64,
    slot_width: f64,
    container_padding: f64,
    size_label_offset: f64,
}

impl SlotLayout {
    /// Layout for a stack of `capacity` slots.
    pub fn new(capacity: usize, cfg: &LayoutConfig) -> Self {
        Self {
            capacity,
            stack_x: cfg.stack_x,
            base_y: cfg.base_y,
            slot_height: cfg.slot_height,
            slot_width: cfg.slot_width,
            container_padding: cfg.container_padding,
            size_label_offset: cfg.size_label_offset,
        }
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Center of the block at `index`: `index` slot heights above the base.
    pub fn slot_position(&self, index: usize) -> Point {
        Point::new(
            self.stack_x,
            self.base_y + self.slot_height / 2.0 + index as f64 * self.slot_height,
        )
    }

    /// Slot whose band contains `p`, if `p` lies inside the slot column.
    pub fn slot_index(&self, p: Point) -> Option<usize> {
        let half_w = self.slot_width / 2.0;
        if (p.x - self.stack_x).abs() > half_w {
            return None;
        }
        let rel = (p.y - self.base_y) / self.slot_height;
        if rel < 0.0 {
            return None;
        }
        let index = rel.floor() as usize;
        (index < self.capacity).then_some(index)
    }

    /// Size of one block.
    pub fn block_size(&self) -> Size {
        Size::new(self.slot_width, self.slot_height)
    }

    /// Bounds of the block at `index`.
    pub fn slot_rect(&self, index: usize) -> Rect {
        Rect::from_center_size(self.slot_position(index), self.block_size())
    }

    /// Container outline bounds, resting on the base.
    pub fn container_rect(&self) -> Rect {
        let height = self.slot_height * self.capacity as f64 + self.container_padding;
        Rect::new(
            self.stack_x - self.slot_width / 2.0,
            self.base_y,
            self.stack_x + self.slot_width / 2.0,
            self.base_y + height,
        )
    }

    /// Center of the container outline.
    pub fn container_center(&self) -> Point {
        self.container_rect().center()
    }

    /// Center of the size counter under the container.
    pub fn size_label_position(&self) -> Point {
        Point::new(self.stack_x, self.base_y - self.size_label_offset)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/slots.rs"]
mod tests;
