use crate::foundation::error::{StackvizError, StackvizResult};

/// Outcome of one stack operation.
///
/// Boundary conditions are outcomes, not errors: the sequencer renders them as feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum OperationResult {
    /// The operation applied (or, for queries, found what it needed).
    Success,
    /// Push on a full stack.
    Overflow,
    /// Pop or peek on an empty stack.
    Underflow,
}

impl OperationResult {
    /// Return `true` for [`OperationResult::Success`].
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Fixed-capacity LIFO stack. Index `0` is the bottom.
#[derive(Clone, Debug)]
pub struct BoundedStack<T> {
    capacity: usize,
    elements: Vec<T>,
}

impl<T> BoundedStack<T> {
    /// Create an empty stack holding at most `capacity` elements.
    pub fn new(capacity: usize) -> StackvizResult<Self> {
        if capacity == 0 {
            return Err(StackvizError::validation("stack capacity must be > 0"));
        }
        Ok(Self {
            capacity,
            elements: Vec::with_capacity(capacity),
        })
    }

    /// Maximum number of elements.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Return `true` when no elements are stored.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Return `true` when `len() == capacity()`.
    pub fn is_full(&self) -> bool {
        self.elements.len() == self.capacity
    }

    /// Elements bottom to top.
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// Append `value` on top unless the stack is full.
    pub fn push(&mut self, value: T) -> OperationResult {
        self.check();
        if self.is_full() {
            return OperationResult::Overflow;
        }
        self.elements.push(value);
        self.check();
        OperationResult::Success
    }

    /// Remove and return the top value.
    pub fn pop(&mut self) -> (OperationResult, Option<T>) {
        self.check();
        match self.elements.pop() {
            Some(v) => {
                self.check();
                (OperationResult::Success, Some(v))
            }
            None => (OperationResult::Underflow, None),
        }
    }

    /// Borrow the top value without removing it.
    pub fn peek(&self) -> (OperationResult, Option<&T>) {
        match self.elements.last() {
            Some(v) => (OperationResult::Success, Some(v)),
            None => (OperationResult::Underflow, None),
        }
    }

    /// Remove every element, one at a time, top to bottom.
    ///
    /// Elements not yet yielded stay on the stack, so the caller can observe `len()` shrinking
    /// between removals.
    pub fn drain_top_down(&mut self) -> DrainTopDown<'_, T> {
        DrainTopDown { stack: self }
    }

    /// Remove every element. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        self.drain_top_down().count()
    }

    fn check(&self) {
        debug_assert!(
            self.elements.len() <= self.capacity,
            "stack length {} exceeds capacity {}",
            self.elements.len(),
            self.capacity
        );
    }
}

/// Iterator returned by [`BoundedStack::drain_top_down`].
#[derive(Debug)]
pub struct DrainTopDown<'a, T> {
    stack: &'a mut BoundedStack<T>,
}

impl<T> DrainTopDown<'_, T> {
    /// Number of elements still on the stack.
    pub fn remaining(&self) -> usize {
        self.stack.len()
    }
}

impl<T> Iterator for DrainTopDown<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.stack.pop().1
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.stack.len()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stack/state.rs"]
mod tests;
