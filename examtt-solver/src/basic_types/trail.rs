use std::iter::Rev;
use std::ops::Deref;
use std::vec::Drain;

use crate::examtt_assert_simple;

/// A chronological log of values grouped into frames; one frame corresponds to
/// the prunes made on behalf of one tentative assignment.
///
/// Backtracking always pops exactly the most recent frame, handing back its
/// entries in reverse order so that the caller can undo them symmetrically.
#[derive(Clone, Debug)]
pub(crate) struct Trail<T> {
    /// At index i is the position where the i-th frame starts on the trail.
    frame_start: Vec<usize>,
    trail: Vec<T>,
}

// We explicitly implement Default and not as a derive, because we want to
// avoid imposing Default on the generic type T.
impl<T> Default for Trail<T> {
    fn default() -> Self {
        Trail {
            frame_start: Default::default(),
            trail: Default::default(),
        }
    }
}

impl<T> Trail<T> {
    /// Opens a new frame; subsequent pushes are recorded on this frame.
    pub(crate) fn new_frame(&mut self) {
        self.frame_start.push(self.trail.len());
    }

    /// The number of currently open frames.
    pub(crate) fn depth(&self) -> usize {
        self.frame_start.len()
    }

    /// Closes the most recent frame, draining its entries in reverse push
    /// order.
    pub(crate) fn pop_frame(&mut self) -> Rev<Drain<'_, T>> {
        examtt_assert_simple!(!self.frame_start.is_empty());

        let start = self.frame_start.pop().unwrap_or(0);
        self.trail.drain(start..).rev()
    }

    pub(crate) fn push(&mut self, elem: T) {
        examtt_assert_simple!(
            !self.frame_start.is_empty(),
            "pushed onto a trail without an open frame"
        );
        self.trail.push(elem)
    }
}

impl<T> Deref for Trail<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.trail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pushed_values_are_observed_through_indexing() {
        let mut trail = Trail::default();
        trail.new_frame();

        let expected = [1, 2, 3, 4];
        for &elem in expected.iter() {
            trail.push(elem);
        }

        assert_eq!(&expected, trail.deref());
    }

    #[test]
    fn popping_a_frame_removes_exactly_its_elements() {
        let mut trail = Trail::default();
        trail.new_frame();
        trail.push(1);
        trail.new_frame();
        trail.push(2);
        trail.push(3);

        let _ = trail.pop_frame();

        assert_eq!(&[1], trail.deref());
        assert_eq!(trail.depth(), 1);
    }

    #[test]
    fn popped_elements_are_given_in_reverse_order() {
        let mut trail = Trail::default();
        trail.new_frame();
        trail.push(1);
        trail.push(2);
        trail.push(3);

        let popped = trail.pop_frame().collect::<Vec<_>>();
        assert_eq!(vec![3, 2, 1], popped);
    }

    #[test]
    fn an_empty_frame_pops_nothing() {
        let mut trail: Trail<u8> = Trail::default();
        trail.new_frame();

        assert_eq!(trail.pop_frame().count(), 0);
        assert_eq!(trail.depth(), 0);
    }
}
