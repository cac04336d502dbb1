use crate::canvas::Canvas;
use std::ops::{Deref, DerefMut};

/// Saves the canvas graphics state on creation and restores it on drop.
///
/// Transforms applied through the guard never outlive it, including when a draw call
/// inside the scope returns early with an error.
pub struct StateGuard<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
}

impl<'a, C: Canvas + ?Sized> StateGuard<'a, C> {
    pub fn new(canvas: &'a mut C) -> Self {
        canvas.save_state();
        Self { canvas }
    }
}

impl<C: Canvas + ?Sized> Deref for StateGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> DerefMut for StateGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> Drop for StateGuard<'_, C> {
    fn drop(&mut self) {
        self.canvas.restore_state();
    }
}
