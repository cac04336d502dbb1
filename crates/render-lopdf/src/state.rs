use placemat_render_core::StandardFont;
use placemat_types::Color;

/// The slice of the PDF graphics state this backend tracks, so redundant
/// operators can be skipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct GraphicsState {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub line_width: f64,
    pub font: Option<(StandardFont, f64)>,
}

impl Default for GraphicsState {
    fn default() -> Self {
        Self {
            fill: None,
            stroke: None,
            // PDF default line width.
            line_width: 1.0,
            font: None,
        }
    }
}

/// Current graphics state plus everything pushed by `q`.
#[derive(Debug, Default)]
pub(crate) struct StateStack {
    current: GraphicsState,
    saved: Vec<GraphicsState>,
}

impl StateStack {
    pub fn current(&self) -> &GraphicsState {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut GraphicsState {
        &mut self.current
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    /// Returns false when there was nothing to pop.
    pub fn pop(&mut self) -> bool {
        match self.saved.pop() {
            Some(state) => {
                self.current = state;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_restores_pushed_state() {
        let mut stack = StateStack::default();
        stack.current_mut().fill = Some(Color::BLACK);
        stack.push();
        stack.current_mut().fill = Some(Color::WHITE);
        stack.current_mut().line_width = 0.5;
        assert_eq!(stack.depth(), 1);

        assert!(stack.pop());
        assert_eq!(stack.current().fill, Some(Color::BLACK));
        assert_eq!(stack.current().line_width, 1.0);
        assert!(!stack.pop());
    }
}
