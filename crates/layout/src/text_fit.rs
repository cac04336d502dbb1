use placemat_style::TextOrientation;

/// Labels narrower than the box by less than this are condensed.
pub const FIT_SLACK: f64 = 4.0;
/// Horizontal padding left around a condensed label.
pub const CONDENSE_PADDING: f64 = 6.0;

/// How a label is placed inside its box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextPlacement {
    /// Rotated 90 degrees about the box center.
    Rotated,
    /// Squeezed horizontally by `scale` about the box center; font size is unchanged.
    Condensed { scale: f64 },
    /// Centered with no transform.
    Centered,
    /// The box is too narrow to hold any text.
    Hidden,
}

/// Chooses a placement for a label of `text_width` points in a box `box_width` wide.
pub fn fit_text(text_width: f64, box_width: f64, orientation: TextOrientation) -> TextPlacement {
    if orientation == TextOrientation::Vertical {
        return TextPlacement::Rotated;
    }
    if text_width <= box_width - FIT_SLACK {
        return TextPlacement::Centered;
    }
    let scale = (box_width - CONDENSE_PADDING) / text_width;
    // A box no wider than the padding gets no label rather than a zero, negative
    // or infinite horizontal scale.
    if scale > 0.0 && scale.is_finite() {
        TextPlacement::Condensed { scale }
    } else {
        TextPlacement::Hidden
    }
}
