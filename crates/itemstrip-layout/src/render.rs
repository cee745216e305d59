//! Paints a computed [`StripLayout`] onto a [`Canvas`].

use crate::config::StripConfig;
use crate::engine::StripLayout;
use itemstrip_core::{Canvas, Color, Point, TextStyle};

/// Per-call drawing parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    /// Style for item text
    pub text: TextStyle,
    /// Fill color for dividers
    pub divider_color: Color,
    /// Draw alternating cell backgrounds and a center guideline
    pub debug_overlay: bool,
}

impl RenderStyle {
    /// Build the style a configuration implies.
    #[must_use]
    pub fn from_config(config: &StripConfig) -> Self {
        Self {
            text: TextStyle {
                size: config.text_size,
                color: config.text_color,
            },
            divider_color: config.divider.color,
            debug_overlay: false,
        }
    }

    /// Enable or disable the debug overlay.
    #[must_use]
    pub fn with_debug_overlay(mut self, enabled: bool) -> Self {
        self.debug_overlay = enabled;
        self
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::from_config(&StripConfig::default())
    }
}

const DEBUG_CELL_EVEN: Color = Color {
    r: 0.2,
    g: 0.6,
    b: 1.0,
    a: 0.15,
};
const DEBUG_CELL_ODD: Color = Color {
    r: 1.0,
    g: 0.6,
    b: 0.2,
    a: 0.15,
};
const DEBUG_GUIDE_WIDTH: f32 = 5.0;

/// Issues draw calls for a layout.
#[derive(Debug, Clone, Default)]
pub struct StripRenderer {
    style: RenderStyle,
}

impl StripRenderer {
    /// Create a renderer with the given style.
    #[must_use]
    pub const fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    /// The style passed to every draw call.
    #[must_use]
    pub const fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Paint `layout`: overlay backgrounds, dividers, text, then the guideline.
    pub fn paint(&self, layout: &StripLayout, canvas: &mut dyn Canvas) {
        if self.style.debug_overlay {
            for cell in &layout.cells {
                let color = if cell.index % 2 == 0 {
                    DEBUG_CELL_EVEN
                } else {
                    DEBUG_CELL_ODD
                };
                canvas.fill_rect(cell.bounds, color);
            }
        }

        for divider in &layout.dividers {
            if divider.bounds.area() > 0.0 {
                canvas.fill_rect(divider.bounds, self.style.divider_color);
            }
        }

        for cell in &layout.cells {
            for (text, origin) in cell.placed_lines() {
                canvas.draw_text(text, origin, &self.style.text);
            }
        }

        if self.style.debug_overlay {
            let mid = layout.size.height / 2.0;
            canvas.draw_line(
                Point::new(0.0, mid),
                Point::new(layout.size.width, mid),
                Color::GRAY,
                DEBUG_GUIDE_WIDTH,
            );
        }
    }
}
