//! PageIndicator widget implementation.
//!
//! A row of dots showing the number of pages in a paged view and which
//! page is current.

use pageflow_core::{Object, ObjectId, Signal};

use crate::render::{Color, Point, Size};
use crate::widget::{PaintContext, SizeHint, SizePolicyPair, Widget, WidgetBase};

/// Dot diameter.
const DOT_DIAMETER: f32 = 7.0;

/// Gap between adjacent dots.
const DOT_SPACING: f32 = 9.0;

/// A dot-style page indicator.
///
/// # Signals
///
/// - `current_changed(usize)`: Emitted when the current page changes
pub struct PageIndicator {
    /// Widget base.
    base: WidgetBase,

    /// Number of dots.
    count: usize,

    /// Index of the highlighted dot.
    current: usize,

    /// Color of the highlighted dot.
    active_color: Color,

    /// Color of the remaining dots.
    inactive_color: Color,

    /// Signal emitted when the current page changes.
    pub current_changed: Signal<usize>,
}

impl PageIndicator {
    /// Create an indicator with the given number of dots.
    pub fn new(count: usize) -> Self {
        let mut base = WidgetBase::new();
        base.set_size_policy(SizePolicyPair::fixed());

        Self {
            base,
            count,
            current: 0,
            active_color: Color::WHITE,
            inactive_color: Color::WHITE.with_alpha(0.35),
            current_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Pages
    // =========================================================================

    /// Get the number of dots.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Set the number of dots. The current page is re-clamped.
    pub fn set_count(&mut self, count: usize) {
        if self.count != count {
            self.count = count;
            let clamped = self.current.min(count.saturating_sub(1));
            if clamped != self.current {
                self.current = clamped;
                self.current_changed.emit(clamped);
            }
            self.base.update();
        }
    }

    /// Get the index of the highlighted dot.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Set the highlighted dot, clamped to the valid range.
    pub fn set_current(&mut self, page: usize) {
        let page = page.min(self.count.saturating_sub(1));
        if self.current != page {
            self.current = page;
            self.current_changed.emit(page);
            self.base.update();
        }
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    /// Set the color of the highlighted dot.
    pub fn set_active_color(&mut self, color: Color) {
        self.active_color = color;
        self.base.update();
    }

    /// Set the color of the remaining dots.
    pub fn set_inactive_color(&mut self, color: Color) {
        self.inactive_color = color;
        self.base.update();
    }

    /// Total width of the dot row.
    fn row_width(&self) -> f32 {
        if self.count == 0 {
            return 0.0;
        }
        self.count as f32 * DOT_DIAMETER + (self.count as f32 - 1.0) * DOT_SPACING
    }
}

impl Object for PageIndicator {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for PageIndicator {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::fixed(Size::new(
            self.row_width().max(DOT_DIAMETER),
            DOT_DIAMETER * 2.0,
        ))
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        if !self.base.is_visible() || self.count == 0 {
            return;
        }

        let rect = ctx.rect();
        let radius = DOT_DIAMETER / 2.0;
        // Center the dot row inside the widget rect, which may carry the
        // widget's offset inside its parent.
        let start_x = rect.origin.x + (rect.width() - self.row_width()) / 2.0 + radius;
        let center_y = rect.origin.y + rect.height() / 2.0;

        let (active, inactive) = (self.active_color, self.inactive_color);
        for i in 0..self.count {
            let cx = start_x + i as f32 * (DOT_DIAMETER + DOT_SPACING);
            let color = if i == self.current { active } else { inactive };
            ctx.renderer()
                .fill_circle(Point::new(cx, center_y), radius, color);
        }
    }
}

// Ensure PageIndicator is Send + Sync
static_assertions::assert_impl_all!(PageIndicator: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Rect, RecordingRenderer};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_current_is_clamped() {
        let mut indicator = PageIndicator::new(4);
        indicator.set_current(99);
        assert_eq!(indicator.current(), 3);
    }

    #[test]
    fn test_current_changed_signal() {
        let mut indicator = PageIndicator::new(4);
        let seen = Arc::new(AtomicUsize::new(usize::MAX));

        let seen2 = seen.clone();
        indicator.current_changed.connect(move |page| {
            seen2.store(*page, Ordering::SeqCst);
        });

        indicator.set_current(2);
        assert_eq!(seen.load(Ordering::SeqCst), 2);

        // Setting the same page again must not re-emit.
        seen.store(usize::MAX, Ordering::SeqCst);
        indicator.set_current(2);
        assert_eq!(seen.load(Ordering::SeqCst), usize::MAX);
    }

    #[test]
    fn test_shrinking_count_reclamps_current() {
        let mut indicator = PageIndicator::new(5);
        indicator.set_current(4);
        indicator.set_count(3);
        assert_eq!(indicator.current(), 2);
    }

    #[test]
    fn test_paint_one_circle_per_page() {
        let mut indicator = PageIndicator::new(4);
        indicator.set_geometry(Rect::new(0.0, 0.0, 120.0, 20.0));

        let mut renderer = RecordingRenderer::new();
        let mut ctx = PaintContext::new(&mut renderer, indicator.rect());
        indicator.paint(&mut ctx);

        assert_eq!(renderer.circle_count(), 4);
    }

    #[test]
    fn test_paint_centers_dots_inside_offset_rect() {
        use crate::render::DrawCommand;

        let indicator = PageIndicator::new(3);
        let rect = Rect::new(0.0, 744.0, 390.0, 14.0);
        let mut renderer = RecordingRenderer::new();
        let mut ctx = PaintContext::new(&mut renderer, rect);
        indicator.paint(&mut ctx);

        for cmd in renderer.commands() {
            if let DrawCommand::FillCircle { center, .. } = cmd {
                assert!(
                    rect.contains(*center),
                    "dot drawn at {center:?}, outside indicator rect {rect:?}"
                );
                assert_eq!(center.y, 751.0);
            }
        }
    }
}
