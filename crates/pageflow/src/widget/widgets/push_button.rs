//! PushButton widget implementation.
//!
//! A minimal clickable text button. The walkthrough container uses one as
//! its combined skip/done action button.

use pageflow_core::{Object, ObjectId, Signal};

use crate::render::{Color, Font, Point};
use crate::widget::{
    MouseButton, PaintContext, SizeHint, SizePolicy, SizePolicyPair, Widget, WidgetBase,
    WidgetEvent,
};

/// Horizontal padding on each side of the label.
const TEXT_PADDING: f32 = 16.0;

/// Minimum button width.
const MIN_WIDTH: f32 = 64.0;

/// Minimum button height.
const MIN_HEIGHT: f32 = 24.0;

/// A clickable text button.
///
/// # Signals
///
/// - `clicked(())`: Emitted when the button is pressed and released
///   inside its bounds
pub struct PushButton {
    /// Widget base.
    base: WidgetBase,

    /// The button label.
    text: String,

    /// Label font.
    font: Font,

    /// Background color.
    background_color: Color,

    /// Background color while pressed.
    pressed_color: Color,

    /// Label color.
    text_color: Color,

    /// Whether a press started inside the button and has not been
    /// released yet.
    pressed: bool,

    /// Signal emitted on click.
    pub clicked: Signal<()>,
}

impl PushButton {
    /// Create a button with the given label.
    pub fn new(text: impl Into<String>) -> Self {
        let mut base = WidgetBase::new();
        base.set_size_policy(SizePolicyPair::new(
            SizePolicy::Preferred,
            SizePolicy::Fixed,
        ));

        Self {
            base,
            text: text.into(),
            font: Font::default_ui(),
            background_color: Color::from_rgb8(51, 122, 183),
            pressed_color: Color::from_rgb8(40, 96, 144),
            text_color: Color::WHITE,
            pressed: false,
            clicked: Signal::new(),
        }
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// Get the button label.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the button label.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.text != text {
            self.text = text;
            self.base.update();
        }
    }

    /// Get the label font.
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Set the label font.
    pub fn set_font(&mut self, font: Font) {
        self.font = font;
        self.base.update();
    }

    /// Set the font using builder pattern.
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    /// Set the background color.
    pub fn set_background_color(&mut self, color: Color) {
        self.background_color = color;
        self.base.update();
    }

    /// Set background color using builder pattern.
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the label color.
    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
        self.base.update();
    }

    /// Check if the button is currently held down.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    // =========================================================================
    // Event Handlers
    // =========================================================================

    fn handle_mouse_press(&mut self, button: MouseButton, pos: Point) -> bool {
        if button != MouseButton::Left || !self.base.is_enabled() {
            return false;
        }
        if self.base.contains_point(pos) {
            self.pressed = true;
            self.base.update();
            return true;
        }
        false
    }

    fn handle_mouse_release(&mut self, button: MouseButton, pos: Point) -> bool {
        if button != MouseButton::Left || !self.pressed {
            return false;
        }
        self.pressed = false;
        self.base.update();

        // A click requires the release to land inside the button.
        if self.base.contains_point(pos) {
            self.clicked.emit(());
        }
        true
    }
}

impl Object for PushButton {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for PushButton {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        let text_width = self.font.measure_width(&self.text);
        let preferred_width = (text_width + TEXT_PADDING * 2.0).max(MIN_WIDTH);
        let preferred_height = (self.font.line_height() + 8.0).max(MIN_HEIGHT);

        SizeHint::from_dimensions(preferred_width, preferred_height)
            .with_minimum_dimensions(MIN_WIDTH, MIN_HEIGHT)
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        if !self.base.is_visible() {
            return;
        }

        let rect = ctx.rect();
        let background = if self.pressed {
            self.pressed_color
        } else {
            self.background_color
        };
        ctx.renderer().fill_rect(rect, background);

        let text_width = self.font.measure_width(&self.text);
        // Center the label within the button's rect, which may carry the
        // widget's offset inside its parent.
        let baseline = Point::new(
            rect.origin.x + (rect.width() - text_width) / 2.0,
            rect.origin.y + (rect.height() + self.font.size()) / 2.0,
        );
        ctx.renderer()
            .draw_text(&self.text, baseline, &self.font, self.text_color);
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::MousePress(e) => {
                if self.handle_mouse_press(e.button, e.local_pos) {
                    event.accept();
                    return true;
                }
            }
            WidgetEvent::MouseRelease(e) => {
                if self.handle_mouse_release(e.button, e.local_pos) {
                    event.accept();
                    return true;
                }
            }
            _ => {}
        }
        false
    }
}

// Ensure PushButton is Send + Sync
static_assertions::assert_impl_all!(PushButton: Send, Sync);
