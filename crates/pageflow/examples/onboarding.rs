//! Drives a walkthrough without a windowing backend.
//!
//! Builds a four-screen onboarding flow, simulates a drag through the
//! pages and a tap on the action button, and prints what a renderer
//! would be asked to draw at each step.
//!
//! Run with `RUST_LOG=pageflow=debug` to see the container's tracing
//! output.

use pageflow::core::{Object, ObjectId};
use pageflow::render::{Color, Point, RecordingRenderer, Size};
use pageflow::widget::widgets::{FnScreenFactory, Walkthrough};
use pageflow::widget::{
    MouseButton, MouseMoveEvent, MousePressEvent, MouseReleaseEvent, PaintContext, SizeHint,
    Widget, WidgetBase, WidgetEvent,
};

/// A screen that fills its slot with a single color.
struct ColorScreen {
    base: WidgetBase,
    color: Color,
}

impl ColorScreen {
    fn new(color: Color) -> Self {
        Self {
            base: WidgetBase::new(),
            color,
        }
    }
}

impl Object for ColorScreen {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for ColorScreen {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::from_dimensions(320.0, 568.0)
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let rect = ctx.rect();
        let color = self.color;
        ctx.renderer().fill_rect(rect, color);
    }
}

fn press(walkthrough: &mut Walkthrough, x: f32, y: f32) {
    let mut event =
        WidgetEvent::MousePress(MousePressEvent::new(MouseButton::Left, Point::new(x, y)));
    walkthrough.event(&mut event);
}

fn drag_to(walkthrough: &mut Walkthrough, x: f32, y: f32) {
    let mut event = WidgetEvent::MouseMove(MouseMoveEvent::new(Point::new(x, y)));
    walkthrough.event(&mut event);
}

fn release(walkthrough: &mut Walkthrough, x: f32, y: f32) {
    let mut event =
        WidgetEvent::MouseRelease(MouseReleaseEvent::new(MouseButton::Left, Point::new(x, y)));
    walkthrough.event(&mut event);
}

fn paint_summary(walkthrough: &Walkthrough) -> String {
    let mut renderer = RecordingRenderer::new();
    let mut ctx = PaintContext::new(&mut renderer, walkthrough.rect());
    walkthrough.paint(&mut ctx);
    format!(
        "{} draw commands, {} indicator dots, button label {:?}",
        renderer.commands().len(),
        renderer.circle_count(),
        renderer.first_text()
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut factory = FnScreenFactory::new(|id: &str| {
        let color = match id {
            "welcome" => Color::from_rgb8(38, 70, 83),
            "sync" => Color::from_rgb8(42, 157, 143),
            "privacy" => Color::from_rgb8(233, 196, 106),
            "done" => Color::from_rgb8(231, 111, 81),
            _ => return None,
        };
        Some(Box::new(ColorScreen::new(color)) as Box<dyn Widget>)
    });

    let mut walkthrough = Walkthrough::builder()
        .screens(["welcome", "sync", "privacy", "done"])
        .skip_title("Skip")
        .done_title("Get Started")
        .on_dismiss(|| println!("dismiss requested, host should tear down"))
        .build(&mut factory)?;

    walkthrough.set_viewport(Size::new(390.0, 844.0));
    println!(
        "page {}: {}",
        walkthrough.current_page(),
        paint_summary(&walkthrough)
    );

    // Drag one page to the left.
    press(&mut walkthrough, 380.0, 420.0);
    drag_to(&mut walkthrough, 200.0, 420.0);
    drag_to(&mut walkthrough, 20.0, 420.0);
    release(&mut walkthrough, 20.0, 420.0);
    println!(
        "page {}: {}",
        walkthrough.current_page(),
        paint_summary(&walkthrough)
    );

    // Jump to the final page, where the button reads the done title.
    walkthrough.set_scroll_x(3.0 * 390.0);
    walkthrough.end_scroll();
    println!(
        "page {}: {}",
        walkthrough.current_page(),
        paint_summary(&walkthrough)
    );

    // Tap the action button.
    let center = walkthrough.action_button().geometry().center();
    press(&mut walkthrough, center.x, center.y);
    release(&mut walkthrough, center.x, center.y);

    Ok(())
}
