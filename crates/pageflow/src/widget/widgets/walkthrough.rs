//! Walkthrough container widget.
//!
//! A full-viewport onboarding flow: a horizontal strip of screens the user
//! pages through by dragging, a dot indicator, and a combined skip/done
//! action button. Screens are produced by a [`ScreenFactory`] from a list
//! of string identifiers supplied to the [`WalkthroughBuilder`].

use std::sync::Arc;

use pageflow_core::logging::targets;
use pageflow_core::{Object, ObjectId, Signal};

use crate::error::{WalkthroughError, WalkthroughResult};
use crate::render::{Point, Rect, Size};
use crate::widget::widgets::{PageIndicator, PushButton};
use crate::widget::{
    MouseButton, MousePressEvent, MouseReleaseEvent, PaintContext, SizeHint, SizePolicyPair,
    Widget, WidgetBase, WidgetEvent,
};

/// Outer margin used by the action button, both as side padding inside
/// the button and as the minimum distance from the viewport edges.
const PADDING: f32 = 30.0;

/// Height of the action button.
const BUTTON_HEIGHT: f32 = 44.0;

/// Gap between the page indicator and the action button.
const INDICATOR_GAP: f32 = 12.0;

/// Minimum number of screens a walkthrough must have.
const MIN_SCREENS: usize = 3;

/// Preferred size reported before the host assigns a viewport.
const FALLBACK_VIEWPORT: Size = Size::new(320.0, 568.0);

// =============================================================================
// Screen Factory
// =============================================================================

/// Produces screen widgets from string identifiers.
///
/// The walkthrough never constructs screens itself. During
/// [`WalkthroughBuilder::build`] every configured identifier is handed to
/// the factory, in order, once per occurrence. Returning `None` aborts the
/// build with [`WalkthroughError::UnresolvedScreen`].
pub trait ScreenFactory {
    /// Resolve an identifier to a screen widget.
    fn resolve(&mut self, identifier: &str) -> Option<Box<dyn Widget>>;
}

/// A [`ScreenFactory`] backed by a closure.
pub struct FnScreenFactory<F> {
    f: F,
}

impl<F> FnScreenFactory<F>
where
    F: FnMut(&str) -> Option<Box<dyn Widget>>,
{
    /// Wrap a closure as a screen factory.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> ScreenFactory for FnScreenFactory<F>
where
    F: FnMut(&str) -> Option<Box<dyn Widget>>,
{
    fn resolve(&mut self, identifier: &str) -> Option<Box<dyn Widget>> {
        (self.f)(identifier)
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Configures and validates a [`Walkthrough`].
///
/// Obtained from [`Walkthrough::builder`]. The builder enforces the
/// container's contract: at least three screen identifiers, a dismissal
/// handler, and a factory able to resolve every identifier.
pub struct WalkthroughBuilder {
    screen_ids: Vec<String>,
    done_title: String,
    skip_title: Option<String>,
    status_bar_hidden: bool,
    on_dismiss: Option<Box<dyn Fn() + Send + Sync>>,
}

impl WalkthroughBuilder {
    fn new() -> Self {
        Self {
            screen_ids: Vec::new(),
            done_title: "Get Started".to_string(),
            skip_title: None,
            status_bar_hidden: true,
            on_dismiss: None,
        }
    }

    /// Set the ordered list of screen identifiers.
    ///
    /// Duplicate identifiers are allowed; the factory is invoked once per
    /// occurrence.
    pub fn screens<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.screen_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Set the action button title shown on the final page.
    ///
    /// Defaults to `"Get Started"`.
    pub fn done_title(mut self, title: impl Into<String>) -> Self {
        self.done_title = title.into();
        self
    }

    /// Set the action button title shown on non-final pages.
    ///
    /// When unset (or set to an empty string) the button is hidden until
    /// the final page.
    pub fn skip_title(mut self, title: impl Into<String>) -> Self {
        self.skip_title = Some(title.into());
        self
    }

    /// Control whether the host should hide its status bar while the
    /// walkthrough is presented. Defaults to `true`.
    ///
    /// This is fixed at build time; the walkthrough exposes it read-only.
    pub fn status_bar_hidden(mut self, hidden: bool) -> Self {
        self.status_bar_hidden = hidden;
        self
    }

    /// Set the required dismissal handler, invoked when the action button
    /// is tapped.
    pub fn on_dismiss<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_dismiss = Some(Box::new(handler));
        self
    }

    /// Validate the configuration and construct the walkthrough.
    ///
    /// # Errors
    ///
    /// - [`WalkthroughError::TooFewScreens`] if fewer than three
    ///   identifiers were configured
    /// - [`WalkthroughError::MissingDismissHandler`] if no dismissal
    ///   handler was set
    /// - [`WalkthroughError::UnresolvedScreen`] if the factory returns
    ///   `None` for an identifier
    pub fn build(self, factory: &mut dyn ScreenFactory) -> WalkthroughResult<Walkthrough> {
        if self.screen_ids.len() < MIN_SCREENS {
            return Err(WalkthroughError::TooFewScreens {
                count: self.screen_ids.len(),
            });
        }
        let handler = self
            .on_dismiss
            .ok_or(WalkthroughError::MissingDismissHandler)?;

        let mut screens = Vec::with_capacity(self.screen_ids.len());
        for id in &self.screen_ids {
            let screen =
                factory
                    .resolve(id)
                    .ok_or_else(|| WalkthroughError::UnresolvedScreen {
                        identifier: id.clone(),
                    })?;
            screens.push(screen);
        }

        tracing::debug!(
            target: targets::WALKTHROUGH,
            screens = screens.len(),
            status_bar_hidden = self.status_bar_hidden,
            "walkthrough built"
        );

        let mut walkthrough = Walkthrough::from_parts(
            self.screen_ids,
            screens,
            self.done_title,
            self.skip_title,
            self.status_bar_hidden,
        );

        walkthrough.dismiss_requested.connect(move |_| handler());

        Ok(walkthrough)
    }
}

// =============================================================================
// Walkthrough
// =============================================================================

/// Tracks an in-progress drag of the screen strip.
struct DragState {
    press_x: f32,
    start_scroll: f32,
}

/// The walkthrough container.
///
/// # Signals
///
/// - `dismiss_requested(())`: Emitted when the action button is tapped
/// - `page_changed(usize)`: Emitted when the derived current page changes
pub struct Walkthrough {
    /// Widget base.
    base: WidgetBase,

    /// Identifiers the screens were resolved from, in order.
    screen_ids: Vec<String>,

    /// The resolved screens, laid out as a horizontal strip.
    screens: Vec<Box<dyn Widget>>,

    /// Dot indicator reflecting the derived current page.
    indicator: PageIndicator,

    /// Combined skip/done action button.
    action_button: PushButton,

    /// Horizontal scroll offset of the strip, in viewport coordinates.
    scroll_x: f32,

    /// The page the strip last settled on. Used to restore the scroll
    /// position after a viewport change.
    settled_page: usize,

    /// Drag in progress, if any.
    drag: Option<DragState>,

    /// Whether mouse events are currently being forwarded to the button.
    button_grab: bool,

    /// Title shown on the final page.
    done_title: String,

    /// Title shown on non-final pages, if any.
    skip_title: Option<String>,

    /// Whether the host should hide its status bar. Fixed at build time.
    status_bar_hidden: bool,

    /// Signal emitted when the action button is tapped.
    pub dismiss_requested: Arc<Signal<()>>,

    /// Signal emitted when the derived current page changes.
    pub page_changed: Signal<usize>,
}

impl Walkthrough {
    /// Start configuring a walkthrough.
    pub fn builder() -> WalkthroughBuilder {
        WalkthroughBuilder::new()
    }

    fn from_parts(
        screen_ids: Vec<String>,
        screens: Vec<Box<dyn Widget>>,
        done_title: String,
        skip_title: Option<String>,
        status_bar_hidden: bool,
    ) -> Self {
        let mut base = WidgetBase::new();
        base.set_size_policy(SizePolicyPair::expanding());

        let indicator = PageIndicator::new(screens.len());
        let action_button = PushButton::new(done_title.clone());

        let dismiss_requested = Arc::new(Signal::new());
        let forward = dismiss_requested.clone();
        action_button.clicked.connect(move |_| forward.emit(()));

        let mut walkthrough = Self {
            base,
            screen_ids,
            screens,
            indicator,
            action_button,
            scroll_x: 0.0,
            settled_page: 0,
            drag: None,
            button_grab: false,
            done_title,
            skip_title,
            status_bar_hidden,
            dismiss_requested,
            page_changed: Signal::new(),
        };
        walkthrough.refresh_action_button();
        walkthrough
    }

    // =========================================================================
    // Configuration Accessors
    // =========================================================================

    /// Number of screens in the strip.
    pub fn screen_count(&self) -> usize {
        self.screens.len()
    }

    /// The identifiers the screens were resolved from, in order.
    pub fn screen_identifiers(&self) -> &[String] {
        &self.screen_ids
    }

    /// The action button title shown on the final page.
    pub fn done_title(&self) -> &str {
        &self.done_title
    }

    /// The action button title shown on non-final pages, if any.
    pub fn skip_title(&self) -> Option<&str> {
        self.skip_title.as_deref()
    }

    /// Whether the host should hide its status bar while the walkthrough
    /// is presented.
    pub fn status_bar_hidden(&self) -> bool {
        self.status_bar_hidden
    }

    /// The dot indicator. Exposed for host-side styling.
    pub fn indicator(&self) -> &PageIndicator {
        &self.indicator
    }

    /// Mutable access to the dot indicator.
    pub fn indicator_mut(&mut self) -> &mut PageIndicator {
        &mut self.indicator
    }

    /// The combined skip/done action button. Exposed for host-side
    /// styling.
    pub fn action_button(&self) -> &PushButton {
        &self.action_button
    }

    /// Mutable access to the action button.
    pub fn action_button_mut(&mut self) -> &mut PushButton {
        &mut self.action_button
    }

    // =========================================================================
    // Paging
    // =========================================================================

    /// Assign the viewport the walkthrough fills.
    ///
    /// Screens, indicator and button are re-laid out for the new size and
    /// the scroll offset is restored so the last settled page stays
    /// current.
    pub fn set_viewport(&mut self, size: Size) {
        let origin = self.base.pos();
        Widget::set_geometry(self, Rect { origin, size });
    }

    /// Viewport width, zero until a viewport has been assigned.
    fn viewport_width(&self) -> f32 {
        self.base.size().width
    }

    /// Total size of the screen strip.
    pub fn content_size(&self) -> Size {
        let size = self.base.size();
        Size::new(self.screens.len() as f32 * size.width, size.height)
    }

    /// The current horizontal scroll offset.
    pub fn scroll_x(&self) -> f32 {
        self.scroll_x
    }

    /// The current page, derived from the scroll offset.
    ///
    /// A page becomes current the moment the offset reaches its left
    /// edge: `floor(offset / width)`.
    pub fn current_page(&self) -> usize {
        let width = self.viewport_width();
        if width <= 0.0 || self.screens.is_empty() {
            return 0;
        }
        let page = (self.scroll_x / width).floor() as usize;
        page.min(self.screens.len() - 1)
    }

    /// The page the strip last settled on.
    pub fn settled_page(&self) -> usize {
        self.settled_page
    }

    /// Set the scroll offset, clamped to the strip's range.
    ///
    /// The derived current page, indicator and action button follow the
    /// offset immediately.
    pub fn set_scroll_x(&mut self, offset: f32) {
        let width = self.viewport_width();
        if width <= 0.0 || self.screens.is_empty() {
            return;
        }
        let max_offset = (self.screens.len() - 1) as f32 * width;
        self.scroll_x = offset.clamp(0.0, max_offset);
        self.base.update();
        self.sync_page_state();
    }

    /// Snap the strip to the nearest page and remember it as settled.
    pub fn end_scroll(&mut self) {
        let width = self.viewport_width();
        if width <= 0.0 || self.screens.is_empty() {
            return;
        }
        let page = ((self.scroll_x / width).round() as usize).min(self.screens.len() - 1);
        self.settled_page = page;
        tracing::debug!(target: targets::WALKTHROUGH, page, "scroll settled");
        self.set_scroll_x(page as f32 * width);
    }

    /// Reconcile indicator, signal and button state with the derived
    /// current page.
    fn sync_page_state(&mut self) {
        let page = self.current_page();
        if page != self.indicator.current() {
            self.indicator.set_current(page);
            tracing::debug!(target: targets::WALKTHROUGH, page, "current page changed");
            self.page_changed.emit(page);
        }
        self.refresh_action_button();
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Re-lay the strip, indicator and button for the current viewport,
    /// then restore the scroll offset of the settled page.
    fn relayout(&mut self) {
        let size = self.base.size();
        if size.width <= 0.0 || size.height <= 0.0 {
            return;
        }

        for (i, screen) in self.screens.iter_mut().enumerate() {
            screen.set_geometry(Rect::new(
                i as f32 * size.width,
                0.0,
                size.width,
                size.height,
            ));
        }

        let button_y = size.height - PADDING - BUTTON_HEIGHT;
        let indicator_height = self.indicator.size_hint().preferred.height;
        self.indicator.set_geometry(Rect::new(
            0.0,
            button_y - INDICATOR_GAP - indicator_height,
            size.width,
            indicator_height,
        ));

        // Restore the settled page under the new width.
        self.scroll_x = self.settled_page as f32 * size.width;
        self.sync_page_state();

        tracing::debug!(
            target: targets::WALKTHROUGH,
            width = size.width,
            height = size.height,
            settled_page = self.settled_page,
            "walkthrough laid out"
        );
    }

    /// Width of the action button for the current labels and viewport.
    ///
    /// The widest configured label plus side padding, capped so the
    /// button keeps [`PADDING`] clear of both viewport edges, floored to
    /// a whole number.
    fn action_button_width(&self) -> f32 {
        let font = self.action_button.font();
        let mut label_width = font.measure_width(&self.done_title);
        if let Some(skip) = &self.skip_title {
            label_width = label_width.max(font.measure_width(skip));
        }
        let width = label_width + PADDING * 2.0;
        let cap = self.viewport_width() - PADDING * 2.0;
        width.min(cap).floor()
    }

    /// Update the action button's label, visibility and geometry for the
    /// derived current page.
    fn refresh_action_button(&mut self) {
        let on_final_page =
            !self.screens.is_empty() && self.current_page() == self.screens.len() - 1;
        let skip_label = self.skip_title.as_deref().filter(|s| !s.is_empty());

        if on_final_page {
            let title = self.done_title.clone();
            self.action_button.set_text(title);
            self.action_button.set_visible(true);
        } else if let Some(skip) = skip_label {
            let title = skip.to_string();
            self.action_button.set_text(title);
            self.action_button.set_visible(true);
        } else {
            self.action_button.set_visible(false);
        }

        let size = self.base.size();
        if size.width > 0.0 && size.height > 0.0 {
            let button_width = self.action_button_width();
            self.action_button.set_geometry(Rect::new(
                (size.width - button_width) / 2.0,
                size.height - PADDING - BUTTON_HEIGHT,
                button_width,
                BUTTON_HEIGHT,
            ));
        }
    }

    // =========================================================================
    // Event Handlers
    // =========================================================================

    fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }

        if self.action_button.is_visible()
            && self.action_button.geometry().contains(event.local_pos)
        {
            let local = self.action_button.map_from_parent(event.local_pos);
            let mut forwarded =
                WidgetEvent::MousePress(MousePressEvent::new(event.button, local));
            if self.action_button.event(&mut forwarded) {
                self.button_grab = true;
                return true;
            }
        }

        self.drag = Some(DragState {
            press_x: event.local_pos.x,
            start_scroll: self.scroll_x,
        });
        true
    }

    fn handle_mouse_move(&mut self, pos: Point) -> bool {
        if let Some(drag) = &self.drag {
            let offset = drag.start_scroll + (drag.press_x - pos.x);
            self.set_scroll_x(offset);
            return true;
        }
        false
    }

    fn handle_mouse_release(&mut self, event: &MouseReleaseEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }

        if self.button_grab {
            self.button_grab = false;
            let local = self.action_button.map_from_parent(event.local_pos);
            let mut forwarded =
                WidgetEvent::MouseRelease(MouseReleaseEvent::new(event.button, local));
            self.action_button.event(&mut forwarded);
            return true;
        }

        if self.drag.take().is_some() {
            self.end_scroll();
            return true;
        }
        false
    }
}

impl Object for Walkthrough {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for Walkthrough {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        let size = self.base.size();
        if size.width > 0.0 && size.height > 0.0 {
            SizeHint::new(size)
        } else {
            SizeHint::new(FALLBACK_VIEWPORT)
        }
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        if !self.base.is_visible() {
            return;
        }

        let size = self.base.size();
        let window = Rect::new(self.scroll_x, 0.0, size.width, size.height);
        for screen in &self.screens {
            let geometry = screen.geometry();
            if !geometry.intersects(window) {
                continue;
            }
            let translated = Rect {
                origin: Point::new(geometry.origin.x - self.scroll_x, geometry.origin.y),
                size: geometry.size,
            };
            let mut screen_ctx = PaintContext::new(ctx.renderer(), translated);
            screen.paint(&mut screen_ctx);
        }

        let indicator_rect = self.indicator.geometry();
        let mut indicator_ctx = PaintContext::new(ctx.renderer(), indicator_rect);
        self.indicator.paint(&mut indicator_ctx);

        if self.action_button.is_visible() {
            let button_rect = self.action_button.geometry();
            let mut button_ctx = PaintContext::new(ctx.renderer(), button_rect);
            self.action_button.paint(&mut button_ctx);
        }
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        let handled = match event {
            WidgetEvent::Resize(_) => {
                self.relayout();
                true
            }
            WidgetEvent::MousePress(e) => {
                let e = *e;
                self.handle_mouse_press(&e)
            }
            WidgetEvent::MouseMove(e) => {
                let pos = e.local_pos;
                self.handle_mouse_move(pos)
            }
            WidgetEvent::MouseRelease(e) => {
                let e = *e;
                self.handle_mouse_release(&e)
            }
        };
        if handled {
            event.accept();
        }
        handled
    }
}

// Ensure Walkthrough is Send + Sync
static_assertions::assert_impl_all!(Walkthrough: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::MouseMoveEvent;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // Deterministic label widths: Font::default_ui() is 17pt with an
    // average advance of 0.55, so each char is 9.35 units wide.

    struct TestScreen {
        base: WidgetBase,
    }

    impl TestScreen {
        fn new() -> Self {
            Self {
                base: WidgetBase::new(),
            }
        }
    }

    impl Object for TestScreen {
        fn object_id(&self) -> ObjectId {
            self.base.object_id()
        }
    }

    impl Widget for TestScreen {
        fn widget_base(&self) -> &WidgetBase {
            &self.base
        }

        fn widget_base_mut(&mut self) -> &mut WidgetBase {
            &mut self.base
        }

        fn size_hint(&self) -> SizeHint {
            SizeHint::from_dimensions(100.0, 100.0)
        }

        fn paint(&self, _ctx: &mut PaintContext<'_>) {}
    }

    fn test_factory() -> impl ScreenFactory {
        FnScreenFactory::new(|_| Some(Box::new(TestScreen::new()) as Box<dyn Widget>))
    }

    fn basic_walkthrough(ids: &[&str]) -> Walkthrough {
        Walkthrough::builder()
            .screens(ids.iter().copied())
            .on_dismiss(|| {})
            .build(&mut test_factory())
            .unwrap()
    }

    fn press(w: &mut Walkthrough, x: f32, y: f32) {
        let mut event = WidgetEvent::MousePress(MousePressEvent::new(
            MouseButton::Left,
            Point::new(x, y),
        ));
        w.event(&mut event);
    }

    fn drag_to(w: &mut Walkthrough, x: f32, y: f32) {
        let mut event = WidgetEvent::MouseMove(MouseMoveEvent::new(Point::new(x, y)));
        w.event(&mut event);
    }

    fn release(w: &mut Walkthrough, x: f32, y: f32) {
        let mut event = WidgetEvent::MouseRelease(MouseReleaseEvent::new(
            MouseButton::Left,
            Point::new(x, y),
        ));
        w.event(&mut event);
    }

    // =========================================================================
    // Builder Contract
    // =========================================================================

    #[test]
    fn test_build_rejects_too_few_screens() {
        let result = Walkthrough::builder()
            .screens(["a", "b"])
            .on_dismiss(|| {})
            .build(&mut test_factory());
        assert_eq!(result.err(), Some(WalkthroughError::TooFewScreens { count: 2 }));
    }

    #[test]
    fn test_build_requires_dismiss_handler() {
        let result = Walkthrough::builder()
            .screens(["a", "b", "c"])
            .build(&mut test_factory());
        assert_eq!(result.err(), Some(WalkthroughError::MissingDismissHandler));
    }

    #[test]
    fn test_build_reports_unresolved_identifier() {
        let mut factory = FnScreenFactory::new(|id: &str| {
            if id == "missing" {
                None
            } else {
                Some(Box::new(TestScreen::new()) as Box<dyn Widget>)
            }
        });
        let result = Walkthrough::builder()
            .screens(["a", "missing", "c"])
            .on_dismiss(|| {})
            .build(&mut factory);
        assert_eq!(
            result.err(),
            Some(WalkthroughError::UnresolvedScreen {
                identifier: "missing".to_string()
            })
        );
    }

    #[test]
    fn test_duplicate_identifiers_resolve_per_occurrence() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls2 = calls.clone();
        let mut factory = FnScreenFactory::new(move |_: &str| {
            calls2.fetch_add(1, Ordering::SeqCst);
            Some(Box::new(TestScreen::new()) as Box<dyn Widget>)
        });

        let walkthrough = Walkthrough::builder()
            .screens(["intro", "intro", "intro"])
            .on_dismiss(|| {})
            .build(&mut factory)
            .unwrap();

        assert_eq!(walkthrough.screen_count(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_defaults() {
        let walkthrough = basic_walkthrough(&["a", "b", "c"]);
        assert_eq!(walkthrough.done_title(), "Get Started");
        assert_eq!(walkthrough.skip_title(), None);
        assert!(walkthrough.status_bar_hidden());
    }

    #[test]
    fn test_status_bar_hidden_is_configurable_at_build_time() {
        let walkthrough = Walkthrough::builder()
            .screens(["a", "b", "c"])
            .status_bar_hidden(false)
            .on_dismiss(|| {})
            .build(&mut test_factory())
            .unwrap();
        assert!(!walkthrough.status_bar_hidden());
    }

    #[test]
    fn test_skip_title_may_equal_done_title() {
        let mut walkthrough = Walkthrough::builder()
            .screens(["a", "b", "c"])
            .skip_title("Get Started")
            .on_dismiss(|| {})
            .build(&mut test_factory())
            .unwrap();
        walkthrough.set_viewport(Size::new(390.0, 844.0));

        assert!(walkthrough.action_button().is_visible());
        assert_eq!(walkthrough.action_button().text(), "Get Started");
    }

    // =========================================================================
    // Layout
    // =========================================================================

    #[test]
    fn test_viewport_lays_out_one_slot_per_screen() {
        let mut walkthrough = basic_walkthrough(&["a", "b", "c", "d"]);
        walkthrough.set_viewport(Size::new(390.0, 844.0));

        assert_eq!(walkthrough.screen_count(), 4);
        assert_eq!(walkthrough.indicator().count(), 4);
        assert_eq!(walkthrough.content_size(), Size::new(1560.0, 844.0));
        for (i, screen) in walkthrough.screens.iter().enumerate() {
            assert_eq!(
                screen.geometry(),
                Rect::new(i as f32 * 390.0, 0.0, 390.0, 844.0)
            );
        }
    }

    #[test]
    fn test_button_width_is_capped_by_viewport() {
        let mut walkthrough = Walkthrough::builder()
            .screens(["a", "b", "c"])
            .done_title("Continue and Proceed")
            .skip_title("Skip")
            .on_dismiss(|| {})
            .build(&mut test_factory())
            .unwrap();

        // "Continue and Proceed" is 20 chars: 187.0 wide, 247.0 with
        // padding, above the 240 - 60 = 180 cap.
        walkthrough.set_viewport(Size::new(240.0, 500.0));
        assert_eq!(walkthrough.action_button().geometry().size.width, 180.0);

        // A wide viewport leaves the natural width, floored.
        walkthrough.set_viewport(Size::new(800.0, 500.0));
        assert_eq!(walkthrough.action_button().geometry().size.width, 247.0);
    }

    #[test]
    fn test_button_width_tracks_widest_label() {
        let mut walkthrough = Walkthrough::builder()
            .screens(["a", "b", "c"])
            .skip_title("Skip")
            .on_dismiss(|| {})
            .build(&mut test_factory())
            .unwrap();
        walkthrough.set_viewport(Size::new(390.0, 844.0));

        // "Get Started" (11 chars, 102.85) beats "Skip" (4 chars), so the
        // button is floor(102.85 + 60) = 162 wide on every page.
        assert_eq!(walkthrough.action_button().geometry().size.width, 162.0);
    }

    // =========================================================================
    // Paging
    // =========================================================================

    #[test]
    fn test_current_page_is_floor_of_offset() {
        let mut walkthrough = basic_walkthrough(&["a", "b", "c", "d"]);
        walkthrough.set_viewport(Size::new(390.0, 844.0));

        walkthrough.set_scroll_x(389.9);
        assert_eq!(walkthrough.current_page(), 0);

        // An exact multiple of the width is already the next page.
        walkthrough.set_scroll_x(390.0);
        assert_eq!(walkthrough.current_page(), 1);

        walkthrough.set_scroll_x(779.0);
        assert_eq!(walkthrough.current_page(), 1);

        walkthrough.set_scroll_x(780.0);
        assert_eq!(walkthrough.current_page(), 2);
    }

    #[test]
    fn test_scroll_is_clamped_to_strip() {
        let mut walkthrough = basic_walkthrough(&["a", "b", "c"]);
        walkthrough.set_viewport(Size::new(390.0, 844.0));

        walkthrough.set_scroll_x(-100.0);
        assert_eq!(walkthrough.scroll_x(), 0.0);

        walkthrough.set_scroll_x(10_000.0);
        assert_eq!(walkthrough.scroll_x(), 780.0);
        assert_eq!(walkthrough.current_page(), 2);
    }

    #[test]
    fn test_page_changed_emits_on_crossing() {
        let mut walkthrough = basic_walkthrough(&["a", "b", "c"]);
        walkthrough.set_viewport(Size::new(390.0, 844.0));

        let changes = Arc::new(AtomicUsize::new(0));
        let changes2 = changes.clone();
        walkthrough.page_changed.connect(move |_| {
            changes2.fetch_add(1, Ordering::SeqCst);
        });

        walkthrough.set_scroll_x(100.0);
        assert_eq!(changes.load(Ordering::SeqCst), 0);

        walkthrough.set_scroll_x(400.0);
        assert_eq!(changes.load(Ordering::SeqCst), 1);
        assert_eq!(walkthrough.indicator().current(), 1);
    }

    #[test]
    fn test_end_scroll_snaps_to_nearest_page() {
        let mut walkthrough = basic_walkthrough(&["a", "b", "c"]);
        walkthrough.set_viewport(Size::new(390.0, 844.0));

        walkthrough.set_scroll_x(500.0);
        walkthrough.end_scroll();
        assert_eq!(walkthrough.scroll_x(), 390.0);
        assert_eq!(walkthrough.settled_page(), 1);

        walkthrough.set_scroll_x(150.0);
        walkthrough.end_scroll();
        assert_eq!(walkthrough.scroll_x(), 0.0);
        assert_eq!(walkthrough.settled_page(), 0);
    }

    #[test]
    fn test_drag_scrolls_and_settles() {
        let mut walkthrough = basic_walkthrough(&["a", "b", "c"]);
        walkthrough.set_viewport(Size::new(390.0, 844.0));

        press(&mut walkthrough, 380.0, 400.0);
        drag_to(&mut walkthrough, 10.0, 400.0);
        assert_eq!(walkthrough.scroll_x(), 370.0);

        release(&mut walkthrough, 10.0, 400.0);
        assert_eq!(walkthrough.scroll_x(), 390.0);
        assert_eq!(walkthrough.settled_page(), 1);
        assert_eq!(walkthrough.indicator().current(), 1);
    }

    #[test]
    fn test_viewport_change_restores_settled_page() {
        let mut walkthrough = basic_walkthrough(&["a", "b", "c", "d"]);
        walkthrough.set_viewport(Size::new(390.0, 844.0));

        walkthrough.set_scroll_x(780.0);
        walkthrough.end_scroll();
        assert_eq!(walkthrough.settled_page(), 2);

        // Rotate: the settled page stays current under the new width.
        walkthrough.set_viewport(Size::new(844.0, 390.0));
        assert_eq!(walkthrough.scroll_x(), 2.0 * 844.0);
        assert_eq!(walkthrough.current_page(), 2);
    }

    #[test]
    fn test_viewport_change_mid_drag_keeps_settled_page() {
        let mut walkthrough = basic_walkthrough(&["a", "b", "c", "d"]);
        walkthrough.set_viewport(Size::new(390.0, 844.0));

        walkthrough.set_scroll_x(390.0);
        walkthrough.end_scroll();

        // A drag in progress is abandoned; the restore uses the last
        // settled page, not the transient offset.
        walkthrough.set_scroll_x(700.0);
        walkthrough.set_viewport(Size::new(844.0, 390.0));
        assert_eq!(walkthrough.scroll_x(), 844.0);
        assert_eq!(walkthrough.current_page(), 1);
    }

    // =========================================================================
    // Action Button
    // =========================================================================

    #[test]
    fn test_button_hidden_until_final_page_without_skip_title() {
        let mut walkthrough = basic_walkthrough(&["a", "b", "c", "d"]);
        walkthrough.set_viewport(Size::new(390.0, 844.0));

        for page in 0..3 {
            walkthrough.set_scroll_x(page as f32 * 390.0);
            assert!(
                !walkthrough.action_button().is_visible(),
                "button should be hidden on page {page}"
            );
        }

        walkthrough.set_scroll_x(3.0 * 390.0);
        assert!(walkthrough.action_button().is_visible());
        assert_eq!(walkthrough.action_button().text(), "Get Started");
    }

    #[test]
    fn test_button_shows_skip_title_on_non_final_pages() {
        let mut walkthrough = Walkthrough::builder()
            .screens(["a", "b", "c", "d"])
            .skip_title("Skip")
            .on_dismiss(|| {})
            .build(&mut test_factory())
            .unwrap();
        walkthrough.set_viewport(Size::new(390.0, 844.0));

        assert!(walkthrough.action_button().is_visible());
        assert_eq!(walkthrough.action_button().text(), "Skip");

        walkthrough.set_scroll_x(3.0 * 390.0);
        assert_eq!(walkthrough.action_button().text(), "Get Started");
    }

    #[test]
    fn test_empty_skip_title_behaves_as_unset() {
        let mut walkthrough = Walkthrough::builder()
            .screens(["a", "b", "c"])
            .skip_title("")
            .on_dismiss(|| {})
            .build(&mut test_factory())
            .unwrap();
        walkthrough.set_viewport(Size::new(390.0, 844.0));

        assert!(!walkthrough.action_button().is_visible());
    }

    #[test]
    fn test_button_tap_requests_dismissal_once() {
        let dismissed = Arc::new(AtomicUsize::new(0));
        let dismissed2 = dismissed.clone();
        let mut walkthrough = Walkthrough::builder()
            .screens(["a", "b", "c"])
            .skip_title("Skip")
            .on_dismiss(move || {
                dismissed2.fetch_add(1, Ordering::SeqCst);
            })
            .build(&mut test_factory())
            .unwrap();
        walkthrough.set_viewport(Size::new(390.0, 844.0));

        // The button is 162x44 centered near the bottom: x 114..276,
        // y 770..814.
        let rect = walkthrough.action_button().geometry();
        let center = rect.center();
        press(&mut walkthrough, center.x, center.y);
        release(&mut walkthrough, center.x, center.y);

        assert_eq!(dismissed.load(Ordering::SeqCst), 1);
        // The tap must not have scrolled the strip.
        assert_eq!(walkthrough.scroll_x(), 0.0);
    }

    #[test]
    fn test_tap_outside_button_does_not_dismiss() {
        let dismissed = Arc::new(AtomicUsize::new(0));
        let dismissed2 = dismissed.clone();
        let mut walkthrough = Walkthrough::builder()
            .screens(["a", "b", "c"])
            .skip_title("Skip")
            .on_dismiss(move || {
                dismissed2.fetch_add(1, Ordering::SeqCst);
            })
            .build(&mut test_factory())
            .unwrap();
        walkthrough.set_viewport(Size::new(390.0, 844.0));

        press(&mut walkthrough, 195.0, 300.0);
        release(&mut walkthrough, 195.0, 300.0);
        assert_eq!(dismissed.load(Ordering::SeqCst), 0);
    }

    // =========================================================================
    // Painting
    // =========================================================================

    #[test]
    fn test_paint_emits_indicator_dots() {
        use crate::render::RecordingRenderer;

        let mut walkthrough = basic_walkthrough(&["a", "b", "c"]);
        walkthrough.set_viewport(Size::new(390.0, 844.0));

        let mut renderer = RecordingRenderer::new();
        let mut ctx = PaintContext::new(&mut renderer, walkthrough.rect());
        walkthrough.paint(&mut ctx);

        assert_eq!(renderer.circle_count(), 3);
    }

    #[test]
    fn test_painted_dots_and_label_land_inside_their_widgets() {
        use crate::render::{DrawCommand, RecordingRenderer};

        let mut walkthrough = Walkthrough::builder()
            .screens(["a", "b", "c"])
            .skip_title("Skip")
            .on_dismiss(|| {})
            .build(&mut test_factory())
            .unwrap();
        walkthrough.set_viewport(Size::new(390.0, 844.0));

        let mut renderer = RecordingRenderer::new();
        let mut ctx = PaintContext::new(&mut renderer, walkthrough.rect());
        walkthrough.paint(&mut ctx);

        let indicator_rect = walkthrough.indicator().geometry();
        let button_rect = walkthrough.action_button().geometry();
        for cmd in renderer.commands() {
            match cmd {
                DrawCommand::FillCircle { center, .. } => {
                    assert!(
                        indicator_rect.contains(*center),
                        "dot drawn at {center:?}, outside indicator rect {indicator_rect:?}"
                    );
                }
                DrawCommand::Text { pos, .. } => {
                    assert!(
                        button_rect.contains(*pos),
                        "label baseline {pos:?} outside button rect {button_rect:?}"
                    );
                }
                _ => {}
            }
        }
    }
}
