//! The scrolled viewport.
//!
//! [`ScrolledViewport`] gives scrollability to a child that has none of its
//! own: each resize solves both axes from the child's size request and the
//! current allocation, configures the shared adjustments (notifying listeners
//! exactly once per actual change), and positions the child at
//! `origin − value` so the visible window slides over the content. The child
//! draws into a full-content canvas which is clipped through a frame canvas
//! into the parent, then the scrollbars composite along the trailing edges.

use crate::event::EventFlag;
use crate::geometry::{Offset, Orientation, Region, Size};
use crate::render::{Canvas, Theme};
use crate::scroll::{solve_axis, Policy, Settings};
use crate::widget::{Widget, WidgetCore};

use super::scrollbar::Scrollbar;

// ---------------------------------------------------------------------------
// ScrolledViewport
// ---------------------------------------------------------------------------

/// A bin container that scrolls its child through two adjustments.
pub struct ScrolledViewport {
    core: WidgetCore,
    theme: Theme,
    child: Option<Box<dyn Widget>>,
    h_policy: Policy,
    v_policy: Policy,
    h_bar: Scrollbar,
    v_bar: Scrollbar,
    /// The child's full-content surface, at the child's (possibly negative)
    /// origin relative to the viewport.
    child_canvas: Option<Canvas>,
    /// The visible window the child canvas is clipped through.
    frame_canvas: Option<Canvas>,
    h_canvas: Canvas,
    v_canvas: Canvas,
}

impl ScrolledViewport {
    /// Create an empty viewport with both policies set to [`Policy::Always`].
    pub fn new() -> Self {
        Self {
            core: WidgetCore::new(),
            theme: Theme::default(),
            child: None,
            h_policy: Policy::Always,
            v_policy: Policy::Always,
            h_bar: Scrollbar::new(Orientation::Horizontal),
            v_bar: Scrollbar::new(Orientation::Vertical),
            child_canvas: None,
            frame_canvas: None,
            h_canvas: Canvas::new(Offset::new(0, 0), Size::ZERO, Default::default()),
            v_canvas: Canvas::new(Offset::new(0, 0), Size::ZERO, Default::default()),
        }
    }

    /// The `(horizontal, vertical)` scrollbar policies.
    pub fn policy(&self) -> (Policy, Policy) {
        (self.h_policy, self.v_policy)
    }

    /// Set both scrollbar policies and re-layout.
    pub fn set_policy(&mut self, h_policy: Policy, v_policy: Policy) {
        self.h_policy = h_policy;
        self.v_policy = v_policy;
        self.resize();
    }

    /// The shared horizontal adjustment.
    pub fn h_adjustment(&self) -> std::rc::Rc<std::cell::RefCell<crate::scroll::Adjustment>> {
        self.h_bar.adjustment()
    }

    /// The shared vertical adjustment.
    pub fn v_adjustment(&self) -> std::rc::Rc<std::cell::RefCell<crate::scroll::Adjustment>> {
        self.v_bar.adjustment()
    }

    /// The horizontal scrollbar.
    pub fn h_scrollbar(&self) -> &Scrollbar {
        &self.h_bar
    }

    /// Mutable access to the horizontal scrollbar.
    pub fn h_scrollbar_mut(&mut self) -> &mut Scrollbar {
        &mut self.h_bar
    }

    /// The vertical scrollbar.
    pub fn v_scrollbar(&self) -> &Scrollbar {
        &self.v_bar
    }

    /// Mutable access to the vertical scrollbar.
    pub fn v_scrollbar_mut(&mut self) -> &mut Scrollbar {
        &mut self.v_bar
    }

    /// Replace the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.h_bar.set_theme(theme.clone());
        self.v_bar.set_theme(theme.clone());
        self.theme = theme;
    }

    /// Set the viewport's child.
    ///
    /// A viewport holds at most one child; adding to an occupied viewport is
    /// logged and ignored.
    pub fn add(&mut self, child: Box<dyn Widget>) {
        if self.child.is_some() {
            log::error!("scrolled viewport already has a child");
            return;
        }
        self.child = Some(child);
        self.resize();
    }

    /// Take the child out of the viewport.
    pub fn remove_child(&mut self) -> Option<Box<dyn Widget>> {
        let child = self.child.take();
        self.invalidate();
        child
    }

    /// Borrow the child widget.
    pub fn child(&self) -> Option<&dyn Widget> {
        self.child.as_deref()
    }

    /// Mutably borrow the child widget.
    pub fn child_mut(&mut self) -> Option<&mut Box<dyn Widget>> {
        self.child.as_mut()
    }

    /// Whether the horizontal scrollbar should show.
    ///
    /// Beyond the adjustment's own policy answer, a moot adjustment under
    /// [`Policy::Automatic`] is double-checked against the raw child request
    /// vs. allocation, guarding against stale adjustment state.
    pub fn horizontal_show_by_policy(&self) -> bool {
        let adjustment = self.h_bar.adjustment();
        let adjustment = adjustment.borrow();
        let mut show = adjustment.show_by_policy(self.h_policy);
        if !show && self.h_policy == Policy::Automatic && adjustment.moot() {
            if let Some(child) = &self.child {
                let request = child.size_request();
                show = request.width > 0 && request.width > self.core.allocation().width;
            }
        }
        show
    }

    /// Whether the vertical scrollbar should show. See
    /// [`ScrolledViewport::horizontal_show_by_policy`].
    pub fn vertical_show_by_policy(&self) -> bool {
        let adjustment = self.v_bar.adjustment();
        let adjustment = adjustment.borrow();
        let mut show = adjustment.show_by_policy(self.v_policy);
        if !show && self.v_policy == Policy::Automatic && adjustment.moot() {
            if let Some(child) = &self.child {
                let request = child.size_request();
                show = request.height > 0 && request.height > self.core.allocation().height;
            }
        }
        show
    }

    /// The `(child, horizontal bar, vertical bar)` regions, absolute.
    ///
    /// A bar hidden by policy reports an empty region.
    pub fn regions(&self) -> (Region, Region, Region) {
        let child = match &self.child {
            Some(child) => child.allocation().at(child.origin()),
            None => Region::EMPTY,
        };
        let h_bar = if self.horizontal_show_by_policy() {
            self.h_bar.allocation().at(self.h_bar.origin())
        } else {
            Region::EMPTY
        };
        let v_bar = if self.vertical_show_by_policy() {
            self.v_bar.allocation().at(self.v_bar.origin())
        } else {
            Region::EMPTY
        };
        (child, h_bar, v_bar)
    }

    fn configure(adjustment: &std::rc::Rc<std::cell::RefCell<crate::scroll::Adjustment>>, s: Settings) {
        adjustment.borrow_mut().configure(
            s.value,
            s.lower,
            s.upper,
            s.step_increment,
            s.page_increment,
            s.page_size,
        );
    }

    /// Position both scrollbars along the trailing edges, each yielding the
    /// corner cell to the other when shown.
    fn resize_scrollbars(&mut self) {
        let origin = self.core.origin();
        let alloc = self.core.allocation();
        let h_shown = self.horizontal_show_by_policy();
        let v_shown = self.vertical_show_by_policy();

        self.h_bar.set_origin(Offset::new(origin.x, origin.y + alloc.height - 1));
        self.h_bar.set_allocation(Size::new(
            alloc.width - i32::from(v_shown),
            1,
        ));
        self.h_bar.resize();

        self.v_bar.set_origin(Offset::new(origin.x + alloc.width - 1, origin.y));
        self.v_bar.set_allocation(Size::new(
            1,
            alloc.height - i32::from(h_shown),
        ));
        self.v_bar.resize();
    }

    /// Refresh every private canvas to match the current layout.
    fn invalidate(&mut self) {
        let origin = self.core.origin();
        let alloc = self.core.allocation();
        let h_shown = self.horizontal_show_by_policy();
        let v_shown = self.vertical_show_by_policy();

        match &self.child {
            Some(child) => {
                let local = child.origin().local_to(origin);
                let size = child.allocation();
                match &mut self.child_canvas {
                    Some(canvas) => {
                        canvas.set_origin(local);
                        canvas.resize(size, self.theme.content.clone());
                    }
                    None => {
                        self.child_canvas =
                            Some(Canvas::new(local, size, self.theme.content.clone()));
                    }
                }

                let frame = Size::new(
                    alloc.width - i32::from(v_shown),
                    alloc.height - i32::from(h_shown),
                )
                .floor();
                match &mut self.frame_canvas {
                    Some(canvas) => {
                        canvas.set_origin(Offset::new(0, 0));
                        canvas.resize(frame, self.theme.content.clone());
                    }
                    None => {
                        self.frame_canvas = Some(Canvas::new(
                            Offset::new(0, 0),
                            frame,
                            self.theme.content.clone(),
                        ));
                    }
                }
            }
            None => {
                self.child_canvas = None;
                self.frame_canvas = None;
            }
        }

        if h_shown {
            self.h_canvas.set_origin(self.h_bar.origin().local_to(origin));
            self.h_canvas.resize(self.h_bar.allocation(), self.theme.content.clone());
            self.h_bar.show();
        }
        if v_shown {
            self.v_canvas.set_origin(self.v_bar.origin().local_to(origin));
            self.v_canvas.resize(self.v_bar.allocation(), self.theme.content.clone());
            self.v_bar.show();
        }
    }
}

impl Default for ScrolledViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ScrolledViewport {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    fn resize(&mut self) -> EventFlag {
        let origin = self.core.origin();
        let alloc = self.core.allocation();

        if alloc.is_empty() {
            if let Some(child) = self.child.as_mut() {
                child.set_allocation(Size::ZERO);
                child.resize();
            }
            Self::configure(&self.h_bar.adjustment(), Settings::default());
            Self::configure(&self.v_bar.adjustment(), Settings::default());
            self.invalidate();
            self.core.emit_resize();
            return EventFlag::Stop;
        }

        // The pre-pass show flags may be stale; the moot double-check in the
        // policy methods covers the gap, and the flags are recomputed from
        // the configured adjustments below.
        let v_shown = self.vertical_show_by_policy();
        let h_shown = self.horizontal_show_by_policy();
        let h_value = self.h_bar.adjustment().borrow().value();
        let v_value = self.v_bar.adjustment().borrow().value();

        let mut solutions = None;
        if let Some(child) = self.child.as_mut() {
            let request = child.size_request();
            let h = solve_axis(request.width, origin.x, alloc.width, v_shown, h_value);
            let v = solve_axis(request.height, origin.y, alloc.height, h_shown, v_value);
            child.set_origin(Offset::new(h.origin, v.origin));
            child.set_allocation(Size::new(h.size, v.size));
            child.resize();
            solutions = Some((h, v));
        }
        if let Some((h, v)) = solutions {
            Self::configure(&self.h_bar.adjustment(), h.settings);
            Self::configure(&self.v_bar.adjustment(), v.settings);
        }

        self.resize_scrollbars();
        self.invalidate();
        self.core.emit_resize();
        EventFlag::Stop
    }

    fn draw(&mut self, canvas: &mut Canvas) -> EventFlag {
        let alloc = self.core.allocation();
        if !self.core.is_visible() || alloc.is_empty() {
            return EventFlag::Pass;
        }
        let h_shown = self.horizontal_show_by_policy();
        let v_shown = self.vertical_show_by_policy();
        let has_child = self.child.is_some();

        if let (Some(child), Some(child_canvas)) =
            (self.child.as_mut(), self.child_canvas.as_mut())
        {
            canvas.fill(&self.theme);
            if child.draw(child_canvas).is_stop() {
                if let Some(frame) = self.frame_canvas.as_mut() {
                    frame.fill(&self.theme);
                    if let Err(err) = frame.composite(child_canvas) {
                        log::error!("child composite error: {err}");
                    }
                    if let Err(err) = canvas.composite(frame) {
                        log::error!("viewport composite error: {err}");
                    }
                }
            }
        }

        if has_child && v_shown {
            self.v_bar.draw(&mut self.v_canvas);
            if let Err(err) = canvas.composite(&self.v_canvas) {
                log::error!("vertical scrollbar composite error: {err}");
            }
        }
        if has_child && h_shown {
            self.h_bar.draw(&mut self.h_canvas);
            if let Err(err) = canvas.composite(&self.h_canvas) {
                log::error!("horizontal scrollbar composite error: {err}");
            }
        }
        if has_child && v_shown && h_shown {
            // The corner cell between the two bars.
            let _ = canvas.set_rune(
                alloc.width - 1,
                alloc.height - 1,
                self.theme.fill,
                self.theme.content.clone(),
            );
        }
        EventFlag::Stop
    }

    fn show_all(&mut self) {
        self.core.show();
        if let Some(child) = self.child.as_mut() {
            child.show_all();
        }
        self.h_bar.show();
        self.v_bar.show();
        self.resize();
    }
}

// ===========================================================================
// Tests
// ===========================================================================
