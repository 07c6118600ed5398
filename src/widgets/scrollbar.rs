//! Scrollbars.
//!
//! A [`Scrollbar`] renders the trough, slider, and stepper arrows for one
//! axis, driven entirely by a shared [`Adjustment`]. The scrollbar owns no
//! scroll state of its own: a viewport configures the adjustment and the
//! scrollbar's geometry follows it, so the two can never disagree.

use std::cell::RefCell;
use std::rc::Rc;

use crate::event::EventFlag;
use crate::geometry::{Orientation, Region, Size};
use crate::render::{Canvas, Theme};
use crate::scroll::{slider_span, Adjustment};
use crate::widget::{Widget, WidgetCore};

/// Rune painted across the trough.
const TROUGH_RUNE: char = '░';
/// Rune painted across the slider.
const SLIDER_RUNE: char = '█';

// ---------------------------------------------------------------------------
// Scrollbar
// ---------------------------------------------------------------------------

/// One axis's scrollbar: steppers, trough, and slider.
pub struct Scrollbar {
    core: WidgetCore,
    orientation: Orientation,
    adjustment: Rc<RefCell<Adjustment>>,
    theme: Theme,
    min_slider_length: i32,
    has_backward_stepper: bool,
    has_forward_stepper: bool,
    has_secondary_backward_stepper: bool,
    has_secondary_forward_stepper: bool,
}

impl Scrollbar {
    /// Create a scrollbar with its own collapsed adjustment.
    pub fn new(orientation: Orientation) -> Self {
        Self::with_adjustment(orientation, Rc::new(RefCell::new(Adjustment::collapsed())))
    }

    /// Create a scrollbar driving a shared adjustment.
    pub fn with_adjustment(
        orientation: Orientation,
        adjustment: Rc<RefCell<Adjustment>>,
    ) -> Self {
        Self {
            core: WidgetCore::new(),
            orientation,
            adjustment,
            theme: Theme::default(),
            min_slider_length: 1,
            has_backward_stepper: true,
            has_forward_stepper: true,
            has_secondary_backward_stepper: false,
            has_secondary_forward_stepper: false,
        }
    }

    /// The scrollbar's axis.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The shared adjustment.
    pub fn adjustment(&self) -> Rc<RefCell<Adjustment>> {
        Rc::clone(&self.adjustment)
    }

    /// Replace the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Whether the backward arrow button is shown at the leading end.
    pub fn has_backward_stepper(&self) -> bool {
        self.has_backward_stepper
    }

    /// Show or hide the backward arrow button.
    pub fn set_has_backward_stepper(&mut self, has: bool) {
        self.has_backward_stepper = has;
    }

    /// Whether the forward arrow button is shown at the trailing end.
    pub fn has_forward_stepper(&self) -> bool {
        self.has_forward_stepper
    }

    /// Show or hide the forward arrow button.
    pub fn set_has_forward_stepper(&mut self, has: bool) {
        self.has_forward_stepper = has;
    }

    /// Whether a second backward arrow is shown at the trailing end.
    pub fn has_secondary_backward_stepper(&self) -> bool {
        self.has_secondary_backward_stepper
    }

    /// Show or hide the secondary backward arrow.
    pub fn set_has_secondary_backward_stepper(&mut self, has: bool) {
        self.has_secondary_backward_stepper = has;
    }

    /// Whether a second forward arrow is shown at the leading end.
    pub fn has_secondary_forward_stepper(&self) -> bool {
        self.has_secondary_forward_stepper
    }

    /// Show or hide the secondary forward arrow.
    pub fn set_has_secondary_forward_stepper(&mut self, has: bool) {
        self.has_secondary_forward_stepper = has;
    }

    /// Advance the adjustment by `amount` cells.
    ///
    /// Returns [`EventFlag::Stop`] when the value actually moved.
    pub fn forward(&mut self, amount: i32) -> EventFlag {
        let mut adjustment = self.adjustment.borrow_mut();
        let before = adjustment.value();
        adjustment.set_value(before + amount);
        if adjustment.value() != before {
            EventFlag::Stop
        } else {
            EventFlag::Pass
        }
    }

    /// Advance by one step increment.
    pub fn forward_step(&mut self) -> EventFlag {
        let (step, _) = self.adjustment.borrow().increments();
        self.forward(step)
    }

    /// Advance by one page increment.
    pub fn forward_page(&mut self) -> EventFlag {
        let (_, page) = self.adjustment.borrow().increments();
        self.forward(page)
    }

    /// Move the adjustment back by `amount` cells.
    pub fn backward(&mut self, amount: i32) -> EventFlag {
        self.forward(-amount)
    }

    /// Move back by one step increment.
    pub fn backward_step(&mut self) -> EventFlag {
        let (step, _) = self.adjustment.borrow().increments();
        self.backward(step)
    }

    /// Move back by one page increment.
    pub fn backward_page(&mut self) -> EventFlag {
        let (_, page) = self.adjustment.borrow().increments();
        self.backward(page)
    }

    /// The stepper clusters at the leading and trailing ends.
    ///
    /// The leading cluster holds the backward arrow, then the secondary
    /// forward arrow; the trailing cluster holds the secondary backward
    /// arrow, then the forward arrow. Either region may be empty.
    pub fn stepper_regions(&self) -> (Region, Region) {
        let origin = self.core.origin();
        let alloc = self.core.allocation();
        let lead = i32::from(self.has_backward_stepper) + i32::from(self.has_secondary_forward_stepper);
        let trail = i32::from(self.has_forward_stepper) + i32::from(self.has_secondary_backward_stepper);
        match self.orientation {
            Orientation::Horizontal => (
                Region::new(origin.x, origin.y, lead, 1),
                Region::new(origin.x + alloc.width - trail, origin.y, trail, 1),
            ),
            Orientation::Vertical => (
                Region::new(origin.x, origin.y, 1, lead),
                Region::new(origin.x, origin.y + alloc.height - trail, 1, trail),
            ),
        }
    }

    /// The trough: the allocation minus both stepper clusters.
    pub fn trough_region(&self) -> Region {
        let origin = self.core.origin();
        let alloc = self.core.allocation();
        let (start, end) = self.stepper_regions();
        match self.orientation {
            Orientation::Horizontal => Region::new(
                origin.x + start.width,
                origin.y,
                alloc.width - start.width - end.width,
                1,
            )
            .floor(),
            Orientation::Vertical => Region::new(
                origin.x,
                origin.y + start.height,
                1,
                alloc.height - start.height - end.height,
            )
            .floor(),
        }
    }

    /// The slider's position within the trough, from the adjustment state.
    pub fn slider_region(&self) -> Region {
        let trough = self.trough_region();
        let adjustment = self.adjustment.borrow();
        let (_, upper) = adjustment.range();
        let (_, page) = adjustment.increments();
        let value = adjustment.value();
        match self.orientation {
            Orientation::Horizontal => {
                let (offset, length) =
                    slider_span(trough.width, upper, page, value, self.min_slider_length);
                Region::new(trough.x + offset, trough.y, length, 1).floor()
            }
            Orientation::Vertical => {
                let (offset, length) =
                    slider_span(trough.height, upper, page, value, self.min_slider_length);
                Region::new(trough.x, trough.y + offset, 1, length).floor()
            }
        }
    }

    /// Paint a region of the scrollbar's canvas (local coordinates).
    fn paint(&self, canvas: &mut Canvas, region: Region, ch: char, border: bool) {
        let origin = self.core.origin();
        let style = if border { &self.theme.border } else { &self.theme.content };
        for y in region.y..region.bottom() {
            for x in region.x..region.right() {
                let _ = canvas.set_rune(x - origin.x, y - origin.y, ch, style.clone());
            }
        }
    }
}

impl Widget for Scrollbar {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    fn size_request(&self) -> Size {
        // A scrollbar is one cell thick on its cross axis.
        let request = self.core.size_request();
        match self.orientation {
            Orientation::Horizontal => Size::new(request.width, 1),
            Orientation::Vertical => Size::new(1, request.height),
        }
    }

    fn resize(&mut self) -> EventFlag {
        // Stepper, trough, and slider geometry is derived on demand from the
        // allocation and the adjustment.
        self.core.emit_resize();
        EventFlag::Stop
    }

    fn draw(&mut self, canvas: &mut Canvas) -> EventFlag {
        let alloc = self.core.allocation();
        if !self.core.is_visible() || alloc.is_empty() {
            return EventFlag::Pass;
        }

        self.paint(canvas, self.trough_region(), TROUGH_RUNE, true);
        self.paint(canvas, self.slider_region(), SLIDER_RUNE, false);

        let (backward_arrow, forward_arrow) = match self.orientation {
            Orientation::Horizontal => ('◀', '▶'),
            Orientation::Vertical => ('▲', '▼'),
        };
        let (start, end) = self.stepper_regions();
        let mut start_cells = cells_of(start);
        let mut end_cells = cells_of(end);
        if self.has_backward_stepper {
            self.paint(canvas, start_cells.remove(0), backward_arrow, false);
        }
        if self.has_secondary_forward_stepper && !start_cells.is_empty() {
            self.paint(canvas, start_cells.remove(0), forward_arrow, false);
        }
        if self.has_secondary_backward_stepper && !end_cells.is_empty() {
            self.paint(canvas, end_cells.remove(0), backward_arrow, false);
        }
        if self.has_forward_stepper && !end_cells.is_empty() {
            self.paint(canvas, end_cells.remove(0), forward_arrow, false);
        }
        EventFlag::Stop
    }
}

/// Split a stepper cluster into its single-cell regions, leading first.
fn cells_of(region: Region) -> Vec<Region> {
    let mut cells = Vec::new();
    for y in region.y..region.bottom() {
        for x in region.x..region.right() {
            cells.push(Region::new(x, y, 1, 1));
        }
    }
    cells
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Offset;
    use crate::render::CellStyle;
    use crate::testing::canvas_to_string;

    fn vertical_bar(height: i32) -> Scrollbar {
        let mut bar = Scrollbar::new(Orientation::Vertical);
        bar.set_origin(Offset::new(0, 0));
        bar.set_allocation(Size::new(1, height));
        bar.show();
        bar
    }

    fn configured(bar: &Scrollbar, upper: i32, page: i32, value: i32) {
        bar.adjustment().borrow_mut().configure(value, 0, upper, 1, page, page * 2);
    }

    // -----------------------------------------------------------------------
    // Regions
    // -----------------------------------------------------------------------

    #[test]
    fn default_steppers_take_one_cell_each_end() {
        let bar = vertical_bar(8);
        let (start, end) = bar.stepper_regions();
        assert_eq!(start, Region::new(0, 0, 1, 1));
        assert_eq!(end, Region::new(0, 7, 1, 1));
        assert_eq!(bar.trough_region(), Region::new(0, 1, 1, 6));
    }

    #[test]
    fn secondary_steppers_widen_the_clusters() {
        let mut bar = vertical_bar(8);
        bar.set_has_secondary_forward_stepper(true);
        bar.set_has_secondary_backward_stepper(true);
        let (start, end) = bar.stepper_regions();
        assert_eq!(start, Region::new(0, 0, 1, 2));
        assert_eq!(end, Region::new(0, 6, 1, 2));
        assert_eq!(bar.trough_region(), Region::new(0, 2, 1, 4));
    }

    #[test]
    fn no_steppers_leave_the_whole_trough() {
        let mut bar = vertical_bar(8);
        bar.set_has_backward_stepper(false);
        bar.set_has_forward_stepper(false);
        assert_eq!(bar.trough_region(), Region::new(0, 0, 1, 8));
    }

    #[test]
    fn horizontal_regions() {
        let mut bar = Scrollbar::new(Orientation::Horizontal);
        bar.set_origin(Offset::new(2, 5));
        bar.set_allocation(Size::new(10, 1));
        let (start, end) = bar.stepper_regions();
        assert_eq!(start, Region::new(2, 5, 1, 1));
        assert_eq!(end, Region::new(11, 5, 1, 1));
        assert_eq!(bar.trough_region(), Region::new(3, 5, 8, 1));
    }

    #[test]
    fn slider_region_tracks_value() {
        let bar = vertical_bar(8);
        configured(&bar, 60, 3, 0);
        assert_eq!(bar.slider_region(), Region::new(0, 1, 1, 1));

        configured(&bar, 60, 3, 60);
        assert_eq!(bar.slider_region(), Region::new(0, 6, 1, 1));
    }

    #[test]
    fn slider_fills_trough_when_moot() {
        let bar = vertical_bar(8);
        assert_eq!(bar.slider_region(), Region::new(0, 1, 1, 6));
    }

    #[test]
    fn size_request_is_one_cell_thick() {
        let bar = Scrollbar::new(Orientation::Vertical);
        assert_eq!(bar.size_request(), Size::new(1, -1));
        let bar = Scrollbar::new(Orientation::Horizontal);
        assert_eq!(bar.size_request(), Size::new(-1, 1));
    }

    // -----------------------------------------------------------------------
    // Step and page movement
    // -----------------------------------------------------------------------

    #[test]
    fn forward_moves_and_reports() {
        let mut bar = vertical_bar(8);
        configured(&bar, 60, 20, 0);
        assert_eq!(bar.forward(5), EventFlag::Stop);
        assert_eq!(bar.adjustment().borrow().value(), 5);
    }

    #[test]
    fn forward_at_the_end_passes() {
        let mut bar = vertical_bar(8);
        configured(&bar, 60, 20, 60);
        assert_eq!(bar.forward(5), EventFlag::Pass);
        assert_eq!(bar.adjustment().borrow().value(), 60);
    }

    #[test]
    fn step_and_page_use_increments() {
        let mut bar = vertical_bar(8);
        configured(&bar, 60, 20, 0);
        bar.forward_step();
        assert_eq!(bar.adjustment().borrow().value(), 1);
        bar.forward_page();
        assert_eq!(bar.adjustment().borrow().value(), 21);
        bar.backward_step();
        assert_eq!(bar.adjustment().borrow().value(), 20);
        bar.backward_page();
        assert_eq!(bar.adjustment().borrow().value(), 0);
    }

    #[test]
    fn backward_below_zero_passes() {
        let mut bar = vertical_bar(8);
        configured(&bar, 60, 20, 0);
        assert_eq!(bar.backward_step(), EventFlag::Pass);
    }

    // -----------------------------------------------------------------------
    // Drawing
    // -----------------------------------------------------------------------

    #[test]
    fn draw_vertical_bar() {
        let mut bar = vertical_bar(8);
        configured(&bar, 60, 20, 0);
        let mut canvas =
            Canvas::new(Offset::new(0, 0), Size::new(1, 8), CellStyle::default());
        assert_eq!(bar.draw(&mut canvas), EventFlag::Stop);
        assert_eq!(canvas_to_string(&canvas), "▲\n█\n░\n░\n░\n░\n░\n▼");
    }

    #[test]
    fn draw_scrolled_to_the_end() {
        let mut bar = vertical_bar(8);
        configured(&bar, 60, 20, 60);
        let mut canvas =
            Canvas::new(Offset::new(0, 0), Size::new(1, 8), CellStyle::default());
        bar.draw(&mut canvas);
        assert_eq!(canvas_to_string(&canvas), "▲\n░\n░\n░\n░\n░\n█\n▼");
    }

    #[test]
    fn draw_horizontal_bar() {
        let mut bar = Scrollbar::new(Orientation::Horizontal);
        bar.set_origin(Offset::new(0, 0));
        bar.set_allocation(Size::new(8, 1));
        bar.show();
        configured(&bar, 60, 20, 0);
        let mut canvas =
            Canvas::new(Offset::new(0, 0), Size::new(8, 1), CellStyle::default());
        bar.draw(&mut canvas);
        assert_eq!(canvas_to_string(&canvas), "◀█░░░░░▶");
    }

    #[test]
    fn draw_hidden_passes() {
        let mut bar = Scrollbar::new(Orientation::Vertical);
        bar.set_allocation(Size::new(1, 8));
        let mut canvas =
            Canvas::new(Offset::new(0, 0), Size::new(1, 8), CellStyle::default());
        assert_eq!(bar.draw(&mut canvas), EventFlag::Pass);
    }
}
