//! Integration tests for coffer-tui.
//!
//! These tests exercise the public API from outside the crate: packing
//! children into boxes, composited draw output, and scrolling a child
//! through a viewport with live scrollbars.

use coffer_tui::event::EventFlag;
use coffer_tui::geometry::{Offset, Orientation, Size};
use coffer_tui::render::{Canvas, CellStyle};
use coffer_tui::scroll::Policy;
use coffer_tui::testing::{canvas_to_string, draw_to_string, Filler};
use coffer_tui::widget::{Widget, WidgetCore};
use coffer_tui::widgets::{PackedBox, ScrolledViewport};

// ---------------------------------------------------------------------------
// Ruler: a widget whose columns are visually distinct
// ---------------------------------------------------------------------------

/// Paints each column with its digit (x modulo 10), so horizontal clipping
/// and scrolling are visible in text output.
struct Ruler {
    core: WidgetCore,
}

impl Ruler {
    fn new(width: i32, height: i32) -> Self {
        let mut core = WidgetCore::new();
        core.set_size_request(Size::new(width, height));
        Self { core }
    }
}

impl Widget for Ruler {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    fn resize(&mut self) -> EventFlag {
        EventFlag::Stop
    }

    fn draw(&mut self, canvas: &mut Canvas) -> EventFlag {
        let size = canvas.size();
        for y in 0..size.height {
            for x in 0..size.width {
                let digit = char::from(b'0' + (x % 10) as u8);
                let _ = canvas.set_rune(x, y, digit, CellStyle::default());
            }
        }
        EventFlag::Stop
    }
}

// ---------------------------------------------------------------------------
// Box packing
// ---------------------------------------------------------------------------

#[test]
fn test_homogeneous_box_splits_evenly() {
    let mut bx = PackedBox::new(Orientation::Horizontal, true, 0);
    bx.set_allocation(Size::new(30, 5));
    let a = bx.pack_start(Box::new(Filler::new('a')), false, true, 0);
    let b = bx.pack_start(Box::new(Filler::new('b')), false, true, 0);
    let c = bx.pack_start(Box::new(Filler::new('c')), false, true, 0);
    bx.show_all();

    for (id, x) in [(a, 0), (b, 10), (c, 20)] {
        let child = bx.child(id).unwrap();
        assert_eq!(child.origin(), Offset::new(x, 0));
        assert_eq!(child.allocation(), Size::new(10, 5));
    }
}

#[test]
fn test_dynamic_box_expands_into_leftover() {
    let mut bx = PackedBox::new(Orientation::Horizontal, false, 0);
    bx.set_allocation(Size::new(20, 4));
    let fixed = bx.pack_start(Box::new(Filler::sized('f', 5, 1)), false, false, 0);
    let greedy = bx.pack_start(Box::new(Filler::new('g')), true, true, 0);
    bx.show_all();

    assert_eq!(bx.child(fixed).unwrap().origin().x, 0);
    assert_eq!(bx.child(fixed).unwrap().allocation().width, 5);
    assert_eq!(bx.child(greedy).unwrap().origin().x, 5);
    assert_eq!(bx.child(greedy).unwrap().allocation().width, 15);
}

#[test]
fn test_box_draw_composites_in_order() {
    let mut bx = PackedBox::new(Orientation::Horizontal, true, 0);
    bx.pack_start(Box::new(Filler::new('a')), false, true, 0);
    bx.pack_start(Box::new(Filler::new('b')), false, true, 0);
    bx.pack_start(Box::new(Filler::new('c')), false, true, 0);

    let output = draw_to_string(&mut bx, 12, 2);
    insta::assert_snapshot!(output, @r"
    aaaabbbbcccc
    aaaabbbbcccc
    ");
}

#[test]
fn test_box_with_spacing_leaves_gaps() {
    let mut bx = PackedBox::new(Orientation::Horizontal, true, 2);
    bx.pack_start(Box::new(Filler::new('a')), false, true, 0);
    bx.pack_start(Box::new(Filler::new('b')), false, true, 0);

    let output = draw_to_string(&mut bx, 10, 1);
    insta::assert_snapshot!(output, @"aaaa  bbbb");
}

#[test]
fn test_end_packed_child_hugs_the_trailing_edge() {
    let mut bx = PackedBox::new(Orientation::Horizontal, false, 0);
    bx.pack_start(Box::new(Filler::sized('h', 3, 1)), false, false, 0);
    bx.pack_end(Box::new(Filler::sized('t', 2, 1)), false, false, 0);

    let output = draw_to_string(&mut bx, 10, 1);
    insta::assert_snapshot!(output, @"hhh     tt");
}

#[test]
fn test_nested_boxes() {
    let mut row = PackedBox::new(Orientation::Horizontal, true, 0);
    row.pack_start(Box::new(Filler::new('1')), false, true, 0);
    row.pack_start(Box::new(Filler::new('2')), false, true, 0);

    let mut column = PackedBox::new(Orientation::Vertical, false, 0);
    column.pack_start(Box::new(row), true, true, 0);
    column.pack_start(Box::new(Filler::sized('s', -1, 1)), false, false, 0);

    let output = draw_to_string(&mut column, 8, 3);
    insta::assert_snapshot!(output, @r"
    11112222
    11112222
    ssssssss
    ");
}

// ---------------------------------------------------------------------------
// Relative-origin invariant
// ---------------------------------------------------------------------------

#[test]
fn test_moving_a_box_preserves_child_relative_origins() {
    let build = |origin: Offset| {
        let mut bx = PackedBox::new(Orientation::Horizontal, true, 0);
        bx.set_origin(origin);
        bx.set_allocation(Size::new(20, 4));
        let a = bx.pack_start(Box::new(Filler::new('a')), false, true, 0);
        let b = bx.pack_start(Box::new(Filler::new('b')), false, true, 0);
        bx.show_all();
        let a = bx.child(a).unwrap().origin().local_to(origin);
        let b = bx.child(b).unwrap().origin().local_to(origin);
        (a, b)
    };

    // Translating the container changes nothing about the children's
    // positions relative to it.
    let at_zero = build(Offset::new(0, 0));
    let translated = build(Offset::new(13, 7));
    assert_eq!(at_zero, translated);
    assert_eq!(at_zero.0, Offset::new(0, 0));
    assert_eq!(at_zero.1, Offset::new(10, 0));
}

#[test]
fn test_moving_a_box_redraws_identically() {
    let render = |origin: Offset| {
        let mut bx = PackedBox::new(Orientation::Horizontal, true, 0);
        bx.pack_start(Box::new(Filler::new('a')), false, true, 0);
        bx.pack_start(Box::new(Filler::new('b')), false, true, 0);
        bx.show_all();
        bx.set_origin(origin);
        bx.set_allocation(Size::new(8, 2));
        bx.resize();

        let mut canvas =
            Canvas::new(Offset::new(0, 0), Size::new(8, 2), CellStyle::default());
        bx.draw(&mut canvas);
        canvas_to_string(&canvas)
    };

    // The box canvas is parent-relative, so its content is independent of
    // where the box sits on screen.
    assert_eq!(render(Offset::new(0, 0)), render(Offset::new(40, 12)));
}

// ---------------------------------------------------------------------------
// Scrolled viewport
// ---------------------------------------------------------------------------

#[test]
fn test_viewport_scroll_bounds() {
    let mut vp = ScrolledViewport::new();
    vp.set_allocation(Size::new(40, 20));
    vp.add(Box::new(Filler::sized('c', 100, 50)));
    vp.show_all();

    // Both bars shown: each axis reserves the corner cell.
    assert_eq!(vp.h_adjustment().borrow().range(), (0, 61));
    assert_eq!(vp.v_adjustment().borrow().range(), (0, 31));

    vp.h_adjustment().borrow_mut().set_value(500);
    assert_eq!(vp.h_adjustment().borrow().value(), 61);
}

#[test]
fn test_viewport_draw_clips_child() {
    let mut vp = ScrolledViewport::new();
    vp.add(Box::new(Ruler::new(10, 3)));

    let output = draw_to_string(&mut vp, 8, 4);
    insta::assert_snapshot!(output, @r"
    0123456▲
    0123456█
    0123456▼
    ◀████░▶
    ");
}

#[test]
fn test_viewport_scrolls_content() {
    let mut vp = ScrolledViewport::new();
    vp.add(Box::new(Ruler::new(10, 3)));
    draw_to_string(&mut vp, 8, 4);

    // Scroll right to the end: upper is 10 - 8 + 1 = 3.
    vp.h_adjustment().borrow_mut().set_value(3);
    vp.resize();

    let mut canvas = Canvas::new(Offset::new(0, 0), Size::new(8, 4), CellStyle::default());
    vp.draw(&mut canvas);
    insta::assert_snapshot!(canvas_to_string(&canvas), @r"
    3456789▲
    3456789█
    3456789▼
    ◀░████▶
    ");
}

#[test]
fn test_viewport_without_bars_uses_the_full_window() {
    let mut vp = ScrolledViewport::new();
    vp.set_policy(Policy::Never, Policy::Never);
    vp.add(Box::new(Ruler::new(10, 3)));

    let output = draw_to_string(&mut vp, 8, 4);
    insta::assert_snapshot!(output.trim_end(), @r"
    01234567
    01234567
    01234567
    ");
}

#[test]
fn test_viewport_scrollbar_steps_move_the_adjustment() {
    let mut vp = ScrolledViewport::new();
    vp.set_allocation(Size::new(40, 20));
    vp.add(Box::new(Filler::sized('c', 100, 50)));
    vp.show_all();

    assert_eq!(vp.h_scrollbar_mut().forward_step(), EventFlag::Stop);
    assert_eq!(vp.h_adjustment().borrow().value(), 1);

    vp.resize();
    assert_eq!(vp.child().unwrap().origin().x, -1);
}

#[test]
fn test_viewport_automatic_policy_hides_satisfied_axes() {
    let mut vp = ScrolledViewport::new();
    vp.set_policy(Policy::Automatic, Policy::Automatic);
    // Wide but short child: only the horizontal axis overflows.
    vp.add(Box::new(Ruler::new(20, 2)));

    let output = draw_to_string(&mut vp, 8, 4);
    insta::assert_snapshot!(output, @r"
    01234567
    01234567

    ◀█░░░░░▶
    ");
}

#[test]
fn test_box_inside_viewport() {
    let mut bx = PackedBox::new(Orientation::Vertical, true, 0);
    bx.pack_start(Box::new(Filler::new('x')), false, true, 0);
    bx.pack_start(Box::new(Filler::new('y')), false, true, 0);
    // Give the box a concrete request so the viewport can overflow it.
    bx.core_mut().set_size_request(Size::new(6, 4));

    let mut vp = ScrolledViewport::new();
    vp.set_policy(Policy::Never, Policy::Never);
    vp.add(Box::new(bx));

    let output = draw_to_string(&mut vp, 6, 2);
    insta::assert_snapshot!(output, @r"
    xxxxxx
    xxxxxx
    ");
}
