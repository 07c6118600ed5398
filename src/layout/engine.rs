//! The box-packing engine.
//!
//! [`compute_placements`] turns a container's allocation and a list of packed
//! child constraints into per-child placements. Two algorithmic modes:
//! homogeneous (every child receives the same main-axis slot) and dynamic
//! (non-expanding children take their natural size, leftover space is split
//! among expanding children). Start-packed children are laid out forward from
//! the leading edge, end-packed children backward from the trailing edge, and
//! the two cursors are never allowed to cross.
//!
//! The engine is pure arithmetic over constraint records; it does not touch
//! widgets. Containers apply the returned placements to their children and
//! surfaces afterwards.

use crate::geometry::{Offset, Orientation, Size};

use super::space::{distribute, solve_space_alloc};

// ---------------------------------------------------------------------------
// PackType
// ---------------------------------------------------------------------------

/// Which end of the container a child is packed against.
///
/// Start-packed children stack from the leading edge in insertion order;
/// end-packed children stack from the trailing edge in insertion order, so
/// the first end-packed child sits closest to the trailing edge.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PackType {
    #[default]
    Start,
    End,
}

// ---------------------------------------------------------------------------
// PackRequest
// ---------------------------------------------------------------------------

/// Layout constraints for one packed child.
#[derive(Clone, Debug, PartialEq)]
pub struct PackRequest {
    /// The child's natural size request; −1 on an axis means unconstrained.
    pub request: Size,
    /// Whether the child takes a share of leftover main-axis space.
    pub expand: bool,
    /// Whether expand-granted space is given to the child's size rather than
    /// used as alignment slack around it.
    pub fill: bool,
    /// Extra cells on both main-axis sides of the child, beyond `spacing`.
    pub padding: i32,
    /// Which end of the container the child packs against.
    pub pack: PackType,
    /// Optional alignment fractions `(x, y)` in `[0, 1]`; `None` means the
    /// child has no alignment capability and slack trails it.
    pub alignment: Option<(f64, f64)>,
}

impl PackRequest {
    /// A start-packed, non-expanding, filling child with no padding.
    pub fn new(request: Size) -> Self {
        Self {
            request,
            expand: false,
            fill: true,
            padding: 0,
            pack: PackType::Start,
            alignment: None,
        }
    }
}

// ---------------------------------------------------------------------------
// BoxLayout
// ---------------------------------------------------------------------------

/// Container-level packing parameters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BoxLayout {
    /// Which axis children are packed along.
    pub orientation: Orientation,
    /// Whether every child receives the same main-axis slot.
    pub homogeneous: bool,
    /// Cells between adjacent children.
    pub spacing: i32,
}

// ---------------------------------------------------------------------------
// Placement
// ---------------------------------------------------------------------------

/// The resolved position and size for one child.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Placement {
    /// Absolute origin for the child widget.
    pub origin: Offset,
    /// The child's allocation.
    pub size: Size,
    /// Origin of the child's surface relative to the container origin.
    pub local: Offset,
}

/// Per-child intermediate state while solving the main axis.
#[derive(Copy, Clone, Debug, Default)]
struct Track {
    /// Main-axis size granted to the child itself.
    size: i32,
    /// Cells between the slot edge and the child (padding plus alignment).
    lead: i32,
    /// Total main-axis footprint: padding + alignment slack + size + padding.
    advance: i32,
}

// ---------------------------------------------------------------------------
// compute_placements
// ---------------------------------------------------------------------------

/// Resolve placements for every packed child.
///
/// `origin` and `alloc` describe the container; placements are returned in
/// the same order as `children`. Infeasible dynamic distributions are logged
/// and layout proceeds with the natural (unclamped, possibly overflowing)
/// sizes; a resize pass always runs to completion.
pub fn compute_placements(
    layout: BoxLayout,
    origin: Offset,
    alloc: Size,
    children: &[PackRequest],
) -> Vec<Placement> {
    let count = children.len();
    if count == 0 {
        return Vec::new();
    }
    let orientation = layout.orientation;
    let main_total = alloc.main(orientation).max(0);
    let cross_total = alloc.cross(orientation).max(0);
    let origin_main = match orientation {
        Orientation::Horizontal => origin.x,
        Orientation::Vertical => origin.y,
    };

    // Visual order: start-packed in insertion order, then end-packed in
    // reverse insertion order so the first end child hugs the trailing edge.
    let mut visual: Vec<usize> = (0..count)
        .filter(|&idx| children[idx].pack == PackType::Start)
        .collect();
    let num_start = visual.len();
    visual.extend(
        (0..count)
            .rev()
            .filter(|&idx| children[idx].pack == PackType::End),
    );

    // In homogeneous mode the division remainder widens the gaps; in dynamic
    // mode leftover space goes to expanding children and gaps stay pure
    // spacing.
    let (increment, gaps) = solve_space_alloc(count as i32, main_total, layout.spacing);
    let (tracks, gaps) = if layout.homogeneous {
        (solve_homogeneous(layout, increment, &visual, children), gaps)
    } else {
        let tracks = solve_dynamic(layout, increment, main_total, &visual, children);
        (tracks, vec![layout.spacing; count - 1])
    };

    // Forward cursor: start-packed children from the leading edge, clamped to
    // the container's trailing edge.
    let trailing = origin_main + main_total;
    let mut placements = vec![Placement::default(); count];
    let mut cursor = origin_main;
    for pos in 0..num_start {
        let child = visual[pos];
        let track = tracks[pos];
        let at = cursor + track.lead;
        let size = track.size.min((trailing - at).max(0));
        placements[child] = place(orientation, origin, at, size, cross_total);
        cursor += track.advance;
        if let Some(&gap) = gaps.get(pos) {
            cursor += gap;
        }
    }
    let forward_edge = cursor;

    // Backward cursor: end-packed children from the trailing edge. A child
    // that would cross the forward cursor is shrunk from its leading side,
    // down to zero if need be.
    let mut bcursor = trailing;
    for pos in (num_start..count).rev() {
        let child = visual[pos];
        let track = tracks[pos];
        bcursor -= track.advance;
        let mut at = bcursor + track.lead;
        let mut size = track.size;
        if at < forward_edge {
            size = (size - (forward_edge - at)).max(0);
            at = forward_edge;
        }
        placements[child] = place(orientation, origin, at, size, cross_total);
        if pos > num_start {
            if let Some(&gap) = gaps.get(pos - 1) {
                bcursor -= gap;
            }
        }
    }

    placements
}

/// Build a [`Placement`] from main-axis position and size.
fn place(
    orientation: Orientation,
    container_origin: Offset,
    at_main: i32,
    size_main: i32,
    cross: i32,
) -> Placement {
    let origin = match orientation {
        Orientation::Horizontal => Offset::new(at_main, container_origin.y),
        Orientation::Vertical => Offset::new(container_origin.x, at_main),
    };
    Placement {
        origin,
        size: orientation.size(size_main, cross),
        local: origin.local_to(container_origin),
    }
}

/// Homogeneous mode: every child's slot is `increment`; padding and the
/// alignment fraction position the child within it.
fn solve_homogeneous(
    layout: BoxLayout,
    increment: i32,
    visual: &[usize],
    children: &[PackRequest],
) -> Vec<Track> {
    let mut tracks = Vec::with_capacity(visual.len());
    for &idx in visual {
        let child = &children[idx];
        let inner = (increment - 2 * child.padding).max(0);
        let req = child.request.main(layout.orientation);
        let size = if child.fill || req < 0 || req > inner { inner } else { req };
        let slack = inner - size;
        tracks.push(Track {
            size,
            lead: child.padding + align_lead(layout.orientation, child, slack),
            advance: 2 * child.padding + inner,
        });
    }
    tracks
}

/// Dynamic mode: non-expanding children keep their natural size, expanding
/// children share the leftover via [`distribute`].
fn solve_dynamic(
    layout: BoxLayout,
    increment: i32,
    main_total: i32,
    visual: &[usize],
    children: &[PackRequest],
) -> Vec<Track> {
    let count = visual.len() as i32;
    let orientation = layout.orientation;

    // Tentative sizes. `extra` is the space non-expanding children claim
    // beyond their fair (homogeneous) share; `consumed` tallies every
    // footprint plus inter-item spacing.
    let mut sizes = Vec::with_capacity(visual.len());
    let mut consumed = layout.spacing * (count - 1).max(0);
    let mut extra = 0;
    let mut num_expanding = 0;
    for &idx in visual {
        let child = &children[idx];
        let padding2 = 2 * child.padding;
        let req = child.request.main(orientation);
        let size;
        if child.expand {
            num_expanding += 1;
            let inner = (increment - padding2).max(0);
            size = if child.fill || req < 0 || req > inner { inner } else { req };
            consumed += increment;
        } else {
            size = if req < 0 { (increment - padding2).max(0) } else { req.max(0) };
            let footprint = size + padding2;
            consumed += footprint;
            extra += (footprint - increment).max(0);
        }
        sizes.push(size);
    }

    let total = main_total - consumed;
    let dist = match distribute(total, extra, num_expanding, count, layout.spacing) {
        Ok((dist, _)) => dist,
        Err(err) => {
            log::error!("box layout distribution failed: {err}");
            Vec::new()
        }
    };

    // Apply shares and finish the tracks.
    let mut tracks = Vec::with_capacity(visual.len());
    let mut share_idx = 0;
    for (pos, &idx) in visual.iter().enumerate() {
        let child = &children[idx];
        let padding2 = 2 * child.padding;
        let mut size = sizes[pos];
        let mut avail = size;
        if child.expand {
            let share = dist.get(share_idx).copied().unwrap_or(0);
            share_idx += 1;
            avail = (increment - padding2).max(0) + share;
            if child.fill {
                size = avail;
            }
        }
        let slack = (avail - size).max(0);
        tracks.push(Track {
            size,
            lead: child.padding + align_lead(orientation, child, slack),
            advance: padding2 + avail,
        });
    }
    tracks
}

/// Split main-axis slack into a leading offset using the child's alignment
/// fraction. A child with no alignment capability gets all slack trailing.
fn align_lead(orientation: Orientation, child: &PackRequest, slack: i32) -> i32 {
    if slack <= 0 {
        return 0;
    }
    match child.alignment {
        Some((x_align, y_align)) => {
            let fraction = match orientation {
                Orientation::Horizontal => x_align,
                Orientation::Vertical => y_align,
            };
            (slack as f64 * fraction.clamp(0.0, 1.0)) as i32
        }
        None => 0,
    }
}

// ---------------------------------------------------------------------------
// aggregate_request
// ---------------------------------------------------------------------------

/// The container's own size request given its children's requests.
///
/// Homogeneous: the largest child footprint times the child count, plus
/// spacing. Dynamic: the sum of child footprints plus spacing. The cross axis
/// is the largest child request either way. Unconstrained (−1) child requests
/// contribute zero.
pub fn aggregate_request(layout: BoxLayout, children: &[PackRequest]) -> Size {
    let count = children.len() as i32;
    if count == 0 {
        return Size::ZERO;
    }
    let orientation = layout.orientation;
    let spacing_total = layout.spacing * (count - 1);

    let mut largest = 0;
    let mut tally = 0;
    let mut cross = 0;
    for child in children {
        let footprint = child.request.main(orientation).max(0) + 2 * child.padding;
        largest = largest.max(footprint);
        tally += footprint;
        cross = cross.max(child.request.cross(orientation).max(0));
    }

    let main = if layout.homogeneous {
        largest * count + spacing_total
    } else {
        tally + spacing_total
    };
    orientation.size(main, cross)
}

// ===========================================================================
// Tests
// ===========================================================================
