//! The packed box container.
//!
//! [`PackedBox`] packs children along one axis with the classic
//! expand/fill/padding semantics. Children added with [`PackedBox::pack_start`]
//! stack from the leading edge, those added with [`PackedBox::pack_end`] from
//! the trailing edge. Each child draws through a private surface that the box
//! composites into its own canvas in insertion order.

use slotmap::SlotMap;

use crate::event::EventFlag;
use crate::geometry::{Orientation, Size};
use crate::layout::{aggregate_request, compute_placements, BoxLayout, PackRequest, PackType};
use crate::render::{Canvas, SurfaceSet, Theme};
use crate::widget::{Widget, WidgetCore, WidgetId};

// ---------------------------------------------------------------------------
// PackedChild
// ---------------------------------------------------------------------------

/// A child widget with its packing properties.
pub struct PackedChild {
    pub widget: Box<dyn Widget>,
    pub expand: bool,
    pub fill: bool,
    pub padding: i32,
    pub pack: PackType,
}

// ---------------------------------------------------------------------------
// PackedBox
// ---------------------------------------------------------------------------

/// A container that packs children along its main axis.
pub struct PackedBox {
    core: WidgetCore,
    orientation: Orientation,
    homogeneous: bool,
    spacing: i32,
    theme: Theme,
    children: SlotMap<WidgetId, PackedChild>,
    /// Insertion order; also the paint order for compositing.
    order: Vec<WidgetId>,
    surfaces: SurfaceSet,
}

impl PackedBox {
    /// Create an empty box.
    pub fn new(orientation: Orientation, homogeneous: bool, spacing: i32) -> Self {
        Self {
            core: WidgetCore::new(),
            orientation,
            homogeneous,
            spacing,
            theme: Theme::default(),
            children: SlotMap::with_key(),
            order: Vec::new(),
            surfaces: SurfaceSet::new(),
        }
    }

    /// The packing axis.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Change the packing axis and re-layout.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.resize();
    }

    /// Whether all children receive equal main-axis slots.
    pub fn homogeneous(&self) -> bool {
        self.homogeneous
    }

    /// Toggle homogeneous mode and re-layout.
    pub fn set_homogeneous(&mut self, homogeneous: bool) {
        self.homogeneous = homogeneous;
        self.resize();
    }

    /// Cells between adjacent children.
    pub fn spacing(&self) -> i32 {
        self.spacing
    }

    /// Change the inter-child spacing and re-layout.
    pub fn set_spacing(&mut self, spacing: i32) {
        self.spacing = spacing;
        self.resize();
    }

    /// The theme used for the box background and child surfaces.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Replace the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Number of children, visible or not.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the box has no children.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Add `child` packed against the leading edge, after any other
    /// start-packed children.
    ///
    /// `expand` grants the child a share of leftover main-axis space; `fill`
    /// gives that share to the child's size rather than slack around it;
    /// `padding` adds cells on both main-axis sides beyond the box spacing.
    pub fn pack_start(
        &mut self,
        widget: Box<dyn Widget>,
        expand: bool,
        fill: bool,
        padding: i32,
    ) -> WidgetId {
        self.pack(widget, expand, fill, padding, PackType::Start)
    }

    /// Add `child` packed against the trailing edge, stacking away from it.
    pub fn pack_end(
        &mut self,
        widget: Box<dyn Widget>,
        expand: bool,
        fill: bool,
        padding: i32,
    ) -> WidgetId {
        self.pack(widget, expand, fill, padding, PackType::End)
    }

    fn pack(
        &mut self,
        widget: Box<dyn Widget>,
        expand: bool,
        fill: bool,
        padding: i32,
        pack: PackType,
    ) -> WidgetId {
        let id = self.children.insert(PackedChild { widget, expand, fill, padding, pack });
        self.order.push(id);
        self.resize();
        id
    }

    /// Remove a child, returning its widget.
    pub fn remove(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        let child = self.children.remove(id)?;
        self.order.retain(|&other| other != id);
        self.surfaces.remove(id);
        self.resize();
        Some(child.widget)
    }

    /// Borrow a child widget.
    pub fn child(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.children.get(id).map(|child| child.widget.as_ref())
    }

    /// Mutably borrow a child widget.
    ///
    /// Geometry changes made through this do not re-layout the box; call
    /// [`Widget::resize`] on the box afterwards.
    pub fn child_mut(&mut self, id: WidgetId) -> Option<&mut Box<dyn Widget>> {
        self.children.get_mut(id).map(|child| &mut child.widget)
    }

    /// Mark a child visible and re-layout.
    pub fn show_child(&mut self, id: WidgetId) {
        if let Some(child) = self.children.get_mut(id) {
            child.widget.show();
            self.resize();
        }
    }

    /// Mark a child hidden and re-layout.
    pub fn hide_child(&mut self, id: WidgetId) {
        if let Some(child) = self.children.get_mut(id) {
            child.widget.hide();
            self.resize();
        }
    }

    /// Move a child to `position` in the insertion order.
    ///
    /// A negative position counts back from the end of the list. A child's
    /// place in the order determines where it packs among children of the
    /// same pack type, and its paint order when compositing.
    pub fn reorder_child(&mut self, id: WidgetId, position: i32) {
        if !self.children.contains_key(id) {
            return;
        }
        let len = self.order.len() as i32;
        let position = if position < 0 { len - 1 } else { position.min(len - 1) } as usize;

        self.order.retain(|&other| other != id);
        self.order.insert(position.min(self.order.len()), id);
        self.resize();
    }

    /// The packing properties for a child: `(expand, fill, padding, pack)`.
    pub fn query_child_packing(&self, id: WidgetId) -> Option<(bool, bool, i32, PackType)> {
        self.children
            .get(id)
            .map(|child| (child.expand, child.fill, child.padding, child.pack))
    }

    /// Replace the packing properties for a child and re-layout.
    pub fn set_child_packing(
        &mut self,
        id: WidgetId,
        expand: bool,
        fill: bool,
        padding: i32,
        pack: PackType,
    ) {
        if let Some(child) = self.children.get_mut(id) {
            child.expand = expand;
            child.fill = fill;
            child.padding = padding;
            child.pack = pack;
            self.resize();
        } else {
            log::error!("set_child_packing: {id:?} is not a child of this box");
        }
    }

    /// Register a callback for the box's `resize` announcements.
    pub fn connect_resize(
        &mut self,
        handle: &str,
        callback: impl FnMut(&crate::geometry::Region) + 'static,
    ) {
        self.core.connect_resize(handle, callback);
    }

    /// Visible children in insertion order.
    fn visible_children(&self) -> Vec<WidgetId> {
        self.order
            .iter()
            .copied()
            .filter(|&id| self.children[id].widget.is_visible())
            .collect()
    }
}

impl Widget for PackedBox {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    /// An explicitly set request wins per axis; unconstrained axes fall back
    /// to the aggregate of the visible children's requests.
    fn size_request(&self) -> Size {
        let explicit = self.core.size_request();
        if explicit.width >= 0 && explicit.height >= 0 {
            return explicit;
        }
        let layout = BoxLayout {
            orientation: self.orientation,
            homogeneous: self.homogeneous,
            spacing: self.spacing,
        };
        let requests: Vec<PackRequest> = self
            .visible_children()
            .into_iter()
            .map(|id| {
                let child = &self.children[id];
                PackRequest {
                    request: child.widget.size_request(),
                    expand: child.expand,
                    fill: child.fill,
                    padding: child.padding,
                    pack: child.pack,
                    alignment: child.widget.alignment(),
                }
            })
            .collect();
        let aggregate = aggregate_request(layout, &requests);
        Size::new(
            if explicit.width >= 0 { explicit.width } else { aggregate.width },
            if explicit.height >= 0 { explicit.height } else { aggregate.height },
        )
    }

    fn resize(&mut self) -> EventFlag {
        let visible = self.visible_children();
        if visible.is_empty() {
            self.core.emit_resize();
            return EventFlag::Stop;
        }

        let layout = BoxLayout {
            orientation: self.orientation,
            homogeneous: self.homogeneous,
            spacing: self.spacing,
        };
        let requests: Vec<PackRequest> = visible
            .iter()
            .map(|&id| {
                let child = &self.children[id];
                PackRequest {
                    request: child.widget.size_request(),
                    expand: child.expand,
                    fill: child.fill,
                    padding: child.padding,
                    pack: child.pack,
                    alignment: child.widget.alignment(),
                }
            })
            .collect();

        let placements =
            compute_placements(layout, self.core.origin(), self.core.allocation(), &requests);

        for (&id, placement) in visible.iter().zip(&placements) {
            self.surfaces.update(id, placement.local, placement.size, &self.theme.content);
            let child = &mut self.children[id];
            child.widget.set_origin(placement.origin);
            child.widget.set_allocation(placement.size);
            child.widget.resize();
        }

        self.core.emit_resize();
        EventFlag::Stop
    }

    fn draw(&mut self, canvas: &mut Canvas) -> EventFlag {
        if !self.core.is_visible() || self.core.allocation().is_empty() {
            return EventFlag::Pass;
        }
        canvas.fill(&self.theme);
        for &id in &self.order {
            let child = &mut self.children[id];
            if !child.widget.is_visible() {
                continue;
            }
            let Some(surface) = self.surfaces.get_mut(id) else {
                log::error!("missing surface for child {id:?}");
                continue;
            };
            child.widget.draw(surface);
            if let Err(err) = canvas.composite(surface) {
                log::error!("composite error for child {id:?}: {err}");
            }
        }
        EventFlag::Stop
    }

    fn show_all(&mut self) {
        self.core.show();
        for id in self.order.clone() {
            self.children[id].widget.show_all();
        }
        self.resize();
    }
}

// ===========================================================================
// Tests
// ===========================================================================
