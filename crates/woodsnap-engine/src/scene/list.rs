use crate::coords::Rect;

use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command + clip rect.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Clip rect in pixels. `None` = no clipping (draw everywhere).
    pub clip_rect: Option<Rect>,
}

/// Recorded draw stream for one canvas.
///
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer
///
/// # Clipping
///
/// Use [`push_clip`](Self::push_clip) / [`pop_clip`](Self::pop_clip) to scope
/// draw commands to a rect. Clips are intersected with the current parent.
///
/// ```
/// use woodsnap_engine::coords::Rect;
/// use woodsnap_engine::paint::Color;
/// use woodsnap_engine::scene::{DrawList, ZIndex};
///
/// let mut list = DrawList::new();
/// list.push_clip(Rect::new(0.0, 0.0, 100.0, 100.0));
/// list.push_solid_rect(ZIndex(0), Rect::new(10.0, 10.0, 500.0, 20.0), Color::black());
/// list.pop_clip();
/// assert_eq!(list.items()[0].clip_rect, Some(Rect::new(0.0, 0.0, 100.0, 100.0)));
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    /// Stack of active clip rects.
    /// The top is always the current effective clip, already intersected with all parents.
    clip_stack: Vec<Rect>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the clip stack. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.clip_stack.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index.
    ///
    /// The item inherits the current clip rect from the clip stack.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
            clip_rect: self.clip_stack.last().copied(),
        });

        self.sorted_dirty = true;
    }

    /// Begins a clip region. All draw commands pushed until [`pop_clip`] are clipped
    /// to `rect` (intersected with any parent clip rect).
    ///
    /// Calls must be balanced with [`pop_clip`].
    #[inline]
    pub fn push_clip(&mut self, rect: Rect) {
        let effective = match self.clip_stack.last() {
            None => rect,
            // No overlap with the parent yields a zero-area clip; the rasterizer
            // skips everything inside it.
            Some(&parent) => parent.intersect(rect).unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0)),
        };
        self.clip_stack.push(effective);
    }

    /// Ends the most recent clip region started by [`push_clip`].
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_clip`.
    #[inline]
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }

    /// Returns indices into `items` in paint order (back-to-front).
    ///
    /// This buffer is owned by `DrawList` and reused after `clear()`.
    pub fn indices_in_paint_order(&mut self) -> &[usize] {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
        &self.sorted_indices
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    fn unit(x: f32) -> Rect {
        Rect::new(x, 0.0, 1.0, 1.0)
    }

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut list = DrawList::new();
        list.push_solid_rect(ZIndex(5), unit(0.0), Color::black());
        list.push_solid_rect(ZIndex(1), unit(1.0), Color::black());
        list.push_solid_rect(ZIndex(5), unit(2.0), Color::black());
        list.push_solid_rect(ZIndex(1), unit(3.0), Color::black());
        assert_eq!(list.indices_in_paint_order(), &[1, 3, 0, 2]);
    }

    #[test]
    fn nested_clips_intersect() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        list.push_clip(Rect::new(5.0, 5.0, 10.0, 10.0));
        list.push_solid_rect(ZIndex(0), unit(0.0), Color::black());
        list.pop_clip();
        list.push_solid_rect(ZIndex(0), unit(0.0), Color::black());
        list.pop_clip();
        list.push_solid_rect(ZIndex(0), unit(0.0), Color::black());

        let clips: Vec<_> = list.items().iter().map(|i| i.clip_rect).collect();
        assert_eq!(
            clips,
            vec![
                Some(Rect::new(5.0, 5.0, 5.0, 5.0)),
                Some(Rect::new(0.0, 0.0, 10.0, 10.0)),
                None,
            ]
        );
    }

    #[test]
    fn disjoint_clip_becomes_zero_area() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        list.push_clip(Rect::new(50.0, 50.0, 10.0, 10.0));
        list.push_solid_rect(ZIndex(0), unit(0.0), Color::black());
        let clip = list.items()[0].clip_rect.unwrap();
        assert!(clip.is_empty());
    }

    #[test]
    fn clear_resets_items_and_order() {
        let mut list = DrawList::new();
        list.push_solid_rect(ZIndex(0), unit(0.0), Color::black());
        list.clear();
        assert!(list.is_empty());
        list.push_solid_rect(ZIndex(0), unit(0.0), Color::black());
        assert_eq!(list.items()[0].key.order, 0);
    }
}
