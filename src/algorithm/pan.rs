//! Drag tracking for the lattice pan offset
//!
//! The tracker only accumulates pointer deltas into a candidate offset. The
//! boundary policy decides what offset is finally committed.

/// Translation applied to the whole lattice
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanOffset {
    /// Translation along x
    pub x: f64,
    /// Translation along z
    pub z: f64,
}

impl PanOffset {
    /// Create an offset from its two components
    pub const fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }
}

/// Pointer drag state machine
#[derive(Debug, Clone, Default)]
pub struct PanTracker {
    offset: PanOffset,
    dragging: bool,
    last_pointer: [f64; 2],
}

impl PanTracker {
    /// Create an idle tracker at zero offset
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed offset
    pub const fn offset(&self) -> PanOffset {
        self.offset
    }

    /// Whether a drag is in progress
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Last pointer position seen during a drag
    pub const fn last_pointer(&self) -> [f64; 2] {
        self.last_pointer
    }

    /// Begin a drag at screen position `pos`
    ///
    /// Non-finite positions are ignored.
    pub fn pointer_down(&mut self, pos: [f64; 2]) {
        if pos.iter().all(|v| v.is_finite()) {
            self.dragging = true;
            self.last_pointer = pos;
        }
    }

    /// Advance a drag to `pos` and return the uncommitted candidate offset
    ///
    /// Screen x maps to world x and screen y to world z. Returns `None` and
    /// leaves all state alone when no drag is in progress or `pos` is not finite.
    pub fn pointer_move(&mut self, pos: [f64; 2]) -> Option<PanOffset> {
        if !self.dragging || !pos.iter().all(|v| v.is_finite()) {
            return None;
        }
        let [x, y] = pos;
        let [last_x, last_y] = self.last_pointer;
        let candidate = PanOffset::new(self.offset.x + (x - last_x), self.offset.z + (y - last_y));
        self.last_pointer = pos;
        Some(candidate)
    }

    /// Store the offset chosen by the boundary policy
    pub const fn commit(&mut self, offset: PanOffset) {
        self.offset = offset;
    }

    /// End the drag
    pub const fn pointer_up(&mut self) {
        self.dragging = false;
    }

    /// End the drag because the pointer left the surface
    pub const fn pointer_leave(&mut self) {
        self.pointer_up();
    }
}
