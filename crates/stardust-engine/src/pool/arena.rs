//! Packed per-instance storage for one batched draw.
//!
//! One contiguous float buffer holds, field-then-slot, a rotation matrix per
//! slot, then a translation matrix per slot, then a scale matrix per slot,
//! then (optionally) an RGBA color per slot:
//!
//! ```text
//! [ R0 .. R(C-1) | T0 .. T(C-1) | S0 .. S(C-1) | c0 .. c(C-1) ]
//!   16 floats ea   16 floats ea   16 floats ea    4 floats ea
//! ```
//!
//! Matrices are column-major, matching an array of `mat4` in a std140
//! uniform block. A slot's offsets are fixed for the lifetime of the arena;
//! all mutation goes through the field writers, never through long-lived
//! views into the buffer.

use std::ops::Range;

use glam::{Mat4, Vec2, Vec3};

use crate::paint::ColorRgba;

/// Floats in one 4x4 matrix block.
pub const MAT4_FLOATS: usize = 16;

/// Floats in one color block.
pub const COLOR_FLOATS: usize = 4;

/// Offset arithmetic for a packed instance buffer.
///
/// Field positions depend only on `capacity` and `colors`, so a layout value
/// can be shared freely between a pool and the backend reading its snapshot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SlotLayout {
    capacity: usize,
    colors: bool,
}

impl SlotLayout {
    pub const fn new(capacity: usize, colors: bool) -> Self {
        Self { capacity, colors }
    }

    #[inline]
    pub const fn capacity(self) -> usize {
        self.capacity
    }

    #[inline]
    pub const fn has_colors(self) -> bool {
        self.colors
    }

    /// Total floats in the buffer.
    pub const fn float_len(self) -> usize {
        let mats = 3 * MAT4_FLOATS * self.capacity;
        if self.colors {
            mats + COLOR_FLOATS * self.capacity
        } else {
            mats
        }
    }

    /// Total bytes in the buffer.
    pub const fn byte_len(self) -> usize {
        self.float_len() * std::mem::size_of::<f32>()
    }

    /// Float range of `slot`'s rotation matrix.
    #[inline]
    pub fn rotation(self, slot: usize) -> Range<usize> {
        debug_assert!(slot < self.capacity);
        let start = MAT4_FLOATS * slot;
        start..start + MAT4_FLOATS
    }

    /// Float range of `slot`'s translation matrix.
    ///
    /// Column-major: the x/y/z components sit at floats 12, 13 and 14 of the
    /// block.
    #[inline]
    pub fn translation(self, slot: usize) -> Range<usize> {
        debug_assert!(slot < self.capacity);
        let start = MAT4_FLOATS * (self.capacity + slot);
        start..start + MAT4_FLOATS
    }

    /// Float range of `slot`'s scale matrix.
    ///
    /// Uniform scale: the factor sits on the diagonal, floats 0, 5 and 10 of
    /// the block.
    #[inline]
    pub fn scale(self, slot: usize) -> Range<usize> {
        debug_assert!(slot < self.capacity);
        let start = MAT4_FLOATS * (2 * self.capacity + slot);
        start..start + MAT4_FLOATS
    }

    /// Float range of `slot`'s color, if the layout carries colors.
    #[inline]
    pub fn color(self, slot: usize) -> Option<Range<usize>> {
        debug_assert!(slot < self.capacity);
        if !self.colors {
            return None;
        }
        let start = 3 * MAT4_FLOATS * self.capacity + COLOR_FLOATS * slot;
        Some(start..start + COLOR_FLOATS)
    }
}

/// Owns the packed buffer and performs all writes at fixed offsets.
///
/// Freshly created arenas hold identity matrices and zeroed colors, so a
/// backend uploading the whole buffer before the first tick draws nothing
/// visible rather than garbage.
pub struct InstanceArena {
    layout: SlotLayout,
    data: Box<[f32]>,
}

impl InstanceArena {
    pub fn new(layout: SlotLayout) -> Self {
        let mut data = vec![0.0; layout.float_len()].into_boxed_slice();
        let identity = Mat4::IDENTITY.to_cols_array();
        for slot in 0..layout.capacity() {
            data[layout.rotation(slot)].copy_from_slice(&identity);
            data[layout.translation(slot)].copy_from_slice(&identity);
            data[layout.scale(slot)].copy_from_slice(&identity);
        }
        Self { layout, data }
    }

    #[inline]
    pub fn layout(&self) -> SlotLayout {
        self.layout
    }

    /// Read-only view of the whole packed buffer.
    #[inline]
    pub fn floats(&self) -> &[f32] {
        &self.data
    }

    /// Writes `slot`'s rotation: `angle_deg` degrees around +Z.
    pub fn write_rotation_z(&mut self, slot: usize, angle_deg: f32) {
        let m = Mat4::from_rotation_z(angle_deg.to_radians());
        m.write_cols_to_slice(&mut self.data[self.layout.rotation(slot)]);
    }

    /// Writes `slot`'s translation from an NDC position (z = 0).
    pub fn write_translation(&mut self, slot: usize, position: Vec2) {
        let m = Mat4::from_translation(Vec3::new(position.x, position.y, 0.0));
        m.write_cols_to_slice(&mut self.data[self.layout.translation(slot)]);
    }

    /// Writes `slot`'s uniform scale.
    pub fn write_scale(&mut self, slot: usize, scale: f32) {
        let m = Mat4::from_scale(Vec3::splat(scale));
        m.write_cols_to_slice(&mut self.data[self.layout.scale(slot)]);
    }

    /// Writes `slot`'s color. No-op for layouts without a color block.
    pub fn write_color(&mut self, slot: usize, color: ColorRgba) {
        if let Some(range) = self.layout.color(slot) {
            self.data[range].copy_from_slice(&color.to_array());
        }
    }
}
