//! Ship archetypes and placed-ship values.

use crate::common::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship archetype: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    size: u32,
}

impl ShipClass {
    pub const fn new(name: &'static str, size: u32) -> Self {
        Self { name, size }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn size(&self) -> u32 {
        self.size
    }
}

/// An immutable ship placement: a named, sized, 1-indexed inclusive
/// rectangle. Valid placements are 1×size or size×1; the validator enforces
/// orientation, canonical ordering (`x1 <= x2`, `y1 <= y2`), bounds, and the
/// size/footprint correlation before any board mutation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlacedShip {
    pub name: &'static str,
    pub size: u32,
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl PlacedShip {
    pub fn new(name: &'static str, size: u32, x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        Self { name, size, x1, y1, x2, y2 }
    }

    /// Derive a placement from a class, an origin cell, and an orientation.
    /// The rectangle extends toward increasing x or y, so the result is
    /// always canonically ordered; it may still fall out of bounds, which
    /// the validator reports.
    pub fn spanning(class: &ShipClass, origin: Coordinate, orientation: Orientation) -> Self {
        let (x1, y1) = origin;
        let (x2, y2) = match orientation {
            Orientation::Horizontal => (x1 + class.size() - 1, y1),
            Orientation::Vertical => (x1, y1 + class.size() - 1),
        };
        Self::new(class.name(), class.size(), x1, y1, x2, y2)
    }

    /// The set of 1-indexed coordinates covered by the inclusive rectangle.
    pub fn footprint(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (self.x1..=self.x2).flat_map(move |x| (self.y1..=self.y2).map(move |y| (x, y)))
    }
}
