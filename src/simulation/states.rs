//! Core state types for the atom simulation.
//!
//! - `Rgb`    opaque 24-bit colour identifier
//! - `Atom`   one rigid disc (position, velocity, radius, colour)
//! - `System` the fixed-size particle store plus the tick counter
//!
//! Positions use the drawing surface's frame: origin top-left, Y down.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// 24-bit RGB colour packed as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u32);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0x000000);
    pub const WHITE: Rgb = Rgb(0xFFFFFF);

    /// Split into (red, green, blue) bytes; bits above 24 are ignored.
    pub fn channels(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xFF) as u8,
            ((self.0 >> 8) & 0xFF) as u8,
            (self.0 & 0xFF) as u8,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub color: Rgb,  // fixed at creation
    pub radius: f64, // fixed at creation
    pub x: NVec2,    // centre position
    pub v: NVec2,    // velocity, per tick
}

impl Atom {
    pub fn new(color: Rgb, radius: f64, x: NVec2, v: NVec2) -> Self {
        Self { color, radius, x, v }
    }

    /// Mass is proportional to the disc area: r^2
    #[inline]
    pub fn mass(&self) -> f64 {
        self.radius * self.radius
    }

    /// Strict overlap: centre distance below the sum of radii. Touching discs do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Atom) -> bool {
        (other.x - self.x).norm() < self.radius + other.radius
    }
}

/// The particle store. Sized once at setup, indices are stable for the whole run.
#[derive(Debug, Clone)]
pub struct System {
    pub atoms: Vec<Atom>, // never grows or shrinks after setup
    pub tick: u64,        // completed ticks
}

impl System {
    pub fn new(atoms: Vec<Atom>) -> Self {
        Self { atoms, tick: 0 }
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Total kinetic energy, sum of 1/2 m |v|^2
    pub fn kinetic_energy(&self) -> f64 {
        self.atoms
            .iter()
            .map(|a| 0.5 * a.mass() * a.v.norm_squared())
            .sum()
    }

    /// Total linear momentum, sum of m v
    pub fn momentum(&self) -> NVec2 {
        self.atoms
            .iter()
            .fold(NVec2::zeros(), |acc, a| acc + a.mass() * a.v)
    }
}
