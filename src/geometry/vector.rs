//! Directed vectors between points
use crate::geometry::Point;
use std::fmt;
use std::ops::Neg;

/// A vector from one point to another
///
/// Only the component deltas are stored, so a vector is free: two vectors
/// with the same components are interchangeable whatever their start point.
/// The magnitude is computed once on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    x: f64,
    y: f64,
    z: f64,
    magnitude: f64,
}

impl Vector {
    /// The zero vector
    pub const ZERO: Vector = Vector {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        magnitude: 0.0,
    };

    /// Create the vector from `start` to `end`
    pub fn new(start: &Point, end: &Point) -> Self {
        Self::from_components(end.x - start.x, end.y - start.y, end.z - start.z)
    }

    /// Create a vector anchored at the origin with the given components
    pub fn from_components(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            magnitude: (x * x + y * y + z * z).sqrt(),
        }
    }

    /// x-component
    pub fn x(&self) -> f64 {
        self.x
    }

    /// y-component
    pub fn y(&self) -> f64 {
        self.y
    }

    /// z-component
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Components as an array
    pub fn components(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Euclidean length
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Cross product `self × other`
    pub fn cross(&self, other: &Vector) -> Vector {
        Vector::from_components(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Dot product `self · other`
    pub fn dot(&self, other: &Vector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Unit vector in the same direction
    ///
    /// A zero-length vector normalises to the zero vector.
    pub fn normalised(&self) -> Vector {
        if self.magnitude == 0.0 {
            Vector::ZERO
        } else {
            Vector::from_components(
                self.x / self.magnitude,
                self.y / self.magnitude,
                self.z / self.magnitude,
            )
        }
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            magnitude: self.magnitude,
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Cross product of two vectors
pub fn cross_product(u: &Vector, v: &Vector) -> Vector {
    u.cross(v)
}

/// Dot product of two vectors
pub fn dot_product(u: &Vector, v: &Vector) -> f64 {
    u.dot(v)
}
