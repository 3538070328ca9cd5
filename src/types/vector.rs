//! Vector types for DXF coordinates

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// 2D vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// Create a new 2D vector
    pub const fn new(x: f64, y: f64) -> Self {
        Vector2 { x, y }
    }

    /// Zero vector
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);

    /// Calculate the length (magnitude) of the vector
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Lift into 3D with the given z value
    pub const fn with_z(self, z: f64) -> Vector3 {
        Vector3::new(self.x, self.y, z)
    }
}

impl Default for Vector2 {
    fn default() -> Self {
        Vector2::ZERO
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2::new(x, y)
    }
}

impl Add for Vector2 {
    type Output = Vector2;
    fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;
    fn sub(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// 3D vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Create a new 3D vector
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// Zero vector
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    /// Unit X vector
    pub const UNIT_X: Vector3 = Vector3::new(1.0, 0.0, 0.0);

    /// Unit Z vector, the default DXF extrusion direction
    pub const UNIT_Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    /// Calculate the length (magnitude) of the vector
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Normalize the vector (make it unit length)
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Vector3::new(self.x / len, self.y / len, self.z / len)
        } else {
            *self
        }
    }

    /// Drop the z component
    pub const fn xy(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }
}

impl Default for Vector3 {
    fn default() -> Self {
        Vector3::ZERO
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<Vector2> for Vector3 {
    fn from(v: Vector2) -> Self {
        v.with_z(0.0)
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, scalar: f64) -> Vector3 {
        Vector3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
