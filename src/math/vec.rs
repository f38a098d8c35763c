use std::ops::{Add, Mul, Sub};

/// A 3D vector over `f32`, laid out as a plain `[f32; 3]`.
///
/// The simulation uses a right-handed coordinate system where x and z span
/// the maze floor and y is height. `Vec3` is `Pod` so downstream renderers
/// can upload positions to GPU buffers without conversion.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec3(pub [f32; 3]);

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Vec3([x, y, z])
    }

    pub fn length(&self) -> f32 {
        (self.x().powi(2) + self.y().powi(2) + self.z().powi(2)).sqrt()
    }

    /// Returns a unit-length copy of this vector, or the zero vector if the
    /// length is zero.
    pub fn normalize(&self) -> Self {
        let length = self.length();
        if length == 0.0 {
            return Self([0.0, 0.0, 0.0]);
        }

        Self([self.x() / length, self.y() / length, self.z() / length])
    }

    /// Euclidean distance between two points.
    pub fn distance_to(&self, other: &Self) -> f32 {
        (*other - *self).length()
    }

    pub fn as_array(&self) -> &[f32; 3] {
        &self.0
    }
    pub fn x(&self) -> f32 {
        self.0[0]
    }
    pub fn y(&self) -> f32 {
        self.0[1]
    }
    pub fn z(&self) -> f32 {
        self.0[2]
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(values: [f32; 3]) -> Self {
        Vec3(values)
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(vec: Vec3) -> Self {
        vec.0
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self([
            self.x() + other.x(),
            self.y() + other.y(),
            self.z() + other.z(),
        ])
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self([
            self.x() - other.x(),
            self.y() - other.y(),
            self.z() - other.z(),
        ])
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self([self.x() * scalar, self.y() * scalar, self.z() * scalar])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_handles_zero_length() {
        let v = Vec3::new(0.0, 0.0, 0.0);
        assert_eq!(v.normalize(), Vec3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn normalize_produces_unit_length() {
        let v = Vec3::new(3.0, 0.0, 4.0).normalize();
        assert!((v.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(4.0, 0.0, 4.0);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-6);
    }
}
