//! Minimal float geometry for model elements.
#![forbid(unsafe_code)]

use core::ops::{Add, Sub};

use serde::ser::{Serialize, SerializeTuple, Serializer};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    pub const ONE: Vec3 = Vec3 {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Largest of the three components.
    #[inline]
    pub fn max_element(self) -> f32 {
        self.x.max(self.y).max(self.z)
    }

    #[inline]
    pub fn map(self, f: impl Fn(f32) -> f32) -> Vec3 {
        Vec3::new(f(self.x), f(self.y), f(self.z))
    }

    /// Moves every component towards zero by `shrink` of its own value, never below zero.
    #[inline]
    pub fn contracted(self, shrink: f32) -> Vec3 {
        self.map(|c| (c - shrink * c).max(0.0))
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// Model JSON wants positions as bare `[x, y, z]` arrays.
impl Serialize for Vec3 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut t = serializer.serialize_tuple(3)?;
        t.serialize_element(&self.x)?;
        t.serialize_element(&self.y)?;
        t.serialize_element(&self.z)?;
        t.end()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// The unit box occupying voxel `(x, y, z)`.
    #[inline]
    pub fn voxel(x: usize, y: usize, z: usize) -> Self {
        let min = Vec3::new(x as f32, y as f32, z as f32);
        Self::new(min, min + Vec3::ONE)
    }

    #[inline]
    pub fn extents(&self) -> Vec3 {
        self.max - self.min
    }

    /// True when `max >= min` on every axis.
    #[inline]
    pub fn is_ordered(&self) -> bool {
        self.max.x >= self.min.x && self.max.y >= self.min.y && self.max.z >= self.min.z
    }

    #[inline]
    pub fn contracted(self, shrink: f32) -> Aabb {
        Aabb::new(self.min.contracted(shrink), self.max.contracted(shrink))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn contraction_keeps_components_non_negative(v in any::<Vec3>(), shrink in 0.0f32..1.0) {
            prop_assume!(v.x.is_finite() && v.y.is_finite() && v.z.is_finite());
            let c = v.contracted(shrink);
            prop_assert!(c.x >= 0.0 && c.y >= 0.0 && c.z >= 0.0);
        }
    }
}
