//! Geometric primitives and intersection tests.
//!
//! # Core Components
//!
//! * [`Sphere`] - bounding volume of a moving body such as the player camera
//! * [`Plane`] - implicit surface `dot(normal, p) + distance = 0`
//! * [`Ray`] - origin plus direction, used for picking and line of sight
//! * [`Aabb`] - axis-aligned box given by its min and max corners
//!
//! All tests are pure functions. Degenerate input (parallel rays, zero-length
//! directions, axis-aligned rays) never panics: parallel ray-plane queries
//! return `None`, and the ray-box slab test relies on IEEE signed infinities
//! from dividing by zero direction components.

use crate::math::vec::Vec3;

/// `|dot(n, d)|` at or below this counts as a ray parallel to a plane.
pub const PARALLEL_EPSILON: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Oriented plane. Points with positive [`signed_distance`](Self::signed_distance)
/// are on the side the normal faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal.
    pub normal: Vec3,
    pub distance: f32,
}

impl Plane {
    pub fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Plane through `point` facing `normal`. The normal is normalized.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        let normal = normal.normalize();
        Self {
            normal,
            distance: -normal.dot(&point),
        }
    }

    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(&point) + self.distance
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Parameter of the intersection with `plane`, if it lies at or ahead of
    /// the origin.
    pub fn forward_hit(&self, plane: &Plane) -> Option<f32> {
        check_ray_plane_collision(self, plane).filter(|t| *t >= 0.0)
    }
}

/// Axis-Aligned Bounding Box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box of half extents `half` around `center`.
    pub fn from_center(center: Vec3, half: Vec3) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Inclusive point containment.
    pub fn contains(&self, p: Vec3) -> bool {
        (0..3).all(|i| {
            let v = p.as_array()[i];
            v >= self.min.as_array()[i] && v <= self.max.as_array()[i]
        })
    }
}

/// Whether `sphere` touches `plane` from either side.
///
/// True iff the unsigned distance from the centre to the plane is at most the
/// radius.
pub fn check_sphere_plane_collision(sphere: &Sphere, plane: &Plane) -> bool {
    plane.signed_distance(sphere.center).abs() <= sphere.radius
}

/// Whether two spheres touch or overlap.
pub fn check_sphere_sphere_collision(a: &Sphere, b: &Sphere) -> bool {
    a.center.distance(&b.center) <= a.radius + b.radius
}

/// Ray parameter `t` where `ray.at(t)` lies on `plane`.
///
/// Returns `None` when the ray is parallel to the plane. A `Some` result may
/// be negative, meaning the plane is behind the origin; use
/// [`Ray::forward_hit`] to keep only hits ahead.
pub fn check_ray_plane_collision(ray: &Ray, plane: &Plane) -> Option<f32> {
    let denom = plane.normal.dot(&ray.direction);
    if denom.abs() <= PARALLEL_EPSILON {
        return None;
    }
    Some(-plane.signed_distance(ray.origin) / denom)
}

/// Slab test between a ray and a box.
///
/// Hits iff the entry parameter does not exceed the exit parameter and the
/// exit lies at or ahead of the origin. A ray starting inside the box hits.
/// A zero-length direction hits iff its origin is inside the box.
pub fn check_ray_aabb_collision(ray: &Ray, aabb: &Aabb) -> bool {
    if ray.direction == Vec3::ZERO {
        return aabb.contains(ray.origin);
    }

    let origin = ray.origin.as_array();
    let direction = ray.direction.as_array();
    let min = aabb.min.as_array();
    let max = aabb.max.as_array();

    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;
    for axis in 0..3 {
        // Parallel to this slab: the origin must already lie within it,
        // faces included.
        if direction[axis] == 0.0 {
            if origin[axis] < min[axis] || origin[axis] > max[axis] {
                return false;
            }
            continue;
        }
        let inv = direction[axis].recip();
        let a = (min[axis] - origin[axis]) * inv;
        let b = (max[axis] - origin[axis]) * inv;
        t_near = t_near.max(a.min(b));
        t_far = t_far.min(a.max(b));
    }

    t_near <= t_far && t_far >= 0.0
}
