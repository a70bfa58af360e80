//! Collision queries
//!
//! Ray casting against static axis-aligned colliders. This is the ground
//! query the locomotion controller uses to decide whether the character is
//! standing on something.
//!
//! # Ray-AABB Intersection
//!
//! The slab method is used: entry and exit times are computed per axis and
//! the ray hits when the latest entry precedes the earliest exit.
//!
//! # Example
//!
//! ```ignore
//! use stride_engine::physics::{Collider, ColliderWorld, GroundQuery, LayerMask};
//! use glam::Vec3;
//!
//! let mut world = ColliderWorld::new();
//! world.insert(Collider::new(Vec3::new(-50.0, -1.0, -50.0), Vec3::new(50.0, 0.0, 50.0), 0));
//!
//! if let Some(hit) = world.cast_ray(Vec3::new(0.0, 0.8, 0.0), Vec3::NEG_Y, 0.9, LayerMask::layer(0)) {
//!     println!("ground {} below", hit.distance);
//! }
//! ```

use glam::Vec3;

use super::types::LayerMask;

/// Result of a ray query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// World-space position where the ray entered the collider
    pub point: Vec3,
    /// Outward surface normal at the hit point
    pub normal: Vec3,
    /// Distance from ray origin to hit point
    pub distance: f32,
}

/// Downward proximity query used for ground detection.
///
/// Implementations return the closest eligible hit within `max_distance`,
/// or `None` when nothing on a layer in `mask` lies along the ray.
pub trait GroundQuery {
    fn cast_ray(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit>;
}

/// Ray-AABB intersection using the slab method.
///
/// # Arguments
///
/// * `ray_origin` - Starting point of the ray
/// * `ray_dir` - Direction of the ray (must be normalized)
/// * `aabb_min` - Minimum corner of the AABB
/// * `aabb_max` - Maximum corner of the AABB
///
/// # Returns
///
/// * `Some(t)` - Distance along the ray to the first surface crossing (t >= 0)
/// * `None` - No intersection, or the box lies entirely behind the origin
pub fn ray_aabb_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    aabb_min: Vec3,
    aabb_max: Vec3,
) -> Option<f32> {
    // Near-zero components become huge reciprocals so that axis never clips
    let inv = |d: f32| if d.abs() > 1e-10 { 1.0 / d } else { f32::MAX * d.signum() };
    let inv_dir = Vec3::new(inv(ray_dir.x), inv(ray_dir.y), inv(ray_dir.z));

    let t1 = (aabb_min - ray_origin) * inv_dir;
    let t2 = (aabb_max - ray_origin) * inv_dir;

    let t_min = t1.min(t2).max_element();
    let t_max = t1.max(t2).min_element();

    if t_max >= t_min && t_max >= 0.0 {
        // Origin inside the box reports the exit face
        Some(if t_min >= 0.0 { t_min } else { t_max })
    } else {
        None
    }
}

/// Outward normal of the AABB face closest to `point`.
pub fn aabb_surface_normal(point: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Vec3 {
    let center = (aabb_min + aabb_max) * 0.5;
    let half_extents = ((aabb_max - aabb_min) * 0.5).max(Vec3::splat(1e-6));
    let normalized = (point - center) / half_extents;
    let abs = normalized.abs();

    if abs.x >= abs.y && abs.x >= abs.z {
        Vec3::new(normalized.x.signum(), 0.0, 0.0)
    } else if abs.y >= abs.z {
        Vec3::new(0.0, normalized.y.signum(), 0.0)
    } else {
        Vec3::new(0.0, 0.0, normalized.z.signum())
    }
}

/// A static axis-aligned collider on one collision layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub min: Vec3,
    pub max: Vec3,
    /// Collision layer index (0..32)
    pub layer: u32,
}

impl Collider {
    /// Create a collider from two corners; the corners may be given in any order.
    pub fn new(a: Vec3, b: Vec3, layer: u32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
            layer,
        }
    }

    /// Flat slab whose top face sits at `top_y`.
    pub fn ground_slab(center: Vec3, half_extent: f32, top_y: f32, layer: u32) -> Self {
        Self::new(
            Vec3::new(center.x - half_extent, top_y - 1.0, center.z - half_extent),
            Vec3::new(center.x + half_extent, top_y, center.z + half_extent),
            layer,
        )
    }
}

/// Collection of static colliders answering ray queries by brute force.
#[derive(Debug, Clone, Default)]
pub struct ColliderWorld {
    colliders: Vec<Collider>,
}

impl ColliderWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, collider: Collider) {
        self.colliders.push(collider);
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    pub fn clear(&mut self) {
        self.colliders.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Collider> {
        self.colliders.iter()
    }
}

impl GroundQuery for ColliderWorld {
    fn cast_ray(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit> {
        let direction = direction.normalize_or_zero();
        if direction == Vec3::ZERO {
            return None;
        }

        let mut closest: Option<RayHit> = None;
        let mut closest_dist = max_distance;

        for collider in self.colliders.iter().filter(|c| mask.contains(c.layer)) {
            if let Some(t) = ray_aabb_intersect(origin, direction, collider.min, collider.max) {
                if t <= closest_dist {
                    let point = origin + direction * t;
                    closest = Some(RayHit {
                        point,
                        normal: aabb_surface_normal(point, collider.min, collider.max),
                        distance: t,
                    });
                    closest_dist = t;
                }
            }
        }

        closest
    }
}
