use glam::Vec3;

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Tightest box around `points`; `None` for an empty iterator.
    pub fn from_points<I: IntoIterator<Item = Vec3>>(points: I) -> Option<Aabb> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut aabb = Aabb {
            min: first,
            max: first,
        };
        for p in iter {
            aabb.min = aabb.min.min(p);
            aabb.max = aabb.max.max(p);
        }
        Some(aabb)
    }

    pub fn union(self, other: Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Sphere through the box corners: (center, radius).
    pub fn bounding_sphere(&self) -> (Vec3, f32) {
        (self.center(), self.half_extents().length())
    }
}

/// Orbit distance at which a sphere of `radius` fills the vertical frustum.
///
/// Derived from `sin(fov/2) = radius / distance`. FOV is clamped away from
/// degenerate values so the result stays finite.
pub fn framing_distance(radius: f32, fov_deg: f32) -> f32 {
    let half_fov = (fov_deg.clamp(1.0, 179.0) * 0.5).to_radians();
    radius.max(1e-4) / half_fov.sin()
}
