use log::*;

use crate::raycasting::*;

/// A ray-rectangle intersection test using the slab test, with a modification that also computes the normal.
///
/// Returns `None` on a miss.  Unless `options.infinite` is set, a rectangle which lies entirely behind the ray's origin
/// is also a miss; a rectangle the origin is inside of is a hit with a negative `time_near`.
pub fn ray_rectangle_test(
    ray: &Ray,
    rectangle: &Rectangle,
    options: RaycastOptions,
) -> Option<Contact> {
    let size = rectangle.get_size();
    let mut position = rectangle.get_position();
    let mut origin = ray.origin;

    // Rectangles built from tile coordinates can sit at negative positions relative to a moving origin, and the slab
    // math loses precision near the axes.  Shift the rectangle and the origin together so the rectangle lands in the
    // positive quadrant.  The t values don't change; the contact point is computed from the unshifted origin.
    if position.x < 0.0 || position.y < 0.0 {
        let offset = size - origin;
        trace!(
            "Shifting out of bounds rectangle {:?} and ray {:?} by {}",
            rectangle,
            ray,
            offset
        );
        position += offset;
        origin += offset;
    }

    // If the ray aligns with one of the axis, one of these is an infinity.  That's fine: the slab bounds on that axis
    // become infinities of the right sign, unless the origin is exactly on one of the lines, which gives `0 * inf`.
    let inverse_direction = Vector::one().component_div(&ray.direction);

    // Entry and exit t values for the pair of lines on each axis.  Not sorted yet: if the ray comes from the right,
    // `near.x` is the exit.
    let mut near = (position - origin).component_mul(&inverse_direction);
    let mut far = (position + size - origin).component_mul(&inverse_direction);

    // The ray runs along one of the rectangle's edges.  Call it a miss.
    if near.is_nan() || far.is_nan() {
        trace!("Ray {:?} runs along an edge of {:?}", ray, rectangle);
        return None;
    }

    if near.x > far.x {
        std::mem::swap(&mut near.x, &mut far.x);
    }
    if near.y > far.y {
        std::mem::swap(&mut near.y, &mut far.y);
    }

    // The intervals on the two axes don't overlap, so there's no `t` inside both pairs of lines at once.
    if near.x > far.y || near.y > far.x {
        return None;
    }

    // The ray is inside the rectangle once it's inside both slabs, and leaves when it leaves either.
    let time_near = near.x.max(near.y);
    let time_far = far.x.min(far.y);

    if !options.infinite && time_far < 0.0 {
        return None;
    }

    let point = ray.evaluate(time_near);

    // Whichever axis we entered last is the face we hit.  The normal points back along the ray.  When both axes are
    // entered at the same time the ray went through a corner and no one face is right, so the normal is left at zero
    // for the collision resolver to deal with.
    let normal = if near.x > near.y {
        if inverse_direction.x < 0.0 {
            Vector::new(1.0, 0.0)
        } else {
            Vector::new(-1.0, 0.0)
        }
    } else if near.x < near.y {
        if inverse_direction.y < 0.0 {
            Vector::new(0.0, 1.0)
        } else {
            Vector::new(0.0, -1.0)
        }
    } else {
        Vector::zero()
    };

    Some(Contact {
        point,
        normal,
        time_near,
        time_far,
    })
}

impl Ray {
    /// Cast this ray against a rectangle, returning everything known about the hit.
    pub fn intersects_rectangle(
        &self,
        rectangle: &Rectangle,
        options: RaycastOptions,
    ) -> Option<Contact> {
        ray_rectangle_test(self, rectangle, options)
    }

    /// When does this ray enter the rectangle?  Rectangles behind the ray are a miss.
    pub fn intersect_time(&self, rectangle: &Rectangle) -> Option<f32> {
        ray_rectangle_test(self, rectangle, RaycastOptions::FINITE).map(|c| c.time_near)
    }

    /// Where, and on which face, does the line of this ray enter the rectangle?  Returns `(point, normal)`.
    ///
    /// This treats the ray as infinite.
    pub fn intersect_point_normal(&self, rectangle: &Rectangle) -> Option<(Vector, Vector)> {
        ray_rectangle_test(self, rectangle, RaycastOptions::INFINITE).map(|c| (c.point, c.normal))
    }

    /// Does the line of this ray cross the rectangle at all?
    pub fn intersects(&self, rectangle: &Rectangle) -> bool {
        ray_rectangle_test(self, rectangle, RaycastOptions::INFINITE).is_some()
    }
}
