//! Intersect a circle with an unbounded line.
//!
//! The line through `(x1, y1)` and `(x2, y2)` is parameterized as `p(t) = (x1 + b * t, y1 + a * t)` with `a = y2 - y1`
//! and `b = x2 - x1`, so `p(0)` is the first point and `p(1)` the second.  Substituting `p(t)` into the circle's
//! equation gives a quadratic in `t`, whose roots are where the line crosses the circle.
use crate::*;

/// Which denominator to use when solving for the roots.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum LineRootFormula {
    /// The quadratic formula: `(-B +- sqrt(D)) / 2A`.
    #[default]
    Standard,

    /// Legacy behavior, kept for callers that need identical output to older builds of the visibility code: the linear
    /// coefficient is half of the true `B`, and roots are divided by `2B` instead of `2A`.  This does not in general
    /// find the points where the line crosses the circle and misses many lines which do cross it.
    LegacyDivideByB,
}

/// Where a line meets a circle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineIntersection {
    /// The crossing at the larger root, or the line's second point if that point is inside the circle.
    pub u: Vector,
    /// The crossing at the smaller root, or the line's first point if that point is inside the circle.
    pub v: Vector,
}

impl LineIntersection {
    /// Both points zeroed, which is what callers get when the line misses.
    pub const NONE: LineIntersection = LineIntersection {
        u: Vector::new(0.0, 0.0),
        v: Vector::new(0.0, 0.0),
    };
}

/// `|p - center|^2 - r^2`: negative iff `p` is strictly inside the circle.
fn power_of_point(circle: &Circle, p: &Vector) -> f32 {
    p.distance_squared(circle.get_center()) - circle.get_radius().powi(2)
}

/// Coefficients `(A, B, C)` of `A t^2 + B t + C = 0`.
fn quadratic(circle: &Circle, line: &Line) -> (f32, f32, f32) {
    let dir = line.p2 - line.p1;
    let rel = line.p1 - *circle.get_center();
    (
        dir.length_squared(),
        2.0 * dir.dot(&rel),
        power_of_point(circle, &line.p1),
    )
}

/// Intersect a circle with the unbounded line through two points.
///
/// Returns `None` unless the discriminant is strictly positive: a line tangent to the circle is treated as a miss.
///
/// Each reported point is replaced by its endpoint of the line when that endpoint is strictly inside the circle, so
/// callers treating the line as a segment get points on the segment when one end is enclosed.
pub fn circle_line_test(
    circle: &Circle,
    line: &Line,
    formula: LineRootFormula,
) -> Option<LineIntersection> {
    let (a, b, c) = quadratic(circle, line);

    let (b, denominator) = match formula {
        LineRootFormula::Standard => (b, 2.0 * a),
        LineRootFormula::LegacyDivideByB => {
            let half_b = b / 2.0;
            (half_b, 2.0 * half_b)
        }
    };

    // Coefficients which overflowed give a NaN discriminant.
    let discriminant = b * b - 4.0 * a * c;
    if discriminant.is_nan() || discriminant <= 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let t_far = (-b + root) / denominator;
    let t_near = (-b - root) / denominator;

    let v = if c < 0.0 {
        line.p1
    } else {
        line.evaluate(t_near)
    };
    let u = if power_of_point(circle, &line.p2) < 0.0 {
        line.p2
    } else {
        line.evaluate(t_far)
    };

    // The legacy formula divides by zero when `B` is, and huge lines can overflow `evaluate`.
    if !u.is_finite() || !v.is_finite() {
        return None;
    }

    Some(LineIntersection { u, v })
}

impl Circle {
    pub fn intersects_line(&self, line: &Line) -> Option<LineIntersection> {
        circle_line_test(self, line, LineRootFormula::Standard)
    }

    /// The same as [Circle::intersects_line], for a line given by raw coordinates.  Returns `None` if the two points
    /// are the same.
    pub fn intersects_line_xy(
        &self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    ) -> Option<LineIntersection> {
        let line = Line::from_xy(x1, y1, x2, y2).ok()?;
        self.intersects_line(&line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn roots(circle: &Circle, line: &Line) -> (f32, f32) {
        let (a, b, c) = quadratic(circle, line);
        let root = (b * b - 4.0 * a * c).sqrt();
        ((-b - root) / (2.0 * a), (-b + root) / (2.0 * a))
    }

    #[test]
    fn through_center() -> crate::Result<()> {
        let circle = Circle::from_xy(0.0, 0.0, 5.0)?;
        let line = Line::from_xy(-10.0, 0.0, 10.0, 0.0)?;
        let hit = circle.intersects_line(&line).expect("Should hit");
        assert_eq!(
            hit,
            LineIntersection {
                u: Vector::new(5.0, 0.0),
                v: Vector::new(-5.0, 0.0),
            }
        );
        Ok(())
    }

    #[test]
    fn line_extends_past_points() -> crate::Result<()> {
        // Both points lie on the same side of the circle; the line still crosses it.
        let circle = Circle::from_xy(0.0, 0.0, 5.0)?;
        let hit = circle
            .intersects_line_xy(10.0, 3.0, 20.0, 3.0)
            .expect("Should hit");
        assert_relative_eq!(hit.v.x, -4.0, epsilon = 1e-4);
        assert_relative_eq!(hit.v.y, 3.0, epsilon = 1e-4);
        assert_relative_eq!(hit.u.x, 4.0, epsilon = 1e-4);
        assert_relative_eq!(hit.u.y, 3.0, epsilon = 1e-4);
        Ok(())
    }

    #[test]
    fn tangent_is_a_miss() -> crate::Result<()> {
        let circle = Circle::from_xy(0.0, 0.0, 5.0)?;
        assert_eq!(circle.intersects_line_xy(-10.0, 5.0, 10.0, 5.0), None);
        assert_eq!(circle.intersects_line_xy(-10.0, 6.0, 10.0, 6.0), None);
        assert_eq!(
            circle
                .intersects_line_xy(-10.0, 6.0, 10.0, 6.0)
                .unwrap_or(LineIntersection::NONE),
            LineIntersection::NONE
        );
        Ok(())
    }

    #[test]
    fn endpoints_inside_are_clamped() -> crate::Result<()> {
        let circle = Circle::from_xy(0.0, 0.0, 5.0)?;

        let hit = circle
            .intersects_line_xy(-1.0, 0.0, 10.0, 0.0)
            .expect("Should hit");
        assert_eq!(hit.v, Vector::new(-1.0, 0.0));
        assert_relative_eq!(hit.u.x, 5.0, epsilon = 1e-4);

        let hit = circle
            .intersects_line_xy(-1.0, 0.0, 2.0, 0.0)
            .expect("Should hit");
        assert_eq!(
            hit,
            LineIntersection {
                u: Vector::new(2.0, 0.0),
                v: Vector::new(-1.0, 0.0),
            }
        );
        Ok(())
    }

    #[test]
    fn degenerate_line_misses() -> crate::Result<()> {
        let circle = Circle::from_xy(0.0, 0.0, 5.0)?;
        assert_eq!(circle.intersects_line_xy(1.0, 1.0, 1.0, 1.0), None);
        Ok(())
    }

    #[test]
    fn overflowing_line_misses() -> crate::Result<()> {
        let circle = Circle::from_xy(0.0, 0.0, 1.0)?;
        // The coefficients overflow to infinity, making the discriminant NaN.
        let line = Line::from_xy(-1e20, 0.0, 1e20, 0.0)?;
        for formula in [LineRootFormula::Standard, LineRootFormula::LegacyDivideByB] {
            let got = circle_line_test(&circle, &line, formula);
            assert_eq!(got, None, "{:?}", formula);
        }
        assert_eq!(circle.intersects_line_xy(-1e20, 0.0, 1e20, 0.0), None);
        Ok(())
    }

    #[test]
    fn legacy_formula_differs() -> crate::Result<()> {
        let circle = Circle::from_xy(0.0, 0.0, 5.0)?;
        let line = Line::from_xy(-10.0, 0.0, 10.0, 0.0)?;
        assert!(circle_line_test(&circle, &line, LineRootFormula::Standard).is_some());
        // With half of B the discriminant goes negative here.
        assert_eq!(
            circle_line_test(&circle, &line, LineRootFormula::LegacyDivideByB),
            None
        );

        // When both points are inside, legacy output is just the two points.
        let line = Line::from_xy(0.0, 0.0, 1.0, 0.0)?;
        assert_eq!(
            circle_line_test(&circle, &line, LineRootFormula::LegacyDivideByB),
            Some(LineIntersection {
                u: Vector::new(1.0, 0.0),
                v: Vector::new(0.0, 0.0),
            })
        );
        Ok(())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100000))]

        // Lines through a point strictly inside the circle always cross it twice, at points on the circle which
        // satisfy the quadratic.
        #[test]
        fn fuzz_crossing(
            cx in -100.0..100.0f32,
            cy in -100.0..100.0f32,
            radius in 1.0..50.0f32,
            inner_percent in 0.0..0.9f32,
            inner_angle in 0.0..100.0f32,
            line_angle in 0.0..100.0f32,
            // Both points outside the circle, so there's no clamping.
            near_dist in 1.1..5.0f32,
            far_dist in 1.1..5.0f32,
        ) {
            let circle = Circle::from_xy(cx, cy, radius).expect("Should succeed");
            let inner = Vector::new(
                cx + inner_angle.cos() * radius * inner_percent,
                cy + inner_angle.sin() * radius * inner_percent,
            );
            let dir = Vector::new(line_angle.cos(), line_angle.sin());
            let p1 = inner - dir * (radius * 2.0 * near_dist);
            let p2 = inner + dir * (radius * 2.0 * far_dist);
            let line = Line::new(p1, p2).expect("Should succeed");

            let hit = circle.intersects_line(&line);
            prop_assert!(hit.is_some(), "{:?} {:?}", circle, line);
            let hit = hit.unwrap();

            let (a, b, c) = quadratic(&circle, &line);
            let (t_near, t_far) = roots(&circle, &line);
            for t in [t_near, t_far] {
                // Relative to the size of the terms, the residual should be tiny.
                let residual = a * t * t + b * t + c;
                let scale = (a * t * t).abs() + (b * t).abs() + c.abs();
                prop_assert!(residual.abs() <= scale * 1e-3, "t={} residual={}", t, residual);
            }

            for p in [hit.u, hit.v] {
                let d = p.distance(circle.get_center());
                prop_assert!((d - radius).abs() < 0.01 * radius, "{} is {} from center", p, d);
            }
            // `u` comes from the larger root, so it's the crossing nearer p2.
            prop_assert!(hit.u.distance(&p2) < hit.v.distance(&p2));
        }
    }
}
