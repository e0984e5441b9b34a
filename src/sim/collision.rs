//! Collision detection and response for axis-aligned boxes
//!
//! Every entity is a box (y grows downward), so all tests reduce to interval
//! overlap. Responses are pure sign flips: speed is never gained or lost.

use glam::Vec2;

use super::store::Transform;

/// Axis along which a bounce reverses velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceAxis {
    X,
    Y,
}

impl BounceAxis {
    /// Reverse the velocity component for this axis
    #[inline]
    pub fn reflect(self, vel: Vec2) -> Vec2 {
        match self {
            BounceAxis::X => Vec2::new(-vel.x, vel.y),
            BounceAxis::Y => Vec2::new(vel.x, -vel.y),
        }
    }
}

/// Strict AABB overlap test. Boxes that only touch do not collide.
pub fn check_collision(a: &Transform, b: &Transform) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

/// Penetration depth on each axis: combined half-extents minus center distance
pub fn overlap(a: &Transform, b: &Transform) -> Vec2 {
    let delta = (a.center() - b.center()).abs();
    a.half_extents() + b.half_extents() - delta
}

/// Axis to reflect on when `ball` overlaps `brick`
///
/// The shallower overlap wins; a tie counts as a top/bottom hit.
pub fn brick_bounce_axis(ball: &Transform, brick: &Transform) -> BounceAxis {
    let o = overlap(ball, brick);
    if o.x < o.y { BounceAxis::X } else { BounceAxis::Y }
}

/// Which walls a ball touched this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    pub side: bool,
    pub ceiling: bool,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.side || self.ceiling
    }
}

/// Bounce a ball off the left, right and top edges of the viewport
///
/// Unlike a plain flip on contact, a component is only reversed while it
/// still points into the wall, so a ball that is still past the edge on the
/// next frame does not flip back. The bottom edge never reflects.
pub fn bounce_off_walls(ball: &Transform, vel: &mut Vec2, viewport: Vec2) -> WallHits {
    let mut hits = WallHits::default();

    if (ball.left() <= 0.0 && vel.x < 0.0) || (ball.right() >= viewport.x && vel.x > 0.0) {
        *vel = BounceAxis::X.reflect(*vel);
        hits.side = true;
    }
    if ball.top() <= 0.0 && vel.y < 0.0 {
        *vel = BounceAxis::Y.reflect(*vel);
        hits.ceiling = true;
    }

    hits
}

/// Flat bounce off the top of the platform
///
/// Fires when the falling ball's bottom has reached the platform's top while
/// the two overlap horizontally (edges inclusive). The ball is snapped to sit
/// on the platform. A rising ball is left alone rather than flipped on every
/// contact.
pub fn bounce_off_platform(ball: &mut Transform, vel: &mut Vec2, platform: &Transform) -> bool {
    let falling = vel.y > 0.0;
    let reached_top = ball.bottom() >= platform.top();
    let over = ball.right() >= platform.left() && ball.left() <= platform.right();

    if falling && reached_top && over {
        ball.position.y = platform.top() - ball.size.y;
        *vel = BounceAxis::Y.reflect(*vel);
        return true;
    }
    false
}

/// Keep the platform horizontally inside the viewport
pub fn clamp_to_viewport_x(transform: &mut Transform, viewport_width: f32) {
    if transform.position.x < 0.0 {
        transform.position.x = 0.0;
    }
    if transform.right() > viewport_width {
        transform.position.x = viewport_width - transform.size.x;
    }
}

/// True once the ball has dropped past the bottom of the viewport
pub fn fell_out(ball: &Transform, viewport: Vec2) -> bool {
    ball.top() > viewport.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn boxed(x: f32, y: f32, w: f32, h: f32) -> Transform {
        Transform::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_small_ball_inside_brick_corner() {
        let ball = boxed(10.0, 10.0, 5.0, 5.0);
        let brick = boxed(12.0, 12.0, 10.0, 10.0);
        assert!(check_collision(&ball, &brick));

        // Equal 3px penetration on both axes: tie goes vertical
        let o = overlap(&ball, &brick);
        assert!((o.x - 3.0).abs() < 1e-5);
        assert!((o.y - 3.0).abs() < 1e-5);
        assert_eq!(brick_bounce_axis(&ball, &brick), BounceAxis::Y);
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(10.0, 0.0, 10.0, 10.0);
        assert!(!check_collision(&a, &b));
    }

    #[test]
    fn test_side_hit_reflects_x() {
        // Ball clips the brick's left edge by 2px but spans most of its height
        let ball = boxed(0.0, 10.0, 10.0, 10.0);
        let brick = boxed(8.0, 8.0, 40.0, 20.0);
        assert_eq!(brick_bounce_axis(&ball, &brick), BounceAxis::X);
    }

    #[test]
    fn test_wall_bounce_left_and_ceiling() {
        let ball = boxed(-1.0, -2.0, 40.0, 40.0);
        let mut vel = Vec2::new(-400.0, -300.0);
        let hits = bounce_off_walls(&ball, &mut vel, Vec2::new(1920.0, 1080.0));
        assert!(hits.side && hits.ceiling);
        assert_eq!(vel, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_wall_bounce_right_edge_inclusive() {
        let ball = boxed(1880.0, 500.0, 40.0, 40.0);
        let mut vel = Vec2::new(400.0, -400.0);
        let hits = bounce_off_walls(&ball, &mut vel, Vec2::new(1920.0, 1080.0));
        assert!(hits.side);
        assert!(!hits.ceiling);
        assert_eq!(vel, Vec2::new(-400.0, -400.0));
    }

    #[test]
    fn test_no_bounce_on_bottom_edge() {
        let ball = boxed(500.0, 1070.0, 40.0, 40.0);
        let mut vel = Vec2::new(100.0, 400.0);
        let hits = bounce_off_walls(&ball, &mut vel, Vec2::new(1920.0, 1080.0));
        assert!(!hits.any());
        assert_eq!(vel, Vec2::new(100.0, 400.0));
    }

    #[test]
    fn test_ball_leaving_wall_is_not_flipped_back() {
        let ball = boxed(-3.0, 500.0, 40.0, 40.0);
        let mut vel = Vec2::new(400.0, 0.0);
        bounce_off_walls(&ball, &mut vel, Vec2::new(1920.0, 1080.0));
        assert_eq!(vel.x, 400.0);
    }

    #[test]
    fn test_platform_bounce_snaps_ball_on_top() {
        let platform = boxed(900.0, 950.0, 150.0, 30.0);
        let mut ball = boxed(950.0, 915.0, 40.0, 40.0);
        let mut vel = Vec2::new(400.0, 400.0);

        assert!(bounce_off_platform(&mut ball, &mut vel, &platform));
        assert_eq!(ball.bottom(), 950.0);
        assert_eq!(vel, Vec2::new(400.0, -400.0));
    }

    #[test]
    fn test_platform_ignores_rising_ball_and_misses() {
        let platform = boxed(900.0, 950.0, 150.0, 30.0);

        let mut rising = boxed(950.0, 915.0, 40.0, 40.0);
        let mut vel = Vec2::new(0.0, -400.0);
        assert!(!bounce_off_platform(&mut rising, &mut vel, &platform));

        let mut beside = boxed(500.0, 915.0, 40.0, 40.0);
        let mut vel = Vec2::new(0.0, 400.0);
        assert!(!bounce_off_platform(&mut beside, &mut vel, &platform));
        assert_eq!(beside.position.y, 915.0);
    }

    #[test]
    fn test_clamp_to_viewport() {
        let mut t = boxed(-20.0, 950.0, 150.0, 30.0);
        clamp_to_viewport_x(&mut t, 1920.0);
        assert_eq!(t.position.x, 0.0);

        t.position.x = 1900.0;
        clamp_to_viewport_x(&mut t, 1920.0);
        assert_eq!(t.position.x, 1770.0);
    }

    #[test]
    fn test_fell_out() {
        let viewport = Vec2::new(1920.0, 1000.0);
        assert!(fell_out(&boxed(10.0, 1050.0, 40.0, 40.0), viewport));
        assert!(!fell_out(&boxed(10.0, 1000.0, 40.0, 40.0), viewport));
    }

    fn arb_box() -> impl Strategy<Value = Transform> {
        (-500.0f32..500.0, -500.0f32..500.0, 0.0f32..200.0, 0.0f32..200.0)
            .prop_map(|(x, y, w, h)| boxed(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_collision_is_symmetric(a in arb_box(), b in arb_box()) {
            prop_assert_eq!(check_collision(&a, &b), check_collision(&b, &a));
        }

        #[test]
        fn prop_overlapping_boxes_have_positive_overlap(a in arb_box(), b in arb_box()) {
            if check_collision(&a, &b) {
                let o = overlap(&a, &b);
                prop_assert!(o.x > -1e-3 && o.y > -1e-3);
            }
        }

        #[test]
        fn prop_wall_bounce_inverts_sign_keeps_magnitude(
            x in -100.0f32..2000.0,
            y in -100.0f32..1000.0,
            vx in -800.0f32..800.0,
            vy in -800.0f32..800.0,
        ) {
            let ball = boxed(x, y, 40.0, 40.0);
            let before = Vec2::new(vx, vy);
            let mut vel = before;
            let hits = bounce_off_walls(&ball, &mut vel, Vec2::new(1920.0, 1080.0));

            if hits.side {
                prop_assert_eq!(vel.x, -before.x);
            } else {
                prop_assert_eq!(vel.x, before.x);
            }
            if hits.ceiling {
                prop_assert_eq!(vel.y, -before.y);
            } else {
                prop_assert_eq!(vel.y, before.y);
            }
            prop_assert_eq!(vel.abs(), before.abs());
        }
    }
}
