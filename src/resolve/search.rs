//! Magnitude-decaying bisection along a single heading
//!
//! This is a bisection over the 1D parameter "distance along heading",
//! starting from a known-free point. Each iteration steps forward or
//! backward depending on whether the previous probe was free, halving the
//! step each time, so the walk doubles as both an advance and a
//! correction search.

use glam::Vec2;

use super::capability::{CollisionCheck, Motion};
use crate::Entity;

/// Fixed bisection budget, no early termination. The step schedule bottoms
/// out at `initial_speed / 2^16`, fine enough for tile-scale worlds.
pub const SEARCH_ITERATIONS: u32 = 16;

/// Step state for one bisection iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Back,
    Forward,
}

/// Find the farthest free position reachable from `start` along
/// `direction` with at most `initial_speed` of travel.
///
/// `start` must be free. The probe walk may pass through colliding
/// positions, but the returned position never is: `last_free` is seeded
/// from `start` and only ever updated from probes the checker cleared.
///
/// The first probe steps the full `initial_speed` unconditionally and the
/// in-loop step state starts at `Back`; later steps go forward exactly
/// when the previous probe was free. This asymmetry decides where the
/// bisection lands, so keep it.
///
/// Zero `initial_speed` makes every probe a no-op and returns `start`.
pub(crate) fn search_free_position<C, M>(
    checker: &C,
    motion: &M,
    entity: &Entity,
    start: Vec2,
    initial_speed: f32,
    direction: f32,
) -> Vec2
where
    C: CollisionCheck,
    M: Motion,
{
    let mut speed = initial_speed;
    let mut step = Step::Back;
    let mut last_free = start;

    let mut pos = motion.shift_from(start, initial_speed, direction);

    for _ in 0..SEARCH_ITERATIONS {
        pos = match step {
            Step::Forward => motion.shift_from(pos, speed, direction),
            Step::Back => motion.shift_from(pos, -speed, direction),
        };

        let colliding = checker.collides_at(entity, pos);
        if !colliding {
            last_free = pos;
        }

        speed /= 2.0;
        step = if colliding { Step::Back } else { Step::Forward };
    }

    last_free
}

/// Pick the candidate strictly farther from `free`; ties go to `y_first`.
pub(crate) fn farther_candidate(free: Vec2, x_first: Vec2, y_first: Vec2) -> Vec2 {
    if free.distance(x_first) > free.distance(y_first) {
        x_first
    } else {
        y_first
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::{StraightMotion, X_AXIS};

    fn entity_at(pos: Vec2) -> Entity {
        Entity::new(pos, X_AXIS, 1.0, 0.0)
    }

    fn wall_beyond(x: f32) -> impl Fn(&Entity, Vec2) -> bool {
        move |_: &Entity, p: Vec2| p.x > x
    }

    #[test]
    fn open_space_advances_full_speed() {
        let checker = |_: &Entity, _: Vec2| false;
        let start = Vec2::ZERO;

        let result = search_free_position(
            &checker,
            &StraightMotion,
            &entity_at(start),
            start,
            1.0,
            X_AXIS,
        );

        // Nothing collides, so the walk nets out at the full first step
        // minus the final unfinished half-step
        assert!((result.x - 1.0).abs() < 1e-4);
    }

    #[test]
    fn zero_speed_stays_put() {
        let checker = wall_beyond(0.5);
        let start = Vec2::new(0.25, 0.0);

        let result = search_free_position(
            &checker,
            &StraightMotion,
            &entity_at(start),
            start,
            0.0,
            X_AXIS,
        );

        assert_eq!(result, start);
    }

    #[test]
    fn fully_blocked_returns_start() {
        // Everything past the starting point collides
        let checker = wall_beyond(1e-6);
        let start = Vec2::ZERO;

        let result = search_free_position(
            &checker,
            &StraightMotion,
            &entity_at(start),
            start,
            1.0,
            X_AXIS,
        );

        assert!(start.distance(result) < 1e-6);
    }

    #[test]
    fn converges_within_step_resolution() {
        // Boundary at an awkward non-dyadic coordinate
        let wall = 0.37f32;
        let checker = wall_beyond(wall);
        let start = Vec2::ZERO;

        let result = search_free_position(
            &checker,
            &StraightMotion,
            &entity_at(start),
            start,
            1.0,
            X_AXIS,
        );

        assert!(!checker(&entity_at(start), result));
        assert!(
            (result.x - wall).abs() <= 1.0 / 65536.0,
            "landed at {} for boundary {}",
            result.x,
            wall
        );
    }

    #[test]
    fn result_is_never_colliding() {
        // Free pocket is a narrow band; probes overshoot it constantly
        let checker = |_: &Entity, p: Vec2| !(p.x > -0.01 && p.x < 0.2);
        let start = Vec2::ZERO;

        let result = search_free_position(
            &checker,
            &StraightMotion,
            &entity_at(start),
            start,
            3.0,
            X_AXIS,
        );

        assert!(!checker(&entity_at(start), result));
    }

    #[test]
    fn farther_candidate_prefers_strictly_greater() {
        let free = Vec2::ZERO;
        let picked = farther_candidate(free, Vec2::new(1.5, 0.0), Vec2::new(0.0, 1.0));
        assert_eq!(picked, Vec2::new(1.5, 0.0));
    }

    #[test]
    fn farther_candidate_tie_goes_to_y_first() {
        // Both candidates exactly 1.0 away from the free position
        let free = Vec2::ZERO;
        let picked = farther_candidate(free, Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0));
        assert_eq!(picked, Vec2::new(0.0, 1.0));
    }
}
