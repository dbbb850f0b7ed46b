//! Motion kernel shared by every entity
//!
//! All movement is per-tick: a heading projects to a direction vector, a
//! position advances by one of two integration rules, and the wraparound snap
//! keeps coordinates inside the field. The ship and its bullets step
//! retrograde (position minus delta) while asteroids step prograde; the
//! ship's nose is drawn on the retrograde side, so both read as forward
//! motion on screen.

use glam::Vec2;

use crate::polar_to_cartesian;

/// Unit direction vector for a heading
#[inline]
pub fn heading_vector(heading: f32) -> Vec2 {
    polar_to_cartesian(1.0, heading)
}

/// Integration rule for the ship and bullets: position minus delta
#[inline]
pub fn step_retrograde(pos: Vec2, delta: Vec2) -> Vec2 {
    pos - delta
}

/// Integration rule for asteroids: position plus delta
#[inline]
pub fn step_prograde(pos: Vec2, delta: Vec2) -> Vec2 {
    pos + delta
}

/// Snap one axis coordinate back into [radius, extent]
///
/// Leaving past the near edge reappears at the far extent and vice versa.
/// Both checks are exclusive, so a coordinate sitting exactly on either
/// bound stays put.
#[inline]
pub fn wrap_axis(value: f32, radius: f32, extent: f32) -> f32 {
    if value < radius {
        extent
    } else if value > extent {
        radius
    } else {
        value
    }
}

/// Apply the wraparound snap on both axes independently
pub fn wrap_position(pos: Vec2, radius: f32, bounds: Vec2) -> Vec2 {
    Vec2::new(
        wrap_axis(pos.x, radius, bounds.x),
        wrap_axis(pos.y, radius, bounds.y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wrap_axis_below_radius_snaps_to_extent() {
        assert_eq!(wrap_axis(2.0, 15.0, 1400.0), 1400.0);
        assert_eq!(wrap_axis(-300.0, 15.0, 1400.0), 1400.0);
    }

    #[test]
    fn test_wrap_axis_past_extent_snaps_to_radius() {
        assert_eq!(wrap_axis(1400.5, 15.0, 1400.0), 15.0);
        assert_eq!(wrap_axis(9000.0, 15.0, 1400.0), 15.0);
    }

    #[test]
    fn test_wrap_axis_in_range_unchanged() {
        assert_eq!(wrap_axis(700.0, 15.0, 1400.0), 700.0);
        // the bounds themselves count as in range
        assert_eq!(wrap_axis(15.0, 15.0, 1400.0), 15.0);
        assert_eq!(wrap_axis(1400.0, 15.0, 1400.0), 1400.0);
    }

    #[test]
    fn test_wrap_position_axes_independent() {
        let bounds = Vec2::new(1400.0, 800.0);
        let wrapped = wrap_position(Vec2::new(3.0, 900.0), 15.0, bounds);
        assert_eq!(wrapped, Vec2::new(1400.0, 15.0));
    }

    #[test]
    fn test_retrograde_opposes_prograde() {
        let pos = Vec2::new(100.0, 200.0);
        let delta = Vec2::new(3.0, -4.0);
        assert_eq!(step_retrograde(pos, delta), Vec2::new(97.0, 204.0));
        assert_eq!(step_prograde(pos, delta), Vec2::new(103.0, 196.0));
    }

    #[test]
    fn test_heading_vector_cardinals() {
        use std::f32::consts::FRAC_PI_2;

        let east = heading_vector(0.0);
        assert!((east.x - 1.0).abs() < 1e-6);
        assert!(east.y.abs() < 1e-6);

        // y grows downward on the field, so +pi/2 points down-screen
        let down = heading_vector(FRAC_PI_2);
        assert!(down.x.abs() < 1e-6);
        assert!((down.y - 1.0).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_wrap_axis_lands_in_range(
            value in -5000.0f32..5000.0,
            radius in 1.0f32..60.0,
        ) {
            let extent = 800.0;
            let wrapped = wrap_axis(value, radius, extent);
            prop_assert!(wrapped >= radius);
            prop_assert!(wrapped <= extent);
        }
    }
}
