//! Scene assembly: converts a world snapshot into a frame's vertex list
//!
//! All geometry is emitted in field coordinates (top-left origin, y down);
//! the shader maps to NDC through [`super::RenderState::game_to_ndc`].

use glam::Vec2;
use std::f32::consts::TAU;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::{BULLET_SIZE, SHIP_RADIUS};
use crate::polar_to_cartesian;
use crate::sim::{Asteroid, Ship, World};

/// Outline stroke width in field pixels
const STROKE_WIDTH: f32 = 2.0;

/// Life icon anchor, offset from the top-right field corner
const LIFE_ICON_MARGIN: f32 = 50.0;
const LIFE_ICON_TOP: f32 = 10.0;
/// Horizontal spacing between icons, walking left
const LIFE_ICON_STEP: f32 = 30.0;
const LIFE_ICON_SIZE: f32 = 9.0;

/// Build the full vertex list for one frame
pub fn world_vertices(world: &World) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    if world.ship.alive {
        vertices.extend(ship_outline(&world.ship));
    }
    for bullet in &world.bullets {
        vertices.extend(shapes::fill_square(bullet.pos, BULLET_SIZE, colors::BULLET));
    }
    for asteroid in &world.asteroids {
        vertices.extend(asteroid_outline(asteroid));
    }
    vertices.extend(life_icons(world));

    vertices
}

/// Ship triangle outline; vertex 0 sits on the nose
fn ship_outline(ship: &Ship) -> Vec<Vertex> {
    let points = polygon_points(ship.pos, SHIP_RADIUS, ship.heading, 3);
    shapes::stroke_polygon(&points, STROKE_WIDTH, colors::SHIP)
}

/// Hexagon outline, rotated by the drift heading so tiers tumble apart visually
fn asteroid_outline(asteroid: &Asteroid) -> Vec<Vertex> {
    let points = polygon_points(asteroid.pos, asteroid.tier.radius(), asteroid.heading, 6);
    shapes::stroke_polygon(&points, STROKE_WIDTH, colors::ASTEROID)
}

/// Regular polygon with vertices on the retrograde side of each spoke angle,
/// matching the nose convention in the motion module
fn polygon_points(center: Vec2, radius: f32, heading: f32, sides: u32) -> Vec<Vec2> {
    let step = TAU / sides as f32;
    (0..sides)
        .map(|i| center - polar_to_cartesian(radius, step * i as f32 + heading))
        .collect()
}

/// One small ship glyph per remaining life, walking left from the top-right corner
fn life_icons(world: &World) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    let mut x = world.config.width - LIFE_ICON_MARGIN;

    for _ in 0..world.lives {
        let points = [
            Vec2::new(x, LIFE_ICON_TOP),
            Vec2::new(x + LIFE_ICON_SIZE, LIFE_ICON_TOP + LIFE_ICON_SIZE),
            Vec2::new(x - LIFE_ICON_SIZE, LIFE_ICON_TOP + LIFE_ICON_SIZE),
        ];
        vertices.extend(shapes::stroke_polygon(
            &points,
            STROKE_WIDTH * 0.75,
            colors::LIFE_ICON,
        ));
        x -= LIFE_ICON_STEP;
    }

    vertices
}
