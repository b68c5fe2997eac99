//! Circle tessellation
//!
//! Turns registry state into the flat clip-space point sequence the
//! renderer uploads: exactly `points_per_ring` points per circle,
//! contiguous per circle in registry order. The pipeline maps vertex
//! ranges back to circles through that contract.

use glam::Vec2;
use std::f32::consts::TAU;

use crate::sim::{Circle, SimConfig};
use crate::to_clip_space;

/// Tessellate every circle into `points_per_ring` evenly spaced clip-space
/// points around its current radius.
pub fn build_vertex_buffer(circles: &[Circle], config: &SimConfig) -> Vec<[f32; 2]> {
    let points = config.points_per_ring as usize;
    let mut vertices = Vec::with_capacity(circles.len() * points);

    for circle in circles {
        for i in 0..points {
            let theta = TAU * i as f32 / points as f32;
            let p = circle.center + circle.radius * Vec2::new(theta.cos(), theta.sin());
            vertices.push(to_clip_space(p, config.width, config.height).to_array());
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle_at(x: f32, y: f32, radius: f32) -> Circle {
        Circle {
            center: Vec2::new(x, y),
            color: [0.5, 0.5, 0.5],
            radius,
            speed: 1.0,
        }
    }

    #[test]
    fn test_output_shape_is_points_per_circle() {
        let config = SimConfig::new(800.0, 600.0);
        let circles = vec![
            circle_at(100.0, 100.0, 10.0),
            circle_at(200.0, 200.0, 20.0),
            circle_at(300.0, 300.0, 30.0),
        ];

        let vertices = build_vertex_buffer(&circles, &config);

        assert_eq!(vertices.len(), 3 * 1000);
        // 2000 coordinate values per circle
        assert_eq!(vertices.iter().flatten().count(), 3 * 2000);
    }

    #[test]
    fn test_empty_registry_tessellates_to_nothing() {
        let config = SimConfig::new(800.0, 600.0);
        assert!(build_vertex_buffer(&[], &config).is_empty());
    }

    #[test]
    fn test_rings_are_contiguous_in_registry_order() {
        let config = SimConfig::new(800.0, 600.0);
        // Zero-radius circles collapse every ring point onto the center,
        // which pins down exactly which range belongs to which circle.
        let circles = vec![circle_at(0.0, 0.0, 0.0), circle_at(800.0, 600.0, 0.0)];

        let vertices = build_vertex_buffer(&circles, &config);

        for p in &vertices[..1000] {
            assert_eq!(*p, [-1.0, 1.0]);
        }
        for p in &vertices[1000..] {
            assert_eq!(*p, [1.0, -1.0]);
        }
    }

    #[test]
    fn test_clip_space_corner_mapping() {
        assert_eq!(
            to_clip_space(Vec2::new(0.0, 0.0), 800.0, 600.0),
            Vec2::new(-1.0, 1.0)
        );
        assert_eq!(
            to_clip_space(Vec2::new(800.0, 600.0), 800.0, 600.0),
            Vec2::new(1.0, -1.0)
        );
        assert_eq!(
            to_clip_space(Vec2::new(400.0, 300.0), 800.0, 600.0),
            Vec2::new(0.0, 0.0)
        );
    }

    #[test]
    fn test_first_ring_point_lies_at_angle_zero() {
        let config = SimConfig::new(800.0, 600.0);
        let circles = vec![circle_at(400.0, 300.0, 100.0)];

        let vertices = build_vertex_buffer(&circles, &config);

        // Angle 0 is center + radius along +x: (500, 300) -> (0.25, 0)
        let first = vertices[0];
        assert!((first[0] - 0.25).abs() < 1e-5);
        assert!(first[1].abs() < 1e-5);
    }
}
