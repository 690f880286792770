//! Rectangular footprint helpers for downstream visualization.
//!
//! A rectangular estimate maps to an origin-centered `length × breadth`
//! rectangle on the floor plane; each edge yields a wall placement
//! (midpoint, yaw, span) ready for a renderer to position wall panels.

use serde::{Deserialize, Serialize};

/// Origin-centered rectangular floor footprint, in meters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RectFootprint {
    pub length: f64,
    pub breadth: f64,
}

/// Placement of one wall panel along a footprint edge.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WallPlacement {
    /// Edge midpoint on the floor plane, `[x, z]`.
    pub center: [f64; 2],
    /// Yaw of the edge direction, `atan2(dx, dz)` radians.
    pub yaw: f64,
    /// Edge length.
    pub span: f64,
}

impl RectFootprint {
    /// The four footprint vertices, counter-clockwise from the
    /// bottom-left, `[x, z]` each.
    pub fn vertices(&self) -> [[f64; 2]; 4] {
        let hl = self.length / 2.0;
        let hb = self.breadth / 2.0;
        [[-hl, -hb], [hl, -hb], [hl, hb], [-hl, hb]]
    }

    /// One placement per footprint edge, wrapping back to the first
    /// vertex.
    pub fn wall_placements(&self) -> Vec<WallPlacement> {
        let verts = self.vertices();
        (0..verts.len())
            .map(|i| {
                let p1 = verts[i];
                let p2 = verts[(i + 1) % verts.len()];
                let dx = p2[0] - p1[0];
                let dz = p2[1] - p1[1];
                WallPlacement {
                    center: [(p1[0] + p2[0]) / 2.0, (p1[1] + p2[1]) / 2.0],
                    yaw: dx.atan2(dz),
                    span: (dx * dx + dz * dz).sqrt(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn vertices_center_on_the_origin() {
        let fp = RectFootprint {
            length: 4.0,
            breadth: 3.0,
        };
        assert_eq!(
            fp.vertices(),
            [[-2.0, -1.5], [2.0, -1.5], [2.0, 1.5], [-2.0, 1.5]]
        );
    }

    #[test]
    fn placements_cover_all_four_edges() {
        let fp = RectFootprint {
            length: 4.0,
            breadth: 3.0,
        };
        let walls = fp.wall_placements();
        assert_eq!(walls.len(), 4);

        // First edge runs along +x at z = -breadth/2.
        assert_relative_eq!(walls[0].center[0], 0.0);
        assert_relative_eq!(walls[0].center[1], -1.5);
        assert_relative_eq!(walls[0].span, 4.0);
        assert_relative_eq!(walls[0].yaw, FRAC_PI_2);

        // Opposite edges have matching spans.
        assert_relative_eq!(walls[0].span, walls[2].span);
        assert_relative_eq!(walls[1].span, walls[3].span);
    }
}
