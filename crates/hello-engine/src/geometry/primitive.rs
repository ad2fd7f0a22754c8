use super::{ColorRgba, Vertex};

const HALF: f32 = 250.0;
const FILL: ColorRgba = ColorRgba::GREEN;

/// A single green triangle.
pub const TRIANGLE_VERTICES: [Vertex; 3] = [
    Vertex::new(HALF, -HALF, FILL),
    Vertex::new(-HALF, -HALF, FILL),
    Vertex::new(0.0, HALF, FILL),
];

/// A green square, drawn as two triangles sharing the bottom-right/top-left diagonal.
pub const QUAD_VERTICES: [Vertex; 6] = [
    Vertex::new(HALF, -HALF, FILL),
    Vertex::new(-HALF, -HALF, FILL),
    Vertex::new(-HALF, HALF, FILL),
    Vertex::new(HALF, -HALF, FILL),
    Vertex::new(-HALF, HALF, FILL),
    Vertex::new(HALF, HALF, FILL),
];

/// Which constant shape a sample draws each frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Primitive {
    #[default]
    Triangle,
    Quad,
}

impl Primitive {
    /// Vertex data for one frame, as a triangle list.
    pub const fn vertices(self) -> &'static [Vertex] {
        match self {
            Primitive::Triangle => &TRIANGLE_VERTICES,
            Primitive::Quad => &QUAD_VERTICES,
        }
    }

    #[inline]
    pub const fn vertex_count(self) -> u32 {
        self.vertices().len() as u32
    }

    pub const fn name(self) -> &'static str {
        match self {
            Primitive::Triangle => "triangle",
            Primitive::Quad => "quad",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(p: Primitive) -> Vec<[f32; 2]> {
        p.vertices().iter().map(|v| v.position).collect()
    }

    // Twice the signed area; positive means counter-clockwise.
    fn winding(tri: &[[f32; 2]]) -> f32 {
        let [a, b, c] = [tri[0], tri[1], tri[2]];
        (b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1])
    }

    #[test]
    fn triangle_has_three_fixed_vertices() {
        assert_eq!(Primitive::Triangle.vertex_count(), 3);
        assert_eq!(
            positions(Primitive::Triangle),
            vec![[250.0, -250.0], [-250.0, -250.0], [0.0, 250.0]]
        );
    }

    #[test]
    fn every_vertex_is_opaque_green() {
        for p in [Primitive::Triangle, Primitive::Quad] {
            for v in p.vertices() {
                assert_eq!(v.color, [0.0, 1.0, 0.0, 1.0], "{}", p.name());
            }
        }
    }

    #[test]
    fn quad_is_two_triangles_over_the_corners() {
        let pos = positions(Primitive::Quad);
        assert_eq!(pos.len(), 6);

        for corner in [[250.0, 250.0], [250.0, -250.0], [-250.0, 250.0], [-250.0, -250.0]] {
            assert!(pos.contains(&corner), "missing corner {corner:?}");
        }
        assert!(pos.iter().all(|p| p[0].abs() == 250.0 && p[1].abs() == 250.0));

        // Both halves are non-degenerate and wind the same way.
        let (a, b) = (winding(&pos[..3]), winding(&pos[3..]));
        assert!(a != 0.0 && b != 0.0);
        assert_eq!(a.signum(), b.signum());
        // Together they cover the full 500x500 square.
        assert_eq!((a.abs() + b.abs()) / 2.0, 500.0 * 500.0);
    }

    #[test]
    fn default_is_triangle() {
        assert_eq!(Primitive::default(), Primitive::Triangle);
    }
}
