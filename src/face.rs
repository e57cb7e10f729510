//! The six quads bounding the unit cube.
//!
//! Every face is described on its own: four corners, two triangles over
//! those corners and one outward normal. Nothing here knows where a face
//! lands in the assembled mesh; see [`crate::builder`] for that.

/// Half the edge length of the unit cube.
pub const HALF_EXTENT: f32 = 0.5;

/// Two triangles over a quad traversed in its natural order.
#[rustfmt::skip]
pub const QUAD_INDICES: [u16; 6] = [
    0, 1, 2,
    0, 2, 3,
];

/// Two triangles over a quad whose corners run against its normal.
#[rustfmt::skip]
pub const QUAD_INDICES_FLIPPED: [u16; 6] = [
    0, 3, 2,
    0, 2, 1,
];

/// Split along the other diagonal, used by the bottom face.
#[rustfmt::skip]
pub const QUAD_INDICES_BELOW: [u16; 6] = [
    0, 1, 3,
    1, 2, 3,
];

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Face {
    Back,
    Front,
    Left,
    Right,
    Below,
    Above,
}

impl Face {
    /// Assembly order. A face's position in this array is its face order.
    pub const ALL: [Face; 6] = [
        Face::Back,
        Face::Front,
        Face::Left,
        Face::Right,
        Face::Below,
        Face::Above,
    ];

    pub const fn order(self) -> usize {
        match self {
            Face::Back => 0,
            Face::Front => 1,
            Face::Left => 2,
            Face::Right => 3,
            Face::Below => 4,
            Face::Above => 5,
        }
    }

    pub fn normal(self) -> glam::Vec3 {
        match self {
            Face::Back => glam::Vec3::NEG_Z,
            Face::Front => glam::Vec3::Z,
            Face::Left => glam::Vec3::NEG_X,
            Face::Right => glam::Vec3::X,
            Face::Below => glam::Vec3::NEG_Y,
            Face::Above => glam::Vec3::Y,
        }
    }

    pub fn corners(self) -> [glam::Vec3; 4] {
        let h = HALF_EXTENT;
        match self {
            Face::Back => [
                glam::Vec3::new(-h, h, -h),
                glam::Vec3::new(h, h, -h),
                glam::Vec3::new(h, -h, -h),
                glam::Vec3::new(-h, -h, -h),
            ],
            Face::Front => [
                glam::Vec3::new(-h, h, h),
                glam::Vec3::new(h, h, h),
                glam::Vec3::new(h, -h, h),
                glam::Vec3::new(-h, -h, h),
            ],
            Face::Left => [
                glam::Vec3::new(-h, h, h),
                glam::Vec3::new(-h, h, -h),
                glam::Vec3::new(-h, -h, -h),
                glam::Vec3::new(-h, -h, h),
            ],
            Face::Right => [
                glam::Vec3::new(h, h, h),
                glam::Vec3::new(h, h, -h),
                glam::Vec3::new(h, -h, -h),
                glam::Vec3::new(h, -h, h),
            ],
            Face::Below => [
                glam::Vec3::new(-h, -h, -h),
                glam::Vec3::new(h, -h, -h),
                glam::Vec3::new(h, -h, h),
                glam::Vec3::new(-h, -h, h),
            ],
            Face::Above => [
                glam::Vec3::new(-h, h, -h),
                glam::Vec3::new(h, h, -h),
                glam::Vec3::new(h, h, h),
                glam::Vec3::new(-h, h, h),
            ],
        }
    }

    /// Local triangle indices, each in `0..4`.
    pub fn local_indices(self) -> [u16; 6] {
        match self {
            Face::Back | Face::Left => QUAD_INDICES,
            Face::Front | Face::Right | Face::Above => QUAD_INDICES_FLIPPED,
            Face::Below => QUAD_INDICES_BELOW,
        }
    }

    pub fn quad(self) -> FaceQuad {
        FaceQuad {
            face: self,
            corners: self.corners(),
            indices: self.local_indices(),
            normal: self.normal(),
        }
    }
}

/// One face, ready to be appended to a mesh.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FaceQuad {
    pub face: Face,
    pub corners: [glam::Vec3; 4],
    pub indices: [u16; 6],
    pub normal: glam::Vec3,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_matches_assembly_sequence() {
        for (i, face) in Face::ALL.iter().enumerate() {
            assert_eq!(face.order(), i);
        }
    }

    #[test]
    fn corners_lie_on_face_plane() {
        for face in Face::ALL {
            let n = face.normal();
            for corner in face.corners() {
                assert_eq!(corner.dot(n), HALF_EXTENT, "{face:?} corner {corner}");
            }
        }
    }

    #[test]
    fn local_triangles_face_outward() {
        for face in Face::ALL {
            let quad = face.quad();
            for tri in quad.indices.chunks_exact(3) {
                let p1 = quad.corners[tri[0] as usize];
                let p2 = quad.corners[tri[1] as usize];
                let p3 = quad.corners[tri[2] as usize];
                let facing = (p2 - p1).cross(p3 - p1).dot(quad.normal);
                assert!(facing > 0.0, "{face:?} triangle {tri:?} faces inward");
            }
        }
    }

    #[test]
    fn each_quad_uses_all_four_corners() {
        for face in Face::ALL {
            let mut used = [false; 4];
            for &i in face.local_indices().iter() {
                used[i as usize] = true;
            }
            assert_eq!(used, [true; 4], "{face:?}");
        }
    }
}
