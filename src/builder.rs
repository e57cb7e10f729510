use super::face::{Face, FaceQuad};
use super::mesh::CubeMesh;

pub const DEFAULT_MESH_NAME: &str = "NewMesh";

pub const VERTICES_PER_FACE: usize = 4;
pub const INDICES_PER_FACE: usize = 6;

pub struct CubeMeshBuilder {
    pub name: String,
    pub with_normals: bool,
}

impl Default for CubeMeshBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeMeshBuilder {
    pub fn new() -> Self {
        Self {
            name: DEFAULT_MESH_NAME.to_string(),
            with_normals: true,
        }
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    pub fn with_normals(self, with_normals: bool) -> Self {
        Self {
            with_normals,
            ..self
        }
    }

    /// Assembles the six faces in [`Face::ALL`] order.
    pub fn build(&self) -> CubeMesh {
        let face_count = Face::ALL.len();
        let mut positions = Vec::with_capacity(face_count * VERTICES_PER_FACE);
        let mut triangles = Vec::with_capacity(face_count * INDICES_PER_FACE);
        let mut normals = if self.with_normals {
            Vec::with_capacity(face_count * VERTICES_PER_FACE)
        } else {
            Vec::new()
        };

        for (order, face) in Face::ALL.into_iter().enumerate() {
            let FaceQuad {
                corners,
                indices,
                normal,
                ..
            } = face.quad();
            positions.extend_from_slice(&corners);
            triangles.extend_from_slice(&globalize(order, indices));
            if self.with_normals {
                normals.extend_from_slice(&[normal; VERTICES_PER_FACE]);
            }
        }

        log::debug!(
            "Built mesh '{}': {} vertices, {} indices, normals: {}",
            self.name,
            positions.len(),
            triangles.len(),
            self.with_normals
        );

        CubeMesh {
            name: self.name.clone(),
            positions,
            triangles,
            normals,
        }
    }
}

/// Offsets a face's local indices past the blocks of the faces before it.
pub fn globalize(order: usize, local: [u16; INDICES_PER_FACE]) -> [u16; INDICES_PER_FACE] {
    let offset = (order * VERTICES_PER_FACE) as u16;
    local.map(|i| i + offset)
}

/// The default cube: named `NewMesh`, with normals.
pub fn cube() -> CubeMesh {
    CubeMeshBuilder::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn globalize_offsets_by_face_order() {
        assert_eq!(globalize(0, [0, 1, 2, 0, 2, 3]), [0, 1, 2, 0, 2, 3]);
        assert_eq!(globalize(1, [0, 3, 2, 0, 2, 1]), [4, 7, 6, 4, 6, 5]);
        assert_eq!(globalize(4, [0, 1, 3, 1, 2, 3]), [16, 17, 19, 17, 18, 19]);
        assert_eq!(globalize(5, [0, 3, 2, 0, 2, 1]), [20, 23, 22, 20, 22, 21]);
    }

    #[test]
    fn builder_defaults() {
        let builder = CubeMeshBuilder::default();
        assert_eq!(builder.name, DEFAULT_MESH_NAME);
        assert!(builder.with_normals);
    }

    #[test]
    fn without_normals_leaves_normals_empty() {
        let mesh = CubeMeshBuilder::new().with_normals(false).build();
        assert!(mesh.normals.is_empty());
        assert_eq!(mesh.positions.len(), 24);
        assert_eq!(mesh.triangles.len(), 36);
    }

    #[test]
    fn normals_flag_does_not_change_geometry() {
        let with = CubeMeshBuilder::new().build();
        let without = CubeMeshBuilder::new().with_normals(false).build();
        assert_eq!(with.positions, without.positions);
        assert_eq!(with.triangles, without.triangles);
    }

    #[test]
    fn name_is_carried_through() {
        let mesh = CubeMeshBuilder::new().with_name("Crate").build();
        assert_eq!(mesh.name, "Crate");
        assert_eq!(cube().name, DEFAULT_MESH_NAME);
    }

    #[test]
    fn last_face_block_is_above() {
        let mesh = cube();
        assert_eq!(&mesh.triangles[30..], &[20, 23, 22, 20, 22, 21]);
        assert_eq!(&mesh.positions[20..], &Face::Above.corners());
    }
}
