use super::builder::{INDICES_PER_FACE, VERTICES_PER_FACE};
use super::face::Face;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: glam::Vec3,
    pub normal: glam::Vec3,
}

impl Vertex {
    pub const fn new(position: glam::Vec3, normal: glam::Vec3) -> Self {
        Self { position, normal }
    }
}

/// Output of [`crate::builder::CubeMeshBuilder::build`].
///
/// The three buffers are parallel in the way a mesh consumer expects them:
/// `triangles` indexes into `positions`, and `normals` is either empty or
/// holds one entry per position.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeMesh {
    pub name: String,
    pub positions: Vec<glam::Vec3>,
    pub triangles: Vec<u16>,
    pub normals: Vec<glam::Vec3>,
}

impl CubeMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }

    pub fn face_positions(&self, face: Face) -> &[glam::Vec3] {
        let start = face.order() * VERTICES_PER_FACE;
        &self.positions[start..start + VERTICES_PER_FACE]
    }

    /// Empty when the mesh was built without normals.
    pub fn face_normals(&self, face: Face) -> &[glam::Vec3] {
        if !self.has_normals() {
            return &[];
        }
        let start = face.order() * VERTICES_PER_FACE;
        &self.normals[start..start + VERTICES_PER_FACE]
    }

    pub fn face_triangles(&self, face: Face) -> &[u16] {
        let start = face.order() * INDICES_PER_FACE;
        &self.triangles[start..start + INDICES_PER_FACE]
    }

    /// Interleaves positions and normals. Missing normals are zeroed.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .enumerate()
            .map(|(i, &position)| {
                let normal = self.normals.get(i).copied().unwrap_or(glam::Vec3::ZERO);
                Vertex::new(position, normal)
            })
            .collect()
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let vertex_count = self.positions.len();
        anyhow::ensure!(
            vertex_count % VERTICES_PER_FACE == 0,
            "mesh '{}': vertex count {} is not a whole number of faces",
            self.name,
            vertex_count
        );
        anyhow::ensure!(
            self.triangles.len() % 3 == 0,
            "mesh '{}': index count {} is not a whole number of triangles",
            self.name,
            self.triangles.len()
        );
        if let Some((at, index)) = self
            .triangles
            .iter()
            .enumerate()
            .find(|&(_, &index)| index as usize >= vertex_count)
        {
            anyhow::bail!(
                "mesh '{}': index {} at offset {} is out of range for {} vertices",
                self.name,
                index,
                at,
                vertex_count
            );
        }
        anyhow::ensure!(
            self.normals.is_empty() || self.normals.len() == vertex_count,
            "mesh '{}': {} normals for {} vertices",
            self.name,
            self.normals.len(),
            vertex_count
        );
        Ok(())
    }
}
