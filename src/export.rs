use anyhow::Context;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::mesh::CubeMesh;

/// Writes the mesh as Wavefront OBJ. Indices in `f` lines are 1-based.
pub fn write_obj<W: Write>(mesh: &CubeMesh, mut out: W) -> anyhow::Result<()> {
    mesh.validate()?;
    writeln!(out, "# Exported by cube-mesh")?;
    writeln!(out, "o {}", mesh.name)?;
    for p in &mesh.positions {
        writeln!(out, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for n in &mesh.normals {
        writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
    }
    for tri in mesh.triangles.chunks_exact(3) {
        write!(out, "f")?;
        for &index in tri {
            let index = index as usize + 1;
            if mesh.has_normals() {
                write!(out, " {index}//{index}")?;
            } else {
                write!(out, " {index}")?;
            }
        }
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

pub fn save_obj(mesh: &CubeMesh, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_obj(mesh, BufWriter::new(file))
        .with_context(|| format!("writing mesh '{}' to {}", mesh.name, path.display()))?;
    log::debug!("Saved mesh '{}' to {}", mesh.name, path.display());
    Ok(())
}
