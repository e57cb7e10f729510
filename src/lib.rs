pub mod builder;
pub mod export;
pub mod face;
#[cfg(feature = "gpu")]
pub mod gpu;
pub mod mesh;

pub use builder::{CubeMeshBuilder, cube};
pub use face::{Face, FaceQuad};
pub use mesh::{CubeMesh, Vertex};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn outputs_can_cross_threads() {
        assert_send_sync::<CubeMeshBuilder>();
        assert_send_sync::<CubeMesh>();
    }

    #[test]
    fn concurrent_builds_agree() {
        let handles: Vec<_> = (0..4).map(|_| std::thread::spawn(cube)).collect();
        let expected = cube();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
