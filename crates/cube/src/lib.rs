pub mod error;
pub mod rotate;
pub mod state;
pub mod topology;

pub use error::RotationError;
pub use state::{CubeState, Direction, Face, FaceGrid, Slice, Target};
