//! UI Components

pub mod header;
pub mod particles;

pub use header::Header;
pub use particles::ParticleField;
