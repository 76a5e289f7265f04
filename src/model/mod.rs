//! Pure data structures (DTOs) implementing the [`Entity`](crate::framework::Entity) trait.

pub mod architecture;
pub mod gpu;

pub use architecture::*;
pub use gpu::*;
