pub mod containment;
pub mod hierarchy;

pub use containment::Pruned;
pub use hierarchy::Hierarchy;
