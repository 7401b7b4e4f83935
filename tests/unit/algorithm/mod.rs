pub mod features;
pub mod sampling;
