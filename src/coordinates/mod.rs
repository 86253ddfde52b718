//! Angle conventions and the local east-north-up vector type

pub mod angle;
pub mod cartesian;

pub use angle::Angle;
pub use cartesian::Cartesian3;
