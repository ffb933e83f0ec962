//! Regulation building blocks: heating curve and burner hysteresis.

pub mod burner;
pub mod heating_curve;

pub use burner::BurnerControl;
pub use heating_curve::HeatingCurve;
