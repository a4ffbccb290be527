//! 지문자 조합 핵심 로직

pub mod composer;
pub mod geometry;
pub mod jamo;
pub mod prediction;
pub mod tables;

pub use composer::Composer;
pub use geometry::HandBox;
pub use prediction::{best_of_frame, HandSide, Prediction};
pub use tables::{combine, decompose, double, Decomposition};
