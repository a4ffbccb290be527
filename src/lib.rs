pub mod config;
pub mod core;
pub mod gate;
pub mod study;

pub use config::{load_config, save_config, SonmalConfig};
pub use core::composer::Composer;
pub use core::geometry::HandBox;
pub use core::prediction::{best_of_frame, HandSide, Prediction};
pub use core::tables::{combine, decompose, double, Decomposition};
pub use gate::HoldGate;
pub use study::{StudyError, StudyMode, StudyOutcome, StudySession};
