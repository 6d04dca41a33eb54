#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod criterion;
mod engine;
mod error;
mod estimation;
mod lift;
mod logging_set;
mod myo_rep;
pub mod progression;
mod set_result;
mod settings;
mod units;

pub use criterion::*;
pub use engine::*;
pub use error::*;
pub use estimation::*;
pub use lift::*;
pub use logging_set::*;
pub use myo_rep::*;
pub use progression::ProgressionRecommendation;
pub use set_result::*;
pub use settings::*;
pub use units::*;
