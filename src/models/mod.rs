//! Data models for etcool
//!
//! - Inputs: weather and surface conditions for a single evaluation
//! - Result: cooling effect and the intermediate evapotranspiration rates

pub mod inputs;
pub mod result;

pub use inputs::{ModelInputs, VegetationType};
pub use result::ModelResult;
