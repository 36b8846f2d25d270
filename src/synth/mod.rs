//! This namespace contains all the parts converting from note data to wave data.

pub mod envelope;
pub mod mixer;
pub mod tuning;
