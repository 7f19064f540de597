pub mod config;
pub mod error;
pub mod tools;

pub use config::CompassConfig;
pub use error::{CompassError, Result};
pub use tools::{set_allowance, CompassTools, SetAllowanceInput, SetAllowanceOutput};
