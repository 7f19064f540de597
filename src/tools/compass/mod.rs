pub mod allowance;
pub mod helpers;
pub mod implementation;

pub use allowance::{set_allowance, SetAllowanceInput, SetAllowanceOutput};
pub use implementation::CompassTools;
