pub mod compass;

pub use compass::{set_allowance, CompassTools, SetAllowanceInput, SetAllowanceOutput};
