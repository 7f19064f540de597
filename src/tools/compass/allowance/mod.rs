pub mod dto;
pub mod handler;

pub use dto::{SetAllowanceInput, SetAllowanceOutput};
pub use handler::set_allowance;
