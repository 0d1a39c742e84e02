mod command;
mod field;

pub use command::*;
pub use field::*;
