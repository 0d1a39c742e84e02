mod command;
mod form;
mod query;
mod store;
mod types;

pub use command::*;
pub use form::*;
pub use query::*;
pub use store::*;
pub use types::*;
