mod service;
mod sink;
mod submission;
mod template;

pub use service::*;
pub use sink::*;
pub use submission::*;
pub use template::*;
