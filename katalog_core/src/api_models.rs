mod categories;
mod error_reason;
mod health;

pub use categories::*;
pub use error_reason::*;
pub use health::*;
