pub mod classify;
pub mod record;
pub mod source;

pub use classify::*;
pub use record::*;
pub use source::*;
