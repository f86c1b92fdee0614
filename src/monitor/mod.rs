pub mod types;
pub mod observer;
pub mod journal;

pub use types::*;
pub use observer::*;
pub use journal::*;
