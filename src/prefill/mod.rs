pub mod draft;
pub mod picker;
pub mod snapshot;
pub mod store;

pub use draft::*;
pub use picker::*;
pub use store::*;
