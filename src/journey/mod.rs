pub mod conversion;
pub mod definition;
pub mod render;

pub use conversion::*;
pub use definition::*;
pub use render::*;
