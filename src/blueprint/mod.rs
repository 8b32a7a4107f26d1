pub mod conversion;
pub mod definition;
pub mod index;
mod loader;

pub use conversion::*;
pub use definition::*;
pub use index::*;
