pub mod definition;
pub mod document;
pub mod graph;
pub mod handle;
pub mod validation;

pub use definition::*;
pub use document::*;
pub use graph::*;
pub use handle::*;
pub use validation::*;
