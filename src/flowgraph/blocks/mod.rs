//! Built-in block implementations.

mod copy;
mod vector_sink;
mod vector_source;

pub use copy::CopyBlock;
pub use vector_sink::VectorSink;
pub use vector_source::VectorSource;
