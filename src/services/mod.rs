mod assembler;
mod generation;

pub use assembler::assemble;
pub use generation::{GenerationReport, WrittenDocument, generate_all, write_document};
