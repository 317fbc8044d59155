//! Voice assets and clip assembly

pub mod assembler;
pub mod voice;

pub use assembler::{AssemblyReport, AudioAssembler, OUTPUT_SPEC};
pub use voice::Voice;
