//! Still-life scene assembly
//!
//! Compound objects (bottles, the shelf) are generators: pure functions that
//! re-emit a data-only list of draw instructions on every invocation, with
//! the caller's placement and scale substituted in. The assembler replays
//! the fixed arrangement each frame.

pub mod assembler;
pub mod bottles;
pub mod instructions;
pub mod lighting;
pub mod shelf;

pub use assembler::SceneAssembler;
pub use instructions::{submit, DrawInstruction, Finish};
