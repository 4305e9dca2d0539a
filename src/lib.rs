pub mod engine;

// Use specific imports rather than assuming re-exports for clarity
pub use crate::engine::{EngineError, Op, OperandStack, RpnEngine};
