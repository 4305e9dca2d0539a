//! Error types for engine operations
//!
//! This module defines all possible error conditions that can occur while
//! applying an operation to the operand stack.

use thiserror::Error;

/// Error variants that can occur while applying an operation
///
/// The `Display` text of each variant is the message the engine exposes
/// through its error-message field, so the wording is part of the contract.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    /// Stack underflow occurs when an operation needs more operands than are available
    #[error("Stack has less than {required} elements.")]
    StackUnderflow { required: usize },

    /// Division by zero error
    ///
    /// The failed division still pushes a NaN sentinel onto the stack.
    #[error("Division by 0.")]
    DivisionByZero,

    /// Square root of a negative operand
    ///
    /// The failed operation still pushes a NaN sentinel onto the stack.
    #[error("Square root of negative number.")]
    NegativeSquareRoot,

    /// Operation with no matching transition
    ///
    /// Never constructed while [`Op`](crate::engine::Op) stays closed; kept
    /// so the taxonomy survives future extension of the operation set.
    #[error("Unknown operation.")]
    UnknownOperation,
}
