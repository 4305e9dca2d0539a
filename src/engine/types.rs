//! Type definitions for the operand stack engine
//!
//! This module contains the operation enum the engine executes. Keeping it
//! separate from the engine itself:
//! - Establishes a single source of truth for the transition set
//! - Facilitates serialization and deserialization
//! - Provides a clear boundary for extending the engine with new operations

use serde::{Deserialize, Serialize};

/// Operation types for the operand stack engine
///
/// The engine applies these operations to its stack, consuming operands from
/// the top and pushing the result back.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Pop two values, add them, and push the result
    Add,

    /// Pop two values, subtract the top from the second, and push the result
    Sub,

    /// Pop two values, multiply them, and push the result
    Mul,

    /// Pop two values, divide the second by the top, and push the result
    Div,

    /// Negate the top value on the stack
    Negate,

    /// Pop a value and push its square root
    Sqrt,
}

impl Op {
    /// Operation name as used in log output
    pub fn name(&self) -> &'static str {
        match self {
            Op::Add => "Add",
            Op::Sub => "Sub",
            Op::Mul => "Mul",
            Op::Div => "Div",
            Op::Negate => "Negate",
            Op::Sqrt => "Sqrt",
        }
    }
}
