//! Main engine implementation
//!
//! This module brings the stack, operation, and error types together to
//! implement the engine API: push a value, apply an operation, pop a result.
//!
//! The engine struct is the central coordinator that:
//! - Owns the operand stack
//! - Implements the transition for each operation
//! - Tracks the failure message of the most recent operation attempt
//! - Provides the primary API for embedding applications

use log::{debug, warn};

use crate::engine::errors::EngineError;
use crate::engine::stack::OperandStack;
use crate::engine::types::Op;

/// The operand stack engine
///
/// Applies arithmetic operations to a LIFO stack of single-precision values.
/// Each operation attempt resets the error message; a failed attempt stores
/// the failure text until the next attempt overwrites it.
///
/// The engine carries no internal synchronization; callers that share an
/// instance across threads must serialize access externally.
#[derive(Debug, Clone, Default)]
pub struct RpnEngine {
    /// Operand storage
    stack: OperandStack,

    /// Message from the most recent failed operation, empty otherwise
    error_message: String,
}

impl RpnEngine {
    /// Create a new engine with an empty stack
    pub fn new() -> Self {
        Self {
            stack: OperandStack::new(),
            error_message: String::new(),
        }
    }

    /// Push a value onto the operand stack
    ///
    /// Never fails and never touches the error message.
    pub fn push_value(&mut self, value: f32) {
        self.stack.push(value);
        debug!("Pushed {}; {}", value, self.stack);
    }

    /// Apply an operation to the top of the stack
    ///
    /// Resets the error message, applies the transition, and stores the
    /// failure text on error. Underflow leaves the stack untouched. A
    /// division by zero or a negative square root consumes its operands and
    /// pushes a NaN sentinel before reporting failure, so callers may pop
    /// the sentinel afterwards.
    pub fn apply(&mut self, op: Op) -> Result<(), EngineError> {
        self.error_message.clear();

        match self.apply_inner(op) {
            Ok(()) => {
                debug!("Applied {}; {}", op.name(), self.stack);
                Ok(())
            }
            Err(err) => {
                warn!("{} failed: {}", op.name(), err);
                self.error_message = err.to_string();
                Err(err)
            }
        }
    }

    /// Apply an operation, reporting failure through the boolean result
    ///
    /// Returns `true` iff the operation succeeded; on failure the message is
    /// available from [`error_message`](Self::error_message) until the next
    /// operation attempt overwrites it.
    pub fn push_operation(&mut self, op: Op) -> bool {
        self.apply(op).is_ok()
    }

    /// Internal transition for a single operation
    fn apply_inner(&mut self, op: Op) -> Result<(), EngineError> {
        match op {
            Op::Add => {
                let (a, b) = self.stack.pop_two()?;
                self.stack.push(a + b);
            }

            Op::Sub => {
                let (a, b) = self.stack.pop_two()?;
                self.stack.push(a - b);
            }

            Op::Mul => {
                let (a, b) = self.stack.pop_two()?;
                self.stack.push(a * b);
            }

            Op::Div => {
                let (a, b) = self.stack.pop_two()?;
                // The zero test is on the numerator `a`, not the divisor
                // popped from the top. Long-standing contract, kept as-is.
                if a == 0.0 {
                    self.stack.push(f32::NAN);
                    return Err(EngineError::DivisionByZero);
                }
                self.stack.push(a / b);
            }

            Op::Negate => {
                let a = self.stack.pop_one()?;
                self.stack.push(-a);
            }

            Op::Sqrt => {
                let a = self.stack.pop_one()?;
                if a < 0.0 {
                    self.stack.push(f32::NAN);
                    return Err(EngineError::NegativeSquareRoot);
                }
                self.stack.push(a.sqrt());
            }
        }

        Ok(())
    }

    /// Pop the top of the stack
    ///
    /// Returns NaN if the stack is empty. Never touches the error message.
    pub fn pop(&mut self) -> f32 {
        self.stack.pop().unwrap_or(f32::NAN)
    }

    /// Return the top of the stack without removing it
    ///
    /// Returns NaN if the stack is empty. Never touches the error message.
    pub fn peek(&self) -> f32 {
        self.stack.top().unwrap_or(f32::NAN)
    }

    /// Get the message set by the most recent failed operation, if any
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Get the number of values on the stack
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Get the current stack values, bottom first
    pub fn values(&self) -> &[f32] {
        self.stack.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ops() {
        let mut engine = RpnEngine::new();

        engine.push_value(5.0);
        engine.push_value(3.0);
        engine.apply(Op::Add).unwrap();
        engine.push_value(2.0);
        engine.apply(Op::Mul).unwrap();

        assert_eq!(engine.peek(), 16.0);
    }

    #[test]
    fn test_sub_order() {
        let mut engine = RpnEngine::new();

        engine.push_value(10.0);
        engine.push_value(4.0);
        engine.apply(Op::Sub).unwrap();

        assert_eq!(engine.pop(), 6.0);
    }

    #[test]
    fn test_div_divides_second_by_top() {
        let mut engine = RpnEngine::new();

        engine.push_value(20.0);
        engine.push_value(4.0);
        engine.apply(Op::Div).unwrap();

        assert_eq!(engine.pop(), 5.0);
    }

    #[test]
    fn test_div_zero_numerator_pushes_nan() {
        let mut engine = RpnEngine::new();

        // The zero test is on the second-from-top element, so 0 / 20 fails
        // even though the divisor is non-zero.
        engine.push_value(0.0);
        engine.push_value(20.0);

        assert_eq!(engine.apply(Op::Div), Err(EngineError::DivisionByZero));
        assert_eq!(engine.len(), 1);
        assert!(engine.pop().is_nan());
    }

    #[test]
    fn test_div_by_zero_divisor_is_infinite() {
        let mut engine = RpnEngine::new();

        // A zero divisor is not the checked case; IEEE semantics apply.
        engine.push_value(20.0);
        engine.push_value(0.0);

        assert!(engine.apply(Op::Div).is_ok());
        assert_eq!(engine.pop(), f32::INFINITY);
    }

    #[test]
    fn test_underflow_leaves_stack_unchanged() {
        let mut engine = RpnEngine::new();
        engine.push_value(2.0);

        assert_eq!(
            engine.apply(Op::Add),
            Err(EngineError::StackUnderflow { required: 2 })
        );
        assert_eq!(engine.values(), &[2.0]);

        let mut empty = RpnEngine::new();
        assert_eq!(
            empty.apply(Op::Negate),
            Err(EngineError::StackUnderflow { required: 1 })
        );
        assert!(empty.is_empty());
    }

    #[test]
    fn test_sqrt() {
        let mut engine = RpnEngine::new();

        engine.push_value(4.0);
        engine.apply(Op::Sqrt).unwrap();
        assert_eq!(engine.pop(), 2.0);

        engine.push_value(0.0);
        engine.apply(Op::Sqrt).unwrap();
        assert_eq!(engine.pop(), 0.0);
    }

    #[test]
    fn test_sqrt_negative_pushes_nan() {
        let mut engine = RpnEngine::new();
        engine.push_value(-4.0);

        assert_eq!(engine.apply(Op::Sqrt), Err(EngineError::NegativeSquareRoot));
        assert_eq!(engine.len(), 1);
        assert!(engine.pop().is_nan());
    }

    #[test]
    fn test_error_message_lifecycle() {
        let mut engine = RpnEngine::new();
        assert_eq!(engine.error_message(), "");

        assert!(!engine.push_operation(Op::Add));
        assert_eq!(engine.error_message(), "Stack has less than 2 elements.");

        // The next attempt resets the message, success or failure.
        engine.push_value(2.0);
        engine.push_value(3.0);
        assert!(engine.push_operation(Op::Add));
        assert_eq!(engine.error_message(), "");
    }

    #[test]
    fn test_nan_sentinel_propagates() {
        let mut engine = RpnEngine::new();

        engine.push_value(0.0);
        engine.push_value(20.0);
        assert!(!engine.push_operation(Op::Div));

        engine.push_value(1.0);
        assert!(engine.push_operation(Op::Add));
        assert!(engine.pop().is_nan());
    }
}
