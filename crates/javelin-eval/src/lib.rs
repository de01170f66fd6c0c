//! Numeric operation dispatch for the Javelin expression evaluator.
//!
//! A debugger expression like `frameLocal + 3` ends up here: both operands are
//! [`PrimitiveValue`]s pulled out of the debuggee with no static type
//! information, and the pair has to be routed to an implementation for the
//! correct promoted type per the Java Language Specification's binary numeric
//! promotion rules.
//!
//! The crate is layered accordingly:
//!
//! - [`provider`] — the operation provider contract: one trait method per
//!   legal ordered (lhs, rhs) kind pair, one provider instance per semantic
//!   operator.
//! - [`dispatch`] — the routing core: pure, stateless two-level resolution
//!   (right operand's kind first, then left) into exactly one provider slot.
//! - [`ops`] — built-in providers with JVM arithmetic semantics.
//! - [`apply_binary_operator`] — the operator-level surface callers use.
//!
//! Dispatch failures are ordinary values ([`EvalError`]), never panics, so an
//! evaluator can surface them as evaluation errors to the user.

pub mod dispatch;
mod error;
pub mod ops;
pub mod provider;

mod eval;

pub use dispatch::{apply_floating_point_operation, apply_integer_operation};
pub use error::{EvalError, EvalResult};
pub use eval::{apply_binary_operator, BinaryOperator};
pub use javelin_primitives::{ObjectRef, PrimitiveKind, PrimitiveValue};
