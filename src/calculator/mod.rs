//! RPN evaluation engine
//!
//! This module provides the calculator core:
//! - [`engine`]: the [`Calculator`] dispatcher and [`DispatchResult`]
//! - [`events`]: canonical events, the alias table and [`canonicalize`]
//! - [`ops`]: the operator registry
//! - [`errors`]: error and fault types
//!
//! # Dispatch Model
//!
//! The front end turns every key press or button click into a raw token. The
//! token is canonicalized, resolved to an [`Event`], and dispatched. Each
//! dispatch runs to completion before the next one starts.

pub mod engine;
pub mod errors;
pub mod events;
pub mod ops;

pub use engine::{Calculator, DispatchResult};
pub use errors::{CalcError, CalcResult, Fault};
pub use events::{aliases, canonicalize, Event};
pub use ops::{registry, Operator};
