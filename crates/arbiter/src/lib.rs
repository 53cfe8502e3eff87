//! Decision Arbiter
//!
//! Reconciles a proposed remediation action against the safety rulebook and
//! attributes the final decision to the authority that produced it. The core
//! is a pure function over one (action, snapshot) pair: no state, no I/O,
//! safe to call from any thread.

mod action;
mod decision;
mod policy;

pub use action::ProposedAction;
pub use decision::{Decision, DecisionSource, GUARDRAIL_MARKER};
pub use policy::{evaluate, Guardrail, GuardrailPolicy};
