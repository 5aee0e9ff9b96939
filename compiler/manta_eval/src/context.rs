//! Evaluation context threaded through a running pipeline.
//!
//! One context exists per program invocation. It holds:
//!
//! - `receiver`: what the invocation runs against; never reassigned.
//! - `focus`: the pending values of the slot being built. Its last element
//!   is the *current value* that trailers operate on. A slot starts with the
//!   receiver as its only pending value.
//! - `results`: committed values, append-only, in slot order.
//!
//! Nested groups and call arguments run on a [`derived`](EvalContext::derive)
//! context: same receiver, fresh focus and results.

use smallvec::{smallvec, SmallVec};

use manta_value::Value;

static NOTHING: Value = Value::Nothing;

/// Mutable state of one program invocation.
#[derive(Debug)]
pub struct EvalContext {
    receiver: Value,
    focus: SmallVec<[Value; 2]>,
    results: Vec<Value>,
}

impl EvalContext {
    /// Fresh context whose focus is the receiver.
    pub fn new(receiver: Value) -> Self {
        EvalContext {
            focus: smallvec![receiver.clone()],
            receiver,
            results: Vec::new(),
        }
    }

    /// Context with the same receiver and empty results, for evaluating a
    /// nested group independently of this context's in-progress focus.
    pub fn derive(&self) -> Self {
        EvalContext::new(self.receiver.clone())
    }

    /// The invocation's receiver.
    #[inline]
    pub fn receiver(&self) -> &Value {
        &self.receiver
    }

    /// Pending values of the current slot.
    #[inline]
    pub fn focus(&self) -> &[Value] {
        &self.focus
    }

    /// The value trailers apply to: the last pending value, or nothing.
    pub fn current(&self) -> &Value {
        self.focus.last().unwrap_or(&NOTHING)
    }

    /// Committed results so far.
    #[inline]
    pub fn results(&self) -> &[Value] {
        &self.results
    }

    /// Consume the context, yielding its committed results.
    pub fn into_results(self) -> Vec<Value> {
        self.results
    }

    /// Remove and return the current value (nothing when focus is empty).
    pub fn take_current(&mut self) -> Value {
        self.focus.pop().unwrap_or(Value::Nothing)
    }

    /// Replace the current value with `value`.
    pub fn replace(&mut self, value: Value) {
        self.focus.pop();
        self.focus.push(value);
    }

    /// Append `value` to the pending output.
    pub fn push(&mut self, value: Value) {
        self.focus.push(value);
    }

    /// Append `values` to the pending output, in order.
    pub fn extend(&mut self, values: impl IntoIterator<Item = Value>) {
        self.focus.extend(values);
    }

    /// End the slot: move every pending value into `results` and rebind the
    /// focus to the receiver.
    pub fn commit(&mut self) {
        self.results.extend(self.focus.drain(..));
        self.focus.push(self.receiver.clone());
    }

    /// Rebind the focus to the receiver without committing anything.
    pub fn reset(&mut self) {
        self.focus.clear();
        self.focus.push(self.receiver.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_context_focuses_receiver() {
        let ctx = EvalContext::new(Value::int(7));
        assert_eq!(ctx.focus(), &[Value::int(7)]);
        assert_eq!(ctx.current(), &Value::int(7));
        assert!(ctx.results().is_empty());
    }

    #[test]
    fn commit_moves_focus_and_rebinds_receiver() {
        let mut ctx = EvalContext::new(Value::int(0));
        ctx.replace(Value::int(1));
        ctx.commit();
        ctx.replace(Value::int(2));
        ctx.commit();
        assert_eq!(ctx.focus(), &[Value::int(0)]);
        assert_eq!(ctx.into_results(), vec![Value::int(1), Value::int(2)]);
    }

    #[test]
    fn splice_then_commit_keeps_order() {
        let mut ctx = EvalContext::new(Value::Nothing);
        let _ = ctx.take_current();
        ctx.extend([Value::int(1), Value::int(2)]);
        ctx.commit();
        assert_eq!(ctx.results(), &[Value::int(1), Value::int(2)]);
    }

    #[test]
    fn reset_discards_pending_without_commit() {
        let mut ctx = EvalContext::new(Value::string("r"));
        ctx.replace(Value::int(1));
        ctx.push(Value::int(2));
        ctx.reset();
        assert_eq!(ctx.focus(), &[Value::string("r")]);
        assert!(ctx.results().is_empty());
    }

    #[test]
    fn current_of_empty_focus_is_nothing() {
        let mut ctx = EvalContext::new(Value::int(1));
        assert_eq!(ctx.take_current(), Value::int(1));
        assert_eq!(ctx.current(), &Value::Nothing);
        assert_eq!(ctx.take_current(), Value::Nothing);
    }

    #[test]
    fn derive_shares_receiver_only() {
        let mut ctx = EvalContext::new(Value::int(3));
        ctx.replace(Value::int(4));
        ctx.commit();
        let derived = ctx.derive();
        assert_eq!(derived.receiver(), &Value::int(3));
        assert!(derived.results().is_empty());
        assert_eq!(derived.focus(), &[Value::int(3)]);
    }
}
