//! First-match-wins rule chains.
//!
//! Each tree is a `const` slice of rules over a precomputed facts struct.
//! Order in the slice is evaluation order; the last rule of every chain is
//! a catch-all so evaluation is total.

use tracing::debug;

/// Label plus the rationale lines contributed by the rule that fired.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict<L> {
    pub label: L,
    pub notes: Vec<String>,
}

impl<L> Verdict<L> {
    pub fn new(label: L, note: impl Into<String>) -> Self {
        Self {
            label,
            notes: vec![note.into()],
        }
    }

    pub fn with_notes(label: L, notes: Vec<String>) -> Self {
        Self { label, notes }
    }
}

/// One `(predicate, result)` pair.
pub struct Rule<F, L> {
    pub name: &'static str,
    pub when: fn(&F) -> bool,
    pub then: fn(&F) -> Verdict<L>,
}

/// Evaluate `rules` in order and return the first verdict with its rule name.
///
/// Returns `None` only if no rule matches, which a chain ending in a
/// catch-all never does.
pub fn first_match<F, L>(rules: &[Rule<F, L>], facts: &F) -> Option<(&'static str, Verdict<L>)> {
    rules.iter().find(|rule| (rule.when)(facts)).map(|rule| {
        debug!(rule = rule.name, "rule fired");
        (rule.name, (rule.then)(facts))
    })
}

pub(crate) fn always<F>(_: &F) -> bool {
    true
}
