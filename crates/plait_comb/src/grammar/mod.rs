//! Grammars whose rules refer to each other.
//!
//! A rule such as JSON's `value` needs `object` and `array`, which in turn
//! need `value`. No single composition expression can build that cycle,
//! so rules go through a table of write-once slots:
//!
//! 1. [`GrammarBuilder::declare`] creates an empty slot and returns a
//!    [`Rule`] handle.
//! 2. [`GrammarBuilder::reference`] gives a [`Parser`] that looks the slot
//!    up each time it runs. It can be composed into other rules before the
//!    slot has a definition.
//! 3. [`GrammarBuilder::define`] fills a slot, once.
//! 4. [`GrammarBuilder::build`] checks that every slot is filled and
//!    freezes the table into a [`Grammar`]. From then on slots are only
//!    read.
//!
//! References hold the slot weakly, so the parsers stored in the table do
//! not keep each other alive. Parsers handed out by [`Grammar::rule`] hold
//! the whole table strongly; the grammar lives as long as any of them.
//!
//! Rule resolution grows the stack on demand (see
//! [`plait_stack::ensure_sufficient_stack`]), so input nesting depth is
//! bounded by memory rather than by the native stack.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock, Weak};

use plait_stack::ensure_sufficient_stack;
use thiserror::Error;
use tracing::{debug, trace, trace_span};

use crate::outcome::Outcome;
use crate::parser::Parser;

const GRAMMAR_DROPPED: &str = "rule referenced after its grammar was dropped";

static NEXT_GRAMMAR_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of one builder and the grammar it produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct GrammarId(u64);

impl GrammarId {
    fn fresh() -> Self {
        GrammarId(NEXT_GRAMMAR_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle to a declared rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rule {
    grammar: GrammarId,
    index: usize,
    name: &'static str,
}

impl Rule {
    /// The name given at declaration.
    pub fn name(self) -> &'static str {
        self.name
    }
}

/// Mistakes made while constructing a grammar.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// `define` was called twice for the same rule.
    #[error("rule `{name}` is defined more than once")]
    Redefined {
        /// The rule's name.
        name: &'static str,
    },

    /// `build` found a declared rule that was never defined.
    #[error("rule `{name}` is declared but never defined")]
    Undefined {
        /// The rule's name.
        name: &'static str,
    },

    /// The rule handle came from a different builder.
    #[error("rule `{name}` does not belong to this grammar")]
    UnknownRule {
        /// The rule's name.
        name: &'static str,
    },
}

/// A named, write-once rule slot.
struct Slot {
    name: &'static str,
    parser: OnceLock<Parser>,
}

impl Slot {
    fn parse<'a>(&self, input: &'a str) -> Outcome<'a> {
        let _span = trace_span!("rule", name = self.name).entered();
        let outcome = match self.parser.get() {
            Some(parser) => ensure_sufficient_stack(|| parser.parse(input)),
            None => Outcome::rejected(format!("rule `{}` is not defined", self.name)),
        };
        trace!(
            remaining = input.len(),
            matched = outcome.is_matched(),
            "rule applied"
        );
        outcome
    }
}

/// Collects rule declarations and definitions.
pub struct GrammarBuilder {
    id: GrammarId,
    slots: Vec<Arc<Slot>>,
}

impl Default for GrammarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GrammarBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrammarBuilder")
            .field("rules", &rule_names(&self.slots))
            .finish()
    }
}

impl GrammarBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        GrammarBuilder {
            id: GrammarId::fresh(),
            slots: Vec::new(),
        }
    }

    /// Declare a rule whose definition will come later.
    pub fn declare(&mut self, name: &'static str) -> Rule {
        let index = self.slots.len();
        self.slots.push(Arc::new(Slot {
            name,
            parser: OnceLock::new(),
        }));
        Rule {
            grammar: self.id,
            index,
            name,
        }
    }

    /// A parser that runs `rule`'s definition, whenever it is given.
    pub fn reference(&self, rule: Rule) -> Result<Parser, GrammarError> {
        let slot: Weak<Slot> = Arc::downgrade(self.slot(rule)?);
        Ok(Parser::new(move |input: &str| match slot.upgrade() {
            Some(slot) => slot.parse(input),
            None => Outcome::rejected(GRAMMAR_DROPPED),
        }))
    }

    /// Give `rule` its definition.
    pub fn define(&mut self, rule: Rule, parser: Parser) -> Result<(), GrammarError> {
        self.slot(rule)?
            .parser
            .set(parser)
            .map_err(|_| GrammarError::Redefined { name: rule.name })
    }

    /// Check every rule is defined and freeze the table.
    pub fn build(self) -> Result<Grammar, GrammarError> {
        if let Some(slot) = self.slots.iter().find(|slot| slot.parser.get().is_none()) {
            return Err(GrammarError::Undefined { name: slot.name });
        }
        debug!(rules = ?rule_names(&self.slots), "grammar built");
        Ok(Grammar {
            id: self.id,
            slots: self.slots.into(),
        })
    }

    fn slot(&self, rule: Rule) -> Result<&Arc<Slot>, GrammarError> {
        lookup(self.id, &self.slots, rule)
    }
}

/// A frozen set of mutually-referencing rules.
#[derive(Clone)]
pub struct Grammar {
    id: GrammarId,
    slots: Arc<[Arc<Slot>]>,
}

impl fmt::Debug for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grammar")
            .field("rules", &rule_names(&self.slots))
            .finish()
    }
}

impl Grammar {
    /// An ordinary parser for `rule`. It keeps the grammar alive.
    pub fn rule(&self, rule: Rule) -> Result<Parser, GrammarError> {
        let index = rule.index;
        lookup(self.id, &self.slots, rule)?;
        let slots = Arc::clone(&self.slots);
        // `lookup` checked the index and the table never changes size.
        Ok(Parser::new(move |input: &str| slots[index].parse(input)))
    }

    /// Rule names in declaration order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        rule_names(&self.slots)
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` for a grammar with no rules.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

fn lookup(id: GrammarId, slots: &[Arc<Slot>], rule: Rule) -> Result<&Arc<Slot>, GrammarError> {
    slots
        .get(rule.index)
        .filter(|_| rule.grammar == id)
        .ok_or(GrammarError::UnknownRule { name: rule.name })
}

fn rule_names(slots: &[Arc<Slot>]) -> Vec<&'static str> {
    slots.iter().map(|slot| slot.name).collect()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
