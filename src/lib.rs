//! Membership tests for context-free grammars in Chomsky normal form, with
//! the Cocke–Younger–Kasami algorithm. Rule lookups and verdicts are memoized
//! so that batches of words and repeated grammars are cheap.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

mod error;
pub mod grammar;
pub mod membership;
pub mod reverse_index;
pub mod rule;
pub mod symbol;
pub mod table;

pub use crate::error::InvalidGrammar;
pub use crate::grammar::CnfGrammar;
pub use crate::membership::{evaluate_all, CacheStats, MembershipCache};
pub use crate::reverse_index::{IndexStats, ReverseRuleIndex};
pub use crate::rule::builder::GrammarBuilder;
pub use crate::rule::{CnfRule, Rhs, SymbolPair};
pub use crate::symbol::{Symbol, SymbolBitSet, SymbolSource};
pub use crate::table::{is_member, recognize, CykTable};
