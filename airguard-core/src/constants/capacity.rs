//! Container Capacities
//!
//! The engine allocates nothing at runtime. These capacities bound the
//! `heapless` containers that hold membership tables, rules and sampled
//! fuzzy sets.
//!
//! ## Memory Budget
//!
//! ```text
//! AggregatedSet  = 1024 samples × 8 bytes  ≈ 8 KB
//! RuleBase       = 32 rules × ~80 bytes    ≈ 2.5 KB
//! Variable table = 8 labels × ~48 bytes    ≈ 400 B per variable
//! ```

/// Maximum number of labels per linguistic variable.
pub const MAX_TERMS: usize = 8;

/// Maximum number of antecedent clauses per rule.
///
/// One clause per input variable.
pub const MAX_ANTECEDENTS: usize = 4;

/// Maximum number of rules in a rule base.
pub const MAX_RULES: usize = 32;

/// Maximum number of samples in a universe.
pub const MAX_UNIVERSE_SAMPLES: usize = 1024;
