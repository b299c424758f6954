//! # Block Classification
//!
//! Every input line becomes exactly one top-level block.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): `Classifier` walks an ordered rule
//!    table and picks the first `LineKind` whose predicate matches the
//!    trimmed line, then builds the block for it
//! 2. **Assembly** (`builder`): `BlockBuilder` appends blocks in input order
//!
//! ## Rule Precedence
//!
//! Heading, labelled paragraph, checklist item, rule, text, blank. A line
//! opening with `**Dado que**` is never a generic paragraph, and a
//! checklist item is never bold-scanned even when it contains `**`.
//!
//! ## Modules
//!
//! - **`kinds`**: Block types owning their syntax (`CaseHeading`, `Label`,
//!   `Checklist`, `Separator`)
//! - **`classify`**: `Classifier` and `LineKind`
//! - **`builder`**: `BlockBuilder`

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::BlockBuilder;
pub use classify::{Classifier, LineKind};
