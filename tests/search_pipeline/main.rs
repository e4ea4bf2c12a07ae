//! Search Pipeline Integration Tests
//!
//! End-to-end tests through the public `woundsearch` façade:
//! - invariants: properties of any query over the bundled corpus
//! - corpus: loading custom corpora and configs from disk
//! - sessions: search + history across simulated process restarts

#[path = "../common/mod.rs"]
mod common;

mod corpus;
mod invariants;
mod sessions;
