//! # bvt-rs: Boundary-Value Test Synthesis in Rust
//!
//! **`bvt-rs`** extracts literal-valued variable assignments from a program and synthesizes
//! boundary-value test cases for each variable under a set of comparison conditions.
//!
//! ## How it works
//!
//! Every discovered assignment becomes an **observation**: a `(variable, condition, value)` triple.
//! Observations feed two append-only indexes, both stored as index-linked node chains:
//!
//! - The **variable index** records the raw observations, per variable, in first-seen order.
//! - The **boundary index** records, per variable, a synthesized boundary value next to the
//!   original value that produced it. Observations already covered by a recorded case are
//!   de-duplicated: only the observed value is appended.
//!
//! The boundary value sits one unit across the comparison edge (`x == 5` tests `6`,
//! `x < 5` tests `4`), and text values are negated into `not_<value>`.
//!
//! ## Basic Usage
//!
//! ```rust
//! use bvt_rs::generator::Generator;
//! use bvt_rs::observation::Observation;
//! use bvt_rs::types::Value;
//!
//! let observations = vec![
//!     Observation::literal("a", Value::Integer(3)),
//!     Observation::literal("b", Value::text("x")),
//!     Observation::literal("a", Value::Integer(3)),
//! ];
//!
//! let report = Generator::default().run(&observations);
//! assert_eq!(
//!     report.variables_trace(),
//!     "a -> == -> 3 -> == -> 3 -> null\n|\nb -> == -> x -> null\n|\nnull"
//! );
//! assert_eq!(
//!     report.boundaries_trace(),
//!     "a -> 4 -> 3 -> 3 -> null\n|\nb -> not_x -> x -> null\n|\nnull"
//! );
//! ```
//!
//! Observations can also be extracted straight from JavaScript source:
//!
//! ```rust
//! use bvt_rs::generator::Generator;
//!
//! let report = Generator::default().run_source("let limit = 10; const name = 'bob';").unwrap();
//! assert_eq!(
//!     report.boundaries_trace(),
//!     "limit -> 11 -> 10 -> null\n|\nname -> not_bob -> bob -> null\n|\nnull"
//! );
//! ```
//!
//! ## Core Components
//!
//! - **[`chain`]**: The node-chain arena shared by both indexes.
//! - **[`variables`]** and **[`boundary`]**: The two indexes.
//! - **[`synth`]**: Boundary synthesis and coverage matching.
//! - **[`extract`]**: JavaScript literal extraction.

pub mod boundary;
pub mod chain;
pub mod entries;
pub mod extract;
pub mod generator;
pub mod node;
pub mod observation;
pub mod render;
pub mod synth;
pub mod types;
pub mod variables;
