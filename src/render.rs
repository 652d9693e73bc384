//! Plain-text traces of chain indexes.
//!
//! Both indexes render the same node-chain format: one line per entry, walking the entry's
//! `down` chain, followed by a separator line. The trace ends with a final terminator.
//!
//! ```text
//! a -> == -> 3 -> == -> 3 -> null
//! |
//! b -> == -> x -> null
//! |
//! null
//! ```

use std::fmt::{self, Display, Write};

use crate::chain::Chain;

/// Configuration options for trace rendering.
///
/// Use `RenderConfig::default()` for the standard `->`/`null`/`|` format.
///
/// # Examples
///
/// ```
/// use bvt_rs::render::RenderConfig;
/// use bvt_rs::types::{Condition, Value};
/// use bvt_rs::variables::VariableIndex;
///
/// let mut index = VariableIndex::new();
/// index.record_observation("a", Condition::Eq, Value::Integer(3));
///
/// let config = RenderConfig {
///     arrow: " => ".to_string(),
///     terminator: "END".to_string(),
///     separator: "--".to_string(),
/// };
/// assert_eq!(index.render_with_config(&config), "a => == => 3 => END\n--\nEND");
/// ```
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Link between consecutive nodes (default: `" -> "`)
    pub arrow: String,
    /// Marker printed for the `null` link (default: `"null"`)
    pub terminator: String,
    /// Line printed between entries (default: `"|"`)
    pub separator: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            arrow: " -> ".to_string(),
            terminator: "null".to_string(),
            separator: "|".to_string(),
        }
    }
}

/// Write the trace of all entries reachable through `next` links from `head`.
pub fn write_trace<T, W>(chain: &Chain<T>, head: usize, config: &RenderConfig, out: &mut W) -> fmt::Result
where
    T: Display,
    W: Write,
{
    for entry in chain.walk_next(head) {
        for index in chain.walk_down(entry) {
            write!(out, "{}{}", chain[index], config.arrow)?;
        }
        writeln!(out, "{}", config.terminator)?;
        writeln!(out, "{}", config.separator)?;
    }
    write!(out, "{}", config.terminator)
}

/// Render the trace into a fresh string.
pub fn trace<T>(chain: &Chain<T>, head: usize, config: &RenderConfig) -> String
where
    T: Display,
{
    let mut s = String::new();
    // Writing into a `String` never fails.
    let _ = write_trace(chain, head, config, &mut s);
    s
}
