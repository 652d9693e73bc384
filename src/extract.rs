//! Literal-assignment extraction from JavaScript source.
//!
//! Parses the source with tree-sitter and turns every `variable_declarator` that binds a
//! plain identifier to a literal into an equality [`Observation`]:
//!
//! ```text
//! let a = 3;            ->  a == 3
//! const b = "x";        ->  b == x
//! var c = compute();    ->  (skipped: not a literal)
//! ```
//!
//! String literals are classified like any other value, so `"5"` is the number `5`.
//! A variable declared several times keeps the position of its first declaration and
//! the value of its last literal one.

use log::debug;
use tree_sitter::{Node, Parser, Tree};

use crate::observation::Observation;
use crate::types::Value;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("failed to load JavaScript grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    #[error("parser produced no syntax tree")]
    NoTree,
    #[error("syntax error at {line}:{column}")]
    Syntax { line: usize, column: usize },
}

fn parser() -> Result<Parser, ExtractError> {
    let mut parser = Parser::new();
    parser.set_language(&tree_sitter_javascript::LANGUAGE.into())?;
    Ok(parser)
}

/// Parse JavaScript source into a syntax tree, rejecting sources with syntax errors.
pub fn parse(source: &str) -> Result<Tree, ExtractError> {
    let tree = parser()?.parse(source, None).ok_or(ExtractError::NoTree)?;
    let root = tree.root_node();
    if root.has_error() {
        let bad = preorder(root)
            .find(|n| n.is_error() || n.is_missing())
            .unwrap_or(root);
        let pos = bad.start_position();
        return Err(ExtractError::Syntax {
            line: pos.row + 1,
            column: pos.column + 1,
        });
    }
    Ok(tree)
}

/// Extract one `==` observation per variable initialized with a literal.
pub fn extract_literals(source: &str) -> Result<Vec<Observation>, ExtractError> {
    let tree = parse(source)?;
    let bytes = source.as_bytes();

    let mut observations: Vec<Observation> = Vec::new();
    for node in preorder(tree.root_node()) {
        if node.kind() != "variable_declarator" {
            continue;
        }
        let Some(name) = node.child_by_field_name("name") else {
            continue;
        };
        if name.kind() != "identifier" {
            continue;
        }
        let Some(value) = node.child_by_field_name("value").and_then(|v| literal(v, bytes)) else {
            continue;
        };
        let name = text(name, bytes);
        debug!("extract_literals: {} = {}", name, value);
        match observations.iter_mut().find(|o| o.variable == name) {
            Some(existing) => existing.value = value,
            None => observations.push(Observation::literal(name, value)),
        }
    }
    Ok(observations)
}

fn text<'a>(node: Node, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

/// Strip the first and last character (quotes or backticks).
fn inner(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

fn number(raw: &str) -> Value {
    let cleaned: String = raw.chars().filter(|&c| c != '_').collect();
    let cleaned = cleaned.strip_suffix('n').unwrap_or(cleaned.as_str());
    let lower = cleaned.to_ascii_lowercase();
    let radix = match lower.get(..2) {
        Some("0x") => Some(16),
        Some("0o") => Some(8),
        Some("0b") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        if let Ok(i) = i64::from_str_radix(&lower[2..], radix) {
            return Value::Integer(i);
        }
    }
    Value::parse(cleaned)
}

fn negated(value: Value) -> Option<Value> {
    match value {
        Value::Integer(i) => i.checked_neg().map(Value::Integer),
        Value::Decimal(x) => Some(Value::Decimal(-x)),
        Value::Text(_) => None,
    }
}

/// Evaluate a literal initializer; `None` for anything that is not a literal.
fn literal(node: Node, source: &[u8]) -> Option<Value> {
    match node.kind() {
        "number" => Some(number(text(node, source))),
        "string" => Some(Value::parse(inner(text(node, source)))),
        "template_string" => {
            let mut cursor = node.walk();
            let interpolated = node
                .named_children(&mut cursor)
                .any(|c| c.kind() == "template_substitution");
            if interpolated {
                None
            } else {
                Some(Value::parse(inner(text(node, source))))
            }
        }
        "true" | "false" | "null" => Some(Value::text(text(node, source))),
        "parenthesized_expression" => node.named_child(0).and_then(|n| literal(n, source)),
        "unary_expression" => {
            let operator = node.child_by_field_name("operator")?;
            let argument = node.child_by_field_name("argument")?;
            if argument.kind() != "number" {
                return None;
            }
            let value = number(text(argument, source));
            match text(operator, source) {
                "-" => negated(value),
                "+" => Some(value),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Iterate over all nodes of the subtree rooted at `root` in pre-order.
fn preorder<'tree>(root: Node<'tree>) -> impl Iterator<Item = Node<'tree>> {
    let mut stack = vec![root];
    std::iter::from_fn(move || {
        let node = stack.pop()?;
        for i in (0..node.child_count()).rev() {
            if let Some(child) = node.child(i) {
                stack.push(child);
            }
        }
        Some(node)
    })
}
