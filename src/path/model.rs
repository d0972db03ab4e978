use crate::foundation::error::{TweenError, TweenResult};
use crate::foundation::values::fmt_number;

/// Every letter the path mini-language understands; case encodes
/// absolute vs relative.
pub const COMMAND_LETTERS: &str = "MmLlHhVvCcSsQqTtAaZz";

/// One path command: a letter plus its fixed-arity numeric arguments.
///
/// Invariant: `args.len()` equals the sum of the letter's arity groups (see
/// [`arg_groups`]). The parser upholds this; hand-built commands must too.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathCmd {
    /// Command letter.
    pub op: char,
    /// Numeric arguments in source order.
    pub args: Vec<f64>,
}

impl PathCmd {
    /// Build a command from a letter and its arguments.
    pub fn new(op: char, args: Vec<f64>) -> Self {
        Self { op, args }
    }

    /// Whether the command is relative (lowercase letter).
    pub fn is_relative(&self) -> bool {
        self.op.is_ascii_lowercase()
    }
}

/// An ordered command sequence; exists transiently during one
/// diff/serialize call.
pub type Path = Vec<PathCmd>;

/// Argument grouping for a command letter.
///
/// Each entry is the number of arguments rendered as one space-joined group;
/// the sum of the entries is the letter's total arity. `h 1`, `c 1 2, 3 4, 5 6`.
pub fn arg_groups(op: char) -> TweenResult<&'static [usize]> {
    match op.to_ascii_lowercase() {
        'm' | 'l' | 't' => Ok(&[2]),
        'h' | 'v' => Ok(&[1]),
        'c' => Ok(&[2, 2, 2]),
        's' | 'q' => Ok(&[2, 2]),
        'a' => Ok(&[7]),
        'z' => Ok(&[]),
        other => Err(TweenError::parse(format!(
            "unknown path command '{other}'"
        ))),
    }
}

/// Total argument count for a command letter.
pub(crate) fn arg_count(op: char) -> TweenResult<usize> {
    Ok(arg_groups(op)?.iter().sum())
}

/// Serialize a command sequence back into path mini-language text.
///
/// Arguments render group by group, space-joined inside a group and `", "`
/// between groups. A stored argument count that contradicts the arity table
/// is an internal-consistency error.
pub fn serialize_path(path: &[PathCmd]) -> TweenResult<String> {
    let mut pieces = Vec::with_capacity(path.len());
    for cmd in path {
        let groups = arg_groups(cmd.op)?;
        let total: usize = groups.iter().sum();
        if cmd.args.len() != total {
            return Err(TweenError::integrity(format!(
                "command '{}' carries {} arguments, arity requires {}",
                cmd.op,
                cmd.args.len(),
                total
            )));
        }
        if groups.is_empty() {
            pieces.push(cmd.op.to_string());
            continue;
        }
        let mut rest = cmd.args.as_slice();
        let mut rendered = Vec::with_capacity(groups.len());
        for &n in groups {
            let (group, tail) = rest.split_at(n);
            rest = tail;
            rendered.push(
                group
                    .iter()
                    .map(|v| fmt_number(*v))
                    .collect::<Vec<_>>()
                    .join(" "),
            );
        }
        pieces.push(format!("{} {}", cmd.op, rendered.join(", ")));
    }
    Ok(pieces.join(" "))
}

#[cfg(test)]
#[path = "../../tests/unit/path/model.rs"]
mod tests;
