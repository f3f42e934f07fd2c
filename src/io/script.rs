//! Session script parsing
//!
//! A script is a plain text file with one intent per line:
//!
//! ```text
//! # comments start with '#'
//! grid 12 8
//! add 0 1 2 1
//! pick A
//! move 120 40
//! release
//! tap 120 40
//! click 3 4
//! clear
//! ```

use std::path::Path;
use std::str::FromStr;

use crate::catalog::edges::EdgeSet;
use crate::interaction::editor::Intent;
use crate::interaction::subscription::PointerEvent;
use crate::io::error::{EditorError, Result, script_error};
use crate::spatial::grid::GridCell;

/// One parsed intent with the line it came from
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptStep {
    /// 1-based line number in the source
    pub line: usize,
    /// The intent on that line
    pub intent: Intent,
}

/// Parse a whole script, skipping blank lines and comments
///
/// # Errors
///
/// Returns `Script` for the first line that cannot be parsed
pub fn parse_script(source: &str) -> Result<Vec<ScriptStep>> {
    let mut steps = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }

        let intent = parse_intent(content).map_err(|reason| script_error(line, &reason))?;
        steps.push(ScriptStep { line, intent });
    }
    Ok(steps)
}

/// Read and parse a script file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read, or `Script` if it cannot
/// be parsed
pub fn load_script(path: &Path) -> Result<Vec<ScriptStep>> {
    let source = std::fs::read_to_string(path).map_err(|e| EditorError::FileSystem {
        path: path.to_path_buf(),
        operation: "read script",
        source: e,
    })?;
    parse_script(&source)
}

fn parse_intent(content: &str) -> std::result::Result<Intent, String> {
    let mut words = content.split_whitespace();
    let command = words.next().unwrap_or_default().to_ascii_lowercase();
    let args: Vec<&str> = words.collect();

    let intent = match command.as_str() {
        "add" => {
            let values = numbers::<u8, 4>(&command, &args)?;
            let edges = EdgeSet::from_values(values).map_err(|error| error.to_string())?;
            Intent::AddCatalogTile(edges)
        }
        "pick" => {
            let [id] = arity::<1>(&command, &args)?;
            Intent::Pick(id.to_string())
        }
        "move" => {
            let [x, y] = coordinates(&command, &args)?;
            Intent::Pointer(PointerEvent::Moved { x, y })
        }
        "release" => {
            let [] = arity::<0>(&command, &args)?;
            Intent::Pointer(PointerEvent::Released)
        }
        "tap" => {
            let [x, y] = coordinates(&command, &args)?;
            Intent::Pointer(PointerEvent::Clicked { x, y })
        }
        "click" => {
            let [x, y] = numbers::<i32, 2>(&command, &args)?;
            Intent::ClickCell(GridCell::new(x, y))
        }
        "grid" => {
            let [cols, rows] = numbers::<usize, 2>(&command, &args)?;
            Intent::Resize { cols, rows }
        }
        "clear" => {
            let [] = arity::<0>(&command, &args)?;
            Intent::ClearAll
        }
        other => return Err(format!("unknown command '{other}'")),
    };
    Ok(intent)
}

fn arity<'a, const N: usize>(
    command: &str,
    args: &[&'a str],
) -> std::result::Result<[&'a str; N], String> {
    <[&str; N]>::try_from(args)
        .ok()
        .ok_or_else(|| format!("'{command}' takes {N} argument(s), found {}", args.len()))
}

fn numbers<T: FromStr, const N: usize>(
    command: &str,
    args: &[&str],
) -> std::result::Result<[T; N], String> {
    let mut parsed = Vec::with_capacity(N);
    for word in arity::<N>(command, args)? {
        let Ok(value) = word.parse::<T>() else {
            return Err(format!("'{command}' expects numbers, found '{word}'"));
        };
        parsed.push(value);
    }
    <[T; N]>::try_from(parsed)
        .ok()
        .ok_or_else(|| format!("'{command}' takes {N} argument(s)"))
}

fn coordinates(command: &str, args: &[&str]) -> std::result::Result<[f64; 2], String> {
    let values = numbers::<f64, 2>(command, args)?;
    if values.iter().all(|value| value.is_finite()) {
        Ok(values)
    } else {
        Err(format!("'{command}' expects finite coordinates"))
    }
}
