//! # Error Suggestions
//!
//! Builds the `hint:` lines printed under a command-line error. Following CLI
//! recommendations, errors should tell users what went wrong AND how to fix
//! it: a misspelled command or option gets a "did you mean" suggestion, and
//! every usage error points at the relevant help page.

use crate::error::CommandLineError;

/// Where a usage error happened.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsageContext<'a> {
    /// Executable name used in `help` hints.
    pub exe: &'a str,
    /// The resolved command, if resolution got that far.
    pub command: Option<&'a str>,
    /// Every registered command's primary name.
    pub command_names: &'a [&'a str],
    /// The resolved command's option names.
    pub option_names: &'a [&'a str],
}

/// Hint lines for `error`, most specific first.
pub fn usage_hints(error: &CommandLineError, context: &UsageContext<'_>) -> Vec<String> {
    let mut hints = Vec::new();

    match error {
        CommandLineError::UnknownCommand { name } => {
            if let Some(similar) = find_similar(&name.to_lowercase(), context.command_names) {
                hints.push(format!("Did you mean '{similar}'?"));
            }
        }
        CommandLineError::AmbiguousCommand { .. } => {
            hints.push("Type more of the command name to pick one".to_string());
        }
        CommandLineError::UnknownOption { option } => {
            let name = option.trim_start_matches('-').to_lowercase();
            if let Some(similar) = find_similar(&name, context.option_names) {
                hints.push(format!("Did you mean '-{similar}'?"));
            }
        }
        CommandLineError::AmbiguousOption { .. } => {
            hints.push("Type more of the name to pick one".to_string());
        }
        _ => {}
    }

    match context.command {
        Some(command) => hints.push(format!(
            "Run '{} help {}' for usage",
            context.exe, command
        )),
        None => hints.push(format!(
            "Run '{} help' to list available commands",
            context.exe
        )),
    }
    hints
}

/// Find a similar string from a list of candidates using edit distance.
///
/// Returns Some(candidate) if a close match is found (edit distance <= 2).
pub fn find_similar<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|&candidate| {
            let distance = edit_distance(input, candidate);
            if distance <= 2 && distance < input.len() {
                Some((candidate, distance))
            } else {
                None
            }
        })
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}

/// Calculate the Levenshtein edit distance between two strings.
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut matrix = vec![vec![0usize; b_len + 1]; a_len + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a_len {
        for j in 1..=b_len {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[a_len][b_len]
}
