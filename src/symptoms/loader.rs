use std::path::Path;

use anyhow::{Context, Result};

use crate::symptoms::Symptom;

/// Entries read from a symptoms file, with the warnings raised along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomInput {
    pub entries: Vec<(String, bool)>,
    pub warnings: Vec<String>,
}

pub fn load_symptom_file(path: &Path) -> Result<SymptomInput> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read symptoms file {}", path.display()))?;
    Ok(parse_symptom_lines(&content, &path.display().to_string()))
}

/// Lines are `name<TAB>value` or a bare `name` (present). Unknown names and
/// unreadable values are kept out of the entries and reported as warnings;
/// they never fail the parse.
pub fn parse_symptom_lines(content: &str, source: &str) -> SymptomInput {
    let mut entries = Vec::new();
    let mut warnings = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let mut parts = trimmed.splitn(2, '\t');
        let name = parts.next().unwrap_or_default().trim();
        let value = parts.next().map(str::trim);

        if Symptom::lookup(name).is_none() {
            warnings.push(format!(
                "{}:{} unknown symptom '{}' ignored",
                source, line_no, name
            ));
            continue;
        }

        let present = match value {
            None | Some("") => true,
            Some(raw) => match parse_flag(raw) {
                Some(flag) => flag,
                None => {
                    warnings.push(format!(
                        "{}:{} unreadable value '{}' for '{}', treated as absent",
                        source, line_no, raw, name
                    ));
                    false
                }
            },
        };
        entries.push((name.to_string(), present));
    }

    SymptomInput { entries, warnings }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}
