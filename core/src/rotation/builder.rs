//! Macro line construction from raw rotation lines.

use craftmac_types::MacroConfig;
use memchr::memmem;

use super::error::MacroError;
use super::resolver::SkillTable;

#[cfg(test)]
mod tests;

/// Convert raw rotation lines into `/ac` macro lines.
///
/// Each line is trimmed and lowercased, then resolved against the skill
/// table (exact match first; unambiguous-prefix completion when
/// `autocomplete` is on). Resolved lines become
/// `/ac "<Name>" <wait.<secs>>`; everything else passes through verbatim so
/// comments, blank separators, and already-formatted lines survive.
///
/// Unless `wait_last_line` is set, the trailing wait annotation is stripped
/// from the final line.
pub fn build_macro(
    lines: &[String],
    table: &SkillTable,
    config: &MacroConfig,
) -> Result<Vec<String>, MacroError> {
    if lines.is_empty() {
        return Err(MacroError::EmptyInput);
    }

    let mut resolved_count = 0;
    let mut out = Vec::with_capacity(lines.len());
    for raw in lines {
        let candidate = raw.trim().to_lowercase();
        let resolved = if config.autocomplete {
            table.resolve(&candidate)
        } else {
            table.exact(&candidate)
        };

        match resolved {
            Some(info) => {
                out.push(format!("/ac \"{}\" <wait.{}>", info.name, info.wait_secs()));
                resolved_count += 1;
            }
            None => out.push(raw.clone()),
        }
    }

    if !config.wait_last_line
        && let Some(last) = out.last_mut()
        && let Some(idx) = memmem::find(last.as_bytes(), b" <wait.")
    {
        last.truncate(idx);
    }

    tracing::debug!(total = lines.len(), resolved = resolved_count, "built macro lines");

    Ok(out)
}
