use craftmac_core::rotation;
use craftmac_core::{FileBuffer, LineBuffer, MacroConfig, SkillTable};
use std::io::{BufRead, Write};
use std::path::Path;

/// Convert a rotation file and write the macro back over it.
pub fn convert_in_place(
    path: &Path,
    table: &SkillTable,
    config: &MacroConfig,
) -> Result<(), String> {
    let mut buffer = FileBuffer::new(path);
    let lines = buffer.get_lines().map_err(|e| e.to_string())?;
    let converted = rotation::convert(&lines, table, config).map_err(|e| e.to_string())?;

    tracing::debug!(path = %path.display(), "rewriting rotation file");
    buffer.set_lines(&converted).map_err(|e| e.to_string())?;

    println!(
        "converted {} rotation lines into {} macro lines",
        lines.len(),
        converted.len()
    );
    Ok(())
}

/// Convert a rotation file and print the macro to stdout.
pub fn convert_to_stdout(
    path: &Path,
    table: &SkillTable,
    config: &MacroConfig,
) -> Result<(), String> {
    let buffer = FileBuffer::new(path);
    let lines = buffer.get_lines().map_err(|e| e.to_string())?;
    let converted = rotation::convert(&lines, table, config).map_err(|e| e.to_string())?;

    for line in &converted {
        println!("{line}");
    }
    Ok(())
}

/// Convert stdin to stdout, CRLF-joined like a buffer rewrite.
pub fn convert_stdio(table: &SkillTable, config: &MacroConfig) -> Result<(), String> {
    let lines: Vec<String> = std::io::stdin()
        .lock()
        .lines()
        .collect::<Result<_, _>>()
        .map_err(|e| e.to_string())?;
    let converted = rotation::convert(&lines, table, config).map_err(|e| e.to_string())?;

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{}", converted.join("\r\n")).map_err(|e| e.to_string())?;
    stdout.flush().map_err(|e| e.to_string())
}
