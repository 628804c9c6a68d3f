//! Rotation-to-macro conversion pipeline.
//!
//! Raw lines flow one direction: skill resolution and wait annotation
//! (`build_macro`), then page splitting with completion cues (`paginate`).

mod builder;
mod error;
mod paginator;
mod resolver;

#[cfg(test)]
mod tests;

pub use builder::build_macro;
pub use error::MacroError;
pub use paginator::paginate;
pub use resolver::SkillTable;

use craftmac_types::MacroConfig;

/// Run the full pipeline: build macro lines, then split them into pages.
pub fn convert(
    lines: &[String],
    table: &SkillTable,
    config: &MacroConfig,
) -> Result<Vec<String>, MacroError> {
    let built = build_macro(lines, table, config)?;
    paginate(&built, config)
}
