pub mod buffer;
pub mod context;
pub mod game_data;
pub mod rotation;

// Re-exports for convenience
pub use buffer::{BufferError, FileBuffer, LineBuffer};
pub use context::{ConfigError, MacroConfig, MacroConfigExt};
pub use game_data::{CRAFTING_SKILLS, SkillCategory, SkillInfo, is_known_skill, lookup_skill};
pub use rotation::{MacroError, SkillTable, build_macro, convert, paginate};
