//! Skill name resolution: exact lookup plus unambiguous-prefix completion.

use crate::game_data::{CRAFTING_SKILLS, SkillInfo};


/// Read-only view over a skill dataset.
///
/// Built once at startup and passed by reference into the builder. The table
/// evolves between game patches by pointing at a different static dataset.
#[derive(Clone, Copy)]
pub struct SkillTable {
    entries: &'static phf::Map<&'static str, SkillInfo>,
}

impl Default for SkillTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl SkillTable {
    /// Table over the current crafting skill dataset.
    pub fn standard() -> Self {
        Self {
            entries: &CRAFTING_SKILLS,
        }
    }

    /// Resolve a trimmed, lowercased candidate to a skill.
    ///
    /// Exact matches win. Otherwise the candidate resolves only when it is a
    /// prefix of exactly one table key; zero or several prefix hits fail, so
    /// ambiguous input is never silently guessed. The empty string prefixes
    /// every key and therefore never resolves.
    pub fn resolve(&self, candidate: &str) -> Option<&'static SkillInfo> {
        self.exact(candidate).or_else(|| self.complete(candidate))
    }

    /// Exact lookup only, for callers with prefix completion disabled.
    pub fn exact(&self, candidate: &str) -> Option<&'static SkillInfo> {
        self.entries.get(candidate)
    }

    /// Unambiguous-prefix completion over the whole table.
    fn complete(&self, candidate: &str) -> Option<&'static SkillInfo> {
        let mut matches = self
            .entries
            .entries()
            .filter(|(key, _)| key.starts_with(candidate))
            .map(|(_, info)| info);

        match (matches.next(), matches.next()) {
            (Some(info), None) => Some(info),
            _ => None,
        }
    }
}
