//! FFXIV crafting skill lookup table.
//!
//! Keys are the lowercase form of each canonical name so lookups can run on
//! normalized input. Wait times come from the skill category: the game needs
//! 3 s after an action and 2 s after a buff before the next macro step fires.
//!
//! Skill names match the Shadowbringers 5.x crafting kit.

use phf::phf_map;

use SkillCategory::{Action, Buff};

#[cfg(test)]
mod tests;

/// Skill category, which determines the post-execution wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Action,
    Buff,
}

impl SkillCategory {
    /// Seconds the game needs before the next macro step fires.
    pub const fn wait_secs(&self) -> u8 {
        match self {
            SkillCategory::Action => 3,
            SkillCategory::Buff => 2,
        }
    }
}

/// A canonical skill name with its category.
#[derive(Debug, Clone, Copy)]
pub struct SkillInfo {
    pub name: &'static str,
    pub category: SkillCategory,
}

impl SkillInfo {
    const fn new(name: &'static str, category: SkillCategory) -> Self {
        Self { name, category }
    }

    /// Seconds of wait this skill carries in a macro line.
    pub fn wait_secs(&self) -> u8 {
        self.category.wait_secs()
    }
}

/// Look up a skill by name, case-insensitively.
pub fn lookup_skill(name: &str) -> Option<&'static SkillInfo> {
    CRAFTING_SKILLS.get(name.to_lowercase().as_str())
}

/// Check whether a name is a known skill.
pub fn is_known_skill(name: &str) -> bool {
    lookup_skill(name).is_some()
}

/// Crafting skill lookup table keyed by lowercased canonical name
pub static CRAFTING_SKILLS: phf::Map<&'static str, SkillInfo> = phf_map! {
    // ═══════════════════════════════════════════════════════════════════════════
    // Actions (3 s wait)
    // ═══════════════════════════════════════════════════════════════════════════
    "basic synthesis" => SkillInfo::new("Basic Synthesis", Action),
    "basic touch" => SkillInfo::new("Basic Touch", Action),
    "master's mend" => SkillInfo::new("Master's Mend", Action),
    "hasty touch" => SkillInfo::new("Hasty Touch", Action),
    "rapid synthesis" => SkillInfo::new("Rapid Synthesis", Action),
    "standard touch" => SkillInfo::new("Standard Touch", Action),
    "brand of the elements" => SkillInfo::new("Brand Of The Elements", Action),
    "byregot's blessing" => SkillInfo::new("Byregot's Blessing", Action),
    "precise touch" => SkillInfo::new("Precise Touch", Action),
    "careful synthesis" => SkillInfo::new("Careful Synthesis", Action),
    "muscle memory" => SkillInfo::new("Muscle Memory", Action),
    "patient touch" => SkillInfo::new("Patient Touch", Action),
    "prudent touch" => SkillInfo::new("Prudent Touch", Action),
    "focused synthesis" => SkillInfo::new("Focused Synthesis", Action),
    "focused touch" => SkillInfo::new("Focused Touch", Action),
    "preparatory touch" => SkillInfo::new("Preparatory Touch", Action),
    "groundwork" => SkillInfo::new("Groundwork", Action),
    "delicate synthesis" => SkillInfo::new("Delicate Synthesis", Action),
    "intensive synthesis" => SkillInfo::new("Intensive Synthesis", Action),
    "trained eye" => SkillInfo::new("Trained Eye", Action),

    // ═══════════════════════════════════════════════════════════════════════════
    // Buffs (2 s wait)
    // ═══════════════════════════════════════════════════════════════════════════
    "inner quiet" => SkillInfo::new("Inner Quiet", Buff),
    "tricks of the trade" => SkillInfo::new("Tricks Of The Trade", Buff),
    "observe" => SkillInfo::new("Observe", Buff),
    "waste not" => SkillInfo::new("Waste Not", Buff),
    "veneration" => SkillInfo::new("Veneration", Buff),
    "great strides" => SkillInfo::new("Great Strides", Buff),
    "innovation" => SkillInfo::new("Innovation", Buff),
    "name of the elements" => SkillInfo::new("Name Of The Elements", Buff),
    "final appraisal" => SkillInfo::new("Final Appraisal", Buff),
    "waste not ii" => SkillInfo::new("Waste Not II", Buff),
    "careful observation" => SkillInfo::new("Careful Observation", Buff),
    "manipulation" => SkillInfo::new("Manipulation", Buff),
    "reflect" => SkillInfo::new("Reflect", Buff),
};
