mod crafting_skills;

pub use crafting_skills::{
    CRAFTING_SKILLS, SkillCategory, SkillInfo, is_known_skill, lookup_skill,
};
