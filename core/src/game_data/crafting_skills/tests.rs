use super::*;

#[test]
fn test_keys_are_lowercased_canonical_names() {
    for (key, info) in CRAFTING_SKILLS.entries() {
        assert_eq!(*key, info.name.to_lowercase());
    }
}

#[test]
fn test_dataset_counts() {
    let actions = CRAFTING_SKILLS
        .values()
        .filter(|s| s.category == SkillCategory::Action)
        .count();
    let buffs = CRAFTING_SKILLS
        .values()
        .filter(|s| s.category == SkillCategory::Buff)
        .count();
    assert_eq!(actions, 20);
    assert_eq!(buffs, 13);
}

#[test]
fn test_lookup_is_case_insensitive() {
    let info = lookup_skill("Byregot's Blessing").unwrap();
    assert_eq!(info.name, "Byregot's Blessing");
    assert!(is_known_skill("TRAINED EYE"));
    assert!(!is_known_skill("royal touch"));
}

#[test]
fn test_wait_times_by_category() {
    assert_eq!(SkillCategory::Action.wait_secs(), 3);
    assert_eq!(SkillCategory::Buff.wait_secs(), 2);
    assert_eq!(lookup_skill("groundwork").unwrap().wait_secs(), 3);
    assert_eq!(lookup_skill("manipulation").unwrap().wait_secs(), 2);
}
