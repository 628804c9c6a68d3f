use super::*;

fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

fn defaults() -> MacroConfig {
    MacroConfig::default()
}

#[test]
fn test_known_skills_become_macro_lines() {
    let table = SkillTable::standard();
    let input = lines(&["Muscle Memory", "Inner Quiet", "Waste Not", "Groundwork"]);

    let result = build_macro(&input, &table, &defaults()).unwrap();

    assert_eq!(
        result,
        [
            "/ac \"Muscle Memory\" <wait.3>",
            "/ac \"Inner Quiet\" <wait.2>",
            "/ac \"Waste Not\" <wait.2>",
            "/ac \"Groundwork\"",
        ]
    );
}

#[test]
fn test_matching_ignores_case_and_whitespace() {
    let table = SkillTable::standard();
    let input = lines(&["  bAsIc TOUCH  ", "groundwork"]);

    let result = build_macro(&input, &table, &defaults()).unwrap();

    assert_eq!(result[0], "/ac \"Basic Touch\" <wait.3>");
    assert_eq!(result[1], "/ac \"Groundwork\"");
}

#[test]
fn test_unresolved_lines_pass_through_verbatim() {
    let table = SkillTable::standard();
    let input = lines(&["groundwork", "# opener", "  Not A Skill  ", ""]);

    let result = build_macro(&input, &table, &defaults()).unwrap();

    assert_eq!(result[1], "# opener");
    assert_eq!(result[2], "  Not A Skill  ");
    assert_eq!(result[3], "");
}

#[test]
fn test_unique_prefix_autocompletes() {
    let table = SkillTable::standard();
    let input = lines(&["byregot", "groundwork"]);

    let result = build_macro(&input, &table, &defaults()).unwrap();

    assert_eq!(result[0], "/ac \"Byregot's Blessing\" <wait.3>");
}

#[test]
fn test_ambiguous_prefix_passes_through() {
    let table = SkillTable::standard();
    let input = lines(&["waste", "groundwork"]);

    let result = build_macro(&input, &table, &defaults()).unwrap();

    assert_eq!(result[0], "waste");
}

#[test]
fn test_autocomplete_can_be_disabled() {
    let table = SkillTable::standard();
    let config = MacroConfig {
        autocomplete: false,
        ..MacroConfig::default()
    };
    let input = lines(&["byregot", "groundwork"]);

    let result = build_macro(&input, &table, &config).unwrap();

    assert_eq!(result[0], "byregot");
    assert_eq!(result[1], "/ac \"Groundwork\"");
}

#[test]
fn test_wait_last_line_keeps_annotation() {
    let table = SkillTable::standard();
    let config = MacroConfig {
        wait_last_line: true,
        ..MacroConfig::default()
    };
    let input = lines(&["basic touch", "groundwork"]);

    let result = build_macro(&input, &table, &config).unwrap();

    assert_eq!(result[1], "/ac \"Groundwork\" <wait.3>");
}

#[test]
fn test_last_line_without_wait_is_untouched() {
    let table = SkillTable::standard();
    let input = lines(&["basic touch", "# closing comment"]);

    let result = build_macro(&input, &table, &defaults()).unwrap();

    assert_eq!(result[1], "# closing comment");
}

#[test]
fn test_preformatted_last_line_is_also_stripped() {
    // The strip pass looks at text, not provenance: a pass-through final
    // line that already carries a wait annotation loses it too.
    let table = SkillTable::standard();
    let input = lines(&["basic touch", "/ac \"Custom\" <wait.3>"]);

    let result = build_macro(&input, &table, &defaults()).unwrap();

    assert_eq!(result[1], "/ac \"Custom\"");
}

#[test]
fn test_empty_input_is_an_error() {
    let table = SkillTable::standard();
    let result = build_macro(&[], &table, &defaults());
    assert!(matches!(result, Err(MacroError::EmptyInput)));
}
