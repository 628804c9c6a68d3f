use super::*;

fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_convert_short_rotation() {
    let table = SkillTable::standard();
    let input = lines(&["Muscle Memory", "Inner Quiet", "Waste Not", "Groundwork"]);

    let result = convert(&input, &table, &MacroConfig::default()).unwrap();

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
fn test_convert_long_rotation_paginates() {
    let table = SkillTable::standard();
    let input = lines(&["basic touch"; 20]);

    let result = convert(&input, &table, &MacroConfig::default()).unwrap();

    assert_eq!(result.len(), 22);
    assert_eq!(result[0], "/ac \"Basic Touch\" <wait.3>");
    assert_eq!(result[14], "/echo Page 1 done <se.1>");
    assert_eq!(result[15], "");
    // The wait strip ran before pagination, so the final content line is bare.
    assert_eq!(result[21], "/ac \"Basic Touch\"");
}

#[test]
fn test_convert_propagates_builder_errors() {
    let table = SkillTable::standard();
    let result = convert(&[], &table, &MacroConfig::default());
    assert!(matches!(result, Err(MacroError::EmptyInput)));
}
