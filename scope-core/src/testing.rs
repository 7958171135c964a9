//! Test helpers for crates that define tags.
//!
//! Available during tests or with the `testing` feature.

/// Assert that rendered text matches, reporting differing lines.
///
/// Whitespace is made visible in the report (`·` for spaces, `→` for tabs)
/// since indentation mistakes are the usual cause of a mismatch.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected == actual {
        return;
    }

    let expected_lines: Vec<&str> = expected.split('\n').collect();
    let actual_lines: Vec<&str> = actual.split('\n').collect();
    let mut diff = String::new();

    for i in 0..expected_lines.len().max(actual_lines.len()) {
        let exp = expected_lines.get(i).copied();
        let act = actual_lines.get(i).copied();
        if exp != act {
            diff.push_str(&format!("line {}:\n", i + 1));
            diff.push_str(&format!("  expected: {}\n", visible(exp)));
            diff.push_str(&format!("  actual:   {}\n", visible(act)));
        }
    }

    panic!("rendered content mismatch:\n{diff}");
}

fn visible(line: Option<&str>) -> String {
    match line {
        Some(line) => line.replace(' ', "·").replace('\t', "→"),
        None => "<missing>".to_string(),
    }
}
