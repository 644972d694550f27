use super::*;

/// One unit per character, one unit per row.
struct UnitMetrics;

impl FontMetrics for UnitMetrics {
    fn measure(&self, text: &str) -> u32 {
        text.chars().count() as u32
    }

    fn line_height(&self) -> u32 {
        1
    }
}

fn tokens(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

#[test]
fn five_letters_with_budget_three() {
    let lines = wrap_lines("A B C D E", 3, &UnitMetrics);
    assert_eq!(lines, vec!["A B", "C D", "E"]);
}

#[test]
fn fitting_caption_is_a_single_trimmed_line() {
    let caption = "  The Horsehead Nebula  ";
    let lines = wrap_lines(caption, 100, &UnitMetrics);
    assert_eq!(lines, vec!["The Horsehead Nebula"]);

    let exact = "abc def";
    assert_eq!(wrap_lines(exact, 7, &UnitMetrics), vec![exact]);
}

#[test]
fn empty_and_blank_captions_produce_no_lines() {
    assert!(wrap_lines("", 10, &UnitMetrics).is_empty());
    assert!(wrap_lines(" \t\n ", 10, &UnitMetrics).is_empty());
}

#[test]
fn long_word_is_never_split() {
    let caption = "a supercalifragilistic b";
    let lines = wrap_lines(caption, 4, &UnitMetrics);
    assert!(lines.iter().any(|l| l == "supercalifragilistic"));
    for line in &lines {
        for word in tokens(line) {
            assert!(tokens(caption).contains(&word));
        }
    }
}

#[test]
fn whitespace_runs_collapse_between_words() {
    let lines = wrap_lines("one\t\ttwo   three\nfour five six", 8, &UnitMetrics);
    let joined: Vec<&str> = lines.iter().flat_map(|l| tokens(l)).collect();
    assert_eq!(joined, vec!["one", "two", "three", "four", "five", "six"]);
    for line in &lines {
        assert!(!line.contains("  "));
        assert_eq!(line.trim(), line);
    }
}

#[test]
fn zero_width_still_emits_every_word() {
    let lines = wrap_lines("x y z", 0, &UnitMetrics);
    assert_eq!(lines.iter().flat_map(|l| tokens(l)).count(), 3);
}

#[test]
fn char_budget_rounds_row_estimate() {
    assert_eq!(char_budget(9, 9, 3), 3);
    // 10 / 4 = 2.5 rounds to 3 rows.
    assert_eq!(char_budget(30, 10, 4), 10);
    // 11 / 10 rounds to 1 row, raised to 2.
    assert_eq!(char_budget(11, 11, 10), 5);
    assert_eq!(char_budget(5, 5, 0), 1);
}

#[test]
fn greedy_lines_with_zero_budget_puts_each_word_alone() {
    assert_eq!(greedy_lines(["a", "b", "c"], 0), vec!["a", "b", "c"]);
}

#[test]
fn greedy_lines_skips_empty_tokens() {
    assert_eq!(greedy_lines(["", "a", "", "b"], 10), vec!["a b"]);
    assert!(greedy_lines([""; 3], 10).is_empty());
}
