use paste_indent::{IndentOptions, reindent};
use pretty_assertions::assert_eq;

const SPACES_4: IndentOptions = IndentOptions {
    insert_spaces: true,
    tab_size: 4,
};
const TABS_4: IndentOptions = IndentOptions {
    insert_spaces: false,
    tab_size: 4,
};

fn lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

#[test]
fn test_single_line_unchanged() {
    assert_eq!(reindent("hello world", 4, &SPACES_4), "hello world");
    assert_eq!(reindent("    indented", 0, &TABS_4), "    indented");
}

#[test]
fn test_empty_string() {
    assert_eq!(reindent("", 4, &SPACES_4), "");
    assert_eq!(reindent("", 0, &TABS_4), "");
}

#[test]
fn test_flush_block_at_column_zero_is_untouched() {
    let text = "function foo() {\n    return 1;\n}";
    assert_eq!(reindent(text, 0, &SPACES_4), text);
}

#[test]
fn test_no_op_fast_path_keeps_mixed_whitespace() {
    // Baseline 0 and offset 0: nothing is normalized, not even the tab or the stray blank.
    let text = "a\n\t  b\n  \nc";
    assert_eq!(reindent(text, 0, &SPACES_4), text);
}

#[test]
fn test_shift_to_offset_with_spaces() {
    let result = reindent("if (true) {\n    x = 1;\n}", 8, &SPACES_4);
    assert_eq!(
        lines(&result),
        vec!["if (true) {", "            x = 1;", "        }"]
    );
}

#[test]
fn test_shift_to_offset_with_tabs() {
    let result = reindent("if (true) {\n\tx = 1;\n}", 2, &TABS_4);
    assert_eq!(lines(&result), vec!["if (true) {", "\t\t\tx = 1;", "\t\t}"]);
}

#[test]
fn test_blank_lines_carry_no_indentation() {
    let result = reindent("a\n\nb", 4, &SPACES_4);
    assert_eq!(lines(&result), vec!["a", "", "    b"]);
}

#[test]
fn test_whitespace_only_lines_are_stripped() {
    let result = reindent("fn f() {\n    a();\n   \t \n    b();\n}", 4, &SPACES_4);
    assert_eq!(
        lines(&result),
        vec!["fn f() {", "        a();", "", "        b();", "    }"]
    );
}

#[test]
fn test_tabs_expand_in_space_mode() {
    let result = reindent("first\n\tx", 2, &SPACES_4);
    assert_eq!(lines(&result), vec!["first", "  x"]);
}

#[test]
fn test_spaces_are_discounted_in_tab_mode() {
    let result = reindent("first\n    x", 1, &TABS_4);
    assert_eq!(lines(&result), vec!["first", "\tx"]);
}

#[test]
fn test_tab_size_controls_expansion() {
    let options = IndentOptions::spaces(2);
    let result = reindent("head\n\tone\n\t\ttwo", 0, &options);
    assert_eq!(lines(&result), vec!["head", "one", "  two"]);
}

#[test]
fn test_relative_indentation_is_preserved() {
    let text = "function foo() {\n    if (true) {\n        return 1;\n    }\n}";
    let result = reindent(text, 4, &SPACES_4);
    assert_eq!(
        lines(&result),
        vec![
            "function foo() {",
            "        if (true) {",
            "            return 1;",
            "        }",
            "    }",
        ]
    );
}

#[test]
fn test_rebase_indented_source() {
    let result = reindent("outer\n        inner1\n            inner2", 2, &SPACES_4);
    assert_eq!(lines(&result), vec!["outer", "  inner1", "      inner2"]);
}

#[test]
fn test_rebase_to_column_zero() {
    let result = reindent("x\n        a\n            b\n        c", 0, &SPACES_4);
    assert_eq!(lines(&result), vec!["x", "a", "    b", "c"]);
}

#[test]
fn test_first_line_indentation_is_ignored_for_baseline() {
    // The first line has less indentation than the rest, yet it does not lower the baseline.
    let result = reindent("  a\n        b\n            c", 1, &SPACES_4);
    assert_eq!(lines(&result), vec!["  a", " b", "     c"]);
}

#[test]
fn test_only_whitespace_lines() {
    let result = reindent("   \n   \n   ", 4, &SPACES_4);
    assert_eq!(lines(&result), vec!["   ", "", ""]);
}

#[test]
fn test_only_whitespace_lines_at_column_zero_still_strip() {
    // With every later line blank the baseline is undefined, so the fast path does not apply.
    assert_eq!(reindent("a\n  \n\t", 0, &SPACES_4), "a\n\n");
}

#[test]
fn test_trailing_newline_becomes_empty_last_line() {
    let result = reindent("a\n    b\n", 2, &SPACES_4);
    assert_eq!(lines(&result), vec!["a", "  b", ""]);
}

#[test]
fn test_mixed_input_produces_uniform_spaces() {
    let result = reindent("x\n \t y\n\t\tz", 0, &SPACES_4);
    assert_eq!(lines(&result), vec!["x", "y", "  z"]);
}

#[test]
fn test_mixed_input_produces_uniform_tabs() {
    let result = reindent("x\n  \t  y\n\t \tz", 1, &TABS_4);
    assert_eq!(lines(&result), vec!["x", "\ty", "\t\tz"]);
}

#[test]
fn test_crlf_lines_keep_their_carriage_returns() {
    let result = reindent("a {\r\n    b\r\n}", 4, &SPACES_4);
    assert_eq!(lines(&result), vec!["a {\r", "        b\r", "    }"]);
}

#[test]
fn test_crlf_blank_line_is_stripped() {
    let result = reindent("a\r\n\r\n  b", 2, &SPACES_4);
    assert_eq!(lines(&result), vec!["a\r", "", "  b"]);
}

#[test]
fn test_non_ascii_body_is_preserved() {
    let result = reindent("列表:\n    - 苹果 🍎\n        - 香蕉", 2, &SPACES_4);
    assert_eq!(lines(&result), vec!["列表:", "  - 苹果 🍎", "      - 香蕉"]);
}

#[test]
fn test_leading_bom_is_indentation() {
    assert_eq!(reindent("a\n\u{feff}  b", 2, &SPACES_4), "a\n  b");
    assert_eq!(reindent("a\n\u{feff}\n    b", 0, &SPACES_4), "a\n\nb");
}

#[test]
fn test_next_line_char_is_body_text() {
    // U+0085 ends the leading run, so the block is already flush.
    let block = "a\n\u{85}b\n  c";
    assert_eq!(reindent(block, 0, &SPACES_4), block);
    assert_eq!(reindent(block, 2, &SPACES_4), "a\n  \u{85}b\n    c");
}

#[test]
fn test_huge_offset_over_blank_lines() {
    assert_eq!(reindent("a\n  \n", usize::MAX, &SPACES_4), "a\n\n");
    assert_eq!(reindent("a\n\t\n", usize::MAX, &TABS_4), "a\n\n");
}
