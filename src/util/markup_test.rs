use super::*;

#[test]
fn bold_and_newline_are_rewritten_in_order() {
    assert_eq!(format_bot_markup("**Hi** there\nAgain"), "<strong>Hi</strong> there<br>Again");
}

#[test]
fn plain_text_passes_through() {
    assert_eq!(format_bot_markup("Hello!"), "Hello!");
}

#[test]
fn bold_match_is_non_greedy() {
    assert_eq!(
        format_bot_markup("**Latte** or **Mocha**"),
        "<strong>Latte</strong> or <strong>Mocha</strong>"
    );
}

#[test]
fn unpaired_delimiters_are_left_alone() {
    assert_eq!(format_bot_markup("price **RM 10"), "price **RM 10");
    assert_eq!(format_bot_markup("****"), "****");
}

#[test]
fn bold_does_not_span_lines() {
    assert_eq!(format_bot_markup("**open\nclose**"), "**open<br>close**");
}

#[test]
fn existing_markup_is_not_escaped() {
    assert_eq!(format_bot_markup("<em>hi</em>"), "<em>hi</em>");
}

#[test]
fn empty_input_yields_empty_markup() {
    assert_eq!(format_bot_markup(""), "");
}
