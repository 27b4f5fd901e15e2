//! Tests of the validated input prompter through its reader-generic body.

use bikestats::cli::prompt::Prompter;
use std::io::Cursor;

const TEMPLATE: &str = "{} is not a valid input. Please try again.";

#[test]
fn returns_normalized_member_value() {
    let prompter = Prompter::new(TEMPLATE);
    let mut input = Cursor::new("ChIcAgO\n");

    let answer = prompter
        .ask_from(&mut input, &["chicago", "new york city"], "city?")
        .expect("valid answer");
    assert_eq!(answer, "chicago");
}

#[test]
fn retries_until_the_answer_is_allowed() {
    let prompter = Prompter::new(TEMPLATE);
    let mut input = Cursor::new("denver\nboston\nwashington\n");

    let answer = prompter
        .ask_from(&mut input, &["chicago", "washington"], "city?")
        .expect("eventually valid");
    assert_eq!(answer, "washington");
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let prompter = Prompter::new(TEMPLATE);
    let mut input = Cursor::new("  yes \n");

    let answer = prompter
        .ask_from(&mut input, &["yes", "no"], "more?")
        .expect("valid answer");
    assert_eq!(answer, "yes");
}

#[test]
fn exhausted_input_is_an_error() {
    let prompter = Prompter::new(TEMPLATE);
    let mut input = Cursor::new("denver\n");

    let result = prompter.ask_from(&mut input, &["chicago"], "city?");
    assert!(result.is_err());
}
