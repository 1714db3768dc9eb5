use std::fs::{self};

use pretty_assertions::assert_eq;
use romana::{
    Options,
    error::{EvalError, ParseError, RuntimeError},
    evaluate, evaluate_with,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (expression, expected) in extract_examples(&content) {
            count += 1;
            let actual = match evaluate(&expression) {
                Ok(numeral) => numeral,
                Err(e) => format!("error: {e}"),
            };
            assert_eq!(actual, expected, "example `{expression}` in {path:?}");
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

/// Collects `expression => result` lines from ```roman blocks.
fn extract_examples(content: &str) -> Vec<(String, String)> {
    let mut examples = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```roman") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && let Some((expression, expected)) = line.split_once("=>") {
            examples.push((expression.trim().to_string(), expected.trim().to_string()));
        }
    }

    examples
}

fn assert_result(src: &str, expected: &str) {
    match evaluate(src) {
        Ok(numeral) => assert_eq!(numeral, expected, "expression `{src}`"),
        Err(e) => panic!("Expression `{src}` failed: {e}"),
    }
}

fn assert_failure(src: &str, expected: impl Into<EvalError>) {
    let expected: EvalError = expected.into();
    match evaluate(src) {
        Ok(numeral) => panic!("Expression `{src}` succeeded with {numeral} but was expected to fail"),
        Err(e) => assert_eq!(e, expected, "expression `{src}`"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_result("II+III", "V");
    assert_result("X-IV", "VI");
    assert_result("VII*VI", "XLII");
    assert_result("C/IV", "XXV");
    assert_result("II-V", "-III");
}

#[test]
fn operator_precedence_and_associativity() {
    assert_result("II+III*II", "VIII");
    assert_result("X-II-III", "V");
    assert_result("XX/II/V", "II");
    assert_result("II*III+IV*V", "XXVI");
    assert_result("(II+III)*II", "X");
    assert_result("((II))", "II");
}

#[test]
fn floor_division() {
    assert_result("X/III", "III");
    assert_result("-X/III", "-IV");
    assert_result("X/-III", "-IV");
    assert_result("-X/-III", "III");
    assert_result("I/-II", "-I");
    assert_result("-IX/III", "-III");
    assert_result("Z/-V", "Z");
}

#[test]
fn unary_minus() {
    assert_result("-V+II", "-III");
    assert_result("X+-II", "VIII");
    assert_result("X--II", "XII");
    assert_result("X*-II", "-XX");
}

#[test]
fn unary_minus_before_bracket_is_dropped() {
    assert_result("-(II+III)", "V");
    assert_result("X*-(II-V)", "-XXX");
    assert_result("-(II)*-(III)", "VI");
    assert_result("-()", "Z");
}

#[test]
fn minus_after_closing_bracket_is_read_as_sign() {
    assert_failure("(II)-III", RuntimeError::MalformedExpression);
}

#[test]
fn minus_after_opening_bracket_is_binary() {
    assert_failure("(-V)", RuntimeError::MalformedExpression);
    assert_result("(Z-V)", "-V");
}

#[test]
fn zero_sentinel_and_empty_input() {
    assert_result("", "Z");
    assert_result("  \t ", "Z");
    assert_result("()", "Z");
    assert_result("Z", "Z");
    assert_result("V-V", "Z");
    assert_result("Z+III", "III");
}

#[test]
fn whitespace_is_ignored() {
    assert_result(" II + III * II ", "VIII");
    assert_result("II III", "V");
    assert_result("( X / III )", "III");
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("X/Z", RuntimeError::DivisionByZero);
    assert_failure("X/(V-V)", RuntimeError::DivisionByZero);
}

#[test]
fn bracket_mismatch_is_error() {
    assert_failure("(II+III", ParseError::BracketMismatch { position: 1 });
    assert_failure("II+III)", ParseError::BracketMismatch { position: 7 });
    assert_failure("(II))", ParseError::BracketMismatch { position: 5 });
}

#[test]
fn positions_ignore_whitespace() {
    assert_failure("  ( II", ParseError::BracketMismatch { position: 1 });
    assert_failure("II + III )", ParseError::BracketMismatch { position: 7 });
    assert_eq!(evaluate_with("II + IIX", &Options::strict()).unwrap_err(),
               EvalError::Parse(ParseError::InvalidNumeral { numeral:  "IIX".to_string(),
                                                             position: 4, }));
}

#[test]
fn bad_symbol_reports_position() {
    assert_failure("II+A", ParseError::BadSymbol { position: 4 });
    assert_failure("II + A", ParseError::BadSymbol { position: 4 });
    assert_failure(" II\t+\n A ", ParseError::BadSymbol { position: 4 });
    assert_failure("ii", ParseError::BadSymbol { position: 1 });
    assert_failure("II+é", ParseError::BadSymbol { position: 4 });
    assert_failure("é+é", ParseError::BadSymbol { position: 1 });
}

#[test]
fn errors_surface_in_scan_order() {
    assert_failure("II)+A", ParseError::BracketMismatch { position: 3 });
    assert_failure("A+II)", ParseError::BadSymbol { position: 1 });
}

#[test]
fn malformed_expression_is_error() {
    assert_failure("II+", RuntimeError::MalformedExpression);
    assert_failure("+II", RuntimeError::MalformedExpression);
    assert_failure("II(III)", RuntimeError::MalformedExpression);
    assert_failure("*", RuntimeError::MalformedExpression);
    assert_failure("--V", RuntimeError::MalformedExpression);
}

#[test]
fn roman_overflow_is_error() {
    assert_failure("MMM+M", RuntimeError::RomanOverflow { value: 4000 });
    assert_failure("-MMM-M", RuntimeError::RomanOverflow { value: -4000 });
    assert_result("MMM+CMXCIX", "MMMCMXCIX");
}

#[test]
fn intermediate_overflow_is_error() {
    let factor = "MMMCMXCIX";
    let five = [factor; 5].join("*");
    let six = [factor; 6].join("*");

    assert!(matches!(evaluate(&five),
                     Err(EvalError::Runtime(RuntimeError::RomanOverflow { .. }))));
    assert_failure(&six, RuntimeError::Overflow);
}

#[test]
fn permissive_numerals_are_accepted_by_default() {
    assert_result("IIX", "X");
    assert_result("VX", "V");
    assert_result("XZ", "X");
    assert_result("MMMM-I", "MMMCMXCIX");
}

#[test]
fn strict_numerals_reject_non_canonical_runs() {
    let strict = Options::strict();

    assert_eq!(evaluate_with("IV+IX", &strict).unwrap(), "XIII");
    assert_eq!(evaluate_with("-Z+I", &strict).unwrap(), "I");
    assert_eq!(evaluate_with("II+IIX", &strict).unwrap_err(),
               EvalError::Parse(ParseError::InvalidNumeral { numeral:  "IIX".to_string(),
                                                             position: 4, }));
    assert!(evaluate_with("VX", &strict).is_err());
    assert!(evaluate_with("XZ", &strict).is_err());
    assert!(evaluate_with("MMMM", &strict).is_err());
}

#[test]
fn error_messages() {
    let message = |src: &str| evaluate(src).unwrap_err().to_string();

    assert_eq!(message("II+A"), "Bad symbol on position 4");
    assert_eq!(message("(II"), "Invalid bracket sequence in expression");
    assert_eq!(message("II+"), "Invalid expression format");
    assert_eq!(message("I/Z"), "Division by zero");
    assert_eq!(message("MMM*II"), "Roman number overflow");
}
