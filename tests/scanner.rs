use postfix_calc::interpreter::scanner::Scanner;

fn read_all_numbers(src: &str) -> Option<f64> {
    Scanner::new(src).read_number()
}

#[test]
fn reads_integer_and_fractional_literals() {
    assert_eq!(read_all_numbers("42"), Some(42.0));
    assert_eq!(read_all_numbers("4.25"), Some(4.25));
    assert_eq!(read_all_numbers("7."), Some(7.0));
    assert_eq!(read_all_numbers("007"), Some(7.0));
}

#[test]
fn reads_exponents_with_optional_sign() {
    assert_eq!(read_all_numbers("1e3"), Some(1000.0));
    assert_eq!(read_all_numbers("1E+3"), Some(1000.0));
    assert_eq!(read_all_numbers("25e-2"), Some(0.25));
    assert_eq!(read_all_numbers("2.e1"), Some(20.0));
}

#[test]
fn exponent_marker_without_digits_is_left_alone() {
    let mut scanner = Scanner::new("12e+x");
    assert_eq!(scanner.read_number(), Some(12.0));
    assert_eq!(scanner.offset(), 2);
    assert_eq!(scanner.current(), Some('e'));

    let mut scanner = Scanner::new("3E");
    assert_eq!(scanner.read_number(), Some(3.0));
    assert_eq!(scanner.current(), Some('E'));
}

#[test]
fn number_does_not_consume_sign_or_second_dot() {
    assert_eq!(read_all_numbers("-1"), None);
    assert_eq!(read_all_numbers(".5"), None);

    let mut scanner = Scanner::new("1.2.3");
    assert_eq!(scanner.read_number(), Some(1.2));
    assert_eq!(scanner.current(), Some('.'));
}

#[test]
fn number_skips_trailing_whitespace_but_name_does_not() {
    let mut scanner = Scanner::new("12 \t x_1 ;");
    assert_eq!(scanner.read_number(), Some(12.0));
    assert_eq!(scanner.offset(), 5);
    assert_eq!(scanner.read_name(), Some("x_1"));
    assert_eq!(scanner.current(), Some(' '));
    scanner.skip_whitespace();
    assert_eq!(scanner.current(), Some(';'));
}

#[test]
fn numeral_runs_straight_into_a_name() {
    let mut scanner = Scanner::new("12asdf");
    assert_eq!(scanner.read_number(), Some(12.0));
    assert_eq!(scanner.read_name(), Some("asdf"));
    assert_eq!(scanner.current(), None);
}

#[test]
fn names_start_with_letter_or_underscore() {
    assert_eq!(Scanner::new("_tmp2+").read_name(), Some("_tmp2"));
    assert_eq!(Scanner::new("2x").read_name(), None);
    assert_eq!(Scanner::new("").read_name(), None);
}

#[test]
fn advance_steps_over_one_character_and_whitespace() {
    let mut scanner = Scanner::new("+  \n-");
    scanner.advance_after_token();
    assert_eq!(scanner.current(), Some('-'));
    assert_eq!(scanner.offset(), 4);
    scanner.advance_after_token();
    assert_eq!(scanner.current(), None);
    scanner.advance_after_token();
    assert_eq!(scanner.offset(), 5);
}

#[test]
fn multibyte_characters_advance_by_their_width() {
    let mut scanner = Scanner::new("π1");
    assert_eq!(scanner.current(), Some('π'));
    scanner.advance_after_token();
    assert_eq!(scanner.offset(), 'π'.len_utf8());
    assert_eq!(scanner.read_number(), Some(1.0));
}
