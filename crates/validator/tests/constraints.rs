//! Message table for every built-in constraint, declared both typed and by name.

use okay_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn messages(field: &Field) -> Vec<String> {
    field.errors().expect("built-in constraints are well formed").into_messages()
}

#[rstest]
#[case::required(Field::new("", "name").required(), "name is required")]
#[case::min_length(Field::new("ab", "name").min_length(3), "minimum length for name is 3")]
#[case::max_length(Field::new("abcd", "name").max_length(3), "maximum length for name is 3")]
#[case::is_email(Field::new("a@b", "name").is_email(), "invalid e-mail")]
#[case::is(Field::new("Yes", "name").is("yes"), "name must be 'yes'")]
#[case::contains(Field::new("ab", "name").contains("@"), "name must contain '@'")]
#[case::starts_with(Field::new("ftp://x", "name").starts_with("http"), "name must start with 'http'")]
#[case::does_not_start_with(Field::new("_x", "name").does_not_start_with("_"), "name must not start with '_'")]
#[case::ends_with(Field::new("x.org", "name").ends_with(".com"), "name must end with '.com'")]
#[case::does_not_end_with(Field::new("x.edu", "name").does_not_end_with(".edu"), "name must not end with '.edu'")]
#[case::is_ipv4(Field::new("::1", "name").is_ipv4(), "name must be a valid IPv4 address")]
#[case::is_ipv6(Field::new("127.0.0.1", "name").is_ipv6(), "name must be a valid IPv6 address")]
#[case::is_alpha(Field::new("ab1", "name").is_alpha(), "name must not contain non-alpha characters ('1')")]
#[case::is_alphanumeric(Field::new("ab-1", "name").is_alphanumeric(), "name must not contain non-alphanumeric characters ('-')")]
#[case::is_only_digits(Field::new("12a3b", "name").is_only_digits(), "name must not contain non-numeric characters ('a')")]
fn failing_value_produces_one_message(#[case] field: Field, #[case] expected: &str) {
    assert_eq!(messages(&field), vec![expected.to_owned()]);
}

#[rstest]
#[case::required(Field::new("a", "name").required())]
#[case::min_length(Field::new("abc", "name").min_length(3))]
#[case::max_length(Field::new("abc", "name").max_length(3))]
#[case::is_email(Field::new("a@b.com", "name").is_email())]
#[case::is(Field::new("yes", "name").is("yes"))]
#[case::contains(Field::new("a@b", "name").contains("@"))]
#[case::starts_with(Field::new("https://x", "name").starts_with("http"))]
#[case::does_not_start_with(Field::new("x_", "name").does_not_start_with("_"))]
#[case::ends_with(Field::new("x.com", "name").ends_with(".com"))]
#[case::does_not_end_with(Field::new("x.edu.au", "name").does_not_end_with(".edu"))]
#[case::is_ipv4(Field::new("192.168.1.1", "name").is_ipv4())]
#[case::is_ipv6(Field::new("2001:db8::1", "name").is_ipv6())]
#[case::is_alpha(Field::new("abcXYZ", "name").is_alpha())]
#[case::is_alphanumeric(Field::new("abc123", "name").is_alphanumeric())]
#[case::is_only_digits(Field::new("0123", "name").is_only_digits())]
fn passing_value_produces_nothing(#[case] field: Field) {
    assert!(messages(&field).is_empty());
}

#[rstest]
#[case("minlength", vec![Param::Length(3)], "ab", "minimum length for name is 3")]
#[case("maxlength", vec![Param::Length(1)], "ab", "maximum length for name is 1")]
#[case("is", vec![Param::from("x")], "y", "name must be 'x'")]
#[case("doesnotendwith", vec![Param::from(".edu")], "a.edu", "name must not end with '.edu'")]
#[case("isonlydigits", vec![], "1x", "name must not contain non-numeric characters ('x')")]
fn named_builtin_matches_typed(
    #[case] name: &'static str,
    #[case] params: Vec<Param>,
    #[case] value: &str,
    #[case] expected: &str,
) {
    let field = Field::new(value, "name").named(name, params);
    assert_eq!(messages(&field), vec![expected.to_owned()]);
}

#[rstest]
#[case("minlength", vec![], ConstraintError::missing("minlength", "length"))]
#[case("contains", vec![], ConstraintError::missing("contains", "string"))]
#[case("startswith", vec![Param::Length(2)], ConstraintError::parameter_type("startswith", 0, "string"))]
#[case("maxlength", vec![Param::from("2")], ConstraintError::parameter_type("maxlength", 0, "length"))]
#[case("isurl", vec![], ConstraintError::unknown("isurl"))]
fn misconfigured_constraint_is_an_error(
    #[case] name: &'static str,
    #[case] params: Vec<Param>,
    #[case] expected: ConstraintError,
) {
    let incomplete = Field::new("value", "name").named(name, params).errors().unwrap_err();
    assert_eq!(incomplete.source, expected);
}

#[test]
fn character_classes_are_ascii_only() {
    let field = Field::new("héllo", "word").is_alpha();
    assert_eq!(
        messages(&field),
        vec!["word must not contain non-alpha characters ('é')".to_owned()]
    );
}

#[test]
fn empty_value_passes_character_classes() {
    let field = Field::new("", "x").is_alpha().is_alphanumeric().is_only_digits();
    assert!(messages(&field).is_empty());
}

#[test]
fn any_ip_family_accepts_either_literal() {
    let evaluator =
        Evaluator::default().with_settings(Settings::default().with_ip_family(IpFamilyCheck::Any));

    let v6_as_v4 = Field::new("::1", "addr").is_ipv4();
    let v4_as_v6 = Field::new("10.0.0.1", "addr").is_ipv6();
    assert!(v6_as_v4.errors_with(&evaluator).unwrap().is_empty());
    assert!(v4_as_v6.errors_with(&evaluator).unwrap().is_empty());

    let garbage = Field::new("not-an-ip", "addr").is_ipv4();
    assert_eq!(
        garbage.errors_with(&evaluator).unwrap().messages(),
        vec!["addr must be a valid IPv4 address"]
    );
}

#[test]
fn errors_carry_code_field_and_params() {
    let errors = Field::new("ab", "username").min_length(3).errors().unwrap();
    let error = &errors.errors()[0];

    assert_eq!(error.code, "min_length");
    assert_eq!(error.field.as_deref(), Some("username"));
    assert_eq!(error.param("min"), Some("3"));
    assert_eq!(error.param("actual"), Some("2"));
}

#[test]
fn results_serialize_to_json() {
    let errors = Field::new("", "username").required().errors().unwrap();
    let json = serde_json::to_value(&errors).unwrap();

    assert_eq!(json[0]["code"], "required");
    assert_eq!(json[0]["message"], "username is required");
    assert_eq!(json[0]["field"], "username");
}

#[rstest]
#[case::junk_display_name("@@@ <a@b.com>", false)]
#[case::comma_in_display_name("a,b <a@b.com>", false)]
#[case::quoted_display_name("\"John Doe\" <j@x.com>", true)]
#[case::leading_space(" a@b.com", true)]
#[case::trailing_space("a@b.com ", true)]
#[case::utf8_local_part("jos\u{e9}@example.com", true)]
fn email_follows_address_syntax(#[case] value: &str, #[case] valid: bool) {
    let field = Field::new(value, "email").is_email();
    let expected: Vec<String> = if valid { vec![] } else { vec!["invalid e-mail".to_owned()] };
    assert_eq!(messages(&field), expected);
}

#[test]
fn length_counts_bytes_by_default() {
    let field = Field::new("h\u{e9}llo", "w").max_length(5);
    assert_eq!(messages(&field), vec!["maximum length for w is 5".to_owned()]);

    let chars =
        Evaluator::default().with_settings(Settings::default().with_length_mode(LengthMode::Chars));
    assert!(field.errors_with(&chars).unwrap().is_empty());
}
