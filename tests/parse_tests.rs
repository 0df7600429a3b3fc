use chemlog::core::parse_identifier;
use chemlog::errors::AppError;

#[test]
fn short_netid_is_returned_unchanged() {
    assert_eq!(parse_identifier("ab1234").unwrap(), "ab1234");
    assert_eq!(parse_identifier("abc123").unwrap(), "abc123");
    assert_eq!(parse_identifier("xy9").unwrap(), "xy9");
}

#[test]
fn netid_is_trimmed_before_matching() {
    assert_eq!(parse_identifier("  cm213 ").unwrap(), "cm213");
    assert_eq!(parse_identifier("ab1234\n").unwrap(), "ab1234");
}

#[test]
fn card_track_extracts_fixed_width_field() {
    // 26 chars, offsets [8, 15) spell out the ID
    let raw = "ABCDEFGH1234567IJKLMNOPQRS";
    assert_eq!(raw.len(), 26);
    assert_eq!(parse_identifier(raw).unwrap(), "1234567");

    // 17 chars is already long enough for the card branch
    let raw = "00000000654321098";
    assert_eq!(raw.len(), 17);
    assert_eq!(parse_identifier(raw).unwrap(), "6543210");
}

#[test]
fn very_short_non_netid_is_rejected() {
    assert!(matches!(
        parse_identifier("x1"),
        Err(AppError::UnreadableSwipe)
    ));
    assert!(matches!(
        parse_identifier("1234"),
        Err(AppError::UnreadableSwipe)
    ));
    assert!(matches!(parse_identifier(""), Err(AppError::UnreadableSwipe)));
}

#[test]
fn mid_length_input_is_rejected() {
    // 8..=16 chars falls in neither branch, even when it looks like a netID
    assert!(matches!(
        parse_identifier("ab123456"),
        Err(AppError::UnreadableSwipe)
    ));
    assert!(matches!(
        parse_identifier("abcd12345"),
        Err(AppError::UnreadableSwipe)
    ));
    assert!(matches!(
        parse_identifier("1234567890123456"),
        Err(AppError::UnreadableSwipe)
    ));
}

#[test]
fn four_letter_prefix_is_not_a_netid() {
    assert!(matches!(
        parse_identifier("abcd123"),
        Err(AppError::UnreadableSwipe)
    ));
}

#[test]
fn digits_must_follow_the_letters() {
    assert!(matches!(
        parse_identifier("abcdefg"),
        Err(AppError::UnreadableSwipe)
    ));
}

#[test]
fn parsing_is_idempotent() {
    let raw = "ABCDEFGH1234567IJKLMNOPQRS";
    let first = parse_identifier(raw).unwrap();
    let second = parse_identifier(raw).unwrap();
    assert_eq!(first, second);

    // the extracted card ID is digits only, so it is not itself a netID
    assert!(matches!(
        parse_identifier(&first),
        Err(AppError::UnreadableSwipe)
    ));
}
