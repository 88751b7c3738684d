use super::{TokenChange, classify_token_change};

#[test]
fn removal_clears_a_held_token() {
    assert_eq!(
        classify_token_change(Some("abc"), None),
        TokenChange::Cleared
    );
}

#[test]
fn empty_string_counts_as_removal() {
    assert_eq!(classify_token_change(Some("abc"), Some("")), TokenChange::Cleared);
}

#[test]
fn removal_without_a_token_is_a_no_op() {
    assert_eq!(classify_token_change(None, None), TokenChange::Unchanged);
}

#[test]
fn new_token_is_adopted() {
    assert_eq!(
        classify_token_change(None, Some("abc")),
        TokenChange::Replaced("abc".to_string())
    );
    assert_eq!(
        classify_token_change(Some("old"), Some("new")),
        TokenChange::Replaced("new".to_string())
    );
}

#[test]
fn identical_token_is_ignored() {
    assert_eq!(
        classify_token_change(Some("abc"), Some("abc")),
        TokenChange::Unchanged
    );
}
