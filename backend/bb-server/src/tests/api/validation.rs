use crate::{ApiError, FieldErrors};

#[test]
fn given_no_errors_when_finished_then_ok() {
    let mut errors = FieldErrors::new();
    errors.not_blank("name", Some("Pizza Place"), "must not be blank");
    errors.size("name", Some("Pizza Place"), 2, 100);

    assert!(errors.finish().is_ok());
}

#[test]
fn given_two_messages_on_one_field_when_finished_then_joined_with_semicolon() {
    let mut errors = FieldErrors::new();
    errors.not_blank("name", Some(" "), "must not be blank");
    errors.size("name", Some(" "), 2, 100);

    match errors.finish() {
        Err(ApiError::Validation { errors, .. }) => assert_eq!(
            errors["name"],
            "must not be blank; size must be between 2 and 100"
        ),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn given_missing_value_when_checked_then_size_is_skipped() {
    let mut errors = FieldErrors::new();
    errors.size("name", None, 2, 100);

    assert!(errors.is_empty());
}

#[test]
fn given_missing_value_when_not_null_checked_then_recorded() {
    let mut errors = FieldErrors::new();
    errors.not_null::<i64>("restaurantId", &None, "must not be null");
    errors.not_null("items", &Some(1), "must not be null");

    match errors.finish() {
        Err(ApiError::Validation { errors, .. }) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors["restaurantId"], "must not be null");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn given_multibyte_name_when_sized_then_counts_characters() {
    let mut errors = FieldErrors::new();
    errors.size("name", Some("寿司"), 2, 100);

    assert!(errors.is_empty());
}
