use crate::{CoreError, Role, SecurityContext};

#[test]
fn given_positive_id_and_roles_when_created_then_ok() {
    let ctx = SecurityContext::new(42, vec![Role::Customer], "a@b.com").unwrap();

    assert_eq!(ctx.user_id(), 42);
    assert_eq!(ctx.primary_role(), Role::Customer);
    assert_eq!(ctx.email(), "a@b.com");
}

#[test]
fn given_non_positive_user_id_when_created_then_validation_error() {
    let zero = SecurityContext::new(0, vec![Role::Customer], "");
    let negative = SecurityContext::new(-7, vec![Role::Customer], "");

    assert!(matches!(zero, Err(CoreError::Validation { .. })));
    assert!(matches!(negative, Err(CoreError::Validation { .. })));
}

#[test]
fn given_no_roles_when_created_then_validation_error() {
    let result = SecurityContext::new(1, vec![], "");

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn test_duplicate_roles_are_collapsed() {
    let ctx = SecurityContext::new(1, vec![Role::Owner, Role::Admin, Role::Owner], "").unwrap();

    assert_eq!(ctx.roles(), &[Role::Owner, Role::Admin]);
}

#[test]
fn test_has_any_role() {
    let ctx = SecurityContext::new(1, vec![Role::Owner], "").unwrap();

    assert!(ctx.has_any_role(&[Role::Owner, Role::Admin]));
    assert!(!ctx.has_any_role(&[Role::Customer]));
    assert!(!ctx.has_any_role(&[]));
}
