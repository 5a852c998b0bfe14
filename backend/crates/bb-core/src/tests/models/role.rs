use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str_is_canonical() {
    assert_eq!(Role::Customer.as_str(), "CUSTOMER");
    assert_eq!(Role::Owner.as_str(), "OWNER");
    assert_eq!(Role::Admin.as_str(), "ADMIN");
    assert_eq!(Role::User.as_str(), "USER");
}

#[test]
fn given_legacy_prefixed_roles_when_normalized_then_maps_to_canonical() {
    assert_eq!(Role::normalize("ROLE_CUSTOMER"), Some(Role::Customer));
    assert_eq!(Role::normalize("ROLE_OWNER"), Some(Role::Owner));
    assert_eq!(Role::normalize("ROLE_RESTAURANT_OWNER"), Some(Role::Owner));
    assert_eq!(Role::normalize("RESTAURANT_OWNER"), Some(Role::Owner));
    assert_eq!(Role::normalize("ROLE_ADMIN"), Some(Role::Admin));
}

#[test]
fn given_mixed_case_and_padding_when_normalized_then_accepted() {
    assert_eq!(Role::normalize("  owner "), Some(Role::Owner));
    assert_eq!(Role::normalize("Role_Admin"), Some(Role::Admin));
}

#[test]
fn given_unknown_or_empty_role_when_normalized_then_none() {
    assert_eq!(Role::normalize(""), None);
    assert_eq!(Role::normalize("ROLE_"), None);
    assert_eq!(Role::normalize("SUPERUSER"), None);
}

#[test]
fn given_comma_separated_list_when_parsed_then_drops_empties_unknowns_and_duplicates() {
    let roles = Role::parse_list(" OWNER, ,ROLE_RESTAURANT_OWNER,wizard,ADMIN,");

    assert_eq!(roles, vec![Role::Owner, Role::Admin]);
}

#[test]
fn test_role_join_round_trips_through_parse_list() {
    let roles = vec![Role::Customer, Role::Admin];

    assert_eq!(Role::join(&roles), "CUSTOMER,ADMIN");
    assert_eq!(Role::parse_list(&Role::join(&roles)), roles);
}

#[test]
fn test_role_from_str_rejects_unknown() {
    assert_eq!(Role::from_str("ROLE_CUSTOMER").unwrap(), Role::Customer);
    assert!(Role::from_str("nobody").is_err());
}

#[test]
fn test_role_serializes_canonically() {
    let json = serde_json::to_string(&Role::Owner).unwrap();
    assert_eq!(json, "\"OWNER\"");
}
