use super::*;

/// Tests list parameters of any displayable element type.
///
/// Expected: one repeated key per element, blank elements skipped
#[test]
fn list_values_repeat_the_key() {
    let ids = QueryParams::new().with_list("teamIds", &[3_i64, 7]);
    assert_eq!(ids.to_query_string(), "teamIds=3&teamIds=7");

    let names = QueryParams::new().with_list("roles", &["COACH", " ", "PLAYER"]);
    assert_eq!(names.to_query_string(), "roles=COACH&roles=PLAYER");

    let none: &[String] = &[];
    assert!(QueryParams::new().with_list("roles", none).is_empty());
}

#[test]
fn values_are_percent_encoded() {
    let query = QueryParams::new()
        .with("reason", "late & short")
        .with_opt("limit", Some(5))
        .with_opt::<u32>("page", None);

    assert_eq!(query.to_query_string(), "reason=late+%26+short&limit=5");
    assert_eq!(encode_component("a b/c"), "a+b%2Fc");
}
