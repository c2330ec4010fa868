//! Detail page query string handling.

use vitrina::pages::product_id_from_query;

#[test]
fn test_plain_and_prefixed() {
    assert_eq!(product_id_from_query("id=12"), Some("12".into()));
    assert_eq!(product_id_from_query("?id=12"), Some("12".into()));
}

#[test]
fn test_percent_decoding() {
    assert_eq!(product_id_from_query("?id=CB%2F01"), Some("CB/01".into()));
    assert_eq!(product_id_from_query("?id=%C3%B1"), Some("ñ".into()));
}

#[test]
fn test_other_parameters_ignored() {
    assert_eq!(product_id_from_query("?ref=home&id=3&utm=x"), Some("3".into()));
    assert_eq!(product_id_from_query("?ID=3"), None);
}

#[test]
fn test_absent_or_empty() {
    assert_eq!(product_id_from_query(""), None);
    assert_eq!(product_id_from_query("?"), None);
    assert_eq!(product_id_from_query("?id"), None);
    assert_eq!(product_id_from_query("?id="), None);
}
