use hcloud_api::{ActionQuery, ImageQuery, ListQuery, Query, ServerQuery, SortDirection};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/v1/resources").unwrap()
}

#[test]
fn list_query_pagination() {
    let url = ListQuery::default()
        .with_label_selector("jenkins")
        .with_page(4)
        .with_per_page(50)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("label_selector=jenkins"));
    assert!(query.contains("page=4"));
    assert!(query.contains("per_page=50"));
}

#[test]
fn list_query_encodes_selector_operators() {
    let url = ListQuery::default()
        .with_label_selector("env in (prod,staging)")
        .add_to_url(&base_url());
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(
        pairs,
        vec![("label_selector".to_string(), "env in (prod,staging)".to_string())]
    );
}

#[test]
fn sort_is_repeatable() {
    let url = ListQuery::default()
        .with_sort("name", SortDirection::Asc)
        .with_sort("created", SortDirection::Desc)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert_eq!(query, "sort=name%3Aasc&sort=created%3Adesc");
}

#[test]
fn image_query_filters() {
    let url = ImageQuery::default()
        .with_image_type("system")
        .with_image_type("app")
        .with_architecture("arm")
        .with_include_deprecated(true)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("type=system"));
    assert!(query.contains("type=app"));
    assert!(query.contains("architecture=arm"));
    assert!(query.contains("include_deprecated=true"));
    assert!(!query.contains("status="));
}

#[test]
fn image_snapshots_preset() {
    let url = ImageQuery::snapshots()
        .with_label_selector("jenkins=template")
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("type=snapshot"));
    assert!(query.contains("status=available"));
    assert!(query.contains("label_selector=jenkins%3Dtemplate"));
}

#[test]
fn server_query_statuses() {
    let url = ServerQuery::default()
        .with_status("running")
        .with_statuses(&["off".to_string(), "starting".to_string()])
        .add_to_url(&base_url());
    let statuses: Vec<String> = url
        .query_pairs()
        .filter(|(k, _)| k == "status")
        .map(|(_, v)| v.into_owned())
        .collect();
    assert_eq!(statuses, vec!["running", "off", "starting"]);
}

#[test]
fn action_query_ids_and_status() {
    let url = ActionQuery::default()
        .with_id(1)
        .with_ids(&[2, 3])
        .with_status("error")
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.starts_with("id=1&id=2&id=3"));
    assert!(query.contains("status=error"));
}

#[test]
fn default_queries_add_nothing() {
    assert_eq!(ListQuery::default().add_to_url(&base_url()).query(), None);
    assert_eq!(ServerQuery::default().add_to_url(&base_url()).query(), None);
    assert_eq!(ImageQuery::default().add_to_url(&base_url()).query(), None);
    assert_eq!(ActionQuery::default().add_to_url(&base_url()).query(), None);
}
