#![allow(missing_docs)]

use waymark::{Route, WaymarkError};

const MATCH_TABLE: &[(&str, &str)] = &[
    ("/404", "/404"),
    ("/foo", "/foo"),
    ("/foo/bar", "/foo/bar"),
    ("/foo/:bar", "/foo/bar"),
    ("/foo/:bar?", "/foo/bar"),
    ("/foo/:bar?", "/foo/"),
    ("/foo/:bar?", "/foo"),
    (r"/^\/simpleregexp/", "/simpleregexp"),
    (r"/^\/adfasdfa\/adfasf/gm", "/adfasdfa/adfasf"),
    (r"/^\/(?<named>[\d\.]+)\/foo/", "/1.0.0/foo"),
];

#[test]
fn test_match_table() {
    for (source, path) in MATCH_TABLE {
        let route = Route::new(*source).unwrap();
        assert!(route.test(path), "route {source:?} should match {path:?}");
    }
}

#[test]
fn test_native_regex_sources() {
    let route = Route::new(regex::Regex::new(r"^\/simpleregexp").unwrap()).unwrap();
    assert!(route.test("/simpleregexp"));
    assert!(!route.test("/foo"));

    let route = Route::new(regex::Regex::new(r"^\/foo\/(.*)").unwrap()).unwrap();
    assert!(route.test("/foo/complex"));
    assert!(!route.test("/foo"));

    let params = route.exec("/foo/complex").unwrap().unwrap();
    assert_eq!(params.value("0"), Some("complex"));
}

#[test]
fn test_fancy_regex_source() {
    // Lookahead needs the fancy engine.
    let route = Route::new(fancy_regex::Regex::new(r"^\/(?!private)\w+$").unwrap()).unwrap();

    assert!(route.test("/public"));
    assert!(!route.test("/private"));
}

#[test]
fn test_url_roundtrip() {
    let route = Route::new("/foo").unwrap();
    assert_eq!(route.url(), "/foo");

    let route = Route::new(regex::Regex::new(r"\/foo\/bar").unwrap()).unwrap();
    assert_eq!(route.url(), r"\/foo\/bar");
}

#[test]
fn test_url_reassignment() {
    let mut route = Route::new("/foo/bar").unwrap();
    assert!(route.pattern().contains("foo"));
    assert!(!route.pattern().contains("waffles"));

    route.set_url("/waffles").unwrap();
    assert!(route.pattern().contains("waffles"));
    assert!(!route.pattern().contains("foo"));
}

#[test]
fn test_param_transform() {
    let mut route = Route::new("/foo/:bar").unwrap();

    route.param("bar", |value, path, name| {
        assert_eq!(value, Some("banana"));
        assert_eq!(path, "/foo/banana");
        assert_eq!(name, "bar");
        Ok(Some("foo".to_string()))
    });

    let params = route.exec("/foo/banana").unwrap().unwrap();
    assert_eq!(params.value("bar"), Some("foo"));
}

#[test]
fn test_raw_named_group_extraction() {
    let route = Route::new(r"/^\/(?<named>[\d\.]+)\/foo/").unwrap();

    let params = route.exec("/1.0.0/foo").unwrap().unwrap();
    assert_eq!(params.value("named"), Some("1.0.0"));
    assert_eq!(params.len(), 1);
}

#[test]
fn test_compile_idempotence_across_instances() {
    let first = Route::new("/foo/:bar?").unwrap();
    let second = Route::new("/foo/:bar?").unwrap();

    assert_eq!(first.pattern(), second.pattern());
    assert_eq!(first.flags(), second.flags());
    assert_eq!(first.param_names(), second.param_names());
}

#[test]
fn test_missing_url_argument() {
    assert!(matches!(
        Route::new(String::new()),
        Err(WaymarkError::MissingUrl)
    ));
}

#[test]
fn test_shared_route_across_threads() {
    let route = Route::new("/foo/:bar").unwrap();

    std::thread::scope(|scope| {
        for path in ["/foo/one", "/foo/two", "/foo/three"] {
            let route = &route;
            scope.spawn(move || {
                assert!(route.test(path));
                assert!(route.exec(path).unwrap().is_some());
            });
        }
    });
}
