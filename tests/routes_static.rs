use segtrie_router::{PathError, Router, RouterError};

#[test]
fn router_when_static_route_registered_then_find_returns_handler() {
    let mut router = Router::new();
    router.on("one/two", 1).expect("static route should register");

    let matched = router.find("one/two").expect("static route should match");

    assert_eq!(*matched.handler, 1);
    assert!(matched.params.is_empty());
}

#[test]
fn router_when_trailing_divider_present_then_match_is_identical() {
    let mut router = Router::new();
    router.on("one/two", 1).expect("static route should register");

    let plain = router.find("one/two").expect("plain path should match");
    let trailing = router.find("one/two/").expect("trailing slash should match");

    assert_eq!(plain, trailing);
}

#[test]
fn router_when_query_string_present_then_suffix_is_ignored() {
    let mut router = Router::new();
    router.on("one/two", 1).expect("static route should register");

    let matched = router
        .find("one/two?x=1&y=2")
        .expect("query string should be ignored");

    assert_eq!(*matched.handler, 1);
    assert!(matched.params.is_empty());
}

#[test]
fn router_when_path_unregistered_then_find_returns_none() {
    let mut router = Router::new();
    router.on("one/two", 1).expect("static route should register");

    assert!(router.find("one/three").is_none());
    assert!(router.find("one").is_none());
    assert!(router.find("one/two/three").is_none());
}

#[test]
fn router_when_root_path_registered_then_bare_slash_matches() {
    let mut router = Router::new();
    router.on("/", 1).expect("root route should register");

    let matched = router.find("/").expect("root path should match");

    assert_eq!(*matched.handler, 1);
}

#[test]
fn router_when_forbidden_divider_configured_then_construction_fails() {
    let err = Router::<u32>::with_dividers(&[':']);

    match err.expect_err("expected forbidden divider error") {
        RouterError::Path(PathError::ForbiddenDivider { divider }) => {
            assert_eq!(divider, ':');
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_custom_divider_configured_then_it_splits_paths() {
    let mut router = Router::with_dividers(&['/', '.']).expect("dividers should be accepted");
    router.on("reports/2026.08", 1).expect("route should register");

    let matched = router
        .find("reports/2026.08")
        .expect("dot-divided path should match");

    assert_eq!(*matched.handler, 1);
}
