use segtrie_router::Router;
use std::panic::{AssertUnwindSafe, catch_unwind};

#[test]
fn router_when_groups_nested_then_prefixes_compose() {
    let mut grouped = Router::new();
    grouped
        .group("api", |api| api.group("v1", |v1| v1.on("x", 1)))
        .expect("grouped registration should succeed");

    let mut flat = Router::new();
    flat.on("api/v1/x", 1).expect("flat registration should succeed");

    let from_group = grouped.find("api/v1/x").expect("grouped route should match");
    let from_flat = flat.find("api/v1/x").expect("flat route should match");

    assert_eq!(from_group, from_flat);
    assert!(grouped.find("x").is_none());
    assert!(grouped.find("v1/x").is_none());
}

#[test]
fn router_when_group_prefix_has_multiple_segments_then_all_apply() {
    let mut router = Router::new();
    router
        .group("api/v2", |scoped| scoped.on("users/:id", 1))
        .expect("grouped registration should succeed");

    let matched = router
        .find("api/v2/users/7")
        .expect("prefixed route should match");

    assert_eq!(*matched.handler, 1);
    assert_eq!(matched.params.get("id").map(String::as_str), Some("7"));
}

#[test]
fn router_when_group_setup_fails_then_prefix_is_restored() {
    let mut router = Router::new();

    let err = router.group("api", |scoped| {
        scoped.on("dup", 1)?;
        scoped.on("dup", 2)
    });
    assert!(err.is_err());

    router.on("after", 3).expect("route should register");

    assert_eq!(*router.find("after").expect("unprefixed").handler, 3);
    assert!(router.find("api/after").is_none());
}

#[test]
fn router_when_group_setup_panics_then_prefix_is_restored() {
    let mut router: Router<u32> = Router::new();

    let panicked = catch_unwind(AssertUnwindSafe(|| {
        router.group("boom", |_scoped| panic!("setup failure"))
    }));
    assert!(panicked.is_err());

    router.on("after", 3).expect("route should register");

    assert_eq!(*router.find("after").expect("unprefixed").handler, 3);
    assert!(router.find("boom/after").is_none());
}

#[test]
fn router_when_rendered_then_tree_structure_is_visible() {
    let mut router = Router::new();
    router.on("one/two", 1).expect("route should register");
    router.on("one/:id", 2).expect("route should register");

    let rendered = router.to_string();

    assert!(rendered.contains("root"));
    assert!(rendered.contains("one"));
    assert!(rendered.contains("[kind: literal"));
    assert!(rendered.contains("[kind: parametrized, params: [id]]"));
}
