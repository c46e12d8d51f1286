use crate::cluster::errors::MetaError;
use crate::cluster::meta::MetaResolver;
use crate::test_helpers::factories::MetaResolverFactory;

#[test]
fn test_storage_group_of_picks_deepest_match() {
    let resolver = MetaResolverFactory::new()
        .with_storage_groups(&["root.a", "root.a.b"])
        .create();

    let group = resolver.storage_group_of("root.a.b.d0.s0").unwrap();
    assert_eq!(group, "root.a.b");
}

#[test]
fn test_storage_group_of_fails_above_every_group() {
    let resolver = MetaResolverFactory::new().create();

    let err = resolver.storage_group_of("root").unwrap_err();
    assert!(matches!(err, MetaError::StorageGroupNotSet(_)));
}

#[test]
fn test_resolve_wildcard_expands_groups_below_the_prefix() {
    let resolver = MetaResolverFactory::new()
        .with_storage_groups(&["root.sg1", "root.sg2"])
        .create();

    let resolved = resolver.resolve_wildcard("root.*").unwrap();

    let keys: Vec<&str> = resolved.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, ["root.sg1", "root.sg2"]);
    assert_eq!(resolved["root.sg1"], "root.sg1.*");
    assert_eq!(resolved["root.sg2"], "root.sg2.*");
}

#[test]
fn test_resolve_wildcard_keeps_query_inside_its_group() {
    let resolver = MetaResolverFactory::new().create();

    let resolved = resolver.resolve_wildcard("root.vehicle.d0.*").unwrap();

    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved["root.vehicle"], "root.vehicle.d0.*");
}

#[test]
fn test_resolve_wildcard_is_empty_when_nothing_matches() {
    let resolver = MetaResolverFactory::new()
        .with_storage_groups(&["root.sg1"])
        .create();

    let resolved = resolver.resolve_wildcard("root.elsewhere.*").unwrap();
    assert!(resolved.is_empty());
}

#[test]
fn test_wildcard_override_replaces_resolution() {
    let resolver = MetaResolverFactory::new()
        .with_wildcard_override(&[("root.sg1", "root.sg1.device")])
        .create();

    let resolved = resolver.resolve_wildcard("root.anything.*").unwrap();

    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved["root.sg1"], "root.sg1.device");
}
