#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test code uses unwrap for concise assertions"
)]

use super::*;
use crate::test_fixtures::{class, classes, Collections};
use crate::LinearizeConfig;
use mro_ir::ClassId;
use mro_resolve::Resolver;
use pretty_assertions::assert_eq;

#[test]
fn second_request_is_a_shared_hit() {
    let fx = Collections::new();
    let resolver = Resolver::superclass_first(&fx.reg);
    let cache = LinearizationCache::new();

    let first = cache.get_or_compute(&resolver, class(fx.hash_set)).unwrap();
    let second = cache.get_or_compute(&resolver, class(fx.hash_set)).unwrap();
    assert!(first.ptr_eq(&second));
    assert_eq!(cache.stats().hits, 1);
}

#[test]
fn cold_request_counts_one_miss() {
    let fx = Collections::new();
    let resolver = Resolver::superclass_first(&fx.reg);
    let cache = LinearizationCache::new();
    let root = TypeNode::Class(ClassId::OBJECT);

    cache.get_or_compute(&resolver, root).unwrap();
    assert_eq!(
        cache.stats(),
        CacheStats {
            hits: 0,
            misses: 1,
            insertions: 1,
            evictions: 0,
        }
    );

    cache.get_or_compute(&resolver, root).unwrap();
    let stats = cache.stats();
    assert_eq!((stats.hits, stats.misses), (1, 1));
}

#[test]
fn ancestors_are_published() {
    let fx = Collections::new();
    let resolver = Resolver::superclass_first(&fx.reg);
    let cache = LinearizationCache::new();

    cache.get_or_compute(&resolver, class(fx.hash_set)).unwrap();

    // HashSet and its eight ancestors.
    assert_eq!(cache.len(), 9);
    assert_eq!(cache.stats().insertions, 9);
    let set = cache.get(resolver.id(), class(fx.set)).expect("ancestor cached");
    assert_eq!(
        set.to_vec(),
        classes(&[fx.set, fx.collection, fx.iterable, ClassId::OBJECT])
    );
}

#[test]
fn cached_ancestor_is_reused_by_later_walks() {
    let fx = Collections::new();
    let resolver = Resolver::superclass_first(&fx.reg);
    let cache = LinearizationCache::new();

    let set = cache.get_or_compute(&resolver, class(fx.set)).unwrap();
    let abstract_set = cache.get_or_compute(&resolver, class(fx.abstract_set)).unwrap();
    assert_eq!(abstract_set.position(class(fx.set)), Some(2));
    let set_again = cache.get(resolver.id(), class(fx.set)).unwrap();
    assert!(set.ptr_eq(&set_again));
}

#[test]
fn resolvers_do_not_share_entries() {
    let fx = Collections::new();
    let first = Resolver::superclass_first(&fx.reg);
    let second = Resolver::superclass_first(&fx.reg);
    let cache = LinearizationCache::new();

    let from_first = cache.get_or_compute(&first, class(fx.hash_set)).unwrap();
    assert_eq!(cache.get(second.id(), class(fx.hash_set)), None);

    let from_second = cache.get_or_compute(&second, class(fx.hash_set)).unwrap();
    assert_eq!(from_first, from_second);
    assert!(!from_first.ptr_eq(&from_second));
}

#[test]
fn clearing_one_resolver_keeps_the_other() {
    let fx = Collections::new();
    let kept = Resolver::superclass_first(&fx.reg);
    let dropped = Resolver::interfaces_only(&fx.reg);
    let cache = LinearizationCache::new();

    let before = cache.get_or_compute(&kept, class(fx.abstract_set)).unwrap();
    cache.get_or_compute(&dropped, class(fx.abstract_set)).unwrap();

    cache.clear_resolver(dropped.id());
    assert_eq!(cache.get(dropped.id(), class(fx.abstract_set)), None);

    let after = cache.get_or_compute(&kept, class(fx.abstract_set)).unwrap();
    assert!(before.ptr_eq(&after));
}

#[test]
fn clear_empties_every_shard() {
    let fx = Collections::new();
    let resolver = Resolver::superclass_first(&fx.reg);
    let cache = LinearizationCache::new();
    cache.get_or_compute(&resolver, class(fx.hash_set)).unwrap();
    assert!(!cache.is_empty());
    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn zero_capacity_stores_nothing() {
    let fx = Collections::new();
    let resolver = Resolver::superclass_first(&fx.reg);
    let cache = LinearizationCache::with_config(CacheConfig::default().with_capacity(0));

    let first = cache.get_or_compute(&resolver, class(fx.hash_set)).unwrap();
    let second = cache.get_or_compute(&resolver, class(fx.hash_set)).unwrap();
    assert_eq!(first, second);
    assert!(cache.is_empty());
    assert_eq!(cache.stats().insertions, 0);
}

#[test]
fn small_capacity_evicts_but_stays_correct() {
    let fx = Collections::new();
    let resolver = Resolver::superclass_first(&fx.reg);
    let reference = crate::linearize(&resolver, class(fx.hash_set)).unwrap();
    let cache = LinearizationCache::with_config(CacheConfig::default().with_capacity(1));

    for _ in 0..3 {
        let lin = cache.get_or_compute(&resolver, class(fx.hash_set)).unwrap();
        assert_eq!(lin, reference);
    }

    let stats = cache.stats();
    assert!(cache.len() <= NUM_SHARDS);
    assert_eq!(stats.insertions - stats.evictions, cache.len() as u64);
}

#[test]
fn insert_keeps_first_value() {
    let fx = Collections::new();
    let resolver = Resolver::superclass_first(&fx.reg);
    let cache = LinearizationCache::new();

    let first = crate::linearize(&resolver, class(fx.set)).unwrap();
    let second = crate::linearize(&resolver, class(fx.set)).unwrap();
    cache.insert(resolver.id(), class(fx.set), first.clone());
    cache.insert(resolver.id(), class(fx.set), second);

    let stored = cache.get(resolver.id(), class(fx.set)).unwrap();
    assert!(stored.ptr_eq(&first));
    assert_eq!(cache.stats().insertions, 1);
}

#[test]
fn failures_are_not_cached() {
    let fx = Collections::new();
    let resolver = Resolver::superclass_first(&fx.reg);
    let cache = LinearizationCache::new();

    let first = cache.get_or_compute(&resolver, class(fx.bad)).unwrap_err();
    assert_eq!(cache.get(resolver.id(), class(fx.bad)), None);
    // The consistent ancestors linearized on the way are kept.
    assert!(cache.get(resolver.id(), class(fx.c)).is_some());

    let second = cache.get_or_compute(&resolver, class(fx.bad)).unwrap_err();
    assert_eq!(first, second);
}

#[test]
fn miss_config_is_applied() {
    let fx = Collections::new();
    let resolver = Resolver::superclass_first(&fx.reg);
    let config = CacheConfig::default().with_linearize(LinearizeConfig::default().with_max_depth(1));
    let cache = LinearizationCache::with_config(config);

    let err = cache.get_or_compute(&resolver, class(fx.set)).unwrap_err();
    assert!(matches!(err, LinearizeError::DepthExceeded { limit: 1, .. }));
}

#[test]
fn global_cache_is_shared() {
    let fx = Collections::new();
    let resolver = Resolver::superclass_first(&fx.reg);

    let first = linearize_cached(&resolver, class(fx.abstract_set)).unwrap();
    let second = global_cache().get(resolver.id(), class(fx.abstract_set)).unwrap();
    assert!(first.ptr_eq(&second));
    assert!(std::ptr::eq(global_cache(), global_cache()));
}
