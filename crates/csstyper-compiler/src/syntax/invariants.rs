//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use csstyper_core::{ComponentKind, Entity};

/// Panics unless terms and combinators alternate with one combinator kind
/// per sequence, recursively through groups.
pub(super) fn ensure_well_formed(entities: &[Entity]) {
    for (index, entity) in entities.iter().enumerate() {
        let expect_combinator = index % 2 == 1;
        if entity.is_combinator() != expect_combinator {
            panic!(
                "parser produced a malformed sequence: entity {index} ({entity:?}) \
                 breaks term/combinator alternation"
            );
        }
        if let Entity::Component(component) = entity
            && let ComponentKind::Group { entities } = &component.kind
        {
            ensure_well_formed(entities);
        }
    }

    let mut combinators = entities.iter().filter_map(Entity::as_combinator);
    if let Some(first) = combinators.next()
        && let Some(other) = combinators.find(|combinator| *combinator != first)
    {
        panic!("parser produced a sequence mixing `{first}` and `{other}` combinators");
    }

    if entities.last().is_some_and(Entity::is_combinator) {
        panic!("parser produced a sequence ending on a combinator");
    }
}
