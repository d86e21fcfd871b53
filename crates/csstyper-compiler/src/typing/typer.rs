//! Grammar-to-type-set transformation.
//!
//! Walks one entity sequence left to right and records the descriptors each
//! entity can produce. Anything whose serialized shape is not a finite union of
//! literals and data types (multi-term combinations, repeated groups, function
//! calls, custom-ident references) collapses to the generic `String`.

use csstyper_core::types::format_number;
use csstyper_core::{
    Combinator, Component, ComponentKind, DataTypeCatalog, Entity, Multiplier, TypeType,
};

use super::TypeSet;

/// Types entity sequences against a data type catalog.
#[derive(Debug, Clone, Copy)]
pub struct Typer<'c> {
    catalog: &'c DataTypeCatalog,
}

impl<'c> Typer<'c> {
    pub fn new(catalog: &'c DataTypeCatalog) -> Self {
        Self { catalog }
    }

    /// Descriptors reachable from `entities`, deduplicated within this call.
    pub fn type_entities(&self, entities: &[Entity]) -> TypeSet {
        let mut types = TypeSet::new();

        for (index, entity) in entities.iter().enumerate() {
            match entity {
                Entity::Component(component) => {
                    if should_include_component(entities, index) {
                        self.add_component(component, &mut types);
                    }
                }
                Entity::Combinator(combinator) => match combinator {
                    Combinator::Juxtaposition
                    | Combinator::DoubleAmpersand
                    | Combinator::DoubleBar => {
                        types.insert(TypeType::String);
                    }
                    Combinator::SingleBar => {}
                },
                Entity::Function(_) => {
                    types.insert(TypeType::String);
                }
            }
        }

        log::trace!(
            "typed {} entities into {} descriptors",
            entities.len(),
            types.len()
        );
        types
    }

    fn add_component(&self, component: &Component, types: &mut TypeSet) {
        match &component.kind {
            ComponentKind::Keyword { value } => {
                types.insert(keyword_type(value));
            }
            ComponentKind::DataType { value } => {
                types.insert(self.data_type(value));
            }
            ComponentKind::Group { entities } => {
                if component.multiplier.is_some_and(collapses_group) {
                    types.insert(TypeType::String);
                }
                types.merge(self.type_entities(entities));
            }
        }
    }

    fn data_type(&self, value: &str) -> TypeType {
        let name = value
            .strip_prefix('<')
            .and_then(|inner| inner.strip_suffix('>'))
            .unwrap_or(value);

        // Custom property reference such as `<'margin-top'>`.
        if name.starts_with('\'') {
            return TypeType::String;
        }

        match self.catalog.get(name) {
            Some(primitive) => primitive.to_type(),
            None => TypeType::data_type(name),
        }
    }
}

/// Convenience wrapper around [`Typer::type_entities`].
pub fn type_entities(entities: &[Entity], catalog: &DataTypeCatalog) -> Vec<TypeType> {
    Typer::new(catalog).type_entities(entities).into_vec()
}

/// Whether the component at `index` contributes its own descriptors.
///
/// A component joined to a neighbor by a mandatory combinator only counts when
/// that neighbor is optional; otherwise the pair is covered by the `String`
/// the combinator itself contributes.
pub(super) fn should_include_component(entities: &[Entity], index: usize) -> bool {
    if let Some(next) = entities.get(index + 1).and_then(Entity::as_combinator)
        && next.is_mandatory()
    {
        return is_optional_component(entities.get(index + 2));
    }

    if let Some(prev_index) = index.checked_sub(1)
        && let Some(prev) = entities[prev_index].as_combinator()
        && prev.is_mandatory()
    {
        let before = prev_index.checked_sub(1).and_then(|i| entities.get(i));
        return is_optional_component(before);
    }

    true
}

fn is_optional_component(entity: Option<&Entity>) -> bool {
    entity
        .and_then(Entity::as_component)
        .and_then(|component| component.multiplier)
        .is_some_and(is_optional)
}

/// Optional for neighbor inclusion. A curly range counts when `min > 0`.
pub(super) fn is_optional(multiplier: Multiplier) -> bool {
    match multiplier {
        Multiplier::CurlyBracket { min, .. } => min > 0,
        Multiplier::Asterisk | Multiplier::QuestionMark => true,
        Multiplier::PlusSign | Multiplier::HashMark | Multiplier::ExclamationPoint => false,
    }
}

/// Whether a group with this multiplier serializes as a repeated or combined
/// value that no single literal or data type describes.
pub(super) fn collapses_group(multiplier: Multiplier) -> bool {
    match multiplier {
        Multiplier::CurlyBracket { min, max } => min > 1 || max == Some(1),
        Multiplier::Asterisk
        | Multiplier::PlusSign
        | Multiplier::HashMark
        | Multiplier::ExclamationPoint => true,
        Multiplier::QuestionMark => false,
    }
}

fn keyword_type(value: &str) -> TypeType {
    match numeric_keyword(value) {
        Some(number) => TypeType::numeric_literal(number),
        None => TypeType::string_literal(value),
    }
}

/// The keyword's numeric value when printing that number gives back the
/// keyword text exactly (`0`, `1.5`; not `1.50`, `+1` or `-0`).
fn numeric_keyword(value: &str) -> Option<f64> {
    let number = value.parse::<f64>().ok()?;
    (format_number(number) == value).then_some(number)
}
