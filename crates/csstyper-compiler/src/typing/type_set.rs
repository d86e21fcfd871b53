//! Ordered, deduplicated collection of type descriptors.

use std::collections::HashSet;

use csstyper_core::TypeType;

/// Descriptors in first-insertion order, each present at most once.
///
/// The generic `String`, `Number` and `Length` descriptors are tracked by flag;
/// literals and data type references by their discriminating field. Numeric
/// literals compare by bit pattern so `NaN` deduplicates too.
#[derive(Debug, Clone, Default)]
pub struct TypeSet {
    types: Vec<TypeType>,
    has_string: bool,
    has_number: bool,
    has_length: bool,
    string_literals: HashSet<String>,
    numeric_literals: HashSet<u64>,
    data_types: HashSet<String>,
}

impl TypeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `ty` unless an equal descriptor is already present.
    /// Returns whether it was added.
    pub fn insert(&mut self, ty: TypeType) -> bool {
        let added = match &ty {
            TypeType::String => !std::mem::replace(&mut self.has_string, true),
            TypeType::Number => !std::mem::replace(&mut self.has_number, true),
            TypeType::Length => !std::mem::replace(&mut self.has_length, true),
            TypeType::StringLiteral { literal } => self.string_literals.insert(literal.clone()),
            TypeType::NumericLiteral { literal } => self.numeric_literals.insert(literal.to_bits()),
            TypeType::DataType { name } => self.data_types.insert(name.clone()),
            TypeType::Alias { .. } => !self.types.contains(&ty),
        };
        if added {
            self.types.push(ty);
        }
        added
    }

    /// Fold `other` in, keeping its order for descriptors not yet present.
    pub fn merge(&mut self, other: TypeSet) {
        for ty in other.types {
            self.insert(ty);
        }
    }

    pub fn contains(&self, ty: &TypeType) -> bool {
        match ty {
            TypeType::String => self.has_string,
            TypeType::Number => self.has_number,
            TypeType::Length => self.has_length,
            TypeType::StringLiteral { literal } => self.string_literals.contains(literal),
            TypeType::NumericLiteral { literal } => {
                self.numeric_literals.contains(&literal.to_bits())
            }
            TypeType::DataType { name } => self.data_types.contains(name),
            TypeType::Alias { .. } => self.types.contains(ty),
        }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypeType> {
        self.types.iter()
    }

    pub fn as_slice(&self) -> &[TypeType] {
        &self.types
    }

    pub fn into_vec(self) -> Vec<TypeType> {
        self.types
    }
}

impl Extend<TypeType> for TypeSet {
    fn extend<I: IntoIterator<Item = TypeType>>(&mut self, iter: I) {
        for ty in iter {
            self.insert(ty);
        }
    }
}

impl FromIterator<TypeType> for TypeSet {
    fn from_iter<I: IntoIterator<Item = TypeType>>(iter: I) -> Self {
        let mut set = TypeSet::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for TypeSet {
    type Item = TypeType;
    type IntoIter = std::vec::IntoIter<TypeType>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.into_iter()
    }
}

impl<'a> IntoIterator for &'a TypeSet {
    type Item = &'a TypeType;
    type IntoIter = std::slice::Iter<'a, TypeType>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.iter()
    }
}
