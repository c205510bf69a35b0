use std::collections::{BTreeMap, HashMap};

use crate::ast::StmtId;
use crate::Node;

/// Declared names of one scope.
///
/// Every name has exactly one [`Symbol`]; later declarations of the same name
/// are folded into it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    symbols: HashMap<String, Symbol>,
}

impl Table {
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Symbol)> {
        self.symbols.iter().map(|(name, symbol)| (name.as_str(), symbol))
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Symbol> {
        self.symbols.get_mut(name)
    }

    pub(crate) fn insert(&mut self, name: String, symbol: Symbol) {
        self.symbols.insert(name, symbol);
    }
}

/// Serializes as a map ordered by name.
impl serde::Serialize for Table {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let sorted: BTreeMap<_, _> = self.symbols.iter().collect();
        serializer.collect_map(sorted)
    }
}

#[derive(Node!)]
pub struct Symbol {
    /// The first `var` declaring this name, if any.
    pub value_declaration: Option<StmtId>,
    /// Every declaration of this name in source order.
    pub declarations: Vec<StmtId>,
}

impl Symbol {
    pub(crate) fn new(declaration: StmtId, is_value: bool) -> Self {
        Self {
            value_declaration: is_value.then_some(declaration),
            declarations: vec![declaration],
        }
    }
}
