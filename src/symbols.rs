use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub value: i64,
    pub defined: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    Undefined,
    Uninitialized,
    AlreadyDeclared,
}

/// Write-once variable storage. A name is bound exactly once; there is no
/// update or removal.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    values: HashMap<String, Symbol>,
    // declaration order, for iteration
    order: Vec<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, name: &str) -> Result<i64, SymbolError> {
        match self.values.get(name) {
            None => Err(SymbolError::Undefined),
            Some(symbol) if !symbol.defined => Err(SymbolError::Uninitialized),
            Some(symbol) => Ok(symbol.value),
        }
    }

    pub fn declare(&mut self, name: &str, value: i64) -> Result<(), SymbolError> {
        if self.values.contains_key(name) {
            return Err(SymbolError::AlreadyDeclared);
        }
        self.values.insert(
            name.to_string(),
            Symbol {
                value,
                defined: true,
            },
        );
        self.order.push(name.to_string());
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Symbol)> + '_ {
        self.order
            .iter()
            .filter_map(move |name| self.values.get(name).map(|symbol| (name.as_str(), symbol)))
    }
}
