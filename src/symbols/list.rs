use std::collections::HashMap;

use crate::errors::errors::SymbolError;

use super::loader::SymbolLoader;
use super::symbol::Symbol;

/// A per-kind symbol table mapping names to symbols.
///
/// Names are unique within one table. Adding a symbol whose name already
/// exists is a configuration error, it indicates a corrupt or conflicting
/// symbol source, so the caller must abort table construction rather than
/// overwrite. Overwriting requires an explicit [`SymbolList::remove`] first.
#[derive(Debug)]
pub struct SymbolList<T: Symbol> {
    symbols: HashMap<String, T>,
}

impl<T: Symbol> Default for SymbolList<T> {
    fn default() -> Self {
        SymbolList::new()
    }
}

impl<T: Symbol> SymbolList<T> {
    pub fn new() -> Self {
        SymbolList {
            symbols: HashMap::new(),
        }
    }

    /// Inserts a symbol, failing on a duplicate name.
    pub fn add(&mut self, symbol: T) -> Result<(), SymbolError> {
        if self.symbols.contains_key(symbol.name()) {
            return Err(SymbolError::DuplicateSymbol {
                name: symbol.name().to_string(),
            });
        }
        self.symbols.insert(symbol.name().to_string(), symbol);
        Ok(())
    }

    /// Removes the entry with the given name. Removing an absent name is a
    /// no-op.
    pub fn remove(&mut self, name: &str) {
        self.symbols.remove(name);
    }

    /// Looks up a symbol by name. Absence is a normal outcome meaning "not
    /// yet declared".
    pub fn lookup_by_name(&self, name: &str) -> Option<&T> {
        self.symbols.get(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Bulk-loads a persisted table: one symbol per non-empty line of `text`,
    /// parsed with `loader` and added to this list. The first malformed line
    /// or duplicate name aborts the whole load.
    pub fn load_all(
        &mut self,
        loader: &impl SymbolLoader<T>,
        text: &str,
    ) -> Result<(), SymbolError> {
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let symbol = loader.load(line)?;
            self.add(symbol)?;
        }
        Ok(())
    }
}
