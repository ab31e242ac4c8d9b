use std::collections::HashMap;
use std::fmt;

/// Handle of an interned identifier. Two tokens name the same variable or
/// label exactly when their handles are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdentId(usize);

impl IdentId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for IdentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, Default)]
pub struct IdentifierTable {
    names: Vec<String>,
    lookup: HashMap<String, IdentId>,
}

impl IdentifierTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the handle for `name`, inserting it on first sight.
    pub fn intern(&mut self, name: &str) -> IdentId {
        if let Some(id) = self.lookup.get(name) {
            return *id;
        }
        let id = IdentId(self.names.len());
        self.names.push(name.to_string());
        self.lookup.insert(name.to_string(), id);
        id
    }

    pub fn find(&self, name: &str) -> Option<IdentId> {
        self.lookup.get(name).copied()
    }

    pub fn name(&self, id: IdentId) -> &str {
        self.names.get(id.index()).map(String::as_str).unwrap_or("?")
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (IdentId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(index, name)| (IdentId(index), name.as_str()))
    }
}
