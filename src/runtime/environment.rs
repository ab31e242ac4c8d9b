use crate::language::{ident::IdentId, span::Span, stream::TokenStream};
use crate::runtime::error::{RuntimeError, RuntimeResult};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Binding {
    id: IdentId,
    value: f64,
}

/// Fixed-capacity variable table. The capacity is decided before execution
/// and never grows.
#[derive(Clone, Debug)]
pub struct Environment {
    bindings: Vec<Binding>,
    capacity: usize,
}

impl Environment {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bindings: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.bindings.len() >= self.capacity
    }

    pub fn contains(&self, id: IdentId) -> bool {
        self.position(id).is_some()
    }

    fn position(&self, id: IdentId) -> Option<usize> {
        self.bindings.iter().position(|binding| binding.id == id)
    }

    /// Adds `id` with value 0. `stream` and `span` only feed error reports.
    pub fn declare(&mut self, id: IdentId, stream: &TokenStream, span: Span) -> RuntimeResult<()> {
        if self.is_full() {
            return Err(RuntimeError::TooManyVariables {
                name: stream.name(id).to_string(),
                capacity: self.capacity,
                span,
            });
        }
        if self.contains(id) {
            return Err(RuntimeError::DuplicateVariable {
                name: stream.name(id).to_string(),
                span,
            });
        }
        self.bindings.push(Binding { id, value: 0.0 });
        Ok(())
    }

    pub fn get(&self, id: IdentId) -> Option<f64> {
        self.position(id).map(|index| self.bindings[index].value)
    }

    pub fn lookup(&self, id: IdentId, stream: &TokenStream, span: Span) -> RuntimeResult<f64> {
        self.get(id).ok_or_else(|| unbound(id, stream, span))
    }

    pub fn assign(
        &mut self,
        id: IdentId,
        value: f64,
        stream: &TokenStream,
        span: Span,
    ) -> RuntimeResult<()> {
        match self.position(id) {
            Some(index) => {
                self.bindings[index].value = value;
                Ok(())
            }
            None => Err(unbound(id, stream, span)),
        }
    }

    /// Declared variables in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (IdentId, f64)> + '_ {
        self.bindings.iter().map(|binding| (binding.id, binding.value))
    }
}

fn unbound(id: IdentId, stream: &TokenStream, span: Span) -> RuntimeError {
    RuntimeError::UnboundVariable {
        name: stream.name(id).to_string(),
        span,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::lexer::tokenize_str;

    fn ids(stream: &TokenStream, names: &[&str]) -> Vec<IdentId> {
        names
            .iter()
            .map(|name| stream.identifiers().find(name).expect(name))
            .collect()
    }

    #[test]
    fn declare_assign_and_read_back() {
        let stream = tokenize_str("a b").expect("tokenize");
        let v = ids(&stream, &["a", "b"]);
        let mut env = Environment::with_capacity(2);
        env.declare(v[0], &stream, Span::default()).expect("declare a");
        env.declare(v[1], &stream, Span::default()).expect("declare b");
        assert!(env.is_full());
        assert_eq!(env.get(v[0]), Some(0.0));
        env.assign(v[1], 4.5, &stream, Span::default()).expect("assign");
        assert_eq!(env.iter().collect::<Vec<_>>(), vec![(v[0], 0.0), (v[1], 4.5)]);
    }

    #[test]
    fn capacity_and_duplicates_are_enforced() {
        let stream = tokenize_str("a b").expect("tokenize");
        let v = ids(&stream, &["a", "b"]);
        let mut env = Environment::with_capacity(2);
        env.declare(v[0], &stream, Span::default()).expect("declare");
        assert!(matches!(
            env.declare(v[0], &stream, Span::default()),
            Err(RuntimeError::DuplicateVariable { name, .. }) if name == "a"
        ));

        let mut tiny = Environment::with_capacity(0);
        assert!(matches!(
            tiny.declare(v[1], &stream, Span::default()),
            Err(RuntimeError::TooManyVariables { capacity: 0, .. })
        ));
    }

    #[test]
    fn undeclared_names_are_unbound() {
        let stream = tokenize_str("ghost").expect("tokenize");
        let ghost = ids(&stream, &["ghost"])[0];
        let mut env = Environment::with_capacity(1);
        assert!(matches!(
            env.lookup(ghost, &stream, Span::default()),
            Err(RuntimeError::UnboundVariable { .. })
        ));
        assert!(env.assign(ghost, 1.0, &stream, Span::default()).is_err());
    }
}
