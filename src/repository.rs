use crate::ElementRecord;
use std::collections::HashMap;

/// Read-only access to element data.
///
/// Implementations must not change once handed to a builder or a
/// [`Calculator`](crate::Calculator); lookups take `&self` so a single
/// table can serve any number of sessions.
pub trait ElementRepository {
    /// Finds an element by its exact symbol ("Na", not "na").
    fn lookup(&self, symbol: &str) -> Option<&ElementRecord>;

    /// Finds an element by any key the repository understands.
    /// By default this is the same as a symbol lookup.
    fn search(&self, key: &str) -> Option<&ElementRecord> {
        self.lookup(key)
    }
}

impl ElementRepository for HashMap<String, ElementRecord> {
    fn lookup(&self, symbol: &str) -> Option<&ElementRecord> {
        self.get(symbol)
    }
}

impl<R: ElementRepository + ?Sized> ElementRepository for &R {
    fn lookup(&self, symbol: &str) -> Option<&ElementRecord> {
        (**self).lookup(symbol)
    }

    fn search(&self, key: &str) -> Option<&ElementRecord> {
        (**self).search(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_repository() {
        let mut elements = HashMap::new();
        elements.insert("He".to_string(), ElementRecord::new("Helium", "He", 2, 4.0026));

        assert_eq!(elements.lookup("He").map(|e| e.atomic_number), Some(2));
        assert!(elements.lookup("he").is_none());
        assert_eq!(elements.search("He").map(|e| e.name.as_str()), Some("Helium"));

        let by_ref = &elements;
        assert!(by_ref.lookup("He").is_some());
    }
}
