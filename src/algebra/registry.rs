use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::{Count, Maximum, Minimum, Sum};

/// A binding that can be looked up by name.
pub trait NamedMeasure: Send + Sync + 'static {
    /// Unique binding name.
    fn name(&self) -> &'static str;

    /// Human-readable description.
    fn description(&self) -> &'static str;
}

/// Metadata describing a registered binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasureInfo {
    /// Name the binding was registered under.
    pub name: String,
    /// Short description of the aggregate it computes.
    pub description: String,
}

#[derive(Debug)]
struct MeasureEntry {
    binding: Box<dyn Any + Send + Sync>,
    description: String,
}

/// Registry of available bindings.
///
/// The registry is an ordinary value owned by its caller; nothing is global.
/// Lookups downcast to the concrete binding type, so asking for a name with
/// the wrong type yields `None` rather than a mismatched aggregate.
#[derive(Debug, Default)]
pub struct MeasureRegistry {
    entries: HashMap<String, MeasureEntry>,
}

impl MeasureRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registry holding `count`, `sum`, `min` and `max` over `i64` elements.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Count);
        registry.register(Sum::<i64>::new());
        registry.register(Minimum::<i64>::new());
        registry.register(Maximum::<i64>::new());
        registry
    }

    /// Register a binding and return an `Arc` handle to it.
    ///
    /// A binding registered under an existing name replaces the old one.
    pub fn register<M>(&mut self, binding: M) -> Arc<M>
    where
        M: NamedMeasure,
    {
        let arc = Arc::new(binding);
        let name = arc.name().to_string();
        let description = arc.description().to_string();
        debug!(%name, "registering measure binding");
        self.entries.insert(
            name,
            MeasureEntry {
                binding: Box::new(arc.clone()),
                description,
            },
        );
        arc
    }

    /// Retrieve a binding by name, downcasting to the requested type.
    pub fn get<M>(&self, name: &str) -> Option<Arc<M>>
    where
        M: NamedMeasure,
    {
        self.entries.get(name).and_then(|entry| {
            entry
                .binding
                .downcast_ref::<Arc<M>>()
                .map(Arc::clone)
        })
    }

    /// Whether a binding is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// List all registered bindings, sorted by name.
    pub fn list(&self) -> Vec<MeasureInfo> {
        let mut infos: Vec<_> = self
            .entries
            .iter()
            .map(|(name, entry)| MeasureInfo {
                name: name.clone(),
                description: entry.description.clone(),
            })
            .collect();
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        infos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_listed_in_order() {
        let registry = MeasureRegistry::with_defaults();
        let names: Vec<_> = registry.list().into_iter().map(|i| i.name).collect();
        assert_eq!(names, ["count", "max", "min", "sum"]);
    }

    #[test]
    fn test_get_downcasts_to_registered_type() {
        let registry = MeasureRegistry::with_defaults();
        assert!(registry.get::<Count>("count").is_some());
        assert!(registry.get::<Minimum<i64>>("min").is_some());
        // registered for i64, not i32
        assert!(registry.get::<Minimum<i32>>("min").is_none());
        assert!(registry.get::<Count>("min").is_none());
        assert!(registry.get::<Count>("missing").is_none());
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = MeasureRegistry::new();
        registry.register(Minimum::<i64>::new());
        registry.register(Minimum::<u8>::new());
        assert_eq!(registry.list().len(), 1);
        assert!(registry.get::<Minimum<u8>>("min").is_some());
        assert!(registry.contains("min"));
    }
}
