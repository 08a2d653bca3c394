use crate::error::{Result, ThresholdError};
use std::collections::BTreeMap;

/// A resolved threshold policy: values outside [lower, upper] (inclusive)
/// are replaced with the no-data sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub name: String,
    pub lower: i16,
    pub upper: i16,
}

impl FilterSpec {
    pub fn new(name: &str, lower: i16, upper: i16) -> Result<Self> {
        if lower > upper {
            return Err(ThresholdError::InvalidBounds(lower, upper));
        }
        Ok(Self {
            name: name.to_string(),
            lower,
            upper,
        })
    }

    /// Inclusive containment check against both bounds.
    pub fn contains(&self, value: i16) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Mapping from filter-type name to valid-range bounds. Built once at
/// startup and read-only afterward; passed by reference so tests can
/// substitute alternate policies.
#[derive(Debug, Clone)]
pub struct FilterRegistry {
    limits: BTreeMap<String, (i16, i16)>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self {
            limits: BTreeMap::new(),
        }
    }

    pub fn register(mut self, name: &str, lower: i16, upper: i16) -> Self {
        self.limits.insert(name.to_string(), (lower, upper));
        self
    }

    /// Look up a filter type by name. Unknown names fail without touching
    /// any other state.
    pub fn resolve(&self, name: &str) -> Result<FilterSpec> {
        let (lower, upper) = self
            .limits
            .get(name)
            .copied()
            .ok_or_else(|| ThresholdError::InvalidFilterType(name.to_string()))?;
        FilterSpec::new(name, lower, upper)
    }
}

impl Default for FilterRegistry {
    /// The production filter table.
    fn default() -> Self {
        Self::new()
            .register("forcing", 0, 400)
            .register("fraction", 15, 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_filters() {
        let registry = FilterRegistry::default();

        let forcing = registry.resolve("forcing").unwrap();
        assert_eq!(forcing.lower, 0);
        assert_eq!(forcing.upper, 400);

        let fraction = registry.resolve("fraction").unwrap();
        assert_eq!(fraction.lower, 15);
        assert_eq!(fraction.upper, 100);
    }

    #[test]
    fn test_resolve_unknown_filter() {
        let registry = FilterRegistry::default();
        let err = registry.resolve("bogus").unwrap_err();
        assert!(matches!(err, ThresholdError::InvalidFilterType(name) if name == "bogus"));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let spec = FilterSpec::new("forcing", 0, 400).unwrap();
        assert!(spec.contains(0));
        assert!(spec.contains(400));
        assert!(!spec.contains(-1));
        assert!(!spec.contains(401));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        assert!(FilterSpec::new("broken", 10, 5).is_err());
    }

    #[test]
    fn test_custom_registry() {
        let registry = FilterRegistry::new().register("depth", -50, 50);
        let spec = registry.resolve("depth").unwrap();
        assert_eq!((spec.lower, spec.upper), (-50, 50));
        assert!(registry.resolve("forcing").is_err());
    }
}
