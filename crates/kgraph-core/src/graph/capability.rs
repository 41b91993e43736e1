//! Caller-supplied vertex capabilities.
//!
//! A graph is built with an optional equality predicate and an optional
//! display function. Equality drives vertex lookup and duplicate detection;
//! display drives how values appear in rendered edges, vertices and
//! traversal output.

use std::fmt;

/// Equality predicate over vertex values.
pub type EqualityFn<V> = Box<dyn Fn(&V, &V) -> bool>;

/// Vertex-to-string conversion.
pub type DisplayFn<V> = Box<dyn Fn(&V) -> String>;

/// Capabilities injected into a [`DirectedGraph`](super::DirectedGraph).
///
/// # Example
///
/// ```rust
/// use kgraph_core::graph::Capabilities;
///
/// let caps = Capabilities::<f32>::new()
///     .with_equality(|a, b| (a - b).abs() < 1e-6)
///     .with_display(|v| format!("{v:.1}"));
///
/// assert!(caps.equals(&1.0, &1.000_000_1));
/// assert_eq!(caps.display(&2.0).as_deref(), Some("2.0"));
/// ```
pub struct Capabilities<V> {
    equality: Option<EqualityFn<V>>,
    display: Option<DisplayFn<V>>,
}

impl<V> Default for Capabilities<V> {
    fn default() -> Self {
        Self {
            equality: None,
            display: None,
        }
    }
}

impl<V> Capabilities<V> {
    /// Creates capabilities that fall back to `PartialEq` and `Display`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the equality predicate (builder pattern).
    #[must_use]
    pub fn with_equality(mut self, equality: impl Fn(&V, &V) -> bool + 'static) -> Self {
        self.equality = Some(Box::new(equality));
        self
    }

    /// Sets the display function (builder pattern).
    #[must_use]
    pub fn with_display(mut self, display: impl Fn(&V) -> String + 'static) -> Self {
        self.display = Some(Box::new(display));
        self
    }

    /// Returns true if a display function was supplied.
    #[must_use]
    pub fn has_display(&self) -> bool {
        self.display.is_some()
    }

    /// Renders a value through the display function, if one was supplied.
    #[must_use]
    pub fn display(&self, value: &V) -> Option<String> {
        self.display.as_ref().map(|f| f(value))
    }
}

impl<V: PartialEq> Capabilities<V> {
    /// Compares two values with the equality predicate, or `==` when absent.
    #[must_use]
    pub fn equals(&self, lhs: &V, rhs: &V) -> bool {
        match &self.equality {
            Some(f) => f(lhs, rhs),
            None => lhs == rhs,
        }
    }
}

impl<V> fmt::Debug for Capabilities<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capabilities")
            .field("equality", &self.equality.is_some())
            .field("display", &self.display.is_some())
            .finish()
    }
}
