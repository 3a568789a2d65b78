//! Named helper functions made available to every template.

use minijinja::functions::Function;
use minijinja::value::{FunctionArgs, FunctionResult, Value};
use minijinja::Environment;
use std::collections::BTreeMap;

/// Table of functions injected into each compiled template's scope.
///
/// # Example
///
/// ```
/// use templates_map::FuncMap;
///
/// let funcs = FuncMap::new().with("upper", |s: String| s.to_uppercase());
/// assert!(funcs.contains("upper"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FuncMap {
    functions: BTreeMap<String, Value>,
}

impl FuncMap {
    /// Create an empty function table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a Rust function or closure under `name`.
    ///
    /// A function already registered under `name` is replaced.
    pub fn insert<F, Rv, Args>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: Function<Rv, Args> + for<'a> Function<Rv, <Args as FunctionArgs<'a>>::Output>,
        Rv: FunctionResult,
        Args: for<'a> FunctionArgs<'a>,
    {
        self.insert_value(name, Value::from_function::<F, Rv, Args>(f))
    }

    /// Builder form of [`FuncMap::insert`].
    pub fn with<F, Rv, Args>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Function<Rv, Args> + for<'a> Function<Rv, <Args as FunctionArgs<'a>>::Output>,
        Rv: FunctionResult,
        Args: for<'a> FunctionArgs<'a>,
    {
        self.insert(name, f);
        self
    }

    /// Register an already constructed callable value.
    pub fn insert_value(&mut self, name: impl Into<String>, value: Value) -> &mut Self {
        self.functions.insert(name.into(), value);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.functions.keys().map(String::as_str).collect()
    }

    pub(crate) fn apply(&self, env: &mut Environment<'static>) {
        for (name, value) in &self.functions {
            env.add_global(name.clone(), value.clone());
        }
    }
}
