//! Name-keyed registry of single-argument scalar functions.

use std::collections::BTreeMap;

use crate::functions::{base64url_decode, base64url_encode};
use crate::{HostError, Value};

/// A named scalar function of exactly one argument.
///
/// The function pointer type fixes the arity; `deterministic` tells the
/// host the result may be folded or cached across calls with equal
/// arguments.
#[derive(Debug, Clone, Copy)]
pub struct FunctionDef {
    /// Name the host dispatches on.
    pub name: &'static str,
    /// Whether equal arguments always produce equal results.
    pub deterministic: bool,
    /// The function body. Absent-value handling is the body's concern.
    pub func: fn(&Value) -> Value,
}

/// A registry of scalar functions keyed by name.
///
/// Holds only `fn` pointers and static names, so a registry shared across
/// threads needs no locking of its own once populated.
#[derive(Debug, Default)]
pub struct Registry {
    functions: BTreeMap<&'static str, FunctionDef>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a function, replacing any previous definition of the same
    /// name. Safe to repeat.
    pub fn register(&mut self, def: FunctionDef) {
        log::debug!("registering scalar function `{}`", def.name);
        self.functions.insert(def.name, def);
    }

    /// Whether a function with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Names of all registered functions, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions.keys().copied()
    }

    /// Invokes the named function on one argument.
    pub fn call(&self, name: &str, arg: &Value) -> Result<Value, HostError> {
        let def = self
            .functions
            .get(name)
            .ok_or_else(|| HostError::UnknownFunction(name.to_string()))?;
        log::trace!("dispatching scalar function `{}`", name);
        Ok((def.func)(arg))
    }
}

/// Installs `base64url_encode` and `base64url_decode` into the registry.
///
/// The host calls this once during startup. Calling it again, for example
/// once per host connection, re-registers the same definitions and is
/// harmless.
pub fn register_base64url(registry: &mut Registry) {
    registry.register(FunctionDef {
        name: "base64url_encode",
        deterministic: true,
        func: encode_value,
    });
    registry.register(FunctionDef {
        name: "base64url_decode",
        deterministic: true,
        func: decode_value,
    });
}

fn encode_value(arg: &Value) -> Value {
    base64url_encode(arg.as_bytes()).into()
}

fn decode_value(arg: &Value) -> Value {
    base64url_decode(arg.to_text().as_deref()).into()
}
