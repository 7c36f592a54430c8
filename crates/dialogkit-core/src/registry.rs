//! Name-based component lookup
//!
//! Components (policies, featurizers, channels...) are registered at
//! startup under a dotted path such as `policies.memoization.MemoizationPolicy`
//! together with an optional parent path and a constructor. Configuration
//! files then refer to them by that path, or by the last segment alone when
//! it is unique.

use crate::error::RegistryError;
use indexmap::IndexMap;
use std::sync::Arc;

pub type Constructor<T> = Arc<dyn Fn() -> Box<T> + Send + Sync>;

struct Entry<T: ?Sized> {
    parent: Option<String>,
    constructor: Constructor<T>,
}

pub struct Registry<T: ?Sized> {
    entries: IndexMap<String, Entry<T>>,
}

fn short_name(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}

impl<T: ?Sized> Registry<T> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Register `constructor` under `path`, below `parent` if given.
    ///
    /// The parent has to be registered first, so the hierarchy stays acyclic.
    pub fn register<F>(
        &mut self,
        path: &str,
        parent: Option<&str>,
        constructor: F,
    ) -> Result<(), RegistryError>
    where
        F: Fn() -> Box<T> + Send + Sync + 'static,
    {
        if self.entries.contains_key(path) {
            return Err(RegistryError::Duplicate {
                path: path.to_string(),
            });
        }
        if let Some(parent) = parent.filter(|p| !self.entries.contains_key(*p)) {
            return Err(RegistryError::NotFound {
                path: parent.to_string(),
            });
        }
        self.entries.insert(
            path.to_string(),
            Entry {
                parent: parent.map(str::to_string),
                constructor: Arc::new(constructor),
            },
        );
        log::debug!("Registered component '{}'", path);
        Ok(())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Registered paths in registration order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Resolve a dotted path, or a bare name if it matches exactly one entry
    pub fn class_from_module_path(
        &self,
        module_path: &str,
    ) -> Result<Constructor<T>, RegistryError> {
        if let Some(entry) = self.entries.get(module_path) {
            return Ok(Arc::clone(&entry.constructor));
        }

        if module_path.contains('.') {
            return Err(RegistryError::NotFound {
                path: module_path.to_string(),
            });
        }

        let candidates: Vec<(&String, &Entry<T>)> = self
            .entries
            .iter()
            .filter(|(path, _)| short_name(path) == module_path)
            .collect();

        match candidates.as_slice() {
            [] => Err(RegistryError::NotFound {
                path: module_path.to_string(),
            }),
            [(_, entry)] => Ok(Arc::clone(&entry.constructor)),
            _ => Err(RegistryError::Ambiguous {
                name: module_path.to_string(),
                candidates: candidates.iter().map(|(p, _)| p.to_string()).collect(),
            }),
        }
    }

    /// Resolve `module_path` and build a fresh instance
    pub fn create(&self, module_path: &str) -> Result<Box<T>, RegistryError> {
        let constructor = self.class_from_module_path(module_path)?;
        Ok(constructor())
    }

    /// Every registered descendant of `path`.
    ///
    /// Direct children come first, followed by the descendants of each child
    /// in turn.
    pub fn all_subclasses(&self, path: &str) -> Vec<&str> {
        let children: Vec<&str> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.parent.as_deref() == Some(path))
            .map(|(p, _)| p.as_str())
            .collect();

        let mut result = children.clone();
        for child in children {
            result.extend(self.all_subclasses(child));
        }
        result
    }
}

impl<T: ?Sized> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Full type path of `value`, e.g. `dialogkit_core::registry::Registry<...>`
pub fn module_path_from_instance<T: ?Sized>(value: &T) -> &'static str {
    std::any::type_name_of_val(value)
}
