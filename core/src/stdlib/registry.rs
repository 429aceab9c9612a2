use core::fmt;

use hashbrown::HashMap;
use thiserror::Error;
use tracing::debug;

use super::FunctionProvider;

/// Startup failure while assembling a [`FunctionRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error(
        "Duplicate function name '{name}' registered by {existing} and {duplicate}"
    )]
    DuplicateFunctionName {
        name: String,
        existing: String,
        duplicate: String,
    },
}

struct Entry {
    provider: Box<dyn FunctionProvider>,
    type_name: &'static str,
}

/// Immutable, case-insensitive name to provider map.
///
/// Built once; duplicates are rejected at construction rather than shadowed.
#[derive(Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, Entry>,
}

impl FunctionRegistry {
    /// The registry every engine starts with.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::builder()
            .provider(super::SplitProvider)
            .provider(super::SubstringProvider)
            .provider(super::ZipProvider)
            .provider(super::CrossJoinProvider)
            .provider(super::EqualsProvider)
            .provider(super::DateProvider)
            .build()
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn get(&self, name: &str) -> Option<&dyn FunctionProvider> {
        self.functions
            .get(name.to_lowercase().as_str())
            .map(|entry| entry.provider.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Folded names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for name in self.names() {
            if let Some(entry) = self.functions.get(name) {
                map.entry(&name, &entry.type_name);
            }
        }
        map.finish()
    }
}

/// Collects providers in registration order.
#[derive(Default)]
pub struct RegistryBuilder {
    providers: Vec<(Box<dyn FunctionProvider>, &'static str)>,
}

impl RegistryBuilder {
    pub fn provider<P: FunctionProvider + 'static>(mut self, provider: P) -> Self {
        self.providers
            .push((Box::new(provider), core::any::type_name::<P>()));
        self
    }

    /// Add an already boxed provider under an explicit type label.
    pub fn boxed(mut self, provider: Box<dyn FunctionProvider>, type_name: &'static str) -> Self {
        self.providers.push((provider, type_name));
        self
    }

    /// Fold names to lower case and reject collisions. Blank names are
    /// skipped.
    pub fn build(self) -> Result<FunctionRegistry, RegistryError> {
        let mut functions: HashMap<String, Entry> = HashMap::with_capacity(self.providers.len());
        for (provider, type_name) in self.providers {
            let name = provider.name().trim().to_lowercase();
            if name.is_empty() {
                debug!(provider = type_name, "skipping provider with blank name");
                continue;
            }
            if let Some(existing) = functions.get(&name) {
                return Err(RegistryError::DuplicateFunctionName {
                    name,
                    existing: existing.type_name.to_string(),
                    duplicate: type_name.to_string(),
                });
            }
            functions.insert(name, Entry { provider, type_name });
        }

        let registry = FunctionRegistry { functions };
        debug!(functions = ?registry.names(), "function registry built");
        Ok(registry)
    }
}
