
use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;

use crate::containers::fluent::DependencyConfig;
use crate::interfaces::container::Container;
use crate::settings::ContainerSettings;

/// Thread-safe registry keyed by the capability's `TypeId`.
///
/// Each entry boxes the `Arc<T>` it was registered with, so resolving clones
/// the handle out and no map guard outlives the call.
pub struct BasicContainer {
    instances: DashMap<TypeId, Box<dyn Any + Send + Sync>>,
    settings: ContainerSettings,
}

impl BasicContainer {
    pub fn new() -> Self {
        Self::with_settings(ContainerSettings::default())
    }

    /// Settings are fixed for the lifetime of the container.
    pub fn with_settings(settings: ContainerSettings) -> Self {
        BasicContainer {
            instances: DashMap::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &ContainerSettings {
        &self.settings
    }

    /// Number of bound capabilities.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Register `instance` and return a handle for chaining further
    /// registrations with [`DependencyConfig::and`].
    pub fn register_dependency<T>(&self, instance: Arc<T>) -> DependencyConfig<'_, Self>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        DependencyConfig::register_dependency(self, instance)
    }
}

impl Container for BasicContainer {
    fn register<T: ?Sized + Send + Sync + 'static>(&self, instance: Arc<T>) {
        let type_id = TypeId::of::<T>();
        // The replaced instance is dropped here, after the shard lock is released.
        let previous = self.instances.insert(type_id, Box::new(instance));
        if self.settings.trace_register {
            let action = if previous.is_some() { "Replaced" } else { "Registered" };
            log::debug!("[{}] {} dependency: {}", self.settings.name, action, type_name::<T>());
        }
    }

    fn resolve<T: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        let type_id = TypeId::of::<T>();
        let resolved = self.instances.get(&type_id)
            .and_then(|instance| instance.downcast_ref::<Arc<T>>().cloned());
        if resolved.is_none() && self.settings.trace_missing {
            log::debug!("[{}] Unknown dependency requested: {}", self.settings.name, type_name::<T>());
        }
        resolved
    }
}

impl Default for BasicContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BasicContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicContainer")
            .field("name", &self.settings.name)
            .field("bindings", &self.instances.len())
            .finish()
    }
}
