use std::sync::Arc;

use crate::interfaces::container::Container;

/// Chainable registration handle over a borrowed container.
///
/// Every call commits straight to the container; the handle keeps no state
/// of its own.
///
/// ```
/// use std::sync::Arc;
/// use ilocator::{BasicContainer, Container, DependencyConfig};
///
/// trait Store: Send + Sync {}
/// struct MemoryStore;
/// impl Store for MemoryStore {}
///
/// let container = BasicContainer::new();
/// DependencyConfig::register_dependency(&container, Arc::new(8080u16))
///     .and::<dyn Store>(Arc::new(MemoryStore))
///     .and(Arc::new(String::from("localhost")));
///
/// assert_eq!(*container.resolve::<u16>().unwrap(), 8080);
/// assert!(container.resolve::<dyn Store>().is_some());
/// ```
#[derive(Debug)]
pub struct DependencyConfig<'c, C: Container> {
    container: &'c C,
}

impl<'c, C: Container> DependencyConfig<'c, C> {
    pub fn register_dependency<T>(container: &'c C, instance: Arc<T>) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
    {
        container.register(instance);
        DependencyConfig { container }
    }

    pub fn and<T>(self, instance: Arc<T>) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.container.register(instance);
        self
    }

    pub fn container(&self) -> &'c C {
        self.container
    }
}

impl<C: Container> Clone for DependencyConfig<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Container> Copy for DependencyConfig<'_, C> {}
