
use std::sync::Arc;

/// A registry holding at most one instance per capability type.
///
/// `T` is the declared capability, usually a trait object such as
/// `dyn Logger`, and is the lookup key for both operations.
pub trait Container: Send + Sync {
    // Takes &self so registration works through shared handles
    fn register<T: ?Sized + Send + Sync + 'static>(&self, instance: Arc<T>);
    fn resolve<T: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<T>>;
}
