
use std::sync::Arc;

use crate::containers::basic::BasicContainer;
use crate::interfaces::container::Container;

/// Marks a consumer that wants to resolve the capability `T`.
///
/// Implement it once per capability, or derive it with
/// [`SupportsInjection`](crate::SupportsInjection).
pub trait SupportsInjectionOf<T: ?Sized + Send + Sync + 'static> {
    fn container(&self) -> &BasicContainer;

    /// The instance currently bound to `T`, if any.
    fn dependency(&self) -> Option<Arc<T>> {
        self.container().resolve::<T>()
    }
}
