//! A small type-keyed service locator.
//!
//! The composition root owns a [`BasicContainer`], binds one instance per
//! capability type, and hands the container to consumers which resolve the
//! capability they need. Resolving an unbound capability yields `None`.
//!
//! ```
//! use std::sync::Arc;
//! use ilocator::{BasicContainer, Container, SupportsInjection, SupportsInjectionOf};
//!
//! trait Logger: Send + Sync {
//!     fn name(&self) -> &str;
//! }
//!
//! trait Cache: Send + Sync {}
//!
//! struct ConsoleLogger;
//!
//! impl Logger for ConsoleLogger {
//!     fn name(&self) -> &str {
//!         "console"
//!     }
//! }
//!
//! #[derive(SupportsInjection)]
//! #[supports_injection_of(dyn Logger, dyn Cache)]
//! struct Handler {
//!     container: Arc<BasicContainer>,
//! }
//!
//! let container = Arc::new(BasicContainer::new());
//! container.register_dependency::<dyn Logger>(Arc::new(ConsoleLogger));
//!
//! let handler = Handler { container: Arc::clone(&container) };
//! let logger: Option<Arc<dyn Logger>> = handler.dependency();
//! assert_eq!(logger.unwrap().name(), "console");
//!
//! let cache: Option<Arc<dyn Cache>> = handler.dependency();
//! assert!(cache.is_none());
//! assert!(container.resolve::<dyn Cache>().is_none());
//! ```

// Lets derive output name `::ilocator` from inside this crate.
extern crate self as ilocator;

pub mod containers;
pub mod interfaces;
pub mod settings;

pub use containers::basic::BasicContainer;
pub use containers::fluent::DependencyConfig;
pub use interfaces::container::Container;
pub use interfaces::injection::SupportsInjectionOf;
pub use settings::ContainerSettings;

pub use ilocator_derives::SupportsInjection;
