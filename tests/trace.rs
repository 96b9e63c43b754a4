use std::sync::{Arc, Mutex};

use ilocator::{BasicContainer, Container, ContainerSettings};
use log::{Level, LevelFilter, Log, Metadata, Record};

trait ICache: Send + Sync {}

struct CapturingLogger {
    records: Mutex<Vec<String>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.records.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    records: Mutex::new(Vec::new()),
};

// Records carry the container name, so each test filters on its own.
fn records_for(name: &str) -> Vec<String> {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Debug);
    let prefix = format!("[{}] ", name);
    LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|line| line.starts_with(&prefix))
        .cloned()
        .collect()
}

fn named(name: &str, trace_missing: bool, trace_register: bool) -> BasicContainer {
    records_for(name);
    BasicContainer::with_settings(ContainerSettings {
        name: String::from(name),
        trace_missing,
        trace_register,
    })
}

#[test]
fn test_missing_dependency_is_traced() {
    let container = named("missing", true, false);
    assert!(container.resolve::<dyn ICache>().is_none());

    let records = records_for("missing");
    assert_eq!(records.len(), 1);
    assert!(records[0].starts_with("[missing] Unknown dependency requested: dyn "));
    assert!(records[0].ends_with("ICache"));
}

#[test]
fn test_bound_dependency_is_not_traced() {
    let container = named("bound", true, false);
    container.register(Arc::new(1u8));
    assert!(container.resolve::<u8>().is_some());

    assert!(records_for("bound").is_empty());
}

#[test]
fn test_missing_trace_can_be_disabled() {
    let container = named("quiet", false, false);
    assert!(container.resolve::<dyn ICache>().is_none());

    assert!(records_for("quiet").is_empty());
}

#[test]
fn test_registration_is_traced() {
    let container = named("register", true, true);
    container.register(Arc::new(1u8));
    container.register(Arc::new(2u8));

    assert_eq!(
        records_for("register"),
        vec![
            String::from("[register] Registered dependency: u8"),
            String::from("[register] Replaced dependency: u8"),
        ]
    );
}

#[test]
fn test_registration_is_silent_by_default() {
    let container = named("default-register", true, false);
    container.register(Arc::new(1u8));

    assert!(records_for("default-register").is_empty());
}
