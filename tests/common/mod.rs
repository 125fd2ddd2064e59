//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use codexmonitor_layout::config::LayoutConfig;
use codexmonitor_layout::model::AppModel;
use codexmonitor_layout::storage::{MemoryStore, WidthStore};

pub const SIDEBAR_KEY: &str = "codexmonitor.sidebarWidth";
pub const RIGHT_PANEL_KEY: &str = "codexmonitor.rightPanelWidth";

/// Store that shares its records with the test and logs writes
#[derive(Clone, Default)]
pub struct SharedStore {
    inner: Rc<RefCell<MemoryStore>>,
    writes: Rc<RefCell<Vec<(String, String)>>>,
}

impl SharedStore {
    pub fn with_records<'a>(records: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryStore::with_records(records))),
            writes: Rc::default(),
        }
    }

    pub fn record(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key)
    }

    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.borrow().clone()
    }

    pub fn clear_writes(&self) {
        self.writes.borrow_mut().clear();
    }
}

impl WidthStore for SharedStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.writes
            .borrow_mut()
            .push((key.to_string(), value.to_string()));
        self.inner.borrow_mut().set(key, value)
    }
}

/// Model with empty storage and default config, 1200x800 at scale 1
pub fn test_model() -> AppModel {
    AppModel::new(
        1200,
        800,
        Box::new(MemoryStore::new()),
        LayoutConfig::default(),
    )
}

/// Model backed by a shared store the test can inspect
pub fn test_model_with_store(store: &SharedStore) -> AppModel {
    AppModel::new(1200, 800, Box::new(store.clone()), LayoutConfig::default())
}

/// Tiny deterministic PRNG (xorshift64) for monkey sequences
pub struct XorShift(u64);

impl XorShift {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Float in `[lo, hi)`
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        lo + unit * (hi - lo)
    }
}
