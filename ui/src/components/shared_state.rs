use dioxus::prelude::*;

use dirikita_common::batch::{BatchManager, ProduceBatch};
use dirikita_common::Fixtures;

/// State shared by every page.
///
/// The fixtures never change after startup. The managed batch is replaced when
/// a new planting is registered.
#[derive(Clone, Debug)]
pub struct SharedState {
    pub fixtures: Fixtures,
    pub batch: BatchManager,
    /// Plantings registered this session.
    pub registered: u32,
}

impl SharedState {
    pub fn new() -> Self {
        let fixtures = Fixtures::builtin();
        let batch = BatchManager::new(fixtures.current_batch.clone());
        Self {
            fixtures,
            batch,
            registered: 0,
        }
    }

    /// Id for the next registered planting, numbered after the fixture batch.
    pub fn next_batch_id(&self, year: i32) -> String {
        format!("B-{year}-{:03}", self.registered + 2)
    }

    /// Make a newly registered planting the managed batch.
    pub fn register(&mut self, batch: ProduceBatch) {
        self.registered += 1;
        self.batch = BatchManager::new(batch);
    }
}

pub fn use_shared_state() -> Signal<SharedState> {
    use_context::<Signal<SharedState>>()
}
