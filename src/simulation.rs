use crate::error::StocksimError;
use crate::history_store::HistoryStore;
use crate::random_walk::RandomWalk;

/// Drives one simulated day across the whole asset registry.
///
/// Each asset is one independent unit of work: load, generate, save. The
/// first failure propagates with its asset context and stops the tick, so a
/// broken record is never papered over by later assets succeeding.
pub struct SimulationEngine {
    assets: Vec<String>,
    store: HistoryStore,
    walk: RandomWalk,
}

impl SimulationEngine {
    pub fn new(assets: Vec<String>, store: HistoryStore, walk: RandomWalk) -> Self {
        Self {
            assets,
            store,
            walk,
        }
    }

    /// Advance every asset by one simulated day, in registry order.
    pub fn tick(&self) -> Result<(), StocksimError> {
        let mut rng = rand::thread_rng();
        for asset in &self.assets {
            let mut history = self.store.load(asset)?;
            let price = self.walk.next(&mut rng, &mut history);
            self.store.save(asset, &history)?;
            tracing::debug!(
                asset = %asset,
                price,
                days_open = history.days_open(),
                "advanced one day"
            );
        }
        Ok(())
    }

    pub fn assets(&self) -> &[String] {
        &self.assets
    }

    pub fn store(&self) -> &HistoryStore {
        &self.store
    }
}
