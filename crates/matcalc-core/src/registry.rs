//! Strategy factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::MatrixError;
use crate::options::Options;
use crate::pool::WorkerPool;
use crate::strategy::{
    DivideConquerMultiplier, Multiplier, SchoolbookMultiplier, StrassenMultiplier,
};

/// Factory trait for creating multiplication strategies.
pub trait MultiplierFactory: Send + Sync {
    /// Get or create a strategy by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Multiplier>, MatrixError>;

    /// List all available strategy names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
///
/// Every Strassen strategy it hands out shares the factory's worker pool.
pub struct DefaultFactory {
    opts: Options,
    pool: WorkerPool,
    cache: RwLock<HashMap<String, Arc<dyn Multiplier>>>,
}

impl DefaultFactory {
    /// Create a factory whose strategies use `opts` and `pool`.
    #[must_use]
    pub fn new(opts: Options, pool: WorkerPool) -> Self {
        Self {
            opts,
            pool,
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_multiplier(&self, name: &str) -> Result<Arc<dyn Multiplier>, MatrixError> {
        match name {
            "schoolbook" | "naive" => Ok(Arc::new(SchoolbookMultiplier::new())),
            "dc" | "divide-conquer" => Ok(Arc::new(DivideConquerMultiplier::new(self.opts))),
            "strassen" => Ok(Arc::new(StrassenMultiplier::new(
                self.opts,
                self.pool.clone(),
            ))),
            _ => Err(MatrixError::Config(format!("unknown strategy: {name}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new(Options::default(), WorkerPool::default())
    }
}

impl MultiplierFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Multiplier>, MatrixError> {
        // Check cache first
        if let Some(strategy) = self.cache.read().get(name) {
            return Ok(Arc::clone(strategy));
        }

        // Create and cache
        let strategy = self.create_multiplier(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&strategy));
        Ok(strategy)
    }

    fn available(&self) -> Vec<&str> {
        vec!["schoolbook", "dc", "strassen"]
    }
}
