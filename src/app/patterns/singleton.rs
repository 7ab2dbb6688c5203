use crate::core::{Demo, PatternKind, Result, Transcript};
use crate::utils::error::PatternError;
use crate::utils::validation::validate_range;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use tokio::sync::Barrier;

pub const MAX_CONCURRENT_CALLERS: usize = 1024;

pub struct Acquired<T> {
    pub instance: Arc<T>,
    pub created: bool,
}

/// Lazily constructed shared value guarded by a double-checked lock.
/// At most one instance is ever constructed, however many callers race.
pub struct SingletonCell<T> {
    slot: RwLock<Option<Arc<T>>>,
    creations: AtomicUsize,
}

impl<T> SingletonCell<T> {
    pub const fn new() -> Self {
        Self {
            slot: RwLock::new(None),
            creations: AtomicUsize::new(0),
        }
    }

    pub fn get_or_create<F: FnOnce() -> T>(&self, init: F) -> Acquired<T> {
        // Fast path: shared lock only.
        if let Some(instance) = self
            .slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Acquired {
                instance: Arc::clone(instance),
                created: false,
            };
        }

        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have won the race between the two locks.
        if let Some(instance) = slot.as_ref() {
            return Acquired {
                instance: Arc::clone(instance),
                created: false,
            };
        }

        let instance = Arc::new(init());
        self.creations.fetch_add(1, Ordering::SeqCst);
        *slot = Some(Arc::clone(&instance));
        Acquired {
            instance,
            created: true,
        }
    }

    pub fn creations(&self) -> usize {
        self.creations.load(Ordering::SeqCst)
    }
}

impl<T> Default for SingletonCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct Database {
    pub connection: String,
}

impl Database {
    fn connect() -> Self {
        tracing::debug!("Opening the single database connection");
        Self {
            connection: "singleton://localhost".to_string(),
        }
    }

    /// `OnceLock` flavour: initialisation runs exactly once per process.
    pub fn global() -> &'static Database {
        static INSTANCE: OnceLock<Database> = OnceLock::new();
        INSTANCE.get_or_init(Database::connect)
    }
}

pub struct SingletonDemo {
    concurrent_callers: usize,
}

impl SingletonDemo {
    pub fn new(concurrent_callers: usize) -> Self {
        Self { concurrent_callers }
    }
}

impl Default for SingletonDemo {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_CONCURRENT_CALLERS)
    }
}

#[async_trait::async_trait]
impl Demo for SingletonDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::Singleton
    }

    async fn run(&self) -> Result<Transcript> {
        validate_range(
            "singleton.concurrent_callers",
            self.concurrent_callers,
            1,
            MAX_CONCURRENT_CALLERS,
        )?;
        let mut transcript = Transcript::new(self.kind());

        let cell: Arc<SingletonCell<Database>> = Arc::new(SingletonCell::new());
        let barrier = Arc::new(Barrier::new(self.concurrent_callers));

        let handles: Vec<_> = (0..self.concurrent_callers)
            .map(|_| {
                let cell = Arc::clone(&cell);
                let barrier = Arc::clone(&barrier);
                tokio::spawn(async move {
                    barrier.wait().await;
                    cell.get_or_create(Database::connect).created
                })
            })
            .collect();

        let mut created = 0;
        let mut reused = 0;
        for handle in handles {
            let was_created = handle.await.map_err(|e| PatternError::DemoFailed {
                pattern: PatternKind::Singleton.to_string(),
                message: e.to_string(),
            })?;
            if was_created {
                created += 1;
            } else {
                reused += 1;
            }
        }

        for _ in 0..created {
            transcript.line("Creating single instance now.");
        }
        transcript.line(format!(
            "Single instance already created. ({} callers)",
            reused
        ));
        transcript.line(format!("Instances created: {}", cell.creations()));

        let first = Database::global();
        let second = Database::global();
        transcript.line(format!(
            "OnceLock instance {} shared: {}",
            first.connection,
            std::ptr::eq(first, second)
        ));

        Ok(transcript)
    }
}
