use dashmap::DashMap;
use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;

struct Slot<T> {
    generation: u64,
    tx: watch::Sender<Option<T>>,
}

/// Trailing-edge debouncer keyed by caller-supplied string (here: the queried
/// domain). A repeat `run` for the same key within the delay window supersedes
/// the pending one; superseded callers resolve to the final call's outcome
/// instead of firing their own operation. Keys do not interfere with each
/// other, so rapid lookups of different domains each still resolve.
pub struct Debouncer<T> {
    delay: Duration,
    slots: DashMap<String, Slot<T>>,
}

impl<T: Clone + Send + Sync> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            slots: DashMap::new(),
        }
    }

    /// Waits out the quiet period, then either executes `op` (if this call is
    /// still the latest for `key`) or waits for the superseding call's result.
    pub async fn run<F>(&self, key: &str, op: F) -> T
    where
        F: Future<Output = T> + Send,
    {
        let (generation, mut rx) = {
            let mut slot = self.slots.entry(key.to_string()).or_insert_with(|| {
                let (tx, _) = watch::channel(None);
                Slot { generation: 0, tx }
            });
            slot.generation += 1;
            (slot.generation, slot.tx.subscribe())
        };

        tokio::time::sleep(self.delay).await;

        let superseded = self
            .slots
            .get(key)
            .map(|slot| slot.generation != generation)
            .unwrap_or(false);

        if superseded {
            loop {
                {
                    let current = rx.borrow_and_update();
                    if let Some(value) = current.as_ref() {
                        return value.clone();
                    }
                }
                if rx.changed().await.is_err() {
                    // Sender vanished without publishing; fall back to
                    // running the superseded operation directly.
                    break;
                }
            }
            return op.await;
        }

        let value = op.await;
        // Clear the slot only if no newer call claimed it while op ran; a
        // pending newer call will publish on the same channel when it wins.
        if let Some((_, slot)) = self
            .slots
            .remove_if(key, |_, slot| slot.generation == generation)
        {
            let _ = slot.tx.send(Some(value.clone()));
        }
        value
    }
}
