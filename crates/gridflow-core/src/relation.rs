//! Fetch-on-first-access relationship caching.
//!
//! Every domain object carries one [`Relation`] per relationship
//! field. The first access runs the loader and caches the resolved
//! value for the object's lifetime; later accesses return the cached
//! value without touching the network. A failed load leaves the slot
//! unset so a later access can retry.

use std::sync::Arc;

use tokio::sync::OnceCell;

use gridflow_api::{ApiClient, Error};

/// A lazily resolved relationship value.
///
/// Built on `tokio::sync::OnceCell`, which also coalesces concurrent
/// first accesses into a single fetch -- losers of the race wait for
/// the winner's result instead of issuing their own call.
#[derive(Default)]
pub struct Relation<T> {
    cell: OnceCell<T>,
}

impl<T> Relation<T> {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// The cached value, if the relationship has been resolved.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Return the cached value, running `loader` on first access.
    ///
    /// An `Err` from the loader propagates unchanged and does not
    /// poison the slot: the next call runs the loader again.
    pub async fn get_or_load<F, Fut>(&self, loader: F) -> Result<&T, Error>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, Error>>,
    {
        self.cell.get_or_try_init(loader).await
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Relation<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.cell.get() {
            Some(v) => f.debug_tuple("Relation").field(v).finish(),
            None => f.write_str("Relation(<not loaded>)"),
        }
    }
}

/// Build one domain object per raw schema entry.
pub(crate) fn hydrate<R, T>(
    api: &Arc<ApiClient>,
    raw: Vec<R>,
    mk: impl Fn(Arc<ApiClient>, R) -> T,
) -> Vec<T> {
    raw.into_iter().map(|r| mk(Arc::clone(api), r)).collect()
}

/// Unwrap a single-valued relationship loaded through the list path.
pub(crate) fn single<T>(items: Vec<T>, field: &'static str) -> Result<T, Error> {
    items
        .into_iter()
        .next()
        .ok_or(Error::MissingRelationship { field })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[tokio::test]
    async fn first_access_loads_then_caches() {
        let relation: Relation<Vec<String>> = Relation::new();
        let calls = AtomicUsize::new(0);

        let load = || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec!["A".to_owned(), "B".to_owned()])
        };

        let first = relation.get_or_load(load).await.unwrap().clone();
        let second = relation.get_or_load(load).await.unwrap().clone();

        assert_eq!(first, vec!["A", "B"]);
        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_result_still_counts_as_resolved() {
        let relation: Relation<Vec<String>> = Relation::new();
        let calls = AtomicUsize::new(0);

        let load = || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        };

        assert!(relation.get_or_load(load).await.unwrap().is_empty());
        assert!(relation.get_or_load(load).await.unwrap().is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_load_leaves_slot_retryable() {
        let relation: Relation<Vec<String>> = Relation::new();
        let calls = AtomicUsize::new(0);

        let failing = || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(Error::Api {
                status: 500,
                message: "boom".into(),
            })
        };
        assert!(relation.get_or_load(failing).await.is_err());
        assert!(relation.get().is_none());

        let succeeding = || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec!["A".to_owned()])
        };
        assert_eq!(relation.get_or_load(succeeding).await.unwrap().len(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn single_unwraps_one_element() {
        assert_eq!(single(vec![7], "x").unwrap(), 7);
        assert!(matches!(
            single(Vec::<i32>::new(), "x").unwrap_err(),
            Error::MissingRelationship { field: "x" }
        ));
    }
}
