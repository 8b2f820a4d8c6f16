use std::future::Future;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

/// Collapses bursts of calls into one: each call cancels the pending one and
/// schedules `action` with the newest value after `wait`.
pub struct Debouncer<T, F> {
    wait: Duration,
    action: Arc<F>,
    pending: Option<JoinHandle<()>>,
    _value: std::marker::PhantomData<fn(T)>,
}

impl<T, F, Fut> Debouncer<T, F>
where
    T: Send + 'static,
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    pub fn new(wait: Duration, action: F) -> Self {
        Self {
            wait,
            action: Arc::new(action),
            pending: None,
            _value: std::marker::PhantomData,
        }
    }

    pub fn call(&mut self, value: T) {
        if let Some(previous) = self.pending.take() {
            previous.abort();
        }
        let wait = self.wait;
        let action = self.action.clone();
        self.pending = Some(tokio::spawn(async move {
            sleep(wait).await;
            (*action)(value).await;
        }));
    }
}

impl<T, F> Drop for Debouncer<T, F> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
