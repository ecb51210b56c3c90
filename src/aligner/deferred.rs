use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::task::{Context, Poll};

/// A computation that has not started yet.
///
/// Nothing runs until [`Deferred::start`] is called or the value is awaited, and dropping it
/// discards the work. Awaiting runs the whole sweep on the polling thread, it is never split
/// into smaller steps.
#[must_use = "deferred work does nothing unless started or awaited"]
pub struct Deferred<F> {
    work: F,
}

impl<F, R> Deferred<F>
where
    F: FnOnce() -> R,
{
    pub fn new(work: F) -> Self {
        Self { work }
    }

    pub fn start(self) -> R {
        (self.work)()
    }
}

impl<F, R> IntoFuture for Deferred<F>
where
    F: FnOnce() -> R,
{
    type Output = R;
    type IntoFuture = DeferredFuture<F>;

    fn into_future(self) -> DeferredFuture<F> {
        DeferredFuture {
            work: Some(self.work),
        }
    }
}

/// Future of a [`Deferred`]. The work runs on the first poll.
#[must_use = "futures do nothing unless polled"]
pub struct DeferredFuture<F> {
    work: Option<F>,
}

// the work is moved out by value and never pinned
impl<F> Unpin for DeferredFuture<F> {}

impl<F, R> Future for DeferredFuture<F>
where
    F: FnOnce() -> R,
{
    type Output = R;

    fn poll(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<R> {
        let Some(work) = self.work.take() else {
            panic!("deferred work polled after completion");
        };
        Poll::Ready(work())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::task::Waker;

    use super::*;
    use crate::aligner::Aligner;

    #[test]
    fn test_nothing_runs_until_started() {
        let ran = Cell::new(false);
        let deferred = Deferred::new(|| ran.set(true));
        assert!(!ran.get());
        deferred.start();
        assert!(ran.get());
    }

    #[test]
    fn test_dropping_discards_work() {
        let ran = Cell::new(false);
        drop(Deferred::new(|| ran.set(true)));
        assert!(!ran.get());
    }

    #[test]
    fn test_work_runs_on_first_poll() {
        let ran = Cell::new(false);
        let mut future = Deferred::new(|| {
            ran.set(true);
            7
        })
        .into_future();
        assert!(!ran.get());

        let mut cx = Context::from_waker(Waker::noop());
        assert_eq!(Pin::new(&mut future).poll(&mut cx), Poll::Ready(7));
        assert!(ran.get());
    }

    #[test]
    fn test_dropping_the_future_discards_work() {
        let ran = Cell::new(false);
        drop(Deferred::new(|| ran.set(true)).into_future());
        assert!(!ran.get());
    }

    #[test]
    fn test_await_aligner() {
        let aligner = Aligner::<i32>::default();
        let mut future = aligner.defer("ACGT", "ACGT").into_future();
        let mut cx = Context::from_waker(Waker::noop());
        match Pin::new(&mut future).poll(&mut cx) {
            Poll::Ready(result) => assert_eq!(result.score(), 16),
            Poll::Pending => panic!("deferred alignment did not complete"),
        }
    }
}
