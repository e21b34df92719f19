use async_trait::async_trait;
use std::fmt;
use std::future::Future;
use thiserror::Error;
use tokio::sync::oneshot;

/// Unit of work under test. Each call resolves exactly once, with a value or an error;
/// an error is an outcome to be recorded, not a failure of the run.
#[async_trait]
pub trait Operation: Send + Sync + 'static {
    type Output: Send + 'static;
    type Error: Send + 'static;

    async fn execute(&self, request_id: u64) -> Result<Self::Output, Self::Error>;

    /// Short description used in logs and report params.
    fn describe(&self) -> String {
        "custom operation".to_owned()
    }
}

/// Operation built from an async closure, see [`operation_fn`].
#[derive(Clone)]
pub struct OperationFn<F> {
    f: F,
}

pub fn operation_fn<F, Fut, T, E>(f: F) -> OperationFn<F>
where
    F: Fn(u64) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    OperationFn { f }
}

#[async_trait]
impl<F, Fut, T, E> Operation for OperationFn<F>
where
    F: Fn(u64) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    type Output = T;
    type Error = E;

    async fn execute(&self, request_id: u64) -> Result<T, E> {
        (self.f)(request_id).await
    }
}

impl<F> fmt::Debug for OperationFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationFn").finish_non_exhaustive()
    }
}

/// Completion capability handed to callback-style operations. Resolving consumes it,
/// so an operation can report its outcome once at most.
#[derive(Debug)]
pub struct Done<T, E> {
    sender: oneshot::Sender<Result<T, E>>,
}

impl<T, E> Done<T, E> {
    pub fn resolve(self, result: Result<T, E>) {
        // The receiving side is gone only if the run itself was dropped.
        let _ = self.sender.send(result);
    }

    pub fn succeed(self, value: T) {
        self.resolve(Ok(value))
    }

    pub fn fail(self, error: E) {
        self.resolve(Err(error))
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CallbackError<E> {
    #[error("operation failed: {0}")]
    Operation(E),
    #[error("operation dropped its completion handle without resolving it")]
    Abandoned,
}

/// Adapts operations that signal completion through a callback instead of returning a
/// future, see [`callback_operation`].
pub struct CallbackOperation<F, T, E> {
    f: F,
    _marker: std::marker::PhantomData<fn() -> (T, E)>,
}

pub fn callback_operation<F, T, E>(f: F) -> CallbackOperation<F, T, E>
where
    F: Fn(u64, Done<T, E>) + Send + Sync + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    CallbackOperation {
        f,
        _marker: std::marker::PhantomData,
    }
}

#[async_trait]
impl<F, T, E> Operation for CallbackOperation<F, T, E>
where
    F: Fn(u64, Done<T, E>) + Send + Sync + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    type Output = T;
    type Error = CallbackError<E>;

    async fn execute(&self, request_id: u64) -> Result<T, CallbackError<E>> {
        let (sender, receiver) = oneshot::channel();
        (self.f)(request_id, Done { sender });
        match receiver.await {
            Ok(result) => result.map_err(CallbackError::Operation),
            Err(_) => Err(CallbackError::Abandoned),
        }
    }

    fn describe(&self) -> String {
        "callback operation".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn operation_fn_should_pass_request_id() {
        let operation = operation_fn(|id| async move {
            if id % 2 == 0 {
                Ok(id * 10)
            } else {
                Err(format!("odd request {id}"))
            }
        });
        assert_eq!(operation.execute(4).await, Ok(40));
        assert_eq!(operation.execute(3).await, Err("odd request 3".to_owned()));
    }

    #[tokio::test]
    async fn callback_operation_should_resolve_from_another_task() {
        let operation = callback_operation(|id, done: Done<u64, String>| {
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(1)).await;
                if id == 2 {
                    done.fail("boom".to_owned());
                } else {
                    done.succeed(id);
                }
            });
        });
        assert_eq!(operation.execute(1).await, Ok(1));
        assert_eq!(
            operation.execute(2).await,
            Err(CallbackError::Operation("boom".to_owned()))
        );
    }

    #[tokio::test]
    async fn callback_operation_should_report_abandoned_completion() {
        let operation = callback_operation(|_, done: Done<(), ()>| drop(done));
        assert_eq!(operation.execute(0).await, Err(CallbackError::Abandoned));
    }

    #[tokio::test]
    async fn callback_errors_should_be_cloned_into_reports() {
        let operation = callback_operation(|id, done: Done<u64, String>| {
            done.fail(format!("request {id} rejected"))
        });
        let error = operation.execute(5).await.unwrap_err();
        let copy = error.clone();
        assert_eq!(copy, error);
        assert_eq!(copy.to_string(), "operation failed: request 5 rejected");
    }
}
