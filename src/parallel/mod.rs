//! Run independent jobs on a bounded number of worker threads

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread;
use tracing::debug;

/// Run the job over every input, with at most `workers` running at once.
/// Results come back in input order regardless of which finished first. Every
/// input is attempted; if any failed, all the errors are returned together,
/// in input order.
///
/// With one worker (or zero) the jobs run in turn on the calling thread.
pub fn dispatch<I, T, E, F>(inputs: Vec<I>, workers: usize, job: F) -> Result<Vec<T>, Vec<E>>
where
    I: Send,
    T: Send,
    E: Send,
    F: Fn(usize, I) -> Result<T, E> + Sync,
{
    let count = inputs.len();

    if workers <= 1 || count <= 1 {
        let mut results = Vec::with_capacity(count);
        let mut errors = Vec::new();
        for (index, input) in inputs
            .into_iter()
            .enumerate()
        {
            match job(index, input) {
                Ok(value) => results.push(value),
                Err(error) => errors.push(error),
            }
        }
        return if errors.is_empty() {
            Ok(results)
        } else {
            Err(errors)
        };
    }

    let workers = workers.min(count);
    debug!("Dispatching {} jobs across {} workers", count, workers);

    let pending: Mutex<VecDeque<(usize, I)>> = Mutex::new(
        inputs
            .into_iter()
            .enumerate()
            .collect(),
    );
    let results: Mutex<Vec<Option<T>>> = Mutex::new(
        (0..count)
            .map(|_| None)
            .collect(),
    );
    let errors: Mutex<Vec<(usize, E)>> = Mutex::new(Vec::new());

    thread::scope(|s| {
        for worker in 0..workers {
            let pending = &pending;
            let results = &results;
            let errors = &errors;
            let job = &job;

            s.spawn(move || loop {
                let next = lock(pending).pop_front();
                let Some((index, input)) = next else {
                    debug!(worker, "No more jobs");
                    break;
                };

                match job(index, input) {
                    Ok(value) => lock(results)[index] = Some(value),
                    Err(error) => lock(errors).push((index, error)),
                }
            });
        }
    });

    let mut errors = errors
        .into_inner()
        .unwrap_or_else(PoisonError::into_inner);

    if !errors.is_empty() {
        errors.sort_by_key(|(index, _)| *index);
        return Err(errors
            .into_iter()
            .map(|(_, error)| error)
            .collect());
    }

    Ok(results
        .into_inner()
        .unwrap_or_else(PoisonError::into_inner)
        .into_iter()
        .flatten()
        .collect())
}

// A job that panicked has already taken its worker down with it (and
// thread::scope() will re-raise the panic); the data behind the lock is
// still good.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}
