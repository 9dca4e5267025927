use std::sync::atomic::Ordering;
use std::time::Instant;

use crate::error::Result;
use crate::math::matrix::Matrix;
use crate::train::epoch_stats::EpochStats;
use crate::train::history::ErrorHistory;
use crate::train::train_config::TrainConfig;

/// A model that can run one pass over already-formatted training data.
pub trait Trainable {
    /// Runs one epoch and returns the error for it. `target` is `None` for
    /// unsupervised rules.
    fn train_epoch(&mut self, input: &Matrix, target: Option<&Matrix>) -> Result<f64>;
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `model` for up to `config.epochs` epochs, appending each epoch's
/// error to `history`, and returns the error of the **last completed epoch**
/// (0 if no epoch ran).
///
/// # Early termination
/// The loop breaks early if:
/// - the epoch error is at or below `config.epsilon`,
/// - the `progress_tx` receiver has been dropped, **or**
/// - `config.stop_flag` is set to `true`.
///
/// # Errors
/// Propagates the first error returned by `Trainable::train_epoch`.
pub fn train_loop<T: Trainable + ?Sized>(
    model: &mut T,
    input: &Matrix,
    target: Option<&Matrix>,
    config: &TrainConfig,
    history: &mut ErrorHistory,
) -> Result<f64> {
    let mut last_error = 0.0;

    for epoch in 1..=config.epochs {
        if stop_requested(config) {
            log::debug!("stop flag set before epoch {epoch}");
            break;
        }

        let t_start = Instant::now();
        let error = model.train_epoch(input, target)?;
        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        history.push(error);
        last_error = error;
        log::debug!("epoch {epoch}/{}: error = {error:.6} ({elapsed_ms} ms)", config.epochs);

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            error,
            elapsed_ms,
        };

        if let Some(ref tx) = config.progress_tx {
            // If the receiver has been dropped, stop training.
            if tx.send(stats).is_err() {
                log::debug!("progress receiver dropped, stopping after epoch {epoch}");
                break;
            }
        }

        if let Some(epsilon) = config.epsilon {
            if error <= epsilon {
                log::debug!("error {error:.6} reached epsilon {epsilon} at epoch {epoch}");
                break;
            }
        }
    }

    Ok(last_error)
}

fn stop_requested(config: &TrainConfig) -> bool {
    config.stop_flag
        .as_ref()
        .is_some_and(|flag| flag.load(Ordering::Relaxed))
}
