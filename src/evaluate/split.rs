//! Deterministic train/test splitting.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{Result, SentimenError};

/// The outcome of a train/test split. Item `x_train[i]` is labeled by
/// `y_train[i]`, and likewise for the test side.
#[derive(Clone, Debug)]
pub struct TrainTestSplit<X, L> {
    pub x_train: Vec<X>,
    pub x_test: Vec<X>,
    pub y_train: Vec<L>,
    pub y_test: Vec<L>,
}

/// Shuffle `(x, y)` pairs with a seeded PRNG and split at
/// `floor(n * (1 - test_fraction))`.
///
/// No stratification. The same seed reproduces the same split within this
/// crate; cross-implementation reproducibility is not promised since it
/// depends on the PRNG algorithm. Fractions of 0.0 or 1.0 are legal and
/// produce an empty test or train side.
pub fn train_test_split<X, L>(
    x: Vec<X>,
    y: Vec<L>,
    test_fraction: f64,
    seed: u64,
) -> Result<TrainTestSplit<X, L>> {
    if x.len() != y.len() {
        return Err(SentimenError::invalid_input(format!(
            "got {} items but {} labels",
            x.len(),
            y.len()
        )));
    }
    if !(0.0..=1.0).contains(&test_fraction) {
        return Err(SentimenError::invalid_input(format!(
            "test_fraction must be within [0, 1], got {test_fraction}"
        )));
    }

    let mut combined: Vec<(X, L)> = x.into_iter().zip(y).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    combined.shuffle(&mut rng);

    let split_at = (combined.len() as f64 * (1.0 - test_fraction)).floor() as usize;
    let test: Vec<(X, L)> = combined.split_off(split_at);

    let (x_train, y_train) = combined.into_iter().unzip();
    let (x_test, y_test) = test.into_iter().unzip();

    Ok(TrainTestSplit {
        x_train,
        x_test,
        y_train,
        y_test,
    })
}
