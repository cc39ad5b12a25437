//! Random-restart execution loop.

use super::config::SearchConfig;
use crate::model::Order;
use crate::scoring::SequenceScore;
use rand::seq::SliceRandom;
use rand::Rng;

/// Result of a random-restart search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best permutation found, as indices into the input.
    pub order: Vec<usize>,

    /// Score of `order` under the search's rule.
    pub best_score: i64,

    /// Random permutations evaluated (the identity baseline excluded).
    pub trials: usize,

    /// How many times the best was replaced, the first candidate included.
    pub improvements: usize,

    /// Best score after each random trial.
    pub score_history: Vec<i64>,
}

impl SearchOutcome {
    /// Materializes the best permutation over `orders`.
    pub fn sequence(&self, orders: &[Order]) -> Vec<Order> {
        self.order.iter().map(|&i| orders[i].clone()).collect()
    }
}

/// Samples uniform random permutations and keeps the best-scoring one.
///
/// A later candidate replaces the best only when its score is strictly
/// lower. This is repeated random restart: there is no crossover,
/// mutation or population.
pub struct RestartRunner;

impl RestartRunner {
    /// Runs the search with the caller's random source.
    ///
    /// At least one random permutation is evaluated even when
    /// `config.trials` is zero.
    pub fn run<S, R>(orders: &[Order], rule: &S, config: &SearchConfig, rng: &mut R) -> SearchOutcome
    where
        S: SequenceScore,
        R: Rng + ?Sized,
    {
        let identity: Vec<usize> = (0..orders.len()).collect();
        let trials = config.trials.max(1);

        let candidates: Vec<Vec<usize>> = (0..trials)
            .map(|_| {
                let mut perm = identity.clone();
                perm.shuffle(&mut *rng);
                perm
            })
            .collect();
        let scores = score_candidates(orders, rule, &candidates, config.parallel);

        // Without the baseline the first trial is always taken; `trials`
        // is at least one, so `order` never stays a placeholder.
        let mut has_best = config.include_identity;
        let baseline = if has_best {
            score_permutation(orders, rule, &identity)
        } else {
            0
        };
        let (mut order, mut best_score) = (identity, baseline);

        let mut improvements = 0usize;
        let mut score_history = Vec::with_capacity(trials);

        for (candidate, score) in candidates.into_iter().zip(scores) {
            if !has_best || score < best_score {
                order = candidate;
                best_score = score;
                has_best = true;
                improvements += 1;
            }
            score_history.push(best_score);
        }

        SearchOutcome {
            order,
            best_score,
            trials,
            improvements,
            score_history,
        }
    }
}

fn score_permutation<S: SequenceScore>(orders: &[Order], rule: &S, perm: &[usize]) -> i64 {
    rule.score(perm.iter().map(|&i| &orders[i]))
}

#[cfg(feature = "parallel")]
fn score_candidates<S: SequenceScore>(
    orders: &[Order],
    rule: &S,
    candidates: &[Vec<usize>],
    parallel: bool,
) -> Vec<i64> {
    use rayon::prelude::*;

    if parallel {
        candidates
            .par_iter()
            .map(|perm| score_permutation(orders, rule, perm))
            .collect()
    } else {
        candidates
            .iter()
            .map(|perm| score_permutation(orders, rule, perm))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn score_candidates<S: SequenceScore>(
    orders: &[Order],
    rule: &S,
    candidates: &[Vec<usize>],
    _parallel: bool,
) -> Vec<i64> {
    candidates
        .iter()
        .map(|perm| score_permutation(orders, rule, perm))
        .collect()
}
