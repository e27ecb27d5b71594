// src/domain/post/services.rs
use rand::Rng;
use rand::seq::index;

/// Picks up to `amount` items uniformly at random without replacement.
///
/// The result order is random as well; callers must not rely on it.
pub fn sample_without_replacement<T, R>(candidates: Vec<T>, amount: usize, rng: &mut R) -> Vec<T>
where
    R: Rng + ?Sized,
{
    let amount = amount.min(candidates.len());
    if amount == 0 {
        return Vec::new();
    }

    let picks = index::sample(rng, candidates.len(), amount);
    let mut slots: Vec<Option<T>> = candidates.into_iter().map(Some).collect();
    picks
        .into_iter()
        .filter_map(|i| slots.get_mut(i).and_then(Option::take))
        .collect()
}
