// used to randomize the output order
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::set::Set;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputOrder {
    #[default]
    Ascending,
    Shuffled,
}

/// The IDs of `set`, ascending or shuffled.
pub fn order_ids(set: Set, order: OutputOrder) -> Vec<u32> {
    let mut ids = set.ids();
    if order == OutputOrder::Shuffled {
        let mut rng = StdRng::from_entropy();
        shuffle_ids(&mut ids, &mut rng);
        debug!("( R {} )", set.provenance());
    }
    ids
}

/// Fisher-Yates shuffle: for i from n - 1 down to 1, swap a[i] with a[j]
/// where 0 <= j <= i.
pub fn shuffle_ids<R: Rng + ?Sized>(ids: &mut [u32], rng: &mut R) {
    for i in (1..ids.len()).rev() {
        let j = rng.gen_range(0..=i);
        ids.swap(i, j);
    }
}
