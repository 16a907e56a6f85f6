use rand::rngs::StdRng;
use rand::SeedableRng;

use filesets::config::Domain;
use filesets::engine::Engine;
use filesets::set::Set;
use filesets::shuffle::{order_ids, shuffle_ids, OutputOrder};
use filesets::source::MemorySource;

#[test]
fn ascending_order_by_default() {
    let domain = Domain::new(100).unwrap();
    let set = Set::from_ids(domain, "s", [42, 7, 99, 1]).unwrap();
    assert_eq!(OutputOrder::default(), OutputOrder::Ascending);
    assert_eq!(order_ids(set, OutputOrder::Ascending), vec![1, 7, 42, 99]);
}

#[test]
fn shuffled_output_is_a_permutation() {
    let source = MemorySource::new().with("f", (1..=500).map(|i| format!("{i}\n")).collect::<String>());
    let engine = Engine::new(Domain::new(1000).unwrap(), &source);
    let ascending = engine.execute_collect("f", OutputOrder::Ascending).unwrap();
    let mut shuffled = engine.execute_collect("f", OutputOrder::Shuffled).unwrap();
    assert_eq!(shuffled.len(), ascending.len());
    // 500 elements landing back in order is practically impossible
    assert_ne!(shuffled, ascending);
    shuffled.sort_unstable();
    assert_eq!(shuffled, ascending);
}

#[test]
fn empty_set_gives_empty_output() {
    let domain = Domain::new(10).unwrap();
    assert!(order_ids(Set::empty(domain, "e"), OutputOrder::Shuffled).is_empty());
    assert!(order_ids(Set::empty(domain, "e"), OutputOrder::Ascending).is_empty());
}

#[test]
fn single_member_is_unchanged() {
    let mut ids = vec![5];
    shuffle_ids(&mut ids, &mut StdRng::seed_from_u64(1));
    assert_eq!(ids, vec![5]);
}

#[test]
fn seeded_shuffle_is_reproducible() {
    let mut first: Vec<u32> = (1..=50).collect();
    let mut second = first.clone();
    shuffle_ids(&mut first, &mut StdRng::seed_from_u64(7));
    shuffle_ids(&mut second, &mut StdRng::seed_from_u64(7));
    assert_eq!(first, second);
}

#[test]
fn positions_are_near_uniform() {
    const RUNS: usize = 6000;
    let mut rng = StdRng::seed_from_u64(2024);
    // counts[position][id - 1]
    let mut counts = [[0usize; 6]; 6];
    for _ in 0..RUNS {
        let mut ids: Vec<u32> = (1..=6).collect();
        shuffle_ids(&mut ids, &mut rng);
        for (position, id) in ids.iter().enumerate() {
            counts[position][*id as usize - 1] += 1;
        }
    }
    // each cell expects RUNS / 6 = 1000
    for row in counts.iter() {
        for &count in row.iter() {
            assert!((800..1200).contains(&count), "skewed shuffle: {counts:?}");
        }
    }
}
