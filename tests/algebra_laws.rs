use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use filesets::config::Domain;
use filesets::engine::Engine;
use filesets::error::FilesetsError;
use filesets::set::Set;
use filesets::token::Operator;
use filesets::source::MemorySource;

const MAX_ID: u32 = 200;

fn random_contents(rng: &mut StdRng, density: f64) -> String {
    (1..=MAX_ID)
        .filter(|_| rng.gen_bool(density))
        .map(|id| format!("{id}\n"))
        .collect()
}

fn random_source(seed: u64) -> MemorySource {
    let mut rng = StdRng::seed_from_u64(seed);
    MemorySource::new()
        .with("a", random_contents(&mut rng, 0.3))
        .with("b", random_contents(&mut rng, 0.5))
        .with("c", random_contents(&mut rng, 0.1))
}

/// Asserts both expressions produce the same members for a range of inputs.
fn equivalent(left: &str, right: &str) {
    for seed in 0..16 {
        let source = random_source(seed);
        let engine = Engine::new(Domain::new(MAX_ID).unwrap(), &source);
        let l = engine.execute(left).unwrap();
        let r = engine.execute(right).unwrap();
        assert_eq!(l.ids(), r.ids(), "{left} vs {right} (seed {seed})");
    }
}

#[test]
fn union_and_intersection_commute() {
    equivalent("a U b", "b U a");
    equivalent("a X b", "b X a");
}

#[test]
fn union_and_intersection_associate() {
    equivalent("( a U b ) U c", "a U ( b U c )");
    equivalent("( a X b ) X c", "a X ( b X c )");
    equivalent("a U b U c", "c U ( b U a )");
}

#[test]
fn double_inversion_is_identity() {
    equivalent("I ( I a )", "a");
}

#[test]
fn difference_is_intersection_with_complement() {
    equivalent("a D b", "a X ( I b )");
    equivalent("a D b", "a X I b");
}

#[test]
fn de_morgan() {
    equivalent("I ( a U b )", "( I a ) X ( I b )");
    equivalent("I ( a X b )", "( I a ) U ( I b )");
}

#[test]
fn distributivity() {
    equivalent("a X ( b U c )", "( a X b ) U ( a X c )");
    equivalent("a U ( b X c )", "( a U b ) X ( a U c )");
}

#[test]
fn results_stay_inside_the_domain() {
    for seed in 0..8 {
        let source = random_source(seed);
        let engine = Engine::new(Domain::new(MAX_ID).unwrap(), &source);
        for expression in ["I a", "I ( a X b )", "I c U I a", "a D b U I c"] {
            let set = engine.execute(expression).unwrap();
            assert!(set.iter().all(|id| (1..=MAX_ID).contains(&id)), "{expression}");
            assert!(!set.contains(0));
        }
    }
}

#[test]
fn complement_partitions_the_domain() {
    let domain = Domain::new(MAX_ID).unwrap();
    let set = Set::from_ids(domain, "s", [1, 7, 99, MAX_ID]).unwrap();
    let complement = set.clone().invert();
    assert_eq!(set.len() + complement.len(), u64::from(MAX_ID));
    assert!(set.clone().intersect(complement.clone()).unwrap().is_empty());
    assert_eq!(set.union(complement).unwrap().len(), u64::from(MAX_ID));
}

#[test]
fn operations_record_provenance() {
    let domain = Domain::new(10).unwrap();
    let a = Set::from_ids(domain, "a", [1, 2]).unwrap();
    let b = Set::from_ids(domain, "b", [2, 3]).unwrap();
    let c = Set::empty(domain, "c");
    let result = a.difference(b).unwrap().union(c.invert()).unwrap();
    assert_eq!(result.provenance(), "( ( a D b ) U ( I c ) )");
    assert_eq!(result.ids(), (1..=10).collect::<Vec<u32>>());
}

#[test]
fn from_ids_rejects_ids_outside_the_domain() {
    let domain = Domain::new(10).unwrap();
    assert!(Set::from_ids(domain, "zero", [0]).is_err());
    assert!(Set::from_ids(domain, "eleven", [3, 11]).is_err());
    assert!(Set::from_ids(domain, "ten", [10]).is_ok());
}

#[test]
fn combining_sets_over_different_domains_is_an_error() {
    let small = Domain::new(10).unwrap();
    let large = Domain::new(20).unwrap();
    let a = Set::from_ids(small, "a", [1, 2]).unwrap();
    let b = Set::from_ids(large, "b", [2, 15]).unwrap();
    for operator in [Operator::Union, Operator::Intersect, Operator::Difference] {
        let err = a.clone().combine(operator, b.clone()).unwrap_err();
        assert!(matches!(err, FilesetsError::Invariant(_)), "{operator}: {err}");
    }
    assert!(a.clone().union(b.clone()).is_err());
    assert!(b.clone().intersect(a.clone()).is_err());
    let err = a.difference(b).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Internal invariant violated: a is over [1, 10] but b is over [1, 20]"
    );
}
