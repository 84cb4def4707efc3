// StrMap / ChainMap integration test suite (consolidated).
//
// Each test documents what behavior is being verified and which
// invariants are assumed or asserted. The core invariants exercised:
// - Round-trip: get returns the most recently set value per key.
// - Overwrite: setting a present key replaces in place, count unchanged.
// - Idempotent removal: removing an absent key changes nothing.
// - Growth: contents survive any number of grow-and-rehash steps.
// - Zero-bucket state: a fresh map allocates nothing until the first set.
// - Hasher independence: behavior holds under a custom BuildHasher.
use std::collections::HashSet;
use std::hash::BuildHasher;
use strmap::{ChainMap, StrMap};

// Test: round-trip across many keys.
// Assumes: set has overwrite semantics; get aliases stored values.
// Verifies: get returns the latest value for every key.
#[test]
fn set_get_round_trip() {
    let mut m: StrMap<u64> = StrMap::new();
    for i in 0..100u64 {
        m.set(&format!("k{i}"), i).unwrap();
    }
    for i in 0..100u64 {
        assert_eq!(m.get(&format!("k{i}")), Some(&i));
    }
    assert_eq!(m.len(), 100);
    assert!(m.get("k100").is_none());
}

// Test: overwrite preserves the entry count.
// Verifies: set(k, v1) then set(k, v2) has the same len as a single set.
#[test]
fn overwrite_preserves_count() {
    let mut once: StrMap<i32> = StrMap::new();
    once.set("k", 1).unwrap();

    let mut twice: StrMap<i32> = StrMap::new();
    twice.set("k", 1).unwrap();
    twice.set("k", 2).unwrap();

    assert_eq!(once.len(), twice.len());
    assert_eq!(twice.get("k"), Some(&2));
}

// Test: removal is idempotent and local.
// Verifies: removing an absent key leaves count and other values unchanged.
#[test]
fn idempotent_removal() {
    let mut m: StrMap<i32> = StrMap::new();
    m.set("a", 1).unwrap();
    m.set("b", 2).unwrap();

    assert_eq!(m.remove("a"), Some(1));
    assert_eq!(m.remove("a"), None);
    assert_eq!(m.remove("never"), None);
    assert_eq!(m.len(), 1);
    assert_eq!(m.get("b"), Some(&2));
}

// Test: growth preserves contents (engine-level, watching the bucket array).
// Assumes: nbuckets starts at 0 and doubles under load.
// Verifies: every key resolves to its value after multiple resizes.
#[test]
fn growth_preserves_contents() {
    let mut m: ChainMap<usize> = ChainMap::new();
    assert_eq!(m.nbuckets(), 0);

    let mut sizes = HashSet::new();
    for i in 0..5000 {
        m.insert(&format!("key-{i}"), i).unwrap();
        sizes.insert(m.nbuckets());
    }
    assert!(sizes.len() > 3, "expected several distinct bucket counts");
    assert!(m.nbuckets().is_power_of_two());

    for i in 0..5000 {
        assert_eq!(m.get(&format!("key-{i}")), Some(&i));
    }
    assert_eq!(m.len(), 5000);
}

// Test: interleaved inserts and removes keep the map consistent.
// Verifies: only the surviving half of the keys remains reachable.
#[test]
fn interleaved_insert_remove() {
    let mut m: StrMap<usize> = StrMap::new();
    for i in 0..500 {
        m.set(&format!("k{i}"), i).unwrap();
    }
    for i in (0..500).step_by(2) {
        assert_eq!(m.remove(&format!("k{i}")), Some(i));
    }
    assert_eq!(m.len(), 250);
    for i in 0..500 {
        let got = m.get(&format!("k{i}"));
        if i % 2 == 0 {
            assert_eq!(got, None);
        } else {
            assert_eq!(got, Some(&i));
        }
    }
}

// Test: iteration yields each binding exactly once.
#[test]
fn iteration_yields_each_binding_once() {
    let mut m: StrMap<u32> = StrMap::new();
    for i in 0..50u32 {
        m.set(&format!("n{i}"), i).unwrap();
    }
    let mut seen = HashSet::new();
    for (k, v) in m.iter() {
        assert_eq!(format!("n{v}"), k);
        assert!(seen.insert(k.to_string()), "duplicate key in iteration");
    }
    assert_eq!(seen.len(), 50);
}

// Test: a user-supplied hasher changes nothing observable.
// Assumes: hash bit-patterns are not a contract.
#[test]
fn custom_hasher_same_behavior() {
    #[derive(Clone, Default)]
    struct Fnv1aBuilder;
    struct Fnv1a(u64);
    impl BuildHasher for Fnv1aBuilder {
        type Hasher = Fnv1a;
        fn build_hasher(&self) -> Fnv1a {
            Fnv1a(0xcbf2_9ce4_8422_2325)
        }
    }
    impl std::hash::Hasher for Fnv1a {
        fn write(&mut self, bytes: &[u8]) {
            for &b in bytes {
                self.0 ^= b as u64;
                self.0 = self.0.wrapping_mul(0x0000_0100_0000_01b3);
            }
        }
        fn finish(&self) -> u64 {
            self.0
        }
    }

    let mut m: StrMap<i32, Fnv1aBuilder> = StrMap::with_hasher(Fnv1aBuilder);
    m.set("num1", 10).unwrap();
    m.set("num2", 20).unwrap();
    m.set("num2", 30).unwrap();
    assert_eq!(m.get("num1"), Some(&10));
    assert_eq!(m.get("num2"), Some(&30));
    assert_eq!(m.remove("num1"), Some(10));
    assert!(!m.contains_key("num1"));
}

// Test: clear empties the map but it remains usable.
#[test]
fn clear_then_reuse() {
    let mut m: StrMap<i32> = StrMap::new();
    for i in 0..32 {
        m.set(&format!("k{i}"), i).unwrap();
    }
    m.clear();
    assert!(m.is_empty());
    assert!(m.get("k0").is_none());
    m.set("k0", -1).unwrap();
    assert_eq!(m.get("k0"), Some(&-1));
}

// Test: get_mut writes land in the map's own storage.
#[test]
fn get_mut_aliases_storage() {
    let mut m: StrMap<Vec<u8>> = StrMap::new();
    m.set("buf", vec![1, 2]).unwrap();
    m.get_mut("buf").unwrap().push(3);
    assert_eq!(m.get("buf"), Some(&vec![1, 2, 3]));
}
