use primehash::{
    ChainingHashMap, HashMapExtensions, ProbingHashMap, find_mode, hash_function_1,
    hash_function_2, load_factor, prime::is_prime,
};
use test_log::test;

#[test]
fn probing_put_keeps_load_below_half() {
    let mut map = ProbingHashMap::new(53, hash_function_1);
    for i in 0..150 {
        map.put(&format!("str{i}"), i * 100);
        if i % 25 == 24 {
            let stats = map.load_stats();
            assert!(stats.load < load_factor::PROBING);
            assert!(is_prime(stats.capacity));
            assert_eq!(stats.size, i + 1);
        }
    }
}

#[test]
fn probing_repeated_keys_count_once() {
    let mut map = ProbingHashMap::new(41, hash_function_2);
    for i in 0..50 {
        map.put(&format!("str{}", i / 3), i * 100);
    }

    assert_eq!(map.get_size(), 17);
    assert_eq!(map.get("str0"), Some(&200));
    assert_eq!(map.get("str16"), Some(&4900));
}

#[test]
fn probing_resize_sweep() {
    let mut map = ProbingHashMap::new(75, hash_function_2);
    let keys: Vec<usize> = (25..1000).step_by(13).collect();
    for &key in &keys {
        map.put(&key.to_string(), key * 42);
    }
    assert_eq!(map.get_size(), keys.len());

    for capacity in (111..1000).step_by(117) {
        map.resize_table(capacity);
        assert!(map.get_capacity() >= capacity);
        assert!(is_prime(map.get_capacity()));

        map.put("some key", 0);
        assert!(map.contains_key("some key"));
        map.remove("some key");

        for &key in &keys {
            assert!(map.contains_key(&key.to_string()));
            assert!(!map.contains_key(&(key + 1).to_string()));
            assert_eq!(map.get(&key.to_string()), Some(&(key * 42)));
        }
        assert_eq!(map.get_size(), keys.len());
    }
}

#[test]
fn chaining_resize_sweep() {
    let mut map = ChainingHashMap::new(75, hash_function_2);
    let keys: Vec<usize> = (1..1000).step_by(13).collect();
    for &key in &keys {
        map.put(&key.to_string(), key * 42);
    }
    assert_eq!(map.get_size(), keys.len());

    for capacity in (111..1000).step_by(117) {
        map.resize_table(capacity);
        assert!(is_prime(map.get_capacity()));

        map.put("some key", 0);
        assert!(map.contains_key("some key"));
        map.remove("some key");

        for &key in &keys {
            assert!(map.contains_key(&key.to_string()));
            assert!(!map.contains_key(&(key + 1).to_string()));
        }
        assert_eq!(map.get_size(), keys.len());
    }
}

#[test]
fn chaining_get_sparse_keys() {
    let mut map = ChainingHashMap::new(151, hash_function_2);
    for i in (200..300).step_by(7) {
        map.put(&i.to_string(), i * 10);
    }

    for i in (200..300).step_by(21) {
        assert_eq!(map.get(&i.to_string()), Some(&(i * 10)));
        assert_eq!(map.get(&(i + 1).to_string()), None);
    }
}

#[test]
fn contains_key_after_remove() {
    let mut probing = ProbingHashMap::new(11, hash_function_1);
    let mut chaining = ChainingHashMap::new(53, hash_function_1);

    for (key, value) in [("key1", 10), ("key2", 20), ("key3", 30)] {
        probing.put(key, value);
        chaining.put(key, value);
    }
    probing.remove("key3");
    chaining.remove("key3");

    let maps: [&dyn HashMapExtensions<i32>; 2] = [&probing, &chaining];
    for map in maps {
        assert!(map.contains_key("key1"));
        assert!(map.contains_key("key2"));
        assert!(!map.contains_key("key3"));
        assert!(!map.contains_key("key4"));
    }
}

#[test]
fn clear_is_idempotent() {
    let mut probing = ProbingHashMap::new(53, hash_function_1);
    let mut chaining = ChainingHashMap::new(53, hash_function_1);
    for i in 0..40 {
        probing.put(&format!("key{i}"), i);
        chaining.put(&format!("key{i}"), i);
    }

    for _ in 0..2 {
        probing.clear();
        chaining.clear();

        assert_eq!(probing.get_size(), 0);
        assert_eq!(chaining.get_size(), 0);
        assert!(probing.get_keys_and_values().is_empty());
        assert!(chaining.get_keys_and_values().is_empty());
        assert_eq!(probing.empty_buckets(), probing.get_capacity());
        assert_eq!(chaining.empty_buckets(), chaining.get_capacity());
    }
}

#[test]
fn probing_keys_and_values_after_resizes() {
    let mut map = ProbingHashMap::new(11, hash_function_2);
    for i in 1..6 {
        map.put(&i.to_string(), (i * 10).to_string());
    }

    map.resize_table(2);
    assert_eq!(map.get_keys_and_values().len(), 5);

    map.put("20", "200".to_string());
    map.remove("1");
    map.resize_table(12);

    let mut pairs = map.get_keys_and_values();
    pairs.sort();
    let expected: Vec<(String, String)> = [("2", "20"), ("20", "200"), ("3", "30"), ("4", "40"), ("5", "50")]
        .iter()
        .map(|&(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_eq!(pairs, expected);
    assert_eq!(map.get_capacity(), 13);
}

#[test]
fn probing_iteration_after_removals() {
    let mut map = ProbingHashMap::new(10, hash_function_2);
    for i in 0..5 {
        map.put(&i.to_string(), (i * 24).to_string());
    }
    map.remove("0");
    map.remove("4");

    let mut keys: Vec<&str> = map.iter().map(|(key, _)| key).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["1", "2", "3"]);
}

#[test]
fn find_mode_examples() {
    let (mode, frequency) = find_mode(&["apple", "apple", "grape", "melon", "peach"]);
    assert_eq!(mode, vec!["apple".to_string()]);
    assert_eq!(frequency, 2);

    let (mut mode, frequency) = find_mode(&[
        "Arch", "Manjaro", "Manjaro", "Mint", "Mint", "Mint", "Ubuntu", "Ubuntu", "Ubuntu",
    ]);
    mode.sort();
    assert_eq!(mode, vec!["Mint".to_string(), "Ubuntu".to_string()]);
    assert_eq!(frequency, 3);
}
