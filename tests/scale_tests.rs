use rand::Rng;
use sortkit::prelude::*;
use std::time::Instant;

#[test]
fn test_quick_sort_100k() {
    let count = 100_000;
    println!("Generating {} random elements...", count);

    let mut rng = rand::rng();
    let mut input: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    println!("Sorting {} elements...", count);
    let start = Instant::now();
    quick_sort(&mut input, 0, count - 1).unwrap();
    println!("Sorted 100k elements in {:?}", start.elapsed());

    for i in 0..count - 1 {
        assert!(input[i] <= input[i + 1], "Sort failed at index {}", i);
    }
}

#[test]
fn test_quick_sort_sorted_input_does_not_overflow_stack() {
    // Already sorted input drives the pivot choice to the range maximum, so every partition
    // peels off a single element.
    let count = 10_000;
    let mut input: Vec<u32> = (0..count).collect();
    let expected = input.clone();

    quick_sort(&mut input, 0, count as usize - 1).unwrap();
    assert_eq!(input, expected);
}

#[test]
fn test_count_sort_1m_small_alphabet() {
    let count = 1_000_000;
    let mut rng = rand::rng();
    let mut input: Vec<u8> = (0..count).map(|_| rng.random_range(0..16)).collect();

    let mut expected = input.clone();
    expected.sort_unstable();

    let start = Instant::now();
    count_sort(&mut input);
    println!("Count sorted 1M elements in {:?}", start.elapsed());
    assert_eq!(input, expected);

    let mut input: Vec<u8> = (0..count).map(|_| rng.random_range(0..16)).collect();
    let mut expected = input.clone();
    expected.sort_unstable();

    let uniques: Vec<u8> = (0..16).collect();
    count_sort_with(&mut input, &uniques).unwrap();
    assert_eq!(input, expected);
}

#[test]
fn test_bucket_sort_1m() {
    let count = 1_000_000;
    let mut rng = rand::rng();
    let mut input: Vec<(u16, u16, u32)> = (0..count)
        .map(|id| (rng.random_range(0..64), rng.random_range(0..64), id))
        .collect();

    let mut expected = input.clone();
    expected.sort_by_key(|item| (item.0, item.1));

    let start = Instant::now();
    bucket_sort_by_key(&mut input, |item| Bucket::new([item.0, item.1]), Bucket::cmp);
    println!("Bucket sorted 1M elements in {:?}", start.elapsed());
    assert_eq!(input, expected);
}
