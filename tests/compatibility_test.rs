use sortkit::SortSequence;
use sortkit::prelude::*;
use std::collections::VecDeque;

// Simulate an external container with non-contiguous storage (a fixed ring buffer).
struct RingBuffer {
    slots: Vec<i64>,
    head: usize,
}

impl RingBuffer {
    fn new(values: &[i64], head: usize) -> Self {
        let len = values.len();
        let mut slots = vec![0; len];
        for (i, value) in values.iter().enumerate() {
            slots[(head + i) % len] = *value;
        }
        Self { slots, head }
    }

    fn physical(&self, index: usize) -> usize {
        (self.head + index) % self.slots.len()
    }

    fn to_vec(&self) -> Vec<i64> {
        (0..self.slots.len())
            .map(|i| self.slots[self.physical(i)])
            .collect()
    }
}

// Implement SortSequence for the external struct.
// This proves the trait is implementable by "outside crates".
impl SortSequence for RingBuffer {
    type Item = i64;

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn get(&self, index: usize) -> &i64 {
        &self.slots[self.physical(index)]
    }

    fn set(&mut self, index: usize, value: i64) {
        let physical = self.physical(index);
        self.slots[physical] = value;
    }

    fn swap(&mut self, a: usize, b: usize) {
        let (a, b) = (self.physical(a), self.physical(b));
        self.slots.swap(a, b);
    }
}

#[test]
fn test_external_sequence_compatibility() {
    let values = [5, -2, 9, 0, 3, 3, -7];
    let mut expected = values.to_vec();
    expected.sort();

    let mut ring = RingBuffer::new(&values, 4);
    bubble_sort(&mut ring);
    assert_eq!(ring.to_vec(), expected);

    let mut ring = RingBuffer::new(&values, 2);
    quick_sort(&mut ring, 0, values.len() - 1).unwrap();
    assert_eq!(ring.to_vec(), expected);

    let mut ring = RingBuffer::new(&values, 6);
    count_sort(&mut ring);
    assert_eq!(ring.to_vec(), expected);

    let mut ring = RingBuffer::new(&values, 1);
    bucket_sort_by_key(&mut ring, |v| Bucket::new([*v]), Bucket::cmp);
    assert_eq!(ring.to_vec(), expected);
}

#[test]
fn test_vec_deque() {
    let mut input: VecDeque<i32> = VecDeque::new();
    // Grow at both ends so the storage wraps.
    for i in 0..6 {
        input.push_back(i * 2);
        input.push_front(i * 2 + 1);
    }

    let mut expected: Vec<i32> = input.iter().copied().collect();
    expected.sort();

    let mut sorted = input.clone();
    quick_sort(&mut sorted, 0, 11).unwrap();
    assert_eq!(sorted, expected);

    let mut sorted = input.clone();
    count_sort_with(&mut sorted, &(0..12).collect::<Vec<_>>()).unwrap();
    assert_eq!(sorted, expected);
}

#[test]
fn test_slice_subrange() {
    let mut data = [4, 3, 2, 1, 0];

    // A sub-slice is a sequence of its own; the elements around it stay put.
    bubble_sort(&mut data[1..4]);
    assert_eq!(data, [4, 1, 2, 3, 0]);
}
