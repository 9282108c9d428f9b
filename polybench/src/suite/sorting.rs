use super::timed;
use rand::Rng;

const ARRAY_SIZE: usize = 100_000;
const MAX_VALUE: i32 = 1_000_000;

/// Three-way quicksort around the middle element.
pub fn quicksort(arr: Vec<i32>) -> Vec<i32> {
    if arr.len() <= 1 {
        return arr;
    }

    let pivot = arr[arr.len() / 2];
    let mut left = vec![];
    let mut middle = vec![];
    let mut right = vec![];
    for x in arr {
        match x.cmp(&pivot) {
            std::cmp::Ordering::Less => left.push(x),
            std::cmp::Ordering::Equal => middle.push(x),
            std::cmp::Ordering::Greater => right.push(x),
        }
    }

    let mut sorted = quicksort(left);
    sorted.extend(middle);
    sorted.extend(quicksort(right));
    sorted
}

pub fn is_sorted(arr: &[i32]) -> bool {
    arr.windows(2).all(|w| w[0] <= w[1])
}

pub fn run_benchmark() {
    let mut rng = rand::thread_rng();
    let arr: Vec<i32> = (0..ARRAY_SIZE)
        .map(|_| rng.gen_range(0..MAX_VALUE))
        .collect();

    let sorted = timed(|| quicksort(arr.clone()));

    println!("Test: Sorting (Quicksort)");
    println!("Array size: {}", arr.len());
    println!("Execution time: {} ms", sorted.elapsed.as_millis());
    println!("Correctly sorted: {}", is_sorted(&sorted.value));
}
