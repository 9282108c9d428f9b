use super::timed;

const RECURSIVE_N: u32 = 35;
const ITERATIVE_N: u32 = 40;

pub fn fibonacci_recursive(n: u32) -> u64 {
    if n <= 1 {
        return n as u64;
    }
    fibonacci_recursive(n - 1) + fibonacci_recursive(n - 2)
}

pub fn fibonacci_iterative(n: u32) -> u64 {
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..n {
        (a, b) = (b, a + b);
    }
    a
}

pub fn run_benchmark() {
    let recursive = timed(|| fibonacci_recursive(RECURSIVE_N));
    println!("Test: Fibonacci Recursive (n={RECURSIVE_N})");
    println!("Result: {}", recursive.value);
    println!("Execution time: {} ms", recursive.elapsed.as_millis());
    println!();

    let iterative = timed(|| fibonacci_iterative(ITERATIVE_N));
    println!("Test: Fibonacci Iterative (n={ITERATIVE_N})");
    println!("Result: {}", iterative.value);
    println!("Execution time: {} ms", iterative.elapsed.as_millis());
}
