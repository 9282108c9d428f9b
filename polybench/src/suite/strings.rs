use super::timed;
use regex::Regex;

const REVERSE_LEN: usize = 1_000_000;
const CONCAT_ITERATIONS: usize = 10_000;
const SEARCH_REPEAT: usize = 10_000;
const SEARCH_TEXT: &str = "Lorem ipsum dolor sit amet ";
// five-letter words
const SEARCH_PATTERN: &str = r"\b\w{5}\b";

pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

/// Decimal forms of `0..iterations`, back to back.
pub fn concatenate_strings(iterations: usize) -> String {
    let mut result = String::new();
    for i in 0..iterations {
        result.push_str(&i.to_string());
    }
    result
}

pub fn pattern_search(text: &str, pattern: &str) -> Result<usize, regex::Error> {
    let re = Regex::new(pattern)?;
    Ok(re.find_iter(text).count())
}

pub fn run_benchmark() -> Result<(), regex::Error> {
    let large = "a".repeat(REVERSE_LEN);
    let reversed = timed(|| reverse_string(&large));
    println!("Test: String Reversal (1M chars)");
    println!("Execution time: {} ms", reversed.elapsed.as_millis());
    println!("String length: {}", reversed.value.len());
    println!();

    let concatenated = timed(|| concatenate_strings(CONCAT_ITERATIONS));
    println!("Test: String Concatenation (10K iterations)");
    println!("Execution time: {} ms", concatenated.elapsed.as_millis());
    println!("Result length: {}", concatenated.value.len());
    println!();

    let text = SEARCH_TEXT.repeat(SEARCH_REPEAT);
    let matches = timed(|| pattern_search(&text, SEARCH_PATTERN));
    println!("Test: Pattern Search");
    println!("Execution time: {} ms", matches.elapsed.as_millis());
    println!("Matches found: {}", matches.value?);
    Ok(())
}
