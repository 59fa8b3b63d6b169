use crate::domain::ports::Benchmark;
use std::hint::black_box;

pub const DEFAULT_SIEVE_SIZE: usize = 100;

/// Sieve of Eratosthenes over odd numbers, flag `i` standing for `2i + 3`.
pub struct Sieve {
    size: usize,
    flags: Vec<bool>,
}

impl Sieve {
    pub fn new() -> Self {
        Self::with_size(DEFAULT_SIEVE_SIZE)
    }

    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            flags: vec![true; size + 1],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn sieve_once(&mut self) -> i32 {
        let size = self.size;
        let flags = black_box(&mut self.flags);
        flags.fill(true);

        let mut count = 0;
        for i in 0..=size {
            if flags[i] {
                let prime = i + i + 3;
                let mut k = i + prime;
                while k <= size {
                    flags[k] = false;
                    k += prime;
                }
                count += 1;
            }
        }
        count
    }
}

impl Default for Sieve {
    fn default() -> Self {
        Self::new()
    }
}

impl Benchmark for Sieve {
    fn name(&self) -> &str {
        "Sieve"
    }

    fn test(&mut self, cnt: u32) -> i32 {
        let mut count = 0;
        for _ in 0..cnt {
            count = black_box(self.sieve_once());
        }
        count
    }

    fn overhead(&mut self, cnt: u32) -> i32 {
        let mut count = 0;
        for iter in 0..cnt {
            count = black_box(iter as i32);
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sieve_counts_odd_primes_up_to_203() {
        let mut sieve = Sieve::new();
        assert_eq!(sieve.size(), 100);
        assert_eq!(sieve.test(1), 45);
    }

    #[test]
    fn test_classic_byte_sieve_size() {
        let mut sieve = Sieve::with_size(8190);
        assert_eq!(sieve.test(1), 1899);
    }

    #[test]
    fn test_repeated_runs_are_stable() {
        let mut sieve = Sieve::new();
        assert_eq!(sieve.test(1), sieve.test(10));
    }

    #[test]
    fn test_zero_iterations_do_no_work() {
        let mut sieve = Sieve::new();
        assert_eq!(sieve.test(0), 0);
        assert_eq!(sieve.overhead(0), 0);
    }

    #[test]
    fn test_tiny_sizes() {
        // flag 0 is 3, flag 1 is 5
        assert_eq!(Sieve::with_size(0).test(1), 1);
        assert_eq!(Sieve::with_size(1).test(1), 2);
    }

    #[test]
    fn test_overhead_returns_last_iteration() {
        let mut sieve = Sieve::new();
        assert_eq!(sieve.overhead(8), 7);
    }
}
