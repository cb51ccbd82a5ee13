// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Index combinations generator.
//!
//! Generates all the k-subsets of `0..n` in colexicographic order (see
//! Algorithm L pg. 358 Knuth 4a), each subset is an array of `K` increasing
//! indices. The iterator is lazy and finite, clone it or create a new one to
//! restart the sequence.
//!
//! ```
//! # use showdown_eval::combinations::Combinations;
//! let subsets = Combinations::<5>::new(7).collect::<Vec<_>>();
//! assert_eq!(subsets.len(), 21);
//! assert_eq!(subsets[0], [0, 1, 2, 3, 4]);
//! assert_eq!(subsets[20], [2, 3, 4, 5, 6]);
//! ```

/// The largest `n` supported by the generator.
pub const MAX_N: usize = 52;

/// The largest `k` supported by the generator.
pub const MAX_K: usize = 7;

/// Creates table for nck(n, k) for n <= 52 and k <= 7.
const fn make_nck() -> [[u32; MAX_K + 1]; MAX_N + 1] {
    let mut t = [[0u32; MAX_K + 1]; MAX_N + 1];
    let mut n = 0;

    while n <= MAX_N {
        // base case nck(n, 0) = 1
        t[n][0] = 1;

        let mut k = 1;
        while k <= MAX_K && k <= n {
            // nck(n, k) = nck(n-1, k-1) + nck(n-1, k)
            t[n][k] = t[n - 1][k - 1] + t[n - 1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const NCKS: [[u32; MAX_K + 1]; MAX_N + 1] = make_nck();

/// Returns the binomial coefficient for n choose k.
///
/// Panics if n > 52 or k > 7.
#[inline]
pub fn nck(n: usize, k: usize) -> usize {
    assert!(n <= MAX_N, "n={n} must be 0 <= n <= {MAX_N}");
    assert!(k <= MAX_K, "k={k} must be 0 <= k <= {MAX_K}");
    NCKS[n][k] as usize
}

/// An iterator over the k-subsets of `0..n`.
#[derive(Debug, Clone)]
pub struct Combinations<const K: usize> {
    n: usize,
    next: Option<[usize; K]>,
    remaining: usize,
}

impl<const K: usize> Combinations<K> {
    /// Creates a generator for the `K` elements subsets of `0..n`.
    ///
    /// The generator is empty if `n < K`. Panics if `K` is not in `1..=7` or
    /// `n > 52`.
    pub fn new(n: usize) -> Self {
        assert!((1..=MAX_K).contains(&K), "1 <= K={K} <= {MAX_K}");
        assert!(n <= MAX_N, "n={n} must be 0 <= n <= {MAX_N}");

        let next = (n >= K).then(|| std::array::from_fn(|i| i));
        Self {
            n,
            next,
            remaining: nck(n, K),
        }
    }

    /// Computes the subset that follows `c`.
    fn successor(&self, mut c: [usize; K]) -> Option<[usize; K]> {
        for j in 0..K {
            // The index after the last one acts as a sentinel equal to n.
            let limit = if j + 1 < K { c[j + 1] } else { self.n };
            if c[j] + 1 < limit {
                c[j] += 1;
                return Some(c);
            }

            c[j] = j;
        }

        None
    }
}

impl<const K: usize> Iterator for Combinations<K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.successor(current);
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const K: usize> ExactSizeIterator for Combinations<K> {}

impl<const K: usize> std::iter::FusedIterator for Combinations<K> {}
