// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Iteration of k-subsets.

/// Calls the given closure for each k-subset of the indices `0..n`.
///
/// Subsets are visited in lexicographic order of their reversed indices and
/// each subset is sorted in ascending order:
///
/// ```
/// # use showdown_cards::for_each_ksubset;
/// let mut subsets = Vec::new();
/// for_each_ksubset(4, 2, |s| subsets.push(s.to_vec()));
/// assert_eq!(
///     subsets,
///     [[0, 1], [0, 2], [1, 2], [0, 3], [1, 3], [2, 3]]
/// );
/// ```
///
/// There is exactly one subset for k = 0 and none for k > n.
pub fn for_each_ksubset<F>(n: usize, k: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    if k > n {
        return;
    }

    // Algorithm L from TAOCP 4a, c[1..=k] is the current subset with two
    // sentinels at c[k + 1] and c[k + 2].
    let mut c = vec![0usize; k + 3];
    for j in 1..=k {
        c[j] = j - 1;
    }

    c[k + 1] = n;

    loop {
        f(&c[1..=k]);

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > k {
            break;
        }

        c[j] += 1;
    }
}
