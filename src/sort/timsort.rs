//! Stable natural merge sort in the TimSort family.
//!
//! Runs are detected in the input, short runs are extended with binary
//! insertion sort and pushed on a stack whose lengths are kept in a
//! Fibonacci-like shape. Each merge is first trimmed by galloping, then
//! performed through a buffer the size of the smaller run.
//!
//! Elements move by swapping through that buffer, so equal elements keep
//! their relative order and no unsafe code is needed. Only the smaller run
//! is cloned per merge.

use std::cmp::Ordering;
use std::mem;

/// Inputs shorter than this are sorted by binary insertion alone.
pub const MIN_MERGE: usize = 32;

#[derive(Debug, Clone, Copy)]
struct Run {
    base: usize,
    len: usize,
}

/// Minimum run length for an input of `n` elements.
///
/// Returns `n` itself below [`MIN_MERGE`]. Otherwise returns a value `k` with
/// `MIN_MERGE / 2 <= k <= MIN_MERGE` such that `n / k` is close to, but no
/// more than, a power of two.
pub fn min_run_length(mut n: usize) -> usize {
    let mut r = 0;
    while n >= MIN_MERGE {
        r |= n & 1;
        n >>= 1;
    }
    n + r
}

/// Sorts `v` stably with `cmp`.
pub fn sort<T, F>(v: &mut [T], mut cmp: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let n = v.len();
    if n < 2 {
        return;
    }

    if n < MIN_MERGE {
        let initial = count_run_and_make_ascending(v, &mut cmp);
        binary_insertion_sort(v, initial, &mut cmp);
        return;
    }

    let min_run = min_run_length(n);
    let mut runs: Vec<Run> = Vec::new();
    let mut pushed = 0usize;
    let mut lo = 0;
    while lo < n {
        let mut run_len = count_run_and_make_ascending(&mut v[lo..], &mut cmp);
        if run_len < min_run {
            let forced = (n - lo).min(min_run);
            binary_insertion_sort(&mut v[lo..lo + forced], run_len, &mut cmp);
            run_len = forced;
        }
        runs.push(Run { base: lo, len: run_len });
        pushed += 1;
        merge_collapse(v, &mut runs, &mut cmp);
        lo += run_len;
    }
    merge_force_collapse(v, &mut runs, &mut cmp);

    log::trace!("timsort: {n} elements, min run {min_run}, {pushed} runs");
    debug_assert_eq!(runs.len(), 1);
}

/// Length of the run starting at `v[0]`, reversing it first if it is
/// strictly descending.
fn count_run_and_make_ascending<T, F>(v: &mut [T], cmp: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return len;
    }

    let mut run_hi = 2;
    if cmp(&v[1], &v[0]) == Ordering::Less {
        while run_hi < len && cmp(&v[run_hi], &v[run_hi - 1]) == Ordering::Less {
            run_hi += 1;
        }
        // strictly descending only, so reversing cannot reorder equal elements
        v[..run_hi].reverse();
    } else {
        while run_hi < len && cmp(&v[run_hi], &v[run_hi - 1]) != Ordering::Less {
            run_hi += 1;
        }
    }
    run_hi
}

/// Sorts `v` given that `v[..start]` is already sorted.
fn binary_insertion_sort<T, F>(v: &mut [T], start: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in start.max(1)..v.len() {
        let mut left = 0;
        let mut right = i;
        while left < right {
            let mid = left + (right - left) / 2;
            if cmp(&v[i], &v[mid]) == Ordering::Less {
                right = mid;
            } else {
                left = mid + 1;
            }
        }
        v[left..=i].rotate_right(1);
    }
}

fn merge_collapse<T, F>(v: &mut [T], runs: &mut Vec<Run>, cmp: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    while runs.len() > 1 {
        let mut n = runs.len() - 2;
        let upper_broken = n > 0 && runs[n - 1].len <= runs[n].len + runs[n + 1].len;
        let deeper_broken = n > 1 && runs[n - 2].len <= runs[n - 1].len + runs[n].len;
        if upper_broken || deeper_broken {
            if runs[n - 1].len < runs[n + 1].len {
                n -= 1;
            }
        } else if runs[n].len > runs[n + 1].len {
            break;
        }
        merge_at(v, runs, n, cmp);
    }
}

fn merge_force_collapse<T, F>(v: &mut [T], runs: &mut Vec<Run>, cmp: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    while runs.len() > 1 {
        let mut n = runs.len() - 2;
        if n > 0 && runs[n - 1].len < runs[n + 1].len {
            n -= 1;
        }
        merge_at(v, runs, n, cmp);
    }
}

/// Merges the runs at stack positions `i` and `i + 1`.
fn merge_at<T, F>(v: &mut [T], runs: &mut Vec<Run>, i: usize, cmp: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let Run { base: base1, len: len1 } = runs[i];
    let Run { base: base2, len: len2 } = runs[i + 1];
    debug_assert_eq!(base1 + len1, base2);

    runs[i].len = len1 + len2;
    runs.remove(i + 1);

    // run1 elements not greater than run2[0] are already in place
    let skip = gallop_right(&v[base2], &v[base1..base1 + len1], cmp);
    let base1 = base1 + skip;
    let len1 = len1 - skip;
    if len1 == 0 {
        return;
    }

    // run2 elements not less than the last of run1 are already in place
    let len2 = gallop_left(&v[base1 + len1 - 1], &v[base2..base2 + len2], cmp);
    if len2 == 0 {
        return;
    }

    if len1 <= len2 {
        merge_lo(v, base1, len1, len2, cmp);
    } else {
        merge_hi(v, base1, len1, len2, cmp);
    }
}

/// Number of leading elements of `run` that are less than or equal to `key`.
fn gallop_right<T, F>(key: &T, run: &[T], cmp: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = run.len();
    if len == 0 || cmp(key, &run[0]) == Ordering::Less {
        return 0;
    }

    let mut known = 0;
    let mut ofs = 1;
    while ofs < len && cmp(key, &run[ofs]) != Ordering::Less {
        known = ofs;
        ofs = ofs * 2 + 1;
    }

    let mut lo = known + 1;
    let mut hi = ofs.min(len);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if cmp(key, &run[mid]) == Ordering::Less {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

/// Number of leading elements of `run` that are strictly less than `key`,
/// galloping in from the right end.
fn gallop_left<T, F>(key: &T, run: &[T], cmp: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = run.len();
    if len == 0 || cmp(&run[len - 1], key) == Ordering::Less {
        return len;
    }

    let mut known = len - 1;
    let mut ofs = 1;
    while ofs < len && cmp(&run[len - 1 - ofs], key) != Ordering::Less {
        known = len - 1 - ofs;
        ofs = ofs * 2 + 1;
    }

    let mut lo = if ofs < len { len - ofs } else { 0 };
    let mut hi = known;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if cmp(&run[mid], key) == Ordering::Less {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Merges `v[base1..base1 + len1]` with the following `len2` elements,
/// buffering the left run. Requires `len1 <= len2`.
fn merge_lo<T, F>(v: &mut [T], base1: usize, len1: usize, len2: usize, cmp: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut tmp: Vec<T> = v[base1..base1 + len1].to_vec();
    let end = base1 + len1 + len2;

    // v[dest..j] holds stale slots; their count always equals len1 - i
    let mut i = 0;
    let mut j = base1 + len1;
    let mut dest = base1;
    while i < len1 && j < end {
        if cmp(&v[j], &tmp[i]) == Ordering::Less {
            v.swap(dest, j);
            j += 1;
        } else {
            mem::swap(&mut v[dest], &mut tmp[i]);
            i += 1;
        }
        dest += 1;
    }
    while i < len1 {
        mem::swap(&mut v[dest], &mut tmp[i]);
        i += 1;
        dest += 1;
    }
}

/// Merges `v[base1..base1 + len1]` with the following `len2` elements,
/// buffering the right run and filling from the back. Requires `len1 > len2`.
fn merge_hi<T, F>(v: &mut [T], base1: usize, len1: usize, len2: usize, cmp: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let base2 = base1 + len1;
    let mut tmp: Vec<T> = v[base2..base2 + len2].to_vec();

    // v[base1 + i..dest] holds stale slots; their count always equals k
    let mut i = len1;
    let mut k = len2;
    let mut dest = base2 + len2;
    while i > 0 && k > 0 {
        if cmp(&tmp[k - 1], &v[base1 + i - 1]) == Ordering::Less {
            v.swap(dest - 1, base1 + i - 1);
            i -= 1;
        } else {
            mem::swap(&mut v[dest - 1], &mut tmp[k - 1]);
            k -= 1;
        }
        dest -= 1;
    }
    while k > 0 {
        mem::swap(&mut v[dest - 1], &mut tmp[k - 1]);
        k -= 1;
        dest -= 1;
    }
}
