//! Suffix array over a byte string.
//!
//! The array lists every suffix start of the indexed text in lexicographic
//! order, so all suffixes sharing a prefix form one contiguous run that two
//! binary searches can locate. Construction is SA-IS (induced sorting), linear
//! in the text length. Offsets are stored as `u32`.

use super::error::IndexError;

/// Largest text the array can index. `u32::MAX` itself marks empty slots
/// during construction.
pub const MAX_TEXT_LEN: usize = u32::MAX as usize - 1;

const EMPTY: u32 = u32::MAX;

/// Below this length a plain comparison sort is cheaper than induced sorting.
const NAIVE_THRESHOLD: usize = 10;

/// Sorted suffix offsets of a text. The text itself is not owned; callers
/// must pass the same bytes to [`SuffixArray::lookup`] that were passed to
/// [`SuffixArray::build`].
#[derive(Debug, Clone)]
pub struct SuffixArray {
    suffixes: Vec<u32>,
}

impl SuffixArray {
    pub fn build(text: &[u8]) -> Result<Self, IndexError> {
        if text.len() > MAX_TEXT_LEN {
            return Err(IndexError::TooLarge {
                len: text.len(),
                max: MAX_TEXT_LEN,
            });
        }

        Ok(Self {
            suffixes: sa_is(text, usize::from(u8::MAX)),
        })
    }

    /// Returns every offset where `pattern` occurs in `text`, overlapping
    /// occurrences included, in ascending order.
    pub fn lookup(&self, text: &[u8], pattern: &[u8]) -> Vec<usize> {
        if pattern.is_empty() || pattern.len() > text.len() {
            return Vec::new();
        }

        let prefix = |i: u32| {
            let i = i as usize;
            &text[i..(i + pattern.len()).min(text.len())]
        };

        let lo = self.suffixes.partition_point(|&i| prefix(i) < pattern);
        let run = self.suffixes[lo..].partition_point(|&i| prefix(i) == pattern);

        let mut offsets: Vec<usize> = self.suffixes[lo..lo + run]
            .iter()
            .map(|&i| i as usize)
            .collect();
        offsets.sort_unstable();
        offsets
    }

    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }
}

/// Alphabet of an SA-IS round: bytes at the top level, LMS names below it.
trait Symbol: Copy + Ord {
    fn bucket(self) -> usize;
}

impl Symbol for u8 {
    fn bucket(self) -> usize {
        usize::from(self)
    }
}

impl Symbol for u32 {
    fn bucket(self) -> usize {
        self as usize
    }
}

/// Suffix array of `s`, whose symbols all lie in `0..=upper`.
fn sa_is<T: Symbol>(s: &[T], upper: usize) -> Vec<u32> {
    let n = s.len();
    if n < NAIVE_THRESHOLD {
        let mut sa: Vec<u32> = (0..n as u32).collect();
        sa.sort_unstable_by(|&a, &b| s[a as usize..].cmp(&s[b as usize..]));
        return sa;
    }

    // true = S-type. The last suffix is L-type against the virtual sentinel.
    let mut ls = vec![false; n];
    for i in (0..n - 1).rev() {
        ls[i] = if s[i] == s[i + 1] {
            ls[i + 1]
        } else {
            s[i] < s[i + 1]
        };
    }

    // sum_l[c]: start of bucket c. sum_s[c]: start of the S-part of bucket c.
    let mut sum_l = vec![0usize; upper + 1];
    let mut sum_s = vec![0usize; upper + 1];
    for i in 0..n {
        if ls[i] {
            // S-type symbols are never the largest, so c + 1 <= upper.
            sum_l[s[i].bucket() + 1] += 1;
        } else {
            sum_s[s[i].bucket()] += 1;
        }
    }
    for c in 0..=upper {
        sum_s[c] += sum_l[c];
        if c < upper {
            sum_l[c + 1] += sum_s[c];
        }
    }

    let induce = |sa: &mut [u32], lms: &[u32]| {
        sa.fill(EMPTY);

        let mut buf = sum_s.clone();
        for &d in lms {
            let c = s[d as usize].bucket();
            sa[buf[c]] = d;
            buf[c] += 1;
        }

        buf.copy_from_slice(&sum_l);
        let c = s[n - 1].bucket();
        sa[buf[c]] = (n - 1) as u32;
        buf[c] += 1;
        for i in 0..n {
            let v = sa[i];
            if v != EMPTY && v >= 1 && !ls[v as usize - 1] {
                let c = s[v as usize - 1].bucket();
                sa[buf[c]] = v - 1;
                buf[c] += 1;
            }
        }

        buf.copy_from_slice(&sum_l);
        for i in (0..n).rev() {
            let v = sa[i];
            if v != EMPTY && v >= 1 && ls[v as usize - 1] {
                let c = s[v as usize - 1].bucket() + 1;
                buf[c] -= 1;
                sa[buf[c]] = v - 1;
            }
        }
    };

    let mut lms_map = vec![EMPTY; n + 1];
    let mut lms: Vec<u32> = Vec::new();
    for i in 1..n {
        if !ls[i - 1] && ls[i] {
            lms_map[i] = lms.len() as u32;
            lms.push(i as u32);
        }
    }
    let m = lms.len();

    let mut sa = vec![EMPTY; n];
    induce(&mut sa, &lms);

    if m > 0 {
        let sorted_lms: Vec<u32> = sa
            .iter()
            .copied()
            .filter(|&v| v != EMPTY && lms_map[v as usize] != EMPTY)
            .collect();

        // Name each LMS substring; equal substrings share a name.
        let segment_end = |start: usize| {
            let next = lms_map[start] as usize + 1;
            if next < m { lms[next] as usize } else { n }
        };
        let mut rec_s = vec![0u32; m];
        let mut rec_upper = 0usize;
        for i in 1..m {
            let mut l = sorted_lms[i - 1] as usize;
            let mut r = sorted_lms[i] as usize;
            let end_l = segment_end(l);
            let end_r = segment_end(r);

            let same = if end_l - l != end_r - r {
                false
            } else {
                while l < end_l && s[l] == s[r] {
                    l += 1;
                    r += 1;
                }
                !(l == n || r == n || s[l] != s[r])
            };

            if !same {
                rec_upper += 1;
            }
            rec_s[lms_map[sorted_lms[i] as usize] as usize] = rec_upper as u32;
        }

        let rec_sa = sa_is(&rec_s, rec_upper);
        let sorted_lms: Vec<u32> = rec_sa.iter().map(|&i| lms[i as usize]).collect();
        induce(&mut sa, &sorted_lms);
    }

    sa
}
