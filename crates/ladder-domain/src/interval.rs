//! Interval map module - half-open buckets with point lookup

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::IntervalMapError;

/// One bucket of an [`IntervalMap`]: the half-open range `[min, max)` tagged with a value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interval<K, V> {
    /// Inclusive lower bound
    pub min: K,
    /// Exclusive upper bound
    pub max: K,
    /// Payload returned for keys inside the range
    pub value: V,
}

impl<K, V> Interval<K, V> {
    /// Create a new interval
    pub fn new(min: K, max: K, value: V) -> Self {
        Self { min, max, value }
    }
}

impl<K: PartialOrd, V> Interval<K, V> {
    /// Check if the interval contains a key (`min <= key < max`)
    pub fn contains(&self, key: &K) -> bool {
        &self.min <= key && key < &self.max
    }

    /// True when no key can fall inside the range (`max <= min`)
    pub fn is_empty(&self) -> bool {
        self.min.partial_cmp(&self.max) != Some(Ordering::Less)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Display for Interval<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}, {:?}) => {:?}", self.min, self.max, self.value)
    }
}

/// Immutable, sorted set of non-overlapping [`Interval`]s
///
/// Built once from a table of buckets (pricing tiers, alert thresholds, ...)
/// and queried many times afterwards. Construction sorts the buckets by their
/// lower bound and rejects empty tables and overlapping buckets; gaps between
/// buckets are allowed and simply match nothing.
///
/// # Examples
///
/// ```
/// use ladder_domain::{Interval, IntervalMap};
///
/// let tiers = IntervalMap::new(vec![
///     Interval::new(20.0, 50.0, "third"),
///     Interval::new(0.0, 10.0, "first"),
///     Interval::new(10.0, 20.0, "second"),
/// ])
/// .unwrap();
///
/// assert_eq!(tiers.get(&10.0), Some(&"second"));
/// assert_eq!(tiers.get(&58.0), None);
/// assert_eq!(tiers.min(), &"first");
/// assert_eq!(tiers.max(), &"third");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalMap<K, V> {
    // Never empty, sorted by (min, max), adjacent pairs satisfy previous.max <= current.min
    intervals: Vec<Interval<K, V>>,
}

impl<K, V> IntervalMap<K, V>
where
    K: PartialOrd + fmt::Debug,
    V: fmt::Debug,
{
    /// Build a map from a list of intervals in any order
    ///
    /// # Errors
    ///
    /// - [`IntervalMapError::Empty`] if no intervals are given
    /// - [`IntervalMapError::InvalidBound`] if a bound cannot be ordered (NaN)
    /// - [`IntervalMapError::Overlapping`] if two intervals share part of their range
    pub fn new<I>(intervals: I) -> Result<Self, IntervalMapError>
    where
        I: IntoIterator<Item = Interval<K, V>>,
    {
        Self::from_sparse(intervals.into_iter().map(Some))
    }

    /// Build a map from a sparse list, skipping missing entries
    ///
    /// Behaves like [`IntervalMap::new`] once the `None` entries are dropped;
    /// a list holding only `None` is reported as [`IntervalMapError::Empty`].
    pub fn from_sparse<I>(intervals: I) -> Result<Self, IntervalMapError>
    where
        I: IntoIterator<Item = Option<Interval<K, V>>>,
    {
        let mut intervals: Vec<Interval<K, V>> = intervals.into_iter().flatten().collect();

        if intervals.is_empty() {
            return Err(IntervalMapError::Empty);
        }

        if let Some(bad) = intervals
            .iter()
            .find(|interval| !is_ordered(&interval.min) || !is_ordered(&interval.max))
        {
            return Err(IntervalMapError::InvalidBound(bad.to_string()));
        }

        // Ties on `min` are broken by `max` so a zero-width bucket sorts ahead of
        // a bucket starting at the same point, whatever the input order was.
        intervals.sort_by(|a, b| compare(&a.min, &b.min).then_with(|| compare(&a.max, &b.max)));

        for pair in intervals.windows(2) {
            let (previous, current) = (&pair[0], &pair[1]);
            if previous.max > current.min {
                return Err(IntervalMapError::Overlapping {
                    previous: previous.to_string(),
                    current: current.to_string(),
                });
            }
        }

        tracing::debug!(buckets = intervals.len(), "Built interval map");

        Ok(Self { intervals })
    }
}

impl<K: PartialOrd, V> IntervalMap<K, V> {
    /// Look up the value of the bucket containing `key`
    ///
    /// Lower bounds are inclusive and upper bounds exclusive, so a key equal to
    /// a bucket's `max` belongs to the next bucket (or to none if a gap follows).
    /// Returns `None` below the first bucket, past the last one, and inside gaps.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_interval(key).map(|interval| &interval.value)
    }

    /// Look up the whole bucket containing `key`
    pub fn get_interval(&self, key: &K) -> Option<&Interval<K, V>> {
        // Buckets are sorted and disjoint, so only the last bucket starting at or
        // before `key` can contain it.
        let upper = self.intervals.partition_point(|interval| &interval.min <= key);
        let candidate = self.intervals.get(upper.checked_sub(1)?)?;
        candidate.contains(key).then_some(candidate)
    }

    /// Check if some bucket contains `key`
    pub fn contains_key(&self, key: &K) -> bool {
        self.get_interval(key).is_some()
    }

    /// Uncovered regions between consecutive buckets, as `(start, end)` pairs
    ///
    /// Each gap is half-open like the buckets: `start` is the previous bucket's
    /// `max` and `end` the next bucket's `min`.
    pub fn gaps(&self) -> Vec<(&K, &K)> {
        self.intervals
            .windows(2)
            .filter(|pair| pair[0].max < pair[1].min)
            .map(|pair| (&pair[0].max, &pair[1].min))
            .collect()
    }
}

impl<K, V> IntervalMap<K, V> {
    /// Value of the bucket with the lowest lower bound
    pub fn min(&self) -> &V {
        &self.first().value
    }

    /// Value of the bucket with the highest lower bound
    ///
    /// This is the last bucket in sorted order, which is not necessarily the one
    /// with the largest `max` in a malformed table.
    pub fn max(&self) -> &V {
        &self.last().value
    }

    /// The bucket with the lowest lower bound
    pub fn first(&self) -> &Interval<K, V> {
        &self.intervals[0]
    }

    /// The bucket with the highest lower bound
    pub fn last(&self) -> &Interval<K, V> {
        &self.intervals[self.intervals.len() - 1]
    }

    /// Number of buckets
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Always false: a map cannot be built without buckets
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Iterate over the buckets in ascending order
    pub fn iter(&self) -> std::slice::Iter<'_, Interval<K, V>> {
        self.intervals.iter()
    }

    /// The sorted buckets
    pub fn intervals(&self) -> &[Interval<K, V>] {
        &self.intervals
    }

    /// Take back the sorted buckets
    pub fn into_intervals(self) -> Vec<Interval<K, V>> {
        self.intervals
    }

    /// Replace every payload, keeping the validated bucket layout
    pub fn map_values<W, F>(self, mut f: F) -> IntervalMap<K, W>
    where
        F: FnMut(V) -> W,
    {
        IntervalMap {
            intervals: self
                .intervals
                .into_iter()
                .map(|interval| Interval::new(interval.min, interval.max, f(interval.value)))
                .collect(),
        }
    }
}

impl<K, V> TryFrom<Vec<Interval<K, V>>> for IntervalMap<K, V>
where
    K: PartialOrd + fmt::Debug,
    V: fmt::Debug,
{
    type Error = IntervalMapError;

    fn try_from(intervals: Vec<Interval<K, V>>) -> Result<Self, Self::Error> {
        Self::new(intervals)
    }
}

impl<K, V> From<IntervalMap<K, V>> for Vec<Interval<K, V>> {
    fn from(map: IntervalMap<K, V>) -> Self {
        map.into_intervals()
    }
}

impl<'a, K, V> IntoIterator for &'a IntervalMap<K, V> {
    type Item = &'a Interval<K, V>;
    type IntoIter = std::slice::Iter<'a, Interval<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl<K: Serialize, V: Serialize> Serialize for IntervalMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.intervals.serialize(serializer)
    }
}

impl<'de, K, V> Deserialize<'de> for IntervalMap<K, V>
where
    K: Deserialize<'de> + PartialOrd + fmt::Debug,
    V: Deserialize<'de> + fmt::Debug,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let intervals = Vec::<Interval<K, V>>::deserialize(deserializer)?;
        Self::new(intervals).map_err(serde::de::Error::custom)
    }
}

/// NaN is the only value not comparable with itself
fn is_ordered<K: PartialOrd>(bound: &K) -> bool {
    bound.partial_cmp(bound).is_some()
}

fn compare<K: PartialOrd>(a: &K, b: &K) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Disjoint buckets over i64 with random gaps, values are the bucket index
    fn disjoint_intervals() -> impl Strategy<Value = Vec<Interval<i64, usize>>> {
        prop::collection::btree_set(-1000i64..1000, 2..24).prop_flat_map(|points| {
            let points: Vec<i64> = points.into_iter().collect();
            let pairs = points.len() - 1;
            prop::collection::vec(any::<bool>(), pairs).prop_map(move |keep| {
                let mut intervals: Vec<Interval<i64, usize>> = points
                    .windows(2)
                    .zip(keep)
                    .enumerate()
                    .filter(|(_, (_, keep))| *keep)
                    .map(|(idx, (bounds, _))| Interval::new(bounds[0], bounds[1], idx))
                    .collect();
                if intervals.is_empty() {
                    intervals.push(Interval::new(points[0], points[1], 0));
                }
                intervals
            })
        })
    }

    fn linear_scan(intervals: &[Interval<i64, usize>], key: i64) -> Option<usize> {
        intervals
            .iter()
            .find(|interval| interval.min <= key && key < interval.max)
            .map(|interval| interval.value)
    }

    proptest! {
        /// Property: a bucket's lower bound maps to it, its upper bound does not
        #[test]
        fn test_boundary_law(intervals in disjoint_intervals()) {
            let map = IntervalMap::new(intervals.clone()).unwrap();
            for interval in &intervals {
                prop_assert_eq!(map.get(&interval.min), Some(&interval.value));
                prop_assert_ne!(map.get(&interval.max), Some(&interval.value));
            }
        }

        /// Property: lookup agrees with a linear first-match scan everywhere,
        /// including gaps and both sides of the covered range
        #[test]
        fn test_matches_linear_scan(intervals in disjoint_intervals(), key in -1100i64..1100) {
            let map = IntervalMap::new(intervals.clone()).unwrap();
            prop_assert_eq!(map.get(&key).copied(), linear_scan(&intervals, key));
        }

        /// Property: keys outside the covered range miss
        #[test]
        fn test_out_of_range_absent(intervals in disjoint_intervals(), offset in 1i64..500) {
            let map = IntervalMap::new(intervals).unwrap();
            prop_assert_eq!(map.get(&(map.first().min - offset)), None);
            prop_assert_eq!(map.get(&map.last().max), None);
            prop_assert_eq!(map.get(&(map.last().max + offset)), None);
        }

        /// Property: every key inside a gap misses
        #[test]
        fn test_gap_absent(intervals in disjoint_intervals()) {
            let map = IntervalMap::new(intervals).unwrap();
            for (start, end) in map.gaps() {
                for key in *start..*end {
                    prop_assert_eq!(map.get(&key), None);
                }
            }
        }

        /// Property: input order does not change the map
        #[test]
        fn test_order_independence(
            (ordered, shuffled) in disjoint_intervals()
                .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
            key in -1100i64..1100,
        ) {
            let a = IntervalMap::new(ordered).unwrap();
            let b = IntervalMap::new(shuffled).unwrap();
            prop_assert_eq!(a.get(&key), b.get(&key));
            prop_assert_eq!(a.min(), b.min());
            prop_assert_eq!(a.max(), b.max());
        }

        /// Property: a bucket starting strictly inside another is rejected
        #[test]
        fn test_overlap_rejection(
            lo in -1000i64..1000,
            width in 2i64..100,
            offset_seed in 1i64..100,
            len in 1i64..100,
            swap in any::<bool>(),
        ) {
            let offset = 1 + offset_seed % (width - 1);
            let outer = Interval::new(lo, lo + width, 0usize);
            let inner = Interval::new(lo + offset, lo + offset + len, 1usize);
            let intervals = if swap { vec![inner, outer] } else { vec![outer, inner] };
            let result = IntervalMap::new(intervals);
            prop_assert!(
                matches!(result, Err(IntervalMapError::Overlapping { .. })),
                "expected overlap error, got {:?}", result
            );
        }

        /// Property: min/max report the buckets with the smallest and largest lower bound
        #[test]
        fn test_min_max_accessors(intervals in disjoint_intervals()) {
            let map = IntervalMap::new(intervals.clone()).unwrap();
            let lowest = intervals.iter().min_by_key(|interval| interval.min).unwrap();
            let highest = intervals.iter().max_by_key(|interval| interval.min).unwrap();
            prop_assert_eq!(map.min(), &lowest.value);
            prop_assert_eq!(map.max(), &highest.value);
        }
    }
}
