use itertools::{Itertools, MinMaxResult};

/// Number of equal-width bins the population distribution is split into.
pub const HISTOGRAM_BINS: usize = 30;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Distribution of BMI values with a single highlighted value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Histogram {
    bins: Vec<Bin>,
    marker: f64,
}

impl Histogram {
    /// Bins `values` between their minimum and maximum. The last bin is closed on both ends.
    pub fn from_values(values: &[f64], marker: f64) -> Option<Self> {
        let (min, max) = match values.iter().copied().minmax_by(|a, b| a.total_cmp(b)) {
            MinMaxResult::NoElements => return None,
            MinMaxResult::OneElement(value) => (value, value),
            MinMaxResult::MinMax(min, max) => (min, max),
        };

        if min == max {
            return Some(Self {
                bins: vec![Bin {
                    lower: min - 0.5,
                    upper: min + 0.5,
                    count: values.len(),
                }],
                marker,
            });
        }

        let width = (max - min) / HISTOGRAM_BINS as f64;
        let mut counts = vec![0usize; HISTOGRAM_BINS];
        for value in values {
            let index = (((value - min) / width) as usize).min(HISTOGRAM_BINS - 1);
            counts[index] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| Bin {
                lower: min + i as f64 * width,
                upper: if i == HISTOGRAM_BINS - 1 {
                    max
                } else {
                    min + (i + 1) as f64 * width
                },
                count,
            })
            .collect();

        Some(Self { bins, marker })
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    pub fn marker(&self) -> f64 {
        self.marker
    }

    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    pub fn lower(&self) -> f64 {
        self.bins.first().map(|b| b.lower).unwrap_or(self.marker)
    }

    pub fn upper(&self) -> f64 {
        self.bins.last().map(|b| b.upper).unwrap_or(self.marker)
    }

    /// Index of the bin the marker falls into, if it is inside the binned range.
    pub fn marker_bin(&self) -> Option<usize> {
        let last = self.bins.len().checked_sub(1)?;
        self.bins.iter().enumerate().position(|(i, b)| {
            b.lower <= self.marker
                && (self.marker < b.upper || (i == last && self.marker == b.upper))
        })
    }
}
