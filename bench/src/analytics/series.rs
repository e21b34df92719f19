/// Minimum, maximum and arithmetic mean of one timing series. Extremes are replaced only
/// by strictly smaller or larger values, so ties keep the earliest record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStats {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

impl SeriesStats {
    /// Returns `None` for an empty series.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut values = values.into_iter();
        let first = values.next()?;
        let mut stats = SeriesStats {
            min: first,
            max: first,
            avg: 0.0,
        };
        let mut sum = first;
        let mut count = 1usize;
        for value in values {
            if value < stats.min {
                stats.min = value;
            }
            if value > stats.max {
                stats.max = value;
            }
            sum += value;
            count += 1;
        }
        stats.avg = sum / count as f64;
        Some(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_none_for_empty_series() {
        assert_eq!(SeriesStats::from_values(std::iter::empty()), None);
    }

    #[test]
    fn should_compute_min_max_avg() {
        let stats = SeriesStats::from_values([4.0, 1.0, 9.0, 2.0]).unwrap();
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 9.0);
        assert_eq!(stats.avg, 4.0);
    }

    #[test]
    fn repeated_extremes_should_not_change_the_result() {
        let stats = SeriesStats::from_values([3.0, 1.0, 5.0, 1.0, 5.0, 3.0]).unwrap();
        assert_eq!((stats.min, stats.max), (1.0, 5.0));
        assert_eq!(stats.avg, 3.0);
    }

    #[test]
    fn single_value_should_be_min_max_and_avg() {
        let stats = SeriesStats::from_values([7.5]).unwrap();
        assert_eq!((stats.min, stats.max, stats.avg), (7.5, 7.5, 7.5));
    }
}
