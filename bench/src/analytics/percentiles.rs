use arete_report::service_time::ServiceTimeSummary;

pub fn service_time_summary(
    service_times_ms: impl IntoIterator<Item = f64>,
) -> ServiceTimeSummary {
    let mut sorted = service_times_ms.into_iter().collect::<Vec<_>>();
    if sorted.is_empty() {
        return ServiceTimeSummary::default();
    }
    sorted.sort_by(f64::total_cmp);

    let avg_ms = sorted.iter().sum::<f64>() / sorted.len() as f64;
    let len = sorted.len() / 2;
    let median_ms = if sorted.len() % 2 == 0 {
        (sorted[len - 1] + sorted[len]) / 2.0
    } else {
        sorted[len]
    };

    ServiceTimeSummary {
        avg_ms,
        median_ms,
        p50_ms: calculate_percentile(&sorted, 50.0),
        p90_ms: calculate_percentile(&sorted, 90.0),
        p95_ms: calculate_percentile(&sorted, 95.0),
        p99_ms: calculate_percentile(&sorted, 99.0),
        max_ms: sorted[sorted.len() - 1],
    }
}

/// Linear interpolation between the closest ranks of already sorted data.
pub fn calculate_percentile(sorted_data: &[f64], percentile: f64) -> f64 {
    if sorted_data.is_empty() {
        return 0.0;
    }

    let rank = percentile / 100.0 * (sorted_data.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    if upper >= sorted_data.len() {
        return sorted_data[sorted_data.len() - 1];
    }

    let weight = rank - lower as f64;
    sorted_data[lower] * (1.0 - weight) + sorted_data[upper] * weight
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_interpolate_between_ranks() {
        let data = [10.0, 20.0, 30.0, 40.0, 50.0];
        assert_eq!(calculate_percentile(&data, 0.0), 10.0);
        assert_eq!(calculate_percentile(&data, 50.0), 30.0);
        assert_eq!(calculate_percentile(&data, 100.0), 50.0);
        assert_eq!(calculate_percentile(&data, 25.0), 20.0);
        assert_eq!(calculate_percentile(&data, 75.0), 40.0);
    }

    #[test]
    fn should_summarize_unsorted_service_times() {
        let summary = service_time_summary([4.0, 1.0, 3.0, 2.0]);
        assert_eq!(summary.avg_ms, 2.5);
        assert_eq!(summary.median_ms, 2.5);
        assert_eq!(summary.p50_ms, 2.5);
        assert_eq!(summary.max_ms, 4.0);
    }

    #[test]
    fn empty_input_should_give_zeroed_summary() {
        assert_eq!(
            service_time_summary(std::iter::empty()),
            ServiceTimeSummary::default()
        );
    }
}
