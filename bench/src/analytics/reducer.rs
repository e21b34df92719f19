use super::percentiles::service_time_summary;
use super::series::SeriesStats;
use crate::error::LoadTestError;
use arete_report::params::LoadTestParams;
use arete_report::record::ResultRecord;
use arete_report::report::LoadTestReport;
use chrono::Utc;
use uuid::Uuid;

/// Folds the records of a finished run into its report.
///
/// `total_elapsed_ms` is the largest `time_since_start_ms` found, not the one of the
/// last record. Fails with [`LoadTestError::EmptyResults`] when there is nothing to
/// average.
pub fn reduce<T: Clone, E: Clone>(
    params: LoadTestParams,
    results: Vec<ResultRecord<T, E>>,
) -> Result<LoadTestReport<T, E>, LoadTestError> {
    let gaps = SeriesStats::from_values(results.iter().map(|r| r.time_since_last_completion_ms))
        .ok_or(LoadTestError::EmptyResults)?;
    let latencies = SeriesStats::from_values(results.iter().map(|r| r.time_since_start_ms))
        .ok_or(LoadTestError::EmptyResults)?;

    let successful_results = results
        .iter()
        .filter(|r| r.success)
        .cloned()
        .collect::<Vec<_>>();
    let success_rate_percent =
        successful_results.len() as f64 * 100.0 / results.len() as f64;

    let total_elapsed_ms = latencies.max;
    let throughput_requests_per_second = if total_elapsed_ms > 0.0 {
        results.len() as f64 * 1_000.0 / total_elapsed_ms
    } else {
        0.0
    };
    let service_time = service_time_summary(results.iter().map(|r| r.service_time_ms));

    Ok(LoadTestReport {
        uuid: Uuid::new_v4(),
        timestamp: Utc::now().to_rfc3339(),
        params,
        all_results: results,
        successful_results,
        min_gap_ms: gaps.min,
        max_gap_ms: gaps.max,
        avg_gap_ms: gaps.avg,
        min_latency_ms: latencies.min,
        max_latency_ms: latencies.max,
        avg_latency_ms: latencies.avg,
        total_elapsed_ms,
        success_rate_percent,
        throughput_requests_per_second,
        service_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::ResultCollector;
    use crate::timer::{ManualClock, StepTimer};
    use std::sync::Arc;
    use std::time::Duration;

    fn record(id: u64, success: bool, since_start: u64, gap: u64) -> ResultRecord<u64, String> {
        let payload = if success {
            Ok(id)
        } else {
            Err(format!("request {id} failed"))
        };
        ResultRecord::new(
            id,
            payload,
            Duration::from_millis(since_start),
            Duration::from_millis(gap),
            Duration::from_millis(gap),
        )
    }

    fn params(total_requests: u64) -> LoadTestParams {
        LoadTestParams::new("reduce-test".to_owned(), total_requests, 1)
    }

    #[test]
    fn should_fail_on_empty_input() {
        let result = reduce::<u64, String>(params(0), Vec::new());
        assert!(matches!(result, Err(LoadTestError::EmptyResults)));
    }

    #[test]
    fn total_elapsed_should_be_max_latency_not_last_record() {
        let results = vec![
            record(0, true, 10, 10),
            record(1, true, 40, 30),
            record(2, true, 25, 0),
        ];

        let report = reduce(params(3), results).unwrap();

        assert_eq!(report.total_elapsed_ms, 40.0);
        assert_eq!(report.max_latency_ms, 40.0);
        assert_eq!(report.all_results.last().unwrap().time_since_start_ms, 25.0);
    }

    #[test]
    fn should_keep_successful_subsequence_in_arrival_order() {
        let results = vec![
            record(3, true, 1, 1),
            record(0, false, 2, 1),
            record(1, true, 3, 1),
            record(2, true, 4, 1),
            record(4, false, 5, 1),
        ];

        let report = reduce(params(5), results).unwrap();

        let ids = report
            .successful_results
            .iter()
            .map(|r| r.request_id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(report.all_results.len(), 5);
        assert_eq!(report.success_rate_percent, 60.0);
    }

    #[test]
    fn should_compute_throughput_from_total_elapsed() {
        let results = (0..4).map(|id| record(id, true, (id + 1) * 125, 125)).collect();

        let report = reduce(params(4), results).unwrap();

        assert_eq!(report.total_elapsed_ms, 500.0);
        assert_eq!(report.throughput_requests_per_second, 8.0);
    }

    #[test]
    fn zero_elapsed_time_should_give_zero_throughput() {
        let report = reduce(params(1), vec![record(0, true, 0, 0)]).unwrap();
        assert_eq!(report.throughput_requests_per_second, 0.0);
        assert_eq!(report.min_gap_ms, 0.0);
    }

    #[tokio::test]
    async fn should_match_hand_computed_values_for_fake_clock_timestamps() {
        let clock = Arc::new(ManualClock::new());
        let timer = Arc::new(StepTimer::new("fake-clock", clock.clone(), false));
        timer.start().unwrap();
        let collector = ResultCollector::<u64, String>::new(timer, 5, false);

        // Completions at 2, 6, 6, 14 and 20 ms, arriving for ids 1, 0, 3, 2, 4.
        let arrivals = [(1, 2, true), (0, 4, true), (3, 0, false), (2, 8, true), (4, 6, true)];
        for (id, advance_by, success) in arrivals {
            clock.advance(Duration::from_millis(advance_by));
            let payload = if success {
                Ok(id)
            } else {
                Err("failed".to_owned())
            };
            collector.record(id, payload, Duration::ZERO).await.unwrap();
        }

        let report = reduce(params(5), collector.finish().await.unwrap()).unwrap();

        // gaps: 2, 4, 0, 8, 6
        assert_eq!(report.min_gap_ms, 0.0);
        assert_eq!(report.max_gap_ms, 8.0);
        assert_eq!(report.avg_gap_ms, 4.0);
        // latencies: 2, 6, 6, 14, 20
        assert_eq!(report.min_latency_ms, 2.0);
        assert_eq!(report.max_latency_ms, 20.0);
        assert_eq!(report.avg_latency_ms, 9.6);
        assert_eq!(report.total_elapsed_ms, 20.0);
        assert_eq!(report.successful_results.len(), 4);
        assert_eq!(report.success_rate_percent, 80.0);
        assert_eq!(report.service_time.max_ms, 20.0);
        assert_eq!(report.service_time.median_ms, 6.0);
    }
}
