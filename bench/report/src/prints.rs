use crate::report::LoadTestReport;
use colored::{ColoredString, Colorize};
use human_repr::{HumanCount, HumanThroughput};
use tracing::info;

impl<T, E> LoadTestReport<T, E> {
    pub fn print_summary(&self) {
        let params = &self.params;
        let params_print = format!(
            "Load test: {}, {} requests, max {} in flight{}",
            params.name,
            params.total_requests.human_count_bare(),
            params.max_concurrency,
            params
                .target
                .as_ref()
                .map(|target| format!(", target: {target}"))
                .unwrap_or_default(),
        )
        .blue();

        info!("{}", params_print);
        info!("{}", " === LOOK MA', STATS! ===".bold());
        info!("{}", self.outcome_string());
        info!("{}", self.gaps_string());
        info!("{}", self.latencies_string());
        info!("{}", self.service_time_string());
        info!(
            "{}",
            format!(
                "Total test duration: {:.2} ms, throughput: {}",
                self.total_elapsed_ms,
                self.throughput_requests_per_second.human_throughput("req")
            )
            .green()
        );
    }

    pub fn outcome_string(&self) -> ColoredString {
        let line = format!(
            "{} requests fired, of which we got back {} successful responses ({:.2}% success rate)",
            self.total_requests(),
            self.successful_requests(),
            self.success_rate_percent
        );
        if self.failed_requests() == 0 {
            line.green()
        } else {
            line.yellow()
        }
    }

    pub fn gaps_string(&self) -> String {
        format!(
            "Longest time between responses: {:.2} ms, shortest time between responses: {:.2} ms, average response time interval: {:.2} ms",
            self.max_gap_ms, self.min_gap_ms, self.avg_gap_ms
        )
    }

    pub fn latencies_string(&self) -> String {
        format!(
            "Shortest response time: {:.2} ms, longest response time: {:.2} ms, average response time: {:.2} ms",
            self.min_latency_ms, self.max_latency_ms, self.avg_latency_ms
        )
    }

    pub fn service_time_string(&self) -> String {
        let st = &self.service_time;
        format!(
            "Service time: p50: {:.2} ms, p90: {:.2} ms, p95: {:.2} ms, p99: {:.2} ms, max: {:.2} ms, average: {:.2} ms, median: {:.2} ms",
            st.p50_ms, st.p90_ms, st.p95_ms, st.p99_ms, st.max_ms, st.avg_ms, st.median_ms
        )
    }
}
