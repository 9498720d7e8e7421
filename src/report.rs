//! Consumers of finished solutions.

use crate::models::{RouteSummary, Solution};

/// Receives the final routes of a run.
pub trait ReportSink {
    /// Consumes one solution.
    fn report(&mut self, solution: &Solution);
}

/// Collects route summaries in memory.
impl ReportSink for Vec<RouteSummary> {
    fn report(&mut self, solution: &Solution) {
        self.extend(solution.summaries());
    }
}

/// Writes each route and the total length through the `log` facade at
/// `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ReportSink for LogSink {
    fn report(&mut self, solution: &Solution) {
        for summary in solution.summaries() {
            log::info!(
                "route {}: {:?} length {:.3}",
                summary.label,
                summary.node_ids,
                summary.length
            );
        }
        log::info!("total length {:.3}", solution.total_length());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Node, Route};

    fn solution() -> Solution {
        Solution::new(vec![Route::with_nodes(
            "01",
            vec![Node::depot(), Node::new(7, 0.0, 2.0), Node::depot()],
        )])
    }

    #[test]
    fn test_vec_sink_collects() {
        let mut sink: Vec<RouteSummary> = Vec::new();
        sink.report(&solution());
        sink.report(&solution());
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].node_ids, vec![0, 7, 0]);
        assert!((sink[0].length - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_log_sink_accepts_solution() {
        LogSink.report(&solution());
        LogSink.report(&Solution::default());
    }
}
