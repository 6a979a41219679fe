mod execution_event_logger;
mod field_timing_metrics;
mod query_metrics;

pub use execution_event_logger::ExecutionEventLogger;
pub use execution_event_logger::TracingEventLogger;
pub use field_timing_metrics::FieldTiming;
pub use field_timing_metrics::FieldTimingMetrics;
pub use query_metrics::QueryMetrics;
