use crate::execution::GraphFieldExecutionContext;
use crate::logging::QueryMetrics;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::time::Duration;
use std::time::Instant;

/// The timing of one field execution context.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldTiming {
    /// Nanoseconds.
    pub duration: u64,
    pub field_name: String,
    pub parent_type: String,
    pub path: Value,
    pub return_type: String,
    /// Nanoseconds since the start of the request.
    pub start_offset: u64,
}

#[derive(Debug, Default)]
struct TimingState {
    ended: Option<Instant>,
    in_flight: HashMap<u64, (Instant, FieldTiming)>,
    resolvers: Vec<FieldTiming>,
    started: Option<Instant>,
}

/// Records the duration of every field execution, reported in the Apollo
/// tracing format under `extensions.tracing`.
#[derive(Debug, Default)]
pub struct FieldTimingMetrics {
    state: Mutex<TimingState>,
}
impl FieldTimingMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, TimingState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Timings of all completed field executions, in completion order.
    pub fn timings(&self) -> Vec<FieldTiming> {
        self.lock().resolvers.clone()
    }
}

impl QueryMetrics for FieldTimingMetrics {
    fn start(&self) {
        self.lock().started = Some(Instant::now());
    }

    fn end(&self) {
        self.lock().ended = Some(Instant::now());
    }

    fn begin_field_resolution(&self, context: &GraphFieldExecutionContext<'_>) {
        let now = Instant::now();
        let field = context.request().field();
        let mut state = self.lock();
        let start_offset = state
            .started
            .map(|started| now.saturating_duration_since(started))
            .unwrap_or(Duration::ZERO);
        let path = context
            .request()
            .items()
            .first()
            .and_then(|item| serde_json::to_value(&item.origin().path).ok())
            .unwrap_or(Value::Null);
        state.in_flight.insert(context.id(), (now, FieldTiming {
            duration: 0,
            field_name: field.name().to_string(),
            parent_type: field.parent_type_name().to_string(),
            path,
            return_type: field.type_expression().to_string(),
            start_offset: nanos(start_offset),
        }));
    }

    fn end_field_resolution(&self, context: &GraphFieldExecutionContext<'_>) {
        let mut state = self.lock();
        if let Some((began, mut timing)) = state.in_flight.remove(&context.id()) {
            timing.duration = nanos(began.elapsed());
            state.resolvers.push(timing);
        }
    }

    fn to_extension(&self) -> Option<Value> {
        let state = self.lock();
        let duration = match (state.started, state.ended) {
            (Some(started), Some(ended)) => nanos(ended.saturating_duration_since(started)),
            _ => 0,
        };
        Some(serde_json::json!({
            "version": 1,
            "duration": duration,
            "execution": {
                "resolvers": state.resolvers,
            },
        }))
    }
}

fn nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}
