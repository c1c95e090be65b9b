//! Log builder
//!
//! [`LogBuilder`] owns the run: configuration, timing model, handler
//! registry and [`LogState`]. Traces are replayed one after another:
//!
//! 1. sample the trace's step
//! 2. open a [`TraceContext`] (Patient and Encounter at trace start)
//! 3. dispatch each activity at the cursor time, then advance the cursor
//! 4. emit the trace's O2O records and drop the context
//!
//! Trace indices keep counting across [`LogBuilder::add_traces`] calls, so
//! ids and start times never collide within one builder.

use tracing::{debug, info, trace};

use ocelgen_core::{Activity, Error, OcelLog, Result};

use crate::config::GeneratorConfig;
use crate::context::TraceContext;
use crate::emitter::emit_relationships;
use crate::handlers::HandlerRegistry;
use crate::state::LogState;
use crate::timing::TimingModel;

/// Resolve canonical labels, failing on the first unknown one
///
/// `first_index` is the 1-based index reported for `traces[0]`.
pub fn parse_traces<T, S>(traces: &[T], first_index: usize) -> Result<Vec<Vec<Activity>>>
where
    T: AsRef<[S]>,
    S: AsRef<str>,
{
    traces
        .iter()
        .enumerate()
        .map(|(i, trace)| {
            trace
                .as_ref()
                .iter()
                .enumerate()
                .map(|(j, label)| {
                    let label = label.as_ref();
                    Activity::from_name(label).ok_or_else(|| Error::UnknownActivity {
                        label: label.to_string(),
                        trace: first_index + i,
                        position: j + 1,
                    })
                })
                .collect()
        })
        .collect()
}

/// Builds one object-centric event log
#[derive(Debug)]
pub struct LogBuilder {
    config: GeneratorConfig,
    timing: TimingModel,
    registry: HandlerRegistry,
    state: LogState,
    traces_added: usize,
}

impl LogBuilder {
    /// Create a builder; fails if the configuration is invalid
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let timing = config.timing()?;
        let state = LogState::new(config.id_pad_width, config.seed);
        Ok(Self {
            config,
            timing,
            registry: HandlerRegistry::clinical(),
            state,
            traces_added: 0,
        })
    }

    /// Builder with the default configuration
    pub fn with_defaults() -> Result<Self> {
        Self::new(GeneratorConfig::default())
    }

    /// The configuration in use
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Traces replayed so far
    pub fn trace_count(&self) -> usize {
        self.traces_added
    }

    /// Accumulated state
    pub fn state(&self) -> &LogState {
        &self.state
    }

    /// Replay traces of canonical labels
    ///
    /// Every label is checked before anything is replayed; an unknown
    /// label fails with `UnknownActivity` and leaves the builder untouched.
    pub fn add_traces<T, S>(&mut self, traces: &[T]) -> Result<()>
    where
        T: AsRef<[S]>,
        S: AsRef<str>,
    {
        let parsed = parse_traces(traces, self.traces_added + 1)?;
        self.add_activity_traces(&parsed)
    }

    /// Replay traces that are already typed
    pub fn add_activity_traces(&mut self, traces: &[Vec<Activity>]) -> Result<()> {
        info!(
            traces = traces.len(),
            first_index = self.traces_added + 1,
            "Replaying traces"
        );
        for activities in traces {
            let index = self.traces_added + 1;
            self.replay_trace(index, activities)?;
            self.traces_added = index;
        }
        info!(
            events = self.state.events().len(),
            objects = self.state.store.len(),
            relationships = self.state.relationships().len(),
            "Traces replayed"
        );
        Ok(())
    }

    fn replay_trace(&mut self, index: usize, activities: &[Activity]) -> Result<()> {
        let start = self.timing.trace_start(index)?;
        let step = self.timing.sample_step(&mut self.state.sampler);
        debug!(trace = index, len = activities.len(), step_minutes = step, "Replaying trace");

        let mut ctx = TraceContext::open(&mut self.state, index, start)?;
        let mut cursor = start;
        for &activity in activities {
            let event = self
                .registry
                .dispatch(activity, &mut self.state, &mut ctx, cursor)?;
            trace!(id = %event.id, activity = %activity, time = %cursor, "Emitted event");
            self.state.push_event(event);
            cursor = cursor.plus_minutes(step)?;
        }

        let relationships = emit_relationships(&mut self.state, &ctx)?;
        debug!(trace = index, relationships, "Trace closed");
        Ok(())
    }

    /// Finish the run and assemble the log document
    pub fn finish(self) -> OcelLog {
        let schema = self.config.schema;
        let (events, objects, object_relationships) = self.state.into_parts();
        let log = OcelLog {
            event_types: schema.event_types,
            object_types: schema.object_types,
            events,
            objects,
            object_relationship_types: schema.object_relationship_types,
            object_relationships,
        };
        info!(summary = %log.summary(), traces = self.traces_added, "Log built");
        log
    }
}

/// Build a log from canonical-label traces in one call
pub fn generate<T, S>(config: GeneratorConfig, traces: &[T]) -> Result<OcelLog>
where
    T: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut builder = LogBuilder::new(config)?;
    builder.add_traces(traces)?;
    Ok(builder.finish())
}
