use std::fmt;

use tracing::{Event, Subscriber};
use tracing_subscriber::{
    fmt::{
        format::{FormatEvent, FormatFields, Writer},
        FmtContext,
    },
    registry::LookupSpan,
};

use super::{CallerLocation, LineFormatter, LogRecord, Severity};
use crate::clock::{Clock, SystemClock};

/// `tracing_subscriber` event format producing the console line shape.
///
/// The caller location is taken from the event metadata; events without a
/// file fall back to their module path (or target) with line 0.
#[derive(Debug, Default, Clone)]
pub struct LineEventFormat<C: Clock = SystemClock> {
    formatter: LineFormatter,
    clock: C,
}

impl<C: Clock> LineEventFormat<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            formatter: LineFormatter::new(),
            clock,
        }
    }
}

impl<S, N, C> FormatEvent<S, N> for LineEventFormat<C>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
    C: Clock,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();
        let caller = match (metadata.file(), metadata.line()) {
            (Some(file), line) => CallerLocation::new(file, line.unwrap_or(0)),
            (None, _) => CallerLocation {
                file: metadata
                    .module_path()
                    .unwrap_or_else(|| metadata.target())
                    .to_string(),
                line: 0,
            },
        };

        let mut message = String::new();
        ctx.format_fields(Writer::new(&mut message), event)?;

        let record = LogRecord::new(
            Severity::from_level(metadata.level()),
            self.clock.now(),
            caller,
            message,
        );
        writer.write_str(&self.formatter.format(&record))
    }
}

/// Installs a global subscriber that prints events at or above `min` in the
/// console line format. Returns `false` if a global subscriber already exists.
pub fn install(min: Severity) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(min.to_level())
        .event_format(LineEventFormat::<SystemClock>::default())
        .try_init()
        .is_ok()
}
