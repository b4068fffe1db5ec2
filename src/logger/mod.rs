// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::Append;
use crate::Error;
use crate::ExtraContext;
use crate::Level;
use crate::SinkKind;
use crate::layout::TemplateLayout;
use crate::record::Record;
use crate::trap::Trap;

mod builder;

pub use self::builder::EventLoggerBuilder;

/// Which console sink receives the copy of each event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleRouting {
    /// Every level goes to the console-out sink; the console-err sink is never written.
    #[default]
    Stdout,
    /// Alert levels go to the console-err sink, all others to the console-out sink.
    AlertsToStderr,
}

impl ConsoleRouting {
    fn use_stderr(self, level: Level) -> bool {
        match self {
            ConsoleRouting::Stdout => false,
            ConsoleRouting::AlertsToStderr => level.is_alert(),
        }
    }
}

/// A logger that renders events through a template and appends them to a destination and a
/// console sink.
///
/// Every call is recorded, whatever its level. Each call renders and writes independently:
/// nothing is buffered and no state carries over between calls, so an `EventLogger` can be
/// shared freely between threads.
///
/// # Examples
///
/// ```no_run
/// use eventforth::EventLogger;
/// use eventforth::ExtraContext;
/// use eventforth::append;
///
/// let logger = EventLogger::builder(append::SingleFile::new("/var/log/my_service.log"))
///     .stdout(append::Stdout::default())
///     .build();
///
/// logger.info("user registered", ExtraContext::none())?;
/// logger.warning("avatar upload failed", &ExtraContext::new().kwarg("user", 42))?;
/// # Ok::<(), eventforth::Error>(())
/// ```
#[derive(Debug)]
pub struct EventLogger {
    layout: TemplateLayout,
    destination: Box<dyn Append>,
    stdout: Box<dyn Append>,
    stderr: Box<dyn Append>,
    routing: ConsoleRouting,
    trap: Box<dyn Trap>,
}

impl EventLogger {
    /// Create a new [`EventLoggerBuilder`] writing to `destination`.
    pub fn builder(destination: impl Into<Box<dyn Append>>) -> EventLoggerBuilder {
        EventLoggerBuilder::new(destination)
    }

    /// The layout events are rendered with.
    pub fn layout(&self) -> &TemplateLayout {
        &self.layout
    }

    /// The console routing in use.
    pub fn console_routing(&self) -> ConsoleRouting {
        self.routing
    }

    /// Record an event at `level`.
    ///
    /// The rendered text is appended to the destination first and then to the console sink.
    ///
    /// # Errors
    ///
    /// Return [`Error::SinkWrite`] if a sink fails. A destination failure stops the call before
    /// the console is written.
    pub fn emit(&self, level: Level, message: &str, extra: &ExtraContext) -> Result<(), Error> {
        let record = Record::builder()
            .level(level)
            .message(message)
            .extra(extra)
            .build();
        let text = self.layout.format(&record)?;

        self.destination
            .append(&text)
            .map_err(Error::sink_write(SinkKind::Destination))?;
        self.console(level)
            .append(&text)
            .map_err(Error::sink_write(SinkKind::Console))
    }

    /// Record an [`ALERT`](Level::Alert) event.
    pub fn alert(&self, message: &str, extra: &ExtraContext) -> Result<(), Error> {
        self.emit(Level::Alert, message, extra)
    }

    /// Record a [`CRITICAL`](Level::Critical) event.
    pub fn critical(&self, message: &str, extra: &ExtraContext) -> Result<(), Error> {
        self.emit(Level::Critical, message, extra)
    }

    /// Record an [`ERROR`](Level::Error) event.
    pub fn error(&self, message: &str, extra: &ExtraContext) -> Result<(), Error> {
        self.emit(Level::Error, message, extra)
    }

    /// Record a [`WARNING`](Level::Warning) event.
    pub fn warning(&self, message: &str, extra: &ExtraContext) -> Result<(), Error> {
        self.emit(Level::Warning, message, extra)
    }

    /// Record a [`NOTICE`](Level::Notice) event.
    pub fn notice(&self, message: &str, extra: &ExtraContext) -> Result<(), Error> {
        self.emit(Level::Notice, message, extra)
    }

    /// Record an [`INFO`](Level::Info) event.
    pub fn info(&self, message: &str, extra: &ExtraContext) -> Result<(), Error> {
        self.emit(Level::Info, message, extra)
    }

    /// Record a [`DEBUG`](Level::Debug) event.
    pub fn debug(&self, message: &str, extra: &ExtraContext) -> Result<(), Error> {
        self.emit(Level::Debug, message, extra)
    }

    /// Record an [`EXCLUDE`](Level::Exclude) event.
    ///
    /// The event is written like any other; skipping excluded events is up to the caller.
    pub fn exclude(&self, message: &str, extra: &ExtraContext) -> Result<(), Error> {
        self.emit(Level::Exclude, message, extra)
    }

    /// Flush all sinks.
    ///
    /// # Errors
    ///
    /// Return [`Error::SinkWrite`] for the first sink that fails to flush.
    pub fn flush(&self) -> Result<(), Error> {
        self.destination
            .flush()
            .map_err(Error::sink_write(SinkKind::Destination))?;
        self.stdout
            .flush()
            .map_err(Error::sink_write(SinkKind::Console))?;
        self.stderr
            .flush()
            .map_err(Error::sink_write(SinkKind::Console))
    }

    #[cfg(feature = "bridge-log")]
    pub(crate) fn trap(&self, err: &Error) {
        self.trap.trap(err);
    }

    fn console(&self, level: Level) -> &dyn Append {
        if self.routing.use_stderr(level) {
            self.stderr.as_ref()
        } else {
            self.stdout.as_ref()
        }
    }
}
