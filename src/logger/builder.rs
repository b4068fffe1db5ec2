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
use crate::DEFAULT_TEMPLATE;
use crate::EventLogger;
use crate::StaticContext;
use crate::append::Discard;
use crate::layout::TemplateLayout;
use crate::logger::ConsoleRouting;
use crate::trap::DefaultTrap;
use crate::trap::Trap;

/// A builder for configuring an [`EventLogger`].
///
/// Building never fails. A template with a placeholder that cannot be resolved is silently
/// replaced by [`DEFAULT_TEMPLATE`]; a template that cannot be parsed is replaced as well and
/// the parse error is sent to the [trap](EventLoggerBuilder::trap).
///
/// # Examples
///
/// ```
/// use eventforth::EventLogger;
/// use eventforth::StaticContext;
/// use eventforth::append;
///
/// let logger = EventLogger::builder(append::SingleFile::new("/tmp/my_service.log"))
///     .template("{timestamp} - {name} - {levelName} - {message}")
///     .context(StaticContext::from_iter([("name", "PID:42")]))
///     .stdout(append::Stdout::default())
///     .stderr(append::Stderr::default())
///     .build();
/// ```
#[must_use = "call `build` to construct the logger"]
#[derive(Debug)]
pub struct EventLoggerBuilder {
    // required
    destination: Box<dyn Append>,

    // optional
    template: String,
    context: StaticContext,
    stdout: Box<dyn Append>,
    stderr: Box<dyn Append>,
    routing: ConsoleRouting,
    trap: Box<dyn Trap>,
}

impl EventLoggerBuilder {
    /// Create a new [`EventLoggerBuilder`] writing to `destination`.
    pub fn new(destination: impl Into<Box<dyn Append>>) -> Self {
        Self {
            destination: destination.into(),
            template: DEFAULT_TEMPLATE.to_string(),
            context: StaticContext::default(),
            stdout: Box::new(Discard::default()),
            stderr: Box::new(Discard::default()),
            routing: ConsoleRouting::default(),
            trap: Box::new(DefaultTrap::default()),
        }
    }

    /// Set the line template.
    ///
    /// Default to [`DEFAULT_TEMPLATE`].
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Set the static context merged into every line.
    ///
    /// Default to an empty context.
    pub fn context(mut self, context: impl Into<StaticContext>) -> Self {
        self.context = context.into();
        self
    }

    /// Set the console-out sink.
    ///
    /// Default to [`Discard`].
    pub fn stdout(mut self, stdout: impl Into<Box<dyn Append>>) -> Self {
        self.stdout = stdout.into();
        self
    }

    /// Set the console-err sink.
    ///
    /// Default to [`Discard`]. It only receives events when the console routing selects it.
    pub fn stderr(mut self, stderr: impl Into<Box<dyn Append>>) -> Self {
        self.stderr = stderr.into();
        self
    }

    /// Set which console sink receives each event.
    ///
    /// Default to [`ConsoleRouting::Stdout`].
    pub fn console_routing(mut self, routing: ConsoleRouting) -> Self {
        self.routing = routing;
        self
    }

    /// Set the trap for errors that cannot be returned to a caller.
    ///
    /// Default to [`DefaultTrap`].
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }

    /// Build the [`EventLogger`].
    pub fn build(self) -> EventLogger {
        let EventLoggerBuilder {
            destination,
            template,
            context,
            stdout,
            stderr,
            routing,
            trap,
        } = self;

        let (layout, err) = TemplateLayout::parse(&template, context);
        if let Some(err) = err {
            trap.trap(&err);
        }

        EventLogger {
            layout,
            destination,
            stdout,
            stderr,
            routing,
            trap,
        }
    }
}
