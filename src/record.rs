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

//! A single event, ready to be rendered.

use std::borrow::Cow;

use crate::ExtraContext;
use crate::Level;
use crate::time;

/// The payload of one event.
#[derive(Clone, Debug)]
pub struct Record<'a> {
    level: Level,
    // the observed time, already rendered
    timestamp: Cow<'a, str>,
    message: &'a str,
    extra: &'a ExtraContext,
}

impl<'a> Record<'a> {
    /// The severity of the event.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The rendered observation time.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// The message body.
    pub fn message(&self) -> &'a str {
        self.message
    }

    /// Extra positional and named values.
    pub fn extra(&self) -> &'a ExtraContext {
        self.extra
    }

    /// Returns a new builder.
    pub fn builder() -> RecordBuilder<'a> {
        RecordBuilder::default()
    }
}

/// Builder for [`Record`].
#[derive(Debug)]
pub struct RecordBuilder<'a> {
    level: Level,
    timestamp: Option<Cow<'a, str>>,
    message: &'a str,
    extra: &'a ExtraContext,
}

impl Default for RecordBuilder<'_> {
    fn default() -> Self {
        RecordBuilder {
            level: Level::Info,
            timestamp: None,
            message: "",
            extra: ExtraContext::none(),
        }
    }
}

impl<'a> RecordBuilder<'a> {
    /// Set [`level`](Record::level).
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set [`timestamp`](Record::timestamp).
    ///
    /// Default to the current time, rendered by [`time::now`].
    pub fn timestamp(mut self, timestamp: impl Into<Cow<'a, str>>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Set [`message`](Record::message).
    pub fn message(mut self, message: &'a str) -> Self {
        self.message = message;
        self
    }

    /// Set [`extra`](Record::extra).
    pub fn extra(mut self, extra: &'a ExtraContext) -> Self {
        self.extra = extra;
        self
    }

    /// Invoke the builder and return a `Record`.
    pub fn build(self) -> Record<'a> {
        Record {
            level: self.level,
            timestamp: self.timestamp.unwrap_or_else(|| Cow::Owned(time::now())),
            message: self.message,
            extra: self.extra,
        }
    }
}
