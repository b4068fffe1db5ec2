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

use std::fmt;
use std::io;

/// The error type of eventforth.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A level value that is not one of the eight defined levels.
    #[error("unknown level value: {0}")]
    UnknownLevel(u32),
    /// A level name that does not exactly match a canonical level name.
    #[error("unknown level name: {0:?}")]
    UnknownLevelName(String),
    /// A template placeholder that has no value in the render context.
    #[error("unresolved placeholder in template: {{{0}}}")]
    UnresolvedPlaceholder(String),
    /// A template that cannot be parsed.
    #[error("malformed template at byte {position}: {reason}")]
    MalformedTemplate {
        position: usize,
        reason: &'static str,
    },
    /// A sink failed to append the rendered text.
    #[error("failed to write to {sink} sink: {source}")]
    SinkWrite {
        sink: SinkKind,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn sink_write(sink: SinkKind) -> impl FnOnce(io::Error) -> Error {
        move |source| Error::SinkWrite { sink, source }
    }
}

/// Which sink of an [`EventLogger`](crate::EventLogger) failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    /// The primary destination, usually a log file.
    Destination,
    /// The console mirror.
    Console,
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkKind::Destination => f.write_str("destination"),
            SinkKind::Console => f.write_str("console"),
        }
    }
}
