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

//! Sinks that rendered events are appended to.

use std::fmt;
use std::io;

mod buffer;
mod discard;
mod single_file;
mod stdio;
mod testing;

pub use self::buffer::Buffer;
pub use self::discard::Discard;
pub use self::single_file::SingleFile;
pub use self::stdio::Stderr;
pub use self::stdio::Stdout;
pub use self::testing::Testing;

/// An append-only destination for rendered text.
///
/// Each call to [`append`](Append::append) receives the complete text of one event, which may
/// span several lines. Implementations should write it in one piece, so that events from
/// concurrent callers do not interleave.
pub trait Append: fmt::Debug + Send + Sync + 'static {
    /// Append the rendered text of one event.
    fn append(&self, text: &str) -> io::Result<()>;

    /// Flush any buffered text.
    ///
    /// Default to a no-op.
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

impl<T: Append> From<T> for Box<dyn Append> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}
