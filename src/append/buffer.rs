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

use std::io;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

use crate::append::Append;

/// An appender that keeps events in memory.
///
/// Clones share the same storage, so one clone can be handed to a logger while another is
/// kept to inspect what was written.
///
/// # Examples
///
/// ```
/// use eventforth::Append;
/// use eventforth::append::Buffer;
///
/// let buffer = Buffer::default();
/// buffer.clone().append("hello\n").unwrap();
/// assert_eq!(buffer.entries(), ["hello\n"]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Buffer {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Buffer {
    /// The appended texts, one entry per event, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// All appended text concatenated.
    pub fn contents(&self) -> String {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .concat()
    }
}

impl Append for Buffer {
    fn append(&self, text: &str) -> io::Result<()> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(text.to_string());
        Ok(())
    }
}
