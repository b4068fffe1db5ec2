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

use crate::append::Append;

/// An appender that writes events that can be captured by a test harness (like `cargo test`),
/// and thus the outputs are suppressed unless `--nocapture` or `--show-output` is specified.
///
/// # Examples
///
/// ```
/// use eventforth::append::Testing;
///
/// let test_appender = Testing::default();
/// ```
#[derive(Debug, Default, Clone, Copy)]
#[non_exhaustive]
pub struct Testing {}

impl Append for Testing {
    fn append(&self, text: &str) -> io::Result<()> {
        eprint!("{text}");
        Ok(())
    }
}
