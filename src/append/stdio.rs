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
use std::io::Write;

use crate::append::Append;

/// An appender that prints events to stdout.
#[derive(Debug, Default, Clone, Copy)]
#[non_exhaustive]
pub struct Stdout {}

impl Append for Stdout {
    fn append(&self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }

    fn flush(&self) -> io::Result<()> {
        io::stdout().flush()
    }
}

/// An appender that prints events to stderr.
#[derive(Debug, Default, Clone, Copy)]
#[non_exhaustive]
pub struct Stderr {}

impl Append for Stderr {
    fn append(&self, text: &str) -> io::Result<()> {
        io::stderr().lock().write_all(text.as_bytes())
    }

    fn flush(&self) -> io::Result<()> {
        io::stderr().flush()
    }
}
