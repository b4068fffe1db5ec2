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

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::append::Append;

/// An appender that writes events to a file.
///
/// The file is opened in append mode, written, and closed again on every event; no handle
/// is kept between calls. The file is created if it does not exist, but its directory is
/// not.
///
/// # Examples
///
/// ```
/// use eventforth::append::SingleFile;
///
/// let append = SingleFile::new("/tmp/my_service.log");
/// ```
#[derive(Debug, Clone)]
pub struct SingleFile {
    path: PathBuf,
}

impl SingleFile {
    /// Create a new [`SingleFile`] appender for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Append for SingleFile {
    fn append(&self, text: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        file.write_all(text.as_bytes())?;
        file.flush()
    }
}
