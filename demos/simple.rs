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

use eventforth::EventLogger;
use eventforth::ExtraContext;
use eventforth::StaticContext;
use eventforth::append;

fn main() -> anyhow::Result<()> {
    let log_file = std::env::temp_dir().join("eventforth-simple.log");
    let logger = EventLogger::builder(append::SingleFile::new(&log_file))
        .template("{timestamp} - {name} - {levelName} - {message}")
        .context(StaticContext::from_iter([(
            "name",
            format!("PID:{}", std::process::id()),
        )]))
        .stdout(append::Stdout::default())
        .stderr(append::Stderr::default())
        .build();

    let extra = ExtraContext::new().args_from(std::env::args());
    logger.info("Simple string information", &extra)?;
    logger.warning("Avatar upload failed", &ExtraContext::new().kwarg("user", 42))?;

    println!("events appended to {}", log_file.display());
    Ok(())
}
