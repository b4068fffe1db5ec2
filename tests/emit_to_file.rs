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

//! End-to-end checks of events written to a log file.

use std::fs;

use eventforth::DEFAULT_TEMPLATE;
use eventforth::Error;
use eventforth::EventLogger;
use eventforth::ExtraContext;
use eventforth::SinkKind;
use eventforth::StaticContext;
use eventforth::append::Buffer;
use eventforth::append::SingleFile;
use tempfile::TempDir;

// YYYY-MM-DDTHH:MM:SS.mmm+HH:MM
fn is_timestamp(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 29 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, &b)| match i {
        4 | 7 => b == b'-',
        10 => b == b'T',
        13 | 16 | 26 => b == b':',
        19 => b == b'.',
        23 => b == b'+' || b == b'-',
        _ => b.is_ascii_digit(),
    })
}

#[test]
fn test_static_context_line() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("events.log");
    let logger = EventLogger::builder(SingleFile::new(&path))
        .template("{timestamp} - {name} - {levelName} - {message}")
        .context(StaticContext::from_iter([("name", "X")]))
        .build();

    logger.info("hello", ExtraContext::none())?;

    let content = fs::read_to_string(&path)?;
    let line = content.strip_suffix('\n').expect("line must end with a newline");
    let parts = line.split(" - ").collect::<Vec<_>>();
    assert_eq!(parts.len(), 4, "{line}");
    assert!(is_timestamp(parts[0]), "{line}");
    assert_eq!(&parts[1..], ["X", "INFO", "hello"]);
    Ok(())
}

#[test]
fn test_invalid_template_uses_default() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("events.log");
    let logger = EventLogger::builder(SingleFile::new(&path))
        .template("{nonexistent}")
        .build();
    assert_eq!(logger.layout().template().source(), DEFAULT_TEMPLATE);

    logger.error("first", ExtraContext::none())?;
    logger.debug("second", ExtraContext::none())?;

    let content = fs::read_to_string(&path)?;
    let lines = content.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 2);
    for (line, expected) in lines.iter().zip([" - ERROR - first", " - DEBUG - second"]) {
        let (timestamp, rest) = line.split_at(29);
        assert!(is_timestamp(timestamp), "{line}");
        assert_eq!(rest, expected);
    }
    Ok(())
}

#[test]
fn test_extra_context_lines() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("events.log");
    let logger = EventLogger::builder(SingleFile::new(&path)).build();

    logger.warning("x", &ExtraContext::new().arg(1).arg(2).kwarg("key", "v"))?;

    let content = fs::read_to_string(&path)?;
    let lines = content.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 3, "{content}");
    assert!(lines[0].ends_with(" - WARNING - x"), "{content}");
    assert_eq!(lines[1], "Context args: [1,2]");
    assert_eq!(lines[2], "Context kwargs: {\"key\":\"v\"}");
    assert!(content.ends_with('\n'));
    Ok(())
}

#[test]
fn test_repeated_events_are_independent() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("events.log");
    let stdout = Buffer::default();
    let logger = EventLogger::builder(SingleFile::new(&path))
        .stdout(stdout.clone())
        .build();
    let extra = ExtraContext::new().kwarg("order", 7);

    logger.notice("paid zero", &extra)?;
    logger.notice("paid zero", &extra)?;

    let blocks = stdout.entries();
    assert_eq!(blocks.len(), 2);
    assert_eq!(fs::read_to_string(&path)?, stdout.contents());
    for block in &blocks {
        let (timestamp, rest) = block.split_at(29);
        assert!(is_timestamp(timestamp), "{block}");
        assert_eq!(rest, " - NOTICE - paid zero\nContext kwargs: {\"order\":7}\n");
    }
    Ok(())
}

#[test]
fn test_unwritable_destination() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("no-such-dir").join("events.log");
    let stdout = Buffer::default();
    let logger = EventLogger::builder(SingleFile::new(&path))
        .stdout(stdout.clone())
        .build();

    let err = logger.alert("disk gone", ExtraContext::none()).unwrap_err();
    assert!(matches!(
        err,
        Error::SinkWrite {
            sink: SinkKind::Destination,
            ..
        }
    ));
    assert!(std::error::Error::source(&err).is_some());
    assert!(stdout.entries().is_empty());
    Ok(())
}
