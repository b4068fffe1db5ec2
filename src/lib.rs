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

//! Eventforth is a leveled event logger: it classifies events into a fixed severity taxonomy,
//! renders each one through a text template, and appends the result to a log file and a
//! console stream.
//!
//! # Overview
//!
//! Severities are bit flags rather than ordinals, so that monitoring can combine them into
//! masks (for example "any of WARNING, ERROR or CRITICAL"). Every call is recorded; deciding
//! what not to log is left to the caller.
//!
//! An [`EventLogger`] owns a destination [`Append`] sink, a validated [`Template`] and a
//! [`StaticContext`] that is merged into every line. Construction never fails: a template
//! that references unknown placeholders silently falls back to [`DEFAULT_TEMPLATE`].
//!
//! # Examples
//!
//! ```
//! use eventforth::EventLogger;
//! use eventforth::ExtraContext;
//! use eventforth::StaticContext;
//! use eventforth::append;
//!
//! let buffer = append::Buffer::default();
//! let logger = EventLogger::builder(buffer.clone())
//!     .template("{timestamp} - {pid} - {levelName} - {message}")
//!     .context(StaticContext::from_iter([("pid", "PID:42")]))
//!     .build();
//!
//! logger.info("service started", ExtraContext::none()).unwrap();
//! logger
//!     .warning("slow request", &ExtraContext::new().arg(1).kwarg("path", "/"))
//!     .unwrap();
//!
//! assert_eq!(buffer.entries().len(), 2);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
pub mod layout;
pub mod level;
pub mod record;
pub mod time;
pub mod trap;

#[cfg(feature = "bridge-log")]
mod bridge;
mod context;
mod error;
mod logger;

pub use self::append::Append;
pub use self::context::ExtraContext;
pub use self::context::StaticContext;
pub use self::error::Error;
pub use self::error::SinkKind;
pub use self::layout::DEFAULT_TEMPLATE;
pub use self::layout::Template;
pub use self::layout::TemplateLayout;
pub use self::level::Level;
pub use self::level::LevelMetadata;
pub use self::logger::ConsoleRouting;
pub use self::logger::EventLogger;
pub use self::logger::EventLoggerBuilder;
pub use self::trap::Trap;
