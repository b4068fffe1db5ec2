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

use log::SetLoggerError;
use serde_json::Value;

use crate::EventLogger;
use crate::ExtraContext;
use crate::Level;

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warning,
            log::Level::Info => Self::Info,
            log::Level::Debug => Self::Debug,
            log::Level::Trace => Self::Debug,
        }
    }
}

fn to_json(value: &log::kv::Value) -> Value {
    if let Some(v) = value.to_bool() {
        Value::from(v)
    } else if let Some(v) = value.to_i64() {
        Value::from(v)
    } else if let Some(v) = value.to_u64() {
        Value::from(v)
    } else if let Some(v) = value.to_f64() {
        Value::from(v)
    } else {
        Value::from(value.to_string())
    }
}

#[derive(Default)]
struct KeyValueVisitor {
    extra: ExtraContext,
}

impl<'kvs> log::kv::VisitSource<'kvs> for KeyValueVisitor {
    fn visit_pair(
        &mut self,
        key: log::kv::Key<'kvs>,
        value: log::kv::Value<'kvs>,
    ) -> Result<(), log::kv::Error> {
        let extra = std::mem::take(&mut self.extra);
        self.extra = extra.kwarg(key.as_str(), to_json(&value));
        Ok(())
    }
}

impl EventLogger {
    /// Set up this logger as the global `log` logger.
    ///
    /// Every `log` record is recorded. `Error`, `Warn`, `Info` and `Debug` map to
    /// [`Level::Error`], [`Level::Warning`], [`Level::Info`] and [`Level::Debug`]; `Trace`
    /// maps to [`Level::Debug`]. Structured key-values become named extra context, and
    /// write failures go to the logger's trap.
    ///
    /// # Errors
    ///
    /// Return an error if a global logger has already been set.
    pub fn try_apply(self) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(log::LevelFilter::Trace);
        Ok(())
    }

    /// Set up this logger as the global `log` logger.
    ///
    /// # Panics
    ///
    /// Panic if a global logger has already been set.
    pub fn apply(self) {
        self.try_apply()
            .expect("EventLogger::apply must be called before the global logger initialized");
    }
}

impl log::Log for EventLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        let mut visitor = KeyValueVisitor::default();
        // SAFETY: the visitor never fails
        record.key_values().visit(&mut visitor).unwrap();

        let message = record.args().to_string();
        if let Err(err) = self.emit(record.level().into(), &message, &visitor.extra) {
            self.trap(&err);
        }
    }

    fn flush(&self) {
        if let Err(err) = EventLogger::flush(self) {
            self.trap(&err);
        }
    }
}
