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

use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::LazyLock;

use serde_json::Map;
use serde_json::Value;

/// Key-value pairs fixed at construction time and merged into every rendered line.
///
/// Typical entries identify the process, such as a PID or a service name. Per-event keys
/// (`timestamp`, `levelName` and `message`) take precedence over entries with the same name.
///
/// ## Example
///
/// ```
/// use eventforth::StaticContext;
///
/// let mut context = StaticContext::default();
/// context.insert("service", "billing");
/// assert_eq!(context.get("service"), Some("billing"));
/// ```
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct StaticContext {
    kvs: BTreeMap<String, String>,
}

impl StaticContext {
    /// Create a new [`StaticContext`] instance with a prebuilt key-value store.
    pub fn new(kvs: BTreeMap<String, String>) -> Self {
        Self { kvs }
    }

    /// Insert a key-value pair into the static context.
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.kvs.insert(key.into(), value.into());
    }

    /// Remove a key-value pair from the static context.
    pub fn remove(&mut self, key: &str) {
        self.kvs.remove(key);
    }

    /// Get the value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.kvs.get(key).map(String::as_str)
    }

    /// Iterate over the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.kvs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whether the context has no entries.
    pub fn is_empty(&self) -> bool {
        self.kvs.is_empty()
    }
}

impl From<BTreeMap<String, String>> for StaticContext {
    fn from(kvs: BTreeMap<String, String>) -> Self {
        Self::new(kvs)
    }
}

impl<K, V> FromIterator<(K, V)> for StaticContext
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let kvs = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { kvs }
    }
}

/// Extra data attached to a single event.
///
/// Positional values and named values are rendered after the templated line, each on its
/// own line, as compact JSON:
///
/// ```text
/// Context args: [1,2]
/// Context kwargs: {"key":"v"}
/// ```
///
/// Named values are rendered in key order.
///
/// # Examples
///
/// ```
/// use eventforth::ExtraContext;
///
/// let extra = ExtraContext::new().arg(1).arg(2).kwarg("key", "v");
/// assert_eq!(extra.args().len(), 2);
/// assert_eq!(extra.kwargs()["key"], "v");
/// ```
#[derive(Default, Debug, Clone, PartialEq)]
pub struct ExtraContext {
    args: Vec<Value>,
    kwargs: Map<String, Value>,
}

impl ExtraContext {
    /// Create an empty [`ExtraContext`].
    pub fn new() -> Self {
        Self::default()
    }

    /// A shared empty context, for events that carry no extra data.
    pub fn none() -> &'static ExtraContext {
        static NONE: LazyLock<ExtraContext> = LazyLock::new(ExtraContext::default);
        &NONE
    }

    /// Append a positional value.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Set a named value, replacing any previous value for `key`.
    pub fn kwarg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.kwargs.insert(key.into(), value.into());
        self
    }

    /// Append several positional values.
    pub fn args_from<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.args.extend(values.into_iter().map(Into::into));
        self
    }

    /// The positional values.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// The named values.
    pub fn kwargs(&self) -> &Map<String, Value> {
        &self.kwargs
    }

    /// Whether there are neither positional nor named values.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty() && self.kwargs.is_empty()
    }

    pub(crate) fn write_lines(&self, text: &mut String) {
        // SAFETY: write to a string always succeeds; JSON values always serialize
        if !self.args.is_empty() {
            let args = serde_json::to_string(&self.args).unwrap();
            writeln!(text, "Context args: {args}").unwrap();
        }
        if !self.kwargs.is_empty() {
            let kwargs = serde_json::to_string(&self.kwargs).unwrap();
            writeln!(text, "Context kwargs: {kwargs}").unwrap();
        }
    }
}
