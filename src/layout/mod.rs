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

//! Layouts for rendering events into text.

use crate::Error;
use crate::StaticContext;
use crate::record::Record;

mod template;

pub use self::template::DEFAULT_TEMPLATE;
pub use self::template::Template;

/// Keys filled in for every event. They take precedence over static context entries.
pub const DYNAMIC_KEYS: [&str; 3] = ["timestamp", "levelName", "message"];

/// A layout that renders an event through a [`Template`].
///
/// Output format, with the default template and extra context:
///
/// ```text
/// 2024-08-11T22:44:57.172+08:00 - WARNING - disk almost full
/// Context args: ["/var",0.93]
/// Context kwargs: {"host":"db-1"}
/// ```
///
/// The template is checked once, when the layout is created, by rendering it with an empty
/// value for every dynamic key plus the static context. A template that references an
/// unknown placeholder is replaced by [`DEFAULT_TEMPLATE`].
#[derive(Debug, Clone)]
pub struct TemplateLayout {
    template: Template,
    context: StaticContext,
}

impl Default for TemplateLayout {
    fn default() -> Self {
        Self {
            template: Template::default(),
            context: StaticContext::default(),
        }
    }
}

impl TemplateLayout {
    /// Create a layout, falling back to the default template if `template` has a placeholder
    /// that neither the dynamic keys nor `context` can resolve.
    pub fn new(template: Template, context: StaticContext) -> Self {
        let template = match validate(&template, &context) {
            Ok(()) => template,
            Err(Error::UnresolvedPlaceholder(_)) => Template::default(),
            Err(err) => unreachable!("rendering can only fail on placeholders: {err}"),
        };
        Self { template, context }
    }

    /// Parse `source` and create a layout from it.
    ///
    /// A template that cannot be parsed is replaced by [`DEFAULT_TEMPLATE`]; the parse error is
    /// returned alongside so the caller can report it.
    pub fn parse(source: &str, context: StaticContext) -> (Self, Option<Error>) {
        match Template::parse(source) {
            Ok(template) => (Self::new(template, context), None),
            Err(err) => (Self::new(Template::default(), context), Some(err)),
        }
    }

    /// The template in use.
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// The static context merged into every line.
    pub fn context(&self) -> &StaticContext {
        &self.context
    }

    /// Render a record into its full text, including the trailing newline and any extra
    /// context lines.
    pub fn format(&self, record: &Record) -> Result<String, Error> {
        let level = record.level().name();
        let mut text = self.template.render(|key| match key {
            "timestamp" => Some(record.timestamp()),
            "levelName" => Some(level),
            "message" => Some(record.message()),
            key => self.context.get(key),
        })?;
        text.push('\n');
        record.extra().write_lines(&mut text);
        Ok(text)
    }
}

fn validate(template: &Template, context: &StaticContext) -> Result<(), Error> {
    template
        .render(|key| {
            if DYNAMIC_KEYS.contains(&key) {
                Some("")
            } else {
                context.get(key)
            }
        })
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExtraContext;
    use crate::Level;

    fn record<'a>(message: &'a str, extra: &'a ExtraContext) -> Record<'a> {
        Record::builder()
            .level(Level::Info)
            .timestamp("2024-08-11T22:44:57.172+08:00")
            .message(message)
            .extra(extra)
            .build()
    }

    #[test]
    fn test_default_layout() {
        let layout = TemplateLayout::default();
        let text = layout.format(&record("hello", ExtraContext::none())).unwrap();
        assert_eq!(text, "2024-08-11T22:44:57.172+08:00 - INFO - hello\n");
    }

    #[test]
    fn test_static_context_in_template() {
        let template = Template::parse("{timestamp} - {name} - {levelName} - {message}").unwrap();
        let layout = TemplateLayout::new(template, StaticContext::from_iter([("name", "X")]));
        let text = layout.format(&record("hello", ExtraContext::none())).unwrap();
        assert_eq!(text, "2024-08-11T22:44:57.172+08:00 - X - INFO - hello\n");
    }

    #[test]
    fn test_dynamic_keys_override_static_context() {
        let template = Template::parse("{levelName}|{message}|{host}").unwrap();
        let context = StaticContext::from_iter([
            ("levelName", "static"),
            ("message", "static"),
            ("host", "db-1"),
        ]);
        let layout = TemplateLayout::new(template, context);
        let text = layout.format(&record("dynamic", ExtraContext::none())).unwrap();
        assert_eq!(text, "INFO|dynamic|db-1\n");
    }

    #[test]
    fn test_unknown_placeholder_falls_back() {
        let template = Template::parse("{nonexistent}").unwrap();
        let layout = TemplateLayout::new(template, StaticContext::default());
        assert_eq!(layout.template().source(), DEFAULT_TEMPLATE);

        let text = layout.format(&record("hello", ExtraContext::none())).unwrap();
        assert_eq!(text, "2024-08-11T22:44:57.172+08:00 - INFO - hello\n");
    }

    #[test]
    fn test_malformed_template_falls_back() {
        let (layout, err) = TemplateLayout::parse("{message", StaticContext::default());
        assert_eq!(layout.template().source(), DEFAULT_TEMPLATE);
        assert!(matches!(err, Some(Error::MalformedTemplate { .. })));

        let (layout, err) = TemplateLayout::parse("{message}!", StaticContext::default());
        assert_eq!(layout.template().source(), "{message}!");
        assert!(err.is_none());
    }

    #[test]
    fn test_extra_context_lines() {
        let extra = ExtraContext::new().arg(1).arg(2).kwarg("key", "v");
        let text = TemplateLayout::default()
            .format(&record("x", &extra))
            .unwrap();
        assert_eq!(
            text,
            "2024-08-11T22:44:57.172+08:00 - INFO - x\n\
             Context args: [1,2]\n\
             Context kwargs: {\"key\":\"v\"}\n"
        );
    }

    #[test]
    fn test_empty_message() {
        let text = TemplateLayout::default()
            .format(&record("", ExtraContext::none()))
            .unwrap();
        assert_eq!(text, "2024-08-11T22:44:57.172+08:00 - INFO - \n");
    }
}
