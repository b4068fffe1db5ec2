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

use std::fmt;

use crate::Error;

/// The template used when none is given, or when the given one is unusable.
pub const DEFAULT_TEMPLATE: &str = "{timestamp} - {levelName} - {message}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed line template.
///
/// `{name}` is replaced by the value of `name`; `{{` and `}}` stand for literal braces.
/// Placeholder names are taken verbatim: there are no format specs or conversions.
///
/// # Examples
///
/// ```
/// use eventforth::Template;
///
/// let template = Template::parse("{{{levelName}}} {message}").unwrap();
/// let text = template
///     .render(|key| match key {
///         "levelName" => Some("INFO"),
///         "message" => Some("ready"),
///         _ => None,
///     })
///     .unwrap();
/// assert_eq!(text, "{INFO} ready");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Default for Template {
    fn default() -> Self {
        // SAFETY: the default template is well-formed
        Template::parse(DEFAULT_TEMPLATE).unwrap()
    }
}

impl Template {
    /// Parse a template.
    ///
    /// # Errors
    ///
    /// Return [`Error::MalformedTemplate`] on an unclosed `{`, a lone `}`, or an empty `{}`.
    pub fn parse(source: &str) -> Result<Template, Error> {
        let mut segments = vec![];
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((pos, c)) = chars.next() {
            match c {
                '{' if chars.next_if(|&(_, c)| c == '{').is_some() => literal.push('{'),
                '}' if chars.next_if(|&(_, c)| c == '}').is_some() => literal.push('}'),
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((_, '{')) | None => {
                                return Err(Error::MalformedTemplate {
                                    position: pos,
                                    reason: "unmatched '{' in template",
                                });
                            }
                            Some((_, c)) => name.push(c),
                        }
                    }
                    if name.is_empty() {
                        return Err(Error::MalformedTemplate {
                            position: pos,
                            reason: "empty placeholder in template",
                        });
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(name));
                }
                '}' => {
                    return Err(Error::MalformedTemplate {
                        position: pos,
                        reason: "single '}' encountered in template",
                    });
                }
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Template {
            source: source.to_string(),
            segments,
        })
    }

    /// The text this template was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The placeholder names, in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Render the template, resolving each placeholder with `lookup`.
    ///
    /// # Errors
    ///
    /// Return [`Error::UnresolvedPlaceholder`] for the first placeholder `lookup` has no
    /// value for.
    pub fn render<'a, F>(&self, lookup: F) -> Result<String, Error>
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let mut text = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => text.push_str(literal),
                Segment::Placeholder(name) => match lookup(name) {
                    Some(value) => text.push_str(value),
                    None => return Err(Error::UnresolvedPlaceholder(name.clone())),
                },
            }
        }
        Ok(text)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(source: &str) -> Result<String, Error> {
        Template::parse(source)?.render(|key| match key {
            "a" => Some("1"),
            "b" => Some("2"),
            _ => None,
        })
    }

    #[test]
    fn test_render_placeholders_and_literals() {
        assert_eq!(render("{a}").unwrap(), "1");
        assert_eq!(render("x {a} y {b} z").unwrap(), "x 1 y 2 z");
        assert_eq!(render("{a}{a}{b}").unwrap(), "112");
        assert_eq!(render("no placeholders").unwrap(), "no placeholders");
        assert_eq!(render("").unwrap(), "");
    }

    #[test]
    fn test_escaped_braces() {
        assert_eq!(render("{{a}}").unwrap(), "{a}");
        assert_eq!(render("{{{a}}}").unwrap(), "{1}");
        assert_eq!(render("}}{{").unwrap(), "}{");
    }

    #[test]
    fn test_unresolved_placeholder() {
        let err = render("{a} {nonexistent}").unwrap_err();
        assert!(matches!(err, Error::UnresolvedPlaceholder(name) if name == "nonexistent"));
    }

    #[test]
    fn test_malformed_templates() {
        for (source, position) in [("{a", 0), ("x }", 2), ("{}", 0), ("ab{a{b}}", 2)] {
            match Template::parse(source) {
                Err(Error::MalformedTemplate { position: p, .. }) => {
                    assert_eq!(p, position, "{source}")
                }
                other => panic!("{source}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_placeholders_in_order() {
        let template = Template::default();
        let names = template.placeholders().collect::<Vec<_>>();
        assert_eq!(names, ["timestamp", "levelName", "message"]);
        assert_eq!(template.source(), DEFAULT_TEMPLATE);
        assert_eq!(template.to_string(), DEFAULT_TEMPLATE);
    }

    #[test]
    fn test_values_are_not_reinterpreted() {
        let template = Template::parse("{message}").unwrap();
        let text = template.render(|_| Some("{a} }} {")).unwrap();
        assert_eq!(text, "{a} }} {");
    }
}
