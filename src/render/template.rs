//! Placeholder templates.
//!
//! Templates use a single placeholder form, `{{ .name }}`, which is replaced
//! with the value bound to `name`. Whitespace inside the braces is optional,
//! so `{{.name}}` is equivalent.
//!
//! Rendering happens in two passes: [`Template::parse`] splits the input into
//! literal and placeholder segments, and [`Template::render`] substitutes
//! values. A name with no binding renders as the empty string.
//!
//! # Example
//!
//! ```
//! use plate::render::{ParameterSet, Template};
//!
//! let template = Template::parse("Hello {{ .name }}!").unwrap();
//! let mut params = ParameterSet::new();
//! params.insert("name", "World");
//! assert_eq!(template.render(&params), "Hello World!");
//! ```

use std::io::{self, Write};

use thiserror::Error;

use super::params::ParameterSet;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Malformed placeholder syntax.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// `{{` with no matching `}}`.
    #[error("unclosed placeholder starting at byte {offset}")]
    Unclosed { offset: usize },

    /// Braces contain something other than `.name`.
    #[error("invalid placeholder '{{{{{action}}}}}' at byte {offset}, expected '{{{{ .name }}}}'")]
    InvalidAction { offset: usize, action: String },
}

/// A segment of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text
    Literal(String),
    /// Placeholder reference: {{ .name }}
    Placeholder(String),
}

/// A parsed template, ready to render against any parameter set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template text into segments.
    ///
    /// # Errors
    ///
    /// Returns a [`SyntaxError`] for an unclosed `{{` or a placeholder whose
    /// body is not a dot followed by a name.
    pub fn parse(input: &str) -> Result<Self, SyntaxError> {
        let mut segments = Vec::new();
        let mut rest = input;
        let mut offset = 0;

        while let Some(start) = rest.find(OPEN) {
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_string()));
            }

            let body_start = start + OPEN.len();
            let Some(len) = rest[body_start..].find(CLOSE) else {
                return Err(SyntaxError::Unclosed {
                    offset: offset + start,
                });
            };

            let action = &rest[body_start..body_start + len];
            let name = parse_action(action).ok_or_else(|| SyntaxError::InvalidAction {
                offset: offset + start,
                action: action.to_string(),
            })?;
            segments.push(Segment::Placeholder(name.to_string()));

            let consumed = body_start + len + CLOSE.len();
            offset += consumed;
            rest = &rest[consumed..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self { segments })
    }

    /// Parsed segments in source order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names referenced by placeholders, in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|seg| match seg {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Render into a string.
    pub fn render(&self, params: &ParameterSet) -> String {
        let mut result = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => result.push_str(text),
                Segment::Placeholder(name) => result.push_str(params.get(name).unwrap_or("")),
            }
        }
        result
    }

    /// Render directly into a writer, segment by segment.
    pub fn render_to<W: Write + ?Sized>(
        &self,
        params: &ParameterSet,
        out: &mut W,
    ) -> io::Result<()> {
        for segment in &self.segments {
            let text = match segment {
                Segment::Literal(text) => text.as_str(),
                Segment::Placeholder(name) => params.get(name).unwrap_or(""),
            };
            out.write_all(text.as_bytes())?;
        }
        out.flush()
    }
}

/// Extract `name` from ` .name `, or `None` if the body is anything else.
fn parse_action(action: &str) -> Option<&str> {
    let name = action.trim().strip_prefix('.')?;
    let valid = !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_');
    valid.then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> ParameterSet {
        let mut set = ParameterSet::new();
        for (k, v) in pairs {
            set.insert(*k, *v);
        }
        set
    }

    #[test]
    fn parse_literal_only() {
        let template = Template::parse("just text").unwrap();
        assert_eq!(template.segments(), &[Segment::Literal("just text".into())]);
    }

    #[test]
    fn parse_mixed_segments() {
        let template = Template::parse("Hi {{ .who }}, bye").unwrap();
        assert_eq!(
            template.segments(),
            &[
                Segment::Literal("Hi ".into()),
                Segment::Placeholder("who".into()),
                Segment::Literal(", bye".into()),
            ]
        );
    }

    #[test]
    fn parse_accepts_compact_form() {
        let template = Template::parse("{{.a}}{{ .b}}{{.c }}").unwrap();
        let names: Vec<_> = template.placeholders().collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn parse_empty_input() {
        let template = Template::parse("").unwrap();
        assert!(template.segments().is_empty());
        assert_eq!(template.render(&ParameterSet::new()), "");
    }

    #[test]
    fn unclosed_placeholder_is_error() {
        let err = Template::parse("abc {{ .name").unwrap_err();
        assert_eq!(err, SyntaxError::Unclosed { offset: 4 });
    }

    #[test]
    fn missing_dot_is_error() {
        let err = Template::parse("{{ name }}").unwrap_err();
        assert!(matches!(err, SyntaxError::InvalidAction { offset: 0, .. }));
    }

    #[test]
    fn bare_dot_is_error() {
        assert!(Template::parse("{{ . }}").is_err());
    }

    #[test]
    fn name_with_spaces_is_error() {
        assert!(Template::parse("{{ .first name }}").is_err());
    }

    #[test]
    fn offset_points_at_second_placeholder() {
        let err = Template::parse("{{ .ok }} and {{ bad }}").unwrap_err();
        assert!(matches!(err, SyntaxError::InvalidAction { offset: 14, .. }));
    }

    #[test]
    fn stray_closing_braces_are_literal() {
        let template = Template::parse("a }} b").unwrap();
        assert_eq!(template.render(&ParameterSet::new()), "a }} b");
    }

    #[test]
    fn render_substitutes_bound_value() {
        let template = Template::parse("Hello {{ .name }}!").unwrap();
        assert_eq!(template.render(&params(&[("name", "World")])), "Hello World!");
    }

    #[test]
    fn render_unbound_is_empty() {
        let template = Template::parse("[{{ .missing }}]").unwrap();
        assert_eq!(template.render(&ParameterSet::new()), "[]");
    }

    #[test]
    fn render_value_is_verbatim() {
        let template = Template::parse("{{ .v }}").unwrap();
        let value = "  {{ .v }} spaced\t";
        assert_eq!(template.render(&params(&[("v", value)])), value);
    }

    #[test]
    fn render_repeated_placeholder() {
        let template = Template::parse("{{ .x }}-{{ .x }}").unwrap();
        assert_eq!(template.render(&params(&[("x", "1")])), "1-1");
    }

    #[test]
    fn render_to_matches_render() {
        let template = Template::parse("a{{ .b }}c").unwrap();
        let set = params(&[("b", "B")]);
        let mut buf = Vec::new();
        template.render_to(&set, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), template.render(&set));
    }

    #[test]
    fn multibyte_literals_survive() {
        let template = Template::parse("héllo {{ .n }} ✓").unwrap();
        assert_eq!(template.render(&params(&[("n", "wörld")])), "héllo wörld ✓");
    }
}
