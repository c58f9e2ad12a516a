//! Failure message construction.
//!
//! Messages start with a single sentence, followed by `name: value` context
//! lines whose colons are aligned, and optionally a character diff with a
//! legend:
//!
//! ```text
//! "actual" had an unexpected value.
//!
//! actual  : Hello, World
//! diff    :        -   +
//! expected: Hello,  Worl d
//! ```
use crate::types::{ContextMap, ContextValue};
use similar::{ChangeTag, TextDiff};

/// Values whose rendering is shorter than this are listed side by side instead of diffed.
pub const MINIMUM_LENGTH_FOR_DIFF: usize = 10;

/// Explains the markers of a diff.
pub const DIFF_LEGEND: &str = "\nLegend\n------\n\
+           : Add this character to the value\n\
-           : Remove this character from the value";

/// Quotes the name of a parameter, unless it references a method call.
///
/// # Examples
///
/// ```
/// use requirements_rail::message::quote_name;
///
/// assert_eq!(quote_name("actual"), "\"actual\"");
/// assert_eq!(quote_name("list.size()"), "list.size()");
/// ```
pub fn quote_name(name: &str) -> String {
    if name.contains('.') {
        name.to_string()
    } else {
        format!("\"{name}\"")
    }
}

/// Returns `true` if a value is short and simple enough that a diff adds nothing.
#[inline]
pub fn unnecessary_diff(rendered: &str) -> bool {
    rendered.chars().count() < MINIMUM_LENGTH_FOR_DIFF && !rendered.contains('\n')
}

enum Section {
    Context(ContextMap),
    Text(String),
}

/// Builds the message of a single failure.
#[must_use]
#[derive(Default)]
pub struct MessageBuilder {
    message: String,
    failure_context: ContextMap,
    diff: Vec<Section>,
}

impl MessageBuilder {
    /// Starts a message with its leading sentence, which ends with a period.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        debug_assert!(
            message.is_empty() || message.ends_with('.'),
            "message must end with a dot: {message}"
        );
        Self { message, ..Self::default() }
    }

    /// Adds or replaces a context entry specific to this failure.
    pub fn with_context(mut self, value: ContextValue, name: impl Into<String>) -> Self {
        self.failure_context.insert(name, value);
        self
    }

    /// Adds a context entry when one is available.
    pub fn with_optional_context(
        self,
        value: Option<ContextValue>,
        name: impl Into<String>,
    ) -> Self {
        match value {
            Some(value) => self.with_context(value, name),
            None => self,
        }
    }

    /// Adds a character diff from `actual` to `expected` followed by [`DIFF_LEGEND`].
    pub fn add_diff(
        mut self,
        actual_name: &str,
        actual: &str,
        expected_name: &str,
        expected: &str,
    ) -> Self {
        let (actual_line, diff_line, expected_line) = char_diff(actual, expected);
        let mut lines = ContextMap::new();
        lines.insert(actual_name, ContextValue::Scalar(actual_line));
        lines.insert("diff", ContextValue::Scalar(diff_line));
        lines.insert(expected_name, ContextValue::Scalar(expected_line));
        self.diff.push(Section::Context(lines));
        self.diff.push(Section::Text(DIFF_LEGEND.to_string()));
        self
    }

    /// Renders the message. Validator context entries follow the failure's own,
    /// skipping names the failure already defines.
    pub fn build(self, validator_context: &ContextMap) -> String {
        let mut merged = self.failure_context;
        for (name, value) in validator_context.iter() {
            merged.insert_if_absent(name, value);
        }

        let mut sections = Vec::new();
        if !merged.is_empty() {
            sections.push(Section::Context(merged));
        }
        if !self.diff.is_empty() {
            if !sections.is_empty() || !self.message.is_empty() {
                sections.push(Section::Text(String::new()));
            }
            sections.extend(self.diff);
        }

        // Single-line messages without context lose their trailing period unless they have a comma.
        let single_line = !self.message.contains('\n') && !self.message.contains(',');
        let message = if sections.is_empty() && single_line {
            self.message.strip_suffix('.').unwrap_or(&self.message).to_string()
        } else {
            self.message
        };
        if !message.is_empty() {
            sections.insert(0, Section::Text(message));
        }
        render(&sections)
    }
}

fn render(sections: &[Section]) -> String {
    let key_width = sections
        .iter()
        .filter_map(|section| match section {
            Section::Context(map) => map.iter().map(|(name, _)| name.chars().count()).max(),
            Section::Text(_) => None,
        })
        .max()
        .unwrap_or(0);

    let mut lines = Vec::new();
    for section in sections {
        match section {
            Section::Context(map) => {
                for (name, value) in map.iter() {
                    lines.push(format!("{name:<key_width$}: {value}"));
                }
            },
            Section::Text(text) => lines.push(text.clone()),
        }
    }
    lines.join("\n")
}

/// Aligns `actual` over `expected`, marking removed characters with `-` and added ones with `+`.
fn char_diff(actual: &str, expected: &str) -> (String, String, String) {
    let mut actual_line = String::new();
    let mut diff_line = String::new();
    let mut expected_line = String::new();
    for change in TextDiff::from_chars(actual, expected).iter_all_changes() {
        let value = change.value();
        let padding = " ".repeat(value.chars().count());
        match change.tag() {
            ChangeTag::Equal => {
                actual_line.push_str(value);
                diff_line.push_str(&padding);
                expected_line.push_str(value);
            },
            ChangeTag::Delete => {
                actual_line.push_str(value);
                diff_line.push_str(&"-".repeat(value.chars().count()));
                expected_line.push_str(&padding);
            },
            ChangeTag::Insert => {
                actual_line.push_str(&padding);
                diff_line.push_str(&"+".repeat(value.chars().count()));
                expected_line.push_str(value);
            },
        }
    }
    (actual_line, diff_line.trim_end().to_string(), expected_line)
}
