//! Output formatting for query results

use console::style;
use dom_navigator::{CollectionKind, ElementCollection, ElementNode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::error::CliResult;

/// Output format for query results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Serializable view of one element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSummary {
    /// Tag name
    pub tag: String,
    /// Text content with whitespace collapsed
    pub text: String,
    /// Attributes sorted by name
    pub attributes: BTreeMap<String, String>,
}

impl ElementSummary {
    /// Summarise a resolved element
    #[must_use]
    pub fn from_node<N: ElementNode>(node: &N) -> Self {
        Self {
            tag: node.tag_name().to_string(),
            text: node
                .text_content()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" "),
            attributes: node
                .attributes()
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }

    fn render_text(&self) -> String {
        let mut line = format!("<{}", style(&self.tag).cyan().bold());
        for (name, value) in &self.attributes {
            let _ = write!(line, " {}=\"{}\"", style(name).dim(), value);
        }
        line.push('>');
        if !self.text.is_empty() {
            let _ = write!(line, " {}", self.text);
        }
        line
    }
}

/// Serializable view of a classified collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSummary {
    /// Classification
    pub kind: CollectionKind,
    /// Shared `name` of a radio group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Elements in document order
    pub elements: Vec<ElementSummary>,
}

impl CollectionSummary {
    /// Summarise a resolved collection
    #[must_use]
    pub fn from_collection<N: ElementNode>(collection: &ElementCollection<N>) -> Self {
        let name = match collection {
            ElementCollection::RadioGroup { name, .. } => Some(name.clone()),
            ElementCollection::Generic(_) | ElementCollection::OptionList(_) => None,
        };
        Self {
            kind: collection.kind(),
            name,
            elements: collection.iter().map(ElementSummary::from_node).collect(),
        }
    }
}

const fn kind_label(kind: CollectionKind) -> &'static str {
    match kind {
        CollectionKind::Generic => "generic",
        CollectionKind::RadioGroup => "radio group",
        CollectionKind::OptionList => "option list",
    }
}

/// Render the result of `find`
pub fn render_collection(summary: &CollectionSummary, format: OutputFormat) -> CliResult<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(summary)?);
    }
    let count = summary.elements.len();
    let mut out = format!(
        "{} ({} element{})",
        style(kind_label(summary.kind)).green().bold(),
        count,
        if count == 1 { "" } else { "s" }
    );
    if let Some(name) = &summary.name {
        let _ = write!(out, " name=\"{name}\"");
    }
    for (index, element) in summary.elements.iter().enumerate() {
        let marker = style(format!("[{}]", index + 1)).dim();
        let _ = write!(out, "\n  {marker} {}", element.render_text());
    }
    Ok(out)
}

/// Render the result of `find-one`
pub fn render_element(summary: &ElementSummary, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
        OutputFormat::Text => Ok(summary.render_text()),
    }
}

/// Render the result of `has` / `has-one`
pub fn render_bool(value: bool, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(&serde_json::json!({ "result": value }))?),
        OutputFormat::Text => Ok(value.to_string()),
    }
}
