//! Per-entry reports

use anyhow::{Context, Result};
use feed_engine_traits::{Namespaces, XPathEngine, XPathValue};
use feed_entry::{feed, EntryData, FeedType, StandardEntry};
use serde::Serialize;

/// Everything printed for one entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryReport {
    pub index: usize,
    pub prefix: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(flatten)]
    pub data: EntryData,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub queries: Vec<QueryReport>,
}

/// Result of one `--query` expression
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryReport {
    pub expression: String,
    #[serde(flatten)]
    pub value: QueryValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum QueryValue {
    /// Node selection: count and string value of the first node
    Nodes { count: usize, first: String },
    String { value: String },
    Number { value: f64 },
    Boolean { value: bool },
}

/// Build one report per entry of `document`
pub fn build<T: XPathEngine>(
    engine: &T,
    document: T::Node,
    feed_type: Option<FeedType>,
    queries: &[String],
    namespaces: &Namespaces,
) -> Result<Vec<EntryReport>> {
    let contexts =
        feed::entries(engine, document, feed_type).context("failed to enumerate entries")?;

    contexts
        .into_iter()
        .map(|ctx| {
            let index = ctx.entry_key();
            let prefix = ctx.xpath_prefix().to_string();
            let encoding = ctx.encoding();

            let mut entry = StandardEntry::with_extra(ctx, namespaces.clone());
            let data = entry
                .to_data()
                .with_context(|| format!("failed to read fields of entry {}", index))?;

            let queries = queries
                .iter()
                .map(|expression| run_query(&mut entry, expression))
                .collect::<Result<Vec<_>>>()
                .with_context(|| format!("query failed on entry {}", index))?;

            Ok(EntryReport {
                index,
                prefix,
                encoding,
                data,
                queries,
            })
        })
        .collect()
}

fn run_query<T: XPathEngine>(
    entry: &mut StandardEntry<'_, T>,
    expression: &str,
) -> Result<QueryReport> {
    let ctx = entry.context_mut();
    let value = match ctx.query(expression)? {
        XPathValue::Nodes(nodes) => QueryValue::Nodes {
            count: nodes.len(),
            first: ctx.query_string(expression)?,
        },
        XPathValue::String(value) => QueryValue::String { value },
        XPathValue::Number(value) => QueryValue::Number { value },
        XPathValue::Boolean(value) => QueryValue::Boolean { value },
    };
    Ok(QueryReport {
        expression: expression.to_string(),
        value,
    })
}

/// Plain text rendering, one block per entry
pub fn render_text(reports: &[EntryReport]) -> String {
    let mut out = String::new();
    for report in reports {
        out.push_str(&format!(
            "[{}] {} ({})\n",
            report.index, report.prefix, report.data.feed_type
        ));
        if let Some(encoding) = &report.encoding {
            out.push_str(&format!("  encoding: {}\n", encoding));
        }

        let fields = [
            ("id", &report.data.id),
            ("title", &report.data.title),
            ("description", &report.data.description),
            ("content", &report.data.content),
            ("link", &report.data.link),
            ("author", &report.data.author),
        ];
        for (name, value) in fields {
            if let Some(value) = value {
                out.push_str(&format!("  {}: {}\n", name, value.trim()));
            }
        }

        for query in &report.queries {
            let rendered = match &query.value {
                QueryValue::Nodes { count, first } => format!("{} node(s), first: {}", count, first),
                QueryValue::String { value } => format!("{:?}", value),
                QueryValue::Number { value } => value.to_string(),
                QueryValue::Boolean { value } => value.to_string(),
            };
            out.push_str(&format!("  {} => {}\n", query.expression, rendered));
        }
    }
    out
}
