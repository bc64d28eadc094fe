//! Record screen construction
//!
//! Turns normalized registry records into scene nodes: one panel per record
//! with one text line per rendered field, plus per-record groups of nested
//! sub-screens for the drill-down lists.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::traits::SceneSurface;
use crate::types::{NodeId, NodeSpec, Offset, Record, RecordValue};

/// Nested list kinds a record can be drilled into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubListKind {
    Procedures,
    ProductsAndServices,
}

impl SubListKind {
    pub const ALL: [Self; 2] = [Self::Procedures, Self::ProductsAndServices];

    /// Record fields that hold this list, in lookup order.
    pub fn field_keys(self) -> &'static [&'static str] {
        match self {
            Self::Procedures => &["procedures", "procedimientos"],
            Self::ProductsAndServices => &[
                "products_and_services",
                "productsAndServices",
                "productos_servicios",
            ],
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Procedures => "procedures",
            Self::ProductsAndServices => "products_and_services",
        }
    }

    fn is_sub_list_key(key: &str) -> bool {
        Self::ALL.iter().any(|kind| kind.field_keys().contains(&key))
    }
}

/// A single rendered record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordScreen {
    pub node: NodeId,
    /// Position in the list this screen belongs to
    pub index: usize,
    pub groups: Vec<SubScreenGroup>,
}

impl RecordScreen {
    /// Sub-screens of `kind`; empty when the record has no such list.
    pub fn group(&self, kind: SubListKind) -> &[RecordScreen] {
        self.groups
            .iter()
            .find(|g| g.kind == kind)
            .map(|g| g.screens.as_slice())
            .unwrap_or_default()
    }
}

/// Screens built from one nested list of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubScreenGroup {
    pub kind: SubListKind,
    pub screens: Vec<RecordScreen>,
}

/// Builds hidden record screens under a container node.
///
/// Every node is created hidden; the navigator decides what is shown.
pub struct ScreenBuilder<'a> {
    record_title: &'a str,
    sub_titles: Option<[&'a str; 2]>,
}

impl<'a> ScreenBuilder<'a> {
    /// Builder for plain records (no drill-down groups).
    pub fn new(record_title: &'a str) -> Self {
        Self {
            record_title,
            sub_titles: None,
        }
    }

    /// Also build procedures / products-and-services groups.
    #[must_use]
    pub fn with_sub_lists(mut self, procedures_title: &'a str, products_title: &'a str) -> Self {
        self.sub_titles = Some([procedures_title, products_title]);
        self
    }

    pub fn build(
        &self,
        surface: &mut dyn SceneSurface,
        container: NodeId,
        records: &[Record],
    ) -> CoreResult<Vec<RecordScreen>> {
        let total = records.len();
        let mut screens = Vec::with_capacity(total);

        for (index, record) in records.iter().enumerate() {
            let skip_sub_lists = self.sub_titles.is_some();
            let lines = render_record(record, skip_sub_lists);
            let title = format!("{} {}/{}", self.record_title, index + 1, total);
            let node = create_screen(surface, container, &title, &lines)?;

            let groups = match self.sub_titles {
                Some(titles) => SubListKind::ALL
                    .iter()
                    .zip(titles)
                    .map(|(&kind, title)| {
                        build_group(surface, container, kind, title, record, index)
                    })
                    .collect::<CoreResult<Vec<_>>>()?,
                None => Vec::new(),
            };

            screens.push(RecordScreen {
                node,
                index,
                groups,
            });
        }

        log::debug!("Built {} record screen(s)", screens.len());
        Ok(screens)
    }
}

fn build_group(
    surface: &mut dyn SceneSurface,
    container: NodeId,
    kind: SubListKind,
    title: &str,
    record: &Record,
    parent_index: usize,
) -> CoreResult<SubScreenGroup> {
    let items = record.list_any(kind.field_keys()).unwrap_or_default();
    let mut screens = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let lines = render_item(item);
        let label = format!("{title} {}/{} (#{})", index + 1, items.len(), parent_index + 1);
        let node = create_screen(surface, container, &label, &lines)?;
        screens.push(RecordScreen {
            node,
            index,
            groups: Vec::new(),
        });
    }

    Ok(SubScreenGroup { kind, screens })
}

fn create_screen(
    surface: &mut dyn SceneSurface,
    container: NodeId,
    title: &str,
    lines: &[String],
) -> CoreResult<NodeId> {
    let node = surface.create_node(Some(container), NodeSpec::panel("record", title).hidden())?;
    for (row, line) in lines.iter().enumerate() {
        let y = i32::try_from(row).unwrap_or(i32::MAX);
        surface.create_node(
            Some(node),
            NodeSpec::text("line", line.as_str()).at(Offset::row(y)),
        )?;
    }
    Ok(node)
}

/// Text lines of a record, one per scalar, nested values indented.
///
/// With `skip_sub_lists` the drill-down list fields are left out; they are
/// reachable through their own screens.
pub fn render_record(record: &Record, skip_sub_lists: bool) -> Vec<String> {
    let mut lines = Vec::new();
    for (key, value) in record.fields() {
        if skip_sub_lists && SubListKind::is_sub_list_key(key) {
            continue;
        }
        render_field(key, value, 0, &mut lines);
    }
    lines
}

fn render_item(item: &RecordValue) -> Vec<String> {
    match item {
        RecordValue::Object(record) => render_record(record, false),
        other => {
            let mut lines = Vec::new();
            render_list_item(other, 0, 0, &mut lines);
            lines
        }
    }
}

fn render_field(key: &str, value: &RecordValue, depth: usize, out: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    match value {
        RecordValue::Scalar(text) => out.push(format!("{indent}{key}: {text}")),
        RecordValue::Object(record) => {
            out.push(format!("{indent}{key}:"));
            for (k, v) in record.fields() {
                render_field(k, v, depth + 1, out);
            }
        }
        RecordValue::List(items) => {
            out.push(format!("{indent}{key}:"));
            for (position, item) in items.iter().enumerate() {
                render_list_item(item, position, depth + 1, out);
            }
        }
    }
}

fn render_list_item(item: &RecordValue, position: usize, depth: usize, out: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    match item {
        RecordValue::Scalar(text) => out.push(format!("{indent}- {text}")),
        RecordValue::Object(record) => {
            out.push(format!("{indent}- [{}]", position + 1));
            for (k, v) in record.fields() {
                render_field(k, v, depth + 1, out);
            }
        }
        RecordValue::List(items) => {
            out.push(format!("{indent}- [{}]", position + 1));
            for (p, nested) in items.iter().enumerate() {
                render_list_item(nested, p, depth + 1, out);
            }
        }
    }
}
