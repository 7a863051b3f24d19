use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::record::Record;
use crate::value::Value;

use super::table_state::DEFAULT_PAGE_SIZE;

pub type ValueTransform = Rc<dyn Fn(&Value, &Record) -> String>;
pub type CellRenderer<A> = Rc<dyn Fn(&Value, &Record) -> A>;
pub type RowActions<A> = Rc<dyn Fn(&Record) -> Option<A>>;

/// Inputs of a data table, all optional.
///
/// `A` is whatever the cell and row-action renderers produce: an element in
/// a gpui view, a list of labels in a test. The table never looks inside it.
///
/// ```
/// use calmtable::{Record, TableProps};
///
/// let props: TableProps<()> = TableProps::new()
///     .title("Users")
///     .fields(["name", "age", "password"])
///     .records([Record::new().set("name", "Ann").set("age", 25)])
///     .label("name", "Full name")
///     .transform("age", |value, _| format!("{value} y"));
/// assert_eq!(props.field_names().len(), 3);
/// ```
pub struct TableProps<A> {
    records: Vec<Record>,
    fields: Vec<String>,
    title: String,
    loading: bool,
    excluded_fields: HashSet<String>,
    value_transforms: HashMap<String, ValueTransform>,
    cell_renderers: HashMap<String, CellRenderer<A>>,
    field_labels: HashMap<String, String>,
    row_actions: Option<RowActions<A>>,
    default_page_size: usize,
}

impl<A> Default for TableProps<A> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            fields: Vec::new(),
            title: String::new(),
            loading: false,
            excluded_fields: HashSet::new(),
            value_transforms: HashMap::new(),
            cell_renderers: HashMap::new(),
            field_labels: HashMap::new(),
            row_actions: None,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl<A> TableProps<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(mut self, record: Record) -> Self {
        self.records.push(record);
        self
    }

    pub fn records(mut self, records: impl IntoIterator<Item = Record>) -> Self {
        self.records.extend(records);
        self
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.title = value.into();
        self
    }

    /// Shows placeholder rows instead of data.
    pub fn loading(mut self, value: bool) -> Self {
        self.loading = value;
        self
    }

    pub fn exclude_field(mut self, field: impl Into<String>) -> Self {
        self.excluded_fields.insert(field.into());
        self
    }

    pub fn excluded_fields(mut self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.excluded_fields
            .extend(fields.into_iter().map(Into::into));
        self
    }

    /// Custom cell text for `field`. Absent values reach the transform as
    /// `Value::Null`.
    pub fn transform(
        mut self,
        field: impl Into<String>,
        transform: impl Fn(&Value, &Record) -> String + 'static,
    ) -> Self {
        self.value_transforms
            .insert(field.into(), Rc::new(transform));
        self
    }

    /// Custom cell content for `field`, such as a styled element. The cell's
    /// text is still computed and used for anything that needs plain text.
    pub fn render_cell(
        mut self,
        field: impl Into<String>,
        render: impl Fn(&Value, &Record) -> A + 'static,
    ) -> Self {
        self.cell_renderers.insert(field.into(), Rc::new(render));
        self
    }

    /// Header text for `field`; defaults to the field name. An empty label
    /// also falls back to the field name.
    pub fn label(mut self, field: impl Into<String>, label: impl Into<String>) -> Self {
        self.field_labels.insert(field.into(), label.into());
        self
    }

    pub fn row_actions(mut self, render: impl Fn(&Record) -> Option<A> + 'static) -> Self {
        self.row_actions = Some(Rc::new(render));
        self
    }

    /// Page size a freshly mounted table starts with.
    pub fn default_page_size(mut self, value: usize) -> Self {
        self.default_page_size = value.max(1);
        self
    }

    pub fn source_records(&self) -> &[Record] {
        &self.records
    }

    pub fn field_names(&self) -> &[String] {
        &self.fields
    }

    pub fn title_text(&self) -> &str {
        &self.title
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn excluded(&self) -> &HashSet<String> {
        &self.excluded_fields
    }

    pub fn initial_page_size(&self) -> usize {
        self.default_page_size
    }

    pub fn header_label<'a>(&'a self, field: &'a str) -> &'a str {
        self.field_labels
            .get(field)
            .map(String::as_str)
            .filter(|label| !label.is_empty())
            .unwrap_or(field)
    }

    /// Display text for one cell: the registered transform, else the value's
    /// own text.
    pub fn cell_text(&self, field: &str, record: &Record) -> String {
        let value = record.value(field);
        match self.value_transforms.get(field) {
            Some(transform) => transform(value, record),
            None => value.display_text(),
        }
    }

    pub fn cell_content(&self, field: &str, record: &Record) -> Option<A> {
        self.cell_renderers
            .get(field)
            .map(|render| render(record.value(field), record))
    }

    pub fn actions_for(&self, record: &Record) -> Option<A> {
        self.row_actions.as_ref().and_then(|render| render(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_and_exclusions_accumulate() {
        let props: TableProps<()> = TableProps::new()
            .field("name")
            .fields(["age", "email"])
            .exclude_field("email")
            .excluded_fields(["age"]);
        assert_eq!(props.field_names(), ["name", "age", "email"]);
        assert!(props.excluded().contains("email"));
        assert!(props.excluded().contains("age"));
    }

    #[test]
    fn empty_label_falls_back_to_field_name() {
        let props: TableProps<()> = TableProps::new().label("name", "").label("age", "Age");
        assert_eq!(props.header_label("name"), "name");
        assert_eq!(props.header_label("age"), "Age");
        assert_eq!(props.header_label("email"), "email");
    }

    #[test]
    fn cell_renderers_only_apply_to_their_field() {
        let props: TableProps<String> = TableProps::new()
            .render_cell("age", |value, record| format!("<b>{value}</b> {}", record.value("name")));
        let record = Record::new().set("name", "Ann").set("age", 25);
        assert_eq!(props.cell_content("age", &record), Some("<b>25</b> Ann".to_string()));
        assert_eq!(props.cell_content("name", &record), None);
        assert_eq!(props.cell_text("age", &record), "25");
    }

    #[test]
    fn page_size_floors_at_one() {
        let props: TableProps<()> = TableProps::new().default_page_size(0);
        assert_eq!(props.initial_page_size(), 1);
    }
}
