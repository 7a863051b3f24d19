use std::rc::Rc;

use gpui::{
    AnyElement, ClickEvent, ElementId, FocusHandle, Hsla, InteractiveElement, IntoElement,
    KeyDownEvent, ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled,
    Window, div, hsla, px,
};

use crate::id::ComponentId;
use crate::record::Record;
use crate::value::Value;

use super::control;
use super::table_props::TableProps;
use super::table_state::TableViewState;
use super::table_view::{TableBody, TableProjection};
use super::text_edit::{self, KeyModifiers};

type StateUpdate = Rc<dyn Fn(&mut TableViewState, &str)>;

fn element_id(value: String) -> ElementId {
    ElementId::Name(SharedString::from(value))
}

fn border_color() -> Hsla {
    hsla(0.0, 0.0, 0.86, 1.0)
}

fn header_bg() -> Hsla {
    hsla(0.0, 0.0, 0.96, 1.0)
}

fn muted_fg() -> Hsla {
    hsla(0.0, 0.0, 0.45, 1.0)
}

fn skeleton_bg() -> Hsla {
    hsla(0.0, 0.0, 0.9, 1.0)
}

/// Searchable, sortable, paginated table element.
///
/// Interaction state is kept in the keyed store under the table id, so the
/// same id must be used on every frame. Call [`control::remove_view_state`]
/// when the table goes away for good.
#[derive(IntoElement)]
pub struct DataTable {
    id: ComponentId,
    props: TableProps<AnyElement>,
    search_focus: Option<FocusHandle>,
    page_size_focus: Option<FocusHandle>,
}

impl DataTable {
    #[track_caller]
    pub fn new(props: TableProps<AnyElement>) -> Self {
        Self {
            id: ComponentId::default(),
            props,
            search_focus: None,
            page_size_focus: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<ComponentId>) -> Self {
        self.id = id.into();
        self
    }

    /// Focus handle that makes the search box accept typing.
    pub fn search_focus_handle(mut self, handle: FocusHandle) -> Self {
        self.search_focus = Some(handle);
        self
    }

    /// Focus handle that makes the page-size box accept typing.
    pub fn page_size_focus_handle(mut self, handle: FocusHandle) -> Self {
        self.page_size_focus = Some(handle);
        self
    }

    pub fn row_actions(
        mut self,
        render: impl Fn(&Record) -> Option<AnyElement> + 'static,
    ) -> Self {
        self.props = self.props.row_actions(render);
        self
    }

    /// Renders `field` cells with a custom element instead of plain text.
    pub fn render_cell(
        mut self,
        field: impl Into<String>,
        render: impl Fn(&Value, &Record) -> AnyElement + 'static,
    ) -> Self {
        self.props = self.props.render_cell(field, render);
        self
    }

    fn text_box(
        &self,
        slot: &str,
        text: String,
        placeholder: &str,
        focus: Option<&FocusHandle>,
        read: fn(&TableViewState) -> String,
        apply: StateUpdate,
    ) -> AnyElement {
        let empty = text.is_empty();
        let shown = if empty { placeholder.to_string() } else { text };
        let mut field = div()
            .id(element_id(self.id.slot(slot)))
            .min_w(px(48.0))
            .px_2()
            .py_1()
            .border_1()
            .border_color(border_color())
            .rounded_md()
            .text_sm();
        if empty {
            field = field.text_color(muted_fg());
        }
        field = field.child(shown);

        if let Some(handle) = focus {
            let handle_for_click = handle.clone();
            let table_id = self.id.clone();
            let page_size = self.props.initial_page_size();
            field = field
                .track_focus(handle)
                .on_click(move |_: &ClickEvent, window: &mut Window, cx| {
                    window.focus(&handle_for_click, cx);
                })
                .on_key_down(move |event: &KeyDownEvent, window: &mut Window, cx| {
                    let modifiers = KeyModifiers {
                        control: event.keystroke.modifiers.control,
                        platform: event.keystroke.modifiers.platform,
                        function: event.keystroke.modifiers.function,
                        alt: event.keystroke.modifiers.alt,
                    };
                    let current = read(&control::view_state(&table_id, page_size));
                    let Some(next) = text_edit::apply_key(
                        &current,
                        event.keystroke.key.as_str(),
                        event.keystroke.key_char.as_deref(),
                        modifiers,
                    ) else {
                        return;
                    };
                    control::update_view_state(&table_id, page_size, |state| {
                        apply(state, &next)
                    });
                    cx.stop_propagation();
                    window.refresh();
                });
        }

        field.into_any_element()
    }

    fn button(
        &self,
        slot: String,
        label: &str,
        disabled: bool,
        update: impl Fn(&mut TableViewState) + 'static,
    ) -> AnyElement {
        let mut button = div()
            .id(element_id(slot))
            .px_2()
            .py_1()
            .border_1()
            .border_color(border_color())
            .rounded_md()
            .text_sm()
            .child(label.to_string());

        if disabled {
            button = button.opacity(0.5);
        } else {
            let table_id = self.id.clone();
            let page_size = self.props.initial_page_size();
            button = button
                .cursor_pointer()
                .hover(|style| style.bg(header_bg()))
                .on_click(move |_: &ClickEvent, window: &mut Window, _cx| {
                    control::update_view_state(&table_id, page_size, &update);
                    window.refresh();
                });
        }

        button.into_any_element()
    }
}

impl RenderOnce for DataTable {
    fn render(self, _window: &mut Window, _cx: &mut gpui::App) -> impl IntoElement {
        let table_id = self.id.clone();
        let page_size = self.props.initial_page_size();
        let state = control::view_state(&table_id, page_size);
        let mut projection = TableProjection::build(&state, &self.props);
        let page_count = projection.page_count;
        let column_count = projection.headers.len();

        let search = self.text_box(
            "search",
            projection.search_term.clone(),
            "Search...",
            self.search_focus.as_ref(),
            |state| state.search_term().to_string(),
            Rc::new(|state: &mut TableViewState, text: &str| state.set_search_term(text)),
        );

        let page_size_input = self.text_box(
            "page-size",
            projection.page_size_draft.clone(),
            "",
            self.page_size_focus.as_ref(),
            |state| state.page_size_draft().to_string(),
            Rc::new(|state: &mut TableViewState, text: &str| {
                let _ = state.enter_page_size(text);
            }),
        );
        let page_size_selector = div()
            .flex()
            .items_center()
            .gap_1()
            .child(self.button(self.id.slot("page-size-minus"), "−", false, |state| {
                let _ = state.decrement_page_size();
            }))
            .child(page_size_input)
            .child(self.button(self.id.slot("page-size-plus"), "+", false, |state| {
                let _ = state.increment_page_size();
            }));

        let cell = |id: String| div().id(element_id(id)).flex_1().min_w_0().px_2().py_1();

        let mut header_row = div()
            .id(element_id(table_id.slot("header")))
            .w_full()
            .flex()
            .items_center()
            .bg(header_bg())
            .font_weight(gpui::FontWeight::SEMIBOLD)
            .child(div().w(px(40.0)).px_2().py_1().child("#"));
        for (index, header) in projection.headers.iter().enumerate() {
            let field = header.field.clone();
            let id_for_sort = table_id.clone();
            header_row = header_row.child(
                cell(table_id.slot_index("header-cell", index))
                    .cursor_pointer()
                    .truncate()
                    .child(format!("{} {}", header.label, header.indicator.symbol()))
                    .on_click(move |_: &ClickEvent, window: &mut Window, _cx| {
                        control::update_view_state(&id_for_sort, page_size, |state| {
                            state.toggle_sort(&field);
                        });
                        window.refresh();
                    }),
            );
        }
        header_row = header_row.child(div().w(px(120.0)).px_2().py_1().child("Actions"));

        let body = std::mem::replace(&mut projection.body, TableBody::Rows(Vec::new()));
        let rows: Vec<AnyElement> = match body {
            TableBody::Loading { rows } => (0..rows)
                .map(|row_index| {
                    let bar = || div().w_full().h(px(12.0)).rounded_sm().bg(skeleton_bg());
                    let mut row = div()
                        .id(element_id(table_id.slot_index("skeleton", row_index)))
                        .w_full()
                        .flex()
                        .items_center()
                        .border_b_1()
                        .border_color(border_color())
                        .child(div().w(px(40.0)).px_2().py_1().child(bar()));
                    for column in 0..column_count {
                        row = row.child(
                            cell(table_id.slot_index("skeleton-cell", format!("{row_index}-{column}")))
                                .child(bar()),
                        );
                    }
                    row.child(div().w(px(120.0)).px_2().py_1().child(bar()))
                        .into_any_element()
                })
                .collect(),
            TableBody::Rows(rows) => rows
                .into_iter()
                .enumerate()
                .map(|(row_index, row)| {
                    let mut row_node = div()
                        .id(element_id(table_id.slot_index("row", row_index)))
                        .w_full()
                        .flex()
                        .items_center()
                        .border_b_1()
                        .border_color(border_color())
                        .child(div().w(px(40.0)).px_2().py_1().child(row.ordinal.to_string()));
                    for (column, projected) in row.cells.into_iter().enumerate() {
                        let node =
                            cell(table_id.slot_index("row-cell", format!("{row_index}-{column}")))
                                .truncate();
                        row_node = row_node.child(match projected.content {
                            Some(element) => node.child(element),
                            None => node.child(projected.text),
                        });
                    }
                    let mut actions = div().w(px(120.0)).px_2().py_1().flex().items_center();
                    if let Some(element) = row.actions {
                        actions = actions.child(element);
                    }
                    row_node.child(actions).into_any_element()
                })
                .collect(),
        };

        let pagination = div()
            .id(element_id(table_id.slot("pagination")))
            .w_full()
            .flex()
            .items_center()
            .justify_between()
            .py_2()
            .child(self.button(
                table_id.slot("prev"),
                "Previous",
                projection.prev_disabled,
                |state| {
                    state.go_to_previous_page();
                },
            ))
            .child(
                div()
                    .text_sm()
                    .text_color(muted_fg())
                    .child(projection.summary()),
            )
            .child(self.button(
                table_id.slot("next"),
                "Next",
                projection.next_disabled,
                move |state| {
                    state.go_to_next_page(page_count);
                },
            ));

        div()
            .id(element_id(table_id.to_string()))
            .w_full()
            .flex()
            .flex_col()
            .gap_2()
            .child(
                div()
                    .w_full()
                    .flex()
                    .justify_center()
                    .text_xl()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(projection.heading.clone()),
            )
            .child(div().w_full().flex().justify_center().child(search))
            .child(page_size_selector)
            .child(
                div()
                    .w_full()
                    .flex()
                    .flex_col()
                    .border_1()
                    .border_color(border_color())
                    .child(header_row)
                    .children(rows),
            )
            .child(pagination)
    }
}
