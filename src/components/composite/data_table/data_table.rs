//! DataTable Component
//!
//! Columnar data with zebra rows, empty and loading states, and a
//! built-in pagination bar over the shared range calculator.

use gpui::{
    div, prelude::*, px, Context, Entity, IntoElement, ParentElement, Render, SharedString,
    Styled, Window,
};

use super::column::{Column, ColumnWidth};
use crate::components::composite::pagination::PaginationBar;
use crate::state::pagination::PaginationState;
use crate::theme::typography::TypeScale;
use crate::theme::ActiveTheme;

/// A paged data table
pub struct DataTable<R: 'static> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    row_height: f32,
    page_size: usize,
    pagination: PaginationState,
    loading: bool,
    empty_message: SharedString,
}

impl<R: 'static> DataTable<R> {
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            row_height: 44.0,
            page_size: 10,
            pagination: PaginationState::new(0, 1),
            loading: false,
            empty_message: "No data".into(),
        }
    }

    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        self.columns = columns;
    }

    /// Replace the rows, recomputing the page count
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.pagination.set_total(self.page_count());
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.pagination.set_total(self.page_count());
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_empty_message(&mut self, message: impl Into<SharedString>) {
        self.empty_message = message.into();
    }

    pub fn set_page(&mut self, page: usize) {
        self.pagination.set_page(page);
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current()
    }

    fn page_count(&self) -> usize {
        self.rows.len().div_ceil(self.page_size)
    }

    /// Rows visible on the current page
    fn page_rows(&self) -> &[R] {
        let start = (self.pagination.current().saturating_sub(1)) * self.page_size;
        let end = (start + self.page_size).min(self.rows.len());
        self.rows.get(start..end).unwrap_or(&[])
    }

    fn column_width(width: &ColumnWidth) -> f32 {
        match width {
            ColumnWidth::Fixed(w) => *w,
            ColumnWidth::Flex(share) => 120.0 * share,
        }
    }

    fn render_header(&self, cx: &Context<Self>) -> impl IntoElement {
        let colors = cx.theme().colors;
        div()
            .h(px(48.0))
            .w_full()
            .flex()
            .items_center()
            .bg(colors.surface_container)
            .border_b_1()
            .border_color(colors.outline_variant)
            .children(self.columns.iter().map(|col| {
                div()
                    .w(px(Self::column_width(&col.width)))
                    .px_3()
                    .flex()
                    .when(col.numeric, |el| el.justify_end())
                    .text_size(px(TypeScale::TITLE_SMALL))
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(colors.on_surface)
                    .child(col.label.clone())
            }))
    }

    fn render_row(&self, row: &R, index: usize, cx: &Context<Self>) -> impl IntoElement {
        let colors = cx.theme().colors;
        let bg = if index % 2 == 0 {
            colors.surface
        } else {
            colors.surface_container_low
        };

        div()
            .h(px(self.row_height))
            .w_full()
            .flex()
            .items_center()
            .bg(bg)
            .hover(|s| s.bg(colors.hover_layer()))
            .border_b_1()
            .border_color(colors.outline_variant)
            .children(self.columns.iter().map(|col| {
                div()
                    .w(px(Self::column_width(&col.width)))
                    .px_3()
                    .flex()
                    .when(col.numeric, |el| el.justify_end())
                    .text_size(px(TypeScale::BODY_MEDIUM))
                    .text_color(colors.on_surface)
                    .overflow_hidden()
                    .child(col.render_cell(row))
            }))
    }

    fn render_placeholder(&self, message: SharedString, cx: &Context<Self>) -> impl IntoElement {
        div()
            .h(px(120.0))
            .flex()
            .items_center()
            .justify_center()
            .text_color(cx.theme().colors.on_surface_variant)
            .child(message)
    }
}

impl<R: 'static> Render for DataTable<R> {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = cx.theme().colors;
        let total_pages = self.page_count();
        let current = self.pagination.current();

        let mut table = div()
            .w_full()
            .flex()
            .flex_col()
            .bg(colors.surface)
            .border_1()
            .border_color(colors.outline_variant)
            .rounded_md()
            .overflow_hidden()
            .child(self.render_header(cx));

        if self.loading {
            table = table.child(self.render_placeholder("Loading...".into(), cx));
        } else if self.rows.is_empty() {
            table = table.child(self.render_placeholder(self.empty_message.clone(), cx));
        } else {
            table = table.child(
                div().flex().flex_col().children(
                    self.page_rows()
                        .iter()
                        .enumerate()
                        .map(|(i, row)| self.render_row(row, i, cx)),
                ),
            );

            // Footer: row count plus pagination
            let this = cx.entity().downgrade();
            table = table.child(
                div()
                    .w_full()
                    .px_3()
                    .py_2()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_size(px(TypeScale::BODY_SMALL))
                            .text_color(colors.on_surface_variant)
                            .child(format!("{} rows", self.rows.len())),
                    )
                    .child(
                        PaginationBar::new("table-pages", current, total_pages).on_change(
                            move |page, _window, cx| {
                                this.update(cx, |table, cx| {
                                    table.set_page(page);
                                    cx.notify();
                                })
                                .ok();
                            },
                        ),
                    ),
            );
        }

        table
    }
}

/// Helper to create a data table entity
pub fn data_table<R: 'static, V: 'static>(
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    cx: &mut Context<V>,
) -> Entity<DataTable<R>> {
    cx.new(|cx| {
        let mut table = DataTable::new(cx);
        table.set_columns(columns);
        table.set_rows(rows);
        table
    })
}
