//! Data Display Page
//!
//! Data table demo fed by the component registry itself.

use gpui::{div, prelude::*, Context, Entity, IntoElement, ParentElement, Render, Window};

use crate::app::entities::GalleryEntities;
use crate::components::composite::data_table::{Column, DataTable};
use crate::i18n::Locale;
use crate::registry::{self, ComponentEntry};

use super::{page_scroll, DemoSection};

/// Demo page for the Data display category
pub struct DataPage {
    entities: GalleryEntities,
    table: Entity<DataTable<&'static ComponentEntry>>,
}

impl DataPage {
    pub fn new(entities: GalleryEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.gallery, |_, _, cx| cx.notify()).detach();
        cx.observe(&entities.settings, |_, _, cx| cx.notify()).detach();

        let table = cx.new(|cx| {
            let mut table = DataTable::new(cx);
            table.set_columns(vec![
                Column::new("name", "Component", |entry: &&'static ComponentEntry| {
                    div().child(entry.name).into_any_element()
                })
                .fixed_width(180.0),
                Column::new("category", "Category", |entry: &&'static ComponentEntry| {
                    div()
                        .child(entry.category.title(Locale::EnUS))
                        .into_any_element()
                })
                .fixed_width(140.0),
                Column::new("status", "Status", |entry: &&'static ComponentEntry| {
                    div()
                        .child(format!("{:?}", entry.status))
                        .into_any_element()
                })
                .fixed_width(100.0),
                Column::new("id", "Identifier", |entry: &&'static ComponentEntry| {
                    div().child(entry.id).into_any_element()
                })
                .fixed_width(160.0),
            ]);
            table.set_rows(registry::entries().iter().collect());
            table.set_page_size(8);
            table
        });

        Self { entities, table }
    }
}

impl Render for DataPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.settings.read(cx).locale();
        let active = self.entities.gallery.read(cx).active_id();

        page_scroll(
            "data-page",
            vec![DemoSection::new("data-table", locale)
                .highlighted(active == "data-table")
                .child(self.table.clone())
                .into_any_element()],
        )
    }
}
