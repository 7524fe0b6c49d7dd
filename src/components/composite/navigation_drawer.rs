//! Navigation Drawer Component
//!
//! An expandable tree of destinations grouped into collapsible sections.
//! Section expansion runs through [`ExpandState`] in multiple mode; the
//! gallery uses this as its entry list.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, AnyElement, App, ClickEvent, Context, ElementId, InteractiveElement,
    IntoElement, ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::assets::IconName;
use crate::components::primitives::icon::Icon;
use crate::state::expand::{ExpandMode, ExpandState};
use crate::theme::typography::TypeScale;
use crate::theme::ActiveTheme;

/// Width of the drawer in logical pixels
pub const DRAWER_WIDTH: f32 = 232.0;

/// A destination inside a drawer section
#[derive(Debug, Clone)]
pub struct DrawerItem {
    pub id: SharedString,
    pub label: SharedString,
    pub badge: Option<SharedString>,
}

impl DrawerItem {
    pub fn new(id: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            badge: None,
        }
    }

    pub fn badge(mut self, badge: impl Into<SharedString>) -> Self {
        self.badge = Some(badge.into());
        self
    }
}

/// A collapsible group of destinations
#[derive(Debug, Clone)]
pub struct DrawerSection {
    pub id: SharedString,
    pub title: SharedString,
    pub items: Vec<DrawerItem>,
}

impl DrawerSection {
    pub fn new(
        id: impl Into<SharedString>,
        title: impl Into<SharedString>,
        items: Vec<DrawerItem>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            items,
        }
    }
}

type SelectHandler = Rc<dyn Fn(&SharedString, &mut Window, &mut App) + 'static>;

/// A sectioned navigation tree
pub struct NavigationDrawer {
    id: ElementId,
    sections: Vec<DrawerSection>,
    expand: ExpandState,
    selected: Option<SharedString>,
    on_select: Option<SelectHandler>,
}

impl NavigationDrawer {
    /// Drawer with every section initially expanded
    pub fn new(id: impl Into<ElementId>, sections: Vec<DrawerSection>) -> Self {
        let initial: Vec<SharedString> = sections.iter().map(|s| s.id.clone()).collect();
        Self {
            id: id.into(),
            sections,
            expand: ExpandState::new(ExpandMode::Multiple, initial),
            selected: None,
            on_select: None,
        }
    }

    pub fn selected(mut self, id: impl Into<SharedString>) -> Self {
        self.selected = Some(id.into());
        self
    }

    pub fn on_select(
        mut self,
        handler: impl Fn(&SharedString, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_select = Some(Rc::new(handler));
        self
    }

    /// Update the highlighted destination
    pub fn set_selected(&mut self, id: impl Into<SharedString>, cx: &mut Context<Self>) {
        self.selected = Some(id.into());
        cx.notify();
    }

    /// Replace the section tree (e.g. after a locale change), keeping the
    /// expansion state for ids that survive
    pub fn set_sections(&mut self, sections: Vec<DrawerSection>, cx: &mut Context<Self>) {
        self.sections = sections;
        cx.notify();
    }

    fn toggle_section(&mut self, id: SharedString, cx: &mut Context<Self>) {
        self.expand.toggle(id);
        cx.notify();
    }

    fn render_section(
        &self,
        index: usize,
        section: &DrawerSection,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let colors = cx.theme().colors;
        let density = cx.theme().density;
        let open = self.expand.is_open(&section.id);
        let section_id = section.id.clone();

        let header = div()
            .id(("drawer-section", index))
            .px_4()
            .py(density.row_padding())
            .flex()
            .items_center()
            .justify_between()
            .cursor_pointer()
            .text_size(px(TypeScale::TITLE_SMALL))
            .font_weight(gpui::FontWeight::MEDIUM)
            .text_color(colors.on_surface_variant)
            .hover(|s| s.bg(colors.hover_layer()))
            .child(section.title.clone())
            .child(
                Icon::new(if open {
                    IconName::ChevronUp
                } else {
                    IconName::ChevronDown
                })
                .size(px(16.0))
                .color(colors.on_surface_variant),
            )
            .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
                this.toggle_section(section_id.clone(), cx);
            }));

        let items = open.then(|| {
            div().flex().flex_col().children(section.items.iter().enumerate().map(
                |(item_index, item)| {
                    let active = self.selected.as_ref() == Some(&item.id);
                    let on_select = self.on_select.clone();
                    let item_id = item.id.clone();

                    div()
                        .id(("drawer-item", index * 100 + item_index))
                        .mx_2()
                        .px_4()
                        .py(density.row_padding())
                        .rounded_full()
                        .flex()
                        .items_center()
                        .justify_between()
                        .cursor_pointer()
                        .text_size(px(TypeScale::LABEL_LARGE))
                        .map(|el| {
                            if active {
                                el.bg(colors.secondary_container)
                                    .text_color(colors.on_secondary_container)
                            } else {
                                el.text_color(colors.on_surface_variant)
                                    .hover(|s| s.bg(colors.hover_layer()))
                            }
                        })
                        .child(item.label.clone())
                        .when_some(item.badge.clone(), |el, badge| {
                            el.child(
                                div()
                                    .text_size(px(TypeScale::LABEL_SMALL))
                                    .text_color(colors.on_surface_variant)
                                    .child(badge),
                            )
                        })
                        .on_click(move |_event: &ClickEvent, window, cx| {
                            if let Some(handler) = on_select.as_ref() {
                                handler(&item_id, window, cx);
                            }
                        })
                },
            ))
        });

        div()
            .flex()
            .flex_col()
            .child(header)
            .when_some(items, |el, items| el.child(items))
            .into_any_element()
    }
}

impl Render for NavigationDrawer {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = cx.theme().colors;
        let sections = self.sections.clone();

        div()
            .id(self.id.clone())
            .w(px(DRAWER_WIDTH))
            .h_full()
            .flex_none()
            .bg(colors.surface_container_low)
            .border_r_1()
            .border_color(colors.outline_variant)
            .overflow_y_scroll()
            .flex()
            .flex_col()
            .py_2()
            .children(
                sections
                    .iter()
                    .enumerate()
                    .map(|(i, section)| self.render_section(i, section, cx)),
            )
    }
}
