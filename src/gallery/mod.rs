//! Gallery demo pages
//!
//! One page per registry category, each rendering a titled demo section
//! for every component it hosts. The shared [`DemoSection`] chrome pulls
//! name, status, and description from the registry.

pub mod actions;
pub mod communication;
pub mod containment;
pub mod data;
pub mod header;
pub mod inputs;
pub mod navigation;
pub mod selection;

use gpui::{
    div, prelude::*, px, AnyElement, App, IntoElement, ParentElement, RenderOnce, Styled, Window,
};

use crate::i18n::{t, Locale};
use crate::registry::{self, Status};
use crate::theme::typography::TypeScale;
use crate::theme::ActiveTheme;

/// Card chrome around one component demo
#[derive(IntoElement)]
pub struct DemoSection {
    entry_id: &'static str,
    locale: Locale,
    highlighted: bool,
    children: Vec<AnyElement>,
}

impl DemoSection {
    pub fn new(entry_id: &'static str, locale: Locale) -> Self {
        Self {
            entry_id,
            locale,
            highlighted: false,
            children: Vec::new(),
        }
    }

    /// Outline the section as the active registry entry
    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }
}

impl RenderOnce for DemoSection {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let colors = cx.theme().colors;
        let Some(entry) = registry::find(self.entry_id) else {
            return div().into_any_element();
        };

        let (chip_bg, chip_fg) = match entry.status {
            Status::Stable => (colors.secondary_container, colors.on_secondary_container),
            Status::Preview => (colors.tertiary_container, colors.on_tertiary_container),
        };

        div()
            .w_full()
            .p_5()
            .rounded_lg()
            .border_1()
            .border_color(if self.highlighted {
                colors.primary
            } else {
                colors.outline_variant
            })
            .bg(colors.surface)
            .flex()
            .flex_col()
            .gap_4()
            // Header: name plus status chip
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .text_size(px(TypeScale::TITLE_MEDIUM))
                            .font_weight(gpui::FontWeight::MEDIUM)
                            .text_color(colors.on_surface)
                            .child(entry.name),
                    )
                    .child(
                        div()
                            .px_2()
                            .py(px(2.0))
                            .rounded_full()
                            .bg(chip_bg)
                            .text_size(px(TypeScale::LABEL_SMALL))
                            .text_color(chip_fg)
                            .child(t(self.locale, entry.status.label_key())),
                    ),
            )
            .child(
                div()
                    .text_size(px(TypeScale::BODY_SMALL))
                    .text_color(colors.on_surface_variant)
                    .child(entry.description),
            )
            .children(self.children)
            .into_any_element()
    }
}

/// Scrollable page container shared by all category pages
pub fn page_scroll(id: &'static str, sections: Vec<AnyElement>) -> AnyElement {
    div()
        .id(id)
        .flex_1()
        .overflow_y_scroll()
        .p_6()
        .flex()
        .flex_col()
        .gap_6()
        .children(sections)
        .into_any_element()
}

/// A labeled row of demo variants
pub fn demo_row(label: &'static str, cx: &App, children: Vec<AnyElement>) -> AnyElement {
    let colors = cx.theme().colors;
    div()
        .flex()
        .flex_col()
        .gap_2()
        .child(
            div()
                .text_size(px(TypeScale::LABEL_MEDIUM))
                .text_color(colors.on_surface_variant)
                .child(label),
        )
        .child(
            div()
                .flex()
                .flex_wrap()
                .items_center()
                .gap_3()
                .children(children),
        )
        .into_any_element()
}
