//! Accordion Component
//!
//! Vertically stacked sections that expand and collapse. Section headers
//! toggle through the accordion's own [`ExpandState`]; sections are plain
//! data handed to the accordion, not children reaching for a provider.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, AnyElement, App, Context, ElementId, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::assets::IconName;
use crate::components::primitives::icon::Icon;
use crate::state::expand::{ExpandMode, ExpandState};
use crate::theme::typography::TypeScale;
use crate::theme::ActiveTheme;

type BodyBuilder = Rc<dyn Fn(&mut Window, &mut App) -> AnyElement + 'static>;

/// One expandable section
#[derive(Clone)]
pub struct AccordionSection {
    pub id: SharedString,
    pub title: SharedString,
    body: BodyBuilder,
}

impl AccordionSection {
    pub fn new(
        id: impl Into<SharedString>,
        title: impl Into<SharedString>,
        body: impl Fn(&mut Window, &mut App) -> AnyElement + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: Rc::new(body),
        }
    }

    /// A section with plain text content
    pub fn text(
        id: impl Into<SharedString>,
        title: impl Into<SharedString>,
        body: impl Into<SharedString>,
    ) -> Self {
        let body = body.into();
        Self::new(id, title, move |_window, _cx| {
            div().child(body.clone()).into_any_element()
        })
    }
}

/// A set of expandable sections
pub struct Accordion {
    id: ElementId,
    sections: Vec<AccordionSection>,
    expand: ExpandState,
}

impl Accordion {
    /// Single-expand accordion with optional pre-opened section ids
    pub fn new<I, S>(id: impl Into<ElementId>, mode: ExpandMode, initial_open: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SharedString>,
    {
        Self {
            id: id.into(),
            sections: Vec::new(),
            expand: ExpandState::new(mode, initial_open),
        }
    }

    pub fn sections(mut self, sections: Vec<AccordionSection>) -> Self {
        self.sections = sections;
        self
    }

    pub fn toggle(&mut self, id: impl Into<SharedString>, cx: &mut Context<Self>) {
        self.expand.toggle(id);
        cx.notify();
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.expand.is_open(id)
    }

    fn render_section(
        &self,
        index: usize,
        section: &AccordionSection,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let colors = cx.theme().colors;
        let open = self.expand.is_open(&section.id);
        let section_id = section.id.clone();
        let body = open.then(|| (section.body)(window, cx));

        div()
            .flex()
            .flex_col()
            .when(index > 0, |el| {
                el.border_t_1().border_color(colors.outline_variant)
            })
            .child(
                div()
                    .id(("accordion-header", index))
                    .px_4()
                    .py_3()
                    .flex()
                    .items_center()
                    .justify_between()
                    .cursor_pointer()
                    .hover(|s| s.bg(colors.hover_layer()))
                    .text_size(px(TypeScale::TITLE_SMALL))
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(colors.on_surface)
                    .child(section.title.clone())
                    .child(
                        Icon::new(if open {
                            IconName::ChevronUp
                        } else {
                            IconName::ChevronDown
                        })
                        .size(px(18.0))
                        .color(colors.on_surface_variant),
                    )
                    .on_click(cx.listener(move |this, _, _window, cx| {
                        this.toggle(section_id.clone(), cx);
                    })),
            )
            .when_some(body, |el, body| {
                el.child(
                    div()
                        .px_4()
                        .pb_4()
                        .text_size(px(TypeScale::BODY_MEDIUM))
                        .text_color(colors.on_surface_variant)
                        .child(body),
                )
            })
            .into_any_element()
    }
}

impl Render for Accordion {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = cx.theme().colors;
        let sections = self.sections.clone();

        div()
            .id(self.id.clone())
            .w_full()
            .rounded_md()
            .border_1()
            .border_color(colors.outline_variant)
            .bg(colors.surface)
            .overflow_hidden()
            .flex()
            .flex_col()
            .children(
                sections
                    .iter()
                    .enumerate()
                    .map(|(i, section)| self.render_section(i, section, window, cx)),
            )
    }
}
