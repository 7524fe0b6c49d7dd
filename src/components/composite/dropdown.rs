//! Dropdown Component
//!
//! A select field that opens a floating option list sized to at least the
//! trigger width. Selection is reported through `on_change`; the field
//! itself stays the single owner of the selected value.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, ClickEvent, Context, ElementId, Entity, InteractiveElement,
    IntoElement, ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::assets::IconName;
use crate::components::primitives::icon::Icon;
use crate::floating::anchored::{AnchorMeasure, FloatingSurface};
use crate::floating::position::{Align, Side};
use crate::overlay::{OverlayHandle, OverlayLayer, Overlays};
use crate::theme::typography::TypeScale;
use crate::theme::ActiveTheme;

/// A select option
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: SharedString,
    pub label: SharedString,
}

impl SelectOption {
    pub fn new(value: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

type Picker = Rc<dyn Fn(&SharedString, &mut Window, &mut App) + 'static>;

/// The floating option list
struct OptionList {
    options: Vec<SelectOption>,
    selected: Option<SharedString>,
    picker: Picker,
}

impl Render for OptionList {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = cx.theme().colors;
        let density = cx.theme().density;

        div()
            .py_2()
            .bg(colors.surface_container)
            .rounded_md()
            .shadow_md()
            .flex()
            .flex_col()
            .children(self.options.iter().enumerate().map(|(i, option)| {
                let is_selected = self.selected.as_ref() == Some(&option.value);
                let picker = self.picker.clone();
                let value = option.value.clone();

                div()
                    .id(("option", i))
                    .px_3()
                    .py(density.row_padding())
                    .flex()
                    .items_center()
                    .justify_between()
                    .gap_3()
                    .cursor_pointer()
                    .text_size(px(TypeScale::BODY_MEDIUM))
                    .text_color(colors.on_surface)
                    .when(is_selected, |el| el.bg(colors.secondary_container))
                    .hover(|s| s.bg(colors.hover_layer()))
                    .child(option.label.clone())
                    .when(is_selected, |el| {
                        el.child(Icon::new(IconName::Check).size(px(16.0)).color(colors.primary))
                    })
                    .on_click(move |_event: &ClickEvent, window, cx| {
                        picker(&value, window, cx);
                    })
            }))
    }
}

struct OpenSurface {
    handle: OverlayHandle,
    _surface: Entity<FloatingSurface>,
}

/// A select field with a floating option list
pub struct Dropdown {
    id: ElementId,
    overlays: Entity<Overlays>,
    anchor: AnchorMeasure,
    options: Vec<SelectOption>,
    selected: Option<SharedString>,
    placeholder: SharedString,
    disabled: bool,
    on_change: Option<Rc<dyn Fn(&SharedString, &mut Window, &mut App) + 'static>>,
    open: Option<OpenSurface>,
}

impl Dropdown {
    pub fn new(id: impl Into<ElementId>, overlays: Entity<Overlays>) -> Self {
        Self {
            id: id.into(),
            overlays,
            anchor: AnchorMeasure::new(),
            options: Vec::new(),
            selected: None,
            placeholder: "Select...".into(),
            disabled: false,
            on_change: None,
            open: None,
        }
    }

    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    pub fn selected(mut self, value: impl Into<SharedString>) -> Self {
        self.selected = Some(value.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Called with the newly selected value
    pub fn on_change(
        mut self,
        handler: impl Fn(&SharedString, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    pub fn value(&self) -> Option<&SharedString> {
        self.selected.as_ref()
    }

    /// Replace the selected value from outside (e.g. synced state)
    pub fn set_selected(&mut self, value: Option<SharedString>) {
        self.selected = value;
    }

    fn toggle(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.open.is_some() {
            self.close(cx);
        } else if !self.disabled {
            self.open_list(window, cx);
        }
    }

    fn open_list(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let registry = self.overlays.read(cx).registry();
        let anchor = self.anchor.clone();
        let trigger_width = anchor.get().map(|bounds| bounds.size.width);
        let this = cx.entity().downgrade();

        let picker: Picker = {
            let this = this.clone();
            Rc::new(move |value: &SharedString, window: &mut Window, cx: &mut App| {
                let value = value.clone();
                this.update(cx, |dropdown, cx| {
                    dropdown.selected = Some(value.clone());
                    if let Some(handler) = dropdown.on_change.clone() {
                        handler(&value, window, cx);
                    }
                    dropdown.close(cx);
                })
                .ok();
            })
        };
        let list = cx.new(|_| OptionList {
            options: self.options.clone(),
            selected: self.selected.clone(),
            picker,
        });

        let surface = cx.new(|cx| {
            let mut surface = FloatingSurface::new(anchor, list.into(), &registry, window, cx)
                .side(Side::Bottom)
                .align(Align::Start)
                .gap(px(4.0))
                .on_dismiss(move |_window, cx| {
                    this.update(cx, |dropdown, cx| dropdown.close(cx)).ok();
                });
            if let Some(width) = trigger_width {
                surface = surface.min_width(width);
            }
            surface
        });

        let handle = self.overlays.update(cx, |overlays, cx| {
            let handle = overlays.mount(surface.clone().into(), OverlayLayer::Popup);
            cx.notify();
            handle
        });
        self.open = Some(OpenSurface {
            handle,
            _surface: surface,
        });
        cx.notify();
    }

    pub fn close(&mut self, cx: &mut Context<Self>) {
        if let Some(open) = self.open.take() {
            self.overlays.update(cx, |overlays, cx| {
                overlays.unmount(open.handle);
                cx.notify();
            });
            cx.notify();
        }
    }
}

impl Render for Dropdown {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = cx.theme().colors;
        let open = self.open.is_some();

        let display_text = self
            .selected
            .as_ref()
            .and_then(|value| {
                self.options
                    .iter()
                    .find(|opt| &opt.value == value)
                    .map(|opt| opt.label.clone())
            })
            .unwrap_or_else(|| self.placeholder.clone());

        let text_color = if self.selected.is_some() {
            colors.on_surface
        } else {
            colors.on_surface_variant
        };

        div()
            .id(self.id.clone())
            .relative()
            .px_3()
            .h(cx.theme().density.control_height(48.0))
            .min_w(px(180.0))
            .bg(colors.surface_container_highest)
            .rounded_md()
            .border_b_2()
            .border_color(if open { colors.primary } else { colors.on_surface_variant })
            .flex()
            .items_center()
            .justify_between()
            .gap_2()
            .text_size(px(TypeScale::BODY_MEDIUM))
            .text_color(text_color)
            .when(self.disabled, |el| el.opacity(0.5))
            .when(!self.disabled, |el| el.cursor_pointer())
            .child(display_text)
            .child(
                Icon::new(if open {
                    IconName::ChevronUp
                } else {
                    IconName::ChevronDown
                })
                .size(px(18.0))
                .color(colors.on_surface_variant),
            )
            .child(self.anchor.probe())
            .on_click(cx.listener(|this, _: &ClickEvent, window, cx| this.toggle(window, cx)))
    }
}
