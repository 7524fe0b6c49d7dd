//! Selection Page
//!
//! Demos for checkboxes, radio buttons, switches, dropdowns, menus, and
//! the context menu.

use gpui::{
    div, prelude::*, px, Context, Entity, IntoElement, ParentElement, Render, SharedString,
    Styled, Window,
};

use crate::app::entities::GalleryEntities;
use crate::assets::IconName;
use crate::components::composite::context_menu::ContextMenuArea;
use crate::components::composite::dropdown::{Dropdown, SelectOption};
use crate::components::composite::menu::{MenuButton, MenuEntry, MenuItem};
use crate::components::primitives::button::Button;
use crate::components::primitives::checkbox::Checkbox;
use crate::components::primitives::radio::Radio;
use crate::components::primitives::switch::Switch;
use crate::eventing::{bus, UiEvent};
use crate::theme::typography::TypeScale;
use crate::theme::ActiveTheme;

use super::{demo_row, page_scroll, DemoSection};

/// Demo page for the Selection category
pub struct SelectionPage {
    entities: GalleryEntities,
    notifications: bool,
    autosave: bool,
    sync_enabled: bool,
    ring_choice: Option<SharedString>,
    dropdown: Entity<Dropdown>,
    menu: Entity<MenuButton>,
    context_area: Entity<ContextMenuArea>,
}

impl SelectionPage {
    pub fn new(entities: GalleryEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.gallery, |_, _, cx| cx.notify()).detach();
        cx.observe(&entities.settings, |_, _, cx| cx.notify()).detach();

        let dropdown = cx.new(|_| {
            Dropdown::new("density-dropdown", entities.overlays.clone())
                .placeholder("Pick a typeface")
                .options(vec![
                    SelectOption::new("roboto", "Roboto"),
                    SelectOption::new("roboto-flex", "Roboto Flex"),
                    SelectOption::new("roboto-serif", "Roboto Serif"),
                    SelectOption::new("roboto-mono", "Roboto Mono"),
                ])
                .on_change(|value, _window, cx| {
                    bus::emit(cx, UiEvent::snackbar(format!("Selected {value}")));
                })
        });

        let command_entries = vec![
            MenuEntry::Item(
                MenuItem::new("Rename", |_window, cx| {
                    bus::emit(cx, UiEvent::snackbar("Rename requested"));
                })
                .icon(IconName::Pencil),
            ),
            MenuEntry::Item(
                MenuItem::new("Duplicate", |_window, cx| {
                    bus::emit(cx, UiEvent::snackbar("Duplicated"));
                })
                .icon(IconName::Check),
            ),
            MenuEntry::Separator,
            MenuEntry::Item(
                MenuItem::new("Delete", |_window, cx| {
                    bus::emit(cx, UiEvent::snackbar("Deleted"));
                })
                .icon(IconName::Close),
            ),
            MenuEntry::Item(MenuItem::new("Archive", |_window, _cx| {}).disabled(true)),
        ];

        let menu = cx.new(|_| {
            MenuButton::new("command-menu", entities.overlays.clone())
                .entries(command_entries.clone())
                .trigger(|open, _window, _cx| {
                    Button::tonal("command-menu-trigger", if open { "Close menu" } else { "Open menu" })
                        .leading_icon(IconName::MoreVertical)
                        .into_any_element()
                })
        });

        let context_area = cx.new(|_| {
            ContextMenuArea::new("context-demo", entities.overlays.clone())
                .entries(command_entries)
                .area(|_window, cx| {
                    let colors = cx.theme().colors;
                    div()
                        .w_full()
                        .h(px(96.0))
                        .rounded_md()
                        .border_1()
                        .border_color(colors.outline_variant)
                        .bg(colors.surface_container_low)
                        .flex()
                        .items_center()
                        .justify_center()
                        .text_size(px(TypeScale::BODY_MEDIUM))
                        .text_color(colors.on_surface_variant)
                        .child("Right-click anywhere in this area")
                        .into_any_element()
                })
        });

        Self {
            entities,
            notifications: true,
            autosave: false,
            sync_enabled: true,
            ring_choice: Some("standard".into()),
            dropdown,
            menu,
            context_area,
        }
    }
}

impl Render for SelectionPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.settings.read(cx).locale();
        let active = self.entities.gallery.read(cx).active_id();

        let this = cx.entity().downgrade();
        let notifications_handle = this.clone();
        let autosave_handle = this.clone();
        let checkboxes = demo_row(
            "States",
            cx,
            vec![
                Checkbox::new("check-notifications")
                    .checked(self.notifications)
                    .label("Notifications")
                    .on_change(move |checked, _window, cx| {
                        notifications_handle
                            .update(cx, |page, cx| {
                                page.notifications = checked;
                                cx.notify();
                            })
                            .ok();
                    })
                    .into_any_element(),
                Checkbox::new("check-autosave")
                    .checked(self.autosave)
                    .label("Autosave")
                    .on_change(move |checked, _window, cx| {
                        autosave_handle
                            .update(cx, |page, cx| {
                                page.autosave = checked;
                                cx.notify();
                            })
                            .ok();
                    })
                    .into_any_element(),
                Checkbox::new("check-disabled")
                    .checked(true)
                    .label("Disabled")
                    .disabled(true)
                    .into_any_element(),
            ],
        );

        let ring_choice = self.ring_choice.clone();
        let radios = demo_row(
            "Ringtone",
            cx,
            ["standard", "chime", "silent"]
                .into_iter()
                .enumerate()
                .map(|(i, value)| {
                    let handle = this.clone();
                    Radio::new(("radio", i), value, ring_choice.clone())
                        .label(SharedString::from(
                            value[0..1].to_uppercase() + &value[1..],
                        ))
                        .on_select(move |value, _window, cx| {
                            let value = value.clone();
                            handle
                                .update(cx, |page, cx| {
                                    page.ring_choice = Some(value);
                                    cx.notify();
                                })
                                .ok();
                        })
                        .into_any_element()
                })
                .collect(),
        );

        let sync_handle = this.clone();
        let switches = demo_row(
            "Toggles",
            cx,
            vec![
                Switch::new("switch-sync")
                    .checked(self.sync_enabled)
                    .label("Sync across devices")
                    .on_change(move |checked, _window, cx| {
                        sync_handle
                            .update(cx, |page, cx| {
                                page.sync_enabled = checked;
                                cx.notify();
                            })
                            .ok();
                    })
                    .into_any_element(),
                Switch::new("switch-disabled")
                    .checked(false)
                    .label("Disabled")
                    .disabled(true)
                    .into_any_element(),
            ],
        );

        page_scroll(
            "selection-page",
            vec![
                DemoSection::new("checkbox", locale)
                    .highlighted(active == "checkbox")
                    .child(checkboxes)
                    .into_any_element(),
                DemoSection::new("radio", locale)
                    .highlighted(active == "radio")
                    .child(radios)
                    .into_any_element(),
                DemoSection::new("switch", locale)
                    .highlighted(active == "switch")
                    .child(switches)
                    .into_any_element(),
                DemoSection::new("dropdown", locale)
                    .highlighted(active == "dropdown")
                    .child(demo_row(
                        "Single select",
                        cx,
                        vec![self.dropdown.clone().into_any_element()],
                    ))
                    .into_any_element(),
                DemoSection::new("menu", locale)
                    .highlighted(active == "menu")
                    .child(demo_row(
                        "Command menu",
                        cx,
                        vec![self.menu.clone().into_any_element()],
                    ))
                    .into_any_element(),
                DemoSection::new("context-menu", locale)
                    .highlighted(active == "context-menu")
                    .child(self.context_area.clone())
                    .into_any_element(),
            ],
        )
    }
}
