//! Gallery Header
//!
//! Title bar with the language dropdown, density toggle, and theme toggle.

use gpui::{
    div, prelude::*, px, Context, Entity, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::GalleryEntities;
use crate::assets::IconName;
use crate::components::composite::dropdown::{Dropdown, SelectOption};
use crate::components::composite::tooltip::TooltipArea;
use crate::components::primitives::button::{IconButton, IconButtonVariant};
use crate::eventing::{bus, UiEvent};
use crate::i18n::{t, Locale};
use crate::theme::typography::TypeScale;
use crate::theme::{ActiveTheme, Density, ThemeMode};

fn locale_key(locale: Locale) -> &'static str {
    match locale {
        Locale::EnUS => "en-us",
        Locale::ZhCN => "zh-cn",
    }
}

fn locale_from_key(key: &str) -> Option<Locale> {
    match key {
        "en-us" => Some(Locale::EnUS),
        "zh-cn" => Some(Locale::ZhCN),
        _ => None,
    }
}

/// The gallery title bar
pub struct Header {
    entities: GalleryEntities,
    locale_dropdown: Entity<Dropdown>,
    theme_tooltip: Entity<TooltipArea>,
}

impl Header {
    pub fn new(entities: GalleryEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let current_locale = entities.settings.read(cx).locale();
        let locale_dropdown = cx.new(|_| {
            Dropdown::new("locale-dropdown", entities.overlays.clone())
                .options(
                    Locale::all()
                        .iter()
                        .map(|locale| SelectOption::new(locale_key(*locale), locale.display_name()))
                        .collect(),
                )
                .selected(locale_key(current_locale))
                .on_change(|value, _window, cx| {
                    if let Some(locale) = locale_from_key(value) {
                        bus::emit(cx, UiEvent::SetLocale { locale });
                    }
                })
        });

        let theme_tooltip = {
            let settings = entities.settings.clone();
            let overlays = entities.overlays.clone();
            cx.new(|cx| {
                TooltipArea::new("theme-tooltip", overlays, "Toggle color scheme", window, cx)
                    .area(move |_window, cx| {
                        let mode = settings.read(cx).theme_mode();
                        IconButton::new(
                            "theme-toggle",
                            match mode {
                                ThemeMode::Light => IconName::Moon,
                                ThemeMode::Dark => IconName::Sun,
                            },
                        )
                        .on_click(move |_, _, cx| {
                            bus::emit(cx, UiEvent::SetThemeMode { mode: mode.toggled() });
                        })
                        .into_any_element()
                    })
            })
        };

        // Keep the dropdown in sync when the locale changes elsewhere
        cx.observe(&entities.settings, |this: &mut Self, settings, cx| {
            let locale = settings.read(cx).locale();
            this.locale_dropdown.update(cx, |dropdown, cx| {
                dropdown.set_selected(Some(locale_key(locale).into()));
                cx.notify();
            });
            cx.notify();
        })
        .detach();

        Self {
            entities,
            locale_dropdown,
            theme_tooltip,
        }
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = cx.theme().colors;
        let locale = self.entities.settings.read(cx).locale();
        let density = self.entities.settings.read(cx).density();

        div()
            .h(px(64.0))
            .w_full()
            .flex_none()
            .px_4()
            .bg(colors.surface_container)
            .border_b_1()
            .border_color(colors.outline_variant)
            .flex()
            .items_center()
            .justify_between()
            // Title
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .size(px(32.0))
                            .rounded_md()
                            .bg(colors.primary)
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(colors.on_primary)
                            .font_weight(gpui::FontWeight::BOLD)
                            .child("M"),
                    )
                    .child(
                        div()
                            .text_size(px(TypeScale::TITLE_LARGE))
                            .text_color(colors.on_surface)
                            .child(t(locale, "app-title")),
                    ),
            )
            // Controls
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(self.locale_dropdown.clone())
                    .child(
                        IconButton::new("density-toggle", IconName::Rows)
                            .variant(if density == Density::Compact {
                                IconButtonVariant::Tonal
                            } else {
                                IconButtonVariant::Standard
                            })
                            .on_click(move |_, _, cx| {
                                let next = match density {
                                    Density::Standard => Density::Compact,
                                    Density::Compact => Density::Standard,
                                };
                                bus::emit(cx, UiEvent::SetDensity { density: next });
                            }),
                    )
                    .child(self.theme_tooltip.clone()),
            )
    }
}
