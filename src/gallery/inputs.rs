//! Text Inputs Page

use gpui::{prelude::*, Context, Entity, IntoElement, Render, Window};

use crate::app::entities::GalleryEntities;
use crate::components::primitives::text_field::{TextField, TextFieldVariant};

use super::{demo_row, page_scroll, DemoSection};

/// Demo page for the Text inputs category
pub struct InputsPage {
    entities: GalleryEntities,
    filled: Entity<TextField>,
    outlined: Entity<TextField>,
    error_field: Entity<TextField>,
    disabled: Entity<TextField>,
}

impl InputsPage {
    pub fn new(entities: GalleryEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.gallery, |_, _, cx| cx.notify()).detach();
        cx.observe(&entities.settings, |_, _, cx| cx.notify()).detach();

        let filled = cx.new(|cx| {
            let mut field = TextField::new("field-filled", cx);
            field.set_label("Display name");
            field.set_placeholder("How others see you");
            field.set_supporting_text("Shown on your public profile");
            field
        });

        let outlined = cx.new(|cx| {
            let mut field = TextField::new("field-outlined", cx);
            field.set_variant(TextFieldVariant::Outlined);
            field.set_label("Workspace");
            field.set_placeholder("acme-design");
            field
        });

        let error_field = cx.new(|cx| {
            let mut field = TextField::new("field-error", cx);
            field.set_variant(TextFieldVariant::Outlined);
            field.set_label("Email");
            field.set_value("not-an-address");
            field.set_supporting_text("Enter a valid email address");
            field.set_error(true);
            field
        });

        let disabled = cx.new(|cx| {
            let mut field = TextField::new("field-disabled", cx);
            field.set_label("Plan");
            field.set_value("Enterprise");
            field.set_disabled(true);
            field
        });

        Self {
            entities,
            filled,
            outlined,
            error_field,
            disabled,
        }
    }
}

impl Render for InputsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.settings.read(cx).locale();
        let active = self.entities.gallery.read(cx).active_id();

        page_scroll(
            "inputs-page",
            vec![DemoSection::new("text-field", locale)
                .highlighted(active == "text-field")
                .child(demo_row(
                    "Filled",
                    cx,
                    vec![self.filled.clone().into_any_element()],
                ))
                .child(demo_row(
                    "Outlined",
                    cx,
                    vec![self.outlined.clone().into_any_element()],
                ))
                .child(demo_row(
                    "Error",
                    cx,
                    vec![self.error_field.clone().into_any_element()],
                ))
                .child(demo_row(
                    "Disabled",
                    cx,
                    vec![self.disabled.clone().into_any_element()],
                ))
                .into_any_element()],
        )
    }
}
