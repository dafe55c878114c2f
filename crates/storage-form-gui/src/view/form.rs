//! The form view.
//!
//! A stateless projection of `AppState`: dirty status line, instructions,
//! the three fields, the Save button and, while the form is clean, the last
//! submitted record.

use iced::widget::{Column, button, column, container, rule, scrollable, text};
use iced::{Element, Font, Length};
use storage_form_core::FieldId;

use crate::component::FormField;
use crate::message::{FormMessage, Message};
use crate::state::AppState;
use crate::theme::{
    FORM_MAX_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM, button_primary, snapshot_panel, text_muted,
};

/// Instructions shown above the form.
pub const INSTRUCTIONS: &str = "Fill in the form and press save. You will see the data below \
the save button. After you change any field after pressing save, the panel is in dirty state \
again and you need press save again if you want to see the changed data";

/// Render the whole form.
pub fn view_form(state: &AppState) -> Element<'_, Message> {
    let status = text(format!("Is Form Dirty: {}", state.dirty_label()))
        .font(Font::MONOSPACE)
        .size(13);

    let intro = text(INSTRUCTIONS).size(14).style(text_muted);

    let fields = FieldId::ALL.into_iter().fold(
        Column::new().spacing(SPACING_MD),
        |fields, field| fields.push(view_field(state, field)),
    );

    let save = button(text("Save").size(14))
        .padding([SPACING_SM, SPACING_LG])
        .style(button_primary)
        .on_press_maybe(
            state
                .can_submit()
                .then_some(Message::Form(FormMessage::Submit)),
        );

    let mut content = column![
        status,
        rule::horizontal(1),
        intro,
        rule::horizontal(1),
        fields,
        rule::horizontal(1),
        save,
    ]
    .spacing(SPACING_MD)
    .max_width(FORM_MAX_WIDTH);

    if let Some(snapshot) = state.visible_snapshot() {
        content = content.push(
            container(
                text(snapshot.to_display_string())
                    .font(Font::MONOSPACE)
                    .size(13),
            )
            .padding(SPACING_SM)
            .width(Length::Fill)
            .style(snapshot_panel),
        );
    }

    container(scrollable(content))
        .padding(SPACING_LG)
        .center_x(Length::Fill)
        .into()
}

/// Render one field from its draft text and validation message.
fn view_field(state: &AppState, field: FieldId) -> Element<'_, Message> {
    FormField::new(
        field.label(),
        state.drafts.get(field),
        field.placeholder(),
        move |value| Message::Form(FormMessage::InputChanged(field, value)),
    )
    .prefix(field.prefix())
    .required(true)
    .error(state.form.error(field))
    .on_submit(Message::Form(FormMessage::Submit))
    .view()
}
