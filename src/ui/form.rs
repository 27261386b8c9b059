use iced::widget::{button, column, container, pick_list, row, text, Column};
use iced::{Element, Length};

use crate::catalog;
use crate::state::data::SelectableVersion;
use crate::state::Session;
use crate::Message;

/// Product and version pickers, the error line and the submit button
pub fn selection_form(session: &Session) -> Element<'_, Message> {
    let mut form = Column::new().spacing(20).width(Length::Fill);

    if let Some(error) = session.error_message() {
        form = form.push(text(error).size(14).style(text::danger));
    }

    let selected_product = session.product_id().and_then(catalog::find);
    let mut product = column![
        text("Product:").size(14),
        row![
            pick_list(catalog::PRODUCTS, selected_product, Message::ProductSelected)
                .placeholder("-- Select a Product --")
                .width(Length::Fill),
            button("Clear")
                .style(button::secondary)
                .on_press_maybe(selected_product.map(|_| Message::ProductCleared)),
        ]
        .spacing(8),
    ]
    .spacing(4);
    if let Some(product_ref) = selected_product {
        product = product.push(text(format!("Manifest: {}", product_ref.manifest_file)).size(11));
    }
    form = form.push(product);

    if session.product_id().is_some() {
        form = form.push(column![text("Version:").size(14), version_picker(session)].spacing(4));
    }

    let label = if session.is_loading_details() {
        "Fetching Details..."
    } else {
        "Show Downloadable Files"
    };
    form = form.push(
        button(label)
            .width(Length::Fill)
            .padding(10)
            .on_press_maybe(session.can_submit().then_some(Message::ShowItems)),
    );

    form.into()
}

fn version_picker(session: &Session) -> Element<'_, Message> {
    if session.is_loading_versions() {
        return placeholder("Loading versions...");
    }

    if !session.versions().is_empty() {
        return pick_list(
            session.versions(),
            session.selected_version(),
            |version: SelectableVersion| Message::VersionSelected(version.selection_key),
        )
        .placeholder("-- Select a Version --")
        .width(Length::Fill)
        .into();
    }

    if session.error_message().is_some() {
        placeholder("Could not load versions.")
    } else {
        placeholder("No versions found for this product.")
    }
}

fn placeholder(message: &str) -> Element<'_, Message> {
    container(text(message).size(14))
        .padding(8)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}
