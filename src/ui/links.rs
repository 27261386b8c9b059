use iced::widget::{button, column, container, text, Column};
use iced::{Element, Length};

use crate::state::data::DownloadableItem;
use crate::state::presenter;
use crate::state::Session;
use crate::Message;

/// List of resolved downloadable items with their links and copy buttons
pub fn download_list(session: &Session) -> Element<'_, Message> {
    let copied = session.copied_index();
    let rows = session
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| item_row(index, item, copied == Some(index)));

    column![
        text("Downloadable Files:").size(20),
        Column::with_children(rows).spacing(12),
    ]
    .spacing(12)
    .width(Length::Fill)
    .into()
}

fn item_row(index: usize, item: &DownloadableItem, copied: bool) -> Element<'_, Message> {
    let mut details = Column::new().spacing(4).push(text(&item.name).size(15));

    // Only shown when both type and value are present
    if let Some((kind, value)) = item.checksum() {
        details = details.push(text(format!("{}: {}", kind, value)).size(12));
    }

    let copy = if copied {
        button(text("Copied!").size(12)).style(button::success)
    } else {
        button(text("Copy Link").size(12))
            .style(button::secondary)
            .on_press(Message::CopyLink(index))
    };

    details = details
        .push(text(presenter::final_link(item)).size(12).style(text::primary))
        .push(copy.padding([4, 10]));

    container(details)
        .padding(12)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}
