use iced::widget::{column, container, scrollable, text};
use iced::{clipboard, Alignment, Element, Length, Task, Theme};
use log::info;

mod api;
mod catalog;
mod config;
mod error;
mod logging;
mod state;
mod ui;

use api::{ApiClient, Listed};
use error::{ClipboardError, FetchError};
use state::data::{DownloadableItem, ProductRef, SelectableVersion};
use state::items::{DetailsRequest, DetailsTicket};
use state::presenter::{self, COPIED_ACK_DURATION};
use state::versions::VersionTicket;
use state::Session;

/// Main application state
struct VmwareIndex {
    /// Client for the download index API
    api: ApiClient,
    /// Selections, resolver results and transient UI state
    session: Session,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User picked a product
    ProductSelected(ProductRef),
    /// User cleared the product selection
    ProductCleared,
    /// Background version-list fetch finished
    VersionsLoaded(VersionTicket, Result<Listed<SelectableVersion>, FetchError>),
    /// User picked a version (by selection key)
    VersionSelected(String),
    /// User clicked "Show Downloadable Files"
    ShowItems,
    /// Background download-details fetch finished
    ItemsLoaded(DetailsTicket, Result<Listed<DownloadableItem>, FetchError>),
    /// User clicked "Copy Link" on item N
    CopyLink(usize),
    /// Clipboard write for item N was checked
    CopyFinished(usize, Result<(), ClipboardError>),
    /// "Copied!" acknowledgement timer fired
    CopyExpired(u64),
}

impl VmwareIndex {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = config::get();

        // Without a client nothing in the app can work, so fail loudly
        let api = ApiClient::from_config(config)
            .expect("Failed to initialize API client. Check api_base in config.json.");

        info!(
            "🚀 VMware download index ready ({} products)",
            catalog::PRODUCTS.len()
        );

        (
            VmwareIndex {
                api,
                session: Session::new(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ProductSelected(product) => self.select_product(Some(product.id)),
            Message::ProductCleared => self.select_product(None),
            Message::VersionsLoaded(ticket, result) => {
                self.session.apply_versions(&ticket, result);
                Task::none()
            }
            Message::VersionSelected(key) => {
                self.session.set_version(Some(&key));
                Task::none()
            }
            Message::ShowItems => match self.session.submit() {
                Ok(DetailsRequest { ticket, query }) => Task::perform(
                    self.api.clone().fetch_details(query),
                    move |result| Message::ItemsLoaded(ticket.clone(), result),
                ),
                Err(_) => Task::none(),
            },
            Message::ItemsLoaded(ticket, result) => {
                self.session.apply_items(&ticket, result);
                Task::none()
            }
            Message::CopyLink(index) => {
                let Some(link) = self.session.link_at(index) else {
                    return Task::none();
                };

                // Read the clipboard back to find out whether the write took
                let expected = link.clone();
                clipboard::write::<Message>(link).chain(clipboard::read().map(
                    move |contents| {
                        Message::CopyFinished(index, presenter::confirm_copy(contents, &expected))
                    },
                ))
            }
            Message::CopyFinished(index, result) => {
                match self.session.copy_finished(index, result) {
                    Some(generation) => Task::perform(
                        tokio::time::sleep(COPIED_ACK_DURATION),
                        move |_| Message::CopyExpired(generation),
                    ),
                    None => Task::none(),
                }
            }
            Message::CopyExpired(generation) => {
                self.session.copy_expired(generation);
                Task::none()
            }
        }
    }

    /// Apply a product change and start the version fetch it triggers
    fn select_product(&mut self, product_id: Option<&str>) -> Task<Message> {
        match self.session.set_product(product_id) {
            Some(ticket) => Task::perform(
                self.api.clone().fetch_versions(ticket.product_id.clone()),
                move |result| Message::VersionsLoaded(ticket.clone(), result),
            ),
            None => Task::none(),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = column![
            text("VMware Product Download Link Generator").size(28),
            text("Select a product and version to get the official download link.").size(14),
        ]
        .spacing(6)
        .align_x(Alignment::Center);

        let mut content = column![header, ui::form::selection_form(&self.session)]
            .spacing(30)
            .padding(40)
            .max_width(680)
            .align_x(Alignment::Center);

        if !self.session.items().is_empty() {
            content = content.push(ui::links::download_list(&self.session));
        }

        content = content.push(
            column![
                text("Data is sourced from official Broadcom/VMware update servers.").size(11),
                text("This tool is provided as-is for convenience. All trademarks are property of their respective owners.")
                    .size(11),
            ]
            .spacing(2)
            .align_x(Alignment::Center),
        );

        scrollable(container(content).center_x(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    logging::init();

    iced::application(
        "VMware Download Links",
        VmwareIndex::update,
        VmwareIndex::view,
    )
    .theme(VmwareIndex::theme)
    .centered()
    .run_with(VmwareIndex::new)
}
