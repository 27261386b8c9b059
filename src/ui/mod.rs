/// View helpers
///
/// - `form.rs`: product/version pickers and the submit button
/// - `links.rs`: downloadable items with their final links

pub mod form;
pub mod links;
