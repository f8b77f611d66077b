// Linkshelf services
// Services cover the client's external surfaces: the bookmark service API,
// user prompts, and persisted settings.

pub mod api_client;
pub mod prompt;
pub mod settings;
