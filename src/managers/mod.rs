// Linkshelf state managers
// Managers handle the client's only mutable state: the rendered view and the entry form.

pub mod form_manager;
pub mod view_manager;
