// Shapes of the data the analysis backend returns. Read-only here: the UI
// forwards them and receives derived view models back.

pub mod analysis;
pub mod history;
