// Analysis view: turns a backend analysis result into the panel's view model.
// Status derivation, rubric bars + radar, suggestion groups.

pub mod handlers;
pub mod rubric;
pub mod status;
pub mod suggestions;
pub mod view;
