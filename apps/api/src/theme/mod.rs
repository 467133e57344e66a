// Display-mode setting: explicit settings object resolved once at the request
// boundary and passed down to token lookups.

pub mod handlers;
pub mod mode;
pub mod settings;
pub mod store;

pub use mode::DisplayMode;
pub use settings::ThemeSettings;
