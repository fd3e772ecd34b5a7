pub mod entry;
pub mod form;
pub mod settings;
pub mod state;

pub use entry::*;
pub use form::*;
pub use settings::*;
pub use state::*;
