// Page-automation session: capability trait plus the Chromium-backed adapter.

pub mod chromium;
pub mod traits;

pub use chromium::ChromiumSession;
pub use traits::PageSession;
