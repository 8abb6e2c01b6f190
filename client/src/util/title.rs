//! Document title sink backed by `document.title`.

use crate::nav::guard::TitleSink;

/// Writes titles straight onto the browser document. SSR paths no-op; the
/// server-rendered shell carries the site default instead.
#[derive(Clone, Copy, Default)]
pub struct BrowserTitle;

impl TitleSink for BrowserTitle {
    fn set_title(&self, title: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                doc.set_title(title);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = title;
        }
    }
}
