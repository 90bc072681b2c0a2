pub mod footer;
pub mod global_context;
pub mod header;

use leptos::prelude::*;

use footer::Footer;
use header::Navbar;

/// Site layout: navbar on top, the current section, footer at the bottom.
///
/// ```text
/// +------------------------------------------+
/// |                 Navbar                   |
/// +------------------------------------------+
/// |             current section              |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="site-layout">
            <div class="site-backdrop" aria-hidden="true"></div>
            <Navbar />
            {children()}
            <Footer />
        </div>
    }
}
