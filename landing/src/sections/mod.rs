// Landing page sections, in page order
// SafeLine Pickup (c)2024

use leptos::prelude::*;

use crate::config::SiteConfig;

mod back_to_top;
mod contact;
mod footer;
mod header;
mod hero;
mod origin;
mod team;
mod video;

pub use back_to_top::BackToTop;
pub use contact::Contact;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use origin::Origin;
pub use team::Team;
pub use video::Video;

/// Site config provided by the page shell; defaults when rendered standalone.
fn site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}
