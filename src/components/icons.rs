//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::ChannelKind;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuMail as Email, LuMenu as Menu, LuMessageCircle as WhatsApp, LuPhone as Phone,
        LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsEnvelopeFill as Email, BsList as Menu, BsTelephoneFill as Phone, BsWhatsapp as WhatsApp,
        BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(PHONE, Phone);
themed_icon!(WHATSAPP, WhatsApp);
themed_icon!(EMAIL, Email);
themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);

/// Icon for a contact channel.
pub fn channel(kind: ChannelKind) -> Icon {
    match kind {
        ChannelKind::Phone => PHONE,
        ChannelKind::WhatsApp => WHATSAPP,
        ChannelKind::Email => EMAIL,
    }
}
