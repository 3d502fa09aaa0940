//! Navigation bar model.
//!
//! Builds everything the navbar renders from configuration, the contacts
//! record and the current path. Desktop and mobile views render from the same
//! [`NavModel`], so they can only differ in layout.

use crate::config::COMPANY_EMAIL;
use crate::core::phone::format_phone_number;
use crate::core::route::RouteClassifier;
use crate::models::{ChannelKind, ContactChannel, Contacts, NavEntry, NavItem};

/// Render model of the navigation bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavModel {
    /// Desktop bar entries.
    pub primary: Vec<NavEntry>,
    /// Mobile menu entries.
    pub menu: Vec<NavEntry>,
    /// Contact links in display order. Missing fields are left out.
    pub channels: Vec<ContactChannel>,
}

impl NavModel {
    pub fn build(
        classifier: &RouteClassifier<'_>,
        nav_items: &[NavItem],
        menu_items: &[NavItem],
        contacts: Option<&Contacts>,
        current_path: &str,
    ) -> Self {
        Self {
            primary: annotate(classifier, nav_items, current_path),
            menu: annotate(classifier, menu_items, current_path),
            channels: contact_channels(contacts),
        }
    }

    /// The voice channel, used by the informational banners.
    pub fn phone(&self) -> Option<&ContactChannel> {
        self.channels.iter().find(|c| c.kind == ChannelKind::Phone)
    }

    /// Label of the highlighted primary entry, if exactly one section matches
    /// besides home.
    pub fn active_label(&self) -> Option<&'static str> {
        let mut active = self.primary.iter().filter(|e| e.active && e.href != "/");
        match (active.next(), active.next()) {
            (Some(entry), None) => Some(entry.label),
            _ => None,
        }
    }
}

fn annotate(classifier: &RouteClassifier<'_>, items: &[NavItem], path: &str) -> Vec<NavEntry> {
    items
        .iter()
        .map(|item| NavEntry {
            label: item.label,
            href: item.href,
            active: classifier.is_active(item, path),
        })
        .collect()
}

/// Contact links for a contacts record.
///
/// The raw field is the link target; phone-number channels get a formatted
/// label. Channels whose field is empty are omitted. The company mailbox is
/// listed even without a contacts record.
pub fn contact_channels(contacts: Option<&Contacts>) -> Vec<ContactChannel> {
    let mut channels = Vec::with_capacity(4);
    let manager = contacts
        .map(|c| c.manager.trim())
        .filter(|m| !m.is_empty())
        .map(str::to_string);

    if let Some(c) = contacts {
        if let Some(phone) = non_empty(&c.phone) {
            channels.push(ContactChannel {
                kind: ChannelKind::Phone,
                href: format!("tel:{}", phone),
                label: format_phone_number(phone),
                note: manager.clone(),
            });
        }
        if let Some(whatsapp) = non_empty(&c.whatsapp) {
            channels.push(ContactChannel {
                kind: ChannelKind::WhatsApp,
                href: format!("https://wa.me/{}", whatsapp),
                label: format_phone_number(whatsapp),
                note: manager,
            });
        }
    }

    channels.push(email_channel(COMPANY_EMAIL));
    if let Some(email) = contacts.and_then(|c| non_empty(&c.email))
        && email != COMPANY_EMAIL
    {
        channels.push(email_channel(email));
    }

    channels
}

fn email_channel(address: &str) -> ContactChannel {
    ContactChannel {
        kind: ChannelKind::Email,
        href: format!("mailto:{}", address),
        label: address.to_string(),
        note: None,
    }
}

fn non_empty(field: &str) -> Option<&str> {
    let field = field.trim();
    (!field.is_empty()).then_some(field)
}

/// Non-home nav hrefs that the non-catalog route set does not cover.
///
/// On such a path both the section and the home entry are highlighted.
pub fn uncovered_sections<'a>(
    classifier: &RouteClassifier<'_>,
    items: impl IntoIterator<Item = &'a NavItem>,
) -> Vec<&'static str> {
    items
        .into_iter()
        .filter(|item| !item.is_home() && !classifier.is_non_catalog(item.href))
        .map(|item| item.href)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MENU_ITEMS, NAV_ITEMS};
    use crate::core::phone::digits_only;
    use crate::core::route::MatchStrategy;

    fn contacts() -> Contacts {
        Contacts {
            phone: "79991234567".to_string(),
            whatsapp: "79997654321".to_string(),
            email: "sales@example.ru".to_string(),
            manager: "Анна".to_string(),
        }
    }

    fn model(contacts: Option<&Contacts>, path: &str) -> NavModel {
        NavModel::build(
            &RouteClassifier::configured(),
            NAV_ITEMS,
            MENU_ITEMS,
            contacts,
            path,
        )
    }

    fn active_hrefs(entries: &[NavEntry]) -> Vec<&'static str> {
        entries.iter().filter(|e| e.active).map(|e| e.href).collect()
    }

    #[test]
    fn test_entries_keep_config_order() {
        let m = model(None, "/");
        let hrefs: Vec<_> = m.primary.iter().map(|e| e.href).collect();
        let expected: Vec<_> = NAV_ITEMS.iter().map(|i| i.href).collect();
        assert_eq!(hrefs, expected);
        assert_eq!(m.menu.len(), MENU_ITEMS.len());
    }

    #[test]
    fn test_desktop_and_mobile_agree() {
        for path in ["/", "/catalog/lighters", "/search", "/contacts", "/about"] {
            let m = model(Some(&contacts()), path);
            assert_eq!(active_hrefs(&m.primary), active_hrefs(&m.menu), "path {path}");
        }
    }

    #[test]
    fn test_active_flags() {
        assert_eq!(active_hrefs(&model(None, "/").primary), vec!["/"]);
        assert_eq!(active_hrefs(&model(None, "/catalog/lighters").primary), vec!["/"]);
        assert_eq!(active_hrefs(&model(None, "/contacts").primary), vec!["/contacts"]);
        assert_eq!(active_hrefs(&model(None, "/search?q=x").primary), vec!["/search"]);
    }

    #[test]
    fn test_active_label() {
        assert_eq!(model(None, "/delivery").active_label(), Some("Доставка"));
        assert_eq!(model(None, "/").active_label(), None);
    }

    #[test]
    fn test_channels_use_raw_target_and_formatted_label() {
        let c = contacts();
        let channels = contact_channels(Some(&c));
        let kinds: Vec<_> = channels.iter().map(|ch| ch.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ChannelKind::Phone,
                ChannelKind::WhatsApp,
                ChannelKind::Email,
                ChannelKind::Email
            ]
        );

        let phone = &channels[0];
        assert_eq!(phone.href, "tel:79991234567");
        assert_eq!(phone.label, "+7 (999) 123-45-67");
        assert_eq!(digits_only(&phone.label), c.phone);
        assert_eq!(phone.note.as_deref(), Some("Анна"));

        let whatsapp = &channels[1];
        assert_eq!(whatsapp.href, "https://wa.me/79997654321");
        assert_eq!(whatsapp.label, "+7 (999) 765-43-21");

        assert_eq!(channels[2].href, format!("mailto:{}", COMPANY_EMAIL));
        assert_eq!(channels[3].href, "mailto:sales@example.ru");
        assert_eq!(channels[3].label, "sales@example.ru");
    }

    #[test]
    fn test_banner_phone_matches_raw_field() {
        let c = contacts();
        let m = model(Some(&c), "/");
        let phone = m.phone().unwrap();
        assert_eq!(phone.href, format!("tel:{}", c.phone));
    }

    #[test]
    fn test_missing_contacts_degrade() {
        let channels = contact_channels(None);
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].kind, ChannelKind::Email);
        assert!(model(None, "/").phone().is_none());
    }

    #[test]
    fn test_empty_fields_omitted() {
        let c = Contacts {
            phone: "  ".to_string(),
            whatsapp: String::new(),
            email: String::new(),
            manager: String::new(),
        };
        let channels = contact_channels(Some(&c));
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].label, COMPANY_EMAIL);
    }

    #[test]
    fn test_null_fields_drop_only_their_channel() {
        let c: Contacts = serde_json::from_str(
            r#"{ "phone": "79991234567", "whatsapp": null, "email": null, "manager": null }"#,
        )
        .unwrap();
        let channels = contact_channels(Some(&c));
        let kinds: Vec<_> = channels.iter().map(|ch| ch.kind).collect();
        assert_eq!(kinds, vec![ChannelKind::Phone, ChannelKind::Email]);
        assert_eq!(channels[0].href, "tel:79991234567");
        assert_eq!(channels[0].note, None);

        let m = model(Some(&c), "/");
        assert_eq!(m.phone().map(|ch| ch.href.as_str()), Some("tel:79991234567"));
    }

    #[test]
    fn test_malformed_phone_passes_through() {
        let c = Contacts {
            phone: "12-34".to_string(),
            ..Contacts::default()
        };
        let channels = contact_channels(Some(&c));
        assert_eq!(channels[0].label, "12-34");
        assert_eq!(channels[0].href, "tel:12-34");
        assert_eq!(channels[0].note, None);
    }

    #[test]
    fn test_duplicate_company_email_listed_once() {
        let c = Contacts {
            email: COMPANY_EMAIL.to_string(),
            ..contacts()
        };
        let emails = contact_channels(Some(&c))
            .into_iter()
            .filter(|ch| ch.kind == ChannelKind::Email)
            .count();
        assert_eq!(emails, 1);
    }

    #[test]
    fn test_configured_sections_are_covered() {
        let classifier = RouteClassifier::configured();
        let uncovered = uncovered_sections(&classifier, NAV_ITEMS.iter().chain(MENU_ITEMS));
        assert!(uncovered.is_empty(), "uncovered nav sections: {uncovered:?}");
    }

    #[test]
    fn test_configured_sections_highlight_exactly_one_entry() {
        for item in NAV_ITEMS {
            let active = active_hrefs(&model(None, item.href).primary);
            assert_eq!(active, vec![item.href], "path {}", item.href);
        }
    }

    #[test]
    fn test_drift_is_detected() {
        let items = [NavItem::new("Каталог", "/"), NavItem::new("Блог", "/blog")];
        let classifier = RouteClassifier::new(&["/search"], MatchStrategy::Substring);
        assert_eq!(uncovered_sections(&classifier, &items), vec!["/blog"]);

        // Drifted config highlights two entries on the same path
        let m = NavModel::build(&classifier, &items, &[], None, "/blog");
        assert_eq!(active_hrefs(&m.primary), vec!["/", "/blog"]);
    }
}
