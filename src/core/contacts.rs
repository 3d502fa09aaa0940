//! Contacts retrieval from the content backend.

use serde::{Deserialize, Serialize};

use crate::config::{CONTACTS_ENDPOINT, cache};
use crate::core::error::FetchError;
use crate::models::Contacts;
use crate::utils::ApiClient;

/// Backend single-entry envelope: `{ "data": { "id": .., "attributes": {..} } }`.
#[derive(Debug, Deserialize, Serialize)]
struct Envelope {
    data: Option<Entry>,
}

#[derive(Debug, Deserialize, Serialize)]
struct Entry {
    #[serde(default)]
    attributes: Option<Contacts>,
}

impl Envelope {
    /// A missing `data` entry (unpublished record) yields `None`.
    fn into_contacts(self) -> Option<Contacts> {
        self.data.map(|entry| entry.attributes.unwrap_or_default())
    }
}

/// Fetch the contacts record, cached for the session.
pub async fn fetch_contacts(client: &ApiClient) -> Result<Option<Contacts>, FetchError> {
    let envelope: Envelope = client
        .get_json_cached(CONTACTS_ENDPOINT, cache::CONTACTS_KEY)
        .await?;
    Ok(envelope.into_contacts())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_contacts(body: &str) -> Result<Option<Contacts>, serde_json::Error> {
        serde_json::from_str::<Envelope>(body).map(Envelope::into_contacts)
    }

    #[test]
    fn test_decode_contacts() {
        let body = r#"{
            "data": {
                "id": 1,
                "attributes": {
                    "phone": "79991234567",
                    "whatsapp": "79997654321",
                    "email": "sales@example.ru",
                    "manager": "Анна",
                    "createdAt": "2024-01-10T09:00:00.000Z"
                }
            },
            "meta": {}
        }"#;
        let contacts = decode_contacts(body).unwrap().unwrap();
        assert_eq!(contacts.phone, "79991234567");
        assert_eq!(contacts.manager, "Анна");
    }

    #[test]
    fn test_decode_partial_record() {
        let body = r#"{ "data": { "attributes": { "phone": "79991234567" } } }"#;
        let contacts = decode_contacts(body).unwrap().unwrap();
        assert_eq!(contacts.phone, "79991234567");
        assert!(contacts.whatsapp.is_empty());
        assert!(contacts.email.is_empty());
    }

    #[test]
    fn test_decode_null_fields() {
        let body = r#"{
            "data": {
                "attributes": {
                    "phone": "79991234567",
                    "whatsapp": null,
                    "email": "a@b.ru",
                    "manager": null
                }
            }
        }"#;
        let contacts = decode_contacts(body).unwrap().unwrap();
        assert_eq!(contacts.phone, "79991234567");
        assert_eq!(contacts.email, "a@b.ru");
        assert!(contacts.whatsapp.is_empty());
        assert!(contacts.manager.is_empty());
    }

    #[test]
    fn test_decode_numeric_fields() {
        let body = r#"{ "data": { "attributes": { "phone": 79991234567, "whatsapp": false } } }"#;
        let contacts = decode_contacts(body).unwrap().unwrap();
        assert_eq!(contacts.phone, "79991234567");
        assert!(contacts.whatsapp.is_empty());

        let empty = decode_contacts(r#"{ "data": { "attributes": null } }"#).unwrap();
        assert_eq!(empty, Some(Contacts::default()));
    }

    #[test]
    fn test_decode_missing_entry() {
        assert_eq!(decode_contacts(r#"{ "data": null }"#).unwrap(), None);
        assert_eq!(decode_contacts("{}").unwrap(), None);
    }

    #[test]
    fn test_decode_garbage() {
        assert!(decode_contacts("<html>502</html>").is_err());
    }
}
