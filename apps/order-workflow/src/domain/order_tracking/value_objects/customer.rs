//! Customer contact details carried on an order.

use serde::{Deserialize, Serialize};

/// Contact identity of the ordering customer.
///
/// Captured once at order creation and carried on every `order.updated`
/// notification so downstream notifiers can reach the customer. Fields are
/// empty strings, never absent, when unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerContact {
    /// Customer display name.
    #[serde(default)]
    pub name: String,
    /// Delivery address.
    #[serde(default)]
    pub address: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Contact email address.
    #[serde(default)]
    pub email: String,
}

impl CustomerContact {
    /// Create a contact from name and email, the two fields notifications use.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_contact_default_is_empty_strings() {
        let contact = CustomerContact::default();
        assert!(contact.name.is_empty());
        assert!(contact.address.is_empty());
        assert!(contact.phone.is_empty());
        assert!(contact.email.is_empty());
    }

    #[test]
    fn customer_contact_deserializes_missing_fields_to_empty() {
        let contact: CustomerContact =
            serde_json::from_str(r#"{"name":"Maria","email":"maria@example.com"}"#).unwrap();
        assert_eq!(contact.name, "Maria");
        assert_eq!(contact.email, "maria@example.com");
        assert!(contact.address.is_empty());
        assert!(contact.phone.is_empty());
    }
}
