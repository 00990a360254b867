//! Certificate domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A certificate issued by a business to an end user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: Uuid,
    pub title: String,
    pub serial_number: String,
    pub course_title: Option<String>,
    pub course_date: Option<DateTime<Utc>>,
    pub pdf_uri: String,
    pub qr_code_uri: String,
    pub expires: bool,
    pub expiry_date: Option<DateTime<Utc>>,
    pub created_date: DateTime<Utc>,
    pub business_id: Uuid,
    pub end_user_id: Uuid,
}

impl Certificate {
    /// Whether the certificate has lapsed at the given instant
    pub fn is_expired_at(&self, at: DateTime<Utc>) -> bool {
        self.expires && self.expiry_date.is_some_and(|expiry| expiry <= at)
    }
}

/// Certificate creation input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCertificate {
    pub title: String,
    pub serial_number: String,
    pub course_title: Option<String>,
    pub course_date: Option<DateTime<Utc>>,
    pub pdf_uri: String,
    pub qr_code_uri: String,
    pub expires: bool,
    pub expiry_date: Option<DateTime<Utc>>,
    pub business_id: Uuid,
    pub end_user_id: Uuid,
}

/// Mutable certificate fields. Same shape as creation; the id and
/// creation date are never touched by an update.
pub type CertificateChanges = NewCertificate;

/// Certificate response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CertificateResponse {
    pub id: Uuid,
    #[schema(example = "First Aid at Work")]
    pub title: String,
    #[schema(example = "FA-2024-0001")]
    pub serial_number: String,
    pub course_title: Option<String>,
    pub course_date: Option<DateTime<Utc>>,
    pub pdf_uri: String,
    pub qr_code_uri: String,
    pub expires: bool,
    pub expiry_date: Option<DateTime<Utc>>,
    pub expired: bool,
    pub created_date: DateTime<Utc>,
    pub business_id: Uuid,
    pub end_user_id: Uuid,
}

impl From<Certificate> for CertificateResponse {
    fn from(certificate: Certificate) -> Self {
        let expired = certificate.is_expired_at(Utc::now());
        Self {
            id: certificate.id,
            title: certificate.title,
            serial_number: certificate.serial_number,
            course_title: certificate.course_title,
            course_date: certificate.course_date,
            pdf_uri: certificate.pdf_uri,
            qr_code_uri: certificate.qr_code_uri,
            expires: certificate.expires,
            expiry_date: certificate.expiry_date,
            expired,
            created_date: certificate.created_date,
            business_id: certificate.business_id,
            end_user_id: certificate.end_user_id,
        }
    }
}

/// Partial view returned after issuing a certificate
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CertificatePartialResponse {
    pub id: Uuid,
    pub title: String,
    pub serial_number: String,
    pub business_id: Uuid,
    pub end_user_id: Uuid,
}

impl From<Certificate> for CertificatePartialResponse {
    fn from(certificate: Certificate) -> Self {
        Self {
            id: certificate.id,
            title: certificate.title,
            serial_number: certificate.serial_number,
            business_id: certificate.business_id,
            end_user_id: certificate.end_user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn certificate(expires: bool, expiry_date: Option<DateTime<Utc>>) -> Certificate {
        Certificate {
            id: Uuid::new_v4(),
            title: "First Aid".to_string(),
            serial_number: "FA-1".to_string(),
            course_title: None,
            course_date: None,
            pdf_uri: "https://files.example/fa-1.pdf".to_string(),
            qr_code_uri: "https://files.example/fa-1.png".to_string(),
            expires,
            expiry_date,
            created_date: Utc::now(),
            business_id: Uuid::new_v4(),
            end_user_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn test_non_expiring_certificate_never_expires() {
        let now = Utc::now();
        let cert = certificate(false, Some(now - Duration::days(1)));
        assert!(!cert.is_expired_at(now));
    }

    #[test]
    fn test_expiry_date_in_past() {
        let now = Utc::now();
        assert!(certificate(true, Some(now - Duration::days(1))).is_expired_at(now));
        assert!(!certificate(true, Some(now + Duration::days(1))).is_expired_at(now));
        assert!(!certificate(true, None).is_expired_at(now));
    }
}
