//! Booking enquiry message and messaging deep-link.

use crate::catalog::TravelPackage;
use chrono::NaiveDate;

/// Build the enquiry text sent through the messaging deep-link.
///
/// Embeds the package title, the selected departure, and the package
/// reference code so the operator can identify the booking without a
/// follow-up question.
pub fn build_booking_message(pkg: &TravelPackage, departure: NaiveDate) -> String {
    format!(
        "Hi! I'd like to book \"{}\" departing {}. Package code: {}.",
        pkg.title,
        departure.format("%d %b %Y"),
        pkg.reference_code()
    )
}

/// Build the outbound WhatsApp deep-link for an enquiry message.
///
/// The page opens this in a new browsing context, fire and forget.
pub fn whatsapp_link(phone: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", phone, percent_encode(message))
}

/// Percent-encode a text payload for a URL query value.
fn percent_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
            _ => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).as_bytes() {
                    result.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::PackageId;
    use crate::money::{Currency, Money};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_message_embeds_title_date_and_code() {
        let mut pkg = TravelPackage::new("Spiti Valley Circuit", Money::new(100, Currency::INR));
        pkg.id = PackageId::new("pkg-00deadbeef");
        let message = build_booking_message(&pkg, date("2025-06-01"));
        assert!(message.contains("Spiti Valley Circuit"));
        assert!(message.contains("01 Jun 2025"));
        assert!(message.contains("RM-ADBEEF"));
    }

    #[test]
    fn test_link_percent_encodes_payload() {
        let link = whatsapp_link("919800000000", "Hi! Spiti & Kinnaur");
        assert!(link.starts_with("https://wa.me/919800000000?text="));
        assert!(link.contains("Hi%21%20Spiti%20%26%20Kinnaur"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn test_percent_encode_multibyte() {
        assert_eq!(percent_encode("\u{20b9}"), "%E2%82%B9");
    }
}
