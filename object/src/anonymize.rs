//! Removal of patient and institution identifying information.
//!
//! Identifying text is replaced by a salted SHA-256 digest,
//! so that the same input and salt always produce the same replacement
//! and records of one patient can still be matched after anonymization.
use crate::DataSet;
use dcmcodec_core::{PrimitiveValue, Tag, VR};
use dcmcodec_dictionary_std::tags;
use sha2::{Digest, Sha256};
use std::fmt::Write as _;

/// The attributes replaced by [`DataSet::anonymize`].
pub const IDENTIFYING_TAGS: [Tag; 9] = [
    tags::PATIENT_NAME,
    tags::PATIENT_ID,
    tags::PATIENT_BIRTH_DATE,
    tags::PATIENT_AGE,
    tags::PATIENT_ADDRESS,
    tags::INSTITUTION_NAME,
    tags::INSTITUTION_ADDRESS,
    tags::REFERRING_PHYSICIAN_NAME,
    tags::REFERRING_PHYSICIAN_ADDRESS,
];

impl DataSet {
    /// Replace the identifying attributes at the root of the data set
    /// with one-way hashes of their text, mixed with `salt`.
    ///
    /// The digest is written in upper case hexadecimal,
    /// cut to the maximum length of the element's value representation.
    /// Dates and ages cannot hold a digest and are emptied instead.
    /// Empty and non-textual values are left as they are.
    ///
    /// Returns the number of elements changed.
    pub fn anonymize(&mut self, salt: &str) -> usize {
        let mut changed = 0;
        for tag in IDENTIFYING_TAGS {
            let element = match self.element_mut(tag) {
                Some(element) => element,
                None => continue,
            };
            let text = match element.value().primitive().and_then(PrimitiveValue::string) {
                Some(text) => text.trim_end_matches([' ', '\0']),
                None => continue,
            };
            if text.is_empty() {
                continue;
            }

            let replacement = match max_length(element.vr()) {
                Some(max) => {
                    let mut digest = salted_digest(salt, text);
                    digest.truncate(max);
                    PrimitiveValue::from(digest)
                }
                None => PrimitiveValue::Empty,
            };
            tracing::debug!(%tag, "Replacing identifying attribute");
            element.update_value(replacement);
            changed += 1;
        }
        changed
    }
}

/// How many characters of the digest fit the value representation,
/// or `None` if the value has a fixed format.
fn max_length(vr: VR) -> Option<usize> {
    match vr {
        VR::DA | VR::AS | VR::TM | VR::DT => None,
        VR::SH => Some(16),
        _ => Some(64),
    }
}

fn salted_digest(salt: &str, text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(text.as_bytes());
    let mut out = String::with_capacity(64);
    for byte in hasher.finalize() {
        // writing into a String does not fail
        let _ = write!(out, "{:02X}", byte);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmcodec_core::DataElement;

    fn text(tag: Tag, vr: VR, value: &str) -> DataElement {
        DataElement::new(tag, vr, value)
    }

    #[test]
    fn digests_are_salted_and_repeatable() {
        let a = salted_digest("pepper", "Doe^John");
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
        assert_eq!(a, salted_digest("pepper", "Doe^John"));
        assert_ne!(a, salted_digest("salt", "Doe^John"));
        assert_ne!(a, salted_digest("pepper", "Doe^Jane"));
    }

    #[test]
    fn identifying_attributes_are_replaced() {
        let mut obj = DataSet::new_empty();
        obj.put(text(tags::PATIENT_NAME, VR::PN, "Doe^John "));
        obj.put(text(tags::PATIENT_ID, VR::LO, "12345"));
        obj.put(text(tags::PATIENT_BIRTH_DATE, VR::DA, "19700101"));
        obj.put(text(tags::PATIENT_AGE, VR::AS, "054Y"));
        obj.put(text(tags::INSTITUTION_NAME, VR::LO, ""));
        obj.put(text(tags::MODALITY, VR::CS, "CT"));
        obj.put(DataElement::new(
            tags::REFERRING_PHYSICIAN_ADDRESS,
            VR::ST,
            PrimitiveValue::from(vec![1_u8, 2]),
        ));

        assert_eq!(obj.anonymize("pepper"), 4);

        let name = obj.element(tags::PATIENT_NAME).unwrap().to_str().unwrap();
        // trailing padding does not take part in the digest
        assert_eq!(name, salted_digest("pepper", "Doe^John"));
        let id = obj.element(tags::PATIENT_ID).unwrap().to_str().unwrap();
        assert_eq!(id, salted_digest("pepper", "12345"));

        for tag in [tags::PATIENT_BIRTH_DATE, tags::PATIENT_AGE] {
            let element = obj.element(tag).unwrap();
            assert_eq!(element.value().primitive(), Some(&PrimitiveValue::Empty));
        }
        // untouched: empty, not identifying, not text
        assert_eq!(obj.element(tags::INSTITUTION_NAME).unwrap().to_str().unwrap(), "");
        assert_eq!(obj.element(tags::MODALITY).unwrap().to_str().unwrap(), "CT");
        assert_eq!(
            obj.element(tags::REFERRING_PHYSICIAN_ADDRESS).unwrap().to_bytes().unwrap().as_ref(),
            &[1_u8, 2][..]
        );
    }

    #[test]
    fn short_strings_are_cut() {
        let mut obj = DataSet::new_empty();
        obj.put(text(tags::PATIENT_ID, VR::SH, "12345"));
        obj.anonymize("pepper");
        let id = obj.element(tags::PATIENT_ID).unwrap().to_str().unwrap();
        assert_eq!(id.len(), 16);
        assert!(salted_digest("pepper", "12345").starts_with(&*id));
    }
}
