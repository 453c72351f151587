//! Module containing the file meta group handling of a data set.
//!
//! Before a data set is written as a file,
//! the mandatory attributes of group 0002 are filled in
//! from the rest of the data set.
use crate::{DataSet, IMPLEMENTATION_CLASS_UID, IMPLEMENTATION_VERSION_NAME};
use dcmcodec_core::value::sanitize_uid;
use dcmcodec_core::{DataElement, Tag, VR};
use dcmcodec_dictionary_std::tags;

impl DataSet {
    /// Fill in the file meta group for writing the data set as a file.
    ///
    /// The media storage SOP class and instance UIDs
    /// are copied from the SOP class and instance UIDs when absent,
    /// and the transfer syntax UID is set to the current transfer syntax.
    /// The file meta information version
    /// and the implementation identification are added when absent.
    pub fn fill_meta_group(&mut self) {
        if self.element_opt(tags::FILE_META_INFORMATION_VERSION).is_none() {
            self.put(DataElement::new(
                tags::FILE_META_INFORMATION_VERSION,
                VR::OB,
                vec![0x00_u8, 0x01],
            ));
        }

        self.copy_uid(tags::SOP_CLASS_UID, tags::MEDIA_STORAGE_SOP_CLASS_UID);
        self.copy_uid(tags::SOP_INSTANCE_UID, tags::MEDIA_STORAGE_SOP_INSTANCE_UID);

        let ts = self.transfer_syntax();
        self.put(DataElement::new(
            tags::TRANSFER_SYNTAX_UID,
            VR::UI,
            sanitize_uid(ts.uid()),
        ));

        if self.element_opt(tags::IMPLEMENTATION_CLASS_UID).is_none() {
            self.put(DataElement::new(
                tags::IMPLEMENTATION_CLASS_UID,
                VR::UI,
                IMPLEMENTATION_CLASS_UID,
            ));
        }
        if self.element_opt(tags::IMPLEMENTATION_VERSION_NAME).is_none() {
            self.put(DataElement::new(
                tags::IMPLEMENTATION_VERSION_NAME,
                VR::SH,
                IMPLEMENTATION_VERSION_NAME,
            ));
        }
    }

    fn copy_uid(&mut self, from: Tag, to: Tag) {
        if self.element_opt(to).is_some() {
            return;
        }
        let uid = match self.element_opt(from).map(|e| e.to_str()) {
            Some(Ok(uid)) => sanitize_uid(&uid),
            Some(Err(_)) | None => {
                tracing::warn!(tag = %from, "Cannot fill {} without a source UID", to);
                return;
            }
        };
        self.put(DataElement::new(to, VR::UI, uid));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmcodec_transfer_syntax_registry::entries;

    #[test]
    fn fills_missing_attributes() {
        let mut obj = DataSet::new_empty();
        obj.put(DataElement::new(tags::SOP_CLASS_UID, VR::UI, "1.2.840.10008.5.1.4.1.1.2\0"));
        obj.put(DataElement::new(tags::SOP_INSTANCE_UID, VR::UI, " 1.2.3.4. "));
        obj.set_transfer_syntax(&entries::EXPLICIT_VR_LITTLE_ENDIAN);
        obj.fill_meta_group();

        let text = |tag| obj.element(tag).unwrap().to_str().unwrap().into_owned();
        assert_eq!(text(tags::MEDIA_STORAGE_SOP_CLASS_UID), "1.2.840.10008.5.1.4.1.1.2");
        assert_eq!(text(tags::MEDIA_STORAGE_SOP_INSTANCE_UID), "1.2.3.4");
        assert_eq!(text(tags::TRANSFER_SYNTAX_UID), "1.2.840.10008.1.2.1");
        assert_eq!(text(tags::IMPLEMENTATION_CLASS_UID), IMPLEMENTATION_CLASS_UID);
        assert_eq!(text(tags::IMPLEMENTATION_VERSION_NAME), IMPLEMENTATION_VERSION_NAME);
        assert_eq!(
            obj.element(tags::FILE_META_INFORMATION_VERSION)
                .unwrap()
                .to_bytes()
                .unwrap()
                .as_ref(),
            &[0x00_u8, 0x01][..]
        );
    }

    #[test]
    fn keeps_existing_attributes() {
        let mut obj = DataSet::new_empty();
        obj.put(DataElement::new(tags::SOP_CLASS_UID, VR::UI, "1.2.3"));
        obj.put(DataElement::new(tags::MEDIA_STORAGE_SOP_CLASS_UID, VR::UI, "9.8.7"));
        obj.put(DataElement::new(tags::IMPLEMENTATION_VERSION_NAME, VR::SH, "OTHER"));
        obj.fill_meta_group();

        assert_eq!(
            obj.element(tags::MEDIA_STORAGE_SOP_CLASS_UID).unwrap().to_str().unwrap(),
            "9.8.7"
        );
        assert_eq!(
            obj.element(tags::IMPLEMENTATION_VERSION_NAME).unwrap().to_str().unwrap(),
            "OTHER"
        );
        // no SOP instance UID to copy from
        assert!(obj.element_opt(tags::MEDIA_STORAGE_SOP_INSTANCE_UID).is_none());
        assert_eq!(
            obj.element(tags::TRANSFER_SYNTAX_UID).unwrap().to_str().unwrap(),
            "1.2.840.10008.1.2"
        );
    }
}
