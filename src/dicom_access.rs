use dicom::core::Tag;
use dicom::object::DefaultDicomObject;

// The attributes the repair rules and the output writer care about.
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
pub const INSTITUTION_ADDRESS: Tag = Tag(0x0008, 0x0081);
pub const OTHER_PATIENT_IDS: Tag = Tag(0x0010, 0x1000);
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
pub const KVP: Tag = Tag(0x0018, 0x0060);
pub const RADIOPHARMACEUTICAL_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0016);

/// Small helper trait to pull string values out of a loaded DICOM object.
pub trait ElementAccess {
    /// Text value of the element, with trailing padding stripped.
    /// `None` when the element is absent or its value is not text.
    fn element_str(&self, tag: Tag) -> Option<String>;
    fn has_element(&self, tag: Tag) -> bool;
}

impl ElementAccess for DefaultDicomObject {
    fn element_str(&self, tag: Tag) -> Option<String> {
        self.element(tag)
            .ok()
            .and_then(|e| e.to_str().ok())
            .map(|s| {
                // DICOM pads stored strings to even length with spaces or NULs.
                s.trim_end_matches(|c: char| c == '\0' || c == ' ')
                    .to_string()
            })
    }

    fn has_element(&self, tag: Tag) -> bool {
        self.element(tag).is_ok()
    }
}
