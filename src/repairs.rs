//
// repairs.rs
// Dicom-Repair-rs
//
// The corrective rules applied to each DICOM data set before import.
//
// Thales Matheus Mendonça Santos - August 2026

use dicom::core::value::PrimitiveValue;
use dicom::core::{DataElement, Tag, VR};
use dicom::object::DefaultDicomObject;

use crate::dicom_access::{
    ElementAccess, BODY_PART_EXAMINED, INSTITUTION_ADDRESS, KVP, MODALITY, OTHER_PATIENT_IDS,
    RADIOPHARMACEUTICAL_INFORMATION_SEQUENCE,
};
use crate::status::StatusSink;

/// One corrective pass over a data set. Returning `None` rejects the data
/// set; no later rule or writer sees it.
pub type RepairRule = fn(DefaultDicomObject, &mut dyn StatusSink) -> Option<DefaultDicomObject>;

/// The active repair rules, in application order. The order is a contract:
/// modality correction must reject invalid data sets before the address rule
/// would touch them.
pub const REPAIR_METHODS: &[RepairRule] = &[
    fix_invalid_characters,
    fix_incorrect_modality,
    fix_incorrect_address,
];

const CHARACTER_CHECKED_ELEMENTS: &[(Tag, VR, &str)] = &[
    (BODY_PART_EXAMINED, VR::CS, "BodyPartExamined"),
    (OTHER_PATIENT_IDS, VR::LO, "OtherPatientIDs"),
];

/// Blanks text elements whose value opens with `/`, the lead byte of an
/// escape sequence for non-printable text.
///
/// Checks Body Part Examined (0018,0015) and Other Patient IDs (0010,1000).
/// Absent elements and elements without a text value are left alone.
pub fn fix_invalid_characters(
    mut dataset: DefaultDicomObject,
    status: &mut dyn StatusSink,
) -> Option<DefaultDicomObject> {
    for &(tag, fallback_vr, name) in CHARACTER_CHECKED_ELEMENTS {
        if !dataset.has_element(tag) {
            continue;
        }
        if let Some(value) = dataset.element_str(tag) {
            if value.starts_with('/') {
                status.report(&format!(
                    "Invalid Character found in element {}.\tReplaced with blank string.",
                    name
                ));
                replace_with_text(&mut dataset, tag, fallback_vr, "");
            }
        }
    }
    Some(dataset)
}

/// Aligns the Modality element (0008,0060) with the actual image type.
///
/// CT images are recognized by the presence of KVP (0018,0060), PET images by
/// the Radiopharmaceutical Information Sequence (0054,0016). A data set with
/// no Modality element at all is invalid and gets rejected.
pub fn fix_incorrect_modality(
    mut dataset: DefaultDicomObject,
    status: &mut dyn StatusSink,
) -> Option<DefaultDicomObject> {
    if !dataset.has_element(MODALITY) {
        status.report("Modality element not found. File not used.");
        return None;
    }

    // Both checks run against the same snapshot. When a data set carries both
    // markers, both corrections are reported and the PET write lands last.
    let modality = dataset.element_str(MODALITY).unwrap_or_default();

    if dataset.has_element(KVP) && !modality.contains("CT") {
        status.report(&format!(
            "Incorrect Modality found.\tModality changed from \"{}\" to \"CT\"",
            modality
        ));
        replace_with_text(&mut dataset, MODALITY, VR::CS, "CT");
    }

    if dataset.has_element(RADIOPHARMACEUTICAL_INFORMATION_SEQUENCE) && !modality.contains("PT") {
        status.report(&format!(
            "Incorrect Modality found.\tModality changed from \"{}\" to \"PT\"",
            modality
        ));
        replace_with_text(&mut dataset, MODALITY, VR::CS, "PT");
    }

    Some(dataset)
}

/// Blanks Institution Address (0008,0081) values naming the Mississauga
/// site, which the importer rejects when PET and CT addresses disagree.
///
/// The address is not critical information, so it is cleared rather than
/// reconciled across files.
pub fn fix_incorrect_address(
    mut dataset: DefaultDicomObject,
    status: &mut dyn StatusSink,
) -> Option<DefaultDicomObject> {
    if !dataset.has_element(INSTITUTION_ADDRESS) {
        return Some(dataset);
    }
    if let Some(address) = dataset.element_str(INSTITUTION_ADDRESS) {
        if address.to_ascii_lowercase().contains("mississauga") {
            status.report(&format!(
                "Mismatched Institution Addresses Suspected.\tAddress: \"{}\" Replaced with blank string.",
                shorten_address(&address)
            ));
            replace_with_text(&mut dataset, INSTITUTION_ADDRESS, VR::ST, "");
        }
    }
    Some(dataset)
}

// Log lines keep a shortened form of long addresses, cut at the first space
// after 25 characters.
fn shorten_address(address: &str) -> &str {
    match address.get(25..).and_then(|tail| tail.find(' ')) {
        Some(offset) => &address[..25 + offset],
        None => address,
    }
}

// Overwrites keep the stored VR of the element when one is present, so the
// rewrite stays consistent with the rest of the data set.
fn replace_with_text(dataset: &mut DefaultDicomObject, tag: Tag, fallback_vr: VR, value: &str) {
    let vr = dataset
        .element(tag)
        .map(|e| e.header().vr)
        .unwrap_or(fallback_vr);
    dataset.put(DataElement::new(tag, vr, PrimitiveValue::from(value)));
}
