//! Data element tag declarations.
//!
//! Each constant maps an attribute keyword to its tag,
//! and the private entry table feeds the standard data dictionary.

use dcmcodec_core::dictionary::DataDictionaryEntryRef;
use dcmcodec_core::header::{Tag, VR};

/// File Meta Information Group Length UL `(0002,0000)`
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// File Meta Information Version OB `(0002,0001)`
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
/// Media Storage SOP Class UID UI `(0002,0002)`
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// Media Storage SOP Instance UID UI `(0002,0003)`
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// Transfer Syntax UID UI `(0002,0010)`
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// Implementation Class UID UI `(0002,0012)`
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// Implementation Version Name SH `(0002,0013)`
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
/// Source Application Entity Title AE `(0002,0016)`
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);
/// Sending Application Entity Title AE `(0002,0017)`
pub const SENDING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0017);
/// Receiving Application Entity Title AE `(0002,0018)`
pub const RECEIVING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0018);
/// Private Information Creator UID UI `(0002,0100)`
pub const PRIVATE_INFORMATION_CREATOR_UID: Tag = Tag(0x0002, 0x0100);
/// Private Information OB `(0002,0102)`
pub const PRIVATE_INFORMATION: Tag = Tag(0x0002, 0x0102);
/// File Set ID CS `(0004,1130)`
pub const FILE_SET_ID: Tag = Tag(0x0004, 0x1130);
/// Offset Of The First Directory Record Of The Root Directory Entity UL `(0004,1200)`
pub const OFFSET_OF_THE_FIRST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY: Tag = Tag(0x0004, 0x1200);
/// Offset Of The Last Directory Record Of The Root Directory Entity UL `(0004,1202)`
pub const OFFSET_OF_THE_LAST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY: Tag = Tag(0x0004, 0x1202);
/// File Set Consistency Flag US `(0004,1212)`
pub const FILE_SET_CONSISTENCY_FLAG: Tag = Tag(0x0004, 0x1212);
/// Directory Record Sequence SQ `(0004,1220)`
pub const DIRECTORY_RECORD_SEQUENCE: Tag = Tag(0x0004, 0x1220);
/// Offset Of The Next Directory Record UL `(0004,1400)`
pub const OFFSET_OF_THE_NEXT_DIRECTORY_RECORD: Tag = Tag(0x0004, 0x1400);
/// Record In Use Flag US `(0004,1410)`
pub const RECORD_IN_USE_FLAG: Tag = Tag(0x0004, 0x1410);
/// Offset Of Referenced Lower Level Directory Entity UL `(0004,1420)`
pub const OFFSET_OF_REFERENCED_LOWER_LEVEL_DIRECTORY_ENTITY: Tag = Tag(0x0004, 0x1420);
/// Directory Record Type CS `(0004,1430)`
pub const DIRECTORY_RECORD_TYPE: Tag = Tag(0x0004, 0x1430);
/// Referenced File ID CS `(0004,1500)`
pub const REFERENCED_FILE_ID: Tag = Tag(0x0004, 0x1500);
/// Referenced SOP Class UID In File UI `(0004,1510)`
pub const REFERENCED_SOP_CLASS_UID_IN_FILE: Tag = Tag(0x0004, 0x1510);
/// Referenced SOP Instance UID In File UI `(0004,1511)`
pub const REFERENCED_SOP_INSTANCE_UID_IN_FILE: Tag = Tag(0x0004, 0x1511);
/// Referenced Transfer Syntax UID In File UI `(0004,1512)`
pub const REFERENCED_TRANSFER_SYNTAX_UID_IN_FILE: Tag = Tag(0x0004, 0x1512);
/// Specific Character Set CS `(0008,0005)`
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
/// Language Code Sequence SQ `(0008,0006)`
pub const LANGUAGE_CODE_SEQUENCE: Tag = Tag(0x0008, 0x0006);
/// Image Type CS `(0008,0008)`
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// Instance Creation Date DA `(0008,0012)`
pub const INSTANCE_CREATION_DATE: Tag = Tag(0x0008, 0x0012);
/// Instance Creation Time TM `(0008,0013)`
pub const INSTANCE_CREATION_TIME: Tag = Tag(0x0008, 0x0013);
/// Instance Creator UID UI `(0008,0014)`
pub const INSTANCE_CREATOR_UID: Tag = Tag(0x0008, 0x0014);
/// Instance Coercion Date Time DT `(0008,0015)`
pub const INSTANCE_COERCION_DATE_TIME: Tag = Tag(0x0008, 0x0015);
/// SOP Class UID UI `(0008,0016)`
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// SOP Instance UID UI `(0008,0018)`
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// Related General SOP Class UID UI `(0008,001A)`
pub const RELATED_GENERAL_SOP_CLASS_UID: Tag = Tag(0x0008, 0x001A);
/// Original Specialized SOP Class UID UI `(0008,001B)`
pub const ORIGINAL_SPECIALIZED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x001B);
/// Study Date DA `(0008,0020)`
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// Series Date DA `(0008,0021)`
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// Acquisition Date DA `(0008,0022)`
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
/// Content Date DA `(0008,0023)`
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
/// Acquisition Date Time DT `(0008,002A)`
pub const ACQUISITION_DATE_TIME: Tag = Tag(0x0008, 0x002A);
/// Study Time TM `(0008,0030)`
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// Series Time TM `(0008,0031)`
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
/// Acquisition Time TM `(0008,0032)`
pub const ACQUISITION_TIME: Tag = Tag(0x0008, 0x0032);
/// Content Time TM `(0008,0033)`
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);
/// Accession Number SH `(0008,0050)`
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
/// Issuer Of Accession Number Sequence SQ `(0008,0051)`
pub const ISSUER_OF_ACCESSION_NUMBER_SEQUENCE: Tag = Tag(0x0008, 0x0051);
/// Query Retrieve Level CS `(0008,0052)`
pub const QUERY_RETRIEVE_LEVEL: Tag = Tag(0x0008, 0x0052);
/// Query Retrieve View CS `(0008,0053)`
pub const QUERY_RETRIEVE_VIEW: Tag = Tag(0x0008, 0x0053);
/// Retrieve AE Title AE `(0008,0054)`
pub const RETRIEVE_AE_TITLE: Tag = Tag(0x0008, 0x0054);
/// Station AE Title AE `(0008,0055)`
pub const STATION_AE_TITLE: Tag = Tag(0x0008, 0x0055);
/// Instance Availability CS `(0008,0056)`
pub const INSTANCE_AVAILABILITY: Tag = Tag(0x0008, 0x0056);
/// Failed SOP Instance UID List UI `(0008,0058)`
pub const FAILED_SOP_INSTANCE_UID_LIST: Tag = Tag(0x0008, 0x0058);
/// Modality CS `(0008,0060)`
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// Modalities In Study CS `(0008,0061)`
pub const MODALITIES_IN_STUDY: Tag = Tag(0x0008, 0x0061);
/// SOP Classes In Study UI `(0008,0062)`
pub const SOP_CLASSES_IN_STUDY: Tag = Tag(0x0008, 0x0062);
/// Conversion Type CS `(0008,0064)`
pub const CONVERSION_TYPE: Tag = Tag(0x0008, 0x0064);
/// Presentation Intent Type CS `(0008,0068)`
pub const PRESENTATION_INTENT_TYPE: Tag = Tag(0x0008, 0x0068);
/// Manufacturer LO `(0008,0070)`
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// Institution Name LO `(0008,0080)`
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// Institution Address ST `(0008,0081)`
pub const INSTITUTION_ADDRESS: Tag = Tag(0x0008, 0x0081);
/// Institution Code Sequence SQ `(0008,0082)`
pub const INSTITUTION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x0082);
/// Referring Physician Name PN `(0008,0090)`
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
/// Referring Physician Address ST `(0008,0092)`
pub const REFERRING_PHYSICIAN_ADDRESS: Tag = Tag(0x0008, 0x0092);
/// Referring Physician Telephone Numbers SH `(0008,0094)`
pub const REFERRING_PHYSICIAN_TELEPHONE_NUMBERS: Tag = Tag(0x0008, 0x0094);
/// Referring Physician Identification Sequence SQ `(0008,0096)`
pub const REFERRING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x0096);
/// Consulting Physician Name PN `(0008,009C)`
pub const CONSULTING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x009C);
/// Code Value SH `(0008,0100)`
pub const CODE_VALUE: Tag = Tag(0x0008, 0x0100);
/// Extended Code Value LO `(0008,0101)`
pub const EXTENDED_CODE_VALUE: Tag = Tag(0x0008, 0x0101);
/// Coding Scheme Designator SH `(0008,0102)`
pub const CODING_SCHEME_DESIGNATOR: Tag = Tag(0x0008, 0x0102);
/// Coding Scheme Version SH `(0008,0103)`
pub const CODING_SCHEME_VERSION: Tag = Tag(0x0008, 0x0103);
/// Code Meaning LO `(0008,0104)`
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);
/// Mapping Resource CS `(0008,0105)`
pub const MAPPING_RESOURCE: Tag = Tag(0x0008, 0x0105);
/// Context Group Version DT `(0008,0106)`
pub const CONTEXT_GROUP_VERSION: Tag = Tag(0x0008, 0x0106);
/// Context Identifier CS `(0008,010F)`
pub const CONTEXT_IDENTIFIER: Tag = Tag(0x0008, 0x010F);
/// Coding Scheme Identification Sequence SQ `(0008,0110)`
pub const CODING_SCHEME_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x0110);
/// Context UID UI `(0008,0117)`
pub const CONTEXT_UID: Tag = Tag(0x0008, 0x0117);
/// Mapping Resource UID UI `(0008,0118)`
pub const MAPPING_RESOURCE_UID: Tag = Tag(0x0008, 0x0118);
/// Long Code Value UC `(0008,0119)`
pub const LONG_CODE_VALUE: Tag = Tag(0x0008, 0x0119);
/// URN Code Value UR `(0008,0120)`
pub const URN_CODE_VALUE: Tag = Tag(0x0008, 0x0120);
/// Timezone Offset From UTC SH `(0008,0201)`
pub const TIMEZONE_OFFSET_FROM_UTC: Tag = Tag(0x0008, 0x0201);
/// Station Name SH `(0008,1010)`
pub const STATION_NAME: Tag = Tag(0x0008, 0x1010);
/// Study Description LO `(0008,1030)`
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
/// Procedure Code Sequence SQ `(0008,1032)`
pub const PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0008, 0x1032);
/// Series Description LO `(0008,103E)`
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
/// Series Description Code Sequence SQ `(0008,103F)`
pub const SERIES_DESCRIPTION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x103F);
/// Institutional Department Name LO `(0008,1040)`
pub const INSTITUTIONAL_DEPARTMENT_NAME: Tag = Tag(0x0008, 0x1040);
/// Physicians Of Record PN `(0008,1048)`
pub const PHYSICIANS_OF_RECORD: Tag = Tag(0x0008, 0x1048);
/// Physicians Of Record Identification Sequence SQ `(0008,1049)`
pub const PHYSICIANS_OF_RECORD_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x1049);
/// Performing Physician Name PN `(0008,1050)`
pub const PERFORMING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x1050);
/// Performing Physician Identification Sequence SQ `(0008,1052)`
pub const PERFORMING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x1052);
/// Name Of Physicians Reading Study PN `(0008,1060)`
pub const NAME_OF_PHYSICIANS_READING_STUDY: Tag = Tag(0x0008, 0x1060);
/// Physicians Reading Study Identification Sequence SQ `(0008,1062)`
pub const PHYSICIANS_READING_STUDY_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x1062);
/// Operators Name PN `(0008,1070)`
pub const OPERATORS_NAME: Tag = Tag(0x0008, 0x1070);
/// Operator Identification Sequence SQ `(0008,1072)`
pub const OPERATOR_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x1072);
/// Admitting Diagnoses Description LO `(0008,1080)`
pub const ADMITTING_DIAGNOSES_DESCRIPTION: Tag = Tag(0x0008, 0x1080);
/// Admitting Diagnoses Code Sequence SQ `(0008,1084)`
pub const ADMITTING_DIAGNOSES_CODE_SEQUENCE: Tag = Tag(0x0008, 0x1084);
/// Manufacturer Model Name LO `(0008,1090)`
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);
/// Referenced Study Sequence SQ `(0008,1110)`
pub const REFERENCED_STUDY_SEQUENCE: Tag = Tag(0x0008, 0x1110);
/// Referenced Performed Procedure Step Sequence SQ `(0008,1111)`
pub const REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0008, 0x1111);
/// Referenced Series Sequence SQ `(0008,1115)`
pub const REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1115);
/// Referenced Patient Sequence SQ `(0008,1120)`
pub const REFERENCED_PATIENT_SEQUENCE: Tag = Tag(0x0008, 0x1120);
/// Referenced Visit Sequence SQ `(0008,1125)`
pub const REFERENCED_VISIT_SEQUENCE: Tag = Tag(0x0008, 0x1125);
/// Referenced Image Sequence SQ `(0008,1140)`
pub const REFERENCED_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x1140);
/// Referenced SOP Class UID UI `(0008,1150)`
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);
/// Referenced SOP Instance UID UI `(0008,1155)`
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
/// Referenced Frame Number IS `(0008,1160)`
pub const REFERENCED_FRAME_NUMBER: Tag = Tag(0x0008, 0x1160);
/// Transaction UID UI `(0008,1195)`
pub const TRANSACTION_UID: Tag = Tag(0x0008, 0x1195);
/// Referenced SOP Sequence SQ `(0008,1199)`
pub const REFERENCED_SOP_SEQUENCE: Tag = Tag(0x0008, 0x1199);
/// Related Series Sequence SQ `(0008,1250)`
pub const RELATED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1250);
/// Derivation Description ST `(0008,2111)`
pub const DERIVATION_DESCRIPTION: Tag = Tag(0x0008, 0x2111);
/// Source Image Sequence SQ `(0008,2112)`
pub const SOURCE_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x2112);
/// Stage Name SH `(0008,2120)`
pub const STAGE_NAME: Tag = Tag(0x0008, 0x2120);
/// Stage Number IS `(0008,2122)`
pub const STAGE_NUMBER: Tag = Tag(0x0008, 0x2122);
/// Number Of Stages IS `(0008,2124)`
pub const NUMBER_OF_STAGES: Tag = Tag(0x0008, 0x2124);
/// View Number IS `(0008,2128)`
pub const VIEW_NUMBER: Tag = Tag(0x0008, 0x2128);
/// Anatomic Region Sequence SQ `(0008,2218)`
pub const ANATOMIC_REGION_SEQUENCE: Tag = Tag(0x0008, 0x2218);
/// Primary Anatomic Structure Sequence SQ `(0008,2228)`
pub const PRIMARY_ANATOMIC_STRUCTURE_SEQUENCE: Tag = Tag(0x0008, 0x2228);
/// Irradiation Event UID UI `(0008,3010)`
pub const IRRADIATION_EVENT_UID: Tag = Tag(0x0008, 0x3010);
/// Frame Type CS `(0008,9007)`
pub const FRAME_TYPE: Tag = Tag(0x0008, 0x9007);
/// Referenced Image Evidence Sequence SQ `(0008,9092)`
pub const REFERENCED_IMAGE_EVIDENCE_SEQUENCE: Tag = Tag(0x0008, 0x9092);
/// Referenced Raw Data Sequence SQ `(0008,9121)`
pub const REFERENCED_RAW_DATA_SEQUENCE: Tag = Tag(0x0008, 0x9121);
/// Creator Version UID UI `(0008,9123)`
pub const CREATOR_VERSION_UID: Tag = Tag(0x0008, 0x9123);
/// Derivation Image Sequence SQ `(0008,9124)`
pub const DERIVATION_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x9124);
/// Pixel Presentation CS `(0008,9205)`
pub const PIXEL_PRESENTATION: Tag = Tag(0x0008, 0x9205);
/// Volumetric Properties CS `(0008,9206)`
pub const VOLUMETRIC_PROPERTIES: Tag = Tag(0x0008, 0x9206);
/// Volume Based Calculation Technique CS `(0008,9207)`
pub const VOLUME_BASED_CALCULATION_TECHNIQUE: Tag = Tag(0x0008, 0x9207);
/// Complex Image Component CS `(0008,9208)`
pub const COMPLEX_IMAGE_COMPONENT: Tag = Tag(0x0008, 0x9208);
/// Acquisition Contrast CS `(0008,9209)`
pub const ACQUISITION_CONTRAST: Tag = Tag(0x0008, 0x9209);
/// Derivation Code Sequence SQ `(0008,9215)`
pub const DERIVATION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x9215);
/// Patient Name PN `(0010,0010)`
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// Patient ID LO `(0010,0020)`
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// Issuer Of Patient ID LO `(0010,0021)`
pub const ISSUER_OF_PATIENT_ID: Tag = Tag(0x0010, 0x0021);
/// Type Of Patient ID CS `(0010,0022)`
pub const TYPE_OF_PATIENT_ID: Tag = Tag(0x0010, 0x0022);
/// Issuer Of Patient ID Qualifiers Sequence SQ `(0010,0024)`
pub const ISSUER_OF_PATIENT_ID_QUALIFIERS_SEQUENCE: Tag = Tag(0x0010, 0x0024);
/// Patient Birth Date DA `(0010,0030)`
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// Patient Birth Time TM `(0010,0032)`
pub const PATIENT_BIRTH_TIME: Tag = Tag(0x0010, 0x0032);
/// Patient Sex CS `(0010,0040)`
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// Patient Insurance Plan Code Sequence SQ `(0010,0050)`
pub const PATIENT_INSURANCE_PLAN_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0050);
/// Patient Primary Language Code Sequence SQ `(0010,0101)`
pub const PATIENT_PRIMARY_LANGUAGE_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0101);
/// Quality Control Subject CS `(0010,0200)`
pub const QUALITY_CONTROL_SUBJECT: Tag = Tag(0x0010, 0x0200);
/// Other Patient I Ds LO `(0010,1000)`
pub const OTHER_PATIENT_I_DS: Tag = Tag(0x0010, 0x1000);
/// Other Patient Names PN `(0010,1001)`
pub const OTHER_PATIENT_NAMES: Tag = Tag(0x0010, 0x1001);
/// Other Patient I Ds Sequence SQ `(0010,1002)`
pub const OTHER_PATIENT_I_DS_SEQUENCE: Tag = Tag(0x0010, 0x1002);
/// Patient Birth Name PN `(0010,1005)`
pub const PATIENT_BIRTH_NAME: Tag = Tag(0x0010, 0x1005);
/// Patient Age AS `(0010,1010)`
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
/// Patient Size DS `(0010,1020)`
pub const PATIENT_SIZE: Tag = Tag(0x0010, 0x1020);
/// Patient Size Code Sequence SQ `(0010,1021)`
pub const PATIENT_SIZE_CODE_SEQUENCE: Tag = Tag(0x0010, 0x1021);
/// Patient Weight DS `(0010,1030)`
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);
/// Patient Address LO `(0010,1040)`
pub const PATIENT_ADDRESS: Tag = Tag(0x0010, 0x1040);
/// Patient Mother Birth Name PN `(0010,1060)`
pub const PATIENT_MOTHER_BIRTH_NAME: Tag = Tag(0x0010, 0x1060);
/// Military Rank LO `(0010,1080)`
pub const MILITARY_RANK: Tag = Tag(0x0010, 0x1080);
/// Branch Of Service LO `(0010,1081)`
pub const BRANCH_OF_SERVICE: Tag = Tag(0x0010, 0x1081);
/// Medical Record Locator LO `(0010,1090)`
pub const MEDICAL_RECORD_LOCATOR: Tag = Tag(0x0010, 0x1090);
/// Medical Alerts LO `(0010,2000)`
pub const MEDICAL_ALERTS: Tag = Tag(0x0010, 0x2000);
/// Allergies LO `(0010,2110)`
pub const ALLERGIES: Tag = Tag(0x0010, 0x2110);
/// Country Of Residence LO `(0010,2150)`
pub const COUNTRY_OF_RESIDENCE: Tag = Tag(0x0010, 0x2150);
/// Region Of Residence LO `(0010,2152)`
pub const REGION_OF_RESIDENCE: Tag = Tag(0x0010, 0x2152);
/// Patient Telephone Numbers SH `(0010,2154)`
pub const PATIENT_TELEPHONE_NUMBERS: Tag = Tag(0x0010, 0x2154);
/// Ethnic Group SH `(0010,2160)`
pub const ETHNIC_GROUP: Tag = Tag(0x0010, 0x2160);
/// Occupation SH `(0010,2180)`
pub const OCCUPATION: Tag = Tag(0x0010, 0x2180);
/// Smoking Status CS `(0010,21A0)`
pub const SMOKING_STATUS: Tag = Tag(0x0010, 0x21A0);
/// Additional Patient History LT `(0010,21B0)`
pub const ADDITIONAL_PATIENT_HISTORY: Tag = Tag(0x0010, 0x21B0);
/// Pregnancy Status US `(0010,21C0)`
pub const PREGNANCY_STATUS: Tag = Tag(0x0010, 0x21C0);
/// Last Menstrual Date DA `(0010,21D0)`
pub const LAST_MENSTRUAL_DATE: Tag = Tag(0x0010, 0x21D0);
/// Patient Religious Preference LO `(0010,21F0)`
pub const PATIENT_RELIGIOUS_PREFERENCE: Tag = Tag(0x0010, 0x21F0);
/// Patient Species Description LO `(0010,2201)`
pub const PATIENT_SPECIES_DESCRIPTION: Tag = Tag(0x0010, 0x2201);
/// Patient Sex Neutered CS `(0010,2203)`
pub const PATIENT_SEX_NEUTERED: Tag = Tag(0x0010, 0x2203);
/// Patient Breed Description LO `(0010,2292)`
pub const PATIENT_BREED_DESCRIPTION: Tag = Tag(0x0010, 0x2292);
/// Responsible Person PN `(0010,2297)`
pub const RESPONSIBLE_PERSON: Tag = Tag(0x0010, 0x2297);
/// Responsible Person Role CS `(0010,2298)`
pub const RESPONSIBLE_PERSON_ROLE: Tag = Tag(0x0010, 0x2298);
/// Responsible Organization LO `(0010,2299)`
pub const RESPONSIBLE_ORGANIZATION: Tag = Tag(0x0010, 0x2299);
/// Patient Comments LT `(0010,4000)`
pub const PATIENT_COMMENTS: Tag = Tag(0x0010, 0x4000);
/// Clinical Trial Sponsor Name LO `(0012,0010)`
pub const CLINICAL_TRIAL_SPONSOR_NAME: Tag = Tag(0x0012, 0x0010);
/// Clinical Trial Protocol ID LO `(0012,0020)`
pub const CLINICAL_TRIAL_PROTOCOL_ID: Tag = Tag(0x0012, 0x0020);
/// Clinical Trial Protocol Name LO `(0012,0021)`
pub const CLINICAL_TRIAL_PROTOCOL_NAME: Tag = Tag(0x0012, 0x0021);
/// Clinical Trial Site ID LO `(0012,0030)`
pub const CLINICAL_TRIAL_SITE_ID: Tag = Tag(0x0012, 0x0030);
/// Clinical Trial Site Name LO `(0012,0031)`
pub const CLINICAL_TRIAL_SITE_NAME: Tag = Tag(0x0012, 0x0031);
/// Clinical Trial Subject ID LO `(0012,0040)`
pub const CLINICAL_TRIAL_SUBJECT_ID: Tag = Tag(0x0012, 0x0040);
/// Clinical Trial Subject Reading ID LO `(0012,0042)`
pub const CLINICAL_TRIAL_SUBJECT_READING_ID: Tag = Tag(0x0012, 0x0042);
/// Clinical Trial Time Point ID LO `(0012,0050)`
pub const CLINICAL_TRIAL_TIME_POINT_ID: Tag = Tag(0x0012, 0x0050);
/// Patient Identity Removed CS `(0012,0062)`
pub const PATIENT_IDENTITY_REMOVED: Tag = Tag(0x0012, 0x0062);
/// Deidentification Method LO `(0012,0063)`
pub const DEIDENTIFICATION_METHOD: Tag = Tag(0x0012, 0x0063);
/// Deidentification Method Code Sequence SQ `(0012,0064)`
pub const DEIDENTIFICATION_METHOD_CODE_SEQUENCE: Tag = Tag(0x0012, 0x0064);
/// Contrast Bolus Agent LO `(0018,0010)`
pub const CONTRAST_BOLUS_AGENT: Tag = Tag(0x0018, 0x0010);
/// Contrast Bolus Agent Sequence SQ `(0018,0012)`
pub const CONTRAST_BOLUS_AGENT_SEQUENCE: Tag = Tag(0x0018, 0x0012);
/// Body Part Examined CS `(0018,0015)`
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
/// Scanning Sequence CS `(0018,0020)`
pub const SCANNING_SEQUENCE: Tag = Tag(0x0018, 0x0020);
/// Sequence Variant CS `(0018,0021)`
pub const SEQUENCE_VARIANT: Tag = Tag(0x0018, 0x0021);
/// Scan Options CS `(0018,0022)`
pub const SCAN_OPTIONS: Tag = Tag(0x0018, 0x0022);
/// MR Acquisition Type CS `(0018,0023)`
pub const MR_ACQUISITION_TYPE: Tag = Tag(0x0018, 0x0023);
/// Sequence Name SH `(0018,0024)`
pub const SEQUENCE_NAME: Tag = Tag(0x0018, 0x0024);
/// Angio Flag CS `(0018,0025)`
pub const ANGIO_FLAG: Tag = Tag(0x0018, 0x0025);
/// Intervention Drug Information Sequence SQ `(0018,0026)`
pub const INTERVENTION_DRUG_INFORMATION_SEQUENCE: Tag = Tag(0x0018, 0x0026);
/// Slice Thickness DS `(0018,0050)`
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// KVP DS `(0018,0060)`
pub const KVP: Tag = Tag(0x0018, 0x0060);
/// Counts Accumulated IS `(0018,0070)`
pub const COUNTS_ACCUMULATED: Tag = Tag(0x0018, 0x0070);
/// Acquisition Termination Condition CS `(0018,0071)`
pub const ACQUISITION_TERMINATION_CONDITION: Tag = Tag(0x0018, 0x0071);
/// Effective Duration DS `(0018,0072)`
pub const EFFECTIVE_DURATION: Tag = Tag(0x0018, 0x0072);
/// Acquisition Start Condition CS `(0018,0073)`
pub const ACQUISITION_START_CONDITION: Tag = Tag(0x0018, 0x0073);
/// Acquisition Start Condition Data IS `(0018,0074)`
pub const ACQUISITION_START_CONDITION_DATA: Tag = Tag(0x0018, 0x0074);
/// Acquisition Termination Condition Data IS `(0018,0075)`
pub const ACQUISITION_TERMINATION_CONDITION_DATA: Tag = Tag(0x0018, 0x0075);
/// Repetition Time DS `(0018,0080)`
pub const REPETITION_TIME: Tag = Tag(0x0018, 0x0080);
/// Echo Time DS `(0018,0081)`
pub const ECHO_TIME: Tag = Tag(0x0018, 0x0081);
/// Inversion Time DS `(0018,0082)`
pub const INVERSION_TIME: Tag = Tag(0x0018, 0x0082);
/// Number Of Averages DS `(0018,0083)`
pub const NUMBER_OF_AVERAGES: Tag = Tag(0x0018, 0x0083);
/// Imaging Frequency DS `(0018,0084)`
pub const IMAGING_FREQUENCY: Tag = Tag(0x0018, 0x0084);
/// Imaged Nucleus SH `(0018,0085)`
pub const IMAGED_NUCLEUS: Tag = Tag(0x0018, 0x0085);
/// Echo Numbers IS `(0018,0086)`
pub const ECHO_NUMBERS: Tag = Tag(0x0018, 0x0086);
/// Magnetic Field Strength DS `(0018,0087)`
pub const MAGNETIC_FIELD_STRENGTH: Tag = Tag(0x0018, 0x0087);
/// Spacing Between Slices DS `(0018,0088)`
pub const SPACING_BETWEEN_SLICES: Tag = Tag(0x0018, 0x0088);
/// Number Of Phase Encoding Steps IS `(0018,0089)`
pub const NUMBER_OF_PHASE_ENCODING_STEPS: Tag = Tag(0x0018, 0x0089);
/// Data Collection Diameter DS `(0018,0090)`
pub const DATA_COLLECTION_DIAMETER: Tag = Tag(0x0018, 0x0090);
/// Echo Train Length IS `(0018,0091)`
pub const ECHO_TRAIN_LENGTH: Tag = Tag(0x0018, 0x0091);
/// Percent Sampling DS `(0018,0093)`
pub const PERCENT_SAMPLING: Tag = Tag(0x0018, 0x0093);
/// Percent Phase Field Of View DS `(0018,0094)`
pub const PERCENT_PHASE_FIELD_OF_VIEW: Tag = Tag(0x0018, 0x0094);
/// Pixel Bandwidth DS `(0018,0095)`
pub const PIXEL_BANDWIDTH: Tag = Tag(0x0018, 0x0095);
/// Device Serial Number LO `(0018,1000)`
pub const DEVICE_SERIAL_NUMBER: Tag = Tag(0x0018, 0x1000);
/// Device UID UI `(0018,1002)`
pub const DEVICE_UID: Tag = Tag(0x0018, 0x1002);
/// Plate ID LO `(0018,1004)`
pub const PLATE_ID: Tag = Tag(0x0018, 0x1004);
/// Secondary Capture Device ID LO `(0018,1010)`
pub const SECONDARY_CAPTURE_DEVICE_ID: Tag = Tag(0x0018, 0x1010);
/// Date Of Secondary Capture DA `(0018,1012)`
pub const DATE_OF_SECONDARY_CAPTURE: Tag = Tag(0x0018, 0x1012);
/// Time Of Secondary Capture TM `(0018,1014)`
pub const TIME_OF_SECONDARY_CAPTURE: Tag = Tag(0x0018, 0x1014);
/// Secondary Capture Device Manufacturer LO `(0018,1016)`
pub const SECONDARY_CAPTURE_DEVICE_MANUFACTURER: Tag = Tag(0x0018, 0x1016);
/// Secondary Capture Device Manufacturer Model Name LO `(0018,1018)`
pub const SECONDARY_CAPTURE_DEVICE_MANUFACTURER_MODEL_NAME: Tag = Tag(0x0018, 0x1018);
/// Secondary Capture Device Software Versions LO `(0018,1019)`
pub const SECONDARY_CAPTURE_DEVICE_SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1019);
/// Software Versions LO `(0018,1020)`
pub const SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1020);
/// Video Image Format Acquired SH `(0018,1022)`
pub const VIDEO_IMAGE_FORMAT_ACQUIRED: Tag = Tag(0x0018, 0x1022);
/// Digital Image Format Acquired LO `(0018,1023)`
pub const DIGITAL_IMAGE_FORMAT_ACQUIRED: Tag = Tag(0x0018, 0x1023);
/// Protocol Name LO `(0018,1030)`
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);
/// Contrast Bolus Route LO `(0018,1040)`
pub const CONTRAST_BOLUS_ROUTE: Tag = Tag(0x0018, 0x1040);
/// Contrast Bolus Volume DS `(0018,1041)`
pub const CONTRAST_BOLUS_VOLUME: Tag = Tag(0x0018, 0x1041);
/// Contrast Bolus Start Time TM `(0018,1042)`
pub const CONTRAST_BOLUS_START_TIME: Tag = Tag(0x0018, 0x1042);
/// Contrast Bolus Stop Time TM `(0018,1043)`
pub const CONTRAST_BOLUS_STOP_TIME: Tag = Tag(0x0018, 0x1043);
/// Contrast Bolus Total Dose DS `(0018,1044)`
pub const CONTRAST_BOLUS_TOTAL_DOSE: Tag = Tag(0x0018, 0x1044);
/// Spatial Resolution DS `(0018,1050)`
pub const SPATIAL_RESOLUTION: Tag = Tag(0x0018, 0x1050);
/// Trigger Time DS `(0018,1060)`
pub const TRIGGER_TIME: Tag = Tag(0x0018, 0x1060);
/// Nominal Interval IS `(0018,1062)`
pub const NOMINAL_INTERVAL: Tag = Tag(0x0018, 0x1062);
/// Frame Time DS `(0018,1063)`
pub const FRAME_TIME: Tag = Tag(0x0018, 0x1063);
/// Frame Time Vector DS `(0018,1065)`
pub const FRAME_TIME_VECTOR: Tag = Tag(0x0018, 0x1065);
/// Frame Delay DS `(0018,1066)`
pub const FRAME_DELAY: Tag = Tag(0x0018, 0x1066);
/// Radiopharmaceutical Route LO `(0018,1070)`
pub const RADIOPHARMACEUTICAL_ROUTE: Tag = Tag(0x0018, 0x1070);
/// Radiopharmaceutical Start Time TM `(0018,1072)`
pub const RADIOPHARMACEUTICAL_START_TIME: Tag = Tag(0x0018, 0x1072);
/// Radionuclide Total Dose DS `(0018,1074)`
pub const RADIONUCLIDE_TOTAL_DOSE: Tag = Tag(0x0018, 0x1074);
/// Radionuclide Half Life DS `(0018,1075)`
pub const RADIONUCLIDE_HALF_LIFE: Tag = Tag(0x0018, 0x1075);
/// Radionuclide Positron Fraction DS `(0018,1076)`
pub const RADIONUCLIDE_POSITRON_FRACTION: Tag = Tag(0x0018, 0x1076);
/// Low RR Value IS `(0018,1081)`
pub const LOW_RR_VALUE: Tag = Tag(0x0018, 0x1081);
/// High RR Value IS `(0018,1082)`
pub const HIGH_RR_VALUE: Tag = Tag(0x0018, 0x1082);
/// Intervals Acquired IS `(0018,1083)`
pub const INTERVALS_ACQUIRED: Tag = Tag(0x0018, 0x1083);
/// Intervals Rejected IS `(0018,1084)`
pub const INTERVALS_REJECTED: Tag = Tag(0x0018, 0x1084);
/// Heart Rate IS `(0018,1088)`
pub const HEART_RATE: Tag = Tag(0x0018, 0x1088);
/// Reconstruction Diameter DS `(0018,1100)`
pub const RECONSTRUCTION_DIAMETER: Tag = Tag(0x0018, 0x1100);
/// Distance Source To Detector DS `(0018,1110)`
pub const DISTANCE_SOURCE_TO_DETECTOR: Tag = Tag(0x0018, 0x1110);
/// Distance Source To Patient DS `(0018,1111)`
pub const DISTANCE_SOURCE_TO_PATIENT: Tag = Tag(0x0018, 0x1111);
/// Estimated Radiographic Magnification Factor DS `(0018,1114)`
pub const ESTIMATED_RADIOGRAPHIC_MAGNIFICATION_FACTOR: Tag = Tag(0x0018, 0x1114);
/// Gantry Detector Tilt DS `(0018,1120)`
pub const GANTRY_DETECTOR_TILT: Tag = Tag(0x0018, 0x1120);
/// Gantry Detector Slew DS `(0018,1121)`
pub const GANTRY_DETECTOR_SLEW: Tag = Tag(0x0018, 0x1121);
/// Table Height DS `(0018,1130)`
pub const TABLE_HEIGHT: Tag = Tag(0x0018, 0x1130);
/// Table Traverse DS `(0018,1131)`
pub const TABLE_TRAVERSE: Tag = Tag(0x0018, 0x1131);
/// Table Motion CS `(0018,1134)`
pub const TABLE_MOTION: Tag = Tag(0x0018, 0x1134);
/// Table Vertical Increment DS `(0018,1135)`
pub const TABLE_VERTICAL_INCREMENT: Tag = Tag(0x0018, 0x1135);
/// Table Lateral Increment DS `(0018,1136)`
pub const TABLE_LATERAL_INCREMENT: Tag = Tag(0x0018, 0x1136);
/// Table Longitudinal Increment DS `(0018,1137)`
pub const TABLE_LONGITUDINAL_INCREMENT: Tag = Tag(0x0018, 0x1137);
/// Table Angle DS `(0018,1138)`
pub const TABLE_ANGLE: Tag = Tag(0x0018, 0x1138);
/// Rotation Direction CS `(0018,1140)`
pub const ROTATION_DIRECTION: Tag = Tag(0x0018, 0x1140);
/// Radial Position DS `(0018,1142)`
pub const RADIAL_POSITION: Tag = Tag(0x0018, 0x1142);
/// Scan Arc DS `(0018,1143)`
pub const SCAN_ARC: Tag = Tag(0x0018, 0x1143);
/// Angular Step DS `(0018,1144)`
pub const ANGULAR_STEP: Tag = Tag(0x0018, 0x1144);
/// Center Of Rotation Offset DS `(0018,1145)`
pub const CENTER_OF_ROTATION_OFFSET: Tag = Tag(0x0018, 0x1145);
/// Field Of View Shape CS `(0018,1147)`
pub const FIELD_OF_VIEW_SHAPE: Tag = Tag(0x0018, 0x1147);
/// Field Of View Dimensions IS `(0018,1149)`
pub const FIELD_OF_VIEW_DIMENSIONS: Tag = Tag(0x0018, 0x1149);
/// Exposure Time IS `(0018,1150)`
pub const EXPOSURE_TIME: Tag = Tag(0x0018, 0x1150);
/// X Ray Tube Current IS `(0018,1151)`
pub const X_RAY_TUBE_CURRENT: Tag = Tag(0x0018, 0x1151);
/// Exposure IS `(0018,1152)`
pub const EXPOSURE: Tag = Tag(0x0018, 0x1152);
/// Exposure Inu As IS `(0018,1153)`
pub const EXPOSURE_INU_AS: Tag = Tag(0x0018, 0x1153);
/// Average Pulse Width DS `(0018,1154)`
pub const AVERAGE_PULSE_WIDTH: Tag = Tag(0x0018, 0x1154);
/// Radiation Setting CS `(0018,1155)`
pub const RADIATION_SETTING: Tag = Tag(0x0018, 0x1155);
/// Rectification Type CS `(0018,1156)`
pub const RECTIFICATION_TYPE: Tag = Tag(0x0018, 0x1156);
/// Radiation Mode CS `(0018,115A)`
pub const RADIATION_MODE: Tag = Tag(0x0018, 0x115A);
/// Image And Fluoroscopy Area Dose Product DS `(0018,115E)`
pub const IMAGE_AND_FLUOROSCOPY_AREA_DOSE_PRODUCT: Tag = Tag(0x0018, 0x115E);
/// Filter Type SH `(0018,1160)`
pub const FILTER_TYPE: Tag = Tag(0x0018, 0x1160);
/// Type Of Filters LO `(0018,1161)`
pub const TYPE_OF_FILTERS: Tag = Tag(0x0018, 0x1161);
/// Intensifier Size DS `(0018,1162)`
pub const INTENSIFIER_SIZE: Tag = Tag(0x0018, 0x1162);
/// Imager Pixel Spacing DS `(0018,1164)`
pub const IMAGER_PIXEL_SPACING: Tag = Tag(0x0018, 0x1164);
/// Grid CS `(0018,1166)`
pub const GRID: Tag = Tag(0x0018, 0x1166);
/// Generator Power IS `(0018,1170)`
pub const GENERATOR_POWER: Tag = Tag(0x0018, 0x1170);
/// Collimator Grid Name SH `(0018,1180)`
pub const COLLIMATOR_GRID_NAME: Tag = Tag(0x0018, 0x1180);
/// Collimator Type CS `(0018,1181)`
pub const COLLIMATOR_TYPE: Tag = Tag(0x0018, 0x1181);
/// Focal Spots DS `(0018,1190)`
pub const FOCAL_SPOTS: Tag = Tag(0x0018, 0x1190);
/// Anode Target Material CS `(0018,1191)`
pub const ANODE_TARGET_MATERIAL: Tag = Tag(0x0018, 0x1191);
/// Body Part Thickness DS `(0018,11A0)`
pub const BODY_PART_THICKNESS: Tag = Tag(0x0018, 0x11A0);
/// Compression Force DS `(0018,11A2)`
pub const COMPRESSION_FORCE: Tag = Tag(0x0018, 0x11A2);
/// Date Of Last Calibration DA `(0018,1200)`
pub const DATE_OF_LAST_CALIBRATION: Tag = Tag(0x0018, 0x1200);
/// Time Of Last Calibration TM `(0018,1201)`
pub const TIME_OF_LAST_CALIBRATION: Tag = Tag(0x0018, 0x1201);
/// Convolution Kernel SH `(0018,1210)`
pub const CONVOLUTION_KERNEL: Tag = Tag(0x0018, 0x1210);
/// Actual Frame Duration IS `(0018,1242)`
pub const ACTUAL_FRAME_DURATION: Tag = Tag(0x0018, 0x1242);
/// Count Rate IS `(0018,1243)`
pub const COUNT_RATE: Tag = Tag(0x0018, 0x1243);
/// Receive Coil Name SH `(0018,1250)`
pub const RECEIVE_COIL_NAME: Tag = Tag(0x0018, 0x1250);
/// Transmit Coil Name SH `(0018,1251)`
pub const TRANSMIT_COIL_NAME: Tag = Tag(0x0018, 0x1251);
/// Plate Type SH `(0018,1260)`
pub const PLATE_TYPE: Tag = Tag(0x0018, 0x1260);
/// Phosphor Type LO `(0018,1261)`
pub const PHOSPHOR_TYPE: Tag = Tag(0x0018, 0x1261);
/// Scan Velocity DS `(0018,1300)`
pub const SCAN_VELOCITY: Tag = Tag(0x0018, 0x1300);
/// Whole Body Technique CS `(0018,1301)`
pub const WHOLE_BODY_TECHNIQUE: Tag = Tag(0x0018, 0x1301);
/// Scan Length IS `(0018,1302)`
pub const SCAN_LENGTH: Tag = Tag(0x0018, 0x1302);
/// Acquisition Matrix US `(0018,1310)`
pub const ACQUISITION_MATRIX: Tag = Tag(0x0018, 0x1310);
/// In Plane Phase Encoding Direction CS `(0018,1312)`
pub const IN_PLANE_PHASE_ENCODING_DIRECTION: Tag = Tag(0x0018, 0x1312);
/// Flip Angle DS `(0018,1314)`
pub const FLIP_ANGLE: Tag = Tag(0x0018, 0x1314);
/// Variable Flip Angle Flag CS `(0018,1315)`
pub const VARIABLE_FLIP_ANGLE_FLAG: Tag = Tag(0x0018, 0x1315);
/// SAR DS `(0018,1316)`
pub const SAR: Tag = Tag(0x0018, 0x1316);
/// dB/dt DS `(0018,1318)`
pub const DB_DT: Tag = Tag(0x0018, 0x1318);
/// Acquisition Device Processing Description LO `(0018,1400)`
pub const ACQUISITION_DEVICE_PROCESSING_DESCRIPTION: Tag = Tag(0x0018, 0x1400);
/// Acquisition Device Processing Code LO `(0018,1401)`
pub const ACQUISITION_DEVICE_PROCESSING_CODE: Tag = Tag(0x0018, 0x1401);
/// Cassette Orientation CS `(0018,1402)`
pub const CASSETTE_ORIENTATION: Tag = Tag(0x0018, 0x1402);
/// Cassette Size CS `(0018,1403)`
pub const CASSETTE_SIZE: Tag = Tag(0x0018, 0x1403);
/// Exposures On Plate US `(0018,1404)`
pub const EXPOSURES_ON_PLATE: Tag = Tag(0x0018, 0x1404);
/// Relative X Ray Exposure IS `(0018,1405)`
pub const RELATIVE_X_RAY_EXPOSURE: Tag = Tag(0x0018, 0x1405);
/// Exposure Index DS `(0018,1411)`
pub const EXPOSURE_INDEX: Tag = Tag(0x0018, 0x1411);
/// Target Exposure Index DS `(0018,1412)`
pub const TARGET_EXPOSURE_INDEX: Tag = Tag(0x0018, 0x1412);
/// Deviation Index DS `(0018,1413)`
pub const DEVIATION_INDEX: Tag = Tag(0x0018, 0x1413);
/// Column Angulation DS `(0018,1450)`
pub const COLUMN_ANGULATION: Tag = Tag(0x0018, 0x1450);
/// Positioner Motion CS `(0018,1500)`
pub const POSITIONER_MOTION: Tag = Tag(0x0018, 0x1500);
/// Positioner Type CS `(0018,1508)`
pub const POSITIONER_TYPE: Tag = Tag(0x0018, 0x1508);
/// Positioner Primary Angle DS `(0018,1510)`
pub const POSITIONER_PRIMARY_ANGLE: Tag = Tag(0x0018, 0x1510);
/// Positioner Secondary Angle DS `(0018,1511)`
pub const POSITIONER_SECONDARY_ANGLE: Tag = Tag(0x0018, 0x1511);
/// Shutter Shape CS `(0018,1600)`
pub const SHUTTER_SHAPE: Tag = Tag(0x0018, 0x1600);
/// Patient Position CS `(0018,5100)`
pub const PATIENT_POSITION: Tag = Tag(0x0018, 0x5100);
/// View Position CS `(0018,5101)`
pub const VIEW_POSITION: Tag = Tag(0x0018, 0x5101);
/// Sensitivity DS `(0018,6000)`
pub const SENSITIVITY: Tag = Tag(0x0018, 0x6000);
/// Sequence Of Ultrasound Regions SQ `(0018,6011)`
pub const SEQUENCE_OF_ULTRASOUND_REGIONS: Tag = Tag(0x0018, 0x6011);
/// Detector Type CS `(0018,7004)`
pub const DETECTOR_TYPE: Tag = Tag(0x0018, 0x7004);
/// Content Qualification CS `(0018,9004)`
pub const CONTENT_QUALIFICATION: Tag = Tag(0x0018, 0x9004);
/// Pulse Sequence Name SH `(0018,9005)`
pub const PULSE_SEQUENCE_NAME: Tag = Tag(0x0018, 0x9005);
/// Acquisition Duration FD `(0018,9073)`
pub const ACQUISITION_DURATION: Tag = Tag(0x0018, 0x9073);
/// Diffusion B Value FD `(0018,9087)`
pub const DIFFUSION_B_VALUE: Tag = Tag(0x0018, 0x9087);
/// Diffusion Gradient Orientation FD `(0018,9089)`
pub const DIFFUSION_GRADIENT_ORIENTATION: Tag = Tag(0x0018, 0x9089);
/// Contributing Equipment Sequence SQ `(0018,A001)`
pub const CONTRIBUTING_EQUIPMENT_SEQUENCE: Tag = Tag(0x0018, 0xA001);
/// Contribution Date Time DT `(0018,A002)`
pub const CONTRIBUTION_DATE_TIME: Tag = Tag(0x0018, 0xA002);
/// Contribution Description ST `(0018,A003)`
pub const CONTRIBUTION_DESCRIPTION: Tag = Tag(0x0018, 0xA003);
/// Study Instance UID UI `(0020,000D)`
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// Series Instance UID UI `(0020,000E)`
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// Study ID SH `(0020,0010)`
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// Series Number IS `(0020,0011)`
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// Acquisition Number IS `(0020,0012)`
pub const ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x0012);
/// Instance Number IS `(0020,0013)`
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// Item Number IS `(0020,0019)`
pub const ITEM_NUMBER: Tag = Tag(0x0020, 0x0019);
/// Patient Orientation CS `(0020,0020)`
pub const PATIENT_ORIENTATION: Tag = Tag(0x0020, 0x0020);
/// Image Position Patient DS `(0020,0032)`
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
/// Image Orientation Patient DS `(0020,0037)`
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
/// Frame Of Reference UID UI `(0020,0052)`
pub const FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0052);
/// Laterality CS `(0020,0060)`
pub const LATERALITY: Tag = Tag(0x0020, 0x0060);
/// Image Laterality CS `(0020,0062)`
pub const IMAGE_LATERALITY: Tag = Tag(0x0020, 0x0062);
/// Temporal Position Identifier IS `(0020,0100)`
pub const TEMPORAL_POSITION_IDENTIFIER: Tag = Tag(0x0020, 0x0100);
/// Number Of Temporal Positions IS `(0020,0105)`
pub const NUMBER_OF_TEMPORAL_POSITIONS: Tag = Tag(0x0020, 0x0105);
/// Temporal Resolution DS `(0020,0110)`
pub const TEMPORAL_RESOLUTION: Tag = Tag(0x0020, 0x0110);
/// Synchronization Frame Of Reference UID UI `(0020,0200)`
pub const SYNCHRONIZATION_FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0200);
/// SOP Instance UID Of Concatenation Source UI `(0020,0242)`
pub const SOP_INSTANCE_UID_OF_CONCATENATION_SOURCE: Tag = Tag(0x0020, 0x0242);
/// Images In Acquisition IS `(0020,1002)`
pub const IMAGES_IN_ACQUISITION: Tag = Tag(0x0020, 0x1002);
/// Position Reference Indicator LO `(0020,1040)`
pub const POSITION_REFERENCE_INDICATOR: Tag = Tag(0x0020, 0x1040);
/// Slice Location DS `(0020,1041)`
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
/// Number Of Patient Related Studies IS `(0020,1200)`
pub const NUMBER_OF_PATIENT_RELATED_STUDIES: Tag = Tag(0x0020, 0x1200);
/// Number Of Patient Related Series IS `(0020,1202)`
pub const NUMBER_OF_PATIENT_RELATED_SERIES: Tag = Tag(0x0020, 0x1202);
/// Number Of Patient Related Instances IS `(0020,1204)`
pub const NUMBER_OF_PATIENT_RELATED_INSTANCES: Tag = Tag(0x0020, 0x1204);
/// Number Of Study Related Series IS `(0020,1206)`
pub const NUMBER_OF_STUDY_RELATED_SERIES: Tag = Tag(0x0020, 0x1206);
/// Number Of Study Related Instances IS `(0020,1208)`
pub const NUMBER_OF_STUDY_RELATED_INSTANCES: Tag = Tag(0x0020, 0x1208);
/// Number Of Series Related Instances IS `(0020,1209)`
pub const NUMBER_OF_SERIES_RELATED_INSTANCES: Tag = Tag(0x0020, 0x1209);
/// Image Comments LT `(0020,4000)`
pub const IMAGE_COMMENTS: Tag = Tag(0x0020, 0x4000);
/// Stack ID SH `(0020,9056)`
pub const STACK_ID: Tag = Tag(0x0020, 0x9056);
/// In Stack Position Number UL `(0020,9057)`
pub const IN_STACK_POSITION_NUMBER: Tag = Tag(0x0020, 0x9057);
/// Frame Anatomy Sequence SQ `(0020,9071)`
pub const FRAME_ANATOMY_SEQUENCE: Tag = Tag(0x0020, 0x9071);
/// Frame Laterality CS `(0020,9072)`
pub const FRAME_LATERALITY: Tag = Tag(0x0020, 0x9072);
/// Frame Content Sequence SQ `(0020,9111)`
pub const FRAME_CONTENT_SEQUENCE: Tag = Tag(0x0020, 0x9111);
/// Plane Position Sequence SQ `(0020,9113)`
pub const PLANE_POSITION_SEQUENCE: Tag = Tag(0x0020, 0x9113);
/// Plane Orientation Sequence SQ `(0020,9116)`
pub const PLANE_ORIENTATION_SEQUENCE: Tag = Tag(0x0020, 0x9116);
/// Temporal Position Index UL `(0020,9128)`
pub const TEMPORAL_POSITION_INDEX: Tag = Tag(0x0020, 0x9128);
/// Nominal Cardiac Trigger Delay Time FD `(0020,9153)`
pub const NOMINAL_CARDIAC_TRIGGER_DELAY_TIME: Tag = Tag(0x0020, 0x9153);
/// Frame Acquisition Number US `(0020,9156)`
pub const FRAME_ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x9156);
/// Dimension Index Values UL `(0020,9157)`
pub const DIMENSION_INDEX_VALUES: Tag = Tag(0x0020, 0x9157);
/// Frame Comments LT `(0020,9158)`
pub const FRAME_COMMENTS: Tag = Tag(0x0020, 0x9158);
/// Concatenation UID UI `(0020,9161)`
pub const CONCATENATION_UID: Tag = Tag(0x0020, 0x9161);
/// In Concatenation Number US `(0020,9162)`
pub const IN_CONCATENATION_NUMBER: Tag = Tag(0x0020, 0x9162);
/// In Concatenation Total Number US `(0020,9163)`
pub const IN_CONCATENATION_TOTAL_NUMBER: Tag = Tag(0x0020, 0x9163);
/// Dimension Organization UID UI `(0020,9164)`
pub const DIMENSION_ORGANIZATION_UID: Tag = Tag(0x0020, 0x9164);
/// Dimension Index Pointer AT `(0020,9165)`
pub const DIMENSION_INDEX_POINTER: Tag = Tag(0x0020, 0x9165);
/// Functional Group Pointer AT `(0020,9167)`
pub const FUNCTIONAL_GROUP_POINTER: Tag = Tag(0x0020, 0x9167);
/// Dimension Organization Sequence SQ `(0020,9221)`
pub const DIMENSION_ORGANIZATION_SEQUENCE: Tag = Tag(0x0020, 0x9221);
/// Dimension Index Sequence SQ `(0020,9222)`
pub const DIMENSION_INDEX_SEQUENCE: Tag = Tag(0x0020, 0x9222);
/// Concatenation Frame Offset Number UL `(0020,9228)`
pub const CONCATENATION_FRAME_OFFSET_NUMBER: Tag = Tag(0x0020, 0x9228);
/// Functional Group Private Creator LO `(0020,9238)`
pub const FUNCTIONAL_GROUP_PRIVATE_CREATOR: Tag = Tag(0x0020, 0x9238);
/// Nominal Percentage Of Cardiac Phase FL `(0020,9241)`
pub const NOMINAL_PERCENTAGE_OF_CARDIAC_PHASE: Tag = Tag(0x0020, 0x9241);
/// Dimension Description Label LO `(0020,9421)`
pub const DIMENSION_DESCRIPTION_LABEL: Tag = Tag(0x0020, 0x9421);
/// Samples Per Pixel US `(0028,0002)`
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// Samples Per Pixel Used US `(0028,0003)`
pub const SAMPLES_PER_PIXEL_USED: Tag = Tag(0x0028, 0x0003);
/// Photometric Interpretation CS `(0028,0004)`
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// Planar Configuration US `(0028,0006)`
pub const PLANAR_CONFIGURATION: Tag = Tag(0x0028, 0x0006);
/// Number Of Frames IS `(0028,0008)`
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// Frame Increment Pointer AT `(0028,0009)`
pub const FRAME_INCREMENT_POINTER: Tag = Tag(0x0028, 0x0009);
/// Frame Dimension Pointer AT `(0028,000A)`
pub const FRAME_DIMENSION_POINTER: Tag = Tag(0x0028, 0x000A);
/// Rows US `(0028,0010)`
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns US `(0028,0011)`
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// Pixel Spacing DS `(0028,0030)`
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// Zoom Factor DS `(0028,0031)`
pub const ZOOM_FACTOR: Tag = Tag(0x0028, 0x0031);
/// Zoom Center DS `(0028,0032)`
pub const ZOOM_CENTER: Tag = Tag(0x0028, 0x0032);
/// Pixel Aspect Ratio IS `(0028,0034)`
pub const PIXEL_ASPECT_RATIO: Tag = Tag(0x0028, 0x0034);
/// Corrected Image CS `(0028,0051)`
pub const CORRECTED_IMAGE: Tag = Tag(0x0028, 0x0051);
/// Bits Allocated US `(0028,0100)`
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// Bits Stored US `(0028,0101)`
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// High Bit US `(0028,0102)`
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// Pixel Representation US `(0028,0103)`
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// Smallest Image Pixel Value US `(0028,0106)`
pub const SMALLEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0106);
/// Largest Image Pixel Value US `(0028,0107)`
pub const LARGEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0107);
/// Smallest Pixel Value In Series US `(0028,0108)`
pub const SMALLEST_PIXEL_VALUE_IN_SERIES: Tag = Tag(0x0028, 0x0108);
/// Largest Pixel Value In Series US `(0028,0109)`
pub const LARGEST_PIXEL_VALUE_IN_SERIES: Tag = Tag(0x0028, 0x0109);
/// Pixel Padding Value US `(0028,0120)`
pub const PIXEL_PADDING_VALUE: Tag = Tag(0x0028, 0x0120);
/// Pixel Padding Range Limit US `(0028,0121)`
pub const PIXEL_PADDING_RANGE_LIMIT: Tag = Tag(0x0028, 0x0121);
/// Float Pixel Padding Value FL `(0028,0122)`
pub const FLOAT_PIXEL_PADDING_VALUE: Tag = Tag(0x0028, 0x0122);
/// Quality Control Image CS `(0028,0300)`
pub const QUALITY_CONTROL_IMAGE: Tag = Tag(0x0028, 0x0300);
/// Burned In Annotation CS `(0028,0301)`
pub const BURNED_IN_ANNOTATION: Tag = Tag(0x0028, 0x0301);
/// Recognizable Visual Features CS `(0028,0302)`
pub const RECOGNIZABLE_VISUAL_FEATURES: Tag = Tag(0x0028, 0x0302);
/// Longitudinal Temporal Information Modified CS `(0028,0303)`
pub const LONGITUDINAL_TEMPORAL_INFORMATION_MODIFIED: Tag = Tag(0x0028, 0x0303);
/// Pixel Spacing Calibration Type CS `(0028,0A02)`
pub const PIXEL_SPACING_CALIBRATION_TYPE: Tag = Tag(0x0028, 0x0A02);
/// Pixel Spacing Calibration Description LO `(0028,0A04)`
pub const PIXEL_SPACING_CALIBRATION_DESCRIPTION: Tag = Tag(0x0028, 0x0A04);
/// Pixel Intensity Relationship CS `(0028,1040)`
pub const PIXEL_INTENSITY_RELATIONSHIP: Tag = Tag(0x0028, 0x1040);
/// Pixel Intensity Relationship Sign SS `(0028,1041)`
pub const PIXEL_INTENSITY_RELATIONSHIP_SIGN: Tag = Tag(0x0028, 0x1041);
/// Window Center DS `(0028,1050)`
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// Window Width DS `(0028,1051)`
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// Rescale Intercept DS `(0028,1052)`
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// Rescale Slope DS `(0028,1053)`
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// Rescale Type LO `(0028,1054)`
pub const RESCALE_TYPE: Tag = Tag(0x0028, 0x1054);
/// Window Center Width Explanation LO `(0028,1055)`
pub const WINDOW_CENTER_WIDTH_EXPLANATION: Tag = Tag(0x0028, 0x1055);
/// VOILUT Function CS `(0028,1056)`
pub const VOILUT_FUNCTION: Tag = Tag(0x0028, 0x1056);
/// Recommended Viewing Mode CS `(0028,1090)`
pub const RECOMMENDED_VIEWING_MODE: Tag = Tag(0x0028, 0x1090);
/// Red Palette Color Lookup Table Descriptor US `(0028,1101)`
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1101);
/// Green Palette Color Lookup Table Descriptor US `(0028,1102)`
pub const GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1102);
/// Blue Palette Color Lookup Table Descriptor US `(0028,1103)`
pub const BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1103);
/// Palette Color Lookup Table UID UI `(0028,1199)`
pub const PALETTE_COLOR_LOOKUP_TABLE_UID: Tag = Tag(0x0028, 0x1199);
/// Red Palette Color Lookup Table Data OW `(0028,1201)`
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1201);
/// Green Palette Color Lookup Table Data OW `(0028,1202)`
pub const GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1202);
/// Blue Palette Color Lookup Table Data OW `(0028,1203)`
pub const BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1203);
/// Segmented Red Palette Color Lookup Table Data OW `(0028,1221)`
pub const SEGMENTED_RED_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1221);
/// Segmented Green Palette Color Lookup Table Data OW `(0028,1222)`
pub const SEGMENTED_GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1222);
/// Segmented Blue Palette Color Lookup Table Data OW `(0028,1223)`
pub const SEGMENTED_BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1223);
/// Breast Implant Present CS `(0028,1300)`
pub const BREAST_IMPLANT_PRESENT: Tag = Tag(0x0028, 0x1300);
/// Partial View CS `(0028,1350)`
pub const PARTIAL_VIEW: Tag = Tag(0x0028, 0x1350);
/// Partial View Description ST `(0028,1351)`
pub const PARTIAL_VIEW_DESCRIPTION: Tag = Tag(0x0028, 0x1351);
/// ICC Profile OB `(0028,2000)`
pub const ICC_PROFILE: Tag = Tag(0x0028, 0x2000);
/// Lossy Image Compression CS `(0028,2110)`
pub const LOSSY_IMAGE_COMPRESSION: Tag = Tag(0x0028, 0x2110);
/// Lossy Image Compression Ratio DS `(0028,2112)`
pub const LOSSY_IMAGE_COMPRESSION_RATIO: Tag = Tag(0x0028, 0x2112);
/// Lossy Image Compression Method CS `(0028,2114)`
pub const LOSSY_IMAGE_COMPRESSION_METHOD: Tag = Tag(0x0028, 0x2114);
/// Modality LUT Sequence SQ `(0028,3000)`
pub const MODALITY_LUT_SEQUENCE: Tag = Tag(0x0028, 0x3000);
/// LUT Descriptor US `(0028,3002)`
pub const LUT_DESCRIPTOR: Tag = Tag(0x0028, 0x3002);
/// LUT Explanation LO `(0028,3003)`
pub const LUT_EXPLANATION: Tag = Tag(0x0028, 0x3003);
/// Modality LUT Type LO `(0028,3004)`
pub const MODALITY_LUT_TYPE: Tag = Tag(0x0028, 0x3004);
/// LUT Data US `(0028,3006)`
pub const LUT_DATA: Tag = Tag(0x0028, 0x3006);
/// VOILUT Sequence SQ `(0028,3010)`
pub const VOILUT_SEQUENCE: Tag = Tag(0x0028, 0x3010);
/// Bi Plane Acquisition Sequence SQ `(0028,5000)`
pub const BI_PLANE_ACQUISITION_SEQUENCE: Tag = Tag(0x0028, 0x5000);
/// Representative Frame Number US `(0028,6010)`
pub const REPRESENTATIVE_FRAME_NUMBER: Tag = Tag(0x0028, 0x6010);
/// Frame Numbers Of Interest US `(0028,6020)`
pub const FRAME_NUMBERS_OF_INTEREST: Tag = Tag(0x0028, 0x6020);
/// Frame Of Interest Description LO `(0028,6022)`
pub const FRAME_OF_INTEREST_DESCRIPTION: Tag = Tag(0x0028, 0x6022);
/// Frame Of Interest Type CS `(0028,6023)`
pub const FRAME_OF_INTEREST_TYPE: Tag = Tag(0x0028, 0x6023);
/// R Wave Pointer US `(0028,6040)`
pub const R_WAVE_POINTER: Tag = Tag(0x0028, 0x6040);
/// Mask Subtraction Sequence SQ `(0028,6100)`
pub const MASK_SUBTRACTION_SEQUENCE: Tag = Tag(0x0028, 0x6100);
/// Mask Operation CS `(0028,6101)`
pub const MASK_OPERATION: Tag = Tag(0x0028, 0x6101);
/// Applicable Frame Range US `(0028,6102)`
pub const APPLICABLE_FRAME_RANGE: Tag = Tag(0x0028, 0x6102);
/// Mask Frame Numbers US `(0028,6110)`
pub const MASK_FRAME_NUMBERS: Tag = Tag(0x0028, 0x6110);
/// Contrast Frame Averaging US `(0028,6112)`
pub const CONTRAST_FRAME_AVERAGING: Tag = Tag(0x0028, 0x6112);
/// Mask Sub Pixel Shift FL `(0028,6114)`
pub const MASK_SUB_PIXEL_SHIFT: Tag = Tag(0x0028, 0x6114);
/// TID Offset SS `(0028,6120)`
pub const TID_OFFSET: Tag = Tag(0x0028, 0x6120);
/// Mask Operation Explanation ST `(0028,6190)`
pub const MASK_OPERATION_EXPLANATION: Tag = Tag(0x0028, 0x6190);
/// Pixel Data Provider URL UR `(0028,7FE0)`
pub const PIXEL_DATA_PROVIDER_URL: Tag = Tag(0x0028, 0x7FE0);
/// Data Point Rows UL `(0028,9001)`
pub const DATA_POINT_ROWS: Tag = Tag(0x0028, 0x9001);
/// Data Point Columns UL `(0028,9002)`
pub const DATA_POINT_COLUMNS: Tag = Tag(0x0028, 0x9002);
/// Signal Domain Columns CS `(0028,9003)`
pub const SIGNAL_DOMAIN_COLUMNS: Tag = Tag(0x0028, 0x9003);
/// Data Representation CS `(0028,9108)`
pub const DATA_REPRESENTATION: Tag = Tag(0x0028, 0x9108);
/// Pixel Measures Sequence SQ `(0028,9110)`
pub const PIXEL_MEASURES_SEQUENCE: Tag = Tag(0x0028, 0x9110);
/// Frame VOILUT Sequence SQ `(0028,9132)`
pub const FRAME_VOILUT_SEQUENCE: Tag = Tag(0x0028, 0x9132);
/// Pixel Value Transformation Sequence SQ `(0028,9145)`
pub const PIXEL_VALUE_TRANSFORMATION_SEQUENCE: Tag = Tag(0x0028, 0x9145);
/// Signal Domain Rows CS `(0028,9235)`
pub const SIGNAL_DOMAIN_ROWS: Tag = Tag(0x0028, 0x9235);
/// Display Filter Percentage FL `(0028,9411)`
pub const DISPLAY_FILTER_PERCENTAGE: Tag = Tag(0x0028, 0x9411);
/// Frame Pixel Shift Sequence SQ `(0028,9415)`
pub const FRAME_PIXEL_SHIFT_SEQUENCE: Tag = Tag(0x0028, 0x9415);
/// Subtraction Item ID US `(0028,9416)`
pub const SUBTRACTION_ITEM_ID: Tag = Tag(0x0028, 0x9416);
/// Pixel Intensity Relationship LUT Sequence SQ `(0028,9422)`
pub const PIXEL_INTENSITY_RELATIONSHIP_LUT_SEQUENCE: Tag = Tag(0x0028, 0x9422);
/// Frame Pixel Data Properties Sequence SQ `(0028,9443)`
pub const FRAME_PIXEL_DATA_PROPERTIES_SEQUENCE: Tag = Tag(0x0028, 0x9443);
/// Geometrical Properties CS `(0028,9444)`
pub const GEOMETRICAL_PROPERTIES: Tag = Tag(0x0028, 0x9444);
/// Geometric Maximum Distortion FL `(0028,9445)`
pub const GEOMETRIC_MAXIMUM_DISTORTION: Tag = Tag(0x0028, 0x9445);
/// Image Processing Applied CS `(0028,9446)`
pub const IMAGE_PROCESSING_APPLIED: Tag = Tag(0x0028, 0x9446);
/// Mask Selection Mode CS `(0028,9454)`
pub const MASK_SELECTION_MODE: Tag = Tag(0x0028, 0x9454);
/// LUT Function CS `(0028,9474)`
pub const LUT_FUNCTION: Tag = Tag(0x0028, 0x9474);
/// Mask Visibility Percentage FL `(0028,9478)`
pub const MASK_VISIBILITY_PERCENTAGE: Tag = Tag(0x0028, 0x9478);
/// Pixel Shift Sequence SQ `(0028,9501)`
pub const PIXEL_SHIFT_SEQUENCE: Tag = Tag(0x0028, 0x9501);
/// Region Pixel Shift Sequence SQ `(0028,9502)`
pub const REGION_PIXEL_SHIFT_SEQUENCE: Tag = Tag(0x0028, 0x9502);
/// Vertices Of The Region SS `(0028,9503)`
pub const VERTICES_OF_THE_REGION: Tag = Tag(0x0028, 0x9503);
/// Multi Frame Presentation Sequence SQ `(0028,9505)`
pub const MULTI_FRAME_PRESENTATION_SEQUENCE: Tag = Tag(0x0028, 0x9505);
/// Pixel Shift Frame Range US `(0028,9506)`
pub const PIXEL_SHIFT_FRAME_RANGE: Tag = Tag(0x0028, 0x9506);
/// LUT Frame Range US `(0028,9507)`
pub const LUT_FRAME_RANGE: Tag = Tag(0x0028, 0x9507);
/// Image To Equipment Mapping Matrix DS `(0028,9520)`
pub const IMAGE_TO_EQUIPMENT_MAPPING_MATRIX: Tag = Tag(0x0028, 0x9520);
/// Equipment Coordinate System Identification CS `(0028,9537)`
pub const EQUIPMENT_COORDINATE_SYSTEM_IDENTIFICATION: Tag = Tag(0x0028, 0x9537);
/// Requesting Physician PN `(0032,1032)`
pub const REQUESTING_PHYSICIAN: Tag = Tag(0x0032, 0x1032);
/// Requesting Service LO `(0032,1033)`
pub const REQUESTING_SERVICE: Tag = Tag(0x0032, 0x1033);
/// Requesting Service Code Sequence SQ `(0032,1034)`
pub const REQUESTING_SERVICE_CODE_SEQUENCE: Tag = Tag(0x0032, 0x1034);
/// Requested Procedure Description LO `(0032,1060)`
pub const REQUESTED_PROCEDURE_DESCRIPTION: Tag = Tag(0x0032, 0x1060);
/// Requested Procedure Code Sequence SQ `(0032,1064)`
pub const REQUESTED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0032, 0x1064);
/// Requested Contrast Agent LO `(0032,1070)`
pub const REQUESTED_CONTRAST_AGENT: Tag = Tag(0x0032, 0x1070);
/// Study Comments LT `(0032,4000)`
pub const STUDY_COMMENTS: Tag = Tag(0x0032, 0x4000);
/// Visit Status ID CS `(0038,0008)`
pub const VISIT_STATUS_ID: Tag = Tag(0x0038, 0x0008);
/// Admission ID LO `(0038,0010)`
pub const ADMISSION_ID: Tag = Tag(0x0038, 0x0010);
/// Issuer Of Admission ID Sequence SQ `(0038,0014)`
pub const ISSUER_OF_ADMISSION_ID_SEQUENCE: Tag = Tag(0x0038, 0x0014);
/// Special Needs LO `(0038,0050)`
pub const SPECIAL_NEEDS: Tag = Tag(0x0038, 0x0050);
/// Service Episode ID LO `(0038,0060)`
pub const SERVICE_EPISODE_ID: Tag = Tag(0x0038, 0x0060);
/// Service Episode Description LO `(0038,0062)`
pub const SERVICE_EPISODE_DESCRIPTION: Tag = Tag(0x0038, 0x0062);
/// Current Patient Location LO `(0038,0300)`
pub const CURRENT_PATIENT_LOCATION: Tag = Tag(0x0038, 0x0300);
/// Patient Institution Residence LO `(0038,0400)`
pub const PATIENT_INSTITUTION_RESIDENCE: Tag = Tag(0x0038, 0x0400);
/// Patient State LO `(0038,0500)`
pub const PATIENT_STATE: Tag = Tag(0x0038, 0x0500);
/// Visit Comments LT `(0038,4000)`
pub const VISIT_COMMENTS: Tag = Tag(0x0038, 0x4000);
/// Scheduled Station AE Title AE `(0040,0001)`
pub const SCHEDULED_STATION_AE_TITLE: Tag = Tag(0x0040, 0x0001);
/// Scheduled Procedure Step Start Date DA `(0040,0002)`
pub const SCHEDULED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0002);
/// Scheduled Procedure Step Start Time TM `(0040,0003)`
pub const SCHEDULED_PROCEDURE_STEP_START_TIME: Tag = Tag(0x0040, 0x0003);
/// Scheduled Procedure Step End Date DA `(0040,0004)`
pub const SCHEDULED_PROCEDURE_STEP_END_DATE: Tag = Tag(0x0040, 0x0004);
/// Scheduled Procedure Step End Time TM `(0040,0005)`
pub const SCHEDULED_PROCEDURE_STEP_END_TIME: Tag = Tag(0x0040, 0x0005);
/// Scheduled Performing Physician Name PN `(0040,0006)`
pub const SCHEDULED_PERFORMING_PHYSICIAN_NAME: Tag = Tag(0x0040, 0x0006);
/// Scheduled Procedure Step Description LO `(0040,0007)`
pub const SCHEDULED_PROCEDURE_STEP_DESCRIPTION: Tag = Tag(0x0040, 0x0007);
/// Scheduled Protocol Code Sequence SQ `(0040,0008)`
pub const SCHEDULED_PROTOCOL_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0008);
/// Scheduled Procedure Step ID SH `(0040,0009)`
pub const SCHEDULED_PROCEDURE_STEP_ID: Tag = Tag(0x0040, 0x0009);
/// Scheduled Station Name SH `(0040,0010)`
pub const SCHEDULED_STATION_NAME: Tag = Tag(0x0040, 0x0010);
/// Scheduled Procedure Step Location SH `(0040,0011)`
pub const SCHEDULED_PROCEDURE_STEP_LOCATION: Tag = Tag(0x0040, 0x0011);
/// Pre Medication LO `(0040,0012)`
pub const PRE_MEDICATION: Tag = Tag(0x0040, 0x0012);
/// Scheduled Procedure Step Status CS `(0040,0020)`
pub const SCHEDULED_PROCEDURE_STEP_STATUS: Tag = Tag(0x0040, 0x0020);
/// Scheduled Procedure Step Sequence SQ `(0040,0100)`
pub const SCHEDULED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0040, 0x0100);
/// Performed Procedure Step Start Date DA `(0040,0244)`
pub const PERFORMED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0244);
/// Performed Procedure Step Start Time TM `(0040,0245)`
pub const PERFORMED_PROCEDURE_STEP_START_TIME: Tag = Tag(0x0040, 0x0245);
/// Performed Procedure Step End Date DA `(0040,0250)`
pub const PERFORMED_PROCEDURE_STEP_END_DATE: Tag = Tag(0x0040, 0x0250);
/// Performed Procedure Step End Time TM `(0040,0251)`
pub const PERFORMED_PROCEDURE_STEP_END_TIME: Tag = Tag(0x0040, 0x0251);
/// Performed Procedure Step Status CS `(0040,0252)`
pub const PERFORMED_PROCEDURE_STEP_STATUS: Tag = Tag(0x0040, 0x0252);
/// Performed Procedure Step ID SH `(0040,0253)`
pub const PERFORMED_PROCEDURE_STEP_ID: Tag = Tag(0x0040, 0x0253);
/// Performed Procedure Step Description LO `(0040,0254)`
pub const PERFORMED_PROCEDURE_STEP_DESCRIPTION: Tag = Tag(0x0040, 0x0254);
/// Performed Protocol Code Sequence SQ `(0040,0260)`
pub const PERFORMED_PROTOCOL_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0260);
/// Request Attributes Sequence SQ `(0040,0275)`
pub const REQUEST_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0040, 0x0275);
/// Comments On The Performed Procedure Step ST `(0040,0280)`
pub const COMMENTS_ON_THE_PERFORMED_PROCEDURE_STEP: Tag = Tag(0x0040, 0x0280);
/// Content Item Modifier Sequence SQ `(0040,0441)`
pub const CONTENT_ITEM_MODIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0441);
/// Acquisition Context Sequence SQ `(0040,0555)`
pub const ACQUISITION_CONTEXT_SEQUENCE: Tag = Tag(0x0040, 0x0555);
/// Measurement Units Code Sequence SQ `(0040,08EA)`
pub const MEASUREMENT_UNITS_CODE_SEQUENCE: Tag = Tag(0x0040, 0x08EA);
/// Requested Procedure ID SH `(0040,1001)`
pub const REQUESTED_PROCEDURE_ID: Tag = Tag(0x0040, 0x1001);
/// Reason For The Requested Procedure LO `(0040,1002)`
pub const REASON_FOR_THE_REQUESTED_PROCEDURE: Tag = Tag(0x0040, 0x1002);
/// Requested Procedure Priority SH `(0040,1003)`
pub const REQUESTED_PROCEDURE_PRIORITY: Tag = Tag(0x0040, 0x1003);
/// Patient Transport Arrangements LO `(0040,1004)`
pub const PATIENT_TRANSPORT_ARRANGEMENTS: Tag = Tag(0x0040, 0x1004);
/// Requested Procedure Comments LT `(0040,1400)`
pub const REQUESTED_PROCEDURE_COMMENTS: Tag = Tag(0x0040, 0x1400);
/// Placer Order Number Imaging Service Request LO `(0040,2016)`
pub const PLACER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST: Tag = Tag(0x0040, 0x2016);
/// Filler Order Number Imaging Service Request LO `(0040,2017)`
pub const FILLER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST: Tag = Tag(0x0040, 0x2017);
/// Imaging Service Request Comments LT `(0040,2400)`
pub const IMAGING_SERVICE_REQUEST_COMMENTS: Tag = Tag(0x0040, 0x2400);
/// Real World Value Mapping Sequence SQ `(0040,9096)`
pub const REAL_WORLD_VALUE_MAPPING_SEQUENCE: Tag = Tag(0x0040, 0x9096);
/// LUT Label SH `(0040,9210)`
pub const LUT_LABEL: Tag = Tag(0x0040, 0x9210);
/// Real World Value Last Value Mapped US `(0040,9211)`
pub const REAL_WORLD_VALUE_LAST_VALUE_MAPPED: Tag = Tag(0x0040, 0x9211);
/// Real World Value LUT Data FD `(0040,9212)`
pub const REAL_WORLD_VALUE_LUT_DATA: Tag = Tag(0x0040, 0x9212);
/// Real World Value First Value Mapped US `(0040,9216)`
pub const REAL_WORLD_VALUE_FIRST_VALUE_MAPPED: Tag = Tag(0x0040, 0x9216);
/// Real World Value Intercept FD `(0040,9224)`
pub const REAL_WORLD_VALUE_INTERCEPT: Tag = Tag(0x0040, 0x9224);
/// Real World Value Slope FD `(0040,9225)`
pub const REAL_WORLD_VALUE_SLOPE: Tag = Tag(0x0040, 0x9225);
/// Relationship Type CS `(0040,A010)`
pub const RELATIONSHIP_TYPE: Tag = Tag(0x0040, 0xA010);
/// Verifying Organization LO `(0040,A027)`
pub const VERIFYING_ORGANIZATION: Tag = Tag(0x0040, 0xA027);
/// Verification Date Time DT `(0040,A030)`
pub const VERIFICATION_DATE_TIME: Tag = Tag(0x0040, 0xA030);
/// Observation Date Time DT `(0040,A032)`
pub const OBSERVATION_DATE_TIME: Tag = Tag(0x0040, 0xA032);
/// Value Type CS `(0040,A040)`
pub const VALUE_TYPE: Tag = Tag(0x0040, 0xA040);
/// Concept Name Code Sequence SQ `(0040,A043)`
pub const CONCEPT_NAME_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA043);
/// Continuity Of Content CS `(0040,A050)`
pub const CONTINUITY_OF_CONTENT: Tag = Tag(0x0040, 0xA050);
/// Verifying Observer Sequence SQ `(0040,A073)`
pub const VERIFYING_OBSERVER_SEQUENCE: Tag = Tag(0x0040, 0xA073);
/// Verifying Observer Name PN `(0040,A075)`
pub const VERIFYING_OBSERVER_NAME: Tag = Tag(0x0040, 0xA075);
/// Date Time DT `(0040,A120)`
pub const DATE_TIME: Tag = Tag(0x0040, 0xA120);
/// Date DA `(0040,A121)`
pub const DATE: Tag = Tag(0x0040, 0xA121);
/// Time TM `(0040,A122)`
pub const TIME: Tag = Tag(0x0040, 0xA122);
/// Person Name PN `(0040,A123)`
pub const PERSON_NAME: Tag = Tag(0x0040, 0xA123);
/// UID UI `(0040,A124)`
pub const UID: Tag = Tag(0x0040, 0xA124);
/// Text Value UT `(0040,A160)`
pub const TEXT_VALUE: Tag = Tag(0x0040, 0xA160);
/// Concept Code Sequence SQ `(0040,A168)`
pub const CONCEPT_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA168);
/// Measured Value Sequence SQ `(0040,A300)`
pub const MEASURED_VALUE_SEQUENCE: Tag = Tag(0x0040, 0xA300);
/// Numeric Value DS `(0040,A30A)`
pub const NUMERIC_VALUE: Tag = Tag(0x0040, 0xA30A);
/// Referenced Request Sequence SQ `(0040,A370)`
pub const REFERENCED_REQUEST_SEQUENCE: Tag = Tag(0x0040, 0xA370);
/// Performed Procedure Code Sequence SQ `(0040,A372)`
pub const PERFORMED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA372);
/// Current Requested Procedure Evidence Sequence SQ `(0040,A375)`
pub const CURRENT_REQUESTED_PROCEDURE_EVIDENCE_SEQUENCE: Tag = Tag(0x0040, 0xA375);
/// Pertinent Other Evidence Sequence SQ `(0040,A385)`
pub const PERTINENT_OTHER_EVIDENCE_SEQUENCE: Tag = Tag(0x0040, 0xA385);
/// Completion Flag CS `(0040,A491)`
pub const COMPLETION_FLAG: Tag = Tag(0x0040, 0xA491);
/// Verification Flag CS `(0040,A493)`
pub const VERIFICATION_FLAG: Tag = Tag(0x0040, 0xA493);
/// Content Template Sequence SQ `(0040,A504)`
pub const CONTENT_TEMPLATE_SEQUENCE: Tag = Tag(0x0040, 0xA504);
/// Content Sequence SQ `(0040,A730)`
pub const CONTENT_SEQUENCE: Tag = Tag(0x0040, 0xA730);
/// Template Identifier CS `(0040,DB00)`
pub const TEMPLATE_IDENTIFIER: Tag = Tag(0x0040, 0xDB00);
/// Referenced Content Item Identifier UL `(0040,DB73)`
pub const REFERENCED_CONTENT_ITEM_IDENTIFIER: Tag = Tag(0x0040, 0xDB73);
/// Number Of Energy Windows US `(0054,0011)`
pub const NUMBER_OF_ENERGY_WINDOWS: Tag = Tag(0x0054, 0x0011);
/// Energy Window Range Sequence SQ `(0054,0013)`
pub const ENERGY_WINDOW_RANGE_SEQUENCE: Tag = Tag(0x0054, 0x0013);
/// Radiopharmaceutical Information Sequence SQ `(0054,0016)`
pub const RADIOPHARMACEUTICAL_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0016);
/// Number Of Detectors US `(0054,0021)`
pub const NUMBER_OF_DETECTORS: Tag = Tag(0x0054, 0x0021);
/// Number Of Slices US `(0054,0081)`
pub const NUMBER_OF_SLICES: Tag = Tag(0x0054, 0x0081);
/// Number Of Time Slices US `(0054,0101)`
pub const NUMBER_OF_TIME_SLICES: Tag = Tag(0x0054, 0x0101);
/// Radionuclide Code Sequence SQ `(0054,0300)`
pub const RADIONUCLIDE_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0300);
/// Patient Orientation Code Sequence SQ `(0054,0410)`
pub const PATIENT_ORIENTATION_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0410);
/// Patient Gantry Relationship Code Sequence SQ `(0054,0414)`
pub const PATIENT_GANTRY_RELATIONSHIP_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0414);
/// Series Type CS `(0054,1000)`
pub const SERIES_TYPE: Tag = Tag(0x0054, 0x1000);
/// Units CS `(0054,1001)`
pub const UNITS: Tag = Tag(0x0054, 0x1001);
/// Counts Source CS `(0054,1002)`
pub const COUNTS_SOURCE: Tag = Tag(0x0054, 0x1002);
/// Randoms Correction Method CS `(0054,1100)`
pub const RANDOMS_CORRECTION_METHOD: Tag = Tag(0x0054, 0x1100);
/// Attenuation Correction Method LO `(0054,1101)`
pub const ATTENUATION_CORRECTION_METHOD: Tag = Tag(0x0054, 0x1101);
/// Decay Correction CS `(0054,1102)`
pub const DECAY_CORRECTION: Tag = Tag(0x0054, 0x1102);
/// Reconstruction Method LO `(0054,1103)`
pub const RECONSTRUCTION_METHOD: Tag = Tag(0x0054, 0x1103);
/// Scatter Correction Method LO `(0054,1105)`
pub const SCATTER_CORRECTION_METHOD: Tag = Tag(0x0054, 0x1105);
/// Frame Reference Time DS `(0054,1300)`
pub const FRAME_REFERENCE_TIME: Tag = Tag(0x0054, 0x1300);
/// Decay Factor DS `(0054,1321)`
pub const DECAY_FACTOR: Tag = Tag(0x0054, 0x1321);
/// Dose Calibration Factor DS `(0054,1322)`
pub const DOSE_CALIBRATION_FACTOR: Tag = Tag(0x0054, 0x1322);
/// Image Index US `(0054,1330)`
pub const IMAGE_INDEX: Tag = Tag(0x0054, 0x1330);
/// Graphic Annotation Sequence SQ `(0070,0001)`
pub const GRAPHIC_ANNOTATION_SEQUENCE: Tag = Tag(0x0070, 0x0001);
/// Graphic Layer CS `(0070,0002)`
pub const GRAPHIC_LAYER: Tag = Tag(0x0070, 0x0002);
/// Unformatted Text Value ST `(0070,0006)`
pub const UNFORMATTED_TEXT_VALUE: Tag = Tag(0x0070, 0x0006);
/// Text Object Sequence SQ `(0070,0008)`
pub const TEXT_OBJECT_SEQUENCE: Tag = Tag(0x0070, 0x0008);
/// Graphic Object Sequence SQ `(0070,0009)`
pub const GRAPHIC_OBJECT_SEQUENCE: Tag = Tag(0x0070, 0x0009);
/// Displayed Area Selection Sequence SQ `(0070,005A)`
pub const DISPLAYED_AREA_SELECTION_SEQUENCE: Tag = Tag(0x0070, 0x005A);
/// Content Label CS `(0070,0080)`
pub const CONTENT_LABEL: Tag = Tag(0x0070, 0x0080);
/// Content Description LO `(0070,0081)`
pub const CONTENT_DESCRIPTION: Tag = Tag(0x0070, 0x0081);
/// Presentation Creation Date DA `(0070,0082)`
pub const PRESENTATION_CREATION_DATE: Tag = Tag(0x0070, 0x0082);
/// Presentation Creation Time TM `(0070,0083)`
pub const PRESENTATION_CREATION_TIME: Tag = Tag(0x0070, 0x0083);
/// Content Creator Name PN `(0070,0084)`
pub const CONTENT_CREATOR_NAME: Tag = Tag(0x0070, 0x0084);
/// Storage Media File Set UID UI `(0088,0140)`
pub const STORAGE_MEDIA_FILE_SET_UID: Tag = Tag(0x0088, 0x0140);
/// Icon Image Sequence SQ `(0088,0200)`
pub const ICON_IMAGE_SEQUENCE: Tag = Tag(0x0088, 0x0200);
/// Encrypted Attributes Sequence SQ `(0400,0500)`
pub const ENCRYPTED_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0400, 0x0500);
/// Modified Attributes Sequence SQ `(0400,0550)`
pub const MODIFIED_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0400, 0x0550);
/// Original Attributes Sequence SQ `(0400,0561)`
pub const ORIGINAL_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0400, 0x0561);
/// Attribute Modification Date Time DT `(0400,0562)`
pub const ATTRIBUTE_MODIFICATION_DATE_TIME: Tag = Tag(0x0400, 0x0562);
/// Modifying System LO `(0400,0563)`
pub const MODIFYING_SYSTEM: Tag = Tag(0x0400, 0x0563);
/// Source Of Previous Values LO `(0400,0564)`
pub const SOURCE_OF_PREVIOUS_VALUES: Tag = Tag(0x0400, 0x0564);
/// Reason For The Attribute Modification CS `(0400,0565)`
pub const REASON_FOR_THE_ATTRIBUTE_MODIFICATION: Tag = Tag(0x0400, 0x0565);
/// Presentation LUT Shape CS `(2050,0020)`
pub const PRESENTATION_LUT_SHAPE: Tag = Tag(0x2050, 0x0020);
/// Structure Set Label SH `(3006,0002)`
pub const STRUCTURE_SET_LABEL: Tag = Tag(0x3006, 0x0002);
/// Structure Set Name LO `(3006,0004)`
pub const STRUCTURE_SET_NAME: Tag = Tag(0x3006, 0x0004);
/// Structure Set Date DA `(3006,0008)`
pub const STRUCTURE_SET_DATE: Tag = Tag(0x3006, 0x0008);
/// Structure Set Time TM `(3006,0009)`
pub const STRUCTURE_SET_TIME: Tag = Tag(0x3006, 0x0009);
/// Referenced Frame Of Reference Sequence SQ `(3006,0010)`
pub const REFERENCED_FRAME_OF_REFERENCE_SEQUENCE: Tag = Tag(0x3006, 0x0010);
/// Contour Image Sequence SQ `(3006,0016)`
pub const CONTOUR_IMAGE_SEQUENCE: Tag = Tag(0x3006, 0x0016);
/// Structure Set ROI Sequence SQ `(3006,0020)`
pub const STRUCTURE_SET_ROI_SEQUENCE: Tag = Tag(0x3006, 0x0020);
/// ROI Number IS `(3006,0022)`
pub const ROI_NUMBER: Tag = Tag(0x3006, 0x0022);
/// Referenced Frame Of Reference UID UI `(3006,0024)`
pub const REFERENCED_FRAME_OF_REFERENCE_UID: Tag = Tag(0x3006, 0x0024);
/// ROI Name LO `(3006,0026)`
pub const ROI_NAME: Tag = Tag(0x3006, 0x0026);
/// ROI Display Color IS `(3006,002A)`
pub const ROI_DISPLAY_COLOR: Tag = Tag(0x3006, 0x002A);
/// ROI Generation Algorithm CS `(3006,0036)`
pub const ROI_GENERATION_ALGORITHM: Tag = Tag(0x3006, 0x0036);
/// ROI Contour Sequence SQ `(3006,0039)`
pub const ROI_CONTOUR_SEQUENCE: Tag = Tag(0x3006, 0x0039);
/// Contour Sequence SQ `(3006,0040)`
pub const CONTOUR_SEQUENCE: Tag = Tag(0x3006, 0x0040);
/// Contour Geometric Type CS `(3006,0042)`
pub const CONTOUR_GEOMETRIC_TYPE: Tag = Tag(0x3006, 0x0042);
/// Number Of Contour Points IS `(3006,0046)`
pub const NUMBER_OF_CONTOUR_POINTS: Tag = Tag(0x3006, 0x0046);
/// Contour Data DS `(3006,0050)`
pub const CONTOUR_DATA: Tag = Tag(0x3006, 0x0050);
/// RTROI Observations Sequence SQ `(3006,0080)`
pub const RTROI_OBSERVATIONS_SEQUENCE: Tag = Tag(0x3006, 0x0080);
/// Observation Number IS `(3006,0082)`
pub const OBSERVATION_NUMBER: Tag = Tag(0x3006, 0x0082);
/// Referenced ROI Number IS `(3006,0084)`
pub const REFERENCED_ROI_NUMBER: Tag = Tag(0x3006, 0x0084);
/// RTROI Interpreted Type CS `(3006,00A4)`
pub const RTROI_INTERPRETED_TYPE: Tag = Tag(0x3006, 0x00A4);
/// Shared Functional Groups Sequence SQ `(5200,9229)`
pub const SHARED_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9229);
/// Per Frame Functional Groups Sequence SQ `(5200,9230)`
pub const PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9230);
/// Overlay Rows US `(6000,0010)`
pub const OVERLAY_ROWS: Tag = Tag(0x6000, 0x0010);
/// Overlay Columns US `(6000,0011)`
pub const OVERLAY_COLUMNS: Tag = Tag(0x6000, 0x0011);
/// Number Of Frames In Overlay IS `(6000,0015)`
pub const NUMBER_OF_FRAMES_IN_OVERLAY: Tag = Tag(0x6000, 0x0015);
/// Overlay Description LO `(6000,0022)`
pub const OVERLAY_DESCRIPTION: Tag = Tag(0x6000, 0x0022);
/// Overlay Type CS `(6000,0040)`
pub const OVERLAY_TYPE: Tag = Tag(0x6000, 0x0040);
/// Overlay Subtype LO `(6000,0045)`
pub const OVERLAY_SUBTYPE: Tag = Tag(0x6000, 0x0045);
/// Overlay Origin SS `(6000,0050)`
pub const OVERLAY_ORIGIN: Tag = Tag(0x6000, 0x0050);
/// Image Frame Origin US `(6000,0051)`
pub const IMAGE_FRAME_ORIGIN: Tag = Tag(0x6000, 0x0051);
/// Overlay Bits Allocated US `(6000,0100)`
pub const OVERLAY_BITS_ALLOCATED: Tag = Tag(0x6000, 0x0100);
/// Overlay Bit Position US `(6000,0102)`
pub const OVERLAY_BIT_POSITION: Tag = Tag(0x6000, 0x0102);
/// Overlay Label LO `(6000,1500)`
pub const OVERLAY_LABEL: Tag = Tag(0x6000, 0x1500);
/// Overlay Data OW `(6000,3000)`
pub const OVERLAY_DATA: Tag = Tag(0x6000, 0x3000);
/// Extended Offset Table OV `(7FE0,0001)`
pub const EXTENDED_OFFSET_TABLE: Tag = Tag(0x7FE0, 0x0001);
/// Extended Offset Table Lengths OV `(7FE0,0002)`
pub const EXTENDED_OFFSET_TABLE_LENGTHS: Tag = Tag(0x7FE0, 0x0002);
/// Float Pixel Data OF `(7FE0,0008)`
pub const FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0008);
/// Double Float Pixel Data OD `(7FE0,0009)`
pub const DOUBLE_FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0009);
/// Pixel Data OB `(7FE0,0010)`
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);
/// Digital Signatures Sequence SQ `(FFFA,FFFA)`
pub const DIGITAL_SIGNATURES_SEQUENCE: Tag = Tag(0xFFFA, 0xFFFA);
/// Data Set Trailing Padding OB `(FFFC,FFFC)`
pub const DATA_SET_TRAILING_PADDING: Tag = Tag(0xFFFC, 0xFFFC);

type E = DataDictionaryEntryRef<'static>;

pub(crate) const ENTRIES: &[E] = &[
    E { tag: FILE_META_INFORMATION_GROUP_LENGTH, alias: "FileMetaInformationGroupLength", vr: VR::UL },
    E { tag: FILE_META_INFORMATION_VERSION, alias: "FileMetaInformationVersion", vr: VR::OB },
    E { tag: MEDIA_STORAGE_SOP_CLASS_UID, alias: "MediaStorageSOPClassUID", vr: VR::UI },
    E { tag: MEDIA_STORAGE_SOP_INSTANCE_UID, alias: "MediaStorageSOPInstanceUID", vr: VR::UI },
    E { tag: TRANSFER_SYNTAX_UID, alias: "TransferSyntaxUID", vr: VR::UI },
    E { tag: IMPLEMENTATION_CLASS_UID, alias: "ImplementationClassUID", vr: VR::UI },
    E { tag: IMPLEMENTATION_VERSION_NAME, alias: "ImplementationVersionName", vr: VR::SH },
    E { tag: SOURCE_APPLICATION_ENTITY_TITLE, alias: "SourceApplicationEntityTitle", vr: VR::AE },
    E { tag: SENDING_APPLICATION_ENTITY_TITLE, alias: "SendingApplicationEntityTitle", vr: VR::AE },
    E { tag: RECEIVING_APPLICATION_ENTITY_TITLE, alias: "ReceivingApplicationEntityTitle", vr: VR::AE },
    E { tag: PRIVATE_INFORMATION_CREATOR_UID, alias: "PrivateInformationCreatorUID", vr: VR::UI },
    E { tag: PRIVATE_INFORMATION, alias: "PrivateInformation", vr: VR::OB },
    E { tag: FILE_SET_ID, alias: "FileSetID", vr: VR::CS },
    E { tag: OFFSET_OF_THE_FIRST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY, alias: "OffsetOfTheFirstDirectoryRecordOfTheRootDirectoryEntity", vr: VR::UL },
    E { tag: OFFSET_OF_THE_LAST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY, alias: "OffsetOfTheLastDirectoryRecordOfTheRootDirectoryEntity", vr: VR::UL },
    E { tag: FILE_SET_CONSISTENCY_FLAG, alias: "FileSetConsistencyFlag", vr: VR::US },
    E { tag: DIRECTORY_RECORD_SEQUENCE, alias: "DirectoryRecordSequence", vr: VR::SQ },
    E { tag: OFFSET_OF_THE_NEXT_DIRECTORY_RECORD, alias: "OffsetOfTheNextDirectoryRecord", vr: VR::UL },
    E { tag: RECORD_IN_USE_FLAG, alias: "RecordInUseFlag", vr: VR::US },
    E { tag: OFFSET_OF_REFERENCED_LOWER_LEVEL_DIRECTORY_ENTITY, alias: "OffsetOfReferencedLowerLevelDirectoryEntity", vr: VR::UL },
    E { tag: DIRECTORY_RECORD_TYPE, alias: "DirectoryRecordType", vr: VR::CS },
    E { tag: REFERENCED_FILE_ID, alias: "ReferencedFileID", vr: VR::CS },
    E { tag: REFERENCED_SOP_CLASS_UID_IN_FILE, alias: "ReferencedSOPClassUIDInFile", vr: VR::UI },
    E { tag: REFERENCED_SOP_INSTANCE_UID_IN_FILE, alias: "ReferencedSOPInstanceUIDInFile", vr: VR::UI },
    E { tag: REFERENCED_TRANSFER_SYNTAX_UID_IN_FILE, alias: "ReferencedTransferSyntaxUIDInFile", vr: VR::UI },
    E { tag: SPECIFIC_CHARACTER_SET, alias: "SpecificCharacterSet", vr: VR::CS },
    E { tag: LANGUAGE_CODE_SEQUENCE, alias: "LanguageCodeSequence", vr: VR::SQ },
    E { tag: IMAGE_TYPE, alias: "ImageType", vr: VR::CS },
    E { tag: INSTANCE_CREATION_DATE, alias: "InstanceCreationDate", vr: VR::DA },
    E { tag: INSTANCE_CREATION_TIME, alias: "InstanceCreationTime", vr: VR::TM },
    E { tag: INSTANCE_CREATOR_UID, alias: "InstanceCreatorUID", vr: VR::UI },
    E { tag: INSTANCE_COERCION_DATE_TIME, alias: "InstanceCoercionDateTime", vr: VR::DT },
    E { tag: SOP_CLASS_UID, alias: "SOPClassUID", vr: VR::UI },
    E { tag: SOP_INSTANCE_UID, alias: "SOPInstanceUID", vr: VR::UI },
    E { tag: RELATED_GENERAL_SOP_CLASS_UID, alias: "RelatedGeneralSOPClassUID", vr: VR::UI },
    E { tag: ORIGINAL_SPECIALIZED_SOP_CLASS_UID, alias: "OriginalSpecializedSOPClassUID", vr: VR::UI },
    E { tag: STUDY_DATE, alias: "StudyDate", vr: VR::DA },
    E { tag: SERIES_DATE, alias: "SeriesDate", vr: VR::DA },
    E { tag: ACQUISITION_DATE, alias: "AcquisitionDate", vr: VR::DA },
    E { tag: CONTENT_DATE, alias: "ContentDate", vr: VR::DA },
    E { tag: ACQUISITION_DATE_TIME, alias: "AcquisitionDateTime", vr: VR::DT },
    E { tag: STUDY_TIME, alias: "StudyTime", vr: VR::TM },
    E { tag: SERIES_TIME, alias: "SeriesTime", vr: VR::TM },
    E { tag: ACQUISITION_TIME, alias: "AcquisitionTime", vr: VR::TM },
    E { tag: CONTENT_TIME, alias: "ContentTime", vr: VR::TM },
    E { tag: ACCESSION_NUMBER, alias: "AccessionNumber", vr: VR::SH },
    E { tag: ISSUER_OF_ACCESSION_NUMBER_SEQUENCE, alias: "IssuerOfAccessionNumberSequence", vr: VR::SQ },
    E { tag: QUERY_RETRIEVE_LEVEL, alias: "QueryRetrieveLevel", vr: VR::CS },
    E { tag: QUERY_RETRIEVE_VIEW, alias: "QueryRetrieveView", vr: VR::CS },
    E { tag: RETRIEVE_AE_TITLE, alias: "RetrieveAETitle", vr: VR::AE },
    E { tag: STATION_AE_TITLE, alias: "StationAETitle", vr: VR::AE },
    E { tag: INSTANCE_AVAILABILITY, alias: "InstanceAvailability", vr: VR::CS },
    E { tag: FAILED_SOP_INSTANCE_UID_LIST, alias: "FailedSOPInstanceUIDList", vr: VR::UI },
    E { tag: MODALITY, alias: "Modality", vr: VR::CS },
    E { tag: MODALITIES_IN_STUDY, alias: "ModalitiesInStudy", vr: VR::CS },
    E { tag: SOP_CLASSES_IN_STUDY, alias: "SOPClassesInStudy", vr: VR::UI },
    E { tag: CONVERSION_TYPE, alias: "ConversionType", vr: VR::CS },
    E { tag: PRESENTATION_INTENT_TYPE, alias: "PresentationIntentType", vr: VR::CS },
    E { tag: MANUFACTURER, alias: "Manufacturer", vr: VR::LO },
    E { tag: INSTITUTION_NAME, alias: "InstitutionName", vr: VR::LO },
    E { tag: INSTITUTION_ADDRESS, alias: "InstitutionAddress", vr: VR::ST },
    E { tag: INSTITUTION_CODE_SEQUENCE, alias: "InstitutionCodeSequence", vr: VR::SQ },
    E { tag: REFERRING_PHYSICIAN_NAME, alias: "ReferringPhysicianName", vr: VR::PN },
    E { tag: REFERRING_PHYSICIAN_ADDRESS, alias: "ReferringPhysicianAddress", vr: VR::ST },
    E { tag: REFERRING_PHYSICIAN_TELEPHONE_NUMBERS, alias: "ReferringPhysicianTelephoneNumbers", vr: VR::SH },
    E { tag: REFERRING_PHYSICIAN_IDENTIFICATION_SEQUENCE, alias: "ReferringPhysicianIdentificationSequence", vr: VR::SQ },
    E { tag: CONSULTING_PHYSICIAN_NAME, alias: "ConsultingPhysicianName", vr: VR::PN },
    E { tag: CODE_VALUE, alias: "CodeValue", vr: VR::SH },
    E { tag: EXTENDED_CODE_VALUE, alias: "ExtendedCodeValue", vr: VR::LO },
    E { tag: CODING_SCHEME_DESIGNATOR, alias: "CodingSchemeDesignator", vr: VR::SH },
    E { tag: CODING_SCHEME_VERSION, alias: "CodingSchemeVersion", vr: VR::SH },
    E { tag: CODE_MEANING, alias: "CodeMeaning", vr: VR::LO },
    E { tag: MAPPING_RESOURCE, alias: "MappingResource", vr: VR::CS },
    E { tag: CONTEXT_GROUP_VERSION, alias: "ContextGroupVersion", vr: VR::DT },
    E { tag: CONTEXT_IDENTIFIER, alias: "ContextIdentifier", vr: VR::CS },
    E { tag: CODING_SCHEME_IDENTIFICATION_SEQUENCE, alias: "CodingSchemeIdentificationSequence", vr: VR::SQ },
    E { tag: CONTEXT_UID, alias: "ContextUID", vr: VR::UI },
    E { tag: MAPPING_RESOURCE_UID, alias: "MappingResourceUID", vr: VR::UI },
    E { tag: LONG_CODE_VALUE, alias: "LongCodeValue", vr: VR::UC },
    E { tag: URN_CODE_VALUE, alias: "URNCodeValue", vr: VR::UR },
    E { tag: TIMEZONE_OFFSET_FROM_UTC, alias: "TimezoneOffsetFromUTC", vr: VR::SH },
    E { tag: STATION_NAME, alias: "StationName", vr: VR::SH },
    E { tag: STUDY_DESCRIPTION, alias: "StudyDescription", vr: VR::LO },
    E { tag: PROCEDURE_CODE_SEQUENCE, alias: "ProcedureCodeSequence", vr: VR::SQ },
    E { tag: SERIES_DESCRIPTION, alias: "SeriesDescription", vr: VR::LO },
    E { tag: SERIES_DESCRIPTION_CODE_SEQUENCE, alias: "SeriesDescriptionCodeSequence", vr: VR::SQ },
    E { tag: INSTITUTIONAL_DEPARTMENT_NAME, alias: "InstitutionalDepartmentName", vr: VR::LO },
    E { tag: PHYSICIANS_OF_RECORD, alias: "PhysiciansOfRecord", vr: VR::PN },
    E { tag: PHYSICIANS_OF_RECORD_IDENTIFICATION_SEQUENCE, alias: "PhysiciansOfRecordIdentificationSequence", vr: VR::SQ },
    E { tag: PERFORMING_PHYSICIAN_NAME, alias: "PerformingPhysicianName", vr: VR::PN },
    E { tag: PERFORMING_PHYSICIAN_IDENTIFICATION_SEQUENCE, alias: "PerformingPhysicianIdentificationSequence", vr: VR::SQ },
    E { tag: NAME_OF_PHYSICIANS_READING_STUDY, alias: "NameOfPhysiciansReadingStudy", vr: VR::PN },
    E { tag: PHYSICIANS_READING_STUDY_IDENTIFICATION_SEQUENCE, alias: "PhysiciansReadingStudyIdentificationSequence", vr: VR::SQ },
    E { tag: OPERATORS_NAME, alias: "OperatorsName", vr: VR::PN },
    E { tag: OPERATOR_IDENTIFICATION_SEQUENCE, alias: "OperatorIdentificationSequence", vr: VR::SQ },
    E { tag: ADMITTING_DIAGNOSES_DESCRIPTION, alias: "AdmittingDiagnosesDescription", vr: VR::LO },
    E { tag: ADMITTING_DIAGNOSES_CODE_SEQUENCE, alias: "AdmittingDiagnosesCodeSequence", vr: VR::SQ },
    E { tag: MANUFACTURER_MODEL_NAME, alias: "ManufacturerModelName", vr: VR::LO },
    E { tag: REFERENCED_STUDY_SEQUENCE, alias: "ReferencedStudySequence", vr: VR::SQ },
    E { tag: REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE, alias: "ReferencedPerformedProcedureStepSequence", vr: VR::SQ },
    E { tag: REFERENCED_SERIES_SEQUENCE, alias: "ReferencedSeriesSequence", vr: VR::SQ },
    E { tag: REFERENCED_PATIENT_SEQUENCE, alias: "ReferencedPatientSequence", vr: VR::SQ },
    E { tag: REFERENCED_VISIT_SEQUENCE, alias: "ReferencedVisitSequence", vr: VR::SQ },
    E { tag: REFERENCED_IMAGE_SEQUENCE, alias: "ReferencedImageSequence", vr: VR::SQ },
    E { tag: REFERENCED_SOP_CLASS_UID, alias: "ReferencedSOPClassUID", vr: VR::UI },
    E { tag: REFERENCED_SOP_INSTANCE_UID, alias: "ReferencedSOPInstanceUID", vr: VR::UI },
    E { tag: REFERENCED_FRAME_NUMBER, alias: "ReferencedFrameNumber", vr: VR::IS },
    E { tag: TRANSACTION_UID, alias: "TransactionUID", vr: VR::UI },
    E { tag: REFERENCED_SOP_SEQUENCE, alias: "ReferencedSOPSequence", vr: VR::SQ },
    E { tag: RELATED_SERIES_SEQUENCE, alias: "RelatedSeriesSequence", vr: VR::SQ },
    E { tag: DERIVATION_DESCRIPTION, alias: "DerivationDescription", vr: VR::ST },
    E { tag: SOURCE_IMAGE_SEQUENCE, alias: "SourceImageSequence", vr: VR::SQ },
    E { tag: STAGE_NAME, alias: "StageName", vr: VR::SH },
    E { tag: STAGE_NUMBER, alias: "StageNumber", vr: VR::IS },
    E { tag: NUMBER_OF_STAGES, alias: "NumberOfStages", vr: VR::IS },
    E { tag: VIEW_NUMBER, alias: "ViewNumber", vr: VR::IS },
    E { tag: ANATOMIC_REGION_SEQUENCE, alias: "AnatomicRegionSequence", vr: VR::SQ },
    E { tag: PRIMARY_ANATOMIC_STRUCTURE_SEQUENCE, alias: "PrimaryAnatomicStructureSequence", vr: VR::SQ },
    E { tag: IRRADIATION_EVENT_UID, alias: "IrradiationEventUID", vr: VR::UI },
    E { tag: FRAME_TYPE, alias: "FrameType", vr: VR::CS },
    E { tag: REFERENCED_IMAGE_EVIDENCE_SEQUENCE, alias: "ReferencedImageEvidenceSequence", vr: VR::SQ },
    E { tag: REFERENCED_RAW_DATA_SEQUENCE, alias: "ReferencedRawDataSequence", vr: VR::SQ },
    E { tag: CREATOR_VERSION_UID, alias: "CreatorVersionUID", vr: VR::UI },
    E { tag: DERIVATION_IMAGE_SEQUENCE, alias: "DerivationImageSequence", vr: VR::SQ },
    E { tag: PIXEL_PRESENTATION, alias: "PixelPresentation", vr: VR::CS },
    E { tag: VOLUMETRIC_PROPERTIES, alias: "VolumetricProperties", vr: VR::CS },
    E { tag: VOLUME_BASED_CALCULATION_TECHNIQUE, alias: "VolumeBasedCalculationTechnique", vr: VR::CS },
    E { tag: COMPLEX_IMAGE_COMPONENT, alias: "ComplexImageComponent", vr: VR::CS },
    E { tag: ACQUISITION_CONTRAST, alias: "AcquisitionContrast", vr: VR::CS },
    E { tag: DERIVATION_CODE_SEQUENCE, alias: "DerivationCodeSequence", vr: VR::SQ },
    E { tag: PATIENT_NAME, alias: "PatientName", vr: VR::PN },
    E { tag: PATIENT_ID, alias: "PatientID", vr: VR::LO },
    E { tag: ISSUER_OF_PATIENT_ID, alias: "IssuerOfPatientID", vr: VR::LO },
    E { tag: TYPE_OF_PATIENT_ID, alias: "TypeOfPatientID", vr: VR::CS },
    E { tag: ISSUER_OF_PATIENT_ID_QUALIFIERS_SEQUENCE, alias: "IssuerOfPatientIDQualifiersSequence", vr: VR::SQ },
    E { tag: PATIENT_BIRTH_DATE, alias: "PatientBirthDate", vr: VR::DA },
    E { tag: PATIENT_BIRTH_TIME, alias: "PatientBirthTime", vr: VR::TM },
    E { tag: PATIENT_SEX, alias: "PatientSex", vr: VR::CS },
    E { tag: PATIENT_INSURANCE_PLAN_CODE_SEQUENCE, alias: "PatientInsurancePlanCodeSequence", vr: VR::SQ },
    E { tag: PATIENT_PRIMARY_LANGUAGE_CODE_SEQUENCE, alias: "PatientPrimaryLanguageCodeSequence", vr: VR::SQ },
    E { tag: QUALITY_CONTROL_SUBJECT, alias: "QualityControlSubject", vr: VR::CS },
    E { tag: OTHER_PATIENT_I_DS, alias: "OtherPatientIDs", vr: VR::LO },
    E { tag: OTHER_PATIENT_NAMES, alias: "OtherPatientNames", vr: VR::PN },
    E { tag: OTHER_PATIENT_I_DS_SEQUENCE, alias: "OtherPatientIDsSequence", vr: VR::SQ },
    E { tag: PATIENT_BIRTH_NAME, alias: "PatientBirthName", vr: VR::PN },
    E { tag: PATIENT_AGE, alias: "PatientAge", vr: VR::AS },
    E { tag: PATIENT_SIZE, alias: "PatientSize", vr: VR::DS },
    E { tag: PATIENT_SIZE_CODE_SEQUENCE, alias: "PatientSizeCodeSequence", vr: VR::SQ },
    E { tag: PATIENT_WEIGHT, alias: "PatientWeight", vr: VR::DS },
    E { tag: PATIENT_ADDRESS, alias: "PatientAddress", vr: VR::LO },
    E { tag: PATIENT_MOTHER_BIRTH_NAME, alias: "PatientMotherBirthName", vr: VR::PN },
    E { tag: MILITARY_RANK, alias: "MilitaryRank", vr: VR::LO },
    E { tag: BRANCH_OF_SERVICE, alias: "BranchOfService", vr: VR::LO },
    E { tag: MEDICAL_RECORD_LOCATOR, alias: "MedicalRecordLocator", vr: VR::LO },
    E { tag: MEDICAL_ALERTS, alias: "MedicalAlerts", vr: VR::LO },
    E { tag: ALLERGIES, alias: "Allergies", vr: VR::LO },
    E { tag: COUNTRY_OF_RESIDENCE, alias: "CountryOfResidence", vr: VR::LO },
    E { tag: REGION_OF_RESIDENCE, alias: "RegionOfResidence", vr: VR::LO },
    E { tag: PATIENT_TELEPHONE_NUMBERS, alias: "PatientTelephoneNumbers", vr: VR::SH },
    E { tag: ETHNIC_GROUP, alias: "EthnicGroup", vr: VR::SH },
    E { tag: OCCUPATION, alias: "Occupation", vr: VR::SH },
    E { tag: SMOKING_STATUS, alias: "SmokingStatus", vr: VR::CS },
    E { tag: ADDITIONAL_PATIENT_HISTORY, alias: "AdditionalPatientHistory", vr: VR::LT },
    E { tag: PREGNANCY_STATUS, alias: "PregnancyStatus", vr: VR::US },
    E { tag: LAST_MENSTRUAL_DATE, alias: "LastMenstrualDate", vr: VR::DA },
    E { tag: PATIENT_RELIGIOUS_PREFERENCE, alias: "PatientReligiousPreference", vr: VR::LO },
    E { tag: PATIENT_SPECIES_DESCRIPTION, alias: "PatientSpeciesDescription", vr: VR::LO },
    E { tag: PATIENT_SEX_NEUTERED, alias: "PatientSexNeutered", vr: VR::CS },
    E { tag: PATIENT_BREED_DESCRIPTION, alias: "PatientBreedDescription", vr: VR::LO },
    E { tag: RESPONSIBLE_PERSON, alias: "ResponsiblePerson", vr: VR::PN },
    E { tag: RESPONSIBLE_PERSON_ROLE, alias: "ResponsiblePersonRole", vr: VR::CS },
    E { tag: RESPONSIBLE_ORGANIZATION, alias: "ResponsibleOrganization", vr: VR::LO },
    E { tag: PATIENT_COMMENTS, alias: "PatientComments", vr: VR::LT },
    E { tag: CLINICAL_TRIAL_SPONSOR_NAME, alias: "ClinicalTrialSponsorName", vr: VR::LO },
    E { tag: CLINICAL_TRIAL_PROTOCOL_ID, alias: "ClinicalTrialProtocolID", vr: VR::LO },
    E { tag: CLINICAL_TRIAL_PROTOCOL_NAME, alias: "ClinicalTrialProtocolName", vr: VR::LO },
    E { tag: CLINICAL_TRIAL_SITE_ID, alias: "ClinicalTrialSiteID", vr: VR::LO },
    E { tag: CLINICAL_TRIAL_SITE_NAME, alias: "ClinicalTrialSiteName", vr: VR::LO },
    E { tag: CLINICAL_TRIAL_SUBJECT_ID, alias: "ClinicalTrialSubjectID", vr: VR::LO },
    E { tag: CLINICAL_TRIAL_SUBJECT_READING_ID, alias: "ClinicalTrialSubjectReadingID", vr: VR::LO },
    E { tag: CLINICAL_TRIAL_TIME_POINT_ID, alias: "ClinicalTrialTimePointID", vr: VR::LO },
    E { tag: PATIENT_IDENTITY_REMOVED, alias: "PatientIdentityRemoved", vr: VR::CS },
    E { tag: DEIDENTIFICATION_METHOD, alias: "DeidentificationMethod", vr: VR::LO },
    E { tag: DEIDENTIFICATION_METHOD_CODE_SEQUENCE, alias: "DeidentificationMethodCodeSequence", vr: VR::SQ },
    E { tag: CONTRAST_BOLUS_AGENT, alias: "ContrastBolusAgent", vr: VR::LO },
    E { tag: CONTRAST_BOLUS_AGENT_SEQUENCE, alias: "ContrastBolusAgentSequence", vr: VR::SQ },
    E { tag: BODY_PART_EXAMINED, alias: "BodyPartExamined", vr: VR::CS },
    E { tag: SCANNING_SEQUENCE, alias: "ScanningSequence", vr: VR::CS },
    E { tag: SEQUENCE_VARIANT, alias: "SequenceVariant", vr: VR::CS },
    E { tag: SCAN_OPTIONS, alias: "ScanOptions", vr: VR::CS },
    E { tag: MR_ACQUISITION_TYPE, alias: "MRAcquisitionType", vr: VR::CS },
    E { tag: SEQUENCE_NAME, alias: "SequenceName", vr: VR::SH },
    E { tag: ANGIO_FLAG, alias: "AngioFlag", vr: VR::CS },
    E { tag: INTERVENTION_DRUG_INFORMATION_SEQUENCE, alias: "InterventionDrugInformationSequence", vr: VR::SQ },
    E { tag: SLICE_THICKNESS, alias: "SliceThickness", vr: VR::DS },
    E { tag: KVP, alias: "KVP", vr: VR::DS },
    E { tag: COUNTS_ACCUMULATED, alias: "CountsAccumulated", vr: VR::IS },
    E { tag: ACQUISITION_TERMINATION_CONDITION, alias: "AcquisitionTerminationCondition", vr: VR::CS },
    E { tag: EFFECTIVE_DURATION, alias: "EffectiveDuration", vr: VR::DS },
    E { tag: ACQUISITION_START_CONDITION, alias: "AcquisitionStartCondition", vr: VR::CS },
    E { tag: ACQUISITION_START_CONDITION_DATA, alias: "AcquisitionStartConditionData", vr: VR::IS },
    E { tag: ACQUISITION_TERMINATION_CONDITION_DATA, alias: "AcquisitionTerminationConditionData", vr: VR::IS },
    E { tag: REPETITION_TIME, alias: "RepetitionTime", vr: VR::DS },
    E { tag: ECHO_TIME, alias: "EchoTime", vr: VR::DS },
    E { tag: INVERSION_TIME, alias: "InversionTime", vr: VR::DS },
    E { tag: NUMBER_OF_AVERAGES, alias: "NumberOfAverages", vr: VR::DS },
    E { tag: IMAGING_FREQUENCY, alias: "ImagingFrequency", vr: VR::DS },
    E { tag: IMAGED_NUCLEUS, alias: "ImagedNucleus", vr: VR::SH },
    E { tag: ECHO_NUMBERS, alias: "EchoNumbers", vr: VR::IS },
    E { tag: MAGNETIC_FIELD_STRENGTH, alias: "MagneticFieldStrength", vr: VR::DS },
    E { tag: SPACING_BETWEEN_SLICES, alias: "SpacingBetweenSlices", vr: VR::DS },
    E { tag: NUMBER_OF_PHASE_ENCODING_STEPS, alias: "NumberOfPhaseEncodingSteps", vr: VR::IS },
    E { tag: DATA_COLLECTION_DIAMETER, alias: "DataCollectionDiameter", vr: VR::DS },
    E { tag: ECHO_TRAIN_LENGTH, alias: "EchoTrainLength", vr: VR::IS },
    E { tag: PERCENT_SAMPLING, alias: "PercentSampling", vr: VR::DS },
    E { tag: PERCENT_PHASE_FIELD_OF_VIEW, alias: "PercentPhaseFieldOfView", vr: VR::DS },
    E { tag: PIXEL_BANDWIDTH, alias: "PixelBandwidth", vr: VR::DS },
    E { tag: DEVICE_SERIAL_NUMBER, alias: "DeviceSerialNumber", vr: VR::LO },
    E { tag: DEVICE_UID, alias: "DeviceUID", vr: VR::UI },
    E { tag: PLATE_ID, alias: "PlateID", vr: VR::LO },
    E { tag: SECONDARY_CAPTURE_DEVICE_ID, alias: "SecondaryCaptureDeviceID", vr: VR::LO },
    E { tag: DATE_OF_SECONDARY_CAPTURE, alias: "DateOfSecondaryCapture", vr: VR::DA },
    E { tag: TIME_OF_SECONDARY_CAPTURE, alias: "TimeOfSecondaryCapture", vr: VR::TM },
    E { tag: SECONDARY_CAPTURE_DEVICE_MANUFACTURER, alias: "SecondaryCaptureDeviceManufacturer", vr: VR::LO },
    E { tag: SECONDARY_CAPTURE_DEVICE_MANUFACTURER_MODEL_NAME, alias: "SecondaryCaptureDeviceManufacturerModelName", vr: VR::LO },
    E { tag: SECONDARY_CAPTURE_DEVICE_SOFTWARE_VERSIONS, alias: "SecondaryCaptureDeviceSoftwareVersions", vr: VR::LO },
    E { tag: SOFTWARE_VERSIONS, alias: "SoftwareVersions", vr: VR::LO },
    E { tag: VIDEO_IMAGE_FORMAT_ACQUIRED, alias: "VideoImageFormatAcquired", vr: VR::SH },
    E { tag: DIGITAL_IMAGE_FORMAT_ACQUIRED, alias: "DigitalImageFormatAcquired", vr: VR::LO },
    E { tag: PROTOCOL_NAME, alias: "ProtocolName", vr: VR::LO },
    E { tag: CONTRAST_BOLUS_ROUTE, alias: "ContrastBolusRoute", vr: VR::LO },
    E { tag: CONTRAST_BOLUS_VOLUME, alias: "ContrastBolusVolume", vr: VR::DS },
    E { tag: CONTRAST_BOLUS_START_TIME, alias: "ContrastBolusStartTime", vr: VR::TM },
    E { tag: CONTRAST_BOLUS_STOP_TIME, alias: "ContrastBolusStopTime", vr: VR::TM },
    E { tag: CONTRAST_BOLUS_TOTAL_DOSE, alias: "ContrastBolusTotalDose", vr: VR::DS },
    E { tag: SPATIAL_RESOLUTION, alias: "SpatialResolution", vr: VR::DS },
    E { tag: TRIGGER_TIME, alias: "TriggerTime", vr: VR::DS },
    E { tag: NOMINAL_INTERVAL, alias: "NominalInterval", vr: VR::IS },
    E { tag: FRAME_TIME, alias: "FrameTime", vr: VR::DS },
    E { tag: FRAME_TIME_VECTOR, alias: "FrameTimeVector", vr: VR::DS },
    E { tag: FRAME_DELAY, alias: "FrameDelay", vr: VR::DS },
    E { tag: RADIOPHARMACEUTICAL_ROUTE, alias: "RadiopharmaceuticalRoute", vr: VR::LO },
    E { tag: RADIOPHARMACEUTICAL_START_TIME, alias: "RadiopharmaceuticalStartTime", vr: VR::TM },
    E { tag: RADIONUCLIDE_TOTAL_DOSE, alias: "RadionuclideTotalDose", vr: VR::DS },
    E { tag: RADIONUCLIDE_HALF_LIFE, alias: "RadionuclideHalfLife", vr: VR::DS },
    E { tag: RADIONUCLIDE_POSITRON_FRACTION, alias: "RadionuclidePositronFraction", vr: VR::DS },
    E { tag: LOW_RR_VALUE, alias: "LowRRValue", vr: VR::IS },
    E { tag: HIGH_RR_VALUE, alias: "HighRRValue", vr: VR::IS },
    E { tag: INTERVALS_ACQUIRED, alias: "IntervalsAcquired", vr: VR::IS },
    E { tag: INTERVALS_REJECTED, alias: "IntervalsRejected", vr: VR::IS },
    E { tag: HEART_RATE, alias: "HeartRate", vr: VR::IS },
    E { tag: RECONSTRUCTION_DIAMETER, alias: "ReconstructionDiameter", vr: VR::DS },
    E { tag: DISTANCE_SOURCE_TO_DETECTOR, alias: "DistanceSourceToDetector", vr: VR::DS },
    E { tag: DISTANCE_SOURCE_TO_PATIENT, alias: "DistanceSourceToPatient", vr: VR::DS },
    E { tag: ESTIMATED_RADIOGRAPHIC_MAGNIFICATION_FACTOR, alias: "EstimatedRadiographicMagnificationFactor", vr: VR::DS },
    E { tag: GANTRY_DETECTOR_TILT, alias: "GantryDetectorTilt", vr: VR::DS },
    E { tag: GANTRY_DETECTOR_SLEW, alias: "GantryDetectorSlew", vr: VR::DS },
    E { tag: TABLE_HEIGHT, alias: "TableHeight", vr: VR::DS },
    E { tag: TABLE_TRAVERSE, alias: "TableTraverse", vr: VR::DS },
    E { tag: TABLE_MOTION, alias: "TableMotion", vr: VR::CS },
    E { tag: TABLE_VERTICAL_INCREMENT, alias: "TableVerticalIncrement", vr: VR::DS },
    E { tag: TABLE_LATERAL_INCREMENT, alias: "TableLateralIncrement", vr: VR::DS },
    E { tag: TABLE_LONGITUDINAL_INCREMENT, alias: "TableLongitudinalIncrement", vr: VR::DS },
    E { tag: TABLE_ANGLE, alias: "TableAngle", vr: VR::DS },
    E { tag: ROTATION_DIRECTION, alias: "RotationDirection", vr: VR::CS },
    E { tag: RADIAL_POSITION, alias: "RadialPosition", vr: VR::DS },
    E { tag: SCAN_ARC, alias: "ScanArc", vr: VR::DS },
    E { tag: ANGULAR_STEP, alias: "AngularStep", vr: VR::DS },
    E { tag: CENTER_OF_ROTATION_OFFSET, alias: "CenterOfRotationOffset", vr: VR::DS },
    E { tag: FIELD_OF_VIEW_SHAPE, alias: "FieldOfViewShape", vr: VR::CS },
    E { tag: FIELD_OF_VIEW_DIMENSIONS, alias: "FieldOfViewDimensions", vr: VR::IS },
    E { tag: EXPOSURE_TIME, alias: "ExposureTime", vr: VR::IS },
    E { tag: X_RAY_TUBE_CURRENT, alias: "XRayTubeCurrent", vr: VR::IS },
    E { tag: EXPOSURE, alias: "Exposure", vr: VR::IS },
    E { tag: EXPOSURE_INU_AS, alias: "ExposureInuAs", vr: VR::IS },
    E { tag: AVERAGE_PULSE_WIDTH, alias: "AveragePulseWidth", vr: VR::DS },
    E { tag: RADIATION_SETTING, alias: "RadiationSetting", vr: VR::CS },
    E { tag: RECTIFICATION_TYPE, alias: "RectificationType", vr: VR::CS },
    E { tag: RADIATION_MODE, alias: "RadiationMode", vr: VR::CS },
    E { tag: IMAGE_AND_FLUOROSCOPY_AREA_DOSE_PRODUCT, alias: "ImageAndFluoroscopyAreaDoseProduct", vr: VR::DS },
    E { tag: FILTER_TYPE, alias: "FilterType", vr: VR::SH },
    E { tag: TYPE_OF_FILTERS, alias: "TypeOfFilters", vr: VR::LO },
    E { tag: INTENSIFIER_SIZE, alias: "IntensifierSize", vr: VR::DS },
    E { tag: IMAGER_PIXEL_SPACING, alias: "ImagerPixelSpacing", vr: VR::DS },
    E { tag: GRID, alias: "Grid", vr: VR::CS },
    E { tag: GENERATOR_POWER, alias: "GeneratorPower", vr: VR::IS },
    E { tag: COLLIMATOR_GRID_NAME, alias: "CollimatorGridName", vr: VR::SH },
    E { tag: COLLIMATOR_TYPE, alias: "CollimatorType", vr: VR::CS },
    E { tag: FOCAL_SPOTS, alias: "FocalSpots", vr: VR::DS },
    E { tag: ANODE_TARGET_MATERIAL, alias: "AnodeTargetMaterial", vr: VR::CS },
    E { tag: BODY_PART_THICKNESS, alias: "BodyPartThickness", vr: VR::DS },
    E { tag: COMPRESSION_FORCE, alias: "CompressionForce", vr: VR::DS },
    E { tag: DATE_OF_LAST_CALIBRATION, alias: "DateOfLastCalibration", vr: VR::DA },
    E { tag: TIME_OF_LAST_CALIBRATION, alias: "TimeOfLastCalibration", vr: VR::TM },
    E { tag: CONVOLUTION_KERNEL, alias: "ConvolutionKernel", vr: VR::SH },
    E { tag: ACTUAL_FRAME_DURATION, alias: "ActualFrameDuration", vr: VR::IS },
    E { tag: COUNT_RATE, alias: "CountRate", vr: VR::IS },
    E { tag: RECEIVE_COIL_NAME, alias: "ReceiveCoilName", vr: VR::SH },
    E { tag: TRANSMIT_COIL_NAME, alias: "TransmitCoilName", vr: VR::SH },
    E { tag: PLATE_TYPE, alias: "PlateType", vr: VR::SH },
    E { tag: PHOSPHOR_TYPE, alias: "PhosphorType", vr: VR::LO },
    E { tag: SCAN_VELOCITY, alias: "ScanVelocity", vr: VR::DS },
    E { tag: WHOLE_BODY_TECHNIQUE, alias: "WholeBodyTechnique", vr: VR::CS },
    E { tag: SCAN_LENGTH, alias: "ScanLength", vr: VR::IS },
    E { tag: ACQUISITION_MATRIX, alias: "AcquisitionMatrix", vr: VR::US },
    E { tag: IN_PLANE_PHASE_ENCODING_DIRECTION, alias: "InPlanePhaseEncodingDirection", vr: VR::CS },
    E { tag: FLIP_ANGLE, alias: "FlipAngle", vr: VR::DS },
    E { tag: VARIABLE_FLIP_ANGLE_FLAG, alias: "VariableFlipAngleFlag", vr: VR::CS },
    E { tag: SAR, alias: "SAR", vr: VR::DS },
    E { tag: DB_DT, alias: "dBdt", vr: VR::DS },
    E { tag: ACQUISITION_DEVICE_PROCESSING_DESCRIPTION, alias: "AcquisitionDeviceProcessingDescription", vr: VR::LO },
    E { tag: ACQUISITION_DEVICE_PROCESSING_CODE, alias: "AcquisitionDeviceProcessingCode", vr: VR::LO },
    E { tag: CASSETTE_ORIENTATION, alias: "CassetteOrientation", vr: VR::CS },
    E { tag: CASSETTE_SIZE, alias: "CassetteSize", vr: VR::CS },
    E { tag: EXPOSURES_ON_PLATE, alias: "ExposuresOnPlate", vr: VR::US },
    E { tag: RELATIVE_X_RAY_EXPOSURE, alias: "RelativeXRayExposure", vr: VR::IS },
    E { tag: EXPOSURE_INDEX, alias: "ExposureIndex", vr: VR::DS },
    E { tag: TARGET_EXPOSURE_INDEX, alias: "TargetExposureIndex", vr: VR::DS },
    E { tag: DEVIATION_INDEX, alias: "DeviationIndex", vr: VR::DS },
    E { tag: COLUMN_ANGULATION, alias: "ColumnAngulation", vr: VR::DS },
    E { tag: POSITIONER_MOTION, alias: "PositionerMotion", vr: VR::CS },
    E { tag: POSITIONER_TYPE, alias: "PositionerType", vr: VR::CS },
    E { tag: POSITIONER_PRIMARY_ANGLE, alias: "PositionerPrimaryAngle", vr: VR::DS },
    E { tag: POSITIONER_SECONDARY_ANGLE, alias: "PositionerSecondaryAngle", vr: VR::DS },
    E { tag: SHUTTER_SHAPE, alias: "ShutterShape", vr: VR::CS },
    E { tag: PATIENT_POSITION, alias: "PatientPosition", vr: VR::CS },
    E { tag: VIEW_POSITION, alias: "ViewPosition", vr: VR::CS },
    E { tag: SENSITIVITY, alias: "Sensitivity", vr: VR::DS },
    E { tag: SEQUENCE_OF_ULTRASOUND_REGIONS, alias: "SequenceOfUltrasoundRegions", vr: VR::SQ },
    E { tag: DETECTOR_TYPE, alias: "DetectorType", vr: VR::CS },
    E { tag: CONTENT_QUALIFICATION, alias: "ContentQualification", vr: VR::CS },
    E { tag: PULSE_SEQUENCE_NAME, alias: "PulseSequenceName", vr: VR::SH },
    E { tag: ACQUISITION_DURATION, alias: "AcquisitionDuration", vr: VR::FD },
    E { tag: DIFFUSION_B_VALUE, alias: "DiffusionBValue", vr: VR::FD },
    E { tag: DIFFUSION_GRADIENT_ORIENTATION, alias: "DiffusionGradientOrientation", vr: VR::FD },
    E { tag: CONTRIBUTING_EQUIPMENT_SEQUENCE, alias: "ContributingEquipmentSequence", vr: VR::SQ },
    E { tag: CONTRIBUTION_DATE_TIME, alias: "ContributionDateTime", vr: VR::DT },
    E { tag: CONTRIBUTION_DESCRIPTION, alias: "ContributionDescription", vr: VR::ST },
    E { tag: STUDY_INSTANCE_UID, alias: "StudyInstanceUID", vr: VR::UI },
    E { tag: SERIES_INSTANCE_UID, alias: "SeriesInstanceUID", vr: VR::UI },
    E { tag: STUDY_ID, alias: "StudyID", vr: VR::SH },
    E { tag: SERIES_NUMBER, alias: "SeriesNumber", vr: VR::IS },
    E { tag: ACQUISITION_NUMBER, alias: "AcquisitionNumber", vr: VR::IS },
    E { tag: INSTANCE_NUMBER, alias: "InstanceNumber", vr: VR::IS },
    E { tag: ITEM_NUMBER, alias: "ItemNumber", vr: VR::IS },
    E { tag: PATIENT_ORIENTATION, alias: "PatientOrientation", vr: VR::CS },
    E { tag: IMAGE_POSITION_PATIENT, alias: "ImagePositionPatient", vr: VR::DS },
    E { tag: IMAGE_ORIENTATION_PATIENT, alias: "ImageOrientationPatient", vr: VR::DS },
    E { tag: FRAME_OF_REFERENCE_UID, alias: "FrameOfReferenceUID", vr: VR::UI },
    E { tag: LATERALITY, alias: "Laterality", vr: VR::CS },
    E { tag: IMAGE_LATERALITY, alias: "ImageLaterality", vr: VR::CS },
    E { tag: TEMPORAL_POSITION_IDENTIFIER, alias: "TemporalPositionIdentifier", vr: VR::IS },
    E { tag: NUMBER_OF_TEMPORAL_POSITIONS, alias: "NumberOfTemporalPositions", vr: VR::IS },
    E { tag: TEMPORAL_RESOLUTION, alias: "TemporalResolution", vr: VR::DS },
    E { tag: SYNCHRONIZATION_FRAME_OF_REFERENCE_UID, alias: "SynchronizationFrameOfReferenceUID", vr: VR::UI },
    E { tag: SOP_INSTANCE_UID_OF_CONCATENATION_SOURCE, alias: "SOPInstanceUIDOfConcatenationSource", vr: VR::UI },
    E { tag: IMAGES_IN_ACQUISITION, alias: "ImagesInAcquisition", vr: VR::IS },
    E { tag: POSITION_REFERENCE_INDICATOR, alias: "PositionReferenceIndicator", vr: VR::LO },
    E { tag: SLICE_LOCATION, alias: "SliceLocation", vr: VR::DS },
    E { tag: NUMBER_OF_PATIENT_RELATED_STUDIES, alias: "NumberOfPatientRelatedStudies", vr: VR::IS },
    E { tag: NUMBER_OF_PATIENT_RELATED_SERIES, alias: "NumberOfPatientRelatedSeries", vr: VR::IS },
    E { tag: NUMBER_OF_PATIENT_RELATED_INSTANCES, alias: "NumberOfPatientRelatedInstances", vr: VR::IS },
    E { tag: NUMBER_OF_STUDY_RELATED_SERIES, alias: "NumberOfStudyRelatedSeries", vr: VR::IS },
    E { tag: NUMBER_OF_STUDY_RELATED_INSTANCES, alias: "NumberOfStudyRelatedInstances", vr: VR::IS },
    E { tag: NUMBER_OF_SERIES_RELATED_INSTANCES, alias: "NumberOfSeriesRelatedInstances", vr: VR::IS },
    E { tag: IMAGE_COMMENTS, alias: "ImageComments", vr: VR::LT },
    E { tag: STACK_ID, alias: "StackID", vr: VR::SH },
    E { tag: IN_STACK_POSITION_NUMBER, alias: "InStackPositionNumber", vr: VR::UL },
    E { tag: FRAME_ANATOMY_SEQUENCE, alias: "FrameAnatomySequence", vr: VR::SQ },
    E { tag: FRAME_LATERALITY, alias: "FrameLaterality", vr: VR::CS },
    E { tag: FRAME_CONTENT_SEQUENCE, alias: "FrameContentSequence", vr: VR::SQ },
    E { tag: PLANE_POSITION_SEQUENCE, alias: "PlanePositionSequence", vr: VR::SQ },
    E { tag: PLANE_ORIENTATION_SEQUENCE, alias: "PlaneOrientationSequence", vr: VR::SQ },
    E { tag: TEMPORAL_POSITION_INDEX, alias: "TemporalPositionIndex", vr: VR::UL },
    E { tag: NOMINAL_CARDIAC_TRIGGER_DELAY_TIME, alias: "NominalCardiacTriggerDelayTime", vr: VR::FD },
    E { tag: FRAME_ACQUISITION_NUMBER, alias: "FrameAcquisitionNumber", vr: VR::US },
    E { tag: DIMENSION_INDEX_VALUES, alias: "DimensionIndexValues", vr: VR::UL },
    E { tag: FRAME_COMMENTS, alias: "FrameComments", vr: VR::LT },
    E { tag: CONCATENATION_UID, alias: "ConcatenationUID", vr: VR::UI },
    E { tag: IN_CONCATENATION_NUMBER, alias: "InConcatenationNumber", vr: VR::US },
    E { tag: IN_CONCATENATION_TOTAL_NUMBER, alias: "InConcatenationTotalNumber", vr: VR::US },
    E { tag: DIMENSION_ORGANIZATION_UID, alias: "DimensionOrganizationUID", vr: VR::UI },
    E { tag: DIMENSION_INDEX_POINTER, alias: "DimensionIndexPointer", vr: VR::AT },
    E { tag: FUNCTIONAL_GROUP_POINTER, alias: "FunctionalGroupPointer", vr: VR::AT },
    E { tag: DIMENSION_ORGANIZATION_SEQUENCE, alias: "DimensionOrganizationSequence", vr: VR::SQ },
    E { tag: DIMENSION_INDEX_SEQUENCE, alias: "DimensionIndexSequence", vr: VR::SQ },
    E { tag: CONCATENATION_FRAME_OFFSET_NUMBER, alias: "ConcatenationFrameOffsetNumber", vr: VR::UL },
    E { tag: FUNCTIONAL_GROUP_PRIVATE_CREATOR, alias: "FunctionalGroupPrivateCreator", vr: VR::LO },
    E { tag: NOMINAL_PERCENTAGE_OF_CARDIAC_PHASE, alias: "NominalPercentageOfCardiacPhase", vr: VR::FL },
    E { tag: DIMENSION_DESCRIPTION_LABEL, alias: "DimensionDescriptionLabel", vr: VR::LO },
    E { tag: SAMPLES_PER_PIXEL, alias: "SamplesPerPixel", vr: VR::US },
    E { tag: SAMPLES_PER_PIXEL_USED, alias: "SamplesPerPixelUsed", vr: VR::US },
    E { tag: PHOTOMETRIC_INTERPRETATION, alias: "PhotometricInterpretation", vr: VR::CS },
    E { tag: PLANAR_CONFIGURATION, alias: "PlanarConfiguration", vr: VR::US },
    E { tag: NUMBER_OF_FRAMES, alias: "NumberOfFrames", vr: VR::IS },
    E { tag: FRAME_INCREMENT_POINTER, alias: "FrameIncrementPointer", vr: VR::AT },
    E { tag: FRAME_DIMENSION_POINTER, alias: "FrameDimensionPointer", vr: VR::AT },
    E { tag: ROWS, alias: "Rows", vr: VR::US },
    E { tag: COLUMNS, alias: "Columns", vr: VR::US },
    E { tag: PIXEL_SPACING, alias: "PixelSpacing", vr: VR::DS },
    E { tag: ZOOM_FACTOR, alias: "ZoomFactor", vr: VR::DS },
    E { tag: ZOOM_CENTER, alias: "ZoomCenter", vr: VR::DS },
    E { tag: PIXEL_ASPECT_RATIO, alias: "PixelAspectRatio", vr: VR::IS },
    E { tag: CORRECTED_IMAGE, alias: "CorrectedImage", vr: VR::CS },
    E { tag: BITS_ALLOCATED, alias: "BitsAllocated", vr: VR::US },
    E { tag: BITS_STORED, alias: "BitsStored", vr: VR::US },
    E { tag: HIGH_BIT, alias: "HighBit", vr: VR::US },
    E { tag: PIXEL_REPRESENTATION, alias: "PixelRepresentation", vr: VR::US },
    E { tag: SMALLEST_IMAGE_PIXEL_VALUE, alias: "SmallestImagePixelValue", vr: VR::US },
    E { tag: LARGEST_IMAGE_PIXEL_VALUE, alias: "LargestImagePixelValue", vr: VR::US },
    E { tag: SMALLEST_PIXEL_VALUE_IN_SERIES, alias: "SmallestPixelValueInSeries", vr: VR::US },
    E { tag: LARGEST_PIXEL_VALUE_IN_SERIES, alias: "LargestPixelValueInSeries", vr: VR::US },
    E { tag: PIXEL_PADDING_VALUE, alias: "PixelPaddingValue", vr: VR::US },
    E { tag: PIXEL_PADDING_RANGE_LIMIT, alias: "PixelPaddingRangeLimit", vr: VR::US },
    E { tag: FLOAT_PIXEL_PADDING_VALUE, alias: "FloatPixelPaddingValue", vr: VR::FL },
    E { tag: QUALITY_CONTROL_IMAGE, alias: "QualityControlImage", vr: VR::CS },
    E { tag: BURNED_IN_ANNOTATION, alias: "BurnedInAnnotation", vr: VR::CS },
    E { tag: RECOGNIZABLE_VISUAL_FEATURES, alias: "RecognizableVisualFeatures", vr: VR::CS },
    E { tag: LONGITUDINAL_TEMPORAL_INFORMATION_MODIFIED, alias: "LongitudinalTemporalInformationModified", vr: VR::CS },
    E { tag: PIXEL_SPACING_CALIBRATION_TYPE, alias: "PixelSpacingCalibrationType", vr: VR::CS },
    E { tag: PIXEL_SPACING_CALIBRATION_DESCRIPTION, alias: "PixelSpacingCalibrationDescription", vr: VR::LO },
    E { tag: PIXEL_INTENSITY_RELATIONSHIP, alias: "PixelIntensityRelationship", vr: VR::CS },
    E { tag: PIXEL_INTENSITY_RELATIONSHIP_SIGN, alias: "PixelIntensityRelationshipSign", vr: VR::SS },
    E { tag: WINDOW_CENTER, alias: "WindowCenter", vr: VR::DS },
    E { tag: WINDOW_WIDTH, alias: "WindowWidth", vr: VR::DS },
    E { tag: RESCALE_INTERCEPT, alias: "RescaleIntercept", vr: VR::DS },
    E { tag: RESCALE_SLOPE, alias: "RescaleSlope", vr: VR::DS },
    E { tag: RESCALE_TYPE, alias: "RescaleType", vr: VR::LO },
    E { tag: WINDOW_CENTER_WIDTH_EXPLANATION, alias: "WindowCenterWidthExplanation", vr: VR::LO },
    E { tag: VOILUT_FUNCTION, alias: "VOILUTFunction", vr: VR::CS },
    E { tag: RECOMMENDED_VIEWING_MODE, alias: "RecommendedViewingMode", vr: VR::CS },
    E { tag: RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR, alias: "RedPaletteColorLookupTableDescriptor", vr: VR::US },
    E { tag: GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR, alias: "GreenPaletteColorLookupTableDescriptor", vr: VR::US },
    E { tag: BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR, alias: "BluePaletteColorLookupTableDescriptor", vr: VR::US },
    E { tag: PALETTE_COLOR_LOOKUP_TABLE_UID, alias: "PaletteColorLookupTableUID", vr: VR::UI },
    E { tag: RED_PALETTE_COLOR_LOOKUP_TABLE_DATA, alias: "RedPaletteColorLookupTableData", vr: VR::OW },
    E { tag: GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA, alias: "GreenPaletteColorLookupTableData", vr: VR::OW },
    E { tag: BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA, alias: "BluePaletteColorLookupTableData", vr: VR::OW },
    E { tag: SEGMENTED_RED_PALETTE_COLOR_LOOKUP_TABLE_DATA, alias: "SegmentedRedPaletteColorLookupTableData", vr: VR::OW },
    E { tag: SEGMENTED_GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA, alias: "SegmentedGreenPaletteColorLookupTableData", vr: VR::OW },
    E { tag: SEGMENTED_BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA, alias: "SegmentedBluePaletteColorLookupTableData", vr: VR::OW },
    E { tag: BREAST_IMPLANT_PRESENT, alias: "BreastImplantPresent", vr: VR::CS },
    E { tag: PARTIAL_VIEW, alias: "PartialView", vr: VR::CS },
    E { tag: PARTIAL_VIEW_DESCRIPTION, alias: "PartialViewDescription", vr: VR::ST },
    E { tag: ICC_PROFILE, alias: "ICCProfile", vr: VR::OB },
    E { tag: LOSSY_IMAGE_COMPRESSION, alias: "LossyImageCompression", vr: VR::CS },
    E { tag: LOSSY_IMAGE_COMPRESSION_RATIO, alias: "LossyImageCompressionRatio", vr: VR::DS },
    E { tag: LOSSY_IMAGE_COMPRESSION_METHOD, alias: "LossyImageCompressionMethod", vr: VR::CS },
    E { tag: MODALITY_LUT_SEQUENCE, alias: "ModalityLUTSequence", vr: VR::SQ },
    E { tag: LUT_DESCRIPTOR, alias: "LUTDescriptor", vr: VR::US },
    E { tag: LUT_EXPLANATION, alias: "LUTExplanation", vr: VR::LO },
    E { tag: MODALITY_LUT_TYPE, alias: "ModalityLUTType", vr: VR::LO },
    E { tag: LUT_DATA, alias: "LUTData", vr: VR::US },
    E { tag: VOILUT_SEQUENCE, alias: "VOILUTSequence", vr: VR::SQ },
    E { tag: BI_PLANE_ACQUISITION_SEQUENCE, alias: "BiPlaneAcquisitionSequence", vr: VR::SQ },
    E { tag: REPRESENTATIVE_FRAME_NUMBER, alias: "RepresentativeFrameNumber", vr: VR::US },
    E { tag: FRAME_NUMBERS_OF_INTEREST, alias: "FrameNumbersOfInterest", vr: VR::US },
    E { tag: FRAME_OF_INTEREST_DESCRIPTION, alias: "FrameOfInterestDescription", vr: VR::LO },
    E { tag: FRAME_OF_INTEREST_TYPE, alias: "FrameOfInterestType", vr: VR::CS },
    E { tag: R_WAVE_POINTER, alias: "RWavePointer", vr: VR::US },
    E { tag: MASK_SUBTRACTION_SEQUENCE, alias: "MaskSubtractionSequence", vr: VR::SQ },
    E { tag: MASK_OPERATION, alias: "MaskOperation", vr: VR::CS },
    E { tag: APPLICABLE_FRAME_RANGE, alias: "ApplicableFrameRange", vr: VR::US },
    E { tag: MASK_FRAME_NUMBERS, alias: "MaskFrameNumbers", vr: VR::US },
    E { tag: CONTRAST_FRAME_AVERAGING, alias: "ContrastFrameAveraging", vr: VR::US },
    E { tag: MASK_SUB_PIXEL_SHIFT, alias: "MaskSubPixelShift", vr: VR::FL },
    E { tag: TID_OFFSET, alias: "TIDOffset", vr: VR::SS },
    E { tag: MASK_OPERATION_EXPLANATION, alias: "MaskOperationExplanation", vr: VR::ST },
    E { tag: PIXEL_DATA_PROVIDER_URL, alias: "PixelDataProviderURL", vr: VR::UR },
    E { tag: DATA_POINT_ROWS, alias: "DataPointRows", vr: VR::UL },
    E { tag: DATA_POINT_COLUMNS, alias: "DataPointColumns", vr: VR::UL },
    E { tag: SIGNAL_DOMAIN_COLUMNS, alias: "SignalDomainColumns", vr: VR::CS },
    E { tag: DATA_REPRESENTATION, alias: "DataRepresentation", vr: VR::CS },
    E { tag: PIXEL_MEASURES_SEQUENCE, alias: "PixelMeasuresSequence", vr: VR::SQ },
    E { tag: FRAME_VOILUT_SEQUENCE, alias: "FrameVOILUTSequence", vr: VR::SQ },
    E { tag: PIXEL_VALUE_TRANSFORMATION_SEQUENCE, alias: "PixelValueTransformationSequence", vr: VR::SQ },
    E { tag: SIGNAL_DOMAIN_ROWS, alias: "SignalDomainRows", vr: VR::CS },
    E { tag: DISPLAY_FILTER_PERCENTAGE, alias: "DisplayFilterPercentage", vr: VR::FL },
    E { tag: FRAME_PIXEL_SHIFT_SEQUENCE, alias: "FramePixelShiftSequence", vr: VR::SQ },
    E { tag: SUBTRACTION_ITEM_ID, alias: "SubtractionItemID", vr: VR::US },
    E { tag: PIXEL_INTENSITY_RELATIONSHIP_LUT_SEQUENCE, alias: "PixelIntensityRelationshipLUTSequence", vr: VR::SQ },
    E { tag: FRAME_PIXEL_DATA_PROPERTIES_SEQUENCE, alias: "FramePixelDataPropertiesSequence", vr: VR::SQ },
    E { tag: GEOMETRICAL_PROPERTIES, alias: "GeometricalProperties", vr: VR::CS },
    E { tag: GEOMETRIC_MAXIMUM_DISTORTION, alias: "GeometricMaximumDistortion", vr: VR::FL },
    E { tag: IMAGE_PROCESSING_APPLIED, alias: "ImageProcessingApplied", vr: VR::CS },
    E { tag: MASK_SELECTION_MODE, alias: "MaskSelectionMode", vr: VR::CS },
    E { tag: LUT_FUNCTION, alias: "LUTFunction", vr: VR::CS },
    E { tag: MASK_VISIBILITY_PERCENTAGE, alias: "MaskVisibilityPercentage", vr: VR::FL },
    E { tag: PIXEL_SHIFT_SEQUENCE, alias: "PixelShiftSequence", vr: VR::SQ },
    E { tag: REGION_PIXEL_SHIFT_SEQUENCE, alias: "RegionPixelShiftSequence", vr: VR::SQ },
    E { tag: VERTICES_OF_THE_REGION, alias: "VerticesOfTheRegion", vr: VR::SS },
    E { tag: MULTI_FRAME_PRESENTATION_SEQUENCE, alias: "MultiFramePresentationSequence", vr: VR::SQ },
    E { tag: PIXEL_SHIFT_FRAME_RANGE, alias: "PixelShiftFrameRange", vr: VR::US },
    E { tag: LUT_FRAME_RANGE, alias: "LUTFrameRange", vr: VR::US },
    E { tag: IMAGE_TO_EQUIPMENT_MAPPING_MATRIX, alias: "ImageToEquipmentMappingMatrix", vr: VR::DS },
    E { tag: EQUIPMENT_COORDINATE_SYSTEM_IDENTIFICATION, alias: "EquipmentCoordinateSystemIdentification", vr: VR::CS },
    E { tag: REQUESTING_PHYSICIAN, alias: "RequestingPhysician", vr: VR::PN },
    E { tag: REQUESTING_SERVICE, alias: "RequestingService", vr: VR::LO },
    E { tag: REQUESTING_SERVICE_CODE_SEQUENCE, alias: "RequestingServiceCodeSequence", vr: VR::SQ },
    E { tag: REQUESTED_PROCEDURE_DESCRIPTION, alias: "RequestedProcedureDescription", vr: VR::LO },
    E { tag: REQUESTED_PROCEDURE_CODE_SEQUENCE, alias: "RequestedProcedureCodeSequence", vr: VR::SQ },
    E { tag: REQUESTED_CONTRAST_AGENT, alias: "RequestedContrastAgent", vr: VR::LO },
    E { tag: STUDY_COMMENTS, alias: "StudyComments", vr: VR::LT },
    E { tag: VISIT_STATUS_ID, alias: "VisitStatusID", vr: VR::CS },
    E { tag: ADMISSION_ID, alias: "AdmissionID", vr: VR::LO },
    E { tag: ISSUER_OF_ADMISSION_ID_SEQUENCE, alias: "IssuerOfAdmissionIDSequence", vr: VR::SQ },
    E { tag: SPECIAL_NEEDS, alias: "SpecialNeeds", vr: VR::LO },
    E { tag: SERVICE_EPISODE_ID, alias: "ServiceEpisodeID", vr: VR::LO },
    E { tag: SERVICE_EPISODE_DESCRIPTION, alias: "ServiceEpisodeDescription", vr: VR::LO },
    E { tag: CURRENT_PATIENT_LOCATION, alias: "CurrentPatientLocation", vr: VR::LO },
    E { tag: PATIENT_INSTITUTION_RESIDENCE, alias: "PatientInstitutionResidence", vr: VR::LO },
    E { tag: PATIENT_STATE, alias: "PatientState", vr: VR::LO },
    E { tag: VISIT_COMMENTS, alias: "VisitComments", vr: VR::LT },
    E { tag: SCHEDULED_STATION_AE_TITLE, alias: "ScheduledStationAETitle", vr: VR::AE },
    E { tag: SCHEDULED_PROCEDURE_STEP_START_DATE, alias: "ScheduledProcedureStepStartDate", vr: VR::DA },
    E { tag: SCHEDULED_PROCEDURE_STEP_START_TIME, alias: "ScheduledProcedureStepStartTime", vr: VR::TM },
    E { tag: SCHEDULED_PROCEDURE_STEP_END_DATE, alias: "ScheduledProcedureStepEndDate", vr: VR::DA },
    E { tag: SCHEDULED_PROCEDURE_STEP_END_TIME, alias: "ScheduledProcedureStepEndTime", vr: VR::TM },
    E { tag: SCHEDULED_PERFORMING_PHYSICIAN_NAME, alias: "ScheduledPerformingPhysicianName", vr: VR::PN },
    E { tag: SCHEDULED_PROCEDURE_STEP_DESCRIPTION, alias: "ScheduledProcedureStepDescription", vr: VR::LO },
    E { tag: SCHEDULED_PROTOCOL_CODE_SEQUENCE, alias: "ScheduledProtocolCodeSequence", vr: VR::SQ },
    E { tag: SCHEDULED_PROCEDURE_STEP_ID, alias: "ScheduledProcedureStepID", vr: VR::SH },
    E { tag: SCHEDULED_STATION_NAME, alias: "ScheduledStationName", vr: VR::SH },
    E { tag: SCHEDULED_PROCEDURE_STEP_LOCATION, alias: "ScheduledProcedureStepLocation", vr: VR::SH },
    E { tag: PRE_MEDICATION, alias: "PreMedication", vr: VR::LO },
    E { tag: SCHEDULED_PROCEDURE_STEP_STATUS, alias: "ScheduledProcedureStepStatus", vr: VR::CS },
    E { tag: SCHEDULED_PROCEDURE_STEP_SEQUENCE, alias: "ScheduledProcedureStepSequence", vr: VR::SQ },
    E { tag: PERFORMED_PROCEDURE_STEP_START_DATE, alias: "PerformedProcedureStepStartDate", vr: VR::DA },
    E { tag: PERFORMED_PROCEDURE_STEP_START_TIME, alias: "PerformedProcedureStepStartTime", vr: VR::TM },
    E { tag: PERFORMED_PROCEDURE_STEP_END_DATE, alias: "PerformedProcedureStepEndDate", vr: VR::DA },
    E { tag: PERFORMED_PROCEDURE_STEP_END_TIME, alias: "PerformedProcedureStepEndTime", vr: VR::TM },
    E { tag: PERFORMED_PROCEDURE_STEP_STATUS, alias: "PerformedProcedureStepStatus", vr: VR::CS },
    E { tag: PERFORMED_PROCEDURE_STEP_ID, alias: "PerformedProcedureStepID", vr: VR::SH },
    E { tag: PERFORMED_PROCEDURE_STEP_DESCRIPTION, alias: "PerformedProcedureStepDescription", vr: VR::LO },
    E { tag: PERFORMED_PROTOCOL_CODE_SEQUENCE, alias: "PerformedProtocolCodeSequence", vr: VR::SQ },
    E { tag: REQUEST_ATTRIBUTES_SEQUENCE, alias: "RequestAttributesSequence", vr: VR::SQ },
    E { tag: COMMENTS_ON_THE_PERFORMED_PROCEDURE_STEP, alias: "CommentsOnThePerformedProcedureStep", vr: VR::ST },
    E { tag: CONTENT_ITEM_MODIFIER_SEQUENCE, alias: "ContentItemModifierSequence", vr: VR::SQ },
    E { tag: ACQUISITION_CONTEXT_SEQUENCE, alias: "AcquisitionContextSequence", vr: VR::SQ },
    E { tag: MEASUREMENT_UNITS_CODE_SEQUENCE, alias: "MeasurementUnitsCodeSequence", vr: VR::SQ },
    E { tag: REQUESTED_PROCEDURE_ID, alias: "RequestedProcedureID", vr: VR::SH },
    E { tag: REASON_FOR_THE_REQUESTED_PROCEDURE, alias: "ReasonForTheRequestedProcedure", vr: VR::LO },
    E { tag: REQUESTED_PROCEDURE_PRIORITY, alias: "RequestedProcedurePriority", vr: VR::SH },
    E { tag: PATIENT_TRANSPORT_ARRANGEMENTS, alias: "PatientTransportArrangements", vr: VR::LO },
    E { tag: REQUESTED_PROCEDURE_COMMENTS, alias: "RequestedProcedureComments", vr: VR::LT },
    E { tag: PLACER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST, alias: "PlacerOrderNumberImagingServiceRequest", vr: VR::LO },
    E { tag: FILLER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST, alias: "FillerOrderNumberImagingServiceRequest", vr: VR::LO },
    E { tag: IMAGING_SERVICE_REQUEST_COMMENTS, alias: "ImagingServiceRequestComments", vr: VR::LT },
    E { tag: REAL_WORLD_VALUE_MAPPING_SEQUENCE, alias: "RealWorldValueMappingSequence", vr: VR::SQ },
    E { tag: LUT_LABEL, alias: "LUTLabel", vr: VR::SH },
    E { tag: REAL_WORLD_VALUE_LAST_VALUE_MAPPED, alias: "RealWorldValueLastValueMapped", vr: VR::US },
    E { tag: REAL_WORLD_VALUE_LUT_DATA, alias: "RealWorldValueLUTData", vr: VR::FD },
    E { tag: REAL_WORLD_VALUE_FIRST_VALUE_MAPPED, alias: "RealWorldValueFirstValueMapped", vr: VR::US },
    E { tag: REAL_WORLD_VALUE_INTERCEPT, alias: "RealWorldValueIntercept", vr: VR::FD },
    E { tag: REAL_WORLD_VALUE_SLOPE, alias: "RealWorldValueSlope", vr: VR::FD },
    E { tag: RELATIONSHIP_TYPE, alias: "RelationshipType", vr: VR::CS },
    E { tag: VERIFYING_ORGANIZATION, alias: "VerifyingOrganization", vr: VR::LO },
    E { tag: VERIFICATION_DATE_TIME, alias: "VerificationDateTime", vr: VR::DT },
    E { tag: OBSERVATION_DATE_TIME, alias: "ObservationDateTime", vr: VR::DT },
    E { tag: VALUE_TYPE, alias: "ValueType", vr: VR::CS },
    E { tag: CONCEPT_NAME_CODE_SEQUENCE, alias: "ConceptNameCodeSequence", vr: VR::SQ },
    E { tag: CONTINUITY_OF_CONTENT, alias: "ContinuityOfContent", vr: VR::CS },
    E { tag: VERIFYING_OBSERVER_SEQUENCE, alias: "VerifyingObserverSequence", vr: VR::SQ },
    E { tag: VERIFYING_OBSERVER_NAME, alias: "VerifyingObserverName", vr: VR::PN },
    E { tag: DATE_TIME, alias: "DateTime", vr: VR::DT },
    E { tag: DATE, alias: "Date", vr: VR::DA },
    E { tag: TIME, alias: "Time", vr: VR::TM },
    E { tag: PERSON_NAME, alias: "PersonName", vr: VR::PN },
    E { tag: UID, alias: "UID", vr: VR::UI },
    E { tag: TEXT_VALUE, alias: "TextValue", vr: VR::UT },
    E { tag: CONCEPT_CODE_SEQUENCE, alias: "ConceptCodeSequence", vr: VR::SQ },
    E { tag: MEASURED_VALUE_SEQUENCE, alias: "MeasuredValueSequence", vr: VR::SQ },
    E { tag: NUMERIC_VALUE, alias: "NumericValue", vr: VR::DS },
    E { tag: REFERENCED_REQUEST_SEQUENCE, alias: "ReferencedRequestSequence", vr: VR::SQ },
    E { tag: PERFORMED_PROCEDURE_CODE_SEQUENCE, alias: "PerformedProcedureCodeSequence", vr: VR::SQ },
    E { tag: CURRENT_REQUESTED_PROCEDURE_EVIDENCE_SEQUENCE, alias: "CurrentRequestedProcedureEvidenceSequence", vr: VR::SQ },
    E { tag: PERTINENT_OTHER_EVIDENCE_SEQUENCE, alias: "PertinentOtherEvidenceSequence", vr: VR::SQ },
    E { tag: COMPLETION_FLAG, alias: "CompletionFlag", vr: VR::CS },
    E { tag: VERIFICATION_FLAG, alias: "VerificationFlag", vr: VR::CS },
    E { tag: CONTENT_TEMPLATE_SEQUENCE, alias: "ContentTemplateSequence", vr: VR::SQ },
    E { tag: CONTENT_SEQUENCE, alias: "ContentSequence", vr: VR::SQ },
    E { tag: TEMPLATE_IDENTIFIER, alias: "TemplateIdentifier", vr: VR::CS },
    E { tag: REFERENCED_CONTENT_ITEM_IDENTIFIER, alias: "ReferencedContentItemIdentifier", vr: VR::UL },
    E { tag: NUMBER_OF_ENERGY_WINDOWS, alias: "NumberOfEnergyWindows", vr: VR::US },
    E { tag: ENERGY_WINDOW_RANGE_SEQUENCE, alias: "EnergyWindowRangeSequence", vr: VR::SQ },
    E { tag: RADIOPHARMACEUTICAL_INFORMATION_SEQUENCE, alias: "RadiopharmaceuticalInformationSequence", vr: VR::SQ },
    E { tag: NUMBER_OF_DETECTORS, alias: "NumberOfDetectors", vr: VR::US },
    E { tag: NUMBER_OF_SLICES, alias: "NumberOfSlices", vr: VR::US },
    E { tag: NUMBER_OF_TIME_SLICES, alias: "NumberOfTimeSlices", vr: VR::US },
    E { tag: RADIONUCLIDE_CODE_SEQUENCE, alias: "RadionuclideCodeSequence", vr: VR::SQ },
    E { tag: PATIENT_ORIENTATION_CODE_SEQUENCE, alias: "PatientOrientationCodeSequence", vr: VR::SQ },
    E { tag: PATIENT_GANTRY_RELATIONSHIP_CODE_SEQUENCE, alias: "PatientGantryRelationshipCodeSequence", vr: VR::SQ },
    E { tag: SERIES_TYPE, alias: "SeriesType", vr: VR::CS },
    E { tag: UNITS, alias: "Units", vr: VR::CS },
    E { tag: COUNTS_SOURCE, alias: "CountsSource", vr: VR::CS },
    E { tag: RANDOMS_CORRECTION_METHOD, alias: "RandomsCorrectionMethod", vr: VR::CS },
    E { tag: ATTENUATION_CORRECTION_METHOD, alias: "AttenuationCorrectionMethod", vr: VR::LO },
    E { tag: DECAY_CORRECTION, alias: "DecayCorrection", vr: VR::CS },
    E { tag: RECONSTRUCTION_METHOD, alias: "ReconstructionMethod", vr: VR::LO },
    E { tag: SCATTER_CORRECTION_METHOD, alias: "ScatterCorrectionMethod", vr: VR::LO },
    E { tag: FRAME_REFERENCE_TIME, alias: "FrameReferenceTime", vr: VR::DS },
    E { tag: DECAY_FACTOR, alias: "DecayFactor", vr: VR::DS },
    E { tag: DOSE_CALIBRATION_FACTOR, alias: "DoseCalibrationFactor", vr: VR::DS },
    E { tag: IMAGE_INDEX, alias: "ImageIndex", vr: VR::US },
    E { tag: GRAPHIC_ANNOTATION_SEQUENCE, alias: "GraphicAnnotationSequence", vr: VR::SQ },
    E { tag: GRAPHIC_LAYER, alias: "GraphicLayer", vr: VR::CS },
    E { tag: UNFORMATTED_TEXT_VALUE, alias: "UnformattedTextValue", vr: VR::ST },
    E { tag: TEXT_OBJECT_SEQUENCE, alias: "TextObjectSequence", vr: VR::SQ },
    E { tag: GRAPHIC_OBJECT_SEQUENCE, alias: "GraphicObjectSequence", vr: VR::SQ },
    E { tag: DISPLAYED_AREA_SELECTION_SEQUENCE, alias: "DisplayedAreaSelectionSequence", vr: VR::SQ },
    E { tag: CONTENT_LABEL, alias: "ContentLabel", vr: VR::CS },
    E { tag: CONTENT_DESCRIPTION, alias: "ContentDescription", vr: VR::LO },
    E { tag: PRESENTATION_CREATION_DATE, alias: "PresentationCreationDate", vr: VR::DA },
    E { tag: PRESENTATION_CREATION_TIME, alias: "PresentationCreationTime", vr: VR::TM },
    E { tag: CONTENT_CREATOR_NAME, alias: "ContentCreatorName", vr: VR::PN },
    E { tag: STORAGE_MEDIA_FILE_SET_UID, alias: "StorageMediaFileSetUID", vr: VR::UI },
    E { tag: ICON_IMAGE_SEQUENCE, alias: "IconImageSequence", vr: VR::SQ },
    E { tag: ENCRYPTED_ATTRIBUTES_SEQUENCE, alias: "EncryptedAttributesSequence", vr: VR::SQ },
    E { tag: MODIFIED_ATTRIBUTES_SEQUENCE, alias: "ModifiedAttributesSequence", vr: VR::SQ },
    E { tag: ORIGINAL_ATTRIBUTES_SEQUENCE, alias: "OriginalAttributesSequence", vr: VR::SQ },
    E { tag: ATTRIBUTE_MODIFICATION_DATE_TIME, alias: "AttributeModificationDateTime", vr: VR::DT },
    E { tag: MODIFYING_SYSTEM, alias: "ModifyingSystem", vr: VR::LO },
    E { tag: SOURCE_OF_PREVIOUS_VALUES, alias: "SourceOfPreviousValues", vr: VR::LO },
    E { tag: REASON_FOR_THE_ATTRIBUTE_MODIFICATION, alias: "ReasonForTheAttributeModification", vr: VR::CS },
    E { tag: PRESENTATION_LUT_SHAPE, alias: "PresentationLUTShape", vr: VR::CS },
    E { tag: STRUCTURE_SET_LABEL, alias: "StructureSetLabel", vr: VR::SH },
    E { tag: STRUCTURE_SET_NAME, alias: "StructureSetName", vr: VR::LO },
    E { tag: STRUCTURE_SET_DATE, alias: "StructureSetDate", vr: VR::DA },
    E { tag: STRUCTURE_SET_TIME, alias: "StructureSetTime", vr: VR::TM },
    E { tag: REFERENCED_FRAME_OF_REFERENCE_SEQUENCE, alias: "ReferencedFrameOfReferenceSequence", vr: VR::SQ },
    E { tag: CONTOUR_IMAGE_SEQUENCE, alias: "ContourImageSequence", vr: VR::SQ },
    E { tag: STRUCTURE_SET_ROI_SEQUENCE, alias: "StructureSetROISequence", vr: VR::SQ },
    E { tag: ROI_NUMBER, alias: "ROINumber", vr: VR::IS },
    E { tag: REFERENCED_FRAME_OF_REFERENCE_UID, alias: "ReferencedFrameOfReferenceUID", vr: VR::UI },
    E { tag: ROI_NAME, alias: "ROIName", vr: VR::LO },
    E { tag: ROI_DISPLAY_COLOR, alias: "ROIDisplayColor", vr: VR::IS },
    E { tag: ROI_GENERATION_ALGORITHM, alias: "ROIGenerationAlgorithm", vr: VR::CS },
    E { tag: ROI_CONTOUR_SEQUENCE, alias: "ROIContourSequence", vr: VR::SQ },
    E { tag: CONTOUR_SEQUENCE, alias: "ContourSequence", vr: VR::SQ },
    E { tag: CONTOUR_GEOMETRIC_TYPE, alias: "ContourGeometricType", vr: VR::CS },
    E { tag: NUMBER_OF_CONTOUR_POINTS, alias: "NumberOfContourPoints", vr: VR::IS },
    E { tag: CONTOUR_DATA, alias: "ContourData", vr: VR::DS },
    E { tag: RTROI_OBSERVATIONS_SEQUENCE, alias: "RTROIObservationsSequence", vr: VR::SQ },
    E { tag: OBSERVATION_NUMBER, alias: "ObservationNumber", vr: VR::IS },
    E { tag: REFERENCED_ROI_NUMBER, alias: "ReferencedROINumber", vr: VR::IS },
    E { tag: RTROI_INTERPRETED_TYPE, alias: "RTROIInterpretedType", vr: VR::CS },
    E { tag: SHARED_FUNCTIONAL_GROUPS_SEQUENCE, alias: "SharedFunctionalGroupsSequence", vr: VR::SQ },
    E { tag: PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE, alias: "PerFrameFunctionalGroupsSequence", vr: VR::SQ },
    E { tag: OVERLAY_ROWS, alias: "OverlayRows", vr: VR::US },
    E { tag: OVERLAY_COLUMNS, alias: "OverlayColumns", vr: VR::US },
    E { tag: NUMBER_OF_FRAMES_IN_OVERLAY, alias: "NumberOfFramesInOverlay", vr: VR::IS },
    E { tag: OVERLAY_DESCRIPTION, alias: "OverlayDescription", vr: VR::LO },
    E { tag: OVERLAY_TYPE, alias: "OverlayType", vr: VR::CS },
    E { tag: OVERLAY_SUBTYPE, alias: "OverlaySubtype", vr: VR::LO },
    E { tag: OVERLAY_ORIGIN, alias: "OverlayOrigin", vr: VR::SS },
    E { tag: IMAGE_FRAME_ORIGIN, alias: "ImageFrameOrigin", vr: VR::US },
    E { tag: OVERLAY_BITS_ALLOCATED, alias: "OverlayBitsAllocated", vr: VR::US },
    E { tag: OVERLAY_BIT_POSITION, alias: "OverlayBitPosition", vr: VR::US },
    E { tag: OVERLAY_LABEL, alias: "OverlayLabel", vr: VR::LO },
    E { tag: OVERLAY_DATA, alias: "OverlayData", vr: VR::OW },
    E { tag: EXTENDED_OFFSET_TABLE, alias: "ExtendedOffsetTable", vr: VR::OV },
    E { tag: EXTENDED_OFFSET_TABLE_LENGTHS, alias: "ExtendedOffsetTableLengths", vr: VR::OV },
    E { tag: FLOAT_PIXEL_DATA, alias: "FloatPixelData", vr: VR::OF },
    E { tag: DOUBLE_FLOAT_PIXEL_DATA, alias: "DoubleFloatPixelData", vr: VR::OD },
    E { tag: PIXEL_DATA, alias: "PixelData", vr: VR::OB },
    E { tag: DIGITAL_SIGNATURES_SEQUENCE, alias: "DigitalSignaturesSequence", vr: VR::SQ },
    E { tag: DATA_SET_TRAILING_PADDING, alias: "DataSetTrailingPadding", vr: VR::OB },
];
