//! Wire types for the Merit HTTP API

use serde::{Deserialize, Serialize};

use crate::entities::FieldType;

/// An existing merit template as listed by the organization
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteTemplate {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// An existing organization field
///
/// `field_type` stays a plain string here: the organization may carry field
/// types this tool does not create, and listing must not fail on them.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteField {
    pub id: String,
    #[serde(rename = "fieldName")]
    pub field_name: String,
    #[serde(rename = "fieldType", default)]
    pub field_type: String,
    #[serde(default)]
    pub description: String,
}

/// `POST /merittemplates` body
///
/// `cover_photo` is omitted from the JSON entirely when the row supplied no
/// cover photo id; an empty-id cover photo object is never sent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTemplateRequest {
    pub org_id: String,
    pub title: String,
    pub description: String,
    pub can_only_be_sent_once: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_photo: Option<CoverPhotoPayload>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverPhotoPayload {
    pub id: String,
    pub file_name: String,
}

/// `POST /fields` body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFieldRequest {
    pub org_id: String,
    pub name: String,
    pub description: String,
    pub field_type: FieldType,
}

/// `POST /merittemplates/{templateId}/fields/{fieldId}` body
///
/// `new_value_for_all_merits` is omitted when the CSV cell was blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSettingRequest {
    pub new_enabled: bool,
    pub new_required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value_for_all_merits: Option<String>,
}

/// Create responses only need the assigned id
#[derive(Debug, Deserialize)]
pub struct Created {
    pub id: String,
}

/// One page of the templates listing
#[derive(Debug, Deserialize)]
pub struct TemplatesPage {
    pub merittemplates: Vec<RemoteTemplate>,
    pub paging: Paging,
}

#[derive(Debug, Deserialize)]
pub struct Paging {
    #[serde(default)]
    pub cursors: Cursors,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
}

#[derive(Debug, Default, Deserialize)]
pub struct Cursors {
    #[serde(default)]
    pub after: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PageInfo {
    #[serde(rename = "hasNextPage")]
    pub has_next_page: bool,
}

/// The fields listing is a single unpaginated page
#[derive(Debug, Deserialize)]
pub struct FieldsPage {
    pub fields: Vec<RemoteField>,
}

#[derive(Debug, Deserialize)]
pub struct AccessResponse {
    #[serde(rename = "orgAccessToken")]
    pub org_access_token: String,
}

#[derive(Debug, Deserialize)]
pub struct LinkAppResponse {
    #[serde(rename = "request_linkapp_url")]
    pub request_linkapp_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_template_omits_blank_cover_photo() {
        let request = CreateTemplateRequest {
            org_id: "org1".into(),
            title: "Onboarding".into(),
            description: "New hires".into(),
            can_only_be_sent_once: false,
            cover_photo: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "orgId": "org1",
                "title": "Onboarding",
                "description": "New hires",
                "canOnlyBeSentOnce": false,
            })
        );
    }

    #[test]
    fn test_create_template_sends_cover_photo_id_and_file_name() {
        let request = CreateTemplateRequest {
            org_id: "org1".into(),
            title: "T".into(),
            description: "D".into(),
            can_only_be_sent_once: true,
            cover_photo: Some(CoverPhotoPayload {
                id: "a".repeat(24),
                file_name: "photo.png".into(),
            }),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["coverPhoto"]["id"], json!("a".repeat(24)));
        assert_eq!(value["coverPhoto"]["fileName"], json!("photo.png"));
    }

    #[test]
    fn test_field_setting_omits_blank_value_for_all_merits() {
        let request = FieldSettingRequest {
            new_enabled: true,
            new_required: false,
            new_value_for_all_merits: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({ "newEnabled": true, "newRequired": false })
        );
    }

    #[test]
    fn test_field_setting_includes_value_for_all_merits_when_present() {
        let request = FieldSettingRequest {
            new_enabled: true,
            new_required: true,
            new_value_for_all_merits: Some("2024 cohort".into()),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["newValueForAllMerits"], json!("2024 cohort"));
    }

    #[test]
    fn test_templates_page_parses_cursor_shape() {
        let page: TemplatesPage = serde_json::from_value(json!({
            "merittemplates": [
                { "id": "mt1", "title": "Onboarding", "description": "New hires" }
            ],
            "paging": {
                "cursors": { "after": "mt1" },
                "pageInfo": { "hasNextPage": true }
            }
        }))
        .unwrap();
        assert_eq!(page.merittemplates.len(), 1);
        assert!(page.paging.page_info.has_next_page);
        assert_eq!(page.paging.cursors.after.as_deref(), Some("mt1"));
    }

    #[test]
    fn test_fields_page_tolerates_unknown_field_types() {
        let page: FieldsPage = serde_json::from_value(json!({
            "fields": [
                { "id": "f1", "fieldName": "FullName", "fieldType": "Name", "description": "" },
                { "id": "f2", "fieldName": "Exotic", "fieldType": "Hologram" }
            ]
        }))
        .unwrap();
        assert_eq!(page.fields[1].field_type, "Hologram");
        assert_eq!(page.fields[1].description, "");
    }
}
