use serde::Serialize;

/// Payload to be encoded into the QR image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCodeData {
    pub membership_key: String,
    #[serde(rename = "validationURL")]
    pub validation_url: String,
    pub tier: String,
}

/// Styling hints for whoever renders the QR image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualParameters {
    /// Lowercased tier name.
    pub style: String,
    pub main_color: String,
    pub pattern_complexity: u8,
    pub tier_level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationMetadata {
    pub qr_code_data: QrCodeData,
    pub visual_parameters: VisualParameters,
    pub tier_name: String,
    pub tier_level: u8,
}

/// Structured result of [`crate::Presenter::respond`]; callers branch on `success`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(flatten)]
    pub metadata: Option<PresentationMetadata>,
}
