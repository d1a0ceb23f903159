use serde::Deserialize;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    #[serde(default)]
    pub quantity: i64,
}

/// Body of the "give" (withdraw) request the desktop client issues.
#[derive(Debug, Deserialize)]
pub struct GiveRequest {
    pub amount: i64,
    pub recipient: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReceiveRequest {
    pub amount: i64,
}
