use serde::{Deserialize, Serialize};

/// Request body for `POST /api/v1.0/email/send`.
#[derive(Debug, Clone, Serialize)]
pub struct SendRequest<'a, P: Serialize> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    /// EmailJS calls the public key `user_id` on the wire.
    pub user_id: &'a str,
    pub template_params: &'a P,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<&'a str>,
}

/// Successful send response. EmailJS answers with a plain-text body ("OK").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailJsResponse {
    pub status: u16,
    pub text: String,
}
