//! Typed view of the front-end configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::verify::VerifiedConfig;

/// Settings read by the PetStay browser front-end.
///
/// Only a [`VerifiedConfig`] converts into this type, so every field is known to
/// be free of template placeholders. Keys not listed here are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct FrontendConfig {
    /// AWS region hosting the backend, e.g. `us-east-2`.
    pub aws_region: String,
    /// Identity-provider user pool.
    pub cognito_user_pool_id: String,
    /// App client registered with the user pool.
    pub cognito_user_pool_client_id: String,
    /// Hosted sign-in domain.
    pub cognito_domain: String,

    /// Page the hosted sign-in redirects to.
    pub redirect_sign_in_url: String,
    /// Page the hosted sign-out redirects to.
    pub redirect_sign_out_url: String,
    /// Page the admin sign-in redirects to.
    pub redirect_admin_sign_in_url: String,

    /// Root of the REST API.
    pub api_base_url: String,
    /// Booking listing endpoint.
    pub bookings_api_url: String,
    /// Booking status lookup endpoint.
    pub booking_status_api_url: String,
    /// Room availability endpoint.
    pub rooms_availability_api_url: String,
    /// Booking creation endpoint.
    pub new_booking_api_url: String,
    /// Booking confirmation endpoint.
    pub confirm_booking_url: String,
    /// Booking cancellation endpoint.
    pub cancel_booking_url: String,
    /// Check-in endpoint.
    pub checkin_booking_url: String,
    /// Check-out endpoint.
    pub checkout_booking_url: String,
    /// Endpoint restoring a cancelled booking.
    pub restore_booking_url: String,

    /// Endpoint issuing pet photo upload URLs.
    pub pet_photo_upload_url: String,
    /// Public base URL for uploaded pet photos.
    pub pet_photo_public_url_base: String,
}

impl TryFrom<&VerifiedConfig> for FrontendConfig {
    type Error = ConfigError;

    fn try_from(config: &VerifiedConfig) -> Result<Self, Self::Error> {
        let value = serde_json::to_value(config).map_err(|err| ConfigError::Schema {
            reason: err.to_string(),
        })?;
        serde_json::from_value(value).map_err(|err| ConfigError::Schema {
            reason: err.to_string(),
        })
    }
}
