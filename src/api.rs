use instaclean_booking::{catalog, BookingRequest, Service, SiteConfig};
use tracing::info;

/// Services for the hero section. Empty means "nothing to show"; the
/// catalog client has already logged whatever went wrong.
pub async fn list_services(config: SiteConfig, category_id: Option<String>) -> Vec<Service> {
    catalog::fetch_services(&config, category_id.as_deref()).await
}

/// Record a committed booking in the diagnostics log. The caller follows up
/// with the route change to the confirmation page.
pub fn submit_booking(request: &BookingRequest) -> Result<(), String> {
    let json = serde_json::to_string(request).map_err(|e| e.to_string())?;
    info!("Booking request: {}", json);
    Ok(())
}
