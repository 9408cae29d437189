//! Image proxy-path transform.
//!
//! Steam serves item icons from its economy image CDN, which browsers cannot always load
//! cross-origin. Item image URLs therefore point at this server's `/image-proxy/{path}` relay,
//! built from the icon path carried by each item description.

use reqwest::Url;

use crate::server::error::config::ConfigError;

static PROXY_SEGMENT: &str = "image-proxy";
static ECONOMY_IMAGE_PATH: &str = "/economy/image/";

/// Builds proxied image URLs for Steam icon paths
#[derive(Clone, Debug)]
pub struct ImageUrlBuilder {
    base: Url,
}

impl ImageUrlBuilder {
    /// Creates a builder rooted at the public base URL of this server
    pub fn new(app_url: &str) -> Result<Self, ConfigError> {
        let base = Url::parse(app_url).map_err(|e| ConfigError::invalid("APP_URL", e))?;

        if base.cannot_be_a_base() {
            return Err(ConfigError::invalid("APP_URL", "must be an absolute http(s) URL"));
        }

        Ok(Self { base })
    }

    /// Converts an icon path into the image URL exposed to clients.
    ///
    /// - Empty icon paths produce an empty URL
    /// - Absolute economy image URLs are reduced to their image path and proxied
    /// - Any other absolute URL is returned unchanged
    /// - Relative paths are proxied with their leading `/` removed
    pub fn proxy_url(&self, icon_path: &str) -> String {
        if icon_path.is_empty() {
            return String::new();
        }

        let image_path = if icon_path.starts_with("http://") || icon_path.starts_with("https://") {
            match icon_path.split_once(ECONOMY_IMAGE_PATH) {
                Some((_, path)) if !path.is_empty() => path,
                _ => return icon_path.to_string(),
            }
        } else {
            icon_path
        };

        let image_path = image_path.strip_prefix('/').unwrap_or(image_path);

        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(PROXY_SEGMENT).push(image_path);
        }

        url.to_string()
    }
}
