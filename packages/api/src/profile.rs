//! The caller's own profile and profile image.

use reqwest::multipart::{Form, Part};
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;

use crate::error::Endpoint;
use crate::models::{Health, ImageUpload, ImageUploadResponse, StoredImage, UserProfile};
use crate::{ApiClient, ApiError};

const UPLOADS_PREFIX: &str = "uploads/";
const DEFAULT_IMAGE_TYPE: &str = "application/octet-stream";

impl ApiClient {
    pub async fn get_profile(&self) -> Result<UserProfile, ApiError> {
        self.send_json(self.request(Method::GET, "/user/profile"), Endpoint::Resource)
            .await
    }

    /// Upload a new profile image.
    ///
    /// Non-images and files at or over the configured size ceiling are
    /// rejected without a request being made.
    pub async fn upload_profile_image(
        &self,
        upload: ImageUpload,
    ) -> Result<ImageUploadResponse, ApiError> {
        upload.validate(self.max_image_bytes())?;

        let part = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.content_type)
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        let form = Form::new().part("file", part);

        let builder = self
            .request(Method::POST, "/user/profile/image")
            .multipart(form);
        self.send_json(builder, Endpoint::Resource).await
    }

    /// API path of a stored image, or `None` for an empty path.
    ///
    /// `"uploads/12_1700.png"` becomes `"/user/images/12_1700.png"`.
    pub fn image_route(image_path: &str) -> Option<String> {
        let file_name = image_path.strip_prefix(UPLOADS_PREFIX).unwrap_or(image_path);
        if file_name.is_empty() {
            return None;
        }
        Some(format!("/user/images/{file_name}"))
    }

    /// Download a stored image with the caller's credentials.
    pub async fn fetch_image(&self, image_path: &str) -> Result<StoredImage, ApiError> {
        let route = Self::image_route(image_path)
            .ok_or_else(|| ApiError::Validation("No image".to_string()))?;
        let response = self
            .execute(self.request(Method::GET, &route), Endpoint::Resource)
            .await?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(DEFAULT_IMAGE_TYPE)
            .to_string();
        let bytes = response.bytes().await?;
        Ok(StoredImage {
            content_type,
            bytes: bytes.to_vec(),
        })
    }

    /// Probe the API's health endpoint.
    pub async fn health(&self) -> Result<Health, ApiError> {
        self.send_json(self.request(Method::GET, "/health"), Endpoint::Resource)
            .await
    }
}
