//! Object storage uploads for the admin panel.

use crate::query::{encode_component, Method};
use crate::{StoreClient, StoreError};

impl StoreClient {
    /// Upload an admin-supplied image and return its public URL.
    pub fn upload_image(
        &self,
        bucket: &str,
        filename: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StoreError> {
        if filename.trim().is_empty() {
            return Err(StoreError::Upload("empty filename".to_string()));
        }

        let path = format!(
            "/storage/v1/object/{}/{}",
            encode_component(bucket),
            encode_component(filename)
        );
        self.send_request(Method::Post, &path, Some(content_type), Some(bytes))?
            .error_for_status()
            .map_err(|e| StoreError::Upload(e.to_string()))?;

        Ok(self.public_object_url(bucket, filename))
    }

    /// Public URL of an uploaded object.
    pub fn public_object_url(&self, bucket: &str, filename: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url(),
            encode_component(bucket),
            encode_component(filename)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_url_shape() {
        let client = StoreClient::new("https://store.example.co", "anon");
        assert_eq!(
            client.public_object_url("package-images", "spiti 01.jpg"),
            "https://store.example.co/storage/v1/object/public/package-images/spiti%2001.jpg"
        );
    }

    #[test]
    fn test_empty_filename_rejected() {
        let client = StoreClient::new("https://store.example.co", "anon");
        let err = client
            .upload_image("package-images", "  ", vec![1, 2, 3], "image/jpeg")
            .unwrap_err();
        assert!(matches!(err, StoreError::Upload(_)));
    }
}
