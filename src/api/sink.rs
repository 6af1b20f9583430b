//! Upload Sinks
//!
//! The one capability the upload workflow writes through: hand it a file
//! and the target coordinate, get back the URL the entry's image is served
//! from. The production sink persists to the storage service, the preview
//! sink stays in the page session.

use async_trait::async_trait;

use super::storage::StorageClient;
use crate::geo::Coordinate;
use crate::state::upload::random_id;

/// Destination for a submitted photo
#[async_trait(?Send)]
pub trait UploadSink {
    /// Persist the file for `location`, returning its display URL
    async fn store(&self, file: &web_sys::File, location: Coordinate) -> Result<String, String>;
}

/// Production path: write to the external storage service.
///
/// Objects are keyed `{lat5}_{lng5}/{uuid}.{ext}` so photos cluster by
/// spot; the extension is carried over from the chosen file.
pub struct StorageSink {
    client: StorageClient,
}

impl StorageSink {
    pub fn new(client: StorageClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl UploadSink for StorageSink {
    async fn store(&self, file: &web_sys::File, location: Coordinate) -> Result<String, String> {
        let path = format!(
            "{}/{}.{}",
            location.storage_folder(),
            random_id(),
            extension(&file.name())
        );

        self.client.upload(&path, file).await?;
        Ok(self.client.public_url(&path))
    }
}

/// Demo path: an ephemeral in-browser object URL, gone with the page
pub struct PreviewSink;

#[async_trait(?Send)]
impl UploadSink for PreviewSink {
    async fn store(&self, file: &web_sys::File, _location: Coordinate) -> Result<String, String> {
        web_sys::Url::create_object_url_with_blob(file)
            .map_err(|_| crate::state::upload::ERR_UPLOAD_FAILED.to_string())
    }
}

/// File extension from the chosen file's name, `jpg` when it has none
fn extension(file_name: &str) -> &str {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
        .unwrap_or("jpg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_from_name() {
        assert_eq!(extension("IMG_0972.JPG"), "JPG");
        assert_eq!(extension("photo.heic"), "heic");
        assert_eq!(extension("archive.tar.gz"), "gz");
    }

    #[test]
    fn test_extension_defaults_to_jpg() {
        assert_eq!(extension("photo"), "jpg");
        assert_eq!(extension("photo."), "jpg");
    }
}
