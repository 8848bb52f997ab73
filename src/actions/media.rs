//! Media upload actions

use bytes::Bytes;
use tracing::{error, info};

use crate::auth::AdminIdentity;
use crate::content::{validate, MediaAsset, Record};
use crate::media::object_key;
use crate::store::Query;

use super::{ActionError, ActionResult, Backoffice, Completed};

impl Backoffice {
    /// List stored media records, newest first (admin)
    pub async fn list_media(&self, identity: &AdminIdentity) -> ActionResult<Vec<MediaAsset>> {
        self.gate(identity)?;
        Ok(Completed::new(self.fetch_all(Query::all()).await?))
    }

    /// Store an uploaded file in the bucket and record it.
    ///
    /// The object goes out first; the record is only written once the
    /// bucket has confirmed the URL. A bucket failure therefore leaves no
    /// dangling record.
    pub async fn upload_media(
        &self,
        identity: &AdminIdentity,
        file_name: &str,
        content_type: &str,
        data: Bytes,
    ) -> ActionResult<MediaAsset> {
        self.gate(identity)?;
        validate::required("File name", file_name)?;
        if data.is_empty() {
            return Err(ActionError::Validation("File is empty".to_string()));
        }

        let key = object_key(file_name);
        let size_bytes = data.len() as i64;
        let url = self
            .storage
            .put(&key, data, content_type)
            .await
            .map_err(|e| {
                error!("Failed to store media object {}: {}", key, e);
                ActionError::Store {
                    verb: "upload",
                    entity: MediaAsset::ENTITY,
                }
            })?;

        let asset = self
            .create_record(MediaAsset::new(
                file_name.to_string(),
                url,
                content_type.to_string(),
                size_bytes,
            ))
            .await?;
        info!(
            "Uploaded media {} ({} bytes) by admin {}",
            asset.file_name, asset.size_bytes, identity.email
        );
        Ok(Completed::new(asset))
    }

    /// Delete the media record. The stored object stays where it is;
    /// content may still reference the URL.
    pub async fn delete_media(&self, identity: &AdminIdentity, id: &str) -> ActionResult<()> {
        self.gate(identity)?;
        self.remove_record::<MediaAsset>(id).await?;
        info!("Deleted media record {} by admin {}", id, identity.email);
        Ok(Completed::new(()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::super::Mailboxes;
    use super::*;
    use crate::media::MemoryObjectStore;
    use crate::notify::RecordingMailer;
    use crate::revalidate::RecordingRevalidator;
    use crate::store::ContentStore;

    async fn office() -> (Backoffice, Arc<MemoryObjectStore>) {
        let storage = Arc::new(MemoryObjectStore::new());
        let backoffice = Backoffice::new(
            ContentStore::seeded_memory().await.unwrap(),
            Arc::new(RecordingMailer::new()),
            Arc::new(RecordingRevalidator::new()),
            storage.clone(),
            Mailboxes::default(),
        );
        (backoffice, storage)
    }

    fn admin() -> AdminIdentity {
        AdminIdentity::admin("uid-1", "dana@studiomeridian.example", "Dana Okafor")
    }

    #[tokio::test]
    async fn upload_stores_the_object_and_records_its_url() {
        let (office, storage) = office().await;

        let completed = office
            .upload_media(
                &admin(),
                "Launch Poster.png",
                "image/png",
                Bytes::from_static(b"png-bytes"),
            )
            .await
            .unwrap();

        let asset = completed.data;
        assert_eq!(asset.file_name, "Launch Poster.png");
        assert_eq!(asset.content_type, "image/png");
        assert_eq!(asset.size_bytes, 9);
        assert!(asset.url.starts_with("memory://media/launch-poster-"));
        assert_eq!(storage.len(), 1);

        let listed = office.list_media(&admin()).await.unwrap().data;
        assert!(listed.iter().any(|a| a.id == asset.id));
    }

    #[tokio::test]
    async fn bucket_failure_fails_the_upload_with_no_record() {
        let (office, storage) = office().await;
        storage.set_failing(true);
        let before = office.store().count::<MediaAsset>(None).await.unwrap();

        let err = office
            .upload_media(&admin(), "x.png", "image/png", Bytes::from_static(b"x"))
            .await
            .unwrap_err();

        assert_eq!(err.message(), "Failed to upload media asset");
        assert_eq!(office.store().count::<MediaAsset>(None).await.unwrap(), before);
    }

    #[tokio::test]
    async fn empty_uploads_are_refused() {
        let (office, _) = office().await;
        let err = office
            .upload_media(&admin(), "empty.png", "image/png", Bytes::new())
            .await
            .unwrap_err();
        assert_eq!(err.message(), "File is empty");
    }

    #[tokio::test]
    async fn delete_leaves_the_stored_object_behind() {
        let (office, storage) = office().await;
        let uploaded = office
            .upload_media(&admin(), "keep.png", "image/png", Bytes::from_static(b"k"))
            .await
            .unwrap();

        office.delete_media(&admin(), &uploaded.data.id).await.unwrap();
        assert_eq!(storage.len(), 1);
    }
}
