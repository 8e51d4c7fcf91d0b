use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{MultipartUpload, ObjectStore, PutPayload};

use crate::application::ports::{UploadStore, UploadStoreError};
use crate::domain::StoragePath;

/// Upload store rooted at the configured uploads directory.
pub struct LocalUploadStore {
    inner: Arc<LocalFileSystem>,
    base_path: PathBuf,
}

impl LocalUploadStore {
    pub fn new(base_path: PathBuf) -> Result<Self, UploadStoreError> {
        std::fs::create_dir_all(&base_path).map_err(UploadStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(&base_path)
            .map_err(|e| UploadStoreError::UploadFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
            base_path,
        })
    }

    pub fn base_path(&self) -> &std::path::Path {
        &self.base_path
    }
}

#[async_trait::async_trait]
impl UploadStore for LocalUploadStore {
    async fn store(
        &self,
        path: &StoragePath,
        mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, UploadStoreError> {
        let store_path = StorePath::parse(path.as_str())
            .map_err(|e| UploadStoreError::InvalidPath(e.to_string()))?;
        let mut upload = self
            .inner
            .put_multipart(&store_path)
            .await
            .map_err(|e| UploadStoreError::UploadFailed(e.to_string()))?;

        let mut total_bytes: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let bytes = match chunk {
                Ok(b) => b,
                Err(e) => {
                    let _ = upload.abort().await;
                    return Err(UploadStoreError::Io(e));
                }
            };
            total_bytes += bytes.len() as u64;
            if let Err(e) = upload.put_part(PutPayload::from(bytes)).await {
                let _ = upload.abort().await;
                return Err(UploadStoreError::UploadFailed(e.to_string()));
            }
        }

        upload
            .complete()
            .await
            .map_err(|e| UploadStoreError::UploadFailed(e.to_string()))?;

        Ok(total_bytes)
    }

    async fn delete(&self, path: &StoragePath) -> Result<(), UploadStoreError> {
        let store_path = StorePath::parse(path.as_str())
            .map_err(|e| UploadStoreError::InvalidPath(e.to_string()))?;
        self.inner
            .delete(&store_path)
            .await
            .map_err(|e| match e {
                object_store::Error::NotFound { path, .. } => UploadStoreError::NotFound(path),
                other => UploadStoreError::DeleteFailed(other.to_string()),
            })
    }

    fn local_path(&self, path: &StoragePath) -> Result<PathBuf, UploadStoreError> {
        let store_path = StorePath::parse(path.as_str())
            .map_err(|e| UploadStoreError::InvalidPath(e.to_string()))?;
        self.inner
            .path_to_filesystem(&store_path)
            .map_err(|e| UploadStoreError::InvalidPath(e.to_string()))
    }
}
