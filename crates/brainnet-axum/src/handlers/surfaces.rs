//! Index routes of the chat, rag, agents and documents surfaces.

use axum::Json;
use brainnet_core::DatabaseBacked;

use crate::dto::{StorageInfoDto, SurfaceStatusDto};
use crate::extract::{Service, Storage};

/// Resolve the surface's facade and report it mounted.
pub async fn index<S: DatabaseBacked>(Service(facade): Service<S>) -> Json<SurfaceStatusDto> {
    Json(SurfaceStatusDto::mounted(
        S::KIND,
        S::NAME,
        facade.instance_id(),
    ))
}

/// Object-storage target of the documents surface.
pub async fn storage(Storage(minio): Storage) -> Json<StorageInfoDto> {
    Json(StorageInfoDto {
        endpoint: minio.endpoint().to_string(),
        bucket: minio.bucket().to_string(),
        instance_id: minio.instance_id(),
    })
}
