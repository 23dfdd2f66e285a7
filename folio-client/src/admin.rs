//! Typed wrappers for the user and folder administration endpoints.

use uuid::Uuid;

use folio_model::{
    CreateFolderRequest, CreateUserRequest, FolderSummary,
    UpdateFolderRequest, UpdateUserRequest, UserSummary,
};

use crate::api_client::ApiClient;
use crate::errors::ApiError;
use crate::routes::{self, utils::replace_param};

impl ApiClient {
    /// List all user accounts.
    pub async fn list_users(&self) -> Result<Vec<UserSummary>, ApiError> {
        self.get(routes::users::COLLECTION).await
    }

    /// Create a user account.
    pub async fn create_user(
        &self,
        request: &CreateUserRequest,
    ) -> Result<UserSummary, ApiError> {
        self.post(routes::users::COLLECTION, request).await
    }

    /// Update a user account.
    pub async fn update_user(
        &self,
        user_id: Uuid,
        request: &UpdateUserRequest,
    ) -> Result<UserSummary, ApiError> {
        let path =
            replace_param(routes::users::ITEM, ":id", user_id.to_string());
        self.put(&path, request).await
    }

    /// Delete a user account.
    pub async fn delete_user(&self, user_id: Uuid) -> Result<(), ApiError> {
        let path =
            replace_param(routes::users::ITEM, ":id", user_id.to_string());
        self.delete(&path).await
    }

    /// List all shared folders.
    pub async fn list_folders(&self) -> Result<Vec<FolderSummary>, ApiError> {
        self.get(routes::folders::COLLECTION).await
    }

    /// Create a shared folder.
    pub async fn create_folder(
        &self,
        request: &CreateFolderRequest,
    ) -> Result<FolderSummary, ApiError> {
        self.post(routes::folders::COLLECTION, request).await
    }

    /// Update a shared folder.
    pub async fn update_folder(
        &self,
        folder_id: Uuid,
        request: &UpdateFolderRequest,
    ) -> Result<FolderSummary, ApiError> {
        let path =
            replace_param(routes::folders::ITEM, ":id", folder_id.to_string());
        self.put(&path, request).await
    }

    /// Delete a shared folder.
    pub async fn delete_folder(&self, folder_id: Uuid) -> Result<(), ApiError> {
        let path =
            replace_param(routes::folders::ITEM, ":id", folder_id.to_string());
        self.delete(&path).await
    }
}
