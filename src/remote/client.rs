//! HTTP client for the remote-backend variant.
//!
//! The backend is an opaque JSON CRUD service; the core never interprets
//! its wire protocol beyond the CRUD shape and the status-code mapping
//! below. After every successful mutation the caller re-fetches the whole
//! collection — reconciliation is re-fetch-and-replace, never incremental.

use serde::Serialize;

use crate::types::bookmark::{Bookmark, BookmarkDraft, BookmarkPatch};
use crate::types::category::{Category, CategoryPatch};
use crate::types::errors::{AuthError, RepositoryError};
use crate::types::user::User;

/// Maps a backend status code onto the repository error taxonomy.
pub fn map_repository_status(status: u16, detail: String) -> RepositoryError {
    match status {
        404 => RepositoryError::NotFound(detail),
        400 | 422 => RepositoryError::Validation(detail),
        _ => RepositoryError::Store(format!("HTTP {}: {}", status, detail)),
    }
}

/// Maps a backend status code onto the auth error taxonomy.
pub fn map_auth_status(status: u16, detail: String) -> AuthError {
    match status {
        409 => AuthError::DuplicateEmail(detail),
        401 | 403 => AuthError::InvalidCredentials,
        _ => AuthError::Store(format!("HTTP {}: {}", status, detail)),
    }
}

#[derive(Serialize)]
struct CreateBookmarkBody<'a> {
    #[serde(flatten)]
    draft: &'a BookmarkDraft,
    owner_id: &'a str,
}

#[derive(Serialize)]
struct CreateCategoryBody<'a> {
    name: &'a str,
    color: &'a str,
    owner_id: &'a str,
}

#[derive(Serialize)]
struct CredentialsBody<'a> {
    email: &'a str,
    password: &'a str,
}

/// Blocking JSON client for the remote bookmark backend.
pub struct RemoteClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::blocking::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Consumes an error response into (status, body text).
    fn failure(resp: reqwest::blocking::Response) -> (u16, String) {
        let status = resp.status().as_u16();
        let detail = resp.text().unwrap_or_default();
        (status, detail)
    }

    fn send_repo(
        &self,
        req: reqwest::blocking::RequestBuilder,
    ) -> Result<reqwest::blocking::Response, RepositoryError> {
        let resp = req.send().map_err(|e| RepositoryError::Store(e.to_string()))?;
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let (status, detail) = Self::failure(resp);
            Err(map_repository_status(status, detail))
        }
    }

    fn send_auth(
        &self,
        req: reqwest::blocking::RequestBuilder,
    ) -> Result<reqwest::blocking::Response, AuthError> {
        let resp = req.send().map_err(|e| AuthError::Store(e.to_string()))?;
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let (status, detail) = Self::failure(resp);
            Err(map_auth_status(status, detail))
        }
    }

    // === Bookmarks ===

    pub fn fetch_bookmarks(&self, owner_id: &str) -> Result<Vec<Bookmark>, RepositoryError> {
        let req = self
            .http
            .get(self.endpoint("/bookmarks"))
            .query(&[("owner_id", owner_id)]);
        self.send_repo(req)?
            .json()
            .map_err(|e| RepositoryError::Store(e.to_string()))
    }

    pub fn create_bookmark(
        &self,
        draft: &BookmarkDraft,
        owner_id: &str,
    ) -> Result<Bookmark, RepositoryError> {
        let body = CreateBookmarkBody { draft, owner_id };
        let req = self.http.post(self.endpoint("/bookmarks")).json(&body);
        self.send_repo(req)?
            .json()
            .map_err(|e| RepositoryError::Store(e.to_string()))
    }

    pub fn update_bookmark_by_id(
        &self,
        id: &str,
        patch: &BookmarkPatch,
    ) -> Result<Bookmark, RepositoryError> {
        let req = self
            .http
            .patch(self.endpoint(&format!("/bookmarks/{}", id)))
            .json(patch);
        self.send_repo(req)?
            .json()
            .map_err(|e| RepositoryError::Store(e.to_string()))
    }

    pub fn delete_bookmark_by_id(&self, id: &str) -> Result<(), RepositoryError> {
        let req = self.http.delete(self.endpoint(&format!("/bookmarks/{}", id)));
        match self.send_repo(req) {
            Ok(_) => Ok(()),
            // Delete is idempotent: a missing record is not an error.
            Err(RepositoryError::NotFound(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }

    // === Categories ===

    pub fn fetch_categories(&self, owner_id: &str) -> Result<Vec<Category>, RepositoryError> {
        let req = self
            .http
            .get(self.endpoint("/categories"))
            .query(&[("owner_id", owner_id)]);
        self.send_repo(req)?
            .json()
            .map_err(|e| RepositoryError::Store(e.to_string()))
    }

    pub fn create_category(
        &self,
        name: &str,
        color: &str,
        owner_id: &str,
    ) -> Result<Category, RepositoryError> {
        let body = CreateCategoryBody { name, color, owner_id };
        let req = self.http.post(self.endpoint("/categories")).json(&body);
        self.send_repo(req)?
            .json()
            .map_err(|e| RepositoryError::Store(e.to_string()))
    }

    pub fn update_category_by_id(
        &self,
        id: &str,
        patch: &CategoryPatch,
    ) -> Result<Category, RepositoryError> {
        let req = self
            .http
            .patch(self.endpoint(&format!("/categories/{}", id)))
            .json(patch);
        self.send_repo(req)?
            .json()
            .map_err(|e| RepositoryError::Store(e.to_string()))
    }

    /// Deletes a category. The backend owns the cascade in this variant.
    pub fn delete_category_by_id(&self, id: &str) -> Result<(), RepositoryError> {
        let req = self.http.delete(self.endpoint(&format!("/categories/{}", id)));
        match self.send_repo(req) {
            Ok(_) => Ok(()),
            Err(RepositoryError::NotFound(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }

    // === Session ===

    pub fn sign_up(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let body = CredentialsBody { email, password };
        let req = self.http.post(self.endpoint("/auth/signup")).json(&body);
        self.send_auth(req)?
            .json()
            .map_err(|e| AuthError::Store(e.to_string()))
    }

    pub fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let body = CredentialsBody { email, password };
        let req = self.http.post(self.endpoint("/auth/signin")).json(&body);
        self.send_auth(req)?
            .json()
            .map_err(|e| AuthError::Store(e.to_string()))
    }

    pub fn sign_out(&self) -> Result<(), AuthError> {
        let req = self.http.post(self.endpoint("/auth/signout"));
        self.send_auth(req).map(|_| ())
    }

    /// Returns the current session's user, or `None` when signed out.
    pub fn get_current_user(&self) -> Result<Option<User>, AuthError> {
        let req = self.http.get(self.endpoint("/auth/me"));
        let resp = req.send().map_err(|e| AuthError::Store(e.to_string()))?;
        match resp.status().as_u16() {
            200 => resp
                .json()
                .map(Some)
                .map_err(|e| AuthError::Store(e.to_string())),
            204 | 401 | 404 => Ok(None),
            _ => {
                let (status, detail) = Self::failure(resp);
                Err(map_auth_status(status, detail))
            }
        }
    }
}
