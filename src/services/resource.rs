//! Resource Services
//!
//! Generic CRUD service: one HTTP call per operation against `/{resource}`
//! or `/{resource}/{id}`.

use serde::{de::DeserializeOwned, Serialize};
use std::fmt::{self, Display};
use std::marker::PhantomData;

use crate::http::{ApiClient, ClientResult};

/// A backend collection
pub trait Resource: DeserializeOwned {
    /// Collection path, e.g. `/expenses`
    const PATH: &'static str;

    /// Body of create and update requests
    type Request: Serialize;
}

/// CRUD client for a single resource type
pub struct ResourceService<R: Resource> {
    client: ApiClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> ResourceService<R> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    pub(crate) fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Path of a single item; the id is encoded as one path segment
    pub fn item_path(id: impl Display) -> String {
        format!("{}/{}", R::PATH, urlencoding::encode(&id.to_string()))
    }

    /// `GET /{resource}`
    pub async fn get_all(&self) -> ClientResult<Vec<R>> {
        self.client.get(R::PATH).await?.json()
    }

    /// `GET /{resource}/{id}`
    pub async fn get_by_id(&self, id: impl Display) -> ClientResult<R> {
        self.client.get(&Self::item_path(id)).await?.json()
    }

    /// `POST /{resource}`
    pub async fn create(&self, entity: &R::Request) -> ClientResult<R> {
        self.client.post(R::PATH, entity).await?.json()
    }

    /// `PUT /{resource}/{id}`
    pub async fn update(&self, id: impl Display, entity: &R::Request) -> ClientResult<R> {
        self.client.put(&Self::item_path(id), entity).await?.json()
    }

    /// `DELETE /{resource}/{id}`
    pub async fn delete(&self, id: impl Display) -> ClientResult<()> {
        self.client.delete(&Self::item_path(id)).await?;
        Ok(())
    }
}

impl<R: Resource> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self::new(self.client.clone())
    }
}

impl<R: Resource> fmt::Debug for ResourceService<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceService")
            .field("path", &R::PATH)
            .finish()
    }
}
