//! Repository over blog posts

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub author: String,
}

impl Post {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            author: author.into(),
        }
    }
}

/// Something that has a stable identifier
pub trait Entity {
    fn id(&self) -> Uuid;
}

impl Entity for Post {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Trait for repository backends
#[async_trait::async_trait]
pub trait Repository<T>: Send + Sync {
    /// Store an entity, replacing any entity with the same id
    async fn add(&self, entity: T) -> Result<()>;

    /// Load an entity by id
    async fn get(&self, id: Uuid) -> Result<Option<T>>;

    /// List all entities in insertion order
    async fn list(&self) -> Result<Vec<T>>;
}

/// In-memory repository
pub struct InMemoryRepository<T> {
    entities: RwLock<HashMap<Uuid, T>>,
    order: RwLock<Vec<Uuid>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(HashMap::new()),
            order: RwLock::new(Vec::new()),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl<T> Repository<T> for InMemoryRepository<T>
where
    T: Entity + Clone + Send + Sync + 'static,
{
    async fn add(&self, entity: T) -> Result<()> {
        let id = entity.id();
        let mut entities = self.entities.write().await;
        if entities.insert(id, entity).is_none() {
            self.order.write().await.push(id);
        }
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<T>> {
        let entities = self.entities.read().await;
        Ok(entities.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<T>> {
        let entities = self.entities.read().await;
        let order = self.order.read().await;
        Ok(order.iter().filter_map(|id| entities.get(id).cloned()).collect())
    }
}
