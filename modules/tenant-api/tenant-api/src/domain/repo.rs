use async_trait::async_trait;

use crate::domain::model::{Color, ColorPatch};

/// CRUD over the colors table of one already-open tenant database.
///
/// Inputs are trusted as-is; validation happens before a connection exists.
#[async_trait]
pub trait ColorRepository: Send + Sync {
    /// All colors, ascending by id.
    async fn all(&self) -> anyhow::Result<Vec<Color>>;

    async fn find(&self, id: i32) -> anyhow::Result<Option<Color>>;

    /// Stores the color with its hexadecimal upper-cased.
    async fn create(&self, name: &str, hexadecimal: &str) -> anyhow::Result<Color>;

    /// Applies the supplied fields and returns the row after the update.
    /// An empty patch is a plain `find`.
    async fn update(&self, id: i32, patch: &ColorPatch) -> anyhow::Result<Option<Color>>;

    /// True iff a row was removed.
    async fn delete(&self, id: i32) -> anyhow::Result<bool>;
}
