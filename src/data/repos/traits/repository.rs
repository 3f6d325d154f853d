use async_trait::async_trait;
use diesel::result;

/// Common CRUD surface for the entity repositories. `add` hands back the
/// id the database assigned so callers can echo it in responses.
#[async_trait]
pub trait Repository {
    type Id;
    type Item;
    type NewItem<'a>;
    type UpdateForm<'a>;

    async fn get_all(&self) -> Result<Option<Vec<Self::Item>>, result::Error>;

    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Item>, result::Error>;

    async fn add<'a>(&self, item: Self::NewItem<'a>) -> Result<Self::Id, result::Error>;

    async fn update<'a>(&self, id: Self::Id, item: Self::UpdateForm<'a>)
        -> Result<(), result::Error>;

    async fn delete(&self, id: Self::Id) -> Result<(), result::Error>;
}
