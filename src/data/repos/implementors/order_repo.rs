use crate::data::database::{Database, DbConnection};
use crate::data::models::order::{NewOrder, Order, UpdateOrder};
use crate::data::models::order_item::{NewOrderItem, OrderItem};
use crate::data::repos::traits::repository::Repository;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::pooled_connection::deadpool::Object;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use std::collections::HashMap;

pub struct OrderRepo {}

impl OrderRepo {
    pub fn new() -> Self {
        OrderRepo {}
    }

    /// Inserts the order and every line item in one transaction and returns
    /// the new order id. Items are `(product_id, product_name, price,
    /// quantity)`; the subtotal is snapshotted here.
    pub async fn create_with_items(
        &self,
        new_order: NewOrder<'_>,
        items: Vec<(i64, String, f64, i64)>,
    ) -> Result<i64, result::Error> {
        use crate::data::models::schema::order_items::dsl::order_items;
        use crate::data::models::schema::orders::dsl::orders;

        let db = Database::new().await;

        let mut conn = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                diesel::insert_into(orders)
                    .values(&new_order)
                    .execute(connection)
                    .await?;

                let new_id: i64 = diesel::select(diesel::dsl::sql::<diesel::sql_types::BigInt>(
                    "last_insert_rowid()",
                ))
                .get_result(connection)
                .await?;

                let new_items: Vec<NewOrderItem> = items
                    .iter()
                    .map(|(pid, pname, unit_price, qty)| NewOrderItem {
                        order_id: new_id,
                        product_id: *pid,
                        product_name: pname,
                        price: *unit_price,
                        quantity: *qty,
                        subtotal: unit_price * (*qty as f64),
                    })
                    .collect();

                // diesel-async has no SQLite batch-insert support (the
                // multi-row VALUES rewrite only exists on the sync
                // ExecuteDsl path), so each line is inserted separately
                // inside the same transaction.
                for new_item in &new_items {
                    diesel::insert_into(order_items)
                        .values(new_item)
                        .execute(connection)
                        .await?;
                }

                Ok(new_id)
            }
            .scope_boxed()
        })
        .await
    }

    /// One admin-listing page, newest first.
    pub async fn get_page(
        &self,
        status_query: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Option<Vec<Order>>, result::Error> {
        use crate::data::models::schema::orders::dsl::{created_at, id, orders, status};

        let db = Database::new().await;

        let mut conn: Object<DbConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        let mut query = orders.into_boxed();

        if let Some(s) = status_query {
            query = query.filter(status.eq(s.to_string()));
        }

        match query
            .order((created_at.desc(), id.desc()))
            .limit(limit)
            .offset(offset)
            .load::<Order>(&mut conn)
            .await
        {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Total rows the page query would match without limit/offset.
    pub async fn count_by_status(
        &self,
        status_query: Option<&str>,
    ) -> Result<i64, result::Error> {
        use crate::data::models::schema::orders::dsl::{orders, status};

        let db = Database::new().await;

        let mut conn: Object<DbConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        match status_query {
            Some(s) => orders.filter(status.eq(s)).count().get_result(&mut conn).await,
            None => orders.count().get_result(&mut conn).await,
        }
    }

    /// Revenue across all orders that were not cancelled.
    pub async fn revenue_total(&self) -> Result<f64, result::Error> {
        use crate::data::models::schema::orders::dsl::{orders, status, total};

        let db = Database::new().await;

        let mut conn: Object<DbConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        let revenue: Option<f64> = orders
            .filter(status.ne("cancelled"))
            .select(diesel::dsl::sum(total))
            .get_result(&mut conn)
            .await?;

        Ok(revenue.unwrap_or(0.0))
    }

    pub async fn attach_items(
        &self,
        orders_list: Vec<Order>,
    ) -> Result<Vec<(Order, Vec<OrderItem>)>, result::Error> {
        if orders_list.is_empty() {
            return Ok(Vec::new());
        }

        use crate::data::models::schema::order_items::dsl::{order_id, order_items};

        let db = Database::new().await;

        let mut conn = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        let ids: Vec<i64> = orders_list.iter().map(|o| o.id).collect();

        let items_data: Vec<OrderItem> = order_items
            .filter(order_id.eq_any(ids))
            .load::<OrderItem>(&mut conn)
            .await?;

        let mut map: HashMap<i64, Vec<OrderItem>> = HashMap::new();

        for item in items_data {
            map.entry(item.order_id).or_default().push(item);
        }

        let result = orders_list
            .into_iter()
            .map(|o| {
                let items = map.remove(&o.id).unwrap_or_default();
                (o, items)
            })
            .collect();

        Ok(result)
    }
}

#[async_trait]
impl Repository for OrderRepo {
    type Id = i64;
    type Item = Order;
    type NewItem<'a> = NewOrder<'a>;
    type UpdateForm<'a> = UpdateOrder<'a>;

    async fn get_all(&self) -> Result<Option<Vec<Self::Item>>, result::Error> {
        use crate::data::models::schema::orders::dsl::{id, orders};

        let db = Database::new().await;

        let mut conn: Object<DbConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        match orders.order(id.asc()).load::<Self::Item>(&mut conn).await {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Item>, result::Error> {
        use crate::data::models::schema::orders::dsl::{id as order_id, orders};

        let db = Database::new().await;

        let mut conn: Object<DbConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        match orders
            .filter(order_id.eq(id))
            .first::<Self::Item>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn add<'a>(&self, item: Self::NewItem<'a>) -> Result<Self::Id, result::Error> {
        use crate::data::models::schema::orders::dsl::orders;

        let db = Database::new().await;

        let mut conn: Object<DbConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                diesel::insert_into(orders)
                    .values(&item)
                    .execute(connection)
                    .await?;

                let new_id: i64 = diesel::select(diesel::dsl::sql::<diesel::sql_types::BigInt>(
                    "last_insert_rowid()",
                ))
                .get_result(connection)
                .await?;

                Ok(new_id)
            }
            .scope_boxed()
        })
        .await
    }

    async fn update<'a>(
        &self,
        id: Self::Id,
        item: Self::UpdateForm<'a>,
    ) -> Result<(), result::Error> {
        use crate::data::models::schema::orders::dsl::{id as order_id, orders};

        let db = Database::new().await;

        let mut conn: Object<DbConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        match conn
            .transaction(|connection| {
                async move {
                    diesel::update(orders.filter(order_id.eq(id)))
                        .set(&item)
                        .execute(connection)
                        .await?;
                    Ok(())
                }
                .scope_boxed()
            })
            .await
        {
            Ok(_) => Ok(()),
            Err(e) => Err(e),
        }
    }

    async fn delete(&self, id: Self::Id) -> Result<(), result::Error> {
        use crate::data::models::schema::orders::dsl::{id as order_id, orders};

        let db = Database::new().await;

        let mut conn: Object<DbConnection> = db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        match conn
            .transaction(|connection| {
                async move {
                    diesel::delete(orders.filter(order_id.eq(id)))
                        .execute(connection)
                        .await?;
                    Ok(())
                }
                .scope_boxed()
            })
            .await
        {
            Ok(_) => Ok(()),
            Err(e) => Err(e),
        }
    }
}

impl Default for OrderRepo {
    fn default() -> Self {
        Self::new()
    }
}
