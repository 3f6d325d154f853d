use crate::data::models::order::{NewOrder, Order, UpdateOrder};
use crate::data::models::order_item::OrderItem;
use crate::data::repos::implementors::order_repo::OrderRepo;
use crate::data::repos::traits::repository::Repository;
use crate::services::errors::OrderServiceError;

/// Order lifecycle states, stored lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "shipped" => Ok(OrderStatus::Shipped),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(()),
        }
    }
}

/// One line of an incoming order: the product snapshot the shopper saw.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineDraft {
    pub product_id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub items: Vec<OrderLineDraft>,
    pub total: Option<f64>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_address: Option<String>,
    pub customer_email: Option<String>,
}

pub struct OrderService;

impl OrderService {
    pub fn new() -> Self {
        OrderService
    }

    /// Creates the order and its line items atomically and returns the new
    /// order id. New orders always start out `pending`.
    pub async fn create_order(&self, draft: OrderDraft) -> Result<i64, OrderServiceError> {
        if draft.items.is_empty() {
            return Err(OrderServiceError::EmptyOrder);
        }

        for line in &draft.items {
            if !line.price.is_finite() || line.price < 0.0 || line.quantity < 1 {
                return Err(OrderServiceError::InvalidItem);
            }
        }

        let total = draft.total.ok_or(OrderServiceError::InvalidTotal)?;
        if !total.is_finite() || total < 0.0 {
            return Err(OrderServiceError::InvalidTotal);
        }

        let new_order = NewOrder {
            total,
            customer_name: draft.customer_name.as_deref(),
            customer_phone: draft.customer_phone.as_deref(),
            customer_address: draft.customer_address.as_deref(),
            customer_email: draft.customer_email.as_deref(),
            status: OrderStatus::Pending.as_str(),
        };

        let items = draft
            .items
            .iter()
            .map(|line| (line.product_id, line.name.clone(), line.price, line.quantity))
            .collect();

        let repo = OrderRepo::new();
        repo.create_with_items(new_order, items)
            .await
            .map_err(|_| OrderServiceError::OrderCreationFailed)
    }

    /// One admin page of orders with their items, plus the total number of
    /// orders the filter matches. An unknown status string simply matches
    /// nothing.
    pub async fn list_orders(
        &self,
        status: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<(Order, Vec<OrderItem>)>, i64), OrderServiceError> {
        let limit = limit.max(0);
        let offset = offset.max(0);

        let repo = OrderRepo::new();

        let page = repo
            .get_page(status, limit, offset)
            .await
            .map_err(|_| OrderServiceError::DatabaseError)?
            .unwrap_or_default();

        let total = repo
            .count_by_status(status)
            .await
            .map_err(|_| OrderServiceError::DatabaseError)?;

        let with_items = repo
            .attach_items(page)
            .await
            .map_err(|_| OrderServiceError::DatabaseError)?;

        Ok((with_items, total))
    }

    pub async fn get_order_by_id(
        &self,
        order_id: i64,
    ) -> Result<Option<(Order, Vec<OrderItem>)>, OrderServiceError> {
        let repo = OrderRepo::new();

        let order = repo
            .get_by_id(order_id)
            .await
            .map_err(|_| OrderServiceError::DatabaseError)?;

        match order {
            Some(order) => {
                let mut with_items = repo
                    .attach_items(vec![order])
                    .await
                    .map_err(|_| OrderServiceError::DatabaseError)?;
                Ok(with_items.pop())
            }
            None => Ok(None),
        }
    }

    /// Moves an order to a new status and stamps `updated_at`.
    pub async fn update_order_status(
        &self,
        order_id: i64,
        status: &str,
    ) -> Result<OrderStatus, OrderServiceError> {
        let new_status: OrderStatus =
            status.parse().map_err(|_| OrderServiceError::InvalidStatus)?;

        let repo = OrderRepo::new();

        repo.get_by_id(order_id)
            .await
            .map_err(|_| OrderServiceError::DatabaseError)?
            .ok_or(OrderServiceError::OrderNotFound)?;

        let update = UpdateOrder {
            status: new_status.as_str(),
            updated_at: chrono::Utc::now().naive_utc(),
        };

        repo.update(order_id, update)
            .await
            .map_err(|_| OrderServiceError::OrderUpdateFailed)?;

        Ok(new_status)
    }
}

impl Default for OrderService {
    fn default() -> Self {
        Self::new()
    }
}
