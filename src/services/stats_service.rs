use crate::data::repos::implementors::order_repo::OrderRepo;
use crate::data::repos::implementors::product_repo::ProductRepo;
use crate::services::errors::StatsServiceError;
use crate::services::order_service::OrderStatus;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoreStats {
    pub total_products: i64,
    pub total_orders: i64,
    pub total_revenue: f64,
    pub pending_orders: i64,
}

pub struct StatsService;

impl StatsService {
    pub fn new() -> Self {
        StatsService
    }

    /// Dashboard counters. Revenue ignores cancelled orders.
    pub async fn get_stats(&self) -> Result<StoreStats, StatsServiceError> {
        let product_repo = ProductRepo::new();
        let order_repo = OrderRepo::new();

        let total_products = product_repo
            .count_all()
            .await
            .map_err(|_| StatsServiceError::DatabaseError)?;

        let total_orders = order_repo
            .count_by_status(None)
            .await
            .map_err(|_| StatsServiceError::DatabaseError)?;

        let total_revenue = order_repo
            .revenue_total()
            .await
            .map_err(|_| StatsServiceError::DatabaseError)?;

        let pending_orders = order_repo
            .count_by_status(Some(OrderStatus::Pending.as_str()))
            .await
            .map_err(|_| StatsServiceError::DatabaseError)?;

        Ok(StoreStats {
            total_products,
            total_orders,
            total_revenue,
            pending_orders,
        })
    }
}

impl Default for StatsService {
    fn default() -> Self {
        Self::new()
    }
}
