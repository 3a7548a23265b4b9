use chrono::Utc;
use rand::RngExt;
use uuid::Uuid;

use crate::domain::repository::OrderRepository;
use crate::domain::types::{Order, OrderItem};
use crate::error::StoreError;

/// Charset for generating order tracking codes (uppercase alphanumeric).
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const ORDER_CODE_PREFIX: &str = "VTR";
const ORDER_CODE_LEN: usize = 6;

/// Generate a tracking code like `VTR-7K2M9X`. Codes are not checked against
/// existing orders — at 36^6 the collision odds are negligible and the unique
/// index on the column turns the freak case into a retryable 500.
pub fn generate_order_code() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..ORDER_CODE_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect();
    format!("{ORDER_CODE_PREFIX}-{suffix}")
}

// ── CreateOrder ──────────────────────────────────────────────────────────────

pub struct CreateOrderInput {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub receipt_file_url: Option<String>,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
}

pub struct CreateOrderUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> CreateOrderUseCase<R> {
    pub async fn execute(&self, input: CreateOrderInput) -> Result<Order, StoreError> {
        // Items are stored exactly as submitted — a snapshot, never re-priced
        // against the live catalog.
        let now = Utc::now();
        let order = Order {
            id: Uuid::new_v4(),
            order_code: generate_order_code(),
            customer_name: input.customer_name,
            customer_email: input.customer_email,
            customer_phone: input.customer_phone,
            customer_address: input.customer_address,
            receipt_file_url: input.receipt_file_url,
            items: input.items,
            total_amount: input.total_amount,
            status: "pending".to_owned(),
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&order).await?;
        Ok(order)
    }
}

// ── GetOrder (by id or tracking code) ────────────────────────────────────────

pub struct GetOrderUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> GetOrderUseCase<R> {
    /// Id lookup is exact; code lookup is case-insensitive (customers type
    /// codes by hand).
    pub async fn execute(&self, key: &str) -> Result<Order, StoreError> {
        if let Ok(id) = Uuid::parse_str(key) {
            if let Some(order) = self.repo.find_by_id(id).await? {
                return Ok(order);
            }
        }
        self.repo
            .find_by_code(&key.to_uppercase())
            .await?
            .ok_or(StoreError::OrderNotFound)
    }
}

// ── ListOrders ───────────────────────────────────────────────────────────────

pub struct ListOrdersUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> ListOrdersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Order>, StoreError> {
        self.repo.list().await
    }
}

// ── UpdateOrderStatus ────────────────────────────────────────────────────────

pub struct UpdateOrderStatusUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> UpdateOrderStatusUseCase<R> {
    /// Status is free text by contract: any value may follow any other, so
    /// operations can introduce stages without a deploy.
    pub async fn execute(&self, id: Uuid, status: &str) -> Result<Order, StoreError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(StoreError::OrderNotFound)?;
        self.repo.update_status(id, status).await?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(StoreError::OrderNotFound)
    }
}
