use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::AdminIdentity;
use crate::domain::types::{Order, OrderItem};
use crate::error::StoreError;
use crate::state::AppState;
use crate::usecase::order::{
    CreateOrderInput, CreateOrderUseCase, GetOrderUseCase, ListOrdersUseCase,
    UpdateOrderStatusUseCase,
};

/// Line-item shape shared by requests and responses.
#[derive(Serialize, Deserialize)]
pub struct OrderItemBody {
    pub product_id: String,
    pub product_name: String,
    pub quantity: i32,
    pub price: f64,
    pub variant: Option<String>,
}

impl From<OrderItem> for OrderItemBody {
    fn from(item: OrderItem) -> Self {
        Self {
            product_id: item.product_id,
            product_name: item.product_name,
            quantity: item.quantity,
            price: item.price,
            variant: item.variant,
        }
    }
}

impl From<OrderItemBody> for OrderItem {
    fn from(item: OrderItemBody) -> Self {
        Self {
            product_id: item.product_id,
            product_name: item.product_name,
            quantity: item.quantity,
            price: item.price,
            variant: item.variant,
        }
    }
}

#[derive(Serialize)]
pub struct OrderResponse {
    pub id: String,
    pub order_code: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub receipt_file_url: Option<String>,
    pub items: Vec<OrderItemBody>,
    pub total_amount: f64,
    pub status: String,
    #[serde(serialize_with = "vitrin_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "vitrin_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.to_string(),
            order_code: order.order_code,
            customer_name: order.customer_name,
            customer_email: order.customer_email,
            customer_phone: order.customer_phone,
            customer_address: order.customer_address,
            receipt_file_url: order.receipt_file_url,
            items: order.items.into_iter().map(OrderItemBody::from).collect(),
            total_amount: order.total_amount,
            status: order.status,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

// ── POST /api/orders ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateOrderRequest {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub receipt_file_url: Option<String>,
    pub items: Vec<OrderItemBody>,
    pub total_amount: f64,
}

/// Public — customers submit orders without a session.
pub async fn create_order(
    State(state): State<AppState>,
    Json(body): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), StoreError> {
    let usecase = CreateOrderUseCase {
        repo: state.order_repo(),
    };
    let order = usecase
        .execute(CreateOrderInput {
            customer_name: body.customer_name,
            customer_email: body.customer_email,
            customer_phone: body.customer_phone,
            customer_address: body.customer_address,
            receipt_file_url: body.receipt_file_url,
            items: body.items.into_iter().map(OrderItem::from).collect(),
            total_amount: body.total_amount,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(order.into())))
}

// ── GET /api/orders/{id_or_code} ─────────────────────────────────────────────

/// Public — order tracking accepts either the internal id or the printed
/// tracking code in any letter case.
pub async fn get_order(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<OrderResponse>, StoreError> {
    let usecase = GetOrderUseCase {
        repo: state.order_repo(),
    };
    let order = usecase.execute(&key).await?;
    Ok(Json(order.into()))
}

// ── GET /api/orders ──────────────────────────────────────────────────────────

pub async fn list_orders(
    _identity: AdminIdentity,
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderResponse>>, StoreError> {
    let usecase = ListOrdersUseCase {
        repo: state.order_repo(),
    };
    let orders = usecase.execute().await?;
    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

// ── PUT /api/orders/{id} ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateOrderRequest {
    pub status: String,
}

pub async fn update_order(
    _identity: AdminIdentity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateOrderRequest>,
) -> Result<Json<OrderResponse>, StoreError> {
    let usecase = UpdateOrderStatusUseCase {
        repo: state.order_repo(),
    };
    let order = usecase.execute(id, &body.status).await?;
    Ok(Json(order.into()))
}
