//! Shop flow: product search, order placement, order history.
//!
//! Every handler here requires a logged-in shop user; the [`RequireUser`]
//! extractor redirects anonymous callers to the login page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::Result;
use crate::filters;
use crate::middleware::RequireUser;
use crate::models::{CurrentUser, Order, Product};
use crate::routes::format_timestamp;
use crate::services::orders::{OrderError, OrderService, PlaceOrder};
use crate::state::AppState;

/// Message shown when an exact-name search finds nothing.
const PRODUCT_UNAVAILABLE: &str = "SORRY...! Product Unavailable";

/// Search form input.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default, rename = "productName")]
    pub product_name: String,
}

/// Order form input. Price and name are snapshots taken from the search
/// result the form was rendered with.
#[derive(Debug, Deserialize)]
pub struct OrderForm {
    #[serde(rename = "productName")]
    pub product_name: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// Product as rendered on the shop view.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub name: String,
    pub price: Decimal,
    pub description: String,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            price: product.price,
            description: product.description,
        }
    }
}

/// Order-history line as rendered on the shop view.
#[derive(Debug, Clone)]
pub struct OrderView {
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub total: Decimal,
    pub ordered_at: String,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            product_name: order.product_name.clone(),
            quantity: order.quantity,
            unit_price: order.unit_price,
            total: order.total,
            ordered_at: format_timestamp(&order.ordered_at),
        }
    }
}

/// Shop view template: search form, optional result, order history.
#[derive(Template, WebTemplate)]
#[template(path = "buy_product.html")]
pub struct ShopTemplate {
    pub name: String,
    pub message: Option<String>,
    pub product: Option<ProductView>,
    pub orders: Vec<OrderView>,
}

/// Order confirmation template.
#[derive(Template, WebTemplate)]
#[template(path = "order_success.html")]
pub struct OrderSuccessTemplate {
    pub amount: Decimal,
}

/// Build the shop view for a user: their order history plus an optional
/// search result or message.
pub(crate) async fn shop_page(
    state: &AppState,
    user: &CurrentUser,
    product: Option<Product>,
    message: Option<String>,
) -> Result<ShopTemplate> {
    let orders = state.orders().list_for_user(user.id).await?;

    Ok(ShopTemplate {
        name: user.name.clone(),
        message,
        product: product.map(ProductView::from),
        orders: orders.iter().map(OrderView::from).collect(),
    })
}

/// Exact-name product search. No match is an "unavailable" message on the
/// same view, never an error; the order history renders either way.
pub async fn search(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Response> {
    let product = state.products().get_by_name(&form.product_name).await?;
    let message = product
        .is_none()
        .then(|| PRODUCT_UNAVAILABLE.to_owned());

    let page = shop_page(&state, &user, product, message).await?;
    Ok(page.into_response())
}

/// Place an order and render the confirmation with the computed total.
/// Invalid quantity or price re-renders the shop view with the reason.
pub async fn place_order(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
    Form(form): Form<OrderForm>,
) -> Result<Response> {
    let service = OrderService::new(state.orders());
    let request = PlaceOrder {
        product_name: form.product_name,
        unit_price: form.price,
        quantity: form.quantity,
    };

    match service.place(user.id, request).await {
        Ok(order) => Ok(OrderSuccessTemplate {
            amount: order.total,
        }
        .into_response()),
        Err(err @ (OrderError::InvalidQuantity(_) | OrderError::InvalidPrice(_))) => {
            let page = shop_page(&state, &user, None, Some(err.to_string())).await?;
            Ok(page.into_response())
        }
        Err(OrderError::Repository(e)) => Err(e.into()),
    }
}

/// Back from the confirmation: shop view with the user's order history.
pub async fn back(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
) -> Result<Response> {
    let page = shop_page(&state, &user, None, None).await?;
    Ok(page.into_response())
}
