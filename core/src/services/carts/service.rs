//! Cart command and query handlers

use std::collections::HashMap;
use std::sync::Arc;

use ds_shared::{ApiResponse, PageRequest, PaginatedResponse};
use tracing::{debug, info};

use crate::domain::entities::Cart;
use crate::errors::{CartError, CartItemError, DomainResult, ProductError, UserError};
use crate::repositories::{
    CartItemRepository, CartRepository, ProductRepository, UnitOfWork, UserRepository,
};
use crate::services::listing::list_page;
use crate::services::validation::validate;

use super::types::{CartItemRequest, CartItemResponse, CartResponse, CreateCartCommand};

/// Service handling carts and their items
pub struct CartService<U, P, C, I, W>
where
    U: UserRepository,
    P: ProductRepository,
    C: CartRepository,
    I: CartItemRepository,
    W: UnitOfWork,
{
    /// Owner lookups
    users: Arc<U>,
    /// Product existence checks
    products: Arc<P>,
    carts: Arc<C>,
    items: Arc<I>,
    unit_of_work: Arc<W>,
}

impl<U, P, C, I, W> CartService<U, P, C, I, W>
where
    U: UserRepository,
    P: ProductRepository,
    C: CartRepository,
    I: CartItemRepository,
    W: UnitOfWork,
{
    /// Create a new cart service
    ///
    /// # Arguments
    ///
    /// * `users` - Repository used to check the cart owner exists
    /// * `products` - Repository used to check every item's product exists
    /// * `carts` - Cart persistence
    /// * `items` - Cart item persistence
    /// * `unit_of_work` - Commits the staged changes
    pub fn new(
        users: Arc<U>,
        products: Arc<P>,
        carts: Arc<C>,
        items: Arc<I>,
        unit_of_work: Arc<W>,
    ) -> Self {
        Self {
            users,
            products,
            carts,
            items,
            unit_of_work,
        }
    }

    /// Open a cart with its initial items
    ///
    /// This method:
    /// 1. Validates the command and every item
    /// 2. Checks the user and every referenced product exist
    /// 3. Rejects the request if the user already has an active cart
    /// 4. Stages the cart and its items, each priced with the quantity discount
    /// 5. Commits once
    ///
    /// # Returns
    ///
    /// * `Ok(ApiResponse)` - The new cart, or the business errors
    /// * `Err(DomainError)` - Storage failure
    pub async fn create(&self, command: CreateCartCommand) -> DomainResult<ApiResponse<CartResponse>> {
        if let Err(errors) = validate(&command) {
            debug!(count = errors.len(), "create cart rejected by validation");
            return Ok(ApiResponse::failure(errors));
        }

        if self.users.find_by_id(command.user_id).await?.is_none() {
            return Ok(ApiResponse::fail(UserError::NotFound));
        }

        for item in &command.cart_items {
            if self.products.find_by_id(item.product_id).await?.is_none() {
                return Ok(ApiResponse::fail(ProductError::NotFound));
            }
        }

        if self.carts.find_active_by_user(command.user_id).await?.is_some() {
            info!(user_id = command.user_id, "user already has an active cart");
            return Ok(ApiResponse::fail(CartError::Exists));
        }

        let cart = self
            .carts
            .create(Cart::new(command.user_id, command.create_date))
            .await?;

        let mut items = Vec::with_capacity(command.cart_items.len());
        for request in command.cart_items {
            items.push(self.items.create(request.into_item(cart.id)).await?);
        }

        self.unit_of_work.commit().await?;

        info!(cart_id = cart.id, user_id = cart.user_id, items = items.len(), "cart created");
        Ok(ApiResponse::success(CartResponse::new(cart, items)))
    }

    /// Add one product line to an existing cart
    pub async fn add_item(
        &self,
        cart_id: i32,
        request: CartItemRequest,
    ) -> DomainResult<ApiResponse<CartResponse>> {
        if let Err(errors) = validate(&request) {
            return Ok(ApiResponse::failure(errors));
        }

        if self.carts.find_by_id(cart_id).await?.is_none() {
            return Ok(ApiResponse::fail(CartError::NotFound));
        }

        if self.products.find_by_id(request.product_id).await?.is_none() {
            return Ok(ApiResponse::fail(ProductError::NotFound));
        }

        if self
            .items
            .find_by_cart_and_product(cart_id, request.product_id)
            .await?
            .is_some()
        {
            return Ok(ApiResponse::fail(CartItemError::Exists));
        }

        let item = self.items.create(request.into_item(cart_id)).await?;
        self.unit_of_work.commit().await?;
        info!(cart_id, product_id = item.product_id, price = %item.price(), "item added to cart");

        self.load(cart_id).await
    }

    /// Delete a cart and its items
    pub async fn delete(&self, id: i32) -> DomainResult<ApiResponse<()>> {
        if self.carts.find_by_id(id).await?.is_none() {
            return Ok(ApiResponse::fail(CartError::NotFound));
        }

        self.carts.delete(id).await?;
        self.unit_of_work.commit().await?;

        info!(cart_id = id, "cart deleted");
        Ok(ApiResponse::success(()))
    }

    /// Remove one item from a cart
    pub async fn delete_item(&self, cart_id: i32, item_id: i32) -> DomainResult<ApiResponse<()>> {
        match self.items.find_by_id(item_id).await? {
            Some(item) if item.cart_id == cart_id => {}
            _ => return Ok(ApiResponse::fail(CartItemError::NotFound)),
        }

        self.items.delete(item_id).await?;
        self.unit_of_work.commit().await?;

        info!(cart_id, item_id, "cart item deleted");
        Ok(ApiResponse::success(()))
    }

    pub async fn get_by_id(&self, id: i32) -> DomainResult<ApiResponse<CartResponse>> {
        self.load(id).await
    }

    /// One page of carts, each with its own items
    ///
    /// Sortable by `id`, `userId` and `createDate`.
    pub async fn list(&self, request: &PageRequest) -> DomainResult<PaginatedResponse<Vec<CartResponse>>> {
        let carts = self.carts.find_all().await?;
        if carts.is_empty() {
            return Ok(PaginatedResponse::fail(CartError::TableIsEmpty));
        }

        let items = self.items.find_all().await?;
        if items.is_empty() {
            return Ok(PaginatedResponse::fail(CartItemError::TableIsEmpty));
        }

        let mut by_cart: HashMap<i32, Vec<CartItemResponse>> = HashMap::new();
        for item in items {
            by_cart.entry(item.cart_id).or_default().push(CartItemResponse::from(item));
        }

        Ok(list_page(carts, request, CartError::TableIsEmpty, |cart| {
            let items = by_cart.remove(&cart.id).unwrap_or_default();
            CartResponse::with_items(cart, items)
        }))
    }

    async fn load(&self, cart_id: i32) -> DomainResult<ApiResponse<CartResponse>> {
        let cart = match self.carts.find_by_id(cart_id).await? {
            Some(cart) => cart,
            None => return Ok(ApiResponse::fail(CartError::NotFound)),
        };
        let items = self.items.find_by_cart(cart_id).await?;
        Ok(ApiResponse::success(CartResponse::new(cart, items)))
    }
}
