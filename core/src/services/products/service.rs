//! Product command and query handlers

use std::sync::Arc;

use ds_shared::{ApiResponse, PageRequest, PaginatedResponse};
use tracing::info;

use crate::errors::{DomainResult, ProductError};
use crate::repositories::{ProductRepository, UnitOfWork};
use crate::services::listing::list_page;
use crate::services::validation::validate;

use super::types::{ProductCommand, ProductResponse};

/// Service handling the product catalog
pub struct ProductService<P, W>
where
    P: ProductRepository,
    W: UnitOfWork,
{
    products: Arc<P>,
    unit_of_work: Arc<W>,
}

impl<P, W> ProductService<P, W>
where
    P: ProductRepository,
    W: UnitOfWork,
{
    pub fn new(products: Arc<P>, unit_of_work: Arc<W>) -> Self {
        Self {
            products,
            unit_of_work,
        }
    }

    /// Add a product; titles are unique
    pub async fn create(&self, command: ProductCommand) -> DomainResult<ApiResponse<ProductResponse>> {
        if let Err(errors) = validate(&command) {
            return Ok(ApiResponse::failure(errors));
        }

        if self.products.find_by_title(&command.title).await?.is_some() {
            return Ok(ApiResponse::fail(ProductError::Exists));
        }

        let product = self.products.create(command.into_product()).await?;
        self.unit_of_work.commit().await?;

        info!(product_id = product.id, "product created");
        Ok(ApiResponse::success(ProductResponse::from(product)))
    }

    /// Replace every field of product `id`
    pub async fn update(&self, id: i32, command: ProductCommand) -> DomainResult<ApiResponse<ProductResponse>> {
        if let Err(errors) = validate(&command) {
            return Ok(ApiResponse::failure(errors));
        }

        let mut product = match self.products.find_by_id(id).await? {
            Some(product) => product,
            None => return Ok(ApiResponse::fail(ProductError::NotFound)),
        };

        command.apply_to(&mut product);
        let product = self.products.update(product).await?;
        self.unit_of_work.commit().await?;

        info!(product_id = id, "product updated");
        Ok(ApiResponse::success(ProductResponse::from(product)))
    }

    pub async fn delete(&self, id: i32) -> DomainResult<ApiResponse<()>> {
        if self.products.find_by_id(id).await?.is_none() {
            return Ok(ApiResponse::fail(ProductError::NotFound));
        }

        self.products.delete(id).await?;
        self.unit_of_work.commit().await?;

        info!(product_id = id, "product deleted");
        Ok(ApiResponse::success(()))
    }

    pub async fn get_by_id(&self, id: i32) -> DomainResult<ApiResponse<ProductResponse>> {
        Ok(match self.products.find_by_id(id).await? {
            Some(product) => ApiResponse::success(ProductResponse::from(product)),
            None => ApiResponse::fail(ProductError::NotFound),
        })
    }

    /// One page of products
    ///
    /// Sortable by `title`, `price`, `category`, `image`, `rate` and `id`.
    pub async fn list(&self, request: &PageRequest) -> DomainResult<PaginatedResponse<Vec<ProductResponse>>> {
        let products = self.products.find_all().await?;
        Ok(list_page(products, request, ProductError::TableIsEmpty, ProductResponse::from))
    }

    /// Distinct categories in first-seen order
    pub async fn categories(&self) -> DomainResult<ApiResponse<Vec<String>>> {
        let products = self.products.find_all().await?;
        if products.is_empty() {
            return Ok(ApiResponse::fail(ProductError::TableIsEmpty));
        }

        let mut categories: Vec<String> = Vec::new();
        for product in products {
            if !categories.contains(&product.category) {
                categories.push(product.category);
            }
        }
        Ok(ApiResponse::success(categories))
    }

    /// Every product of one category
    pub async fn by_category(&self, category: &str) -> DomainResult<ApiResponse<Vec<ProductResponse>>> {
        let products = self.products.find_by_category(category).await?;
        if products.is_empty() {
            return Ok(ApiResponse::fail(ProductError::NotFound));
        }
        Ok(ApiResponse::success(
            products.into_iter().map(ProductResponse::from).collect(),
        ))
    }
}
