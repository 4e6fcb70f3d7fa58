use std::sync::Arc;

use poem::Request;
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::errors::ProductError;
use business::domain::product::model::ProductDetails;
use business::domain::product::paging::{PageRequest, PagingLimits};
use business::domain::product::use_cases::brand_summary::GetBrandSummaryUseCase;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_by_key::{
    GetProductByKeyParams, GetProductByKeyUseCase,
};
use business::domain::product::use_cases::list::{ListProductsParams, ListProductsUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product::value_objects::ProductKey;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    BrandSummaryResponse, ProductPageResponse, ProductRequest, ProductResponse,
};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    list_use_case: Arc<dyn ListProductsUseCase>,
    get_by_key_use_case: Arc<dyn GetProductByKeyUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    brand_summary_use_case: Arc<dyn GetBrandSummaryUseCase>,
    paging: PagingLimits,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        list_use_case: Arc<dyn ListProductsUseCase>,
        get_by_key_use_case: Arc<dyn GetProductByKeyUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        brand_summary_use_case: Arc<dyn GetBrandSummaryUseCase>,
        paging: PagingLimits,
    ) -> Self {
        Self {
            create_use_case,
            list_use_case,
            get_by_key_use_case,
            update_use_case,
            delete_use_case,
            brand_summary_use_case,
            paging,
        }
    }
}

/// Product catalog API
///
/// Endpoints for creating, reading, updating, deleting and searching products.
#[OpenApi]
impl ProductApi {
    /// List or search products
    ///
    /// Returns one page of products. `page` is zero-based, `size` is clamped to the
    /// configured maximum and `sort` takes `field` or `field,asc|desc`. With a non-blank
    /// `search` term only products whose name, brand or model contain it
    /// (case-insensitive) are returned.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn list_products(
        &self,
        req: &Request,
        page: Query<Option<i64>>,
        size: Query<Option<i64>>,
        sort: Query<Option<String>>,
        search: Query<Option<String>>,
    ) -> ListProductsResponse {
        let path = req.uri().path();
        let page = match PageRequest::resolve(page.0, size.0, sort.0.as_deref(), &self.paging) {
            Ok(page) => page,
            Err(err) => {
                let (_status, json) = err.into_error_response(path);
                return ListProductsResponse::BadRequest(json);
            }
        };

        let params = ListProductsParams {
            page,
            search: search.0,
        };
        match self.list_use_case.execute(params).await {
            Ok(page) => ListProductsResponse::Ok(Json(page.into())),
            Err(err) => {
                let (status, json) = err.into_error_response(path);
                match status.as_u16() {
                    400 => ListProductsResponse::BadRequest(json),
                    _ => ListProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a new product
    ///
    /// The key is assigned by the catalog; any `product_key` in the body is ignored.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(
        &self,
        req: &Request,
        body: Json<ProductRequest>,
    ) -> CreateProductResponse {
        let path = req.uri().path();
        let result = match ProductDetails::new(body.0.into()) {
            Ok(details) => {
                self.create_use_case
                    .execute(CreateProductParams { details })
                    .await
            }
            Err(errors) => Err(ProductError::Validation(errors)),
        };

        match result {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response(path);
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Product count per brand
    ///
    /// One entry per distinct brand, most common first.
    #[oai(
        path = "/products/brand-summary",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn brand_summary(&self, req: &Request) -> BrandSummaryListResponse {
        match self.brand_summary_use_case.execute().await {
            Ok(summary) => BrandSummaryListResponse::Ok(Json(
                summary.into_iter().map(BrandSummaryResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response(req.uri().path());
                BrandSummaryListResponse::InternalError(json)
            }
        }
    }

    /// Get a product by key
    #[oai(path = "/products/:key", method = "get", tag = "ApiTags::Products")]
    async fn get_product(&self, req: &Request, key: Path<String>) -> GetProductResponse {
        let path = req.uri().path();
        let result = match ProductKey::parse(&key.0) {
            Ok(key) => self
                .get_by_key_use_case
                .execute(GetProductByKeyParams { key })
                .await
                .and_then(|product| product.ok_or(ProductError::NotFound(key))),
            Err(err) => Err(err.into()),
        };

        match result {
            Ok(product) => GetProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response(path);
                match status.as_u16() {
                    400 => GetProductResponse::BadRequest(json),
                    404 => GetProductResponse::NotFound(json),
                    _ => GetProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Replace a product
    ///
    /// Overwrites every mutable field of an existing product.
    #[oai(path = "/products/:key", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        req: &Request,
        key: Path<String>,
        body: Json<ProductRequest>,
    ) -> UpdateProductResponse {
        let path = req.uri().path();
        let result = match ProductKey::parse(&key.0) {
            Ok(key) => match ProductDetails::new(body.0.into()) {
                Ok(details) => {
                    self.update_use_case
                        .execute(UpdateProductParams { key, details })
                        .await
                }
                Err(errors) => Err(ProductError::Validation(errors)),
            },
            Err(err) => Err(err.into()),
        };

        match result {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response(path);
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    #[oai(path = "/products/:key", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, req: &Request, key: Path<String>) -> DeleteProductResponse {
        let path = req.uri().path();
        let result = match ProductKey::parse(&key.0) {
            Ok(key) => {
                self.delete_use_case
                    .execute(DeleteProductParams { key })
                    .await
            }
            Err(err) => Err(err.into()),
        };

        match result {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response(path);
                match status.as_u16() {
                    400 => DeleteProductResponse::BadRequest(json),
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductPageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum BrandSummaryListResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<BrandSummaryResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
