use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{BrandSummary, Product, ProductDetails};
use business::domain::product::paging::{Page, PageRequest, Sort, SortField};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductKey;

use super::entity::{BrandSummaryEntity, ProductEntity};

const COLUMNS: &str =
    "product_key, retailer, brand, model, product_name, product_description, price";

const SEARCH_PREDICATE: &str = r"product_name ILIKE $1 ESCAPE '\' OR brand ILIKE $1 ESCAPE '\' OR model ILIKE $1 ESCAPE '\'";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Logs the driver error and hides it behind [`RepositoryError::DatabaseError`].
fn database_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> RepositoryError {
    move |e| {
        tracing::error!(error = %e, operation, "product query failed");
        RepositoryError::DatabaseError
    }
}

/// `ORDER BY` built from the closed set of sortable columns, with the key as tiebreaker.
fn order_clause(sort: &Sort) -> String {
    let mut clause = format!(
        "ORDER BY {} {}",
        sort.field.column(),
        sort.direction.keyword()
    );
    if sort.field != SortField::ProductKey {
        clause.push_str(", product_key ASC");
    }
    clause
}

/// Wraps a search term in `%` after escaping LIKE metacharacters, so it matches literally.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn to_count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or_default()
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn create(&self, details: &ProductDetails) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "INSERT INTO products (retailer, brand, model, product_name, product_description, price)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COLUMNS}"
        ))
        .bind(details.retailer())
        .bind(details.brand())
        .bind(details.model())
        .bind(details.name())
        .bind(details.description())
        .bind(details.price())
        .fetch_one(&self.pool)
        .await
        .map_err(database_error("create"))?;

        Ok(entity.into_domain())
    }

    async fn get_by_key(&self, key: ProductKey) -> Result<Option<Product>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {COLUMNS} FROM products WHERE product_key = $1"
        ))
        .bind(key.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error("get_by_key"))?;

        Ok(entity.map(ProductEntity::into_domain))
    }

    async fn update(
        &self,
        key: ProductKey,
        details: &ProductDetails,
    ) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "UPDATE products SET
                retailer = $1,
                brand = $2,
                model = $3,
                product_name = $4,
                product_description = $5,
                price = $6
            WHERE product_key = $7
            RETURNING {COLUMNS}"
        ))
        .bind(details.retailer())
        .bind(details.brand())
        .bind(details.model())
        .bind(details.name())
        .bind(details.description())
        .bind(details.price())
        .bind(key.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error("update"))?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn delete(&self, key: ProductKey) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE product_key = $1")
            .bind(key.value())
            .execute(&self.pool)
            .await
            .map_err(database_error("delete"))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn list(&self, request: &PageRequest) -> Result<Page<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {COLUMNS} FROM products {} LIMIT $1 OFFSET $2",
            order_clause(&request.sort)
        ))
        .bind(request.limit())
        .bind(request.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(database_error("list"))?;

        let total = self.count().await?;

        Ok(Page::new(
            entities.into_iter().map(|e| e.into_domain()).collect(),
            total,
            request,
        ))
    }

    async fn search(
        &self,
        term: &str,
        request: &PageRequest,
    ) -> Result<Page<Product>, RepositoryError> {
        let pattern = contains_pattern(term);

        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {COLUMNS} FROM products WHERE {SEARCH_PREDICATE} {} LIMIT $2 OFFSET $3",
            order_clause(&request.sort)
        ))
        .bind(&pattern)
        .bind(request.limit())
        .bind(request.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(database_error("search"))?;

        let total = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM products WHERE {SEARCH_PREDICATE}"
        ))
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error("search_count"))?;

        Ok(Page::new(
            entities.into_iter().map(|e| e.into_domain()).collect(),
            to_count(total),
            request,
        ))
    }

    async fn brand_summary(&self) -> Result<Vec<BrandSummary>, RepositoryError> {
        let entities = sqlx::query_as::<_, BrandSummaryEntity>(
            "SELECT brand, COUNT(*) AS count FROM products GROUP BY brand ORDER BY count DESC, brand ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error("brand_summary"))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(database_error("count"))?;

        Ok(to_count(total))
    }

    async fn create_all(&self, products: &[ProductDetails]) -> Result<u64, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(database_error("create_all"))?;

        for details in products {
            sqlx::query(
                "INSERT INTO products (retailer, brand, model, product_name, product_description, price)
                VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(details.retailer())
            .bind(details.brand())
            .bind(details.model())
            .bind(details.name())
            .bind(details.description())
            .bind(details.price())
            .execute(&mut *tx)
            .await
            .map_err(database_error("create_all"))?;
        }

        tx.commit().await.map_err(database_error("create_all"))?;

        Ok(products.len() as u64)
    }
}
