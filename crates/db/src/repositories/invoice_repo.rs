//! Repository for the `invoices` table.

use biztime_core::payment::next_paid_date;
use biztime_core::types::{Date, DbId};
use sqlx::PgPool;

use crate::models::invoice::{Invoice, InvoiceCompanyRow, UpdateInvoice};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, comp_code, amt, paid, add_date, paid_date";

/// Provides CRUD operations for invoices.
pub struct InvoiceRepo;

impl InvoiceRepo {
    /// List all invoices ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Invoice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM invoices ORDER BY id");
        sqlx::query_as::<_, Invoice>(&query).fetch_all(pool).await
    }

    /// List a company's invoices ordered by id.
    pub async fn list_by_company(
        pool: &PgPool,
        comp_code: &str,
    ) -> Result<Vec<Invoice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM invoices WHERE comp_code = $1 ORDER BY id");
        sqlx::query_as::<_, Invoice>(&query)
            .bind(comp_code)
            .fetch_all(pool)
            .await
    }

    /// Find an invoice by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Invoice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM invoices WHERE id = $1");
        sqlx::query_as::<_, Invoice>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an invoice together with its company.
    pub async fn find_with_company(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<InvoiceCompanyRow>, sqlx::Error> {
        sqlx::query_as::<_, InvoiceCompanyRow>(
            "SELECT i.id, i.comp_code, i.amt, i.paid, i.add_date, i.paid_date, \
                    c.name, c.description \
             FROM invoices AS i \
             INNER JOIN companies AS c ON i.comp_code = c.code \
             WHERE i.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Insert a new unpaid invoice dated today by the database.
    pub async fn create(pool: &PgPool, comp_code: &str, amt: f64) -> Result<Invoice, sqlx::Error> {
        let query = format!(
            "INSERT INTO invoices (comp_code, amt)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(comp_code)
            .bind(amt)
            .fetch_one(pool)
            .await
    }

    /// Update amount and payment state, applying the paid-date rule.
    ///
    /// The current `paid_date` is read with `FOR UPDATE` and the new row is
    /// written in the same transaction, so concurrent updates serialize.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_payment(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInvoice,
        today: Date,
    ) -> Result<Option<Invoice>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let current = sqlx::query_scalar::<_, Option<Date>>(
            "SELECT paid_date FROM invoices WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(current) = current else {
            return Ok(None);
        };

        let paid_date = next_paid_date(current, input.paid, today);

        let query = format!(
            "UPDATE invoices SET amt = $2, paid = $3, paid_date = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let invoice = sqlx::query_as::<_, Invoice>(&query)
            .bind(id)
            .bind(input.amt)
            .bind(input.paid)
            .bind(paid_date)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(invoice))
    }

    /// Delete an invoice by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
