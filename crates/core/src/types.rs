/// Invoice primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Calendar dates (`add_date`, `paid_date`) carry no time component.
pub type Date = chrono::NaiveDate;

/// The current UTC calendar date.
pub fn today() -> Date {
    chrono::Utc::now().date_naive()
}
