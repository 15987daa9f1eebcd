use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DietError {
    #[error("calendar grid for year {year} falls outside the representable date range")]
    GridOutOfRange { year: i32 },
}
