/// Data layer: core types, loading, cleaning, and column classification.
///
/// Architecture:
/// ```text
///   .csv / .xlsx
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse bytes → Dataset (type inference per column)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ cleaning  │  age-like columns → first digit run as a number
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ classify  │  numeric / categorical / excluded column names
///   └──────────┘
/// ```

pub mod classify;
pub mod cleaning;
pub mod error;
pub mod loader;
pub mod model;
