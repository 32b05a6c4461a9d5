/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///      data.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset  │  column names, rows of CellValue
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
