//! Expiry-aware inventory batch tracking with FIFO depletion
//!
//! Given the inventory catalog, purchase invoices, and sales invoices,
//! this crate resolves each item's stock into dated expiry batches,
//! simulates consumption against the oldest valid batch first, and
//! derives a per-item expiry status.
//!
//! The whole computation is pure and synchronous: the same inputs and
//! report date always produce the same report, with no I/O and no state
//! carried between invocations. Malformed historical data (unparseable
//! dates, dangling item references, over-returns) degrades gracefully
//! instead of failing the report.

pub mod config;
pub mod date;
pub mod depletion;
pub mod error;
pub mod report;
pub mod resolver;

pub use config::{ReportConfig, DEFAULT_ALERT_THRESHOLD_DAYS};
pub use error::{EngineError, EngineResult};
pub use report::{build_report, ExpiryReport, ItemExpiryReport, ReportSummary};
pub use resolver::BatchResolver;
