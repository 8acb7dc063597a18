//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define WHAT the views need to read, but NOT how it's
//! fetched. That's the adapter's job.
//!
//! ```text
//! Domain Layer             │  Adapter Layer
//! ─────────────────────────┼────────────────────────
//! trait PortfolioRepository│  HttpPortfolio
//!   fn profile()           │  InMemoryPortfolio
//!   fn projects()          │
//!   fn search()            │
//! ```

pub mod portfolio_repository;
