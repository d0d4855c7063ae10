//! Hardware Catalog Test Utils
//!
//! Provides shared testing utilities for the hardware catalog. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases and customizable table
//! schemas, plus fixtures and factories for catalog records.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **fixture**: In-memory entity models, nothing is inserted
//! - **factory**: Entity builders that insert rows
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_brands() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let brand = factory::create_brand(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
