//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for persistence, with a layered
//! architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, access control, DTO conversion
//! - **Service Layer** (`service/`) - Business rules and orchestration
//! - **Data Layer** (`data/`) - Repositories over SeaORM entities
//! - **Model Layer** (`model/`) - Domain models and operation parameters
//! - **Error Layer** (`error/`) - Application errors and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication guard
//!
//! Supporting modules:
//!
//! - **Configuration** (`config`) - Environment-based settings
//! - **State** (`state`) - Shared state handed to every handler
//! - **Startup** (`startup`) - Database, integrations and admin bootstrap
//! - **Router** (`router`) - Route table and OpenAPI document
//! - **Scheduler** (`scheduler/`) - Abandoned-cart recovery job
//! - **Integration** (`integration/`) - Payment gateway, LLM and mail clients
//!
//! # Request Flow
//!
//! 1. **Router** routes the request to a controller
//! 2. **Controller** checks access with `AuthGuard`, converts the DTO into params
//! 3. **Service** applies business rules and calls repositories
//! 4. **Data** queries the database; the service converts entities into domain models
//! 5. **Controller** converts the domain result into a DTO response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod integration;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
