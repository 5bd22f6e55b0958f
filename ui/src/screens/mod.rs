// This file makes the screen modules available to the rest of the application.

pub mod apis;
pub mod approvals;
pub mod balances;
pub mod events;
pub mod pool_details;
pub mod pools;
pub mod timeline;
pub mod transactions;
pub mod transfers;
