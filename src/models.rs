pub mod auth;
pub mod contact;
pub mod notification;
pub mod order;
pub mod product;
pub mod seller;
pub mod stats;
