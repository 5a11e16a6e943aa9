//! HTTP surface: request handlers mounted by `CustomerServer::build_router`

pub mod handlers;
