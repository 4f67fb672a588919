//! HTTP layer — `GameHttp`, the single request pipeline every API call goes through.

pub mod client;

pub use client::{GameHttp, RequestOptions};
