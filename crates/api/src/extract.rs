//! Extractors whose rejections go through [`AppError`].
//!
//! Axum's stock `Json` and `Path` reject with plain-text bodies. These
//! wrappers reuse them but turn the rejection into a 422 JSON error so every
//! failure shares one envelope.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `axum::Json` with [`AppError`] as its rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Path` with [`AppError`] as its rejection.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
