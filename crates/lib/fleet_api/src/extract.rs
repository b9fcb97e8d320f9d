//! Request extractors.
//!
//! Thin wrappers over axum's extractors whose rejections become
//! [`AppError::MalformedInput`] (400 with an `{error, message}` body) instead
//! of axum's plain-text responses.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON body extractor. Also rejects a missing or wrong content type with 400
/// rather than axum's default 415.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Path parameter extractor, e.g. a non-numeric `{id}`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParam<T>(pub T);

/// Query string extractor, e.g. a non-numeric `page`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct QueryParams<T>(pub T);
