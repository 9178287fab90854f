// SPDX-FileCopyrightText: 2026 mafiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Record byte source trait.

use async_trait::async_trait;

use crate::error::BoxError;

/// Fetches the raw content of a maFile by its manifest `filename`.
///
/// For encrypted manifests the content is base64 text; for plaintext
/// manifests it is the JSON document itself.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch the complete content of `filename`.
    async fn fetch(&self, filename: &str) -> Result<Vec<u8>, BoxError>;
}

#[async_trait]
impl<T: RecordSource + ?Sized> RecordSource for &T {
    async fn fetch(&self, filename: &str) -> Result<Vec<u8>, BoxError> {
        (**self).fetch(filename).await
    }
}
