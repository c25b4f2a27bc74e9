//! Upload pipeline: validate, upload image, upload metadata, build the pool
//! transaction, respond.
//!
//! Each step consumes the previous step's output, so the steps run strictly
//! in sequence. A failure ends the request; nothing is retried and objects
//! already written are left in place.

use super::stage::{PipelineStage, StageTrail};
use crate::core::{
    CreatePoolParams, DataUri, ImageUploadFailure, ObjectStore, PoolTransactionBuilder,
    StoredAsset, TokenMetadata, UnsignedTransaction, UploadError, UploadRequest, UploadResponse,
    ValidatedUpload,
};
use axum::http::Method;
use base64::Engine;
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Content type of the metadata JSON object
pub const METADATA_CONTENT_TYPE: &str = "application/json";

/// Settings the pipeline needs from configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSettings {
    /// Base URL that object keys are appended to, without trailing slash
    pub public_base_url: String,
    /// Pool configuration account handed to the builder
    pub pool_config_key: String,
}

impl PipelineSettings {
    pub fn new(public_base_url: &str, pool_config_key: &str) -> Self {
        Self {
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
            pool_config_key: pool_config_key.to_string(),
        }
    }
}

/// Result of a run plus the stages it went through
#[derive(Debug)]
pub struct PipelineOutcome {
    pub result: Result<UploadResponse, UploadError>,
    pub trail: StageTrail,
}

/// Request-scoped upload/build pipeline
#[derive(Clone)]
pub struct UploadPipeline {
    store: Arc<dyn ObjectStore>,
    builder: Arc<dyn PoolTransactionBuilder>,
    settings: PipelineSettings,
}

impl UploadPipeline {
    pub fn new(
        store: Arc<dyn ObjectStore>,
        builder: Arc<dyn PoolTransactionBuilder>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            store,
            builder,
            settings,
        }
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Only `POST` is accepted
    pub fn validate_method(method: &Method) -> Result<(), UploadError> {
        if method == Method::POST {
            Ok(())
        } else {
            Err(UploadError::MethodNotAllowed)
        }
    }

    /// Require every field; empty strings count as missing
    pub fn validate(request: UploadRequest) -> Result<ValidatedUpload, UploadError> {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        match (
            present(request.token_logo),
            present(request.token_name),
            present(request.token_symbol),
            present(request.mint),
            present(request.user_wallet),
        ) {
            (
                Some(token_logo),
                Some(token_name),
                Some(token_symbol),
                Some(mint),
                Some(user_wallet),
            ) => Ok(ValidatedUpload {
                token_logo,
                token_name,
                token_symbol,
                mint,
                user_wallet,
            }),
            _ => Err(UploadError::MissingFields),
        }
    }

    /// Public URL of an object key
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.settings.public_base_url, key)
    }

    /// Decode the logo data URI and store it as `images/<mint>.<ext>`
    pub async fn upload_image(&self, upload: &ValidatedUpload) -> Result<StoredAsset, UploadError> {
        let data_uri = DataUri::parse(&upload.token_logo)
            .ok_or(UploadError::ImageUpload(ImageUploadFailure::MalformedDataUri))?;

        let key = format!("images/{}.{}", upload.mint, data_uri.extension());
        let content_type = data_uri.content_type.clone();

        self.store
            .put(&key, data_uri.bytes, &content_type)
            .await
            .map_err(|e| {
                error!("Image upload failed for {}: {}", key, e);
                UploadError::ImageUpload(ImageUploadFailure::Storage(e))
            })?;

        Ok(StoredAsset {
            url: self.public_url(&key),
            key,
            content_type,
        })
    }

    /// Store `{name, symbol, image}` as `metadata/<mint>.json`
    pub async fn upload_metadata(
        &self,
        upload: &ValidatedUpload,
        image_url: &str,
    ) -> Result<StoredAsset, UploadError> {
        let metadata = TokenMetadata {
            name: upload.token_name.clone(),
            symbol: upload.token_symbol.clone(),
            image: image_url.to_string(),
        };
        let body = serde_json::to_vec_pretty(&metadata)
            .map_err(|e| UploadError::Internal(e.to_string()))?;
        let key = format!("metadata/{}.json", upload.mint);

        self.store
            .put(&key, body, METADATA_CONTENT_TYPE)
            .await
            .map_err(|e| {
                error!("Metadata upload failed for {}: {}", key, e);
                UploadError::MetadataUpload(e)
            })?;

        Ok(StoredAsset {
            url: self.public_url(&key),
            key,
            content_type: METADATA_CONTENT_TYPE.to_string(),
        })
    }

    /// Build the pool transaction and stamp fee payer and blockhash on it
    pub async fn build_transaction(
        &self,
        upload: &ValidatedUpload,
        metadata_url: &str,
    ) -> Result<Box<dyn UnsignedTransaction>, UploadError> {
        let params = CreatePoolParams {
            config: self.settings.pool_config_key.clone(),
            base_mint: upload.mint.clone(),
            name: upload.token_name.clone(),
            symbol: upload.token_symbol.clone(),
            uri: metadata_url.to_string(),
            payer: upload.user_wallet.clone(),
            pool_creator: upload.user_wallet.clone(),
        };

        let mut transaction = self.builder.create_pool(&params).await?;
        let blockhash = self.builder.latest_blockhash().await?;
        transaction.set_fee_payer(&upload.user_wallet)?;
        transaction.set_recent_blockhash(blockhash);

        Ok(transaction)
    }

    /// Serialize for the response, leaving signatures empty
    pub fn respond(
        metadata_url: String,
        transaction: &dyn UnsignedTransaction,
    ) -> Result<UploadResponse, UploadError> {
        let bytes = transaction.serialize_unsigned()?;
        Ok(UploadResponse {
            success: true,
            metadata_url,
            pool_tx: base64::engine::general_purpose::STANDARD.encode(bytes),
        })
    }

    /// Run the whole pipeline for one request
    pub async fn run(&self, request: UploadRequest) -> Result<UploadResponse, UploadError> {
        self.run_traced(request).await.result
    }

    /// Run the whole pipeline and keep the stage trail
    #[instrument(skip_all, fields(mint = request.mint.as_deref().unwrap_or_default()))]
    pub async fn run_traced(&self, request: UploadRequest) -> PipelineOutcome {
        let mut trail = StageTrail::start();
        let result = self.drive(request, &mut trail).await;

        match &result {
            Ok(response) => info!("Pool transaction ready, metadata at {}", response.metadata_url),
            Err(e) => {
                trail.fail();
                error!(
                    "Pool creation error during {}: {} ({:?})",
                    trail.last_active(),
                    e,
                    e.category()
                );
            }
        }

        PipelineOutcome { result, trail }
    }

    async fn drive(
        &self,
        request: UploadRequest,
        trail: &mut StageTrail,
    ) -> Result<UploadResponse, UploadError> {
        debug_assert_eq!(trail.current(), PipelineStage::Validating);
        let upload = Self::validate(request)?;
        trail.advance();

        let image = self.upload_image(&upload).await?;
        trail.advance();

        let metadata = self.upload_metadata(&upload, &image.url).await?;
        trail.advance();

        let transaction = self.build_transaction(&upload, &metadata.url).await?;
        trail.advance();

        Self::respond(metadata.url, transaction.as_ref())
    }
}
