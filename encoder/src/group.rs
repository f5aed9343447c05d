use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use rust_da_bn254_primitives::errors::KzgError;

use crate::kzg::KzgEncoder;
use crate::rs::EncodingParams;
use crate::srs::SRS;

/// Configuration of the encoder group: where the trusted setup lives and how
/// much of it to load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KzgConfig {
    pub g1_path: String,
    pub g2_path: String,
    pub srs_order: u32,
    pub srs_points_to_load: u32,
}

/// Shares one SRS across every encoding configuration and caches the
/// per-configuration encoders, which are expensive to construct.
///
/// The cache is a read-mostly map: lookups take the read lock, and a miss
/// re-checks under the write lock so concurrent first users construct each
/// encoder exactly once.
#[derive(Debug)]
pub struct EncoderGroup {
    srs: Arc<SRS>,
    encoders: RwLock<HashMap<EncodingParams, Arc<KzgEncoder>>>,
}

impl EncoderGroup {
    pub fn new(config: &KzgConfig) -> Result<Self, KzgError> {
        let srs = SRS::new(
            &config.g1_path,
            &config.g2_path,
            config.srs_order,
            config.srs_points_to_load,
        )?;
        Ok(Self::from_srs(srs))
    }

    pub fn from_srs(srs: SRS) -> Self {
        EncoderGroup {
            srs: Arc::new(srs),
            encoders: RwLock::new(HashMap::new()),
        }
    }

    pub fn srs(&self) -> Arc<SRS> {
        self.srs.clone()
    }

    /// Returns the cached encoder for `params`, constructing it on first
    /// use.
    pub fn get_or_create(&self, params: EncodingParams) -> Result<Arc<KzgEncoder>, KzgError> {
        {
            let encoders = self
                .encoders
                .read()
                .map_err(|_| KzgError::GenericError("encoder cache lock poisoned".to_string()))?;
            if let Some(encoder) = encoders.get(&params) {
                return Ok(encoder.clone());
            }
        }

        let mut encoders = self
            .encoders
            .write()
            .map_err(|_| KzgError::GenericError("encoder cache lock poisoned".to_string()))?;
        if let Some(encoder) = encoders.get(&params) {
            return Ok(encoder.clone());
        }

        debug!(
            "constructing encoder for {} chunks of length {}",
            params.num_chunks, params.chunk_len
        );
        let encoder = Arc::new(KzgEncoder::new(params, self.srs.clone())?);
        encoders.insert(params, encoder.clone());
        Ok(encoder)
    }
}
