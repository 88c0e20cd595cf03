//! Test helper module
//!
//! Provides mock collaborators and convenient test factory methods.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{ForsaleError, ForsaleResult};
use crate::services::ForSaleService;
use crate::traits::{IdnCodec, TxtResolver};

// ===== MockIdnCodec =====

pub struct MockIdnCodec {
    /// unicode -> ascii
    mappings: Vec<(String, String)>,
    /// If true, every conversion fails
    fail: bool,
    calls: AtomicUsize,
}

impl MockIdnCodec {
    /// Returns every input unchanged
    pub fn identity() -> Self {
        Self {
            mappings: Vec::new(),
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Fails every conversion
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::identity()
        }
    }

    pub fn with_mapping(mut self, unicode: &str, ascii: &str) -> Self {
        self.mappings.push((unicode.to_string(), ascii.to_string()));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn convert(&self, domain: &str, to_ascii: bool) -> ForsaleResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ForsaleError::Idn(format!("cannot convert {domain}")));
        }
        let mapped = self.mappings.iter().find_map(|(unicode, ascii)| {
            match (to_ascii, domain == unicode, domain == ascii) {
                (true, true, _) => Some(ascii.clone()),
                (false, _, true) => Some(unicode.clone()),
                _ => None,
            }
        });
        Ok(mapped.unwrap_or_else(|| domain.to_string()))
    }
}

impl IdnCodec for MockIdnCodec {
    fn to_ascii(&self, domain: &str) -> ForsaleResult<String> {
        self.convert(domain, true)
    }

    fn to_unicode(&self, domain: &str) -> ForsaleResult<String> {
        self.convert(domain, false)
    }
}

// ===== MockTxtResolver =====

/// Serves canned responses; unknown names answer with `NoRecords`.
pub struct MockTxtResolver {
    responses: HashMap<String, ForsaleResult<Vec<String>>>,
    lookups: RwLock<Vec<String>>,
}

impl MockTxtResolver {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            lookups: RwLock::new(Vec::new()),
        }
    }

    pub fn with_records(mut self, name: &str, records: &[&str]) -> Self {
        self.responses.insert(
            name.to_string(),
            Ok(records.iter().map(ToString::to_string).collect()),
        );
        self
    }

    pub fn with_error(mut self, name: &str, error: ForsaleError) -> Self {
        self.responses.insert(name.to_string(), Err(error));
        self
    }

    /// Names looked up so far, in call order
    pub async fn lookups(&self) -> Vec<String> {
        self.lookups.read().await.clone()
    }
}

#[async_trait]
impl TxtResolver for MockTxtResolver {
    async fn lookup_txt(&self, name: &str) -> ForsaleResult<Vec<String>> {
        self.lookups.write().await.push(name.to_string());
        self.responses
            .get(name)
            .cloned()
            .unwrap_or_else(|| Err(ForsaleError::NoRecords(name.to_string())))
    }
}

// ===== Factory =====

/// Service with an identity IDN codec and the given resolver
pub fn create_test_service(resolver: Arc<MockTxtResolver>) -> ForSaleService {
    ForSaleService::new(Arc::new(MockIdnCodec::identity()), resolver)
}
