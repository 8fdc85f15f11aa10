//! # Access-Gated Registry Service
//!
//! Owns the publisher set, the record table and the enumeration order.
//! Both monotone structures are write-once per element: there is no
//! transition out of "registered" or "authorized".

use crate::adapters::SystemClock;
use crate::domain::identity::{resolve_origin, CallOrigin};
use crate::domain::record::ContentRecord;
use crate::errors::RegistryError;
use crate::events::{ContentRegistered, PublisherAdded, RegistryEvent};
use crate::ports::Clock;
use crate::wire::{self, RegistryCall, RegistryResponse};
use shared_types::{Address, CallOutcome, CallRequest, Callee};
use std::collections::{HashMap, HashSet};
use tracing::{info, warn};

/// The access-gated registry component.
///
/// Mutating operations take `&mut self`: one complete operation at a time,
/// and a failing operation leaves no partial writes behind.
pub struct AccessGatedRegistry {
    owner: Address,
    trusted_forwarder: Option<Address>,
    publishers: HashSet<Address>,
    records: HashMap<String, ContentRecord>,
    hashes: Vec<String>,
    events: Vec<RegistryEvent>,
    clock: Box<dyn Clock>,
}

impl AccessGatedRegistry {
    /// Creates a registry with the wall clock as its time source.
    ///
    /// `trusted_forwarder` is fixed for the lifetime of the component;
    /// `None` configures a direct-only deployment.
    #[must_use]
    pub fn new(owner: Address, trusted_forwarder: Option<Address>) -> Self {
        Self::with_clock(owner, trusted_forwarder, Box::new(SystemClock))
    }

    /// Creates a registry with an explicit time source.
    #[must_use]
    pub fn with_clock(
        owner: Address,
        trusted_forwarder: Option<Address>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            owner,
            trusted_forwarder,
            publishers: HashSet::new(),
            records: HashMap::new(),
            hashes: Vec::new(),
            events: Vec::new(),
            clock,
        }
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    /// Grants publisher membership. Owner-only.
    pub fn add_publisher(
        &mut self,
        origin: &CallOrigin,
        publisher: Address,
    ) -> Result<(), RegistryError> {
        if origin.sender() != self.owner {
            warn!(sender = %origin.sender(), "add_publisher from non-owner");
            return Err(RegistryError::Unauthorized);
        }
        if publisher.is_zero() {
            return Err(RegistryError::InvalidIdentity);
        }
        if !self.publishers.insert(publisher) {
            return Err(RegistryError::AlreadyRegistered);
        }

        info!(publisher = %publisher, "publisher added");
        self.events
            .push(RegistryEvent::PublisherAdded(PublisherAdded { publisher }));
        Ok(())
    }

    /// Creates a content record. Publisher-only; one record per hash, ever.
    pub fn register_content(
        &mut self,
        origin: &CallOrigin,
        hash: String,
        title: String,
        description: String,
    ) -> Result<(), RegistryError> {
        let publisher = origin.sender();
        if !self.publishers.contains(&publisher) {
            warn!(sender = %publisher, "register_content from non-publisher");
            return Err(RegistryError::Unauthorized);
        }
        if hash.is_empty() {
            return Err(RegistryError::EmptyHash);
        }
        if self.records.contains_key(&hash) {
            return Err(RegistryError::DuplicateHash);
        }

        let created_at = self.clock.unix_timestamp();
        self.records.insert(
            hash.clone(),
            ContentRecord {
                publisher,
                title: title.clone(),
                description: description.clone(),
                created_at,
            },
        );
        self.hashes.push(hash.clone());

        info!(hash = %hash, publisher = %publisher, "content registered");
        self.events
            .push(RegistryEvent::ContentRegistered(ContentRegistered {
                hash,
                publisher,
                title,
                description,
                created_at,
            }));
        Ok(())
    }

    // =========================================================================
    // VIEWS
    // =========================================================================

    /// All content hashes in registration order.
    #[must_use]
    pub fn get_all_hashes(&self) -> &[String] {
        &self.hashes
    }

    /// The record for `hash`.
    pub fn get_content_data(&self, hash: &str) -> Result<&ContentRecord, RegistryError> {
        self.records.get(hash).ok_or(RegistryError::NotFound)
    }

    /// Whether `identity` is a member of the publisher set.
    #[must_use]
    pub fn is_publisher(&self, identity: Address) -> bool {
        self.publishers.contains(&identity)
    }

    /// The owner identity fixed at construction.
    #[must_use]
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// The trusted forwarder, if one is configured.
    #[must_use]
    pub fn trusted_forwarder(&self) -> Option<Address> {
        self.trusted_forwarder
    }

    /// Whether `address` is the configured trusted forwarder.
    #[must_use]
    pub fn is_trusted_forwarder(&self, address: Address) -> bool {
        self.trusted_forwarder == Some(address)
    }

    /// Number of registered content records.
    #[must_use]
    pub fn content_count(&self) -> usize {
        self.hashes.len()
    }

    /// Events emitted so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[RegistryEvent] {
        &self.events
    }

    // =========================================================================
    // RAW-CALL DISPATCH
    // =========================================================================

    fn apply(
        &mut self,
        origin: &CallOrigin,
        call: RegistryCall,
    ) -> Result<RegistryResponse, RegistryError> {
        match call {
            RegistryCall::AddPublisher { publisher } => {
                self.add_publisher(origin, publisher)?;
                Ok(RegistryResponse::Ack)
            }
            RegistryCall::RegisterContent {
                hash,
                title,
                description,
            } => {
                self.register_content(origin, hash, title, description)?;
                Ok(RegistryResponse::Ack)
            }
            RegistryCall::GetAllHashes => Ok(RegistryResponse::Hashes(self.hashes.clone())),
            RegistryCall::GetContentData { hash } => self
                .get_content_data(&hash)
                .map(|record| RegistryResponse::Content(record.clone())),
        }
    }
}

impl Callee for AccessGatedRegistry {
    /// Raw-call entry point: resolves the acting identity once, decodes the
    /// effective payload and applies the call. Failures revert with the
    /// encoded error as revert data.
    fn call(&mut self, request: CallRequest) -> CallOutcome {
        let (origin, payload) =
            resolve_origin(self.trusted_forwarder, request.caller, request.input.as_slice());

        let call = match wire::decode_call(payload) {
            Ok(call) => call,
            Err(error) => return CallOutcome::revert(wire::encode_error(&error)),
        };

        match self.apply(&origin, call) {
            Ok(response) => CallOutcome::success(wire::encode_response(&response)),
            Err(error) => CallOutcome::revert(wire::encode_error(&error)),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
