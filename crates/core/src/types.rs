/// Stored documents are keyed by UUIDv7 so ids sort by creation time.
pub type ResourceId = uuid::Uuid;

/// Identity ids come from the token issuer and are treated as opaque strings.
pub type IdentityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Mint a fresh, time-ordered document id.
pub fn new_resource_id() -> ResourceId {
    uuid::Uuid::now_v7()
}
