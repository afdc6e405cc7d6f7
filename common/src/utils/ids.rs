use chrono::Utc;
use md5::{Digest, Md5};
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::{Builder, Uuid};

/// Upper bound (exclusive) of the random jitter added to the timestamp.
const TIMESTAMP_JITTER: i64 = 999_999;

/// Random v4 UUID, hyphenated.
pub fn generate_unique_id() -> String {
    Uuid::new_v4().to_string()
}

/// Derives an opaque auth token for `user_name` logging in from `source`.
///
/// The token is a name-based UUID over the user name, the source and the
/// current time in milliseconds, so it is unique per login.
pub fn create_user_auth_token(user_name: &str, source: &str) -> String {
    let data = format!("{user_name}{source}{}", Utc::now().timestamp_millis());
    name_based_uuid(data.as_bytes()).to_string()
}

/// Version 3 UUID over the MD5 of `data` alone, with no namespace prefix.
pub fn name_based_uuid(data: &[u8]) -> Uuid {
    let hash: [u8; 16] = Md5::digest(data).into();
    Builder::from_md5_bytes(hash).into_uuid()
}

/// Produces numeric ids from the clock, a random jitter and a sequence.
///
/// The sequence belongs to the generator, so independent generators never
/// share state. Share one instance (e.g. behind an `Arc`) where ids must
/// be unique across call sites.
#[derive(Debug, Default)]
pub struct UniqueIdGenerator {
    sequence: AtomicU64,
}

impl UniqueIdGenerator {
    pub const fn new() -> Self {
        Self {
            sequence: AtomicU64::new(0),
        }
    }

    /// Concatenates `environment_id / 10_000_000`, the jittered timestamp
    /// shifted left by 13 bits, and the next sequence number.
    pub fn unique_id_from_timestamp(&self, environment_id: i32) -> String {
        let env = environment_id / 10_000_000;
        let jitter = rand::thread_rng().gen_range(0..TIMESTAMP_JITTER);
        let uid = (Utc::now().timestamp_millis() + jitter) << 13;
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        format!("{env}{uid}{sequence}")
    }

    /// Sequence number the next id will end with.
    pub fn next_sequence(&self) -> u64 {
        self.sequence.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_generate_unique_id_is_v4() {
        let id = generate_unique_id();
        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_ne!(id, generate_unique_id());
    }

    #[test]
    fn test_auth_token_is_v3_uuid() {
        let token = create_user_auth_token("alice", "web");
        let parsed = Uuid::parse_str(&token).unwrap();
        assert_eq!(parsed.get_version_num(), 3);
    }

    #[test]
    fn test_name_based_uuid_hashes_raw_bytes() {
        // MD5("hello") is 5d41402abc4b2a76b9719d911017c592; only the version
        // and variant bits change.
        assert_eq!(
            name_based_uuid(b"hello").to_string(),
            "5d41402a-bc4b-3a76-b971-9d911017c592"
        );
    }

    #[test]
    fn test_timestamp_id_layout() {
        let generator = UniqueIdGenerator::new();
        let id = generator.unique_id_from_timestamp(1);

        assert!(id.chars().all(|c| c.is_ascii_digit()));
        assert!(id.starts_with('0'));
        assert!(id.ends_with('0'));
        assert_eq!(generator.next_sequence(), 1);
    }

    #[test]
    fn test_environment_prefix_uses_integer_division() {
        let generator = UniqueIdGenerator::new();
        let id = generator.unique_id_from_timestamp(30_000_000);
        assert!(id.starts_with('3'));
    }

    #[test]
    fn test_sequence_is_per_generator() {
        let first = UniqueIdGenerator::new();
        let second = UniqueIdGenerator::new();
        first.unique_id_from_timestamp(1);
        first.unique_id_from_timestamp(1);
        assert_eq!(first.next_sequence(), 2);
        assert_eq!(second.next_sequence(), 0);
    }

    #[test]
    fn test_concurrent_sequences_are_distinct() {
        let generator = Arc::new(UniqueIdGenerator::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let generator = Arc::clone(&generator);
                thread::spawn(move || {
                    (0..50)
                        .map(|_| generator.unique_id_from_timestamp(1))
                        .count()
                })
            })
            .collect();

        let total: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(total, 400);
        assert_eq!(generator.next_sequence(), 400);

        let unique: HashSet<String> = (0..100)
            .map(|_| generator.unique_id_from_timestamp(1))
            .collect();
        assert_eq!(unique.len(), 100);
    }
}
