//! Shared test infrastructure for the domain crates.
//!
//! - `TestDatabase`: disposable PostgreSQL container with the schema migrated
//!   (feature: "postgres", on by default)
//! - `TestDataBuilder`: deterministic names and text derived from a test name
//! - `assertions`: small assertion helpers
//!
//! ```rust,ignore
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! #[ignore = "requires Docker"]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_postgres_test");
//!     let name = builder.name("project", "main");
//! }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Seeded data generator so reruns of a test produce identical rows.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seeds the builder from a hash of the test name.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let a = TestDataBuilder::from_test_name("test_create_project");
    /// let b = TestDataBuilder::from_test_name("test_create_project");
    /// assert_eq!(a.name("project", "x"), b.name("project", "x"));
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// `"test-<prefix>-<seed % 100000>-<suffix>"`, short enough for a
    /// 100-character name column.
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed % 100_000, suffix)
    }

    /// Exactly `len` characters of filler text.
    pub fn text(&self, len: usize) -> String {
        let alphabet: Vec<char> = "abcdefghijklmnopqrstuvwxyz".chars().collect();
        (0..len)
            .map(|i| alphabet[(self.seed as usize).wrapping_add(i) % alphabet.len()])
            .collect()
    }
}

pub mod assertions {
    use std::fmt::Debug;

    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Asserts ids are strictly increasing, i.e. rows come back in
    /// insertion order.
    pub fn assert_ascending<T: PartialOrd + Debug>(ids: &[T], context: &str) {
        assert!(
            ids.windows(2).all(|w| w[0] < w[1]),
            "{}: expected ascending ids, got {:?}",
            context,
            ids
        );
    }
}
