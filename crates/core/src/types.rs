/// Project identifiers are small positive integers assigned in the fixture.
pub type ProjectId = u32;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
