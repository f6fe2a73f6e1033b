//! Values shared by every mock film served or inserted during tests.

/// Director reported for every mock film.
pub static MOCK_DIRECTOR: &str = "George Lucas";

/// Producer reported for every mock film.
pub static MOCK_PRODUCER: &str = "Gary Kurtz, Rick McCallum";

/// Release date reported for every mock film.
pub static MOCK_RELEASE_DATE: &str = "1977-05-25";
