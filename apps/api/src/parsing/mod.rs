// Resume intake: document bytes → plain text → candidate records.

pub mod fields;
pub mod resume;
pub mod text;
