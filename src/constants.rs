// How many slots every set has. Placement is `abs(value) % BUCKET_COUNT`.
pub const BUCKET_COUNT: usize = 10;

// Marks an unoccupied slot. Never a legal element.
pub const EMPTY_VALUE: i32 = -1;
