pub mod short_id;

pub use short_id::{IdGenerator, ShortIdGenerator, MAX_ID_LEN};
