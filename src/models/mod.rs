pub mod commit;
pub mod issue;
pub mod record;

pub use commit::*;
pub use issue::*;
pub use record::*;
